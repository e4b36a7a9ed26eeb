mod core;
mod dml;
mod select;
mod tx;

use std::fmt;
use std::sync::Arc;

use crate::adapter::Adapter;
use crate::descriptor::Descriptor;
use crate::instrument::{Profiler, QueryLogger};

/// Driver-agnostic database connection.
///
/// Owns the adapter and the descriptor it was built from, tracks transaction
/// state, and wraps every statement with the attached logger and profiler.
/// Obtain one through [`crate::factory::factory`] or [`Connection::new`].
pub struct Connection {
    adapter: Box<dyn Adapter>,
    descriptor: Descriptor,
    logger: Option<Arc<dyn QueryLogger>>,
    profiler: Option<Arc<dyn Profiler>>,
    auto_commit: bool,
    under_transaction: bool,
}

impl Connection {
    #[must_use]
    pub fn new(adapter: Box<dyn Adapter>, descriptor: Descriptor) -> Self {
        Self {
            adapter,
            descriptor,
            logger: None,
            profiler: None,
            auto_commit: true,
            under_transaction: false,
        }
    }

    /// Attach a statement logger at construction time.
    #[must_use]
    pub fn with_logger(mut self, logger: Arc<dyn QueryLogger>) -> Self {
        self.logger = Some(logger);
        self
    }

    /// Attach a profiler at construction time.
    #[must_use]
    pub fn with_profiler(mut self, profiler: Arc<dyn Profiler>) -> Self {
        self.profiler = Some(profiler);
        self
    }
}

impl fmt::Debug for Connection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Connection")
            .field("connection_id", &self.adapter.connection_id())
            .field("descriptor", &self.descriptor)
            .field("logger", &self.logger.is_some())
            .field("profiler", &self.profiler.is_some())
            .field("auto_commit", &self.auto_commit)
            .field("under_transaction", &self.under_transaction)
            .finish()
    }
}
