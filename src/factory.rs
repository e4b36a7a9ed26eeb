//! Adapter resolution by name.
//!
//! Adapters register a constructor under a short name (`"Sqlite"`, `"Mysql"`,
//! ...). [`factory`] turns a name plus connection options into a ready
//! [`Connection`]:
//! ```rust,no_run
//! use sql_conduit::prelude::*;
//! use serde_json::json;
//!
//! let conn = factory("Sqlite", json!({ "name": ":memory:" }))?;
//! assert_eq!(conn.database_name(), ":memory:");
//! # Ok::<(), SqlConduitError>(())
//! ```

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::sync::{Arc, LazyLock, RwLock, RwLockReadGuard, RwLockWriteGuard};

use serde_json::{Map, Value as JsonValue};

use crate::adapter::Adapter;
use crate::connection::Connection;
use crate::descriptor::Descriptor;
use crate::error::SqlConduitError;

/// Prefix under which adapter names are reported.
pub const ADAPTER_NAMESPACE: &str = "sql_conduit.adapter";

/// Builds an adapter from a descriptor.
pub type AdapterConstructor =
    Arc<dyn Fn(&Descriptor) -> Result<Box<dyn Adapter>, SqlConduitError> + Send + Sync>;

static DEFAULT_REGISTRY: LazyLock<RwLock<AdapterRegistry>> =
    LazyLock::new(|| RwLock::new(AdapterRegistry::with_builtin_adapters()));

/// Connection options accepted by [`factory`].
#[derive(Debug, Clone)]
pub enum AdapterOptions {
    /// Key/value pairs copied into a fresh descriptor
    Mapping(Vec<(String, JsonValue)>),
    /// A descriptor used as-is
    Descriptor(Descriptor),
    /// A JSON document; only objects are accepted
    Json(JsonValue),
}

impl AdapterOptions {
    /// Resolve the options into the descriptor handed to the adapter.
    ///
    /// # Errors
    /// Returns `SqlConduitError::InvalidOptions` for JSON that is not an object.
    pub fn into_descriptor(self) -> Result<Descriptor, SqlConduitError> {
        match self {
            AdapterOptions::Mapping(pairs) => Ok(pairs.into_iter().collect()),
            AdapterOptions::Descriptor(descriptor) => Ok(descriptor),
            AdapterOptions::Json(JsonValue::Object(map)) => Ok(map.into_iter().collect()),
            AdapterOptions::Json(other) => Err(SqlConduitError::InvalidOptions(format!(
                "options must be a mapping or a descriptor, got {}",
                json_kind(&other)
            ))),
        }
    }
}

fn json_kind(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "a boolean",
        JsonValue::Number(_) => "a number",
        JsonValue::String(_) => "a string",
        JsonValue::Array(_) => "an array",
        JsonValue::Object(_) => "an object",
    }
}

impl From<Descriptor> for AdapterOptions {
    fn from(descriptor: Descriptor) -> Self {
        AdapterOptions::Descriptor(descriptor)
    }
}

impl From<JsonValue> for AdapterOptions {
    fn from(value: JsonValue) -> Self {
        AdapterOptions::Json(value)
    }
}

impl From<Map<String, JsonValue>> for AdapterOptions {
    fn from(map: Map<String, JsonValue>) -> Self {
        AdapterOptions::Mapping(map.into_iter().collect())
    }
}

impl<V: Into<JsonValue>> From<HashMap<String, V>> for AdapterOptions {
    fn from(map: HashMap<String, V>) -> Self {
        AdapterOptions::Mapping(map.into_iter().map(|(k, v)| (k, v.into())).collect())
    }
}

impl<V: Into<JsonValue>> From<BTreeMap<String, V>> for AdapterOptions {
    fn from(map: BTreeMap<String, V>) -> Self {
        AdapterOptions::Mapping(map.into_iter().map(|(k, v)| (k, v.into())).collect())
    }
}

impl<K: Into<String>, V: Into<JsonValue>, const N: usize> From<[(K, V); N]> for AdapterOptions {
    fn from(pairs: [(K, V); N]) -> Self {
        AdapterOptions::Mapping(
            pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Name → constructor table.
#[derive(Clone, Default)]
pub struct AdapterRegistry {
    constructors: HashMap<String, AdapterConstructor>,
}

impl fmt::Debug for AdapterRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdapterRegistry")
            .field("adapters", &self.names())
            .finish()
    }
}

impl AdapterRegistry {
    /// An empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding the adapters compiled into this crate.
    #[must_use]
    pub fn with_builtin_adapters() -> Self {
        #[allow(unused_mut)]
        let mut registry = Self::new();
        #[cfg(feature = "sqlite")]
        registry.register(crate::sqlite::ADAPTER_NAME, crate::sqlite::construct);
        registry
    }

    /// Register (or replace) the constructor for `name`.
    pub fn register<F>(&mut self, name: impl Into<String>, constructor: F)
    where
        F: Fn(&Descriptor) -> Result<Box<dyn Adapter>, SqlConduitError> + Send + Sync + 'static,
    {
        self.constructors.insert(name.into(), Arc::new(constructor));
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.constructors.contains_key(name)
    }

    /// Registered adapter names, sorted.
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.constructors.keys().cloned().collect();
        names.sort();
        names
    }

    fn resolve(&self, name: &str) -> Result<AdapterConstructor, SqlConduitError> {
        self.constructors.get(name).cloned().ok_or_else(|| {
            SqlConduitError::AdapterNotFound(format!("{ADAPTER_NAMESPACE}.{name}"))
        })
    }

    /// Build a connection through the adapter registered as `adapter_name`.
    ///
    /// # Errors
    /// Returns `InvalidAdapterName` for an empty name, `InvalidOptions` for
    /// unusable options, `AdapterNotFound` for an unregistered name, or the
    /// adapter constructor's own error.
    pub fn connect(
        &self,
        adapter_name: &str,
        options: impl Into<AdapterOptions>,
    ) -> Result<Connection, SqlConduitError> {
        let (constructor, descriptor) = self.prepare(adapter_name, options.into())?;
        build_connection(adapter_name, &constructor, descriptor)
    }

    fn prepare(
        &self,
        adapter_name: &str,
        options: AdapterOptions,
    ) -> Result<(AdapterConstructor, Descriptor), SqlConduitError> {
        if adapter_name.trim().is_empty() {
            return Err(SqlConduitError::InvalidAdapterName);
        }
        let descriptor = options.into_descriptor()?;
        let constructor = self.resolve(adapter_name)?;
        Ok((constructor, descriptor))
    }
}

fn build_connection(
    adapter_name: &str,
    constructor: &AdapterConstructor,
    descriptor: Descriptor,
) -> Result<Connection, SqlConduitError> {
    let adapter = constructor(&descriptor)?;
    tracing::debug!(
        adapter = adapter_name,
        connection_id = %adapter.connection_id(),
        "adapter constructed"
    );
    Ok(Connection::new(adapter, descriptor))
}

fn default_registry() -> RwLockReadGuard<'static, AdapterRegistry> {
    match DEFAULT_REGISTRY.read() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}

fn default_registry_mut() -> RwLockWriteGuard<'static, AdapterRegistry> {
    match DEFAULT_REGISTRY.write() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}

/// Register an adapter constructor in the process-wide registry.
pub fn register_adapter<F>(name: impl Into<String>, constructor: F)
where
    F: Fn(&Descriptor) -> Result<Box<dyn Adapter>, SqlConduitError> + Send + Sync + 'static,
{
    let name = name.into();
    tracing::debug!(adapter = %name, "registering adapter");
    default_registry_mut().register(name, constructor);
}

/// Names registered in the process-wide registry.
#[must_use]
pub fn registered_adapters() -> Vec<String> {
    default_registry().names()
}

/// Build a connection through the process-wide registry.
///
/// The registry lock is released before the adapter constructor runs.
///
/// # Errors
/// See [`AdapterRegistry::connect`].
pub fn factory(
    adapter_name: &str,
    options: impl Into<AdapterOptions>,
) -> Result<Connection, SqlConduitError> {
    let (constructor, descriptor) = default_registry().prepare(adapter_name, options.into())?;
    build_connection(adapter_name, &constructor, descriptor)
}
