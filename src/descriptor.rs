use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::connection::Connection;
use crate::error::SqlConduitError;

pub const HOST: &str = "host";
pub const USERNAME: &str = "username";
pub const PASSWORD: &str = "password";
pub const NAME: &str = "name";
pub const SCHEMA: &str = "schema";
pub const PORT: &str = "port";
pub const CHARSET: &str = "charset";

/// Read-only bag of connection parameters.
///
/// Keys are free-form; the well-known ones (`host`, `username`, `name`,
/// `schema`, ...) back the metadata accessors on [`Connection`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Descriptor {
    fields: BTreeMap<String, JsonValue>,
}

impl Descriptor {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a descriptor from a JSON object.
    ///
    /// # Errors
    /// Returns `SqlConduitError::ConfigError` if the text is not a JSON object.
    pub fn from_json_str(json: &str) -> Result<Self, SqlConduitError> {
        Ok(serde_json::from_str(json)?)
    }

    #[must_use]
    pub fn builder() -> DescriptorBuilder {
        DescriptorBuilder::new()
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&JsonValue> {
        self.fields.get(key)
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    /// Text form of a field, or `None` when the key is absent or null.
    #[must_use]
    pub fn get_str(&self, key: &str) -> Option<String> {
        match self.fields.get(key)? {
            JsonValue::Null => None,
            JsonValue::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    #[must_use]
    pub fn get_u16(&self, key: &str) -> Option<u16> {
        match self.fields.get(key)? {
            JsonValue::Number(n) => n.as_u64().and_then(|v| u16::try_from(v).ok()),
            JsonValue::String(s) => s.parse().ok(),
            _ => None,
        }
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for Descriptor
where
    K: Into<String>,
    V: Into<JsonValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Fluent builder for [`Descriptor`].
#[derive(Debug, Clone, Default)]
pub struct DescriptorBuilder {
    fields: BTreeMap<String, JsonValue>,
}

impl DescriptorBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn set(mut self, key: impl Into<String>, value: impl Into<JsonValue>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    #[must_use]
    pub fn host(self, host: impl Into<String>) -> Self {
        self.set(HOST, host.into())
    }

    #[must_use]
    pub fn username(self, username: impl Into<String>) -> Self {
        self.set(USERNAME, username.into())
    }

    #[must_use]
    pub fn password(self, password: impl Into<String>) -> Self {
        self.set(PASSWORD, password.into())
    }

    #[must_use]
    pub fn name(self, name: impl Into<String>) -> Self {
        self.set(NAME, name.into())
    }

    #[must_use]
    pub fn schema(self, schema: impl Into<String>) -> Self {
        self.set(SCHEMA, schema.into())
    }

    #[must_use]
    pub fn port(self, port: u16) -> Self {
        self.set(PORT, port)
    }

    #[must_use]
    pub fn charset(self, charset: impl Into<String>) -> Self {
        self.set(CHARSET, charset.into())
    }

    #[must_use]
    pub fn finish(self) -> Descriptor {
        Descriptor {
            fields: self.fields,
        }
    }

    /// Build a [`Connection`] through the default adapter registry.
    ///
    /// # Errors
    /// Returns the same errors as [`crate::factory::factory`].
    pub fn connect(self, adapter_name: &str) -> Result<Connection, SqlConduitError> {
        crate::factory::factory(adapter_name, self.finish())
    }
}
