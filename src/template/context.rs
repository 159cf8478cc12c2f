// ABOUTME: Attribute stores and template context assembly
// ABOUTME: Provides request/application scoped key-value stores and merges them into a rendering model

use serde::Serialize;
use serde_json::{Map, Value as JsonValue};
use std::collections::BTreeMap;
use std::fmt;

/// Model key under which the request scope is exposed explicitly
pub const REQUEST_KEY: &str = "Request";

/// Model key under which the application scope is exposed explicitly
pub const APPLICATION_KEY: &str = "Application";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Scope {
    #[default]
    Request,
    Application,
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scope::Request => write!(f, "request"),
            Scope::Application => write!(f, "application"),
        }
    }
}

/// Write capability of an attribute store
pub trait AttributeWriter {
    /// Insert or overwrite an attribute
    fn set(&mut self, key: &str, value: JsonValue);
}

/// Key-value store owned by the host and handed to context initializers.
///
/// Reading is always possible. Writing goes through [`AttributeStore::writer`],
/// which returns `None` for stores that do not support it.
pub trait AttributeStore {
    fn get(&self, key: &str) -> Option<&JsonValue>;

    fn keys(&self) -> Vec<String>;

    fn writer(&mut self) -> Option<&mut dyn AttributeWriter> {
        None
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Attributes {
    scope: Scope,
    values: BTreeMap<String, JsonValue>,
}

impl Attributes {
    /// Create an empty store for the given scope
    pub fn new(scope: Scope) -> Self {
        Self {
            scope,
            values: BTreeMap::new(),
        }
    }

    pub fn scope(&self) -> Scope {
        self.scope
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Convert the store into a JSON object
    pub fn to_json(&self) -> JsonValue {
        JsonValue::Object(
            self.values
                .iter()
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
        )
    }

    /// Freeze into a store without the write capability
    pub fn freeze(self) -> ReadOnlyAttributes {
        ReadOnlyAttributes { inner: self }
    }
}

impl AttributeWriter for Attributes {
    fn set(&mut self, key: &str, value: JsonValue) {
        self.values.insert(key.to_string(), value);
    }
}

impl AttributeStore for Attributes {
    fn get(&self, key: &str) -> Option<&JsonValue> {
        self.values.get(key)
    }

    fn keys(&self) -> Vec<String> {
        self.values.keys().cloned().collect()
    }

    fn writer(&mut self) -> Option<&mut dyn AttributeWriter> {
        Some(self)
    }
}

/// Store that only supports reads
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReadOnlyAttributes {
    inner: Attributes,
}

impl ReadOnlyAttributes {
    pub fn scope(&self) -> Scope {
        self.inner.scope()
    }
}

impl AttributeStore for ReadOnlyAttributes {
    fn get(&self, key: &str) -> Option<&JsonValue> {
        self.inner.get(key)
    }

    fn keys(&self) -> Vec<String> {
        self.inner.keys()
    }
}

/// Rendering model assembled from the application and request scopes
#[derive(Debug, Clone)]
pub struct TemplateContext {
    application: Attributes,
    request: Attributes,
}

impl TemplateContext {
    pub fn new(application: Attributes, request: Attributes) -> Self {
        Self {
            application,
            request,
        }
    }

    pub fn request(&self) -> &Attributes {
        &self.request
    }

    pub fn application(&self) -> &Attributes {
        &self.application
    }

    /// Look up a key, request scope first
    pub fn lookup(&self, key: &str) -> Option<&JsonValue> {
        self.request
            .get(key)
            .or_else(|| self.application.get(key))
    }

    /// Convert context to JSON for handlebars rendering
    pub fn to_json(&self) -> JsonValue {
        let mut model = Map::new();

        for (key, value) in self.application.values.iter().chain(self.request.values.iter()) {
            model.insert(key.clone(), value.clone());
        }

        model.insert(APPLICATION_KEY.to_string(), self.application.to_json());
        model.insert(REQUEST_KEY.to_string(), self.request.to_json());

        JsonValue::Object(model)
    }
}
