use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use smol_str::SmolStr;

/// Class name used for plain property records.
pub const PLAIN_RECORD_CLASS: &str = "stdClass";

/// Capability of an object to produce its own string representation.
///
/// Only string coercion looks at this; every other operation treats a
/// stringable object like any other object.
pub trait Stringable: fmt::Debug + Send + Sync {
    /// Deterministic string form of the object.
    fn convert_to_string(&self) -> String;

    /// Class name used when the object is rendered in error messages.
    fn class_name(&self) -> &str {
        "class@anonymous"
    }
}

/// Key of an array entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ArrayKey {
    Int(i64),
    String(SmolStr),
}

impl From<i64> for ArrayKey {
    fn from(value: i64) -> Self {
        ArrayKey::Int(value)
    }
}

impl From<i32> for ArrayKey {
    fn from(value: i32) -> Self {
        ArrayKey::Int(i64::from(value))
    }
}

impl From<&str> for ArrayKey {
    fn from(value: &str) -> Self {
        ArrayKey::String(SmolStr::new(value))
    }
}

impl From<SmolStr> for ArrayKey {
    fn from(value: SmolStr) -> Self {
        ArrayKey::String(value)
    }
}

/// Ordered key/value collection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArrayValue {
    pub entries: IndexMap<ArrayKey, Value>,
    next_index: i64,
}

impl ArrayValue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a list with consecutive integer keys starting at zero.
    pub fn list<I, V>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let mut array = Self::new();
        for value in values {
            array.push(value);
        }
        array
    }

    /// Appends under the next free integer key.
    pub fn push(&mut self, value: impl Into<Value>) {
        let key = self.next_index;
        self.insert(ArrayKey::Int(key), value);
    }

    pub fn insert(&mut self, key: impl Into<ArrayKey>, value: impl Into<Value>) {
        let key = key.into();
        if let ArrayKey::Int(index) = key {
            if index >= self.next_index {
                self.next_index = index.saturating_add(1);
            }
        }
        self.entries.insert(key, value.into());
    }

    #[must_use]
    pub fn with(mut self, key: impl Into<ArrayKey>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Structured record with named properties and no string capability.
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectValue {
    pub class_name: SmolStr,
    pub properties: IndexMap<SmolStr, Value>,
}

impl ObjectValue {
    pub fn new(class_name: impl Into<SmolStr>) -> Self {
        Self {
            class_name: class_name.into(),
            properties: IndexMap::new(),
        }
    }

    /// Empty plain record.
    #[must_use]
    pub fn plain() -> Self {
        Self::new(PLAIN_RECORD_CLASS)
    }

    #[must_use]
    pub fn with_property(mut self, name: impl Into<SmolStr>, value: impl Into<Value>) -> Self {
        self.properties.insert(name.into(), value.into());
        self
    }

    #[must_use]
    pub fn is_plain(&self) -> bool {
        self.class_name == PLAIN_RECORD_CLASS
    }
}

/// Opaque external handle (file, socket, stream...).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceValue {
    pub id: u32,
    pub kind: SmolStr,
}

impl ResourceValue {
    pub fn new(id: u32, kind: impl Into<SmolStr>) -> Self {
        Self {
            id,
            kind: kind.into(),
        }
    }
}

/// Value of unknown or loosely typed origin.
#[derive(Debug, Clone)]
pub enum Value {
    Int(i64),
    Float(f64),
    Bool(bool),
    String(SmolStr),

    Array(ArrayValue),
    Object(ObjectValue),
    Stringable(Arc<dyn Stringable>),
    Resource(ResourceValue),

    Null,
}

impl Value {
    pub fn stringable(object: impl Stringable + 'static) -> Self {
        Value::Stringable(Arc::new(object))
    }

    /// True for int, float, bool and string.
    #[must_use]
    pub fn is_scalar(&self) -> bool {
        matches!(
            self,
            Value::Int(_) | Value::Float(_) | Value::Bool(_) | Value::String(_)
        )
    }

    /// Runtime category name as the host reports it in messages.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Int(_) => "integer",
            Value::Float(_) => "double",
            Value::Bool(_) => "boolean",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) | Value::Stringable(_) => "object",
            Value::Resource(_) => "resource",
            Value::Null => "NULL",
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Array(a), Value::Array(b)) => a == b,
            (Value::Object(a), Value::Object(b)) => a == b,
            (Value::Stringable(a), Value::Stringable(b)) => Arc::ptr_eq(a, b),
            (Value::Resource(a), Value::Resource(b)) => a == b,
            (Value::Null, Value::Null) => true,
            _ => false,
        }
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int(i64::from(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(SmolStr::new(value))
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(SmolStr::from(value))
    }
}

impl From<SmolStr> for Value {
    fn from(value: SmolStr) -> Self {
        Value::String(value)
    }
}

impl From<ArrayValue> for Value {
    fn from(value: ArrayValue) -> Self {
        Value::Array(value)
    }
}

impl From<ObjectValue> for Value {
    fn from(value: ObjectValue) -> Self {
        Value::Object(value)
    }
}

impl From<ResourceValue> for Value {
    fn from(value: ResourceValue) -> Self {
        Value::Resource(value)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}
