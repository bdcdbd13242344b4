use fxhash::FxHashMap;

/// A call-time keyword argument value.
///
/// This is the closed set of values a switch can inspect. Rust call sites
/// have no free-form keyword arguments, so anything a caller wants a switch
/// to see is carried explicitly in a [`Kwargs`] mapping.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    None,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
}

impl Value {
    /// Boolean coercion: `None`, `false`, zero and the empty string are
    /// false, everything else is true.
    pub fn truthy(&self) -> bool {
        match self {
            Value::None => false,
            Value::Bool(b) => *b,
            Value::Int(n) => *n != 0,
            Value::Float(x) => *x != 0.0,
            Value::Str(s) => !s.is_empty(),
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int(value as i64)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Str(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Str(value)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(inner) => inner.into(),
            None => Value::None,
        }
    }
}

/// Keyword arguments for a tolerant call.
///
/// A thin wrapper around a name-to-[`Value`] map. Switches read their
/// control key out of this mapping; every other entry passes through to
/// the wrapped function untouched.
///
/// ```rust
/// use tolerance_core::{Kwargs, Value};
///
/// let kwargs = Kwargs::new().arg("fail_silently", false).arg("limit", 10);
/// assert_eq!(kwargs.get("limit"), Some(&Value::Int(10)));
/// assert_eq!(kwargs.len(), 2);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Kwargs {
    map: FxHashMap<String, Value>,
}

impl Kwargs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Chainable insert for building a mapping at the call site.
    pub fn arg(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.map.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.map.get(name)
    }

    pub fn remove(&mut self, name: &str) -> Option<Value> {
        self.map.remove(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.map.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.map.iter().map(|(name, value)| (name.as_str(), value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truthiness_follows_general_rules() {
        assert!(!Value::None.truthy());
        assert!(!Value::Bool(false).truthy());
        assert!(Value::Bool(true).truthy());
        assert!(!Value::Int(0).truthy());
        assert!(Value::Int(-3).truthy());
        assert!(!Value::Float(0.0).truthy());
        assert!(Value::Float(0.5).truthy());
        assert!(!Value::Str(String::new()).truthy());
        assert!(Value::Str("no".to_string()).truthy());
    }

    #[test]
    fn option_converts_to_none() {
        assert_eq!(Value::from(None::<bool>), Value::None);
        assert_eq!(Value::from(Some(1)), Value::Int(1));
    }

    #[test]
    fn insert_get_remove() {
        let mut kwargs = Kwargs::new().arg("a", true);
        assert!(kwargs.contains("a"));
        kwargs.insert("b", "text");
        assert_eq!(kwargs.remove("b"), Some(Value::Str("text".to_string())));
        assert_eq!(kwargs.len(), 1);
    }
}
