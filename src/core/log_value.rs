//! Text coercion for logged values
//!
//! Anything passed to a logger as its message is classified into one of the
//! [`LogValue`] categories and then rendered to the text stored in the record.
//! The caller's value itself is never altered; only the logged text is derived.

use super::error::Result;
use serde::Serialize;
use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::hash::BuildHasher;
use std::rc::Rc;
use std::sync::Arc;

/// Text used for values that have no textual representation
pub const UNREPRESENTABLE: &str = "[unrepresentable]";

/// Text used for absent values
pub const ABSENT: &str = "null";

/// Representational category of a logged value
#[derive(Debug, Clone, PartialEq)]
pub enum LogValue {
    Text(String),
    Absent,
    Integer(i128),
    Unsigned(u128),
    Float32(f32),
    Float(f64),
    Bool(bool),
    Symbol(String),
    Composite(serde_json::Value),
    Unrepresentable,
}

impl LogValue {
    /// Classify any serializable value as a composite
    pub fn composite<T: Serialize + ?Sized>(value: &T) -> Result<Self> {
        Ok(LogValue::Composite(serde_json::to_value(value)?))
    }

    /// Render the value as the text stored in a record
    pub fn into_text(self) -> Result<String> {
        Ok(match self {
            LogValue::Text(s) => s,
            LogValue::Absent => ABSENT.to_string(),
            LogValue::Integer(i) => i.to_string(),
            LogValue::Unsigned(u) => u.to_string(),
            LogValue::Float32(f) => f.to_string(),
            LogValue::Float(f) => f.to_string(),
            LogValue::Bool(b) => b.to_string(),
            LogValue::Symbol(name) => format!("Symbol({})", name),
            LogValue::Composite(value) => serde_json::to_string(&value)?,
            LogValue::Unrepresentable => UNREPRESENTABLE.to_string(),
        })
    }
}

/// A value that can be passed to a logger as its message
///
/// # Example
///
/// ```
/// use leveled_log::{Loggable, Structured};
/// use std::collections::BTreeMap;
///
/// assert_eq!("x".to_log_text().unwrap(), "x");
/// assert_eq!(42i32.to_log_text().unwrap(), "42");
///
/// let mut map = BTreeMap::new();
/// map.insert("a", 1);
/// assert_eq!(map.to_log_text().unwrap(), r#"{"a":1}"#);
/// assert_eq!(Structured(vec![1, 2]).to_log_text().unwrap(), "[1,2]");
/// ```
pub trait Loggable {
    fn log_value(&self) -> Result<LogValue>;

    fn to_log_text(&self) -> Result<String> {
        self.log_value()?.into_text()
    }
}

/// Logs any `Serialize` value through its JSON encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Structured<T>(pub T);

/// An atomic symbol, logged as `Symbol(name)`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Symbol(pub Cow<'static, str>);

impl Symbol {
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Symbol(name.into())
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Symbol({})", self.0)
    }
}

/// Wraps a value that has no textual representation
///
/// The wrapped value is still handed back to the caller; only the logged
/// text falls back to [`UNREPRESENTABLE`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Opaque<T>(pub T);

impl<T: Serialize> Loggable for Structured<T> {
    fn log_value(&self) -> Result<LogValue> {
        LogValue::composite(&self.0)
    }
}

impl Loggable for Symbol {
    fn log_value(&self) -> Result<LogValue> {
        Ok(LogValue::Symbol(self.0.to_string()))
    }
}

impl<T> Loggable for Opaque<T> {
    fn log_value(&self) -> Result<LogValue> {
        Ok(LogValue::Unrepresentable)
    }
}

impl Loggable for LogValue {
    fn log_value(&self) -> Result<LogValue> {
        Ok(self.clone())
    }
}

impl Loggable for str {
    fn log_value(&self) -> Result<LogValue> {
        Ok(LogValue::Text(self.to_string()))
    }
}

impl Loggable for String {
    fn log_value(&self) -> Result<LogValue> {
        Ok(LogValue::Text(self.clone()))
    }
}

impl Loggable for Cow<'_, str> {
    fn log_value(&self) -> Result<LogValue> {
        Ok(LogValue::Text(self.to_string()))
    }
}

impl Loggable for char {
    fn log_value(&self) -> Result<LogValue> {
        Ok(LogValue::Text(self.to_string()))
    }
}

impl Loggable for bool {
    fn log_value(&self) -> Result<LogValue> {
        Ok(LogValue::Bool(*self))
    }
}

impl Loggable for () {
    fn log_value(&self) -> Result<LogValue> {
        Ok(LogValue::Absent)
    }
}

macro_rules! impl_loggable_int {
    ($variant:ident => $($ty:ty),+) => {
        $(
            impl Loggable for $ty {
                fn log_value(&self) -> Result<LogValue> {
                    Ok(LogValue::$variant(*self as _))
                }
            }
        )+
    };
}

impl_loggable_int!(Integer => i8, i16, i32, i64, i128, isize);
impl_loggable_int!(Unsigned => u8, u16, u32, u64, u128, usize);

impl Loggable for f32 {
    fn log_value(&self) -> Result<LogValue> {
        Ok(LogValue::Float32(*self))
    }
}

impl Loggable for f64 {
    fn log_value(&self) -> Result<LogValue> {
        Ok(LogValue::Float(*self))
    }
}

impl<T: Loggable> Loggable for Option<T> {
    fn log_value(&self) -> Result<LogValue> {
        match self {
            Some(value) => value.log_value(),
            None => Ok(LogValue::Absent),
        }
    }
}

impl Loggable for serde_json::Value {
    fn log_value(&self) -> Result<LogValue> {
        use serde_json::Value;
        Ok(match self {
            Value::Null => LogValue::Absent,
            Value::Bool(b) => LogValue::Bool(*b),
            Value::Number(n) => {
                if let Some(u) = n.as_u64() {
                    LogValue::Unsigned(u128::from(u))
                } else if let Some(i) = n.as_i64() {
                    LogValue::Integer(i128::from(i))
                } else {
                    n.as_f64().map_or(LogValue::Unrepresentable, LogValue::Float)
                }
            }
            Value::String(s) => LogValue::Text(s.clone()),
            Value::Array(_) | Value::Object(_) => LogValue::Composite(self.clone()),
        })
    }
}

impl<T: Serialize> Loggable for Vec<T> {
    fn log_value(&self) -> Result<LogValue> {
        LogValue::composite(self)
    }
}

impl<T: Serialize> Loggable for [T] {
    fn log_value(&self) -> Result<LogValue> {
        LogValue::composite(self)
    }
}

impl<T: Serialize, const N: usize> Loggable for [T; N] {
    fn log_value(&self) -> Result<LogValue> {
        LogValue::composite(self.as_slice())
    }
}

impl<K: Serialize, V: Serialize> Loggable for BTreeMap<K, V> {
    fn log_value(&self) -> Result<LogValue> {
        LogValue::composite(self)
    }
}

impl<K: Serialize, V: Serialize, S: BuildHasher> Loggable for HashMap<K, V, S> {
    fn log_value(&self) -> Result<LogValue> {
        LogValue::composite(self)
    }
}

impl<T: Loggable + ?Sized> Loggable for &T {
    fn log_value(&self) -> Result<LogValue> {
        (**self).log_value()
    }
}

impl<T: Loggable + ?Sized> Loggable for Box<T> {
    fn log_value(&self) -> Result<LogValue> {
        (**self).log_value()
    }
}

impl<T: Loggable + ?Sized> Loggable for Arc<T> {
    fn log_value(&self) -> Result<LogValue> {
        (**self).log_value()
    }
}

impl<T: Loggable + ?Sized> Loggable for Rc<T> {
    fn log_value(&self) -> Result<LogValue> {
        (**self).log_value()
    }
}
