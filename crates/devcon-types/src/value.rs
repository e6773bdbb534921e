//! Typed argument values and their type tags.
//!
//! A [`ValueType`] names the type a command parameter expects; the parser
//! registry maps each tag to a converter that turns a raw token into a
//! [`Value`] of that type.

use std::any::Any;
use std::fmt;
use std::rc::Rc;

/// Identifier of a parameter's semantic type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ValueType {
    /// `true` / `false`, case-insensitive.
    Bool,
    /// Signed 64-bit integer.
    Int,
    /// 64-bit floating point.
    Float,
    /// Raw token text. Always converts.
    Str,
    /// Two-component numeric tuple, `(x, y)`.
    Vec2,
    /// Three-component numeric tuple, `(x, y, z)`.
    Vec3,
    /// The live console handle. Bound by the engine, never read from input.
    Context,
    /// A host-defined type, identified by name.
    Custom(&'static str),
}

impl ValueType {
    /// Short lowercase name used in usage strings and error messages.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::Int => "int",
            Self::Float => "float",
            Self::Str => "string",
            Self::Vec2 => "vec2",
            Self::Vec3 => "vec3",
            Self::Context => "context",
            Self::Custom(name) => *name,
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A host-defined value produced by a custom parser.
#[derive(Clone)]
pub struct CustomValue {
    type_name: &'static str,
    data: Rc<dyn Any>,
}

impl CustomValue {
    /// Wrap `data` as a value of the custom type `type_name`.
    pub fn new<T: Any>(type_name: &'static str, data: T) -> Self {
        Self {
            type_name,
            data: Rc::new(data),
        }
    }

    /// The custom type name this value was produced for.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Borrow the payload as `T`, if it is one.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.data.downcast_ref::<T>()
    }
}

impl fmt::Debug for CustomValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CustomValue({})", self.type_name)
    }
}

impl PartialEq for CustomValue {
    fn eq(&self, other: &Self) -> bool {
        self.type_name == other.type_name && Rc::ptr_eq(&self.data, &other.data)
    }
}

/// A converted command argument.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    Vec2([f64; 2]),
    Vec3([f64; 3]),
    /// Placeholder bound to a [`ValueType::Context`] parameter.
    Context,
    Custom(CustomValue),
}

impl Value {
    /// The type tag this value satisfies.
    pub fn value_type(&self) -> ValueType {
        match self {
            Self::Bool(_) => ValueType::Bool,
            Self::Int(_) => ValueType::Int,
            Self::Float(_) => ValueType::Float,
            Self::Str(_) => ValueType::Str,
            Self::Vec2(_) => ValueType::Vec2,
            Self::Vec3(_) => ValueType::Vec3,
            Self::Context => ValueType::Context,
            Self::Custom(c) => ValueType::Custom(c.type_name()),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(i) => write!(f, "{i}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Str(s) => f.write_str(s),
            Self::Vec2([x, y]) => write!(f, "({x}, {y})"),
            Self::Vec3([x, y, z]) => write!(f, "({x}, {y}, {z})"),
            Self::Context => f.write_str("<console>"),
            Self::Custom(c) => write!(f, "<{}>", c.type_name()),
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Str(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_type_names() {
        assert_eq!(ValueType::Str.to_string(), "string");
        assert_eq!(ValueType::Vec3.to_string(), "vec3");
        assert_eq!(ValueType::Custom("color").to_string(), "color");
    }

    #[test]
    fn value_reports_its_type() {
        assert_eq!(Value::Int(3).value_type(), ValueType::Int);
        assert_eq!(Value::from("x").value_type(), ValueType::Str);
        let c = Value::Custom(CustomValue::new("color", 0xff00ffu32));
        assert_eq!(c.value_type(), ValueType::Custom("color"));
    }

    #[test]
    fn custom_value_downcast() {
        let c = CustomValue::new("color", 0xff00ffu32);
        assert_eq!(c.downcast_ref::<u32>(), Some(&0xff00ff));
        assert!(c.downcast_ref::<i64>().is_none());
    }

    #[test]
    fn custom_value_equality_is_identity() {
        let a = CustomValue::new("color", 1u8);
        let b = CustomValue::new("color", 1u8);
        assert_eq!(a, a.clone());
        assert_ne!(a, b);
    }

    #[test]
    fn display_tuples() {
        assert_eq!(Value::Vec2([1.0, 2.5]).to_string(), "(1, 2.5)");
        assert_eq!(Value::Vec3([0.0, -1.0, 3.0]).to_string(), "(0, -1, 3)");
    }
}
