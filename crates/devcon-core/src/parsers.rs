//! Type-directed token conversion.
//!
//! A [`ParserRegistry`] maps each [`ValueType`] to one [`ValueParser`]. The
//! embedding application adds parsers for its own types at startup; the
//! first parser registered for a type wins.

use std::collections::HashMap;

use devcon_types::error::{ConsoleError, Result};
use devcon_types::value::{Value, ValueType};

/// Converts raw tokens into values of one type.
pub trait ValueParser {
    /// The type this parser produces.
    fn value_type(&self) -> ValueType;

    /// Probe a token. `None` when the token is not a valid value.
    fn try_parse(&self, token: &str) -> Option<Value>;

    /// Convert a token, failing with [`ConsoleError::Parse`] on bad input.
    fn parse(&self, token: &str) -> Result<Value> {
        self.try_parse(token).ok_or_else(|| ConsoleError::Parse {
            value_type: self.value_type(),
            token: token.to_string(),
        })
    }
}

/// Parser backed by a probe closure.
struct FnParser<F> {
    value_type: ValueType,
    probe: F,
}

impl<F> ValueParser for FnParser<F>
where
    F: Fn(&str) -> Option<Value>,
{
    fn value_type(&self) -> ValueType {
        self.value_type
    }

    fn try_parse(&self, token: &str) -> Option<Value> {
        (self.probe)(token)
    }
}

/// Registry of parsers keyed by value type.
pub struct ParserRegistry {
    parsers: HashMap<ValueType, Box<dyn ValueParser>>,
}

impl ParserRegistry {
    /// Create a registry with no parsers.
    pub fn empty() -> Self {
        Self {
            parsers: HashMap::new(),
        }
    }

    /// Create a registry with the built-in parsers (bool, int, float,
    /// string, vec2, vec3).
    pub fn new() -> Self {
        let mut reg = Self::empty();
        register_builtin_parsers(&mut reg);
        reg
    }

    /// Register a parser. Returns `false` if a parser for the same type was
    /// already registered; the existing one is kept.
    pub fn register(&mut self, parser: Box<dyn ValueParser>) -> bool {
        let value_type = parser.value_type();
        if value_type == ValueType::Context {
            log::warn!("ignoring parser for the context type: it is never read from input");
            return false;
        }
        if self.parsers.contains_key(&value_type) {
            log::warn!("parser for '{value_type}' already registered, ignoring new one");
            return false;
        }
        log::debug!("registered parser for '{value_type}'");
        self.parsers.insert(value_type, parser);
        true
    }

    /// Register a parser from a probe closure. The throwing conversion is
    /// derived from the probe.
    pub fn register_fn<F>(&mut self, value_type: ValueType, probe: F) -> bool
    where
        F: Fn(&str) -> Option<Value> + 'static,
    {
        self.register(Box::new(FnParser { value_type, probe }))
    }

    /// Whether a parser exists for `value_type`.
    pub fn contains(&self, value_type: ValueType) -> bool {
        self.parsers.contains_key(&value_type)
    }

    /// Probe a token against a type. Unknown types never convert.
    pub fn try_convert(&self, value_type: ValueType, token: &str) -> Option<Value> {
        let value = self.parsers.get(&value_type)?.try_parse(token)?;
        checked(value_type, value)
    }

    /// Convert a token to a type.
    pub fn convert(&self, value_type: ValueType, token: &str) -> Result<Value> {
        let value = self
            .parsers
            .get(&value_type)
            .ok_or(ConsoleError::UnknownType(value_type))?
            .parse(token)?;
        checked(value_type, value).ok_or_else(|| ConsoleError::Parse {
            value_type,
            token: token.to_string(),
        })
    }
}

impl Default for ParserRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Reject a value whose type differs from the one its parser is registered
/// for. Custom values must carry the registered type name.
fn checked(value_type: ValueType, value: Value) -> Option<Value> {
    let produced = value.value_type();
    if produced == value_type {
        Some(value)
    } else {
        log::warn!("parser for '{value_type}' produced a {produced} value, rejecting it");
        None
    }
}

// ---------------------------------------------------------------------------
// Built-in parsers
// ---------------------------------------------------------------------------

struct BoolParser;
impl ValueParser for BoolParser {
    fn value_type(&self) -> ValueType {
        ValueType::Bool
    }
    fn try_parse(&self, token: &str) -> Option<Value> {
        let t = token.trim();
        if t.eq_ignore_ascii_case("true") {
            Some(Value::Bool(true))
        } else if t.eq_ignore_ascii_case("false") {
            Some(Value::Bool(false))
        } else {
            None
        }
    }
}

struct IntParser;
impl ValueParser for IntParser {
    fn value_type(&self) -> ValueType {
        ValueType::Int
    }
    fn try_parse(&self, token: &str) -> Option<Value> {
        token.trim().parse::<i64>().ok().map(Value::Int)
    }
}

struct FloatParser;
impl ValueParser for FloatParser {
    fn value_type(&self) -> ValueType {
        ValueType::Float
    }
    fn try_parse(&self, token: &str) -> Option<Value> {
        token.trim().parse::<f64>().ok().map(Value::Float)
    }
}

struct StringParser;
impl ValueParser for StringParser {
    fn value_type(&self) -> ValueType {
        ValueType::Str
    }
    fn try_parse(&self, token: &str) -> Option<Value> {
        Some(Value::Str(token.to_string()))
    }
}

struct Vec2Parser;
impl ValueParser for Vec2Parser {
    fn value_type(&self) -> ValueType {
        ValueType::Vec2
    }
    fn try_parse(&self, token: &str) -> Option<Value> {
        parse_components::<2>(token).map(Value::Vec2)
    }
}

struct Vec3Parser;
impl ValueParser for Vec3Parser {
    fn value_type(&self) -> ValueType {
        ValueType::Vec3
    }
    fn try_parse(&self, token: &str) -> Option<Value> {
        parse_components::<3>(token).map(Value::Vec3)
    }
}

/// Parse exactly `N` comma-separated floats, optionally wrapped in one pair
/// of parentheses. Whitespace around components is ignored.
fn parse_components<const N: usize>(token: &str) -> Option<[f64; N]> {
    let mut body = token.trim();
    if let Some(inner) = body.strip_prefix('(').and_then(|r| r.strip_suffix(')')) {
        body = inner;
    }
    let mut parts = body.split(',');
    let mut out = [0.0; N];
    for slot in &mut out {
        *slot = parts.next()?.trim().parse().ok()?;
    }
    if parts.next().is_some() {
        return None;
    }
    Some(out)
}

fn register_builtin_parsers(reg: &mut ParserRegistry) {
    reg.register(Box::new(BoolParser));
    reg.register(Box::new(IntParser));
    reg.register(Box::new(FloatParser));
    reg.register(Box::new(StringParser));
    reg.register(Box::new(Vec2Parser));
    reg.register(Box::new(Vec3Parser));
}
