//! Conversion of raw source values into a field's declared kind.
//!
//! Sources produce one of three raw shapes: a boolean (confirmation prompts),
//! a string (flags, text prompts), or an integer. [`coerce`] maps a raw value
//! onto the [`Kind`] a leaf reports. A conversion that cannot honour its input
//! still yields a value, the kind's zero, flagged as [`Coerced::Degraded`].
//! Pairs that have no meaning at all yield `None` and the field is left alone.

mod timestamp;

use chrono::{DateTime, Utc};
use tracing::warn;

pub use timestamp::{DEFAULT_TIME_LAYOUT, format_timestamp, parse_timestamp};

/// A raw value as handed over by a source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Raw<'a> {
    /// A yes/no answer.
    Bool(bool),
    /// Free text.
    Str(&'a str),
    /// A whole number.
    Int(i64),
}

/// The value class a leaf field accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// UTF-8 text.
    String,
    /// 32-bit signed integer.
    Int32,
    /// 64-bit signed integer.
    Int64,
    /// 64-bit unsigned integer.
    Uint64,
    /// 32-bit float.
    Float32,
    /// 64-bit float.
    Float64,
    /// Boolean.
    Bool,
    /// List of strings, written comma separated.
    StringList,
    /// UTC timestamp parsed with the configured layout.
    Timestamp,
    /// Anything the engine cannot produce.
    Unsupported,
}

impl Kind {
    /// Human readable kind name used in prompt help.
    #[must_use]
    pub const fn describe(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Int32 => "int32",
            Self::Int64 => "int64",
            Self::Uint64 => "uint64",
            Self::Float32 => "float32",
            Self::Float64 => "float64",
            Self::Bool => "bool",
            Self::StringList => "string list",
            Self::Timestamp => "timestamp",
            Self::Unsupported => "unsupported",
        }
    }
}

/// A value of a concrete [`Kind`].
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// See [`Kind::String`].
    String(String),
    /// See [`Kind::Int32`].
    Int32(i32),
    /// See [`Kind::Int64`].
    Int64(i64),
    /// See [`Kind::Uint64`].
    Uint64(u64),
    /// See [`Kind::Float32`].
    Float32(f32),
    /// See [`Kind::Float64`].
    Float64(f64),
    /// See [`Kind::Bool`].
    Bool(bool),
    /// See [`Kind::StringList`].
    StringList(Vec<String>),
    /// See [`Kind::Timestamp`].
    Timestamp(DateTime<Utc>),
}

impl Value {
    /// The zero value of `kind`, or `None` for [`Kind::Unsupported`].
    ///
    /// The zero timestamp is the Unix epoch.
    #[must_use]
    pub fn zero(kind: Kind) -> Option<Self> {
        let value = match kind {
            Kind::String => Self::String(String::new()),
            Kind::Int32 => Self::Int32(0),
            Kind::Int64 => Self::Int64(0),
            Kind::Uint64 => Self::Uint64(0),
            Kind::Float32 => Self::Float32(0.0),
            Kind::Float64 => Self::Float64(0.0),
            Kind::Bool => Self::Bool(false),
            Kind::StringList => Self::StringList(Vec::new()),
            Kind::Timestamp => Self::Timestamp(DateTime::<Utc>::default()),
            Kind::Unsupported => return None,
        };
        Some(value)
    }

    /// The kind this value belongs to.
    #[must_use]
    pub const fn kind(&self) -> Kind {
        match self {
            Self::String(_) => Kind::String,
            Self::Int32(_) => Kind::Int32,
            Self::Int64(_) => Kind::Int64,
            Self::Uint64(_) => Kind::Uint64,
            Self::Float32(_) => Kind::Float32,
            Self::Float64(_) => Kind::Float64,
            Self::Bool(_) => Kind::Bool,
            Self::StringList(_) => Kind::StringList,
            Self::Timestamp(_) => Kind::Timestamp,
        }
    }

    /// Renders the value as text a user could type back in.
    #[must_use]
    pub fn render(&self, layout: &str) -> String {
        match self {
            Self::String(s) => s.clone(),
            Self::Int32(n) => n.to_string(),
            Self::Int64(n) => n.to_string(),
            Self::Uint64(n) => n.to_string(),
            Self::Float32(n) => n.to_string(),
            Self::Float64(n) => n.to_string(),
            Self::Bool(b) => b.to_string(),
            Self::StringList(items) => items.join(","),
            Self::Timestamp(ts) => format_timestamp(ts, layout),
        }
    }
}

/// Outcome of a successful [`coerce`] call.
#[derive(Debug, Clone, PartialEq)]
pub enum Coerced {
    /// The input was converted faithfully.
    Exact(Value),
    /// The input could not be converted; the value is the kind's zero.
    Degraded(Value),
}

impl Coerced {
    /// Returns `true` for [`Coerced::Degraded`].
    #[must_use]
    pub const fn is_degraded(&self) -> bool {
        matches!(self, Self::Degraded(_))
    }

    /// Borrows the carried value.
    #[must_use]
    pub const fn value(&self) -> &Value {
        match self {
            Self::Exact(value) | Self::Degraded(value) => value,
        }
    }

    /// Unwraps the carried value regardless of outcome.
    #[must_use]
    pub fn into_value(self) -> Value {
        match self {
            Self::Exact(value) | Self::Degraded(value) => value,
        }
    }
}

/// Converts `raw` into a value of `kind`.
///
/// `layout` is the `chrono` format string used for [`Kind::Timestamp`].
/// Returns `None` when the pair has no conversion; the caller must leave the
/// field unchanged.
#[must_use]
pub fn coerce(raw: Raw<'_>, kind: Kind, layout: &str) -> Option<Coerced> {
    let coerced = match raw {
        Raw::Bool(b) => from_bool(b, kind)?,
        Raw::Str(s) => from_str(s, kind, layout)?,
        Raw::Int(n) => from_int(n, kind)?,
    };
    if coerced.is_degraded() {
        warn!(
            kind = kind.describe(),
            "value could not be converted; using the zero value"
        );
    }
    Some(coerced)
}

fn from_bool(b: bool, kind: Kind) -> Option<Coerced> {
    let value = match kind {
        Kind::Bool => Value::Bool(b),
        Kind::String => Value::String(b.to_string()),
        Kind::Int32 => Value::Int32(i32::from(b)),
        Kind::Int64 => Value::Int64(i64::from(b)),
        Kind::Uint64 => Value::Uint64(u64::from(b)),
        Kind::Float32 => Value::Float32(if b { 1.0 } else { 0.0 }),
        Kind::Float64 => Value::Float64(if b { 1.0 } else { 0.0 }),
        Kind::StringList | Kind::Timestamp | Kind::Unsupported => return None,
    };
    Some(Coerced::Exact(value))
}

/// Wraps a parse result, degrading to the zero of `kind` on failure.
fn exact_or_zero<T, E>(parsed: Result<T, E>, kind: Kind, wrap: fn(T) -> Value) -> Option<Coerced> {
    match parsed {
        Ok(v) => Some(Coerced::Exact(wrap(v))),
        Err(_) => Value::zero(kind).map(Coerced::Degraded),
    }
}

fn from_str(s: &str, kind: Kind, layout: &str) -> Option<Coerced> {
    match kind {
        Kind::String => Some(Coerced::Exact(Value::String(s.to_owned()))),
        Kind::Int32 => exact_or_zero(s.parse::<i32>(), kind, Value::Int32),
        Kind::Int64 => exact_or_zero(s.parse::<i64>(), kind, Value::Int64),
        Kind::Uint64 => exact_or_zero(s.parse::<u64>(), kind, Value::Uint64),
        Kind::Float32 => exact_or_zero(s.parse::<f32>(), kind, Value::Float32),
        Kind::Float64 => exact_or_zero(s.parse::<f64>(), kind, Value::Float64),
        Kind::Bool => exact_or_zero(parse_bool(s).ok_or(()), kind, Value::Bool),
        Kind::StringList => Some(Coerced::Exact(Value::StringList(
            s.split(',').map(str::to_owned).collect(),
        ))),
        Kind::Timestamp => exact_or_zero(parse_timestamp(s, layout), kind, Value::Timestamp),
        Kind::Unsupported => None,
    }
}

#[expect(
    clippy::cast_precision_loss,
    reason = "int to float conversion matches numeric widening semantics"
)]
fn from_int(n: i64, kind: Kind) -> Option<Coerced> {
    match kind {
        Kind::String => Some(Coerced::Exact(Value::String(n.to_string()))),
        Kind::Int32 => exact_or_zero(i32::try_from(n), kind, Value::Int32),
        Kind::Int64 => Some(Coerced::Exact(Value::Int64(n))),
        Kind::Uint64 => exact_or_zero(u64::try_from(n), kind, Value::Uint64),
        Kind::Float32 => Some(Coerced::Exact(Value::Float32(n as f32))),
        Kind::Float64 => Some(Coerced::Exact(Value::Float64(n as f64))),
        Kind::Bool => Some(Coerced::Exact(Value::Bool(n > 0))),
        Kind::StringList | Kind::Timestamp | Kind::Unsupported => None,
    }
}

/// Accepts the usual boolean spellings: `1`, `t`, `true` and their negatives
/// in lower, upper, and title case.
#[must_use]
pub fn parse_bool(s: &str) -> Option<bool> {
    match s {
        "1" | "t" | "T" | "true" | "TRUE" | "True" => Some(true),
        "0" | "f" | "F" | "false" | "FALSE" | "False" => Some(false),
        _ => None,
    }
}
