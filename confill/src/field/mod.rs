//! Leaf field access for the source stages.
//!
//! Every leaf the derive exposes must implement [`FieldValue`]. Built-in
//! implementations cover strings, paths, booleans, the primitive integers and
//! floats, string lists, and `chrono` timestamps. Implement the trait for your
//! own types to take part in coercion; your [`FieldValue::is_zero`] then
//! decides when the field counts as missing.

use std::path::PathBuf;

use chrono::{DateTime, NaiveDateTime, Utc};
use tracing::{debug, warn};

use crate::coerce::{Coerced, Kind, Value};

/// A leaf value the engine can inspect and assign.
pub trait FieldValue {
    /// The kind of value this field accepts.
    fn kind(&self) -> Kind;

    /// Whether the field still holds its zero value.
    fn is_zero(&self) -> bool;

    /// Stores `value` in the field.
    ///
    /// Returns `false`, leaving the field unchanged, when `value` is of a kind
    /// the field cannot hold.
    fn assign(&mut self, value: Value) -> bool;

    /// The current value, if the type can report one.
    ///
    /// The file stage uses it to carry fields `serde` skips across a decode.
    fn to_value(&self) -> Option<Value> {
        None
    }

    /// Type name shown in prompt help.
    fn type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

/// Renders the zero value of `field`'s kind for use as a prompt default.
#[must_use]
pub fn zero_hint(field: &dyn FieldValue, layout: &str) -> String {
    Value::zero(field.kind())
        .map(|zero| zero.render(layout))
        .unwrap_or_default()
}

/// Assigns a coerced value to `field`, logging under `name` and `source`.
///
/// Values are never logged; secret fields pass through here too.
pub(crate) fn store(field: &mut dyn FieldValue, coerced: Coerced, name: &str, source: &str) {
    let degraded = coerced.is_degraded();
    if field.assign(coerced.into_value()) {
        debug!(field = name, source, degraded, "assigned field");
    } else {
        warn!(
            field = name,
            source,
            ty = field.type_name(),
            "coerced value does not fit the field; leaving it unchanged"
        );
    }
}

impl FieldValue for String {
    fn kind(&self) -> Kind {
        Kind::String
    }

    fn is_zero(&self) -> bool {
        self.is_empty()
    }

    fn assign(&mut self, value: Value) -> bool {
        let Value::String(s) = value else {
            return false;
        };
        *self = s;
        true
    }

    fn to_value(&self) -> Option<Value> {
        Some(Value::String(self.clone()))
    }

    fn type_name(&self) -> &'static str {
        "string"
    }
}

impl FieldValue for PathBuf {
    fn kind(&self) -> Kind {
        Kind::String
    }

    fn is_zero(&self) -> bool {
        self.as_os_str().is_empty()
    }

    fn assign(&mut self, value: Value) -> bool {
        let Value::String(s) = value else {
            return false;
        };
        *self = Self::from(s);
        true
    }

    fn to_value(&self) -> Option<Value> {
        self.to_str().map(|s| Value::String(s.to_owned()))
    }

    fn type_name(&self) -> &'static str {
        "path"
    }
}

impl FieldValue for bool {
    fn kind(&self) -> Kind {
        Kind::Bool
    }

    fn is_zero(&self) -> bool {
        !*self
    }

    fn assign(&mut self, value: Value) -> bool {
        let Value::Bool(b) = value else {
            return false;
        };
        *self = b;
        true
    }

    fn to_value(&self) -> Option<Value> {
        Some(Value::Bool(*self))
    }

    fn type_name(&self) -> &'static str {
        "bool"
    }
}

impl FieldValue for Vec<String> {
    fn kind(&self) -> Kind {
        Kind::StringList
    }

    fn is_zero(&self) -> bool {
        self.is_empty()
    }

    fn assign(&mut self, value: Value) -> bool {
        let Value::StringList(items) = value else {
            return false;
        };
        *self = items;
        true
    }

    fn to_value(&self) -> Option<Value> {
        Some(Value::StringList(self.clone()))
    }

    fn type_name(&self) -> &'static str {
        "string list"
    }
}

impl FieldValue for DateTime<Utc> {
    fn kind(&self) -> Kind {
        Kind::Timestamp
    }

    fn is_zero(&self) -> bool {
        *self == Self::default()
    }

    fn assign(&mut self, value: Value) -> bool {
        let Value::Timestamp(ts) = value else {
            return false;
        };
        *self = ts;
        true
    }

    fn to_value(&self) -> Option<Value> {
        Some(Value::Timestamp(*self))
    }

    fn type_name(&self) -> &'static str {
        "timestamp"
    }
}

impl FieldValue for NaiveDateTime {
    fn kind(&self) -> Kind {
        Kind::Timestamp
    }

    fn is_zero(&self) -> bool {
        *self == DateTime::<Utc>::default().naive_utc()
    }

    fn assign(&mut self, value: Value) -> bool {
        let Value::Timestamp(ts) = value else {
            return false;
        };
        *self = ts.naive_utc();
        true
    }

    fn to_value(&self) -> Option<Value> {
        Some(Value::Timestamp(self.and_utc()))
    }

    fn type_name(&self) -> &'static str {
        "timestamp"
    }
}

/// Integers read any integer kind and store it through a checked
/// conversion; values that do not fit become zero.
macro_rules! integer_leaf {
    ($($ty:ty => $kind:ident($wide:ty)),* $(,)?) => {
        $(
            impl FieldValue for $ty {
                fn kind(&self) -> Kind {
                    Kind::$kind
                }

                fn is_zero(&self) -> bool {
                    *self == 0
                }

                fn assign(&mut self, value: Value) -> bool {
                    let converted = match value {
                        Value::Int32(n) => <$ty>::try_from(n).ok(),
                        Value::Int64(n) => <$ty>::try_from(n).ok(),
                        Value::Uint64(n) => <$ty>::try_from(n).ok(),
                        _ => return false,
                    };
                    *self = converted.unwrap_or_else(|| {
                        warn!(ty = stringify!($ty), "integer out of range; using zero");
                        0
                    });
                    true
                }

                fn to_value(&self) -> Option<Value> {
                    <$wide>::try_from(*self).ok().map(Value::$kind)
                }

                fn type_name(&self) -> &'static str {
                    stringify!($ty)
                }
            }
        )*
    };
}

integer_leaf!(
    i8 => Int32(i32),
    i16 => Int32(i32),
    i32 => Int32(i32),
    i64 => Int64(i64),
    isize => Int64(i64),
    u8 => Int64(i64),
    u16 => Int64(i64),
    u32 => Int64(i64),
    u64 => Uint64(u64),
    usize => Uint64(u64),
);

/// Floats compare bitwise against zero so `-0.0` counts as set.
macro_rules! float_leaf {
    ($($ty:ty => $kind:ident),* $(,)?) => {
        $(
            impl FieldValue for $ty {
                fn kind(&self) -> Kind {
                    Kind::$kind
                }

                fn is_zero(&self) -> bool {
                    self.to_bits() == 0
                }

                fn assign(&mut self, value: Value) -> bool {
                    let Value::$kind(n) = value else {
                        return false;
                    };
                    *self = n;
                    true
                }

                fn to_value(&self) -> Option<Value> {
                    Some(Value::$kind(*self))
                }

                fn type_name(&self) -> &'static str {
                    stringify!($ty)
                }
            }
        )*
    };
}

float_leaf!(f32 => Float32, f64 => Float64);

#[cfg(test)]
mod tests;
