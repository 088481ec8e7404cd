//! Runtime capability checks for elements.
//!
//! Typed sorts, min/max and sum/average need to view an element as a given
//! representation. Statically typed elements answer at compile time (an `i32`
//! is always a signed integer); `Value` answers per element and the calling
//! operation faults when the answer is `None`.

use crate::number::Number;
use crate::value::Value;

pub trait Coerce {
    /// Numeric view used by sum/average.
    fn to_number(&self) -> Option<Number> {
        None
    }

    /// Signed integer view.
    fn as_int(&self) -> Option<i64> {
        self.to_number().and_then(Number::as_int)
    }

    /// Unsigned integer view.
    fn as_uint(&self) -> Option<u64> {
        self.to_number().and_then(Number::as_uint)
    }

    /// Floating point view.
    fn as_float(&self) -> Option<f64> {
        self.to_number().and_then(Number::as_float)
    }

    /// String view.
    fn as_text(&self) -> Option<&str> {
        None
    }
}

macro_rules! coerce_numeric {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Coerce for $ty {
                fn to_number(&self) -> Option<Number> {
                    Some(Number::from(*self))
                }
            }
        )*
    };
}

coerce_numeric!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

impl Coerce for Number {
    fn to_number(&self) -> Option<Number> {
        Some(*self)
    }
}

impl Coerce for String {
    fn as_text(&self) -> Option<&str> {
        Some(self.as_str())
    }
}

impl Coerce for &str {
    fn as_text(&self) -> Option<&str> {
        Some(*self)
    }
}

impl Coerce for Value {
    fn to_number(&self) -> Option<Number> {
        self.as_number()
    }

    fn as_text(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s.as_str()),
            _ => None,
        }
    }
}
