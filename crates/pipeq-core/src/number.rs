//! Closed enumeration of the numeric representations the pipeline accepts.
//!
//! Aggregations over loosely-typed sequences go through [`Number`]: every
//! supported kind has exactly one row in the conversion table below, and
//! anything that cannot produce a `Number` is non-numeric.

use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub enum Number {
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    Isize(isize),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    Usize(usize),
    F32(f32),
    F64(f64),
}

impl Number {
    /// Widen to `f64`. Integers beyond 2^53 lose precision.
    pub fn to_f64(self) -> f64 {
        use Number::*;
        match self {
            Isize(v) => v as f64,
            Usize(v) => v as f64,
            F64(v) => v,
            I32(v) => v as f64,
            I64(v) => v as f64,
            F32(v) => v as f64,
            I8(v) => v as f64,
            I16(v) => v as f64,
            U64(v) => v as f64,
            U32(v) => v as f64,
            U16(v) => v as f64,
            U8(v) => v as f64,
        }
    }

    /// Signed integer kinds only.
    pub fn as_int(self) -> Option<i64> {
        use Number::*;
        match self {
            I8(v) => Some(v as i64),
            I16(v) => Some(v as i64),
            I32(v) => Some(v as i64),
            I64(v) => Some(v),
            Isize(v) => Some(v as i64),
            _ => None,
        }
    }

    /// Unsigned integer kinds only.
    pub fn as_uint(self) -> Option<u64> {
        use Number::*;
        match self {
            U8(v) => Some(v as u64),
            U16(v) => Some(v as u64),
            U32(v) => Some(v as u64),
            U64(v) => Some(v),
            Usize(v) => Some(v as u64),
            _ => None,
        }
    }

    /// Floating point kinds only.
    pub fn as_float(self) -> Option<f64> {
        match self {
            Number::F32(v) => Some(v as f64),
            Number::F64(v) => Some(v),
            _ => None,
        }
    }

    pub fn is_float(&self) -> bool {
        matches!(self, Number::F32(_) | Number::F64(_))
    }

    /// Position in the variant list; also the hash discriminant.
    fn kind_order(&self) -> u8 {
        use Number::*;
        match self {
            I8(_) => 0,
            I16(_) => 1,
            I32(_) => 2,
            I64(_) => 3,
            Isize(_) => 4,
            U8(_) => 5,
            U16(_) => 6,
            U32(_) => 7,
            U64(_) => 8,
            Usize(_) => 9,
            F32(_) => 10,
            F64(_) => 11,
        }
    }

    /// Integers as their two's complement bits, floats as their IEEE bits.
    fn raw_bits(&self) -> u64 {
        use Number::*;
        match *self {
            I8(v) => v as u64,
            I16(v) => v as u64,
            I32(v) => v as u64,
            I64(v) => v as u64,
            Isize(v) => v as u64,
            U8(v) => v as u64,
            U16(v) => v as u64,
            U32(v) => v as u64,
            U64(v) => v,
            Usize(v) => v as u64,
            F32(v) => v.to_bits() as u64,
            F64(v) => v.to_bits(),
        }
    }
}

// Equality is kind-sensitive (`I32(3) != I64(3)`) and compares floats by bit
// pattern so that `Eq` and `Hash` agree.
impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        self.kind_order() == other.kind_order() && self.raw_bits() == other.raw_bits()
    }
}

impl Eq for Number {}

impl Hash for Number {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.kind_order().hash(state);
        self.raw_bits().hash(state);
    }
}

macro_rules! number_from {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Number {
                fn from(v: $ty) -> Self {
                    Number::$variant(v)
                }
            }
        )*
    };
}

number_from!(
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    isize => Isize,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    usize => Usize,
    f32 => F32,
    f64 => F64,
);

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_conversion_table_widens_every_kind() {
        let all = [
            Number::from(-1i8),
            Number::from(-2i16),
            Number::from(-3i32),
            Number::from(-4i64),
            Number::from(-5isize),
            Number::from(1u8),
            Number::from(2u16),
            Number::from(3u32),
            Number::from(4u64),
            Number::from(5usize),
            Number::from(0.5f32),
            Number::from(0.25f64),
        ];
        let total: f64 = all.iter().map(|n| n.to_f64()).sum();
        assert_eq!(total, 0.75);
    }

    #[test]
    fn test_equality_is_kind_sensitive() {
        assert_ne!(Number::I32(3), Number::I64(3));
        assert_eq!(Number::I64(3), Number::I64(3));

        let set: HashSet<Number> = [Number::I32(3), Number::I64(3), Number::I32(3)]
            .into_iter()
            .collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_float_equality_uses_bits() {
        assert_eq!(Number::F64(f64::NAN), Number::F64(f64::NAN));
        assert_ne!(Number::F64(0.0), Number::F64(-0.0));
    }

    #[test]
    fn test_kind_accessors() {
        assert_eq!(Number::I16(-7).as_int(), Some(-7));
        assert_eq!(Number::I16(-7).as_uint(), None);
        assert_eq!(Number::U8(7).as_uint(), Some(7));
        assert_eq!(Number::U8(7).as_float(), None);
        assert_eq!(Number::F32(1.5).as_float(), Some(1.5));
        assert!(Number::F32(1.5).is_float());
    }
}
