//! Element types and value buffers passed to a storage backend.

use std::fmt;

/// Element type of a variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// 64-bit float (`double`).
    F64,
    /// 32-bit float (`float`).
    F32,
    /// 32-bit signed integer (`int`).
    I32,
    /// 64-bit signed integer (`int64`).
    I64,
    /// Single byte character (`char`).
    Char,
}

impl ValueKind {
    /// Returns the CDL type keyword for this element type.
    pub fn cdl_name(self) -> &'static str {
        match self {
            Self::F64 => "double",
            Self::F32 => "float",
            Self::I32 => "int",
            Self::I64 => "int64",
            Self::Char => "char",
        }
    }

    /// Returns `fill` as the variable stores it: narrowed to the element
    /// type and widened back. `char` variables carry no fill value.
    pub fn stored_fill(self, fill: f64) -> Option<f64> {
        match self {
            Self::F64 => Some(fill),
            Self::F32 => Some(f64::from(fill as f32)),
            Self::I32 => Some(f64::from(fill as i32)),
            Self::I64 => Some(fill as i64 as f64),
            Self::Char => None,
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.cdl_name())
    }
}

/// Borrowed, typed view over the values written into a variable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Values<'a> {
    /// `double` values.
    F64(&'a [f64]),
    /// `float` values.
    F32(&'a [f32]),
    /// `int` values.
    I32(&'a [i32]),
    /// `int64` values.
    I64(&'a [i64]),
    /// `char` cells.
    Char(&'a [u8]),
}

impl Values<'_> {
    /// Returns the element type of the buffer.
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::F64(_) => ValueKind::F64,
            Self::F32(_) => ValueKind::F32,
            Self::I32(_) => ValueKind::I32,
            Self::I64(_) => ValueKind::I64,
            Self::Char(_) => ValueKind::Char,
        }
    }

    /// Returns the number of elements.
    pub fn len(&self) -> usize {
        match self {
            Self::F64(v) => v.len(),
            Self::F32(v) => v.len(),
            Self::I32(v) => v.len(),
            Self::I64(v) => v.len(),
            Self::Char(v) => v.len(),
        }
    }

    /// Returns `true` when the buffer holds no elements.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Copies the borrowed values into an owned [`ArrayData`].
    pub fn to_owned_data(&self) -> ArrayData {
        match *self {
            Self::F64(v) => ArrayData::F64(v.to_vec()),
            Self::F32(v) => ArrayData::F32(v.to_vec()),
            Self::I32(v) => ArrayData::I32(v.to_vec()),
            Self::I64(v) => ArrayData::I64(v.to_vec()),
            Self::Char(v) => ArrayData::Char(v.to_vec()),
        }
    }
}

impl<'a> From<&'a [f64]> for Values<'a> {
    fn from(v: &'a [f64]) -> Self {
        Self::F64(v)
    }
}

impl<'a> From<&'a [f32]> for Values<'a> {
    fn from(v: &'a [f32]) -> Self {
        Self::F32(v)
    }
}

impl<'a> From<&'a [i32]> for Values<'a> {
    fn from(v: &'a [i32]) -> Self {
        Self::I32(v)
    }
}

impl<'a> From<&'a [i64]> for Values<'a> {
    fn from(v: &'a [i64]) -> Self {
        Self::I64(v)
    }
}

/// Owned counterpart of [`Values`], kept by the in-memory backend.
#[derive(Debug, Clone, PartialEq)]
pub enum ArrayData {
    /// `double` values.
    F64(Vec<f64>),
    /// `float` values.
    F32(Vec<f32>),
    /// `int` values.
    I32(Vec<i32>),
    /// `int64` values.
    I64(Vec<i64>),
    /// `char` cells.
    Char(Vec<u8>),
}

impl ArrayData {
    /// Returns a borrowed view of the data.
    pub fn as_values(&self) -> Values<'_> {
        match self {
            Self::F64(v) => Values::F64(v),
            Self::F32(v) => Values::F32(v),
            Self::I32(v) => Values::I32(v),
            Self::I64(v) => Values::I64(v),
            Self::Char(v) => Values::Char(v),
        }
    }

    /// Returns the data as `f64` values when it holds doubles.
    pub fn as_f64(&self) -> Option<&[f64]> {
        match self {
            Self::F64(v) => Some(v),
            _ => None,
        }
    }

    /// Returns the data as characters when it holds a `char` array.
    pub fn as_chars(&self) -> Option<&[u8]> {
        match self {
            Self::Char(v) => Some(v),
            _ => None,
        }
    }
}
