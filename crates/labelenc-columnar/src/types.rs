#![forbid(unsafe_code)]

use std::fmt;

/// Storage type of a column's elements.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ElementType {
    /// A column with no storage; every row is NA.
    Void,
    Bool,
    Int8,
    Int16,
    Int32,
    Int64,
    Float32,
    Float64,
    /// Strings with 32-bit offsets into the character buffer.
    Str32,
    /// Strings with 64-bit offsets into the character buffer.
    Str64,
    /// Days since the Unix epoch.
    Date32,
}

/// Logical classification of an [`ElementType`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LogicalType {
    Void,
    Bool,
    Int,
    Real,
    String,
    Datetime,
}

impl ElementType {
    pub fn name(self) -> &'static str {
        match self {
            ElementType::Void => "void",
            ElementType::Bool => "bool",
            ElementType::Int8 => "int8",
            ElementType::Int16 => "int16",
            ElementType::Int32 => "int32",
            ElementType::Int64 => "int64",
            ElementType::Float32 => "float32",
            ElementType::Float64 => "float64",
            ElementType::Str32 => "str32",
            ElementType::Str64 => "str64",
            ElementType::Date32 => "date32",
        }
    }

    pub fn ltype(self) -> LogicalType {
        match self {
            ElementType::Void => LogicalType::Void,
            ElementType::Bool => LogicalType::Bool,
            ElementType::Int8 | ElementType::Int16 | ElementType::Int32 | ElementType::Int64 => {
                LogicalType::Int
            }
            ElementType::Float32 | ElementType::Float64 => LogicalType::Real,
            ElementType::Str32 | ElementType::Str64 => LogicalType::String,
            ElementType::Date32 => LogicalType::Datetime,
        }
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single logical cell, as seen through a column's row index.
///
/// This is an inspection type; the encoder never materializes values this way.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Na,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    Date(i32),
}

impl Value {
    pub fn is_na(&self) -> bool {
        matches!(self, Value::Na)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Str(v.to_owned())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or(Value::Na)
    }
}
