#![forbid(unsafe_code)]

use crate::error::ColumnError;
use crate::na::{NaMarker, NA_BOOL};
use crate::rowindex::RowIndex;
use crate::strings::{StrOffset, StringData};
use crate::types::{ElementType, LogicalType, Value};
use std::sync::Arc;

/// Physical storage of a column. Buffers are reference counted, so cloning is shallow.
#[derive(Clone, Debug)]
pub enum ColumnData {
    /// No buffer; holds only the physical row count.
    Void(usize),
    /// `0` / `1`, with [`NA_BOOL`] for NA.
    Bool(Arc<[i8]>),
    Int8(Arc<[i8]>),
    Int16(Arc<[i16]>),
    Int32(Arc<[i32]>),
    Int64(Arc<[i64]>),
    Float32(Arc<[f32]>),
    Float64(Arc<[f64]>),
    Str32(StringData<u32>),
    Str64(StringData<u64>),
    Date32(Arc<[i32]>),
}

impl ColumnData {
    pub fn element_type(&self) -> ElementType {
        match self {
            ColumnData::Void(_) => ElementType::Void,
            ColumnData::Bool(_) => ElementType::Bool,
            ColumnData::Int8(_) => ElementType::Int8,
            ColumnData::Int16(_) => ElementType::Int16,
            ColumnData::Int32(_) => ElementType::Int32,
            ColumnData::Int64(_) => ElementType::Int64,
            ColumnData::Float32(_) => ElementType::Float32,
            ColumnData::Float64(_) => ElementType::Float64,
            ColumnData::Str32(_) => ElementType::Str32,
            ColumnData::Str64(_) => ElementType::Str64,
            ColumnData::Date32(_) => ElementType::Date32,
        }
    }

    /// Number of physical rows in the buffer.
    pub fn len(&self) -> usize {
        match self {
            ColumnData::Void(len) => *len,
            ColumnData::Bool(v) | ColumnData::Int8(v) => v.len(),
            ColumnData::Int16(v) => v.len(),
            ColumnData::Int32(v) | ColumnData::Date32(v) => v.len(),
            ColumnData::Int64(v) => v.len(),
            ColumnData::Float32(v) => v.len(),
            ColumnData::Float64(v) => v.len(),
            ColumnData::Str32(s) => s.len(),
            ColumnData::Str64(s) => s.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn value_at(&self, physical: usize) -> Value {
        match self {
            ColumnData::Void(_) => Value::Na,
            ColumnData::Bool(v) => match v[physical] {
                NA_BOOL => Value::Na,
                b => Value::Bool(b != 0),
            },
            ColumnData::Int8(v) => v[physical].to_value(),
            ColumnData::Int16(v) => v[physical].to_value(),
            ColumnData::Int32(v) => v[physical].to_value(),
            ColumnData::Int64(v) => v[physical].to_value(),
            ColumnData::Float32(v) => v[physical].to_value(),
            ColumnData::Float64(v) => v[physical].to_value(),
            ColumnData::Str32(s) => str_value(s.get(physical)),
            ColumnData::Str64(s) => str_value(s.get(physical)),
            ColumnData::Date32(v) => match v[physical] {
                d if d.is_na() => Value::Na,
                d => Value::Date(d),
            },
        }
    }
}

fn str_value(bytes: Option<&[u8]>) -> Value {
    match bytes {
        Some(bytes) => Value::Str(String::from_utf8_lossy(bytes).into_owned()),
        None => Value::Na,
    }
}

/// A fixed-width numeric element type with its own [`ColumnData`] variant.
pub trait Primitive: NaMarker {
    const ELEMENT_TYPE: ElementType;

    fn wrap(values: Arc<[Self]>) -> ColumnData;

    fn unwrap(data: &ColumnData) -> Option<&[Self]>;

    fn to_value(self) -> Value;
}

macro_rules! primitive {
    ($t:ty, $variant:ident, |$v:ident| $value:expr) => {
        impl Primitive for $t {
            const ELEMENT_TYPE: ElementType = ElementType::$variant;

            fn wrap(values: Arc<[Self]>) -> ColumnData {
                ColumnData::$variant(values)
            }

            fn unwrap(data: &ColumnData) -> Option<&[Self]> {
                match data {
                    ColumnData::$variant(values) => Some(values),
                    _ => None,
                }
            }

            fn to_value(self) -> Value {
                if self.is_na() {
                    return Value::Na;
                }
                let $v = self;
                $value
            }
        }
    };
}

primitive!(i8, Int8, |v| Value::Int(v.into()));
primitive!(i16, Int16, |v| Value::Int(v.into()));
primitive!(i32, Int32, |v| Value::Int(v.into()));
primitive!(i64, Int64, |v| Value::Int(v));
primitive!(f32, Float32, |v| Value::Float(v.into()));
primitive!(f64, Float64, |v| Value::Float(v));

/// A column: a shared physical buffer viewed through a [`RowIndex`].
#[derive(Clone, Debug)]
pub struct Column {
    data: ColumnData,
    rowindex: RowIndex,
    nrows: usize,
}

impl Column {
    /// A column over the whole buffer with an identity row index.
    pub fn new(data: ColumnData) -> Self {
        Self {
            nrows: data.len(),
            data,
            rowindex: RowIndex::Identity,
        }
    }

    pub fn void(nrows: usize) -> Self {
        Self::new(ColumnData::Void(nrows))
    }

    pub fn from_primitive<T: Primitive>(values: Vec<T>) -> Self {
        Self::new(T::wrap(values.into()))
    }

    /// Build a numeric column, writing the type's NA sentinel for `None`.
    pub fn from_options<T, I>(values: I) -> Self
    where
        T: Primitive,
        I: IntoIterator<Item = Option<T>>,
    {
        let values: Vec<T> = values.into_iter().map(|v| v.unwrap_or(T::NA)).collect();
        Self::from_primitive(values)
    }

    pub fn from_bools<I: IntoIterator<Item = Option<bool>>>(values: I) -> Self {
        let values: Arc<[i8]> = values
            .into_iter()
            .map(|v| v.map_or(NA_BOOL, i8::from))
            .collect();
        Self::new(ColumnData::Bool(values))
    }

    pub fn from_strings<O: StrOffset>(data: StringData<O>) -> Self {
        Self::new(O::wrap(data))
    }

    /// Build a `str32` column.
    pub fn from_strs<'a, I>(values: I) -> Result<Self, ColumnError>
    where
        I: IntoIterator<Item = Option<&'a str>>,
    {
        Self::from_strs_with::<u32, _>(values)
    }

    /// Build a string column with an explicit offset width.
    pub fn from_strs_with<'a, O, I>(values: I) -> Result<Self, ColumnError>
    where
        O: StrOffset,
        I: IntoIterator<Item = Option<&'a str>>,
    {
        let data = StringData::<O>::from_options(values.into_iter().map(|v| v.map(str::as_bytes)))?;
        Ok(Self::from_strings(data))
    }

    /// View `nrows` logical rows of this column's buffer through `rowindex`.
    ///
    /// The index addresses the physical buffer directly; any previous row index is replaced.
    pub fn with_rowindex(self, rowindex: RowIndex, nrows: usize) -> Result<Self, ColumnError> {
        rowindex.validate(nrows, self.data.len())?;
        Ok(Self {
            data: self.data,
            rowindex,
            nrows,
        })
    }

    pub fn element_type(&self) -> ElementType {
        self.data.element_type()
    }

    pub fn ltype(&self) -> LogicalType {
        self.element_type().ltype()
    }

    pub fn nrows(&self) -> usize {
        self.nrows
    }

    pub fn rowindex(&self) -> &RowIndex {
        &self.rowindex
    }

    pub fn data(&self) -> &ColumnData {
        &self.data
    }

    /// A new column sharing this column's buffers and row index.
    pub fn shallow_copy(&self) -> Self {
        self.clone()
    }

    /// Whether this column shares its physical buffer with `other`.
    pub fn shares_buffer_with(&self, other: &Column) -> bool {
        match (&self.data, &other.data) {
            (ColumnData::Bool(a), ColumnData::Bool(b)) | (ColumnData::Int8(a), ColumnData::Int8(b)) => {
                Arc::ptr_eq(a, b)
            }
            (ColumnData::Int16(a), ColumnData::Int16(b)) => Arc::ptr_eq(a, b),
            (ColumnData::Int32(a), ColumnData::Int32(b))
            | (ColumnData::Date32(a), ColumnData::Date32(b)) => Arc::ptr_eq(a, b),
            (ColumnData::Int64(a), ColumnData::Int64(b)) => Arc::ptr_eq(a, b),
            (ColumnData::Float32(a), ColumnData::Float32(b)) => Arc::ptr_eq(a, b),
            (ColumnData::Float64(a), ColumnData::Float64(b)) => Arc::ptr_eq(a, b),
            (ColumnData::Str32(a), ColumnData::Str32(b)) => std::ptr::eq(a.chars(), b.chars()),
            (ColumnData::Str64(a), ColumnData::Str64(b)) => std::ptr::eq(a.chars(), b.chars()),
            _ => false,
        }
    }

    /// The logical value at `row`. Out-of-range rows read as NA.
    pub fn get(&self, row: usize) -> Value {
        if row >= self.nrows {
            return Value::Na;
        }
        match self.rowindex.get(row) {
            Some(physical) => self.data.value_at(physical),
            None => Value::Na,
        }
    }

    pub fn to_values(&self) -> Vec<Value> {
        (0..self.nrows).map(|row| self.get(row)).collect()
    }
}
