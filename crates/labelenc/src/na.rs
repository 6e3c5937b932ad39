//! NA detection and per-type value extraction for the generic encoder.
//!
//! A logical row is NA when either
//! - the row index maps it to no physical row, or
//! - the stored value carries its type's NA marker (integer `MIN`, any float NaN, or the NA bit
//!   of a string's end offset), or
//! - the value is a zero-length string and `EncodeOptions::empty_string_is_na` is set (the
//!   default).
//!
//! Row-index NA is checked first; such rows never reach the per-type check, so the physical
//! buffer is never read for them.

use crate::error::EncodeResult;
use labelenc_columnar::{Column, Primitive, RowIndex, StrOffset, StringData};
use ordered_float::OrderedFloat;
use std::hash::Hash;

/// A primitive element with a hashable, totally-equal label representation.
pub(crate) trait LabelKey: Primitive {
    type Key: Copy + Eq + Hash + Send + Sync;

    fn key(self) -> Self::Key;

    fn from_key(key: Self::Key) -> Self;
}

macro_rules! int_key {
    ($($t:ty),*) => {
        $(
            impl LabelKey for $t {
                type Key = $t;

                #[inline]
                fn key(self) -> Self::Key {
                    self
                }

                fn from_key(key: Self::Key) -> Self {
                    key
                }
            }
        )*
    };
}

int_key!(i8, i16, i32, i64);

// `OrderedFloat` equates `-0.0` with `0.0`, so both land on one label. NaN never gets here.
macro_rules! float_key {
    ($($t:ty),*) => {
        $(
            impl LabelKey for $t {
                type Key = OrderedFloat<$t>;

                #[inline]
                fn key(self) -> Self::Key {
                    OrderedFloat(self)
                }

                fn from_key(key: Self::Key) -> Self {
                    key.into_inner()
                }
            }
        )*
    };
}

float_key!(f32, f64);

/// Read access to the physical slots of one column, for one element type.
pub(crate) trait LabelSource: Sync {
    type Label: Eq + Hash + Send + Sync;

    /// The label stored at `physical`, or `None` if the stored value is NA.
    fn label_at(&self, physical: usize) -> Option<Self::Label>;

    /// Build the labels column from labels listed in code order.
    fn labels_column(labels: Vec<Self::Label>) -> EncodeResult<Column>;
}

pub(crate) struct PrimitiveSource<'a, T> {
    values: &'a [T],
}

impl<'a, T> PrimitiveSource<'a, T> {
    pub(crate) fn new(values: &'a [T]) -> Self {
        Self { values }
    }
}

impl<T: LabelKey> LabelSource for PrimitiveSource<'_, T> {
    type Label = T::Key;

    #[inline]
    fn label_at(&self, physical: usize) -> Option<Self::Label> {
        let value = self.values[physical];
        if value.is_na() {
            None
        } else {
            Some(value.key())
        }
    }

    fn labels_column(labels: Vec<Self::Label>) -> EncodeResult<Column> {
        Ok(Column::from_primitive(
            labels.into_iter().map(T::from_key).collect::<Vec<T>>(),
        ))
    }
}

/// Labels borrow straight from the column's character buffer; nothing is copied per row.
pub(crate) struct StringSource<'a, O> {
    data: &'a StringData<O>,
    empty_is_na: bool,
}

impl<'a, O> StringSource<'a, O> {
    pub(crate) fn new(data: &'a StringData<O>, empty_is_na: bool) -> Self {
        Self { data, empty_is_na }
    }
}

impl<'a, O: StrOffset> LabelSource for StringSource<'a, O> {
    type Label = &'a [u8];

    #[inline]
    fn label_at(&self, physical: usize) -> Option<Self::Label> {
        let data: &'a StringData<O> = self.data;
        let bytes = data.get(physical)?;
        if bytes.is_empty() && self.empty_is_na {
            return None;
        }
        Some(bytes)
    }

    fn labels_column(labels: Vec<Self::Label>) -> EncodeResult<Column> {
        let data = StringData::<O>::from_options(labels.into_iter().map(Some))?;
        Ok(Column::from_strings(data))
    }
}

/// Resolve logical row `row` to its label, or `None` if the row is NA at either level.
#[inline]
pub(crate) fn resolve<S: LabelSource>(
    rowindex: &RowIndex,
    source: &S,
    row: usize,
) -> Option<S::Label> {
    let physical = rowindex.get(row)?;
    source.label_at(physical)
}
