use crate::boolean::encode_bool;
use crate::encoder::encode_generic;
use crate::error::{EncodeError, EncodeResult};
use crate::na::{PrimitiveSource, StringSource};
use crate::options::EncodeOptions;
use crate::result::EncodedLabels;
use labelenc_columnar::{Column, ColumnData, Table};

/// Dictionary-encode `column` with default options.
///
/// Returns the per-row codes and the labels they stand for. Codes are dense in `[0, n)` and
/// injective over the distinct non-NA values, but which value receives which code depends on
/// scheduling unless the scan is forced onto one thread (see [`EncodeOptions::serial`]).
///
/// # Errors
///
/// [`EncodeError::UnsupportedType`] for element types other than bool, the signed integers,
/// the floats, and the two string widths.
pub fn encode(column: &Column) -> EncodeResult<EncodedLabels> {
    encode_with_options(column, &EncodeOptions::default())
}

pub fn encode_with_options(
    column: &Column,
    options: &EncodeOptions,
) -> EncodeResult<EncodedLabels> {
    match column.data() {
        ColumnData::Bool(values) => encode_bool(column, values),
        ColumnData::Int8(values) => {
            encode_generic(column, PrimitiveSource::new(&values[..]), options)
        }
        ColumnData::Int16(values) => {
            encode_generic(column, PrimitiveSource::new(&values[..]), options)
        }
        ColumnData::Int32(values) => {
            encode_generic(column, PrimitiveSource::new(&values[..]), options)
        }
        ColumnData::Int64(values) => {
            encode_generic(column, PrimitiveSource::new(&values[..]), options)
        }
        ColumnData::Float32(values) => {
            encode_generic(column, PrimitiveSource::new(&values[..]), options)
        }
        ColumnData::Float64(values) => {
            encode_generic(column, PrimitiveSource::new(&values[..]), options)
        }
        ColumnData::Str32(data) => encode_generic(
            column,
            StringSource::new(data, options.empty_string_is_na),
            options,
        ),
        ColumnData::Str64(data) => encode_generic(
            column,
            StringSource::new(data, options.empty_string_is_na),
            options,
        ),
        ColumnData::Void(_) | ColumnData::Date32(_) => {
            Err(EncodeError::UnsupportedType(column.element_type()))
        }
    }
}

/// Encode every column of `table` independently, in column order.
///
/// Labels are not shared between columns. The first unsupported column aborts the whole call.
pub fn encode_table(
    table: &Table,
    options: &EncodeOptions,
) -> EncodeResult<Vec<(String, EncodedLabels)>> {
    table
        .iter()
        .map(|(name, column)| Ok((name.to_owned(), encode_with_options(column, options)?)))
        .collect()
}
