//! Boolean columns skip the registry entirely: the storage already holds `0` / `1`, which are
//! exactly the codes, so the input column is shared as the encoded column.

use crate::error::EncodeResult;
use crate::materialize;
use crate::result::EncodedLabels;
use labelenc_columnar::{Column, NA_BOOL};

pub(crate) fn encode_bool(column: &Column, values: &[i8]) -> EncodeResult<EncodedLabels> {
    let rowindex = column.rowindex();
    let observed = (0..column.nrows())
        .any(|row| rowindex.get(row).is_some_and(|j| values[j] != NA_BOOL));
    if !observed {
        log::debug!("all {} boolean rows are NA; nothing to encode", column.nrows());
        return Ok(EncodedLabels::default());
    }

    Ok(EncodedLabels {
        encoded: Some(materialize::encoded_table(column.shallow_copy())?),
        labels: Some(materialize::bool_labels_table()?),
    })
}
