//! Turning a finished registry into output tables.

use crate::error::EncodeResult;
use crate::na::LabelSource;
use crate::registry::LabelMap;
use crate::result::{ID, LABEL, LABEL_ID};
use labelenc_columnar::{Column, Table};

/// Build the `id` / `label` table by placing each label at its code.
///
/// Placement is by code, so the map's iteration order does not matter.
pub(crate) fn labels_table<S: LabelSource>(map: LabelMap<S::Label>) -> EncodeResult<Table> {
    let n = map.len();
    let mut slots: Vec<Option<S::Label>> = std::iter::repeat_with(|| None).take(n).collect();
    for (label, code) in map {
        if let Some(slot) = usize::try_from(code).ok().and_then(|k| slots.get_mut(k)) {
            *slot = Some(label);
        }
    }
    let labels: Vec<S::Label> = slots.into_iter().flatten().collect();
    debug_assert_eq!(labels.len(), n, "registry codes must be dense");

    let ids: Vec<i32> = (0..=i32::MAX).take(labels.len()).collect();
    let table = Table::new(
        vec![Column::from_primitive(ids), S::labels_column(labels)?],
        vec![ID, LABEL],
    )?;
    Ok(table)
}

/// The boolean domain is always listed in full, whether or not both values occur.
pub(crate) fn bool_labels_table() -> EncodeResult<Table> {
    let table = Table::new(
        vec![
            Column::from_primitive(vec![0i32, 1]),
            Column::from_bools([Some(false), Some(true)]),
        ],
        vec![ID, LABEL],
    )?;
    Ok(table)
}

pub(crate) fn encoded_table(codes: Column) -> EncodeResult<Table> {
    Ok(Table::new(vec![codes], vec![LABEL_ID])?)
}
