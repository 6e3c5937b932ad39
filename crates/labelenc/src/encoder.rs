//! The generic encoder: one instantiation per non-boolean element type.

use crate::error::EncodeResult;
use crate::materialize;
use crate::na::{self, LabelSource};
use crate::options::EncodeOptions;
use crate::parallel;
use crate::registry::LabelRegistry;
use crate::result::EncodedLabels;
use labelenc_columnar::{Column, NaMarker};

pub(crate) fn encode_generic<S: LabelSource>(
    column: &Column,
    source: S,
    options: &EncodeOptions,
) -> EncodeResult<EncodedLabels> {
    let nrows = column.nrows();
    let rowindex = column.rowindex();
    let registry = LabelRegistry::new();

    // NA rows are simply never overwritten.
    let mut codes = vec![i32::NA; nrows];
    let ranges = parallel::static_ranges(nrows, parallel::worker_count(nrows, options));
    log::debug!(
        "encoding {nrows} {} rows over {} range(s)",
        column.element_type(),
        ranges.len()
    );

    parallel::for_each_range(&mut codes, &ranges, |range, slots| {
        log::trace!("encoding rows {}..{}", range.start, range.end);
        for (row, slot) in range.zip(slots.iter_mut()) {
            if let Some(label) = na::resolve(rowindex, &source, row) {
                *slot = registry.code_for(label)?;
            }
        }
        Ok(())
    })?;

    if registry.is_empty() {
        log::debug!("all {nrows} rows are NA; nothing to encode");
        return Ok(EncodedLabels::default());
    }

    let map = registry.into_map();
    log::debug!("encoded {nrows} rows into {} labels", map.len());
    Ok(EncodedLabels {
        encoded: Some(materialize::encoded_table(Column::from_primitive(codes))?),
        labels: Some(materialize::labels_table::<S>(map)?),
    })
}
