use crate::error::EncodeResult;
use labelenc_columnar::{Column, ColumnData, NaMarker, RowIndex, Table, NA_BOOL};

/// Name of the single column of [`EncodedLabels::encoded`].
pub const LABEL_ID: &str = "label_id";
/// Name of the code column of [`EncodedLabels::labels`].
pub const ID: &str = "id";
/// Name of the value column of [`EncodedLabels::labels`].
pub const LABEL: &str = "label";

/// Result of encoding one column.
///
/// Both tables are `None` when every row of the input was NA, which keeps "nothing observed"
/// apart from "one distinct value observed".
#[derive(Clone, Debug, Default)]
pub struct EncodedLabels {
    /// One `label_id` column with a code (or NA) per input row, in row order.
    pub encoded: Option<Table>,
    /// `id` / `label` columns; row `k` holds code `k` and the value it stands for.
    pub labels: Option<Table>,
}

impl EncodedLabels {
    pub fn is_empty(&self) -> bool {
        self.encoded.is_none() && self.labels.is_none()
    }

    pub fn label_count(&self) -> usize {
        self.labels.as_ref().map_or(0, Table::nrows)
    }

    pub fn labels_column(&self) -> Option<&Column> {
        self.labels.as_ref()?.column_by_name(LABEL)
    }

    /// Per-row codes, `None` for NA rows.
    ///
    /// Boolean columns are encoded by sharing the input column, so its `0`/`1` storage is read
    /// back as codes directly.
    pub fn codes(&self) -> Option<Vec<Option<i32>>> {
        let column = self.encoded.as_ref()?.column_by_name(LABEL_ID)?;
        let rowindex = column.rowindex();
        let rows = 0..column.nrows();
        match column.data() {
            ColumnData::Int32(codes) => Some(
                rows.map(|row| rowindex.get(row).map(|j| codes[j]).filter(|c| !c.is_na()))
                    .collect(),
            ),
            ColumnData::Bool(values) => Some(
                rows.map(|row| {
                    rowindex
                        .get(row)
                        .map(|j| values[j])
                        .filter(|&v| v != NA_BOOL)
                        .map(i32::from)
                })
                .collect(),
            ),
            _ => None,
        }
    }

    /// Rebuild the encoded column as a view of the labels through the codes.
    ///
    /// The result shares the labels' buffer; row `i` reads `label[code[i]]`.
    pub fn decode(&self) -> EncodeResult<Option<Column>> {
        let (Some(codes), Some(labels)) = (self.codes(), self.labels_column()) else {
            return Ok(None);
        };
        let nrows = codes.len();
        let rowindex = RowIndex::from_rows(
            codes
                .into_iter()
                .map(|code| code.and_then(|c| usize::try_from(c).ok())),
        );
        Ok(Some(labels.shallow_copy().with_rowindex(rowindex, nrows)?))
    }
}
