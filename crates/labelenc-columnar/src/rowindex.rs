#![forbid(unsafe_code)]

use crate::error::ColumnError;
use std::sync::Arc;

/// Maps a column's logical rows onto slots of its physical buffer.
///
/// A logical row may map to no physical row at all (`None`), which makes the row NA regardless
/// of what the buffer holds. This is how outer joins and reindexing introduce missing rows
/// without copying data.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum RowIndex {
    /// Logical row `i` is physical row `i`.
    #[default]
    Identity,
    /// Logical row `i` is physical row `start + i * step`.
    Slice { start: usize, step: isize },
    /// Explicit physical row per logical row.
    Array(Arc<[Option<usize>]>),
}

impl RowIndex {
    pub fn slice(start: usize, step: isize) -> Self {
        RowIndex::Slice { start, step }
    }

    pub fn from_rows<I: IntoIterator<Item = Option<usize>>>(rows: I) -> Self {
        RowIndex::Array(rows.into_iter().collect())
    }

    /// Select the physical rows whose mask entry is `true`, in ascending order.
    pub fn from_filter<I: IntoIterator<Item = bool>>(mask: I) -> Self {
        RowIndex::Array(
            mask.into_iter()
                .enumerate()
                .filter_map(|(row, keep)| keep.then_some(Some(row)))
                .collect(),
        )
    }

    /// Number of logical rows this index defines, if it is bounded.
    pub fn len(&self) -> Option<usize> {
        match self {
            RowIndex::Array(rows) => Some(rows.len()),
            RowIndex::Identity | RowIndex::Slice { .. } => None,
        }
    }

    /// Physical row of logical row `row`, or `None` if the row is NA.
    #[inline]
    pub fn get(&self, row: usize) -> Option<usize> {
        match self {
            RowIndex::Identity => Some(row),
            RowIndex::Slice { start, step } => {
                Some(start.wrapping_add_signed((row as isize).wrapping_mul(*step)))
            }
            RowIndex::Array(rows) => rows[row],
        }
    }

    /// Check that `nrows` logical rows all land inside a buffer of `physical_len` rows.
    pub(crate) fn validate(&self, nrows: usize, physical_len: usize) -> Result<(), ColumnError> {
        match self {
            RowIndex::Identity => {
                if nrows > physical_len {
                    return Err(ColumnError::RowOutOfBounds {
                        row: physical_len,
                        physical: physical_len as isize,
                        len: physical_len,
                    });
                }
            }
            RowIndex::Slice { start, step } => {
                if nrows == 0 {
                    return Ok(());
                }
                // Slices are monotonic, so checking both endpoints covers every row.
                let last_row = nrows - 1;
                for row in [0, last_row] {
                    let physical = *start as i128 + row as i128 * *step as i128;
                    if physical < 0 || physical >= physical_len as i128 {
                        return Err(ColumnError::RowOutOfBounds {
                            row,
                            physical: physical.clamp(isize::MIN as i128, isize::MAX as i128)
                                as isize,
                            len: physical_len,
                        });
                    }
                }
            }
            RowIndex::Array(rows) => {
                if rows.len() != nrows {
                    return Err(ColumnError::RowIndexLength {
                        expected: nrows,
                        actual: rows.len(),
                    });
                }
                for (row, physical) in rows.iter().enumerate() {
                    if let Some(physical) = *physical {
                        if physical >= physical_len {
                            return Err(ColumnError::RowOutOfBounds {
                                row,
                                physical: physical as isize,
                                len: physical_len,
                            });
                        }
                    }
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn slice_supports_negative_and_zero_steps() {
        let reversed = RowIndex::slice(4, -1);
        assert_eq!((0..5).map(|i| reversed.get(i)).collect::<Vec<_>>(), vec![
            Some(4),
            Some(3),
            Some(2),
            Some(1),
            Some(0)
        ]);
        assert!(reversed.validate(5, 5).is_ok());
        assert!(reversed.validate(6, 5).is_err());

        let repeated = RowIndex::slice(2, 0);
        assert_eq!(repeated.get(100), Some(2));
        assert!(repeated.validate(1_000, 3).is_ok());
    }

    #[test]
    fn filter_selects_true_entries() {
        let ri = RowIndex::from_filter([true, false, false, true, true]);
        assert_eq!(ri.len(), Some(3));
        assert_eq!(ri.get(0), Some(0));
        assert_eq!(ri.get(1), Some(3));
        assert_eq!(ri.get(2), Some(4));

        let none = RowIndex::from_filter((0..200).map(|_| false));
        assert_eq!(none.len(), Some(0));
    }

    #[test]
    fn array_validation_reports_the_offending_row() {
        let ri = RowIndex::from_rows([Some(0), None, Some(7)]);
        assert_eq!(
            ri.validate(3, 5),
            Err(ColumnError::RowOutOfBounds {
                row: 2,
                physical: 7,
                len: 5
            })
        );
        assert_eq!(
            ri.validate(2, 10),
            Err(ColumnError::RowIndexLength {
                expected: 2,
                actual: 3
            })
        );
        assert!(ri.validate(3, 8).is_ok());
    }
}
