#![forbid(unsafe_code)]

use crate::types::ElementType;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColumnError {
    #[error("row index maps logical row {row} to physical row {physical}, but the column has {len} rows")]
    RowOutOfBounds {
        row: usize,
        physical: isize,
        len: usize,
    },

    #[error("row index covers {actual} rows, expected {expected}")]
    RowIndexLength { expected: usize, actual: usize },

    #[error("{element_type} offsets cannot address a character buffer of {len} bytes")]
    OffsetOverflow {
        element_type: ElementType,
        len: usize,
    },

    #[error("invalid string offsets at row {row}: {reason}")]
    InvalidOffsets { row: usize, reason: &'static str },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TableError {
    #[error("table has {columns} columns but {names} names")]
    NameCountMismatch { columns: usize, names: usize },

    #[error("duplicate column name: {name}")]
    DuplicateName { name: String },

    #[error("column {name} has {actual} rows, expected {expected}")]
    RowCountMismatch {
        name: String,
        expected: usize,
        actual: usize,
    },
}
