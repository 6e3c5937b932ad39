//! Column storage consumed by the `labelenc` encoder.
//!
//! This crate focuses on:
//! - Typed physical buffers with in-band NA sentinels (`ColumnData`).
//! - Row indirection (`RowIndex`) so views over a buffer never copy it.
//! - String columns as one shared character buffer plus per-row offsets.
//! - Named tables assembled from equal-length columns.

#![forbid(unsafe_code)]

mod column;
mod error;
mod na;
mod rowindex;
mod strings;
mod table;
mod types;

pub use crate::column::{Column, ColumnData, Primitive};
pub use crate::error::{ColumnError, TableError};
pub use crate::na::{NaMarker, NA_BOOL};
pub use crate::rowindex::RowIndex;
pub use crate::strings::{StrOffset, StringData};
pub use crate::table::Table;
pub use crate::types::{ElementType, LogicalType, Value};
