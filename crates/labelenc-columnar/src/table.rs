#![forbid(unsafe_code)]

use crate::column::Column;
use crate::error::TableError;
use std::collections::HashSet;

/// An ordered set of named columns with a common logical row count.
#[derive(Clone, Debug)]
pub struct Table {
    names: Vec<String>,
    columns: Vec<Column>,
    nrows: usize,
}

impl Table {
    pub fn new<S: Into<String>>(columns: Vec<Column>, names: Vec<S>) -> Result<Self, TableError> {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        if names.len() != columns.len() {
            return Err(TableError::NameCountMismatch {
                columns: columns.len(),
                names: names.len(),
            });
        }

        let mut seen = HashSet::with_capacity(names.len());
        for name in &names {
            if !seen.insert(name.as_str()) {
                return Err(TableError::DuplicateName { name: name.clone() });
            }
        }

        let nrows = columns.first().map_or(0, Column::nrows);
        for (name, column) in names.iter().zip(&columns) {
            if column.nrows() != nrows {
                return Err(TableError::RowCountMismatch {
                    name: name.clone(),
                    expected: nrows,
                    actual: column.nrows(),
                });
            }
        }

        Ok(Self {
            names,
            columns,
            nrows,
        })
    }

    pub fn nrows(&self) -> usize {
        self.nrows
    }

    pub fn ncols(&self) -> usize {
        self.columns.len()
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn column(&self, idx: usize) -> Option<&Column> {
        self.columns.get(idx)
    }

    pub fn column_by_name(&self, name: &str) -> Option<&Column> {
        let idx = self.names.iter().position(|n| n == name)?;
        self.columns.get(idx)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Column)> + '_ {
        self.names.iter().map(String::as_str).zip(&self.columns)
    }
}
