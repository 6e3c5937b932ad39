use labelenc_columnar::{ColumnError, ElementType, TableError};

pub type EncodeResult<T> = Result<T, EncodeError>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EncodeError {
    #[error("column type `{0}` is not supported")]
    UnsupportedType(ElementType),

    #[error("column has more than {limit} distinct labels")]
    TooManyLabels { limit: usize },

    #[error(transparent)]
    Column(#[from] ColumnError),

    #[error(transparent)]
    Table(#[from] TableError),
}
