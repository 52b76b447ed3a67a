use thiserror::Error;

#[derive(Error, Debug, PartialEq, Clone)]
pub enum FilterError {
    #[error("property {0} is a location attribute and needs a location model")]
    ExpectedLocationModel(String),

    #[error("property {0} is not a location attribute")]
    UnexpectedLocationModel(String),

    #[error("unsupported comparator: {0}")]
    UnsupportedComparator(String),
}
