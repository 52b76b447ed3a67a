pub mod filter;
pub mod parse;
pub mod write;

pub use filter::FilterError;
pub use parse::ParseError;
pub use write::WriteError;

#[derive(Debug, PartialEq, Clone)]
pub enum Error {
    Parse(ParseError),
    Write(WriteError),
    Filter(FilterError),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Parse(e) => write!(f, "parse error: {}", e),
            Error::Write(e) => write!(f, "write error: {}", e),
            Error::Filter(e) => write!(f, "filter error: {}", e),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Parse(e) => Some(e),
            Error::Write(e) => Some(e),
            Error::Filter(e) => Some(e),
        }
    }
}

impl From<ParseError> for Error {
    fn from(err: ParseError) -> Self {
        Error::Parse(err)
    }
}

impl From<WriteError> for Error {
    fn from(err: WriteError) -> Self {
        Error::Write(err)
    }
}

impl From<FilterError> for Error {
    fn from(err: FilterError) -> Self {
        Error::Filter(err)
    }
}
