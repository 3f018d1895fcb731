use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("param `{param}` must be {expected}")]
    InvalidArgument {
        param: &'static str,
        expected: &'static str,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
