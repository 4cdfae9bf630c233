use thiserror::Error;

/// Errors raised while preparing inputs for the string, HTTP and time helpers.
///
/// The helpers themselves never fail; these only come up when text supplied
/// by a caller has to be turned into a typed value first.
#[derive(Error, Debug)]
pub enum Error {
    /// A regular expression did not compile
    #[error("invalid pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    /// A timestamp in none of the accepted formats
    #[error("invalid timestamp: {0}")]
    InvalidTimestamp(String),
}

pub type Result<T> = std::result::Result<T, Error>;
