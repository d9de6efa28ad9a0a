use thiserror::Error;

pub type Result<T> = std::result::Result<T, NormError>;

#[derive(Debug, Error)]
pub enum NormError {
    #[error("rule `{rule}`: invalid pattern: {source}")]
    Pattern {
        rule: String,
        #[source]
        source: regex::Error,
    },

    #[error("validation error: {0}")]
    Validation(String),
}
