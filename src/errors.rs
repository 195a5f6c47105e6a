use thiserror::Error;

/// Errors returned by strict EVR parsing.
///
/// Lenient parsing ([`Evr::parse`](crate::Evr::parse)) and comparison never fail.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("empty EVR string")]
    Empty,

    #[error("invalid epoch {epoch:?} in {evr:?}: expected an unsigned 32-bit integer")]
    InvalidEpoch { epoch: String, evr: String },

    #[error("missing version in {evr:?}")]
    MissingVersion { evr: String },
}

pub type Result<T> = std::result::Result<T, Error>;
