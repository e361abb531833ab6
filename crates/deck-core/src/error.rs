use std::num::ParseIntError;
use thiserror::Error;

/// Problems reading deck configuration from host markup.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("total slide count {raw:?} is not a number")]
    InvalidTotalSlides {
        raw: String,
        #[source]
        source: ParseIntError,
    },
    #[error("a presentation needs at least one slide")]
    NoSlides,
}
