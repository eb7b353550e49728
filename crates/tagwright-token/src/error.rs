//! Token counting errors.
//!
//! None of these reach callers of the counting functions; they end up as
//! the reason attached to an estimated count.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("Exact counting disabled")]
    Disabled,

    #[error("Encoder unavailable: {0}")]
    EncoderUnavailable(String),

    #[error("Text contains disallowed special token {0}")]
    DisallowedSpecial(String),

    #[error("Encoding failed: {0}")]
    Encode(String),
}
