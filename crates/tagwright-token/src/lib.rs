//! # Tagwright Token
//!
//! Token counting and statistics for prompts.
//!
//! Counts are exact when the cl100k_base vocabulary can be loaded and the
//! text encodes cleanly, and fall back to a length-based estimate otherwise.

pub mod analyzer;
pub mod counter;
pub mod encoder;
pub mod error;
pub mod reporter;
pub mod stats;

pub use analyzer::{analyze_file, analyze_text, Analysis};
pub use counter::{
    count_tokens, estimate_tokens, get_token_stats, shared, CountMethod, TokenCount, TokenCounter,
};
pub use encoder::{Encoder, TiktokenEncoder};
pub use error::TokenError;
pub use reporter::TokenReport;
pub use stats::TokenStats;
