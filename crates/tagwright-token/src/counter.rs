//! Token counter with an exact path and an estimate fallback.
//!
//! The encoder is built lazily, at most once per counter. A failed build
//! leaves the counter without an encoder and the next call tries again.
//! Every failure, at build or encode time, degrades to
//! [`estimate_tokens`].

use std::sync::Arc;

use once_cell::sync::{Lazy, OnceCell};
use serde::Serialize;
use tracing::{debug, warn};

use crate::encoder::{Encoder, TiktokenEncoder};
use crate::error::TokenError;
use crate::stats::{char_count, TokenStats};

/// Builds the encoder on first use.
pub type EncoderLoader = Box<dyn Fn() -> Result<Arc<dyn Encoder>, TokenError> + Send + Sync>;

static SHARED: Lazy<TokenCounter> = Lazy::new(TokenCounter::new);

/// The process-wide counter, using cl100k_base.
pub fn shared() -> &'static TokenCounter {
    &SHARED
}

/// Count tokens with the shared counter. Exact and estimated counts are
/// indistinguishable here; use [`TokenCounter::count`] to tell them apart.
pub fn count_tokens(text: &str) -> usize {
    shared().count_tokens(text)
}

/// Token, character, word and line counts with the shared counter.
pub fn get_token_stats(text: &str) -> TokenStats {
    shared().stats(text)
}

/// Roughly four characters per token, rounded up.
pub fn estimate_tokens(text: &str) -> usize {
    char_count(text).div_ceil(4)
}

/// How a count was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CountMethod {
    Exact,
    Estimated,
}

/// A token count that remembers whether it is exact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenCount {
    Exact(usize),
    Estimated { tokens: usize, reason: TokenError },
}

impl TokenCount {
    pub fn tokens(&self) -> usize {
        match self {
            Self::Exact(tokens) | Self::Estimated { tokens, .. } => *tokens,
        }
    }

    pub fn method(&self) -> CountMethod {
        match self {
            Self::Exact(_) => CountMethod::Exact,
            Self::Estimated { .. } => CountMethod::Estimated,
        }
    }

    pub fn is_exact(&self) -> bool {
        matches!(self, Self::Exact(_))
    }
}

pub struct TokenCounter {
    encoder: OnceCell<Arc<dyn Encoder>>,
    loader: Option<EncoderLoader>,
}

impl Default for TokenCounter {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenCounter {
    /// Counter that loads cl100k_base on first use.
    pub fn new() -> Self {
        Self::with_loader(|| Ok(Arc::new(TiktokenEncoder::cl100k()?) as Arc<dyn Encoder>))
    }

    /// Counter that builds its encoder with `loader` on first use.
    pub fn with_loader<F>(loader: F) -> Self
    where
        F: Fn() -> Result<Arc<dyn Encoder>, TokenError> + Send + Sync + 'static,
    {
        Self {
            encoder: OnceCell::new(),
            loader: Some(Box::new(loader)),
        }
    }

    /// Counter using an already built encoder.
    pub fn with_encoder(encoder: Arc<dyn Encoder>) -> Self {
        Self {
            encoder: OnceCell::with_value(encoder),
            loader: None,
        }
    }

    /// Counter that always estimates.
    pub fn estimate_only() -> Self {
        Self {
            encoder: OnceCell::new(),
            loader: None,
        }
    }

    /// The encoder, building it if this is the first successful attempt.
    pub fn encoder(&self) -> Result<&Arc<dyn Encoder>, TokenError> {
        if let Some(encoder) = self.encoder.get() {
            return Ok(encoder);
        }
        let loader = self.loader.as_ref().ok_or(TokenError::Disabled)?;
        self.encoder.get_or_try_init(|| {
            let encoder = loader()?;
            debug!(encoder = encoder.name(), "Tokenizer initialized");
            Ok(encoder)
        })
    }

    /// Count tokens, reporting whether the count is exact.
    pub fn count(&self, text: &str) -> TokenCount {
        match self.encoder().and_then(|encoder| encoder.encode_len(text)) {
            Ok(tokens) => TokenCount::Exact(tokens),
            Err(reason) => {
                if reason == TokenError::Disabled {
                    debug!("Exact counting disabled, estimating");
                } else {
                    warn!(error = %reason, "Falling back to token estimate");
                }
                TokenCount::Estimated {
                    tokens: estimate_tokens(text),
                    reason,
                }
            }
        }
    }

    pub fn count_tokens(&self, text: &str) -> usize {
        self.count(text).tokens()
    }

    pub fn stats(&self, text: &str) -> TokenStats {
        TokenStats::new(text, self.count_tokens(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    /// Encoder that counts one token per word.
    struct WordEncoder;

    impl Encoder for WordEncoder {
        fn name(&self) -> &str {
            "words"
        }

        fn encode_len(&self, text: &str) -> Result<usize, TokenError> {
            Ok(text.split_whitespace().count())
        }
    }

    struct BrokenEncoder;

    impl Encoder for BrokenEncoder {
        fn name(&self) -> &str {
            "broken"
        }

        fn encode_len(&self, _text: &str) -> Result<usize, TokenError> {
            Err(TokenError::Encode("boom".to_string()))
        }
    }

    #[test]
    fn test_estimate() {
        assert_eq!(estimate_tokens(""), 0);
        assert_eq!(estimate_tokens("abc"), 1);
        assert_eq!(estimate_tokens("abcd"), 1);
        assert_eq!(estimate_tokens("abcde"), 2);
        assert_eq!(estimate_tokens("日本語です"), 2);
    }

    #[test]
    fn test_estimate_counts_surrogate_pairs() {
        let counter = TokenCounter::estimate_only();
        assert_eq!(estimate_tokens("😀😀😀"), 2);
        assert_eq!(counter.count_tokens("😀😀😀"), 2);

        let stats = counter.stats("😀😀😀");
        assert_eq!(stats.characters, 6);
        assert_eq!(stats.tokens, 2);
    }

    #[test]
    fn test_estimate_only_matches_estimate() {
        let counter = TokenCounter::estimate_only();
        for text in ["", "a", "<a>hello</a>", "four", "a longer sentence of text\n"] {
            assert_eq!(counter.count_tokens(text), estimate_tokens(text));
        }
        assert_eq!(
            counter.count("abcdefgh"),
            TokenCount::Estimated { tokens: 2, reason: TokenError::Disabled }
        );
    }

    #[test]
    fn test_injected_encoder() {
        let counter = TokenCounter::with_encoder(Arc::new(WordEncoder));
        let count = counter.count("one two three");
        assert!(count.is_exact());
        assert_eq!(count.tokens(), 3);
        assert_eq!(counter.encoder().unwrap().name(), "words");
    }

    #[test]
    fn test_encode_failure_falls_back() {
        let counter = TokenCounter::with_encoder(Arc::new(BrokenEncoder));
        let count = counter.count("123456789");
        assert_eq!(count.method(), CountMethod::Estimated);
        assert_eq!(count.tokens(), 3);
        assert_eq!(
            count,
            TokenCount::Estimated {
                tokens: 3,
                reason: TokenError::Encode("boom".to_string())
            }
        );
    }

    #[test]
    fn test_failed_load_is_retried() {
        let attempts = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&attempts);
        let counter = TokenCounter::with_loader(move || {
            let n = seen.fetch_add(1, Ordering::SeqCst);
            if n < 2 {
                Err(TokenError::EncoderUnavailable("not yet".to_string()))
            } else {
                Ok(Arc::new(WordEncoder) as Arc<dyn Encoder>)
            }
        });

        assert!(!counter.count("a b").is_exact());
        assert!(!counter.count("a b").is_exact());
        assert_eq!(attempts.load(Ordering::SeqCst), 2);

        assert_eq!(counter.count("a b"), TokenCount::Exact(2));
        assert_eq!(counter.count("a b c"), TokenCount::Exact(3));
        assert_eq!(attempts.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn test_concurrent_first_use_builds_once() {
        let attempts = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&attempts);
        let counter = TokenCounter::with_loader(move || {
            seen.fetch_add(1, Ordering::SeqCst);
            std::thread::sleep(Duration::from_millis(20));
            Ok(Arc::new(WordEncoder) as Arc<dyn Encoder>)
        });

        std::thread::scope(|s| {
            for _ in 0..8 {
                s.spawn(|| assert_eq!(counter.count_tokens("x y"), 2));
            }
        });
        assert_eq!(attempts.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_stats() {
        let counter = TokenCounter::with_encoder(Arc::new(WordEncoder));
        assert_eq!(
            counter.stats("<a>\n  hello  world\n</a>"),
            TokenStats { tokens: 4, characters: 23, words: 4, lines: 3 }
        );
    }

    #[test]
    fn test_shared_counter() {
        assert_eq!(count_tokens("hello world"), 2);
        assert_eq!(
            get_token_stats(""),
            TokenStats { tokens: 0, characters: 0, words: 0, lines: 1 }
        );
        assert_eq!(get_token_stats("  a  b   c ").words, 3);
        assert_eq!(shared().count("<|endoftext|>").tokens(), 4);
        assert!(!shared().count("<|endoftext|>").is_exact());
    }
}
