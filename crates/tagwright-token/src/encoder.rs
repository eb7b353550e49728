//! Subword encoders used for exact counting.

use tiktoken_rs::CoreBPE;
use tracing::debug;

use crate::error::TokenError;

/// Special-token strings of cl100k_base.
///
/// Plain-text encoding refuses text containing any of these, so it is
/// reported as an error rather than silently counted.
const CL100K_SPECIAL_TOKENS: &[&str] = &[
    "<|endoftext|>",
    "<|fim_prefix|>",
    "<|fim_middle|>",
    "<|fim_suffix|>",
    "<|endofprompt|>",
];

/// Maps text to a number of subword tokens.
pub trait Encoder: Send + Sync {
    /// Name of the vocabulary, e.g. `cl100k_base`.
    fn name(&self) -> &str;

    fn encode_len(&self, text: &str) -> Result<usize, TokenError>;
}

/// A tiktoken vocabulary.
pub struct TiktokenEncoder {
    name: &'static str,
    bpe: CoreBPE,
    special: &'static [&'static str],
}

impl TiktokenEncoder {
    /// Load the cl100k_base vocabulary.
    pub fn cl100k() -> Result<Self, TokenError> {
        debug!("Loading cl100k_base tokenizer");
        let bpe = tiktoken_rs::cl100k_base()
            .map_err(|e| TokenError::EncoderUnavailable(format!("cl100k_base: {e}")))?;

        Ok(Self {
            name: "cl100k_base",
            bpe,
            special: CL100K_SPECIAL_TOKENS,
        })
    }
}

impl Encoder for TiktokenEncoder {
    fn name(&self) -> &str {
        self.name
    }

    fn encode_len(&self, text: &str) -> Result<usize, TokenError> {
        if let Some(token) = self.special.iter().find(|t| text.contains(**t)) {
            return Err(TokenError::DisallowedSpecial((*token).to_string()));
        }
        Ok(self.bpe.encode_ordinary(text).len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cl100k_counts() {
        let encoder = TiktokenEncoder::cl100k().unwrap();
        assert_eq!(encoder.name(), "cl100k_base");
        assert_eq!(encoder.encode_len("").unwrap(), 0);
        assert_eq!(encoder.encode_len("hello world").unwrap(), 2);
    }

    #[test]
    fn test_special_tokens_rejected() {
        let encoder = TiktokenEncoder::cl100k().unwrap();
        assert_eq!(
            encoder.encode_len("before <|endoftext|> after"),
            Err(TokenError::DisallowedSpecial("<|endoftext|>".to_string()))
        );
        // only the exact special-token spelling is refused
        assert!(encoder.encode_len("<|endoftext").is_ok());
    }
}
