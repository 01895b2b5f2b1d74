use thiserror::Error;

/// Errors produced while configuring or driving a [`StreamingSieve`].
///
/// The engine is fail-fast: the first error is terminal for the session and
/// every later call re-raises it.
///
/// [`StreamingSieve`]: crate::StreamingSieve
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SieveError {
    /// The pattern list was rejected at construction.
    #[error("invalid pattern: {0}")]
    Config(String),
    /// The input is not well-formed JSON structure.
    #[error("malformed JSON: {0}")]
    Structure(String),
    /// A primitive lexeme is invalid (bad number, bad escape, stray text).
    #[error("invalid JSON token: {0}")]
    Lexical(String),
    /// End of input arrived with an unfinished document.
    #[error("incomplete input: {0}")]
    Incomplete(String),
}
