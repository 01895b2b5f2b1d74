//! Resumable readers for primitive lexemes and object keys.
//!
//! Every reader recognizes a complete lexeme at the front of the buffer or
//! consumes nothing at all. An incomplete lexeme reports [`Progress::NeedMore`]
//! and the next drive retries from the same unconsumed text, which is safe
//! precisely because no reader commits partial consumption.

use crate::buffer::ChunkBuffer;
use crate::error::SieveError;
use crate::node::{Context, Outcome, Progress};
use crate::scan::find_unescaped_quote;
use crate::value::Value;

/// JSON structural characters that may follow a number or literal.
pub(crate) fn is_terminator(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | ',' | '}' | ']')
}

/// Reads one string literal and emits the decoded text.
#[derive(Debug)]
pub(crate) struct StringReader {
    path: String,
}

impl StringReader {
    pub fn new(path: String) -> Self {
        Self { path }
    }

    pub fn advance(
        &mut self,
        buf: &mut ChunkBuffer,
        cx: &mut Context<'_>,
    ) -> Result<Progress, SieveError> {
        let rest = buf.rest();
        let Some(end) = find_unescaped_quote(rest.as_bytes(), 1) else {
            return Ok(Progress::NeedMore);
        };
        let lexeme = &rest[..=end];
        // The host decoder resolves escapes and surrogate pairs exactly as
        // the JSON grammar requires.
        let decoded: String = serde_json::from_str(lexeme)
            .map_err(|e| SieveError::Lexical(format!("invalid string literal: {e}")))?;
        buf.advance(end + 1);
        let value = Value::String(decoded);
        cx.emit(&self.path, value.clone());
        Ok(Progress::Done(Outcome::Value(value)))
    }
}

/// Reads one number. The lexeme commits only once a structural terminator
/// (or end of input) is visible past it, so a digit arriving in the next
/// chunk can still extend the number.
#[derive(Debug)]
pub(crate) struct NumberReader {
    path: String,
}

impl NumberReader {
    pub fn new(path: String) -> Self {
        Self { path }
    }

    fn is_number_byte(b: u8) -> bool {
        matches!(b, b'0'..=b'9' | b'-' | b'+' | b'.' | b'e' | b'E')
    }

    pub fn advance(
        &mut self,
        buf: &mut ChunkBuffer,
        cx: &mut Context<'_>,
    ) -> Result<Progress, SieveError> {
        let rest = buf.rest();
        let end = match rest.bytes().position(|b| !Self::is_number_byte(b)) {
            Some(i) => {
                let c = rest[i..].chars().next().unwrap_or('\0');
                if !is_terminator(c) {
                    return Err(SieveError::Lexical(format!(
                        "unexpected character '{c}' in number"
                    )));
                }
                i
            }
            None if buf.is_closed() => rest.len(),
            None => return Ok(Progress::NeedMore),
        };
        let lexeme = &rest[..end];
        let number: f64 = serde_json::from_str(lexeme)
            .map_err(|e| SieveError::Lexical(format!("invalid number {lexeme:?}: {e}")))?;
        buf.advance(end);
        let value = Value::Number(number);
        cx.emit(&self.path, value.clone());
        Ok(Progress::Done(Outcome::Value(value)))
    }
}

/// Reads `true`, `false`, or `null`, selected by the leading character.
#[derive(Debug)]
pub(crate) struct LiteralReader {
    path: String,
    literal: &'static str,
    value: Value,
}

impl LiteralReader {
    pub fn new(path: String, literal: &'static str, value: Value) -> Self {
        Self {
            path,
            literal,
            value,
        }
    }

    pub fn advance(
        &mut self,
        buf: &mut ChunkBuffer,
        cx: &mut Context<'_>,
    ) -> Result<Progress, SieveError> {
        let rest = buf.rest();
        let literal = self.literal;
        if rest.len() < literal.len() {
            if !literal.as_bytes().starts_with(rest.as_bytes()) {
                return Err(SieveError::Lexical(format!(
                    "invalid literal, expected {literal:?}"
                )));
            }
            return Ok(Progress::NeedMore);
        }
        if !rest.starts_with(literal) {
            return Err(SieveError::Lexical(format!(
                "invalid literal, expected {literal:?}"
            )));
        }
        match rest[literal.len()..].chars().next() {
            Some(c) if is_terminator(c) => {}
            Some(c) => {
                return Err(SieveError::Lexical(format!(
                    "unexpected character '{c}' after {literal:?}"
                )));
            }
            None if buf.is_closed() => {}
            None => return Ok(Progress::NeedMore),
        }
        buf.advance(literal.len());
        cx.emit(&self.path, self.value.clone());
        Ok(Progress::Done(Outcome::Value(self.value.clone())))
    }
}

/// Reads `"key" WS ':'` atomically. Keys are not emitted.
#[derive(Debug)]
pub(crate) struct KeyReader;

impl KeyReader {
    pub fn new() -> Self {
        Self
    }

    pub fn advance(&mut self, buf: &mut ChunkBuffer) -> Result<Progress, SieveError> {
        let rest = buf.rest();
        let Some(end) = find_unescaped_quote(rest.as_bytes(), 1) else {
            return Ok(Progress::NeedMore);
        };
        let after = rest[end + 1..].trim_start_matches([' ', '\t', '\n', '\r']);
        if !after.starts_with(':') {
            // The colon is the key's terminator; without it the key has not
            // been read yet.
            return Ok(Progress::NeedMore);
        }
        let lexeme = &rest[..=end];
        let key: String = serde_json::from_str(lexeme)
            .map_err(|e| SieveError::Lexical(format!("invalid object key: {e}")))?;
        let consumed = rest.len() - after.len() + 1;
        buf.advance(consumed);
        Ok(Progress::Done(Outcome::Key(key)))
    }
}
