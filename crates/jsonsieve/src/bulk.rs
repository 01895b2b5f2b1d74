//! Whole-subtree capture and skip.

use crate::buffer::ChunkBuffer;
use crate::error::SieveError;
use crate::node::{Context, Outcome, Progress};
use crate::scan::BracketScan;
use crate::value::Value;

/// Captures one structural value by scanning to its matching close bracket,
/// then decodes the captured text in one shot with the host decoder.
///
/// Chosen when the value's own path matches a pattern and nothing strictly
/// below it can match, so there is no reason to decode child by child.
#[derive(Debug)]
pub(crate) struct BulkParser {
    path: String,
    scan: BracketScan,
}

impl BulkParser {
    pub fn object(path: String) -> Self {
        Self {
            path,
            scan: BracketScan::new(b'{', b'}'),
        }
    }

    pub fn array(path: String) -> Self {
        Self {
            path,
            scan: BracketScan::new(b'[', b']'),
        }
    }

    pub fn advance(
        &mut self,
        buf: &mut ChunkBuffer,
        cx: &mut Context<'_>,
    ) -> Result<Progress, SieveError> {
        let rest = buf.rest();
        let Some(close) = self.scan.step(rest.as_bytes()) else {
            return Ok(Progress::NeedMore);
        };
        let text = &rest[..=close];
        let value: Value = serde_json::from_str(text)
            .map_err(|e| SieveError::Lexical(format!("invalid JSON value: {e}")))?;
        buf.advance(close + 1);
        cx.emit(&self.path, value.clone());
        Ok(Progress::Done(Outcome::Value(value)))
    }
}

/// Advances past one structural value without capturing or decoding.
///
/// Same scan as [`BulkParser`]; the depth counter makes nesting depth a
/// non-issue (no recursion, no per-level state).
#[derive(Debug)]
pub(crate) struct SkipConsumer {
    scan: BracketScan,
}

impl SkipConsumer {
    pub fn object() -> Self {
        Self {
            scan: BracketScan::new(b'{', b'}'),
        }
    }

    pub fn array() -> Self {
        Self {
            scan: BracketScan::new(b'[', b']'),
        }
    }

    pub fn advance(&mut self, buf: &mut ChunkBuffer) -> Result<Progress, SieveError> {
        let Some(close) = self.scan.step(buf.rest().as_bytes()) else {
            return Ok(Progress::NeedMore);
        };
        buf.advance(close + 1);
        Ok(Progress::Done(Outcome::Skipped))
    }
}
