//! The streaming engine.

use crate::buffer::ChunkBuffer;
use crate::error::SieveError;
use crate::node::{Context, Node, Progress};
use crate::path;
use crate::pattern::PathPattern;
use crate::value::Value;

/// One delivered `(path, value)` pair.
///
/// The engine guarantees that `path` matches at least one configured
/// pattern and that matches arrive in strict source order.
#[derive(Debug, Clone, PartialEq)]
pub struct Match {
    pub path: String,
    pub value: Value,
}

/// A push-driven JSON parser that emits only the values selected by a set
/// of JSONPath patterns.
///
/// Feed UTF-8 byte chunks with [`feed`]; each call returns the matches the
/// new bytes completed. [`finish`] signals end of input and runs the final
/// structural checks. Subtrees that cannot contribute a match are scanned
/// past without being materialized.
///
/// One sieve parses exactly one top-level JSON value; the first error is
/// terminal for the session.
///
/// # Examples
///
/// ```
/// use jsonsieve::{StreamingSieve, Value};
///
/// let mut sieve = StreamingSieve::new(["$.name"]).unwrap();
/// let mut matches = sieve.feed(br#"{"name":"Alice","age":30}"#).unwrap();
/// matches.extend(sieve.finish().unwrap());
///
/// assert_eq!(matches.len(), 1);
/// assert_eq!(matches[0].path, "$.name");
/// assert_eq!(matches[0].value, Value::String("Alice".into()));
/// ```
///
/// [`feed`]: StreamingSieve::feed
/// [`finish`]: StreamingSieve::finish
#[derive(Debug)]
pub struct StreamingSieve {
    buffer: ChunkBuffer,
    patterns: Vec<PathPattern>,
    root: Option<Box<Node>>,
    done: bool,
    failed: Option<SieveError>,
}

impl StreamingSieve {
    /// Compiles `patterns` and readies an engine for one document.
    ///
    /// # Errors
    ///
    /// Returns [`SieveError::Config`] when the list is empty or any pattern
    /// is rejected by [`PathPattern::parse`].
    pub fn new<I>(patterns: I) -> Result<Self, SieveError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let patterns = patterns
            .into_iter()
            .map(|p| PathPattern::parse(p.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        if patterns.is_empty() {
            return Err(SieveError::Config(
                "at least one pattern is required".to_string(),
            ));
        }
        Ok(Self {
            buffer: ChunkBuffer::new(),
            patterns,
            root: None,
            done: false,
            failed: None,
        })
    }

    /// Appends a chunk and returns the matches it completed, in source
    /// order.
    ///
    /// # Errors
    ///
    /// Structural and lexical errors are terminal: the same error is
    /// returned again for every subsequent call.
    pub fn feed(&mut self, bytes: &[u8]) -> Result<Vec<Match>, SieveError> {
        if let Some(err) = &self.failed {
            return Err(err.clone());
        }
        self.buffer.push(bytes);
        let mut out = Vec::new();
        match self.drive(&mut out) {
            Ok(()) => Ok(out),
            Err(err) => {
                self.failed = Some(err.clone());
                Err(err)
            }
        }
    }

    /// Signals end of input, returning any matches completed by the final
    /// drive.
    ///
    /// # Errors
    ///
    /// [`SieveError::Incomplete`] when no value was started or the document
    /// is still open, [`SieveError::Structure`] when non-whitespace input
    /// remains after the root value, or the session's terminal error if one
    /// already occurred.
    pub fn finish(mut self) -> Result<Vec<Match>, SieveError> {
        if let Some(err) = self.failed {
            return Err(err);
        }
        self.buffer.close();
        let mut out = Vec::new();
        self.drive(&mut out)?;
        if !self.done {
            return Err(if self.root.is_none() {
                SieveError::Incomplete("empty or whitespace-only input".to_string())
            } else {
                SieveError::Incomplete("unexpected end of input".to_string())
            });
        }
        self.buffer.skip_whitespace();
        if let Some(c) = self.buffer.peek() {
            return Err(SieveError::Structure(format!(
                "unexpected character '{c}' after document root"
            )));
        }
        Ok(out)
    }

    fn drive(&mut self, out: &mut Vec<Match>) -> Result<(), SieveError> {
        if self.done {
            return Ok(());
        }
        if self.root.is_none() {
            self.buffer.skip_whitespace();
            let Some(first) = self.buffer.peek() else {
                return Ok(());
            };
            self.root = Some(Box::new(Node::for_value(
                first,
                path::ROOT.to_string(),
                &self.patterns,
            )?));
        }
        let Self {
            buffer,
            patterns,
            root,
            done,
            ..
        } = self;
        let mut finished = false;
        if let Some(node) = root.as_mut() {
            let mut cx = Context {
                patterns: patterns.as_slice(),
                out,
            };
            finished = matches!(node.advance(buffer, &mut cx)?, Progress::Done(_));
        }
        if finished {
            *done = true;
            *root = None;
        }
        Ok(())
    }
}
