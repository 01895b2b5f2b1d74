//! Parser node dispatch and strategy selection.
//!
//! Every value position is handled by exactly one [`Node`] variant. A single
//! [`Node::advance`] drives any variant until it reports [`Progress::Done`];
//! parents own their current child as a boxed node and integrate its
//! [`Outcome`] when it completes.

use crate::buffer::ChunkBuffer;
use crate::bulk::{BulkParser, SkipConsumer};
use crate::error::SieveError;
use crate::pattern::PathPattern;
use crate::scalar::{KeyReader, LiteralReader, NumberReader, StringReader};
use crate::sieve::Match;
use crate::structural::{ArrayParser, ObjectParser};
use crate::value::Value;

/// Result of driving a node once.
#[derive(Debug)]
pub(crate) enum Progress {
    /// The node could not finish with the buffered input; drive it again
    /// after more bytes arrive.
    NeedMore,
    Done(Outcome),
}

/// What a completed node hands back to its parent.
#[derive(Debug)]
pub(crate) enum Outcome {
    /// A decoded value to integrate into the parent's accumulator.
    Value(Value),
    /// An object key (key readers never emit).
    Key(String),
    /// A skipped subtree; nothing to integrate.
    Skipped,
}

/// Shared state threaded through every drive: the compiled patterns and the
/// output queue behind the emission filter.
pub(crate) struct Context<'a> {
    pub patterns: &'a [PathPattern],
    pub out: &'a mut Vec<Match>,
}

impl Context<'_> {
    /// The single chokepoint for emissions: a pair is delivered iff at least
    /// one pattern matches its path.
    pub fn emit(&mut self, path: &str, value: Value) {
        if self.patterns.iter().any(|p| p.matches(path)) {
            self.out.push(Match {
                path: path.to_string(),
                value,
            });
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Strategy {
    Incremental,
    Bulk,
    Skip,
}

/// Picks the strategy for a structural value at `path`.
///
/// Incremental descent whenever some pattern could still match strictly
/// below; otherwise bulk capture when the path itself is a match; otherwise
/// the subtree is irrelevant to every pattern and is skipped.
fn select_strategy(path: &str, patterns: &[PathPattern]) -> Strategy {
    if patterns.iter().any(|p| p.has_matching_descendants(path)) {
        Strategy::Incremental
    } else if patterns.iter().any(|p| p.matches(path)) {
        Strategy::Bulk
    } else {
        Strategy::Skip
    }
}

#[derive(Debug)]
pub(crate) enum Node {
    String(StringReader),
    Number(NumberReader),
    Literal(LiteralReader),
    Key(KeyReader),
    Object(ObjectParser),
    Array(ArrayParser),
    BulkObject(BulkParser),
    BulkArray(BulkParser),
    SkipObject(SkipConsumer),
    SkipArray(SkipConsumer),
}

impl Node {
    pub fn key_reader() -> Self {
        Node::Key(KeyReader::new())
    }

    /// Builds the node for a value starting with `first` at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`SieveError::Structure`] when `first` cannot start a JSON
    /// value.
    pub fn for_value(
        first: char,
        path: String,
        patterns: &[PathPattern],
    ) -> Result<Self, SieveError> {
        Ok(match first {
            '"' => Node::String(StringReader::new(path)),
            '-' | '0'..='9' => Node::Number(NumberReader::new(path)),
            't' => Node::Literal(LiteralReader::new(path, "true", Value::Boolean(true))),
            'f' => Node::Literal(LiteralReader::new(path, "false", Value::Boolean(false))),
            'n' => Node::Literal(LiteralReader::new(path, "null", Value::Null)),
            '{' => match select_strategy(&path, patterns) {
                Strategy::Incremental => Node::Object(ObjectParser::new(path)),
                Strategy::Bulk => Node::BulkObject(BulkParser::object(path)),
                Strategy::Skip => Node::SkipObject(SkipConsumer::object()),
            },
            '[' => match select_strategy(&path, patterns) {
                Strategy::Incremental => Node::Array(ArrayParser::new(path)),
                Strategy::Bulk => Node::BulkArray(BulkParser::array(path)),
                Strategy::Skip => Node::SkipArray(SkipConsumer::array()),
            },
            other => {
                return Err(SieveError::Structure(format!(
                    "unexpected character '{other}'"
                )));
            }
        })
    }

    pub fn advance(
        &mut self,
        buf: &mut ChunkBuffer,
        cx: &mut Context<'_>,
    ) -> Result<Progress, SieveError> {
        match self {
            Node::String(n) => n.advance(buf, cx),
            Node::Number(n) => n.advance(buf, cx),
            Node::Literal(n) => n.advance(buf, cx),
            Node::Key(n) => n.advance(buf),
            Node::Object(n) => n.advance(buf, cx),
            Node::Array(n) => n.advance(buf, cx),
            Node::BulkObject(n) | Node::BulkArray(n) => n.advance(buf, cx),
            Node::SkipObject(n) | Node::SkipArray(n) => n.advance(buf),
        }
    }
}
