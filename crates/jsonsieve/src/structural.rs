//! Incremental object and array parsers.
//!
//! These descend into a container one child at a time, consulting the
//! pattern set for every child to pick its strategy. Child results are
//! integrated into an insertion-ordered accumulator so the container can be
//! emitted at its own path when it closes; children handled by a skip
//! consumer are simply absent from the accumulator.

use crate::buffer::ChunkBuffer;
use crate::error::SieveError;
use crate::node::{Context, Node, Outcome, Progress};
use crate::path;
use crate::value::{Array, Map, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ObjectPhase {
    FirstKeyOrClose,
    /// After a comma: a key is required, `}` is a trailing comma.
    ExpectKey,
    /// After a key's colon: a value is required.
    ExpectValue,
    ExpectCommaOrClose,
}

#[derive(Debug)]
pub(crate) struct ObjectParser {
    path: String,
    entries: Map,
    phase: ObjectPhase,
    pending_key: Option<String>,
    child: Option<Box<Node>>,
    opened: bool,
}

impl ObjectParser {
    pub fn new(path: String) -> Self {
        Self {
            path,
            entries: Map::new(),
            phase: ObjectPhase::FirstKeyOrClose,
            pending_key: None,
            child: None,
            opened: false,
        }
    }

    pub fn advance(
        &mut self,
        buf: &mut ChunkBuffer,
        cx: &mut Context<'_>,
    ) -> Result<Progress, SieveError> {
        if !self.opened {
            // The spawning parent verified the `{`.
            buf.advance(1);
            self.opened = true;
        }
        loop {
            if let Some(child) = self.child.as_mut() {
                match child.advance(buf, cx)? {
                    Progress::NeedMore => return Ok(Progress::NeedMore),
                    Progress::Done(outcome) => {
                        self.child = None;
                        match outcome {
                            Outcome::Key(key) => {
                                self.pending_key = Some(key);
                                self.phase = ObjectPhase::ExpectValue;
                            }
                            Outcome::Value(value) => {
                                let key = self.pending_key.take().unwrap_or_default();
                                self.entries.insert(key, value);
                                self.phase = ObjectPhase::ExpectCommaOrClose;
                            }
                            Outcome::Skipped => {
                                self.pending_key = None;
                                self.phase = ObjectPhase::ExpectCommaOrClose;
                            }
                        }
                    }
                }
            }
            buf.skip_whitespace();
            let Some(c) = buf.peek() else {
                return Ok(Progress::NeedMore);
            };
            match c {
                '}' => match self.phase {
                    ObjectPhase::ExpectKey => {
                        return Err(SieveError::Structure(
                            "trailing comma before '}'".to_string(),
                        ));
                    }
                    ObjectPhase::ExpectValue => {
                        return Err(SieveError::Structure(
                            "expected value before '}'".to_string(),
                        ));
                    }
                    _ => {
                        buf.advance(1);
                        let value = Value::Object(core::mem::take(&mut self.entries));
                        cx.emit(&self.path, value.clone());
                        return Ok(Progress::Done(Outcome::Value(value)));
                    }
                },
                ',' => {
                    if self.phase != ObjectPhase::ExpectCommaOrClose {
                        return Err(SieveError::Structure("unexpected ','".to_string()));
                    }
                    buf.advance(1);
                    self.phase = ObjectPhase::ExpectKey;
                }
                '"' if matches!(
                    self.phase,
                    ObjectPhase::FirstKeyOrClose | ObjectPhase::ExpectKey
                ) =>
                {
                    self.child = Some(Box::new(Node::key_reader()));
                }
                _ if self.phase == ObjectPhase::ExpectValue => {
                    let key = self.pending_key.as_deref().unwrap_or_default();
                    let child_path = path::child_key(&self.path, key);
                    self.child = Some(Box::new(Node::for_value(c, child_path, cx.patterns)?));
                }
                other => {
                    return Err(SieveError::Structure(format!(
                        "unexpected character '{other}'"
                    )));
                }
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ArrayPhase {
    FirstOrClose,
    /// After a comma: a value is required, `]` is a trailing comma.
    ExpectValue,
    ExpectCommaOrClose,
}

#[derive(Debug)]
pub(crate) struct ArrayParser {
    path: String,
    elements: Array,
    index: usize,
    phase: ArrayPhase,
    child: Option<Box<Node>>,
    opened: bool,
}

impl ArrayParser {
    pub fn new(path: String) -> Self {
        Self {
            path,
            elements: Array::new(),
            index: 0,
            phase: ArrayPhase::FirstOrClose,
            child: None,
            opened: false,
        }
    }

    pub fn advance(
        &mut self,
        buf: &mut ChunkBuffer,
        cx: &mut Context<'_>,
    ) -> Result<Progress, SieveError> {
        if !self.opened {
            buf.advance(1);
            self.opened = true;
        }
        loop {
            if let Some(child) = self.child.as_mut() {
                match child.advance(buf, cx)? {
                    Progress::NeedMore => return Ok(Progress::NeedMore),
                    Progress::Done(outcome) => {
                        self.child = None;
                        if let Outcome::Value(value) = outcome {
                            self.elements.push(value);
                        }
                        self.index += 1;
                        self.phase = ArrayPhase::ExpectCommaOrClose;
                    }
                }
            }
            buf.skip_whitespace();
            let Some(c) = buf.peek() else {
                return Ok(Progress::NeedMore);
            };
            match c {
                ']' => match self.phase {
                    ArrayPhase::ExpectValue => {
                        return Err(SieveError::Structure(
                            "trailing comma before ']'".to_string(),
                        ));
                    }
                    _ => {
                        buf.advance(1);
                        let value = Value::Array(core::mem::take(&mut self.elements));
                        cx.emit(&self.path, value.clone());
                        return Ok(Progress::Done(Outcome::Value(value)));
                    }
                },
                ',' => {
                    if self.phase != ArrayPhase::ExpectCommaOrClose {
                        return Err(SieveError::Structure("unexpected ','".to_string()));
                    }
                    buf.advance(1);
                    self.phase = ArrayPhase::ExpectValue;
                }
                _ if matches!(self.phase, ArrayPhase::FirstOrClose | ArrayPhase::ExpectValue) => {
                    let child_path = path::child_index(&self.path, self.index);
                    self.child = Some(Box::new(Node::for_value(c, child_path, cx.patterns)?));
                }
                other => {
                    return Err(SieveError::Structure(format!(
                        "unexpected character '{other}'"
                    )));
                }
            }
        }
    }
}
