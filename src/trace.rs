//! Line buffer the demos write into instead of printing directly.
//!
//! Methods take `&self` so a fallback supplier can record its own call while
//! the pipeline that invoked it is still running.

use colored::Colorize;
use std::cell::RefCell;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Header,
    Value,
    Call,
    Note,
    Error,
    Separator,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceLine {
    pub kind: LineKind,
    pub text: String,
}

pub const SEPARATOR: &str = "----------";

#[derive(Debug, Default)]
pub struct Trace {
    lines: RefCell<Vec<TraceLine>>,
}

impl Trace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, kind: LineKind, text: impl Into<String>) {
        self.lines.borrow_mut().push(TraceLine {
            kind,
            text: text.into(),
        });
    }

    pub fn header(&self, text: impl Into<String>) {
        self.push(LineKind::Header, text);
    }

    pub fn value(&self, text: impl Into<String>) {
        self.push(LineKind::Value, text);
    }

    pub fn call(&self, text: impl Into<String>) {
        self.push(LineKind::Call, text);
    }

    pub fn note(&self, text: impl Into<String>) {
        self.push(LineKind::Note, text);
    }

    pub fn error(&self, text: impl Into<String>) {
        self.push(LineKind::Error, text);
    }

    pub fn separator(&self) {
        self.push(LineKind::Separator, SEPARATOR);
    }

    pub fn len(&self) -> usize {
        self.lines.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.borrow().is_empty()
    }

    /// Plain text of every line, in order.
    pub fn texts(&self) -> Vec<String> {
        self.lines.borrow().iter().map(|l| l.text.clone()).collect()
    }

    pub fn lines(&self) -> Vec<TraceLine> {
        self.lines.borrow().clone()
    }

    /// Drains the buffer, returning what was recorded.
    pub fn take(&self) -> Vec<TraceLine> {
        std::mem::take(&mut *self.lines.borrow_mut())
    }
}

impl TraceLine {
    pub fn render(&self, color: bool) -> String {
        if !color {
            return self.text.clone();
        }
        match self.kind {
            LineKind::Header => self.text.bold().cyan().to_string(),
            LineKind::Value => self.text.clone(),
            LineKind::Call => self.text.yellow().to_string(),
            LineKind::Note => self.text.dimmed().to_string(),
            LineKind::Error => self.text.red().to_string(),
            LineKind::Separator => self.text.dimmed().to_string(),
        }
    }
}
