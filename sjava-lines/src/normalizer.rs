use std::str::Lines;

use serde::Serialize;

/// What happened to one raw line of source text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum RawLine {
    Kept(String),
    Skipped,
    Rejected(RejectReason),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RejectReason {
    /// `//` that does not start the line, or a `/*` block comment.
    BadComment,
    /// Last visible character is not `;`, `{` or `}`.
    BadTerminator,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct NormalizedSource {
    pub lines: Vec<String>,
    pub rejected: usize,
}

impl NormalizedSource {
    pub fn is_clean(&self) -> bool {
        self.rejected == 0
    }
}

pub struct Normalizer<'src> {
    lines: Lines<'src>,
}

impl<'src> Normalizer<'src> {
    pub fn new(content: &'src str) -> Self {
        Self {
            lines: content.lines(),
        }
    }

    fn next_line(&mut self) -> Option<RawLine> {
        let raw = self.lines.next()?;

        if raw.trim().is_empty() || raw.starts_with("//") {
            return Some(RawLine::Skipped);
        }

        if raw.contains("/*") || raw.trim_start().starts_with("//") {
            return Some(RawLine::Rejected(RejectReason::BadComment));
        }

        if !raw.trim_end().ends_with([';', '{', '}']) {
            return Some(RawLine::Rejected(RejectReason::BadTerminator));
        }

        Some(RawLine::Kept(collapse_whitespace(raw)))
    }
}

impl Iterator for Normalizer<'_> {
    type Item = RawLine;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_line()
    }
}

fn collapse_whitespace(line: &str) -> String {
    line.split_whitespace().collect::<Vec<_>>().join(" ")
}

pub fn normalize(content: &str) -> NormalizedSource {
    let mut source = NormalizedSource::default();

    for (index, line) in Normalizer::new(content).enumerate() {
        match line {
            RawLine::Kept(text) => source.lines.push(text),
            RawLine::Skipped => {}
            RawLine::Rejected(reason) => {
                tracing::debug!("rejected raw line {}: {reason:?}", index + 1);
                source.rejected += 1;
            }
        }
    }

    source
}
