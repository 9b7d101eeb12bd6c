use std::fmt::{self, Display, Formatter};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use derive_more::{Display, Error, IsVariant};

use super::tag::{Tag, TagError};
use crate::collections::linked::list;
use crate::collections::queue::LinkedQueue;
use crate::collections::stack::ArrayStack;

/// One way a document failed the well-formedness scan. Line numbers are 1-based; the unclosed-tag
/// variant carries none because it is only discovered once the input runs out.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error, IsVariant)]
pub enum Violation {
    /// A `<` with no `>` on the same line. The rest of the line is abandoned.
    #[display("Line {line}: Missing closing '>'")]
    MissingClose { line: usize },

    /// A raw `<` or `>` in the text between tags.
    #[display("Line {line}: Sub-phrase is not well constructed between matching tags.")]
    MalformedText { line: usize },

    /// A self-closing bracket pair with no name, like `</>`.
    #[display("Line {line}: Self-closing tag is missing a name.")]
    NamelessSelfClosing { line: usize },

    /// A `<...>` span that fits none of the recognized tag shapes.
    #[display("Line {line}: Invalid tag format: {raw}")]
    InvalidTag { line: usize, raw: String },

    /// A closing tag arriving while no tags were open.
    #[display("Line {line}: Closing tag </{name}> has no matching opening tag.")]
    UnmatchedClosing { line: usize, name: String },

    /// A closing tag that doesn't match the most recent open tag.
    #[display("Line {line}: Tag mismatch. Expected </{expected}> but found </{found}>.")]
    Mismatch {
        line: usize,
        expected: String,
        found: String,
    },

    /// An opening tag still unclosed when the input ended.
    #[display("Unclosed tag: <{name}>")]
    UnclosedTag { name: String },
}

/// A single-pass tag-nesting checker.
///
/// Opening tag names go onto a stack; each closing tag must pop its own name back off. That makes
/// properly nested tags exactly a well-formed bracket sequence, and makes every failure mode a
/// visible stack condition: popping on an empty stack (closing tag with nothing open), popping
/// the wrong name (interleaved tags), or names left on the stack at the end (never closed).
/// Violations accumulate in a queue so the report lists them in encounter order.
///
/// Feed lines with [`scan_line`](Checker::scan_line) and call [`finish`](Checker::finish), or use
/// the [`check_str`](Checker::check_str) / [`check_file`](Checker::check_file) conveniences.
///
/// # Examples
/// ```
/// # use wellform::xml::{Checker, Violation};
/// let report = Checker::check_str("<a><b>\n</b>\n</a>");
/// assert!(report.is_well_formed());
///
/// let report = Checker::check_str("<a></b>");
/// assert_eq!(
///     report.into_iter().next(),
///     Some(Violation::Mismatch {
///         line: 1,
///         expected: "a".into(),
///         found: "b".into(),
///     })
/// );
/// ```
#[derive(Debug, Default)]
pub struct Checker {
    open: ArrayStack<String>,
    violations: LinkedQueue<Violation>,
    line: usize,
}

impl Checker {
    /// Creates a checker with nothing scanned yet.
    pub fn new() -> Checker {
        Checker {
            open: ArrayStack::new(),
            violations: LinkedQueue::new(),
            line: 0,
        }
    }

    /// Scans the next line of the document for tags, applying the nesting rules to each one.
    /// Lines are counted internally, starting from 1.
    pub fn scan_line(&mut self, raw: &str) {
        self.line += 1;
        let line = raw.trim();

        if line.is_empty() {
            return;
        }
        // A whole-line XML prolog carries no nesting information.
        if line.starts_with("<?xml") && line.ends_with("?>") {
            return;
        }

        let mut search_from = 0;
        let mut last_tag_end = None;

        while let Some(offset) = line[search_from..].find('<') {
            let start = search_from + offset;

            let Some(offset) = line[start..].find('>') else {
                self.violations.enqueue(Violation::MissingClose { line: self.line });
                return;
            };
            let end = start + offset;

            self.scan_between(line, last_tag_end, start);
            self.classify_span(&line[start..=end]);

            last_tag_end = Some(end);
            search_from = end + 1;
        }

        // Text after the last tag gets the same treatment as text between tags.
        if let Some(prev_end) = last_tag_end {
            self.scan_between(line, Some(prev_end), line.len());
        }
    }

    /// Checks the text strictly between the previous `>` and the next `<` (or the end of the
    /// line) for stray angle brackets.
    fn scan_between(&mut self, line: &str, last_tag_end: Option<usize>, until: usize) {
        let Some(prev_end) = last_tag_end else {
            return;
        };

        if until > prev_end + 1 {
            let between = &line[prev_end + 1..until];
            if between.contains('<') || between.contains('>') {
                self.violations.enqueue(Violation::MalformedText { line: self.line });
            }
        }
    }

    /// Applies the nesting rules to one `<...>` span.
    fn classify_span(&mut self, span: &str) {
        match Tag::classify(span) {
            // Neither kind participates in nesting.
            Ok(Tag::ProcessingInstruction | Tag::SelfClosing(_)) => {},
            Ok(Tag::Opening(name)) => self.open.push(name),
            Ok(Tag::Closing(name)) => match self.open.pop() {
                None => self.violations.enqueue(Violation::UnmatchedClosing {
                    line: self.line,
                    name,
                }),
                Some(expected) if expected != name => {
                    self.violations.enqueue(Violation::Mismatch {
                        line: self.line,
                        expected,
                        found: name,
                    });
                },
                Some(_) => {},
            },
            Err(TagError::MissingName) => self
                .violations
                .enqueue(Violation::NamelessSelfClosing { line: self.line }),
            Err(TagError::Unrecognized) => self.violations.enqueue(Violation::InvalidTag {
                line: self.line,
                raw: span.to_owned(),
            }),
        }
    }

    /// Consumes the checker, draining any still-open tags into unclosed-tag violations (most
    /// recently opened first) and producing the final [`Report`].
    pub fn finish(mut self) -> Report {
        while let Some(name) = self.open.pop() {
            self.violations.enqueue(Violation::UnclosedTag { name });
        }

        Report {
            violations: self.violations,
        }
    }

    /// Checks a complete in-memory document.
    pub fn check_str(input: &str) -> Report {
        let mut checker = Checker::new();
        for line in input.lines() {
            checker.scan_line(line);
        }
        checker.finish()
    }

    /// Checks a document from any buffered reader.
    ///
    /// # Errors
    /// Returns the underlying [`io::Error`] if reading fails; violations found before the failure
    /// are lost.
    pub fn check_reader<R: BufRead>(reader: R) -> io::Result<Report> {
        let mut checker = Checker::new();
        for line in reader.lines() {
            checker.scan_line(&line?);
        }
        Ok(checker.finish())
    }

    /// Checks the file at `path`.
    ///
    /// # Errors
    /// Returns the underlying [`io::Error`] if the file can't be opened or read.
    pub fn check_file<P: AsRef<Path>>(path: P) -> io::Result<Report> {
        Self::check_reader(BufReader::new(File::open(path)?))
    }
}

/// The outcome of a scan: every [`Violation`], in the order it was encountered.
#[derive(Debug)]
pub struct Report {
    violations: LinkedQueue<Violation>,
}

impl Report {
    /// Returns true if the scan found no violations.
    pub const fn is_well_formed(&self) -> bool {
        self.violations.is_empty()
    }

    /// Returns the number of violations found.
    pub const fn len(&self) -> usize {
        self.violations.len()
    }

    /// Returns true if there are no violations; identical to
    /// [`is_well_formed`](Report::is_well_formed), provided for collection-like call sites.
    pub const fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// Returns an iterator over the violations in encounter order.
    pub fn iter(&self) -> list::Iter<'_, Violation> {
        self.violations.iter()
    }
}

impl IntoIterator for Report {
    type Item = Violation;

    type IntoIter = list::IntoIter<Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.violations.into_iter()
    }
}

impl<'a> IntoIterator for &'a Report {
    type Item = &'a Violation;

    type IntoIter = list::Iter<'a, Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Display for Report {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.is_well_formed() {
            return write!(f, "XML is well-formed! No errors found.");
        }

        write!(f, "XML Errors:")?;
        for violation in self.iter() {
            write!(f, "\n{violation}")?;
        }
        Ok(())
    }
}
