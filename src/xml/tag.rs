use std::sync::LazyLock;

use derive_more::{Display, Error, IsVariant};
use regex::Regex;

// The recognized tag shapes. Anchored because a span is either exactly one of these or nothing.
static OPENING_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^<([a-zA-Z][a-zA-Z0-9]*)(?:\s+[^>]*)?>$").expect("opening tag pattern is valid")
});
static CLOSING_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^</([a-zA-Z][a-zA-Z0-9]*)>$").expect("closing tag pattern is valid")
});
static SELF_CLOSING_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^<([a-zA-Z][a-zA-Z0-9]*)(?:\s+[^>]*)?/>$")
        .expect("self-closing tag pattern is valid")
});
static PROCESSING_INSTRUCTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^<\?[^>]*\?>$").expect("processing instruction pattern is valid")
});

/// A classified tag span. Tag names are `[a-zA-Z][a-zA-Z0-9]*` and case-sensitive; attributes are
/// permitted after the name of an opening or self-closing tag but are not inspected further.
#[derive(Debug, Clone, PartialEq, Eq, IsVariant)]
pub enum Tag {
    /// `<name>` or `<name attrs>`.
    Opening(String),
    /// `</name>`.
    Closing(String),
    /// `<name/>` or `<name attrs/>`. Needs no closing tag.
    SelfClosing(String),
    /// `<?...?>`, e.g. the `<?xml version="1.0"?>` prolog. Recognized so it can be ignored.
    ProcessingInstruction,
}

/// Why a `<...>` span failed to classify as a [`Tag`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum TagError {
    /// A self-closing bracket pair with nothing in front of the slash, like `</>` or `< />`.
    #[display("Self-closing tag is missing a name.")]
    MissingName,
    /// Anything else that doesn't fit a recognized shape.
    #[display("Invalid tag format")]
    Unrecognized,
}

impl Tag {
    /// Classifies one raw tag span, angle brackets included.
    ///
    /// # Examples
    /// ```
    /// # use wellform::xml::{Tag, TagError};
    /// assert_eq!(Tag::classify("<title>"), Ok(Tag::Opening("title".into())));
    /// assert_eq!(Tag::classify("<div class='x'>"), Ok(Tag::Opening("div".into())));
    /// assert_eq!(Tag::classify("</title>"), Ok(Tag::Closing("title".into())));
    /// assert_eq!(Tag::classify("<br/>"), Ok(Tag::SelfClosing("br".into())));
    /// assert_eq!(Tag::classify("<?xml version='1.0'?>"), Ok(Tag::ProcessingInstruction));
    /// assert_eq!(Tag::classify("</>"), Err(TagError::MissingName));
    /// assert_eq!(Tag::classify("<1bad>"), Err(TagError::Unrecognized));
    /// ```
    pub fn classify(raw: &str) -> Result<Tag, TagError> {
        if PROCESSING_INSTRUCTION.is_match(raw) {
            return Ok(Tag::ProcessingInstruction);
        }
        if let Some(captures) = SELF_CLOSING_TAG.captures(raw) {
            return Ok(Tag::SelfClosing(captures[1].to_owned()));
        }
        if let Some(captures) = CLOSING_TAG.captures(raw) {
            return Ok(Tag::Closing(captures[1].to_owned()));
        }
        if let Some(captures) = OPENING_TAG.captures(raw) {
            return Ok(Tag::Opening(captures[1].to_owned()));
        }

        // Distinguish a nameless self-closing pair from general garbage, since it gets its own
        // diagnostic. `</>` parses as "everything before the slash" being empty.
        if let Some(without_slash) = raw.strip_suffix("/>") {
            let body = without_slash.strip_prefix('<').unwrap_or(without_slash);
            if body.trim().is_empty() {
                return Err(TagError::MissingName);
            }
        }

        Err(TagError::Unrecognized)
    }

    /// Returns the tag's name, or [`None`] for a processing instruction.
    pub fn name(&self) -> Option<&str> {
        match self {
            Tag::Opening(name) | Tag::Closing(name) | Tag::SelfClosing(name) => Some(name),
            Tag::ProcessingInstruction => None,
        }
    }
}
