//! A line-oriented XML well-formedness checker.
//!
//! This is the reason the collections in this crate exist: [`Checker`] pushes every opening tag
//! name onto an [`ArrayStack`](crate::collections::stack::ArrayStack) and pops it when the
//! matching closing tag arrives, while a [`LinkedQueue`](crate::collections::queue::LinkedQueue)
//! collects every [`Violation`] in the order it was encountered. Properly nested tags form a
//! well-formed bracket sequence; anything else surfaces in the final [`Report`].
//!
//! The scan is deliberately naive: it takes every `<...>` span on a line at face value. Quoted
//! attribute values containing `>`, comments, CDATA sections and entities are all outside its
//! vocabulary, and a tag may not span lines.
//!
//! # Examples
//! ```
//! # use wellform::xml::Checker;
//! let report = Checker::check_str("<note><to>you</to></note>");
//! assert!(report.is_well_formed());
//!
//! let report = Checker::check_str("<b>bold <i>italic</b></i>");
//! assert_eq!(report.iter().count(), 2);
//! ```

mod checker;
mod tag;
mod tests;

pub use checker::*;
pub use tag::*;
