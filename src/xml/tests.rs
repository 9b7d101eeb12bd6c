#![cfg(test)]

use super::*;

fn violations(input: &str) -> Vec<Violation> {
    Checker::check_str(input).into_iter().collect()
}

#[test]
fn test_well_formed_documents() {
    for input in [
        "<title>Hello World</title>",
        "<div><span>text</span></div>",
        "<?xml version='1.0'?>\n<root>Test</root>",
        "<item/>",
        "<a>\n  <b attr=\"value\">\n    <c/>\n  </b>\n</a>",
        "",
        "\n\n\n",
    ] {
        let report = Checker::check_str(input);
        assert!(
            report.is_well_formed(),
            "Expected no violations for {input:?}, got: {report}"
        );
    }
}

#[test]
fn test_mismatched_tags() {
    assert_eq!(
        violations("<title>Hello</div>"),
        [Violation::Mismatch {
            line: 1,
            expected: "title".into(),
            found: "div".into(),
        }]
    );

    // Interleaved tags produce one mismatch per bad closing tag.
    assert_eq!(
        violations("<b>bold <i>italic</b></i>"),
        [
            Violation::Mismatch {
                line: 1,
                expected: "i".into(),
                found: "b".into(),
            },
            Violation::Mismatch {
                line: 1,
                expected: "b".into(),
                found: "i".into(),
            },
        ]
    );
}

#[test]
fn test_unmatched_closing() {
    assert_eq!(
        violations("</lonely>"),
        [Violation::UnmatchedClosing {
            line: 1,
            name: "lonely".into(),
        }]
    );
}

#[test]
fn test_unclosed_tags() {
    assert_eq!(
        violations("<title>Hello World"),
        [Violation::UnclosedTag { name: "title".into() }]
    );

    // Innermost first: the stack drains top-down.
    assert_eq!(
        violations("<a><b><c>"),
        [
            Violation::UnclosedTag { name: "c".into() },
            Violation::UnclosedTag { name: "b".into() },
            Violation::UnclosedTag { name: "a".into() },
        ]
    );
}

#[test]
fn test_missing_close_bracket() {
    assert_eq!(
        violations("<title>Hello</title"),
        [
            Violation::MissingClose { line: 1 },
            Violation::UnclosedTag { name: "title".into() },
        ],
        "The malformed closing tag is abandoned, so the opening tag also goes unclosed."
    );
}

#[test]
fn test_malformed_between_text() {
    assert_eq!(
        violations("<a>x > y</a>"),
        [Violation::MalformedText { line: 1 }]
    );

    // A stray '>' after the last tag on the line counts too.
    assert_eq!(
        violations("<a></a> trailing >"),
        [Violation::MalformedText { line: 1 }]
    );

    assert!(
        violations("<a>clean text</a> and a clean tail").is_empty(),
        "Text without angle brackets is fine anywhere."
    );
}

#[test]
fn test_invalid_tag_formats() {
    assert_eq!(
        violations("< title>Hello</title>"),
        [
            Violation::InvalidTag {
                line: 1,
                raw: "< title>".into(),
            },
            Violation::UnmatchedClosing {
                line: 1,
                name: "title".into(),
            },
        ],
        "An invalid opening tag is reported and never pushed."
    );

    assert_eq!(
        violations("<1bad></1bad>"),
        [
            Violation::InvalidTag { line: 1, raw: "<1bad>".into() },
            Violation::InvalidTag { line: 1, raw: "</1bad>".into() },
        ]
    );
}

#[test]
fn test_self_closing() {
    assert!(Checker::check_str("<a><br/><br /></a>").is_well_formed());

    assert_eq!(
        violations("<a></></a>"),
        [Violation::NamelessSelfClosing { line: 1 }]
    );
}

#[test]
fn test_processing_instructions() {
    // Both as a whole line and inline.
    assert!(Checker::check_str("<?xml version='1.0'?>\n<root>Test</root>").is_well_formed());
    assert!(Checker::check_str("<?xml version='1.0'?><root>Test</root>").is_well_formed());
}

#[test]
fn test_line_numbers_and_order() {
    let input = "<root>\n  <a>\n  </b>\n  <c>x > y</c>\n</root";
    assert_eq!(
        violations(input),
        [
            Violation::Mismatch {
                line: 3,
                expected: "a".into(),
                found: "b".into(),
            },
            Violation::MalformedText { line: 4 },
            Violation::MissingClose { line: 5 },
            Violation::UnclosedTag { name: "root".into() },
        ],
        "Violations should arrive in encounter order with 1-based line numbers."
    );

    assert!(
        violations("just text with a stray > in it").is_empty(),
        "Text on a line with no tags at all is never inspected."
    );
}

#[test]
fn test_incremental_scanning() {
    let mut checker = Checker::new();
    checker.scan_line("<a>");
    checker.scan_line("</b>");
    let report = checker.finish();

    assert_eq!(report.len(), 1);
    assert!(!report.is_well_formed());
    assert!(report.iter().next().is_some_and(Violation::is_mismatch));
}

#[test]
fn test_report_display() {
    assert_eq!(
        Checker::check_str("<a></a>").to_string(),
        "XML is well-formed! No errors found."
    );

    assert_eq!(
        Checker::check_str("<a></b>").to_string(),
        "XML Errors:\nLine 1: Tag mismatch. Expected </a> but found </b>."
    );

    assert_eq!(
        Checker::check_str("<note>").to_string(),
        "XML Errors:\nUnclosed tag: <note>"
    );
}

#[test]
fn test_check_reader() {
    let input = b"<a>\n</a>\n" as &[u8];
    let report = Checker::check_reader(input).expect("reading from a slice can't fail");
    assert!(report.is_well_formed());
}
