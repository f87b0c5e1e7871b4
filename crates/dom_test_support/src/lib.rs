mod fixture;

pub use fixture::{FIXTURE_FORMAT_V1, Fixture, load_fixture, parse_fixture};

fn line_at(lines: &[String], i: usize) -> &str {
    lines.get(i).map(String::as_str).unwrap_or("<missing>")
}

/// Windowed description of the first differing line between two outlines.
pub fn diff_lines(expected: &[String], actual: &[String]) -> String {
    use std::fmt::Write;
    let max = expected.len().max(actual.len());
    let mismatch = (0..max).find(|&i| line_at(expected, i) != line_at(actual, i));

    let mut out = String::new();
    if let Some(i) = mismatch {
        let start = i.saturating_sub(2);
        let end = (i + 3).min(max);
        let _ = writeln!(
            &mut out,
            "first mismatch at line {} (showing {}..={}):",
            i + 1,
            start + 1,
            end
        );
        for idx in start..end {
            let marker = if idx == i { ">" } else { " " };
            let (left, right) = (line_at(expected, idx), line_at(actual, idx));
            let _ = writeln!(&mut out, "{marker} {:>4}  expected: {left}", idx + 1);
            let _ = writeln!(&mut out, "{marker} {:>4}    actual: {right}", idx + 1);
        }
    }
    let _ = writeln!(
        &mut out,
        "expected {} lines, actual {} lines",
        expected.len(),
        actual.len()
    );
    out
}

/// Assert that a document outline matches, printing a windowed diff otherwise.
pub fn assert_outline(expected: &[String], actual: &[String], label: &str) {
    if expected != actual {
        panic!("outline mismatch for {label}\n{}", diff_lines(expected, actual));
    }
}
