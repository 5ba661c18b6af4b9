//! Checklist reference extraction from card bodies.

use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

#[expect(clippy::expect_used, reason = "pattern is a compile-time literal")]
static CHECKLIST_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"-\s*\[[^\]]*\]").expect("checklist marker pattern is valid"));

#[expect(clippy::expect_used, reason = "pattern is a compile-time literal")]
static REFERENCE_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"https?://(?:[-/\w.]|%[\da-fA-F]{2})+").expect("reference url pattern is valid")
});

/// References found in a card body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReferenceScan {
    /// Candidate URLs in body order, at most one per checklist marker.
    pub references: Vec<String>,
    /// 1-based numbers of lines carrying more than one checklist marker.
    pub ambiguous_lines: Vec<usize>,
}

/// Scans `body` for URLs attached to markdown checklist markers.
///
/// Each `- [ ]`-style marker claims the first URL after it on the same line,
/// stopping at the next marker. URLs with no marker before them on their
/// line are ignored. Lines holding several markers are still scanned but
/// are listed in [`ReferenceScan::ambiguous_lines`].
#[must_use]
pub fn scan_references(body: &str) -> ReferenceScan {
    let mut scan = ReferenceScan::default();
    for (index, line) in body.lines().enumerate() {
        let markers: Vec<_> = CHECKLIST_MARKER.find_iter(line).collect();
        if markers.len() > 1 {
            scan.ambiguous_lines.push(index + 1);
        }

        let boundaries = markers
            .iter()
            .skip(1)
            .map(regex::Match::start)
            .chain(std::iter::once(line.len()));
        for (marker, end) in markers.iter().zip(boundaries) {
            let found = line
                .get(marker.end()..end)
                .and_then(|segment| REFERENCE_URL.find(segment));
            if let Some(url) = found {
                scan.references.push(url.as_str().to_owned());
            }
        }
    }
    scan
}

/// Returns the checklist-associated URLs in `body`.
#[must_use]
pub fn extract_references(body: &str) -> Vec<String> {
    scan_references(body).references
}
