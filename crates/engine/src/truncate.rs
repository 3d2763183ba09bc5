//! Header/footer-preserving truncation — the final safety net.
//!
//! Runs after the transformer, which may legitimately push a document past
//! its ceiling (the worked-example appendix ignores the assembly budget).
//! The character pass preferentially preserves the document's header region
//! and its usage-instructions footer; the line pass runs independently
//! afterwards for destinations with a line limit. Every pass that fires
//! appends a warning naming the limit that triggered it.
//!
//! Malformed documents (no recognizable header or footer) degrade to
//! simple end-truncation; truncation never fails.

use crate::pattern::{floor_char_boundary, footer_start, header_end, snap_to_paragraph};
use rulefit_core::{DestinationProfile, Tuning};
use tracing::debug;

/// Text of the marker appended wherever content was cut away.
pub const TRUNCATION_NOTICE: &str = "[truncated to fit destination limits]";

/// Enforce the profile's ceiling and line limit on a transformed document.
pub fn enforce(
    document: String,
    profile: &DestinationProfile,
    tuning: &Tuning,
    warnings: &mut Vec<String>,
) -> String {
    let mut doc = document;

    if doc.len() > profile.ceiling {
        doc = enforce_char_ceiling(&doc, profile.ceiling, tuning);
        debug!(len = doc.len(), ceiling = profile.ceiling, "character truncation applied");
        warnings.push(format!(
            "truncated to {} characters (character ceiling {})",
            doc.len(),
            profile.ceiling
        ));
    }

    if let Some(limit) = profile.line_limit {
        if doc.lines().count() > limit {
            doc = enforce_line_limit(&doc, limit);
            debug!(limit, "line truncation applied");
            warnings.push(format!("truncated to {limit} lines (line limit)"));
        }
    }

    doc
}

/// Character-ceiling pass. Precondition: `document.len() > ceiling`.
/// Postcondition: result length ≤ `ceiling`; may be shorter when a cut
/// snapped back to a paragraph break.
fn enforce_char_ceiling(document: &str, ceiling: usize, tuning: &Tuning) -> String {
    let marker = format!("\n\n{TRUNCATION_NOTICE}");

    let footer_at = footer_start(document).unwrap_or(document.len());
    let footer = &document[footer_at..];
    let available = ceiling.saturating_sub(marker.len() + footer.len());

    // A footer so large it starves the body is not worth preserving.
    if (available as f64) < tuning.footer_fallback_ratio * document.len() as f64 {
        return simple_truncate(document, ceiling, tuning, &marker);
    }

    let header_len = header_end(document).unwrap_or(0);
    let main_available = available.saturating_sub(header_len);
    if main_available == 0 || header_len > footer_at {
        return simple_truncate(document, ceiling, tuning, &marker);
    }

    let middle = &document[header_len..footer_at];
    let cut = floor_char_boundary(middle, main_available.min(middle.len()));
    let cut = snap_to_paragraph(middle, cut, tuning.paragraph_snap_ratio);
    format!("{}{}{marker}{footer}", &document[..header_len], &middle[..cut])
}

/// Cut the document at `ceiling − marker`, snapping back to the nearest
/// paragraph break when one lies within the tail of the span. Neither the
/// header nor the footer is given special treatment here.
fn simple_truncate(document: &str, ceiling: usize, tuning: &Tuning, marker: &str) -> String {
    let budget = ceiling.saturating_sub(marker.len());
    let cut = floor_char_boundary(document, budget.min(document.len()));
    let cut = snap_to_paragraph(document, cut, tuning.paragraph_snap_ratio);
    format!("{}{marker}", &document[..cut])
}

/// Line-limit pass: keep the first `limit − 2` lines, then a blank line
/// and the marker line, for exactly `limit` lines of output.
fn enforce_line_limit(document: &str, limit: usize) -> String {
    let keep = limit.saturating_sub(2);
    let kept: Vec<&str> = document.lines().take(keep).collect();
    format!("{}\n\n{TRUNCATION_NOTICE}", kept.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rulefit_core::{FormatStyle, TransformKind};

    fn profile(ceiling: usize, line_limit: Option<usize>) -> DestinationProfile {
        DestinationProfile {
            name: "test".into(),
            ceiling,
            line_limit,
            format: FormatStyle::Markdown,
            supports_symbols: true,
            transform: TransformKind::Generic,
            preamble: String::new(),
        }
    }

    /// A structured document of roughly `target` bytes with a recognizable
    /// header region and usage-instructions footer.
    fn structured_document(target: usize) -> String {
        let mut doc = String::from(
            "# Assistant Rules\n\nKeep changes small and reviewable.\n\n## Core Principles\n\n- stay scoped\n- be explicit\n\n\n",
        );
        let mut section = 0;
        while doc.len() < target {
            section += 1;
            doc.push_str(&format!(
                "## Section {section}\n\n{}\n\n",
                "Filler sentence for padding. ".repeat(12)
            ));
        }
        doc.push_str("\n## Usage Instructions\n\nPlace this file where the assistant finds it.\n");
        doc
    }

    #[test]
    fn no_truncation_under_the_ceiling() {
        let mut warnings = Vec::new();
        let doc = "short document".to_string();
        let out = enforce(doc.clone(), &profile(1_000, None), &Tuning::default(), &mut warnings);
        assert_eq!(out, doc);
        assert!(warnings.is_empty());
    }

    #[test]
    fn scenario_c_header_and_footer_survive() {
        let doc = structured_document(12_000);
        let footer = "Place this file where the assistant finds it.";
        let mut warnings = Vec::new();
        let out = enforce(doc, &profile(8_000, None), &Tuning::default(), &mut warnings);

        assert!(out.len() <= 8_000);
        assert!(out.contains("Keep changes small and reviewable."));
        assert!(out.contains("## Core Principles"));
        assert!(out.contains(footer));
        assert!(out.contains(TRUNCATION_NOTICE));
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("character ceiling"));
    }

    #[test]
    fn scenario_d_simple_truncation_without_markers() {
        // No title block, no usage-instructions footer.
        let doc = "Plain paragraph. ".repeat(60).trim_end().to_string()
            + "\n\n"
            + &"Another paragraph of filler text. ".repeat(200);
        assert!(doc.len() > 5_000);

        let mut warnings = Vec::new();
        let out = enforce(doc, &profile(5_000, None), &Tuning::default(), &mut warnings);
        assert!(out.len() <= 5_000);
        assert!(out.ends_with(TRUNCATION_NOTICE));
    }

    #[test]
    fn simple_branch_snaps_to_a_late_paragraph_break() {
        // One break sits at 96% of the cut span; the cut must land on it.
        let first = "a".repeat(4_750);
        let doc = format!("{first}\n\n{}", "b".repeat(4_000));
        let mut warnings = Vec::new();
        let out = enforce(doc, &profile(5_000, None), &Tuning::default(), &mut warnings);
        assert!(out.len() <= 5_000);
        assert_eq!(out, format!("{first}\n\n{TRUNCATION_NOTICE}"));
    }

    #[test]
    fn oversized_footer_falls_back_to_simple_truncation() {
        // Footer consumes nearly the whole ceiling, leaving less than 30%
        // of the document as available budget.
        let footer_body = "Usage detail. ".repeat(300);
        let doc = format!(
            "# Title\n\nIntro paragraph.\n\n## Core Principles\n\n- a\n\n\n{}\n\n## Usage Instructions\n\n{footer_body}",
            "body ".repeat(800),
        );
        let ceiling = footer_body.len() + 200;
        assert!(doc.len() > ceiling);

        let mut warnings = Vec::new();
        let out = enforce(doc, &profile(ceiling, None), &Tuning::default(), &mut warnings);
        assert!(out.len() <= ceiling);
        assert!(out.ends_with(TRUNCATION_NOTICE));
        // The footer body was not preserved in this branch.
        assert!(!out.contains("Usage detail."));
    }

    #[test]
    fn line_limit_keeps_prefix_and_appends_marker() {
        let doc: String = (1..=50).map(|i| format!("line {i}\n")).collect();
        let mut warnings = Vec::new();
        let out = enforce(doc, &profile(100_000, Some(10)), &Tuning::default(), &mut warnings);

        assert_eq!(out.lines().count(), 10);
        assert!(out.starts_with("line 1\n"));
        assert!(out.contains("line 8"));
        assert!(!out.contains("line 9\n"));
        assert!(out.ends_with(&format!("\n\n{TRUNCATION_NOTICE}")));
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("line limit"));
    }

    #[test]
    fn both_limits_fire_with_two_warnings() {
        let doc = structured_document(12_000);
        let mut warnings = Vec::new();
        let out = enforce(doc, &profile(8_000, Some(20)), &Tuning::default(), &mut warnings);
        assert!(out.len() <= 8_000);
        assert_eq!(out.lines().count(), 20);
        assert_eq!(warnings.len(), 2);
    }

    #[test]
    fn multibyte_text_never_splits_a_char() {
        let doc = "🎯".repeat(2_000);
        let mut warnings = Vec::new();
        let out = enforce(doc, &profile(1_000, None), &Tuning::default(), &mut warnings);
        assert!(out.len() <= 1_000);
        assert!(out.ends_with(TRUNCATION_NOTICE));
    }
}
