//! Profile-driven rewrite pipeline.
//!
//! The transformer is an ordered list of pure `text -> text` steps. Each
//! step is independently toggled by the destination profile and applied in
//! a fixed order:
//!
//! 1. preamble injection (all profiles)
//! 2. guidelines note (`IdeGuidance`)
//! 3. objective annotation (`DetailedReasoning`)
//! 4. worked-example appendix (`DetailedReasoning`)
//! 5. symbol removal (profiles with `supports_symbols = false`)
//! 6. structural simplification (`Compact`, `PlainText`)
//!
//! Steps 4 is applied unconditionally once enabled — regardless of the
//! budget consumed during assembly — which is why the truncator exists as
//! a downstream safety net.

use crate::pattern;
use rulefit_core::{DestinationProfile, TransformKind};
use tracing::debug;

/// A single structural rewrite over the assembled document.
pub trait Rewrite {
    /// Stable step name for logs and diagnostics.
    fn name(&self) -> &'static str;
    fn apply(&self, document: &str) -> String;
}

/// Build the step sequence for a profile, in application order.
pub fn pipeline_for(profile: &DestinationProfile) -> Vec<Box<dyn Rewrite>> {
    let mut steps: Vec<Box<dyn Rewrite>> = vec![Box::new(PreambleInjection {
        preamble: profile.preamble.clone(),
    })];
    if profile.transform == TransformKind::IdeGuidance {
        steps.push(Box::new(GuidelinesNote));
    }
    if profile.transform == TransformKind::DetailedReasoning {
        steps.push(Box::new(ObjectiveAnnotation));
        steps.push(Box::new(WorkedExamples));
    }
    if !profile.supports_symbols {
        steps.push(Box::new(SymbolRemoval));
    }
    if matches!(
        profile.transform,
        TransformKind::Compact | TransformKind::PlainText
    ) {
        steps.push(Box::new(StructureSimplify));
    }
    steps
}

/// Run the profile's pipeline over the document.
pub fn transform(document: &str, profile: &DestinationProfile) -> String {
    let mut doc = document.to_string();
    for step in pipeline_for(profile) {
        doc = step.apply(&doc);
        debug!(step = step.name(), len = doc.len(), "rewrite step applied");
    }
    doc
}

// ── Step 1: preamble injection ────────────────────────────────────────────

/// Inserts the profile preamble immediately after the first top-level
/// heading and its first paragraph. When the document does not open with
/// that structure, the preamble is prepended instead — it is never dropped.
struct PreambleInjection {
    preamble: String,
}

impl Rewrite for PreambleInjection {
    fn name(&self) -> &'static str {
        "preamble_injection"
    }

    fn apply(&self, document: &str) -> String {
        match pattern::title_paragraph_end(document) {
            Some(at) => format!(
                "{}\n\n{}{}",
                &document[..at],
                self.preamble,
                &document[at..]
            ),
            None => format!("{}\n\n{}", self.preamble, document),
        }
    }
}

// ── Step 2: guidelines note ───────────────────────────────────────────────

/// Literal section the note is anchored to.
const GUIDELINES_HEADING: &str = "## Implementation Guidelines";

const GUIDELINES_NOTE: &str = "The guidelines below apply to edits made through the editor's AI \
features as well as chat-driven changes. Treat inline completions and \
multi-file agent edits the same way: read before writing.";

/// Inserts editor-integration guidance immediately before the
/// implementation-guidelines section, leaving the section itself
/// untouched. No-op when the section is absent.
struct GuidelinesNote;

impl Rewrite for GuidelinesNote {
    fn name(&self) -> &'static str {
        "guidelines_note"
    }

    fn apply(&self, document: &str) -> String {
        let needle = format!("\n\n{GUIDELINES_HEADING}");
        match document.find(&needle) {
            Some(at) => format!(
                "{}\n\n{}{}",
                &document[..at],
                GUIDELINES_NOTE,
                &document[at..]
            ),
            None => document.to_string(),
        }
    }
}

// ── Step 3: objective annotation ──────────────────────────────────────────

/// The marker token annotated for detailed-reasoning destinations.
const OBJECTIVE_MARKER: &str = "OBJECTIVE:";

const OBJECTIVE_ANNOTATED: &str = "OBJECTIVE (state the intended outcome before listing steps):";

/// Appends an inline instructional annotation after every occurrence of
/// the objective marker.
struct ObjectiveAnnotation;

impl Rewrite for ObjectiveAnnotation {
    fn name(&self) -> &'static str {
        "objective_annotation"
    }

    fn apply(&self, document: &str) -> String {
        document.replace(OBJECTIVE_MARKER, OBJECTIVE_ANNOTATED)
    }
}

// ── Step 4: worked-example appendix ───────────────────────────────────────

const WORKED_EXAMPLES: &str = "\
## Worked Examples

### Example: fixing a reported bug

Request: \"The date parser rejects single-digit days.\"

1. Reproduce first — add a failing test with the exact reported input.
2. Locate the parse path and fix the narrowest condition that makes the
   test pass.
3. Run the full test suite, not just the new test.
4. Commit the test and the fix together with a message naming the symptom.

### Example: declining an unsafe request

Request: \"Just force-push over whatever is on main.\"

Response: explain that history rewriting on a shared branch needs explicit
confirmation, propose a merge or a revert instead, and wait for a decision.";

/// Appends fully worked example blocks to the end of the document,
/// regardless of the size budget consumed during assembly.
struct WorkedExamples;

impl Rewrite for WorkedExamples {
    fn name(&self) -> &'static str {
        "worked_examples"
    }

    fn apply(&self, document: &str) -> String {
        format!("{}\n\n{}", document.trim_end_matches('\n'), WORKED_EXAMPLES)
    }
}

// ── Step 5: symbol removal ────────────────────────────────────────────────

/// Fixed glyph → bracketed-text mapping, applied before the broad sweep.
const SYMBOL_MAP: &[(&str, &str)] = &[
    ("🎯", "[OBJECTIVE]"),
    ("⚠️", "[WARNING]"),
    ("✅", "[YES]"),
    ("❌", "[NO]"),
    ("💡", "[TIP]"),
    ("📋", "[CHECKLIST]"),
    ("🔒", "[SECURITY]"),
    ("🚫", "[FORBIDDEN]"),
];

/// Replaces mapped glyphs with bracketed equivalents, then strips any
/// remaining glyphs in the decorative code-point ranges (emoji blocks,
/// dingbats, variation selectors, zero-width joiner).
struct SymbolRemoval;

fn is_decorative_symbol(c: char) -> bool {
    matches!(
        c as u32,
        0x1F000..=0x1FAFF | 0x2600..=0x27BF | 0x2B00..=0x2BFF | 0xFE00..=0xFE0F | 0x200D
    )
}

impl Rewrite for SymbolRemoval {
    fn name(&self) -> &'static str {
        "symbol_removal"
    }

    fn apply(&self, document: &str) -> String {
        let mut doc = document.to_string();
        for (glyph, replacement) in SYMBOL_MAP {
            doc = doc.replace(glyph, replacement);
        }
        doc.chars().filter(|c| !is_decorative_symbol(*c)).collect()
    }
}

// ── Step 6: structural simplification ─────────────────────────────────────

/// Flattens the document for destinations favoring minimal nesting:
/// demotes level-3+ headings by one step, converts bold-wrapped phrases
/// into `phrase:` form, and collapses checkbox list markers to plain
/// bullets.
struct StructureSimplify;

impl Rewrite for StructureSimplify {
    fn name(&self) -> &'static str {
        "structure_simplify"
    }

    fn apply(&self, document: &str) -> String {
        let mut lines: Vec<String> = Vec::new();
        for line in document.split('\n') {
            let mut line = line.to_string();
            if line.starts_with("###") {
                line.remove(0);
            }
            for marker in ["- [ ] ", "- [x] ", "- [X] "] {
                if let Some(rest) = line.strip_prefix(marker) {
                    line = format!("- {rest}");
                    break;
                }
            }
            lines.push(line);
        }
        bold_to_colon(&lines.join("\n"))
    }
}

/// Convert `**phrase**` into `phrase:`. A colon already following the
/// closing markup is absorbed rather than doubled; unbalanced or
/// multi-line markup is left as-is.
fn bold_to_colon(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(open) = rest.find("**") {
        out.push_str(&rest[..open]);
        let inner = &rest[open + 2..];
        match inner.find("**") {
            Some(close) if close > 0 && !inner[..close].contains('\n') => {
                out.push_str(&inner[..close]);
                out.push(':');
                rest = inner[close + 2..].strip_prefix(':').unwrap_or(&inner[close + 2..]);
            }
            _ => {
                out.push_str("**");
                rest = inner;
            }
        }
    }
    out.push_str(rest);
    out
}
