//! Project-category detection heuristics.
//!
//! Inspects well-known manifest files in a directory to derive the
//! example-category signal for the assembler. The first match wins; a
//! project with no recognizable manifest gets no category, which simply
//! omits the examples fragment downstream.

use std::path::Path;
use tracing::debug;

/// Manifest file → category, checked in order.
const MANIFESTS: &[(&str, &str)] = &[
    ("Cargo.toml", "rust"),
    ("package.json", "typescript"),
    ("pyproject.toml", "python"),
    ("requirements.txt", "python"),
    ("go.mod", "go"),
];

/// Detect the example category for a project directory.
pub fn detect_category(dir: &Path) -> Option<String> {
    for (manifest, category) in MANIFESTS {
        if dir.join(manifest).is_file() {
            debug!(manifest, category, "project category detected");
            return Some((*category).to_string());
        }
    }
    None
}
