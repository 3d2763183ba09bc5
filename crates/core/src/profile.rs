//! Destination profiles — per-destination size ceilings and formatting
//! constraints, plus the registry that resolves a destination identifier
//! to its profile.
//!
//! Profiles are process-wide, read-only configuration: the built-in table
//! is constructed once at startup (optionally adjusted by the config layer)
//! and then only read. Unknown destination identifiers resolve to the
//! reserved `default` profile, never to an error.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The reserved fallback destination identifier.
pub const DEFAULT_DESTINATION: &str = "default";

/// How the destination expects the document to be formatted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormatStyle {
    Markdown,
    Plain,
    Structured,
}

impl std::fmt::Display for FormatStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Markdown => "markdown",
            Self::Plain => "plain",
            Self::Structured => "structured",
        };
        f.write_str(s)
    }
}

/// Which named rewrite procedure the transformer applies for a destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransformKind {
    /// Preamble injection only.
    Generic,
    /// Editor-integration guidance inserted before the implementation
    /// guidelines section.
    IdeGuidance,
    /// Objective-marker annotation plus a worked-example appendix.
    DetailedReasoning,
    /// Structural simplification (flatter headings, no checkbox markers).
    Compact,
    /// Structural simplification for destinations that also reject
    /// decorative symbols.
    PlainText,
}

/// Constraints and formatting flags for one destination.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DestinationProfile {
    /// Destination identifier this profile belongs to.
    pub name: String,
    /// Maximum character count for the final document.
    pub ceiling: usize,
    /// Maximum line count, when the destination imposes one.
    pub line_limit: Option<usize>,
    pub format: FormatStyle,
    /// Whether the destination renders decorative glyphs.
    pub supports_symbols: bool,
    pub transform: TransformKind,
    /// Preamble block the transformer injects after the document's opening.
    pub preamble: String,
}

/// Tunable ratio constants for assembly and truncation.
///
/// The exact default values are load-bearing for the budget and truncation
/// behavior; change them only deliberately, via configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Tuning {
    /// Cumulative-cost threshold for including the extended fragment,
    /// as a fraction of the character ceiling.
    pub extended_budget_ratio: f64,
    /// Cumulative-cost threshold for including the examples fragment.
    pub examples_budget_ratio: f64,
    /// When the budget left after reserving the footer falls below this
    /// fraction of the document, truncation drops the footer entirely.
    pub footer_fallback_ratio: f64,
    /// A paragraph break must lie after this fraction of the cut point
    /// for the cut to snap back to it.
    pub paragraph_snap_ratio: f64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            extended_budget_ratio: 0.7,
            examples_budget_ratio: 0.9,
            footer_fallback_ratio: 0.3,
            paragraph_snap_ratio: 0.8,
        }
    }
}

/// Maps destination identifiers to profiles, with a reserved default.
#[derive(Debug, Clone)]
pub struct ProfileRegistry {
    profiles: HashMap<String, DestinationProfile>,
    default: DestinationProfile,
}

impl ProfileRegistry {
    /// Create a registry holding only the default profile.
    pub fn new(default: DestinationProfile) -> Self {
        Self {
            profiles: HashMap::new(),
            default,
        }
    }

    /// Register a profile under its own name.
    pub fn insert(&mut self, profile: DestinationProfile) {
        self.profiles.insert(profile.name.clone(), profile);
    }

    /// Resolve a destination identifier.
    ///
    /// Unknown identifiers resolve to the default profile, never an error.
    pub fn resolve(&self, destination: &str) -> &DestinationProfile {
        self.profiles.get(destination).unwrap_or(&self.default)
    }

    /// Mutable access for the config layer's ceiling/line-limit overrides.
    /// `default` addresses the reserved fallback profile.
    pub fn get_mut(&mut self, destination: &str) -> Option<&mut DestinationProfile> {
        if destination == DEFAULT_DESTINATION {
            Some(&mut self.default)
        } else {
            self.profiles.get_mut(destination)
        }
    }

    /// Known destination names, sorted, with the default last.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.profiles.keys().map(String::as_str).collect();
        names.sort_unstable();
        names.push(DEFAULT_DESTINATION);
        names
    }

    /// The built-in destination table: four named destinations plus the
    /// reserved default. Ceilings sit in the published limit range of each
    /// destination and can be overridden in config.
    pub fn builtin() -> Self {
        let mut registry = Self::new(DestinationProfile {
            name: DEFAULT_DESTINATION.into(),
            ceiling: 10_000,
            line_limit: None,
            format: FormatStyle::Markdown,
            supports_symbols: true,
            transform: TransformKind::Generic,
            preamble: "These instructions were generated for this repository. \
                       Follow them when assisting with code changes."
                .into(),
        });

        registry.insert(DestinationProfile {
            name: "cursor".into(),
            ceiling: 12_000,
            line_limit: None,
            format: FormatStyle::Markdown,
            supports_symbols: true,
            transform: TransformKind::IdeGuidance,
            preamble: "These rules are loaded by Cursor for every AI interaction in \
                       this workspace. They apply to chat, inline edits, and agent \
                       runs alike."
                .into(),
        });

        registry.insert(DestinationProfile {
            name: "claude".into(),
            ceiling: 24_000,
            line_limit: None,
            format: FormatStyle::Structured,
            supports_symbols: true,
            transform: TransformKind::DetailedReasoning,
            preamble: "Read this document fully before acting. It defines the \
                       operating rules for this repository; follow them in every \
                       response, and reason through each objective before editing."
                .into(),
        });

        registry.insert(DestinationProfile {
            name: "windsurf".into(),
            ceiling: 6_000,
            line_limit: Some(240),
            format: FormatStyle::Markdown,
            supports_symbols: true,
            transform: TransformKind::Compact,
            preamble: "Rules for Cascade in this workspace. Keep generated changes \
                       within these constraints."
                .into(),
        });

        registry.insert(DestinationProfile {
            name: "copilot".into(),
            ceiling: 8_000,
            line_limit: Some(300),
            format: FormatStyle::Plain,
            supports_symbols: false,
            transform: TransformKind::PlainText,
            preamble: "Repository custom instructions. These apply to all Copilot \
                       chat and completion requests in this repository."
                .into(),
        });

        registry
    }
}
