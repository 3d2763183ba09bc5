//! Fragment library — named, reusable blocks of rules text.
//!
//! Fragments live in three pools:
//!
//! 1. **core** — exactly one, always included in every assembly
//! 2. **extended** — zero-or-one per destination, with a fallback to the
//!    designated default destination's entry
//! 3. **examples** — zero-or-one per project category, no fallback
//!
//! The library is populated once at startup and read-only afterwards.
//! Absence of a fragment is a value, never an error.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// An immutable named block of structured text.
///
/// The body is opaque to the engine except for gross structural markers
/// (headings, paragraph breaks, a handful of literal section titles).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fragment {
    /// Key within its pool — a destination name or a category name.
    pub name: String,
    /// The text content.
    pub body: String,
}

impl Fragment {
    pub fn new(name: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            body: body.into(),
        }
    }
}

/// The fragment pools plus lookup with fallback.
#[derive(Debug, Clone)]
pub struct FragmentLibrary {
    core: Fragment,
    extended: HashMap<String, Fragment>,
    examples: HashMap<String, Fragment>,
    /// Destination key consulted when an extended lookup misses.
    fallback_destination: String,
}

impl FragmentLibrary {
    /// Create a library holding only the core fragment.
    ///
    /// `fallback_destination` names the extended-pool entry used when a
    /// destination has no extended fragment of its own.
    pub fn new(core: Fragment, fallback_destination: impl Into<String>) -> Self {
        Self {
            core,
            extended: HashMap::new(),
            examples: HashMap::new(),
            fallback_destination: fallback_destination.into(),
        }
    }

    /// Register an extended fragment for a destination.
    pub fn with_extended(mut self, fragment: Fragment) -> Self {
        self.extended.insert(fragment.name.clone(), fragment);
        self
    }

    /// Register an example fragment for a category.
    pub fn with_example(mut self, fragment: Fragment) -> Self {
        self.examples.insert(fragment.name.clone(), fragment);
        self
    }

    /// The core fragment. Always present, never empty.
    pub fn core_fragment(&self) -> &Fragment {
        &self.core
    }

    /// Extended fragment for a destination.
    ///
    /// Falls back to the designated default destination's entry when the
    /// destination has none; `None` when both are absent.
    pub fn extended_fragment(&self, destination: &str) -> Option<&Fragment> {
        self.extended
            .get(destination)
            .or_else(|| self.extended.get(&self.fallback_destination))
    }

    /// Example fragment for a category. No fallback chain.
    pub fn example_fragment(&self, category: &str) -> Option<&Fragment> {
        self.examples.get(category)
    }
}
