//! # Rulefit Engine
//!
//! The assemble → transform → truncate pipeline:
//!
//! 1. **Assemble** — greedily include optional fragments while the running
//!    estimated cost stays under the destination's budget thresholds
//! 2. **Transform** — apply the profile's ordered structural rewrites
//! 3. **Truncate** — enforce the hard character ceiling and line limit,
//!    preserving the header and footer regions where possible
//!
//! Everything here is a pure or process-local computation over in-memory
//! text: no I/O, no suspension points, no shared mutable state. The engine
//! reads the immutable library/registry it was constructed with and each
//! request produces its own independent output.

pub mod assembler;
pub mod estimate;
pub mod pattern;
pub mod transform;
pub mod truncate;

pub use assembler::Assembly;
pub use truncate::TRUNCATION_NOTICE;

use rulefit_core::{AssemblyRequest, AssemblyResult, FragmentLibrary, ProfileRegistry, Tuning};
use tracing::debug;

/// The document generator. Stateless across requests — create one and
/// reuse it.
pub struct Engine {
    library: FragmentLibrary,
    registry: ProfileRegistry,
    tuning: Tuning,
}

impl Engine {
    /// Create an engine with default tuning ratios.
    pub fn new(library: FragmentLibrary, registry: ProfileRegistry) -> Self {
        Self {
            library,
            registry,
            tuning: Tuning::default(),
        }
    }

    /// Replace the tuning ratios (config-layer overrides).
    pub fn with_tuning(mut self, tuning: Tuning) -> Self {
        self.tuning = tuning;
        self
    }

    pub fn registry(&self) -> &ProfileRegistry {
        &self.registry
    }

    /// Run the full pipeline for one request.
    ///
    /// Never fails: unknown destinations resolve to the default profile,
    /// missing fragments are omitted, and size overflow is handled by
    /// truncation with a warning in the result.
    pub fn generate(&self, request: &AssemblyRequest) -> AssemblyResult {
        let profile = self.registry.resolve(&request.destination);
        debug!(
            destination = %request.destination,
            profile = %profile.name,
            complexity = %request.complexity,
            locale = %request.locale,
            "generating document"
        );

        let assembly = assembler::assemble(&self.library, profile, request, &self.tuning);
        let transformed = transform::transform(&assembly.document, profile);

        let mut warnings = Vec::new();
        let document = truncate::enforce(transformed, profile, &self.tuning, &mut warnings);

        AssemblyResult {
            document,
            applied_steps: assembly.applied_steps,
            warnings,
        }
    }
}
