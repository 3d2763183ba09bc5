//! Budget-constrained document assembly.
//!
//! Composes the pre-transform document by including optional fragments
//! one-shot, in fixed order (extended before examples), while the
//! cumulative estimated cost stays under destination-specific fractions of
//! the character ceiling. There is no backtracking: once a threshold check
//! fails, that step is permanently skipped for the request, and no smaller
//! substitute is attempted.
//!
//! Thresholds compare the *cumulative* cost, not the marginal cost alone,
//! so the extended-before-examples order is correctness-relevant. The
//! extended threshold (0.7 × ceiling) reserves headroom for the examples
//! block and for the structural insertions the transformer makes later,
//! which this cost tracking does not see.

use crate::estimate::estimate_cost;
use rulefit_core::{AssemblyRequest, DestinationProfile, FragmentLibrary, StepLabel, Tuning};
use tracing::debug;

/// Separator between assembled fragments.
const FRAGMENT_SEPARATOR: &str = "\n\n";

/// Heading for the caller-supplied directives section.
const DIRECTIVES_HEADING: &str = "## Additional Directives";

/// The pre-transform assembly: the composed document plus the record of
/// which inclusion steps succeeded.
#[derive(Debug, Clone)]
pub struct Assembly {
    pub document: String,
    pub applied_steps: Vec<StepLabel>,
}

/// Assemble the pre-transform document for one request.
pub fn assemble(
    library: &FragmentLibrary,
    profile: &DestinationProfile,
    request: &AssemblyRequest,
    tuning: &Tuning,
) -> Assembly {
    let ceiling = profile.ceiling as f64;

    let mut document = library.core_fragment().body.clone();
    let mut cost = estimate_cost(&document);
    let mut applied = vec![StepLabel::Core];

    if let Some(extended) = library.extended_fragment(&request.destination) {
        let fragment_cost = estimate_cost(&extended.body);
        if ((cost + fragment_cost) as f64) < tuning.extended_budget_ratio * ceiling {
            document.push_str(FRAGMENT_SEPARATOR);
            document.push_str(&extended.body);
            cost += fragment_cost;
            applied.push(StepLabel::Extended);
        } else {
            debug!(
                destination = %request.destination,
                cost,
                fragment_cost,
                "extended fragment skipped, over budget threshold"
            );
        }
    }

    if let Some(example) = request
        .category
        .as_deref()
        .and_then(|category| library.example_fragment(category))
    {
        let fragment_cost = estimate_cost(&example.body);
        if ((cost + fragment_cost) as f64) < tuning.examples_budget_ratio * ceiling {
            document.push_str(FRAGMENT_SEPARATOR);
            document.push_str(&example.body);
            cost += fragment_cost;
            applied.push(StepLabel::Examples);
        } else {
            debug!(
                category = request.category.as_deref().unwrap_or(""),
                cost,
                fragment_cost,
                "example fragment skipped, over budget threshold"
            );
        }
    }

    // Directives are caller-mandated, so they are never budget-gated; the
    // truncator is the safety net.
    if !request.directives.is_empty() {
        document.push_str(FRAGMENT_SEPARATOR);
        document.push_str(DIRECTIVES_HEADING);
        document.push('\n');
        for directive in &request.directives {
            document.push_str("\n- ");
            document.push_str(directive);
        }
        applied.push(StepLabel::Directives);
    }

    debug!(
        destination = %request.destination,
        cost,
        steps = applied.len(),
        len = document.len(),
        "assembly complete"
    );

    Assembly {
        document,
        applied_steps: applied,
    }
}
