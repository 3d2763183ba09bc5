//! End-to-end integration tests for the rulefit pipeline.
//!
//! These exercise the full assemble → transform → truncate flow the way
//! the `generate` command drives it: a realistic fragment library, the
//! built-in profile registry with config overrides applied, and requests
//! for every built-in destination.

use rulefit_config::AppConfig;
use rulefit_core::{
    AssemblyRequest, Complexity, Fragment, FragmentLibrary, ProfileRegistry, StepLabel,
};
use rulefit_engine::{Engine, TRUNCATION_NOTICE};

// ── Fixture library ──────────────────────────────────────────────────────

/// A fragment library shaped like the built-in content: title block,
/// core-principles header region, objective markers, glyphs, and a
/// usage-instructions footer.
fn fixture_library() -> FragmentLibrary {
    let core = "\
# Assistant Rules

Keep changes small, reviewable, and scoped to the request.

## Core Principles

- 🎯 OBJECTIVE: solve the stated problem, nothing more.
- ⚠️ Never commit credentials.
- Follow existing conventions.


## Workflow

**Before editing**

- [ ] Read the surrounding code.
- [ ] Check for existing helpers.

### Commit discipline

One logical change per commit.

## Implementation Guidelines

OBJECTIVE: complete implementations only.

- Handle errors explicitly.
- New behavior needs tests.

## Usage Instructions

Place this file where the assistant discovers rules automatically.";

    FragmentLibrary::new(Fragment::new("core", core), "default")
        .with_extended(Fragment::new(
            "cursor",
            "## Cursor Integration\n\n- Rules apply to inline edits too.",
        ))
        .with_extended(Fragment::new(
            "claude",
            "## Extended Reasoning\n\n- OBJECTIVE: write the end state first.",
        ))
        .with_extended(Fragment::new(
            "default",
            "## General Guidance\n\n- State your plan before editing.",
        ))
        .with_example(Fragment::new(
            "rust",
            "## Rust Examples\n\nPropagate errors with `?`; do not panic in libraries.",
        ))
}

fn engine() -> Engine {
    Engine::new(fixture_library(), ProfileRegistry::builtin())
}

fn request(destination: &str) -> AssemblyRequest {
    AssemblyRequest {
        category: Some("rust".into()),
        ..AssemblyRequest::for_destination(destination)
    }
}

// ── Per-destination generation ───────────────────────────────────────────

#[test]
fn every_builtin_destination_generates_within_its_ceiling() {
    let e = engine();
    for destination in ["cursor", "claude", "windsurf", "copilot", "default"] {
        let profile_ceiling = e.registry().resolve(destination).ceiling;
        let result = e.generate(&request(destination));
        assert!(
            result.document.len() <= profile_ceiling,
            "{destination}: {} > {profile_ceiling}",
            result.document.len()
        );
        assert_eq!(result.applied_steps[0], StepLabel::Core, "{destination}");
        assert!(result.document.contains("Keep changes small"), "{destination}");
    }
}

#[test]
fn cursor_gets_editor_guidance_before_the_guidelines_section() {
    let result = engine().generate(&request("cursor"));
    let note = result.document.find("editor's AI").expect("note missing");
    let heading = result
        .document
        .find("## Implementation Guidelines")
        .expect("section missing");
    assert!(note < heading);
    assert!(result.document.contains("## Cursor Integration"));
}

#[test]
fn claude_gets_annotations_and_worked_examples() {
    let result = engine().generate(&request("claude"));
    assert!(result.document.contains("## Worked Examples"));
    assert!(
        result.document.contains("OBJECTIVE (state the intended outcome before listing steps):")
    );
    // Both the core marker and the extended fragment's marker are annotated.
    assert_eq!(
        result.document.matches("state the intended outcome").count(),
        3
    );
}

#[test]
fn copilot_output_is_plain() {
    let result = engine().generate(&request("copilot"));
    assert!(result.document.contains("[OBJECTIVE]"));
    assert!(result.document.contains("[WARNING]"));
    assert!(!result.document.contains('🎯'));
    assert!(!result.document.contains("- [ ]"));
    assert!(!result.document.contains("**"));
    assert!(result.document.contains("## Commit discipline"));
}

#[test]
fn windsurf_respects_its_line_limit() {
    let e = engine();
    let limit = e.registry().resolve("windsurf").line_limit.unwrap();
    let result = e.generate(&request("windsurf"));
    assert!(result.document.lines().count() <= limit);
}

// ── Fallback and structure parity ────────────────────────────────────────

#[test]
fn unknown_destination_is_identical_to_the_default_destination() {
    let e = engine();
    let known = e.generate(&request("default"));
    let unknown = e.generate(&request("totally-unknown-tool"));
    assert_eq!(known.document, unknown.document);
    assert_eq!(known.applied_steps, unknown.applied_steps);
    assert_eq!(known.warnings, unknown.warnings);
}

#[test]
fn applied_steps_reflect_inclusion_decisions() {
    let e = engine();

    let with_examples = e.generate(&request("cursor"));
    assert_eq!(
        with_examples.applied_steps,
        vec![StepLabel::Core, StepLabel::Extended, StepLabel::Examples]
    );

    let no_category = e.generate(&AssemblyRequest::for_destination("cursor"));
    assert_eq!(
        no_category.applied_steps,
        vec![StepLabel::Core, StepLabel::Extended]
    );
}

// ── Truncation under config overrides ────────────────────────────────────

#[test]
fn config_override_forces_header_preserving_truncation() {
    let toml_str = r#"
[destinations.cursor]
ceiling = 700
"#;
    let config: AppConfig = toml::from_str(toml_str).unwrap();
    config.validate().unwrap();

    let mut registry = ProfileRegistry::builtin();
    config.apply_overrides(&mut registry);
    let e = Engine::new(fixture_library(), registry).with_tuning(config.tuning());

    let result = e.generate(&request("cursor"));
    assert!(result.document.len() <= 700);
    assert!(result.document.contains(TRUNCATION_NOTICE));
    assert_eq!(result.warnings.len(), 1);
    assert!(result.warnings[0].contains("character ceiling"));
    // Header and footer regions survive; middle content was cut.
    assert!(result.document.contains("Keep changes small, reviewable"));
    assert!(result.document.contains("## Core Principles"));
    assert!(
        result
            .document
            .contains("Place this file where the assistant discovers rules automatically.")
    );
}

#[test]
fn oversized_appendix_falls_back_to_simple_truncation() {
    // The worked-example appendix lands after the usage-instructions
    // heading, inflating the footer region past what the ceiling can
    // preserve — the truncator degrades to cutting from the end.
    let toml_str = r#"
[destinations.claude]
ceiling = 1100
"#;
    let config: AppConfig = toml::from_str(toml_str).unwrap();
    let mut registry = ProfileRegistry::builtin();
    config.apply_overrides(&mut registry);
    let e = Engine::new(fixture_library(), registry);

    let result = e.generate(&request("claude"));
    assert!(result.document.len() <= 1_100);
    assert!(result.document.ends_with(TRUNCATION_NOTICE));
    assert!(!result.document.contains("## Worked Examples"));
    assert!(result.document.contains("Keep changes small"));
}

// ── Directives and pass-through fields ───────────────────────────────────

#[test]
fn directives_survive_the_full_pipeline() {
    let mut req = request("cursor");
    req.directives = vec!["Always run the linter".into()];
    req.complexity = Complexity::Detailed;
    req.locale = "de".into();

    let result = engine().generate(&req);
    assert!(result.document.contains("## Additional Directives"));
    assert!(result.document.contains("- Always run the linter"));
    assert_eq!(*result.applied_steps.last().unwrap(), StepLabel::Directives);
}

#[test]
fn result_serializes_to_json_for_the_cli() {
    let result = engine().generate(&request("cursor"));
    let json = serde_json::to_string(&result).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert!(value["document"].is_string());
    assert_eq!(value["applied_steps"][0], "core");
    assert!(value["warnings"].as_array().unwrap().is_empty());
}
