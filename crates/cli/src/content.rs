//! Built-in fragment content.
//!
//! The prose here is the content layer: the engine never validates it
//! beyond the structural markers it pattern-matches against (the title
//! block, the core-principles and usage-instructions headings, objective
//! markers). Edit freely — but keep those markers, or the header/footer
//! preservation and the detailed-reasoning rewrites lose their anchors.

use rulefit_core::{DEFAULT_DESTINATION, Fragment, FragmentLibrary};

const CORE_RULES: &str = "\
# Project Rules

These rules govern how an AI coding assistant behaves in this repository.
They favor small, reviewable changes and explicit reasoning over large
speculative edits.

## Core Principles

- 🎯 OBJECTIVE: keep every change scoped to the task at hand.
- ✅ Prefer the smallest diff that fully solves the problem.
- ⚠️ Never commit secrets, tokens, or credentials.
- 💡 When a convention exists in the codebase, follow it instead of
  inventing a new one.
- Ask before rewriting files wholesale.


## Workflow

**Before editing**

- [ ] Read the surrounding code and match its style.
- [ ] Check for existing helpers before writing new ones.
- [ ] Run the formatter on any file you touch.

### Commit discipline

Write imperative, present-tense commit messages. One logical change per
commit. Never amend a commit you did not author.

### Code review expectations

**Keep functions small**. Extract helpers when a function grows past one
screen, and name them for what they do.

## Implementation Guidelines

OBJECTIVE: implementations must be complete — no stubbed functions, no
TODO-only bodies, no dead code left behind.

- Handle errors explicitly; do not swallow them.
- New public APIs need doc comments.
- New behavior needs tests in the same change.
- 🔒 Treat anything under a `secrets/` or `.env` path as off limits.

## Usage Instructions

Place this file where your assistant discovers rules automatically (its
rules directory or the repository root, depending on the tool). Re-run the
generator after editing the source fragments rather than editing this file
by hand; manual edits are overwritten on the next run.";

const CURSOR_EXTENDED: &str = "\
## Cursor Integration

- Rules in this file apply to Composer sessions and inline ⌘K edits alike.
- When a generation touches more than three files, summarize the plan in
  chat before applying it.
- Respect `.cursorignore`; never read or cite ignored paths.";

const CLAUDE_EXTENDED: &str = "\
## Extended Reasoning

- OBJECTIVE: before any multi-step change, write out the intended end
  state in one or two sentences.
- Prefer analyzing the existing tests to guess-and-check edits.
- When a request conflicts with these rules, say so and propose an
  alternative instead of silently complying.";

const WINDSURF_EXTENDED: &str = "\
## Cascade Notes

- Keep generated diffs under review size; split large changes into steps.
- State which files you are about to modify before modifying them.";

const COPILOT_EXTENDED: &str = "\
## Chat And Completions

- Completions must compile against the visible context; do not invent
  imports that are not present.
- In chat, cite the file path for every snippet you reference.";

const DEFAULT_EXTENDED: &str = "\
## General Guidance

- State your plan before editing when a change spans multiple files.
- Keep explanations short; let the diff speak.";

const RUST_EXAMPLES: &str = "\
## Rust Examples

Error handling — propagate, do not panic:

```rust
fn load(path: &Path) -> Result<Config, ConfigError> {
    let raw = fs::read_to_string(path)?;
    toml::from_str(&raw).map_err(ConfigError::from)
}
```

Prefer borrowed parameters (`&str`, `&[T]`) on public functions unless
ownership is genuinely required.";

const TYPESCRIPT_EXAMPLES: &str = "\
## TypeScript Examples

Narrow errors at the boundary:

```ts
try {
  await writeConfig(config);
} catch (err) {
  if (err instanceof ConfigError) return reportConfigError(err);
  throw err;
}
```

Avoid `any`; prefer `unknown` plus a type guard.";

const PYTHON_EXAMPLES: &str = "\
## Python Examples

Raise precise exceptions and let callers decide:

```python
def load_config(path: Path) -> Config:
    try:
        raw = path.read_text()
    except FileNotFoundError:
        raise ConfigMissing(path) from None
    return Config.parse(raw)
```

Type-annotate public functions; keep module-level side effects out.";

const GO_EXAMPLES: &str = "\
## Go Examples

Wrap errors with context at each boundary:

```go
cfg, err := loadConfig(path)
if err != nil {
    return fmt.Errorf(\"loading config %s: %w\", path, err)
}
```

Accept interfaces, return concrete types.";

/// Build the library of built-in fragments.
pub fn default_library() -> FragmentLibrary {
    FragmentLibrary::new(Fragment::new("core", CORE_RULES), DEFAULT_DESTINATION)
        .with_extended(Fragment::new("cursor", CURSOR_EXTENDED))
        .with_extended(Fragment::new("claude", CLAUDE_EXTENDED))
        .with_extended(Fragment::new("windsurf", WINDSURF_EXTENDED))
        .with_extended(Fragment::new("copilot", COPILOT_EXTENDED))
        .with_extended(Fragment::new(DEFAULT_DESTINATION, DEFAULT_EXTENDED))
        .with_example(Fragment::new("rust", RUST_EXAMPLES))
        .with_example(Fragment::new("typescript", TYPESCRIPT_EXAMPLES))
        .with_example(Fragment::new("python", PYTHON_EXAMPLES))
        .with_example(Fragment::new("go", GO_EXAMPLES))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rulefit_engine::pattern;

    #[test]
    fn core_fragment_carries_the_structural_anchors() {
        let library = default_library();
        let core = &library.core_fragment().body;
        assert!(pattern::title_paragraph_end(core).is_some());
        assert!(pattern::header_end(core).is_some());
        assert!(pattern::footer_start(core).is_some());
        assert!(core.contains("OBJECTIVE:"));
        assert!(core.contains("## Implementation Guidelines"));
    }

    #[test]
    fn every_builtin_destination_has_an_extended_fragment() {
        let library = default_library();
        for destination in ["cursor", "claude", "windsurf", "copilot"] {
            let fragment = library.extended_fragment(destination).unwrap();
            assert_eq!(fragment.name, destination);
        }
    }

    #[test]
    fn unknown_destination_falls_back_to_generic_extras() {
        let library = default_library();
        let fragment = library.extended_fragment("zed").unwrap();
        assert_eq!(fragment.name, DEFAULT_DESTINATION);
    }

    #[test]
    fn example_categories_match_the_detector() {
        let library = default_library();
        for category in ["rust", "typescript", "python", "go"] {
            assert!(library.example_fragment(category).is_some(), "{category}");
        }
    }
}
