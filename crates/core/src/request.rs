//! Assembly request and result types exchanged with the CLI layer.
//!
//! A request/result pair is owned by the call that created it; nothing is
//! persisted or shared across invocations.

use serde::{Deserialize, Serialize};

/// Inputs to a single assembly run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssemblyRequest {
    /// Destination identifier. Free-form; unrecognized values resolve to
    /// the registry's default profile.
    pub destination: String,
    /// Informational pass-through — logged and echoed, never consulted
    /// by assembly.
    #[serde(default)]
    pub complexity: Complexity,
    /// Natural-language locale tag. Informational pass-through.
    #[serde(default = "default_locale")]
    pub locale: String,
    /// Caller-supplied extra rule lines, appended verbatim as a section.
    #[serde(default)]
    pub directives: Vec<String>,
    /// Example-category signal derived by the caller (e.g. from project
    /// manifests). `None` omits the examples fragment.
    #[serde(default)]
    pub category: Option<String>,
}

impl AssemblyRequest {
    /// A request with pass-through fields at their defaults.
    pub fn for_destination(destination: impl Into<String>) -> Self {
        Self {
            destination: destination.into(),
            complexity: Complexity::default(),
            locale: default_locale(),
            directives: Vec::new(),
            category: None,
        }
    }
}

fn default_locale() -> String {
    "en".into()
}

/// Requested depth of the generated document. Informational only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Complexity {
    Minimal,
    #[default]
    Standard,
    Detailed,
}

impl std::fmt::Display for Complexity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Minimal => "minimal",
            Self::Standard => "standard",
            Self::Detailed => "detailed",
        };
        f.write_str(s)
    }
}

impl std::str::FromStr for Complexity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "minimal" => Ok(Self::Minimal),
            "standard" => Ok(Self::Standard),
            "detailed" => Ok(Self::Detailed),
            other => Err(format!(
                "unknown complexity '{other}' (expected minimal, standard, or detailed)"
            )),
        }
    }
}

/// Label recording that an optional content block made it into the assembly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepLabel {
    Core,
    Extended,
    Examples,
    Directives,
}

impl StepLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Core => "core",
            Self::Extended => "extended",
            Self::Examples => "examples",
            Self::Directives => "directives",
        }
    }
}

impl std::fmt::Display for StepLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The produced document plus the record of what went into it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssemblyResult {
    pub document: String,
    /// Ordered labels of the inclusion steps that succeeded. `core` is
    /// always first.
    pub applied_steps: Vec<StepLabel>,
    /// Human-readable notes (e.g. that truncation occurred). Returned as
    /// data; the caller decides whether to display them.
    pub warnings: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_labels_serialize_lowercase() {
        let json = serde_json::to_string(&vec![
            StepLabel::Core,
            StepLabel::Extended,
            StepLabel::Examples,
        ])
        .unwrap();
        assert_eq!(json, r#"["core","extended","examples"]"#);
    }

    #[test]
    fn complexity_round_trips_through_from_str() {
        for c in [Complexity::Minimal, Complexity::Standard, Complexity::Detailed] {
            assert_eq!(c.to_string().parse::<Complexity>().unwrap(), c);
        }
        assert!("extreme".parse::<Complexity>().is_err());
    }

    #[test]
    fn request_defaults() {
        let request = AssemblyRequest::for_destination("cursor");
        assert_eq!(request.complexity, Complexity::Standard);
        assert_eq!(request.locale, "en");
        assert!(request.directives.is_empty());
        assert!(request.category.is_none());
    }
}
