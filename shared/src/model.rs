use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use strum_macros::{Display, EnumString};

/// Body returned by `/detect/text` and `/detect/file`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectionResult {
    pub verdict: String,
    pub ai_probability: f64,
    pub human_probability: f64,
    pub confidence_score: f64,
    #[serde(default)]
    pub detection_methods: Vec<String>,
    #[serde(default)]
    pub traits_detected: Vec<String>,
    #[serde(default)]
    pub analysis_details: Option<Map<String, Value>>,
}

impl DetectionResult {
    pub fn category(&self) -> Verdict {
        Verdict::classify(&self.verdict)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString)]
pub enum Verdict {
    #[strum(serialize = "AI-Generated")]
    AiGenerated,
    #[strum(serialize = "Human-Written")]
    HumanWritten,
    #[strum(serialize = "Uncertain")]
    Uncertain,
}

impl Verdict {
    /// Anything other than the two known labels is `Uncertain`.
    pub fn classify(label: &str) -> Self {
        label.parse().unwrap_or(Verdict::Uncertain)
    }

    pub fn icon(self) -> &'static str {
        match self {
            Verdict::AiGenerated => "AI",
            Verdict::HumanWritten => "\u{2713}",
            Verdict::Uncertain => "?",
        }
    }

    /// CSS color token used by both layouts.
    pub fn color_token(self) -> &'static str {
        match self {
            Verdict::AiGenerated => "ai",
            Verdict::HumanWritten => "human",
            Verdict::Uncertain => "uncertain",
        }
    }
}

/// Which input produced a request. Also names the tab and the submit
/// control that belong to that input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum SourceKind {
    Text,
    File,
}

impl SourceKind {
    pub fn route(self) -> crate::config::Route {
        match self {
            SourceKind::Text => crate::config::Route::DetectText,
            SourceKind::File => crate::config::Route::DetectFile,
        }
    }

    /// Multipart field carrying the payload.
    pub fn field_name(self) -> &'static str {
        match self {
            SourceKind::Text => "text",
            SourceKind::File => "file",
        }
    }

    pub fn failure_fallback(self) -> &'static str {
        match self {
            SourceKind::Text => "Analysis failed. Please try again.",
            SourceKind::File => "File analysis failed. Please try again.",
        }
    }
}

/// A file the user picked, with its platform handle.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedFile<F> {
    pub name: String,
    pub size: u64,
    pub file: F,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DetectionRequest<F> {
    Text { text: String },
    File { filename: String, file: F },
}

impl<F> DetectionRequest<F> {
    pub fn kind(&self) -> SourceKind {
        match self {
            DetectionRequest::Text { .. } => SourceKind::Text,
            DetectionRequest::File { .. } => SourceKind::File,
        }
    }
}

/// What the formatter needs to know about where a result came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Text(String),
    File(String),
}

impl InputSource {
    pub fn kind(&self) -> SourceKind {
        match self {
            InputSource::Text(_) => SourceKind::Text,
            InputSource::File(_) => SourceKind::File,
        }
    }

    pub fn filename(&self) -> Option<&str> {
        match self {
            InputSource::Text(_) => None,
            InputSource::File(name) => Some(name),
        }
    }
}
