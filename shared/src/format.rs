use serde_json::{Map, Value};

use crate::model::{DetectionResult, InputSource, Verdict};

pub const NO_TRAITS_PLACEHOLDER: &str = "No specific traits detected";
pub const UNAVAILABLE: &str = "N/A";

/// Metrics shown first, in this order, with fixed labels.
const KNOWN_METRICS: [(&str, &str); 6] = [
    ("lexical_diversity", "Lexical Diversity"),
    ("ai_phrase_density", "AI Phrase Density"),
    ("sentence_length_variance", "Sentence Variance"),
    ("pacing_consistency", "Pacing Consistency"),
    ("formality_score", "Formality Score"),
    ("mixed_register_score", "Mixed Register"),
];

#[derive(Debug, Clone, PartialEq)]
pub struct MetricRow {
    pub label: String,
    pub value: String,
}

/// Everything the views need to render one result.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayModel {
    pub category: Verdict,
    pub verdict_label: String,
    pub icon: &'static str,
    pub color: &'static str,
    pub ai_percent: String,
    pub human_percent: String,
    pub confidence: String,
    /// Width of the human share of the probability bar, in percent.
    pub human_bar_width: f64,
    pub word_count: Option<usize>,
    pub method_labels: Vec<String>,
    pub traits: Vec<String>,
    pub metrics: Vec<MetricRow>,
}

impl DisplayModel {
    pub fn word_count_label(&self) -> String {
        self.word_count
            .map(|count| count.to_string())
            .unwrap_or_else(|| UNAVAILABLE.to_string())
    }

    pub fn traits_placeholder(&self) -> Option<&'static str> {
        self.traits.is_empty().then_some(NO_TRAITS_PLACEHOLDER)
    }
}

pub fn format(result: &DetectionResult, source: &InputSource) -> DisplayModel {
    let category = result.category();
    let ai_share = result.ai_probability * 100.0;

    DisplayModel {
        category,
        verdict_label: result.verdict.clone(),
        icon: category.icon(),
        color: category.color_token(),
        ai_percent: percent(ai_share),
        human_percent: percent(result.human_probability * 100.0),
        confidence: percent(result.confidence_score),
        human_bar_width: (100.0 - ai_share).clamp(0.0, 100.0),
        word_count: word_count(source),
        method_labels: result.detection_methods.iter().map(|m| method_label(m)).collect(),
        traits: result.traits_detected.clone(),
        metrics: result
            .analysis_details
            .as_ref()
            .map(metric_rows)
            .unwrap_or_default(),
    }
}

pub fn percent(value: f64) -> String {
    format!("{}%", fixed(value, 1))
}

/// Fixed-point text with ties rounded away from zero, as browsers do.
fn fixed(value: f64, digits: i32) -> String {
    let scale = 10f64.powi(digits);
    format!("{:.*}", digits as usize, (value * scale).round() / scale)
}

fn word_count(source: &InputSource) -> Option<usize> {
    match source {
        InputSource::Text(text) => {
            let count = text.split_whitespace().count();
            (count > 0).then_some(count)
        }
        InputSource::File(_) => None,
    }
}

pub fn method_label(method: &str) -> String {
    method.replace(['_', '-'], " ").to_uppercase()
}

pub fn metric_rows(details: &Map<String, Value>) -> Vec<MetricRow> {
    let known = KNOWN_METRICS.iter().filter_map(|(key, label)| {
        details.get(*key).map(|value| MetricRow {
            label: label.to_string(),
            value: metric_value(value),
        })
    });

    let extra = details
        .iter()
        .filter(|(key, _)| !KNOWN_METRICS.iter().any(|(known, _)| known == key))
        .map(|(key, value)| MetricRow {
            label: title_case(key),
            value: metric_value(value),
        });

    known.chain(extra).collect()
}

fn metric_value(value: &Value) -> String {
    match value {
        Value::Number(n) => n
            .as_f64()
            .map(|f| fixed(f, 3))
            .unwrap_or_else(|| n.to_string()),
        Value::String(s) => s.clone(),
        Value::Bool(true) => "Yes".to_string(),
        Value::Bool(false) => "No".to_string(),
        Value::Null => UNAVAILABLE.to_string(),
        structured => structured.to_string(),
    }
}

fn title_case(key: &str) -> String {
    key.split(['_', '-'])
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Plain-language summary of a result.
#[derive(Debug, Clone, PartialEq)]
pub struct Explanation {
    pub summary: String,
    pub ai_percent: String,
    pub human_percent: String,
    pub indicators: Vec<String>,
    pub methods_note: String,
    pub closing: &'static str,
}

pub fn explain(result: &DetectionResult) -> Explanation {
    let summary = format!(
        "The text has been classified as {} with {} confidence.",
        result.verdict,
        percent(result.confidence_score)
    );

    let methods_note = match result.detection_methods.len() {
        0 => "No detection methods were reported.".to_string(),
        n => format!(
            "{} detection method{} contributed: {}.",
            n,
            if n == 1 { "" } else { "s" },
            result
                .detection_methods
                .iter()
                .map(|m| method_label(m))
                .collect::<Vec<_>>()
                .join(", ")
        ),
    };

    let closing = match result.category() {
        Verdict::AiGenerated => {
            "The text exhibits patterns commonly associated with AI-generated content, such as uniform sentence structure, high use of transition phrases, and consistent pacing."
        }
        Verdict::HumanWritten => {
            "The text shows characteristics of human writing, including natural variation in sentence length, conversational markers, and authentic voice."
        }
        Verdict::Uncertain => {
            "The signals in this text are mixed, so it could not be confidently attributed to either an AI model or a human writer."
        }
    };

    Explanation {
        summary,
        ai_percent: percent(result.ai_probability * 100.0),
        human_percent: percent(result.human_probability * 100.0),
        indicators: result.traits_detected.clone(),
        methods_note,
        closing,
    }
}
