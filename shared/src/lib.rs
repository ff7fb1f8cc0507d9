//! Browser-independent core of the AI text detector client.

pub mod config;
pub mod controller;
pub mod error;
pub mod format;
pub mod history;
pub mod model;
pub mod response;
pub mod samples;
pub mod session;
pub mod validate;

pub use config::{ApiConfig, AppConfig, Layout, Route};
pub use controller::{
    AnalysisOptions, Controller, DisplayedResult, Effect, Intent, OptionKind, RequestToken,
};
pub use error::{DetectError, ValidationError};
pub use format::{DisplayModel, Explanation, MetricRow};
pub use history::{HistoryEntry, HistoryTracker, SessionStats};
pub use model::{
    DetectionRequest, DetectionResult, InputSource, SelectedFile, SourceKind, Verdict,
};
pub use samples::Sample;
pub use session::{SESSION_STORAGE_KEY, SessionId};
