//! Page state and the single dispatcher every user action goes through.
//!
//! The controller never touches the DOM or the network. It answers each
//! [`Intent`] with zero or more [`Effect`]s that the view layer carries out,
//! and it is fed the outcome of a submission back as
//! [`Intent::Completed`].

use crate::error::{DetectError, ValidationError};
use crate::format::{DisplayModel, Explanation, explain, format};
use crate::history::HistoryTracker;
use crate::model::{DetectionRequest, DetectionResult, InputSource, SelectedFile, SourceKind};
use crate::samples::Sample;
use crate::validate::{validate_file, validate_text};

pub const API_UNREACHABLE: &str = "Backend API not reachable. Please ensure the server is running.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AnalysisOptions {
    pub detailed: bool,
    pub explain: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionKind {
    Detailed,
    Explain,
}

/// Identifies one submission. `seq` grows across both controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestToken {
    pub control: SourceKind,
    pub seq: u64,
}

#[derive(Debug, Clone)]
struct Pending {
    token: RequestToken,
    source: InputSource,
    options: AnalysisOptions,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DisplayedResult {
    pub token: RequestToken,
    pub source: InputSource,
    pub options: AnalysisOptions,
    pub model: DisplayModel,
    pub explanation: Option<Explanation>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Intent<F> {
    SwitchTab(SourceKind),
    EditText(String),
    LoadSample(Sample),
    ChooseFile(SelectedFile<F>),
    RemoveFile,
    SetOption(SourceKind, OptionKind, bool),
    Submit(SourceKind),
    Completed(RequestToken, Result<DetectionResult, DetectError>),
    ApiUnreachable,
    DismissError,
    SuccessExpired,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect<F> {
    /// Send the request and report back with `Intent::Completed(token, ..)`.
    Submit {
        token: RequestToken,
        request: DetectionRequest<F>,
    },
    /// A new result is on screen.
    ResultShown,
}

pub struct Controller<F> {
    active_tab: SourceKind,
    text: String,
    selected_file: Option<SelectedFile<F>>,
    text_options: AnalysisOptions,
    file_options: AnalysisOptions,
    pending_text: Option<Pending>,
    pending_file: Option<Pending>,
    next_seq: u64,
    displayed: Option<DisplayedResult>,
    error: Option<String>,
    warning: Option<String>,
    success_visible: bool,
    tracker: HistoryTracker,
}

impl<F> Default for Controller<F> {
    fn default() -> Self {
        Self {
            active_tab: SourceKind::Text,
            text: String::new(),
            selected_file: None,
            text_options: AnalysisOptions::default(),
            file_options: AnalysisOptions::default(),
            pending_text: None,
            pending_file: None,
            next_seq: 1,
            displayed: None,
            error: None,
            warning: None,
            success_visible: false,
            tracker: HistoryTracker::new(),
        }
    }
}

impl<F: Clone> Controller<F> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dispatch(&mut self, intent: Intent<F>) -> Vec<Effect<F>> {
        match intent {
            Intent::SwitchTab(tab) => {
                self.switch_tab(tab);
                vec![]
            }
            Intent::EditText(text) => {
                self.text = text;
                vec![]
            }
            Intent::LoadSample(sample) => {
                self.text = sample.text().to_string();
                vec![]
            }
            Intent::ChooseFile(file) => {
                self.choose_file(file);
                vec![]
            }
            Intent::RemoveFile => {
                self.selected_file = None;
                vec![]
            }
            Intent::SetOption(control, kind, enabled) => {
                let options = self.options_mut(control);
                match kind {
                    OptionKind::Detailed => options.detailed = enabled,
                    OptionKind::Explain => options.explain = enabled,
                }
                vec![]
            }
            Intent::Submit(control) => self.submit(control),
            Intent::Completed(token, outcome) => self.complete(token, outcome),
            Intent::ApiUnreachable => {
                self.warning = Some(API_UNREACHABLE.to_string());
                vec![]
            }
            Intent::DismissError => {
                self.error = None;
                vec![]
            }
            Intent::SuccessExpired => {
                self.success_visible = false;
                vec![]
            }
        }
    }

    fn switch_tab(&mut self, tab: SourceKind) {
        self.active_tab = tab;
        self.displayed = None;
        self.success_visible = false;
    }

    fn choose_file(&mut self, file: SelectedFile<F>) {
        match validate_file(&file.name, file.size) {
            Ok(()) => {
                log::debug!("Selected {} ({} bytes)", file.name, file.size);
                self.error = None;
                self.selected_file = Some(file);
            }
            Err(e) => {
                log::warn!("Rejected {}: {}", file.name, e);
                self.error = Some(e.to_string());
            }
        }
    }

    fn submit(&mut self, control: SourceKind) -> Vec<Effect<F>> {
        if self.is_loading(control) {
            log::debug!("Ignoring {} submit while a request is in flight", control);
            return vec![];
        }

        let prepared = match control {
            SourceKind::Text => validate_text(&self.text).map(|text| {
                (
                    InputSource::Text(text.to_string()),
                    DetectionRequest::Text {
                        text: text.to_string(),
                    },
                )
            }),
            SourceKind::File => self
                .selected_file
                .as_ref()
                .ok_or(ValidationError::NoFileSelected)
                .map(|selected| {
                    (
                        InputSource::File(selected.name.clone()),
                        DetectionRequest::File {
                            filename: selected.name.clone(),
                            file: selected.file.clone(),
                        },
                    )
                }),
        };

        let (source, request) = match prepared {
            Ok(prepared) => prepared,
            Err(e) => {
                self.error = Some(e.to_string());
                return vec![];
            }
        };

        let token = RequestToken {
            control,
            seq: self.next_seq,
        };
        self.next_seq += 1;

        let options = self.options(control);
        *self.pending_mut(control) = Some(Pending {
            token,
            source,
            options,
        });
        self.error = None;
        self.success_visible = false;
        self.displayed = None;

        vec![Effect::Submit { token, request }]
    }

    fn complete(
        &mut self,
        token: RequestToken,
        outcome: Result<DetectionResult, DetectError>,
    ) -> Vec<Effect<F>> {
        let slot = self.pending_mut(token.control);
        let pending = match slot.take() {
            Some(pending) if pending.token == token => pending,
            other => {
                *slot = other;
                log::warn!("Ignoring completion for unknown request {:?}", token);
                return vec![];
            }
        };

        let result = match outcome {
            Ok(result) => result,
            Err(e) => {
                log::error!("{} detection failed: {:?}", token.control, e);
                self.error = Some(e.to_string());
                return vec![];
            }
        };

        self.tracker.record(
            result.clone(),
            token.control,
            pending.source.filename().map(str::to_string),
        );

        if !self.should_display(token) {
            log::info!(
                "Result #{} recorded in history but not displayed, a newer view is active",
                token.seq
            );
            return vec![];
        }

        self.displayed = Some(DisplayedResult {
            token,
            model: format(&result, &pending.source),
            explanation: pending.options.explain.then(|| explain(&result)),
            options: pending.options,
            source: pending.source,
        });
        self.success_visible = true;

        vec![Effect::ResultShown]
    }

    /// Only the active tab's control may replace what is on screen, and
    /// never with an older request than the one already shown.
    fn should_display(&self, token: RequestToken) -> bool {
        token.control == self.active_tab
            && self
                .displayed
                .as_ref()
                .is_none_or(|shown| shown.token.seq < token.seq)
    }

    fn pending_mut(&mut self, control: SourceKind) -> &mut Option<Pending> {
        match control {
            SourceKind::Text => &mut self.pending_text,
            SourceKind::File => &mut self.pending_file,
        }
    }

    fn options_mut(&mut self, control: SourceKind) -> &mut AnalysisOptions {
        match control {
            SourceKind::Text => &mut self.text_options,
            SourceKind::File => &mut self.file_options,
        }
    }
}

impl<F> Controller<F> {
    pub fn active_tab(&self) -> SourceKind {
        self.active_tab
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn selected_file(&self) -> Option<&SelectedFile<F>> {
        self.selected_file.as_ref()
    }

    pub fn options(&self, control: SourceKind) -> AnalysisOptions {
        match control {
            SourceKind::Text => self.text_options,
            SourceKind::File => self.file_options,
        }
    }

    pub fn is_loading(&self, control: SourceKind) -> bool {
        match control {
            SourceKind::Text => self.pending_text.is_some(),
            SourceKind::File => self.pending_file.is_some(),
        }
    }

    /// Whether the submit control for `control` should be enabled.
    pub fn can_submit(&self, control: SourceKind) -> bool {
        if self.is_loading(control) {
            return false;
        }
        match control {
            SourceKind::Text => validate_text(&self.text).is_ok(),
            SourceKind::File => self.selected_file.is_some(),
        }
    }

    pub fn displayed(&self) -> Option<&DisplayedResult> {
        self.displayed.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn warning(&self) -> Option<&str> {
        self.warning.as_deref()
    }

    pub fn success_visible(&self) -> bool {
        self.success_visible
    }

    pub fn history(&self) -> &HistoryTracker {
        &self.tracker
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Verdict;
    use crate::validate::MAX_FILE_SIZE;

    type TestController = Controller<&'static str>;

    const LONG_TEXT: &str =
        "This sentence is comfortably longer than the fifty character minimum for analysis.";

    fn result(verdict: &str, confidence: f64) -> DetectionResult {
        DetectionResult {
            verdict: verdict.into(),
            ai_probability: 0.6,
            human_probability: 0.4,
            confidence_score: confidence,
            detection_methods: vec!["ensemble".into()],
            traits_detected: vec![],
            analysis_details: None,
        }
    }

    fn file(name: &str, size: u64) -> SelectedFile<&'static str> {
        SelectedFile {
            name: name.into(),
            size,
            file: "blob",
        }
    }

    fn submit_token(controller: &mut TestController, control: SourceKind) -> RequestToken {
        match controller.dispatch(Intent::Submit(control)).as_slice() {
            [Effect::Submit { token, .. }] => *token,
            other => panic!("expected one submit effect, got {:?}", other),
        }
    }

    #[test]
    fn test_short_text_is_rejected_without_request() {
        let mut controller = TestController::new();
        controller.dispatch(Intent::EditText("   too short   ".into()));
        assert!(!controller.can_submit(SourceKind::Text));

        let effects = controller.dispatch(Intent::Submit(SourceKind::Text));
        assert!(effects.is_empty());
        assert_eq!(
            controller.error(),
            Some("Text must be at least 50 characters long.")
        );
        assert!(!controller.is_loading(SourceKind::Text));
    }

    #[test]
    fn test_text_submission_sends_trimmed_text() {
        let mut controller = TestController::new();
        controller.dispatch(Intent::EditText(format!("  {LONG_TEXT}\n")));
        let effects = controller.dispatch(Intent::Submit(SourceKind::Text));
        assert_eq!(
            effects,
            vec![Effect::Submit {
                token: RequestToken {
                    control: SourceKind::Text,
                    seq: 1
                },
                request: DetectionRequest::Text {
                    text: LONG_TEXT.into()
                },
            }]
        );
        assert!(controller.is_loading(SourceKind::Text));
        assert!(!controller.can_submit(SourceKind::Text));
    }

    #[test]
    fn test_second_submit_on_busy_control_is_ignored() {
        let mut controller = TestController::new();
        controller.dispatch(Intent::EditText(LONG_TEXT.into()));
        submit_token(&mut controller, SourceKind::Text);
        assert!(controller.dispatch(Intent::Submit(SourceKind::Text)).is_empty());
    }

    #[test]
    fn test_failed_transport_reenables_control_without_recording() {
        let mut controller = TestController::new();
        controller.dispatch(Intent::EditText(LONG_TEXT.into()));
        let token = submit_token(&mut controller, SourceKind::Text);

        let effects = controller.dispatch(Intent::Completed(
            token,
            Err(DetectError::network("connection refused")),
        ));

        assert!(effects.is_empty());
        assert!(!controller.is_loading(SourceKind::Text));
        assert!(controller.can_submit(SourceKind::Text));
        assert_eq!(controller.history().stats().total_detections, 0);
        assert!(controller.history().is_empty());
        assert_eq!(
            controller.error(),
            Some("Network error. Please check if the backend is running.")
        );
    }

    #[test]
    fn test_api_error_message_is_surfaced() {
        let mut controller = TestController::new();
        controller.dispatch(Intent::ChooseFile(file("paper.pdf", 2048)));
        let token = submit_token(&mut controller, SourceKind::File);
        controller.dispatch(Intent::Completed(
            token,
            Err(DetectError::Api {
                status: 400,
                message: "Could not extract text from PDF".into(),
            }),
        ));
        assert_eq!(controller.error(), Some("Could not extract text from PDF"));
        assert!(controller.can_submit(SourceKind::File));
    }

    #[test]
    fn test_success_records_and_displays() {
        let mut controller = TestController::new();
        controller.dispatch(Intent::EditText(LONG_TEXT.into()));
        controller.dispatch(Intent::SetOption(SourceKind::Text, OptionKind::Explain, true));
        let token = submit_token(&mut controller, SourceKind::Text);

        let effects =
            controller.dispatch(Intent::Completed(token, Ok(result("AI-Generated", 82.5))));

        assert_eq!(effects, vec![Effect::ResultShown]);
        assert!(controller.success_visible());
        let shown = controller.displayed().unwrap();
        assert_eq!(shown.model.category, Verdict::AiGenerated);
        assert_eq!(shown.model.word_count, Some(12));
        assert!(shown.explanation.is_some());
        assert_eq!(controller.history().average_confidence(), Some(82.5));
        assert_eq!(controller.history().recent(1)[0].source, SourceKind::Text);
    }

    #[test]
    fn test_options_are_snapshot_at_submit() {
        let mut controller = TestController::new();
        controller.dispatch(Intent::EditText(LONG_TEXT.into()));
        let token = submit_token(&mut controller, SourceKind::Text);
        controller.dispatch(Intent::SetOption(SourceKind::Text, OptionKind::Detailed, true));
        controller.dispatch(Intent::Completed(token, Ok(result("Human-Written", 70.0))));
        assert!(!controller.displayed().unwrap().options.detailed);
    }

    #[test]
    fn test_invalid_file_keeps_previous_selection() {
        let mut controller = TestController::new();
        controller.dispatch(Intent::ChooseFile(file("draft.docx", 100)));
        controller.dispatch(Intent::ChooseFile(file("photo.png", 100)));
        assert_eq!(controller.selected_file().unwrap().name, "draft.docx");
        assert!(controller.error().unwrap().starts_with("Invalid file type"));

        controller.dispatch(Intent::ChooseFile(file("huge.pdf", MAX_FILE_SIZE + 1)));
        assert_eq!(controller.selected_file().unwrap().name, "draft.docx");
        assert_eq!(controller.error(), Some("File too large. Maximum size is 10MB."));
    }

    #[test]
    fn test_invalid_file_with_no_selection_stays_unselected() {
        let mut controller = TestController::new();
        controller.dispatch(Intent::ChooseFile(file("song.mp3", 100)));
        assert!(controller.selected_file().is_none());
        assert!(!controller.can_submit(SourceKind::File));
    }

    #[test]
    fn test_new_file_replaces_selection() {
        let mut controller = TestController::new();
        controller.dispatch(Intent::ChooseFile(file("a.txt", 1)));
        controller.dispatch(Intent::ChooseFile(file("b.pdf", 1)));
        assert_eq!(controller.selected_file().unwrap().name, "b.pdf");

        controller.dispatch(Intent::RemoveFile);
        assert!(controller.selected_file().is_none());
        let effects = controller.dispatch(Intent::Submit(SourceKind::File));
        assert!(effects.is_empty());
        assert_eq!(controller.error(), Some("Please select a file first."));
    }

    #[test]
    fn test_file_result_records_filename() {
        let mut controller = TestController::new();
        controller.dispatch(Intent::SwitchTab(SourceKind::File));
        controller.dispatch(Intent::ChooseFile(file("essay.txt", 4096)));
        let token = submit_token(&mut controller, SourceKind::File);
        controller.dispatch(Intent::Completed(token, Ok(result("Human-Written", 91.3))));

        let entry = &controller.history().recent(1)[0];
        assert_eq!(entry.filename.as_deref(), Some("essay.txt"));
        assert_eq!(controller.displayed().unwrap().model.word_count, None);
    }

    #[test]
    fn test_switching_tabs_clears_display() {
        let mut controller = TestController::new();
        controller.dispatch(Intent::EditText(LONG_TEXT.into()));
        let token = submit_token(&mut controller, SourceKind::Text);
        controller.dispatch(Intent::Completed(token, Ok(result("AI-Generated", 80.0))));
        assert!(controller.displayed().is_some());

        controller.dispatch(Intent::SwitchTab(SourceKind::File));
        assert!(controller.displayed().is_none());
        assert_eq!(controller.active_tab(), SourceKind::File);
    }

    #[test]
    fn test_result_for_inactive_tab_is_recorded_not_displayed() {
        let mut controller = TestController::new();
        controller.dispatch(Intent::EditText(LONG_TEXT.into()));
        let text_token = submit_token(&mut controller, SourceKind::Text);

        controller.dispatch(Intent::SwitchTab(SourceKind::File));
        controller.dispatch(Intent::ChooseFile(file("b.pdf", 10)));
        let file_token = submit_token(&mut controller, SourceKind::File);
        assert!(controller.is_loading(SourceKind::Text));
        assert!(controller.is_loading(SourceKind::File));

        controller.dispatch(Intent::Completed(file_token, Ok(result("Human-Written", 60.0))));
        let effects =
            controller.dispatch(Intent::Completed(text_token, Ok(result("AI-Generated", 90.0))));

        assert!(effects.is_empty());
        assert_eq!(controller.displayed().unwrap().token, file_token);
        assert_eq!(controller.history().len(), 2);
        assert!(!controller.is_loading(SourceKind::Text));
    }

    #[test]
    fn test_stale_token_is_ignored() {
        let mut controller = TestController::new();
        controller.dispatch(Intent::EditText(LONG_TEXT.into()));
        let token = submit_token(&mut controller, SourceKind::Text);
        let bogus = RequestToken {
            control: SourceKind::Text,
            seq: token.seq + 10,
        };

        controller.dispatch(Intent::Completed(bogus, Ok(result("AI-Generated", 50.0))));
        assert!(controller.is_loading(SourceKind::Text));
        assert!(controller.history().is_empty());
    }

    #[test]
    fn test_warning_and_dismissals() {
        let mut controller = TestController::new();
        controller.dispatch(Intent::ApiUnreachable);
        assert_eq!(controller.warning(), Some(API_UNREACHABLE));

        controller.dispatch(Intent::Submit(SourceKind::File));
        assert!(controller.error().is_some());
        controller.dispatch(Intent::DismissError);
        assert!(controller.error().is_none());
    }

    #[test]
    fn test_load_sample_enables_text_submit() {
        let mut controller = TestController::new();
        controller.dispatch(Intent::LoadSample(Sample::Human));
        assert!(controller.can_submit(SourceKind::Text));
    }
}
