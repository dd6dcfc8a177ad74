// src/app.rs

use crate::controller::AppEvent;
use crate::core::error::RequestError;
use crate::core::models::{AnalysisRequest, AnalysisResult, UsageStatus};
use crate::core::presentation::{self, Presentation};
use crate::core::validator;
use chrono::{DateTime, Local};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::{debug, info};

pub const SPINNER_CHARS: &[char] = &['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

pub const SUBMIT_LABEL: &str = "Analyze Sentiment";
pub const BUSY_LABEL: &str = "Analyzing...";

/// Where the submission cycle currently stands.
///
/// `Error` keeps the form interactive; it only adds the inline message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppState {
    Idle,
    Busy,
    ShowingResults,
    Error(String),
}

/// The two mutually exclusive screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Form,
    Results,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Review,
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UsageTier {
    Info,
    Warning,
    Danger,
}

/// The usage line under the submit control. `emphasis` is drawn in bold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsageNotice {
    pub tier: UsageTier,
    pub prefix: String,
    pub emphasis: String,
    pub suffix: String,
}

impl UsageNotice {
    pub fn text(&self) -> String {
        format!("{}{}{}", self.prefix, self.emphasis, self.suffix)
    }
}

/// One analysis result, already mapped to what the results view shows.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedResult {
    pub sentiment_label: String,
    pub presentation: Presentation,
    pub confidence: f64,
    pub confidence_label: String,
    /// Fill of the confidence bar, limited to what a gauge can draw.
    pub confidence_ratio: f64,
    pub analysis: Option<String>,
    pub analyzed_at: DateTime<Local>,
}

pub struct App {
    pub should_quit: bool,
    pub state: AppState,
    pub input: String,
    pub invalid: bool,
    pub focus: Focus,
    pub result: Option<RenderedResult>,
    pub usage: Option<UsageStatus>,
    pub spinner_frame: usize,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        Self {
            should_quit: false,
            state: AppState::Idle,
            input: String::new(),
            invalid: false,
            focus: Focus::Review,
            result: None,
            usage: None,
            spinner_frame: 0,
        }
    }

    pub fn view(&self) -> View {
        match self.state {
            AppState::ShowingResults => View::Results,
            _ => View::Form,
        }
    }

    pub fn is_busy(&self) -> bool {
        matches!(self.state, AppState::Busy)
    }

    pub fn usage_exhausted(&self) -> bool {
        self.usage.as_ref().is_some_and(UsageStatus::is_exhausted)
    }

    /// The submit control is disabled while a request is out or the quota is spent.
    pub fn submit_disabled(&self) -> bool {
        self.is_busy() || self.usage_exhausted()
    }

    pub fn submit_label(&self) -> String {
        if self.is_busy() {
            format!("{} {}", SPINNER_CHARS[self.spinner_frame], BUSY_LABEL)
        } else {
            SUBMIT_LABEL.to_string()
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.state {
            AppState::Error(message) => Some(message.as_str()),
            _ => None,
        }
    }

    /// Validates the review and, when it passes, enters the busy state.
    ///
    /// Returns the request to dispatch, or `None` when nothing must be sent:
    /// the form is hidden, the control is disabled, or the review is empty.
    pub fn begin_submission(&mut self) -> Option<AnalysisRequest> {
        if self.view() != View::Form || self.submit_disabled() {
            debug!(state = ?self.state, "Submission ignored, control unavailable.");
            return None;
        }

        self.invalid = false;
        match validator::validate_review(&self.input) {
            Ok(request) => {
                self.state = AppState::Busy;
                self.spinner_frame = 0;
                Some(request)
            }
            Err(e) => {
                debug!("Rejected empty review.");
                self.invalid = true;
                self.state = AppState::Error(e.to_string());
                None
            }
        }
    }

    /// Applies the outcome of one dispatched analysis and leaves the busy state.
    pub fn finish_analysis(&mut self, outcome: Result<AnalysisResult, RequestError>) {
        match outcome {
            Ok(result) => {
                let usage = result.usage_status.clone();
                self.render_result(result);
                if let Some(usage) = usage {
                    self.apply_usage(usage);
                }
            }
            Err(err) => {
                info!(message = %err.message, "Analysis failed.");
                self.invalid = true;
                self.state = AppState::Error(err.message);
                if let Some(usage) = err.usage_status {
                    self.apply_usage(usage);
                }
            }
        }
        self.spinner_frame = 0;
    }

    /// Maps a result onto the results view and switches to it.
    pub fn render_result(&mut self, result: AnalysisResult) {
        let presentation = result
            .sentiment_kind()
            .map(presentation::presentation_for)
            .unwrap_or_default();
        let confidence = result.confidence;

        self.result = Some(RenderedResult {
            sentiment_label: capitalize(&result.sentiment),
            presentation,
            confidence,
            confidence_label: format!("{confidence}%"),
            confidence_ratio: (confidence / 100.0).clamp(0.0, 1.0),
            analysis: result.analysis.filter(|text| !text.is_empty()),
            analyzed_at: Local::now(),
        });
        self.state = AppState::ShowingResults;
        self.focus = Focus::None;
    }

    /// Replaces the usage snapshot. No merge with the previous one.
    pub fn apply_usage(&mut self, usage: UsageStatus) {
        debug!(remaining = usage.remaining, max = usage.max, "Usage snapshot updated.");
        self.usage = Some(usage);
    }

    /// The usage line, or `None` until a first snapshot has arrived.
    pub fn usage_notice(&self) -> Option<UsageNotice> {
        let usage = self.usage.as_ref()?;

        if usage.is_exhausted() {
            return Some(UsageNotice {
                tier: UsageTier::Danger,
                prefix: "You have reached the maximum limit of ".to_string(),
                emphasis: usage.max.to_string(),
                suffix: " analyses".to_string(),
            });
        }

        let noun = if usage.remaining == 1 { "attempt" } else { "attempts" };
        let tier = if usage.remaining <= 2 { UsageTier::Warning } else { UsageTier::Info };
        Some(UsageNotice {
            tier,
            prefix: "You have ".to_string(),
            emphasis: usage.remaining.to_string(),
            suffix: format!(" analysis {noun} remaining"),
        })
    }

    /// Back to an empty, focused form. The usage snapshot is kept.
    pub fn reset(&mut self) {
        self.state = AppState::Idle;
        self.input.clear();
        self.invalid = false;
        self.focus = Focus::Review;
        self.result = None;
        self.spinner_frame = 0;
    }

    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::AnalysisFinished(outcome) => self.finish_analysis(outcome),
            AppEvent::UsageFetched(usage) => self.apply_usage(usage),
        }
    }

    /// Routes one key press. Returns a request when the press submitted the form.
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<AnalysisRequest> {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.quit();
            return None;
        }

        match self.view() {
            View::Form => match key.code {
                KeyCode::Esc => self.quit(),
                KeyCode::Enter => return self.begin_submission(),
                KeyCode::Backspace if self.focus == Focus::Review => {
                    self.input.pop();
                }
                KeyCode::Char(c)
                    if self.focus == Focus::Review
                        && !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
                {
                    self.input.push(c)
                }
                _ => {}
            },
            View::Results => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => self.quit(),
                KeyCode::Char('n') | KeyCode::Char('N') => self.reset(),
                _ => {}
            },
        }
        None
    }

    /// Appends pasted text to the review. Line breaks become spaces so a
    /// multi-line paste stays one review and never submits the form.
    pub fn handle_paste(&mut self, text: &str) {
        if self.view() != View::Form || self.focus != Focus::Review {
            return;
        }
        let folded = text.replace("\r\n", " ").replace(['\r', '\n'], " ");
        self.input.push_str(&folded);
    }

    pub fn on_tick(&mut self) {
        if self.is_busy() {
            self.spinner_frame = (self.spinner_frame + 1) % SPINNER_CHARS.len();
        }
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}

fn capitalize(raw: &str) -> String {
    let mut chars = raw.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventKind;

    fn result(sentiment: &str, confidence: f64) -> AnalysisResult {
        AnalysisResult {
            sentiment: sentiment.to_string(),
            confidence,
            analysis: None,
            usage_status: None,
        }
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn blank_review_never_produces_a_request() {
        for raw in ["", "   ", "\t\n"] {
            let mut app = App::new();
            app.input = raw.to_string();
            assert_eq!(app.begin_submission(), None);
            assert!(app.invalid);
            assert_eq!(app.error_message(), Some("Please enter a movie review to analyze"));
            assert_eq!(app.view(), View::Form);
            assert!(!app.submit_disabled());
        }
    }

    #[test]
    fn valid_review_enters_busy_state() {
        let mut app = App::new();
        app.input = "  Loved it ".to_string();
        let request = app.begin_submission().unwrap();
        assert_eq!(request.review(), "Loved it");
        assert!(app.is_busy());
        assert!(app.submit_disabled());
        assert!(app.submit_label().ends_with(BUSY_LABEL));
    }

    #[test]
    fn submission_is_refused_while_busy() {
        let mut app = App::new();
        app.input = "Fine".to_string();
        assert!(app.begin_submission().is_some());
        assert_eq!(app.begin_submission(), None);
    }

    #[test]
    fn resubmitting_after_validation_error_clears_flag() {
        let mut app = App::new();
        assert_eq!(app.begin_submission(), None);
        app.input = "Decent".to_string();
        assert!(app.begin_submission().is_some());
        assert!(!app.invalid);
        assert_eq!(app.error_message(), None);
    }

    #[test]
    fn known_sentiments_render_their_presentation() {
        let cases = [
            ("positive", "smile", "positive", "success"),
            ("negative", "frown", "negative", "danger"),
            ("neutral", "meh", "neutral", "warning"),
        ];
        for (sentiment, icon, badge, bar) in cases {
            let mut app = App::new();
            app.render_result(result(sentiment, 50.0));
            let rendered = app.result.unwrap();
            assert_eq!(rendered.presentation.icon, icon);
            assert_eq!(rendered.presentation.badge_class, badge);
            assert_eq!(rendered.presentation.bar_class, bar);
        }
    }

    #[test]
    fn unknown_sentiment_renders_blank_presentation() {
        let mut app = App::new();
        app.render_result(result("bittersweet", 61.0));
        let rendered = app.result.as_ref().unwrap();
        assert_eq!(rendered.presentation, Presentation::default());
        assert_eq!(rendered.sentiment_label, "Bittersweet");
        assert_eq!(app.view(), View::Results);
    }

    #[test]
    fn confidence_label_is_not_clamped() {
        let mut app = App::new();
        app.render_result(result("positive", 130.0));
        let rendered = app.result.unwrap();
        assert_eq!(rendered.confidence_label, "130%");
        assert_eq!(rendered.confidence_ratio, 1.0);
    }

    #[test]
    fn success_shows_results_and_reset_restores_form() {
        let mut app = App::new();
        app.input = "Great".to_string();
        app.begin_submission().unwrap();
        app.finish_analysis(Ok(result("positive", 92.0)));

        assert_eq!(app.view(), View::Results);
        assert!(!app.is_busy());
        assert_eq!(app.submit_label(), SUBMIT_LABEL);

        app.reset();
        assert_eq!(app.view(), View::Form);
        assert_eq!(app.state, AppState::Idle);
        assert!(app.input.is_empty());
        assert_eq!(app.focus, Focus::Review);
        assert!(app.result.is_none());
    }

    #[test]
    fn failure_restores_control_and_keeps_form() {
        let mut app = App::new();
        app.input = "Terrible film.".to_string();
        app.begin_submission().unwrap();
        app.finish_analysis(Err(RequestError::new("Rate limit exceeded")));

        assert_eq!(app.error_message(), Some("Rate limit exceeded"));
        assert!(app.invalid);
        assert!(!app.submit_disabled());
        assert_eq!(app.view(), View::Form);
        assert_eq!(app.input, "Terrible film.");
    }

    #[test]
    fn exhausted_usage_disables_submit_regardless_of_prior_state() {
        let mut app = App::new();
        app.apply_usage(UsageStatus::new(5, 7));
        assert!(!app.submit_disabled());

        let mut exhausted = result("neutral", 40.0);
        exhausted.usage_status = Some(UsageStatus::new(0, 7));
        app.input = "Meh".to_string();
        app.begin_submission().unwrap();
        app.finish_analysis(Ok(exhausted));
        assert!(app.submit_disabled());

        app.reset();
        assert!(app.submit_disabled());
        app.input = "Again".to_string();
        assert_eq!(app.begin_submission(), None);
        assert_eq!(app.state, AppState::Idle);
    }

    #[test]
    fn fresh_positive_snapshot_lifts_the_disable() {
        let mut app = App::new();
        app.apply_usage(UsageStatus::new(0, 7));
        assert!(app.submit_disabled());
        app.apply_usage(UsageStatus::new(3, 7));
        assert!(!app.submit_disabled());
    }

    #[test]
    fn error_usage_status_is_forwarded() {
        let mut app = App::new();
        app.input = "Nice".to_string();
        app.begin_submission().unwrap();
        app.finish_analysis(Err(
            RequestError::new("limit").with_usage(Some(UsageStatus::new(0, 7))),
        ));
        assert!(app.submit_disabled());
        assert_eq!(app.usage_notice().unwrap().tier, UsageTier::Danger);
    }

    #[test]
    fn usage_notice_absent_until_first_snapshot() {
        assert_eq!(App::new().usage_notice(), None);
    }

    #[test]
    fn usage_notice_wording_and_tiers() {
        let mut app = App::new();

        app.apply_usage(UsageStatus::new(1, 7));
        let notice = app.usage_notice().unwrap();
        assert_eq!(notice.text(), "You have 1 analysis attempt remaining");
        assert_eq!(notice.tier, UsageTier::Warning);

        app.apply_usage(UsageStatus::new(2, 7));
        let notice = app.usage_notice().unwrap();
        assert_eq!(notice.text(), "You have 2 analysis attempts remaining");
        assert_eq!(notice.tier, UsageTier::Warning);

        app.apply_usage(UsageStatus::new(3, 7));
        assert_eq!(app.usage_notice().unwrap().tier, UsageTier::Info);

        app.apply_usage(UsageStatus::new(0, 7));
        let notice = app.usage_notice().unwrap();
        assert_eq!(notice.text(), "You have reached the maximum limit of 7 analyses");
        assert_eq!(notice.emphasis, "7");
        assert_eq!(notice.tier, UsageTier::Danger);
    }

    #[test]
    fn reset_keeps_usage_snapshot() {
        let mut app = App::new();
        app.apply_usage(UsageStatus::new(4, 7));
        app.render_result(result("positive", 80.0));
        app.reset();
        assert_eq!(app.usage, Some(UsageStatus::new(4, 7)));
    }

    #[test]
    fn keys_edit_submit_and_reset() {
        let mut app = App::new();
        for c in "Ok!".chars() {
            app.handle_key(press(KeyCode::Char(c)));
        }
        app.handle_key(press(KeyCode::Backspace));
        assert_eq!(app.input, "Ok");

        let request = app.handle_key(press(KeyCode::Enter)).unwrap();
        assert_eq!(request.review(), "Ok");

        app.finish_analysis(Ok(result("positive", 70.0)));
        app.handle_key(press(KeyCode::Char('x')));
        assert_eq!(app.input, "Ok");

        app.handle_key(press(KeyCode::Char('n')));
        assert_eq!(app.view(), View::Form);
        assert!(app.input.is_empty());
    }

    #[test]
    fn q_is_typed_in_the_form_but_quits_from_results() {
        let mut app = App::new();
        app.handle_key(press(KeyCode::Char('q')));
        assert!(!app.should_quit);
        assert_eq!(app.input, "q");

        app.render_result(result("neutral", 50.0));
        app.handle_key(press(KeyCode::Char('q')));
        assert!(app.should_quit);
    }

    #[test]
    fn ctrl_c_quits_anywhere() {
        let mut app = App::new();
        let mut key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        key.kind = KeyEventKind::Press;
        app.handle_key(key);
        assert!(app.should_quit);
        assert!(app.input.is_empty());
    }

    #[test]
    fn ctrl_and_alt_chords_are_not_typed() {
        let mut app = App::new();
        for c in "Great".chars() {
            app.handle_key(press(KeyCode::Char(c)));
        }
        app.handle_key(KeyEvent::new(KeyCode::Char('j'), KeyModifiers::CONTROL));
        app.handle_key(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::ALT));
        assert_eq!(app.input, "Great");
        assert_eq!(app.state, AppState::Idle);

        app.handle_key(KeyEvent::new(KeyCode::Char('G'), KeyModifiers::SHIFT));
        assert_eq!(app.input, "GreatG");
    }

    #[test]
    fn multi_line_paste_is_one_review() {
        let mut app = App::new();
        app.input = "Great".to_string();
        app.handle_paste(" opening.\r\nSecond paragraph\nthird\rline");
        assert_eq!(app.input, "Great opening. Second paragraph third line");
        assert_eq!(app.state, AppState::Idle);

        let request = app.handle_key(press(KeyCode::Enter)).unwrap();
        assert_eq!(request.review(), "Great opening. Second paragraph third line");
    }

    #[test]
    fn paste_is_ignored_on_results_view() {
        let mut app = App::new();
        app.render_result(result("positive", 90.0));
        app.handle_paste("stray text");
        assert!(app.input.is_empty());
    }

    #[test]
    fn spinner_only_advances_while_busy() {
        let mut app = App::new();
        app.on_tick();
        assert_eq!(app.spinner_frame, 0);

        app.input = "Fine".to_string();
        app.begin_submission().unwrap();
        app.on_tick();
        app.on_tick();
        assert_eq!(app.spinner_frame, 2);
    }
}
