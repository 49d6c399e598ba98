//! Application state management for the terminal portfolio.
//!
//! This module contains the main application state, mode management, and
//! the orchestration glue between the timer-driven domain components and
//! the outside world (preference store, submission transport).

use crate::domain::{
    BoundedIndex, ContactFlow, Portfolio, Project, ProjectCategory, Section, SubmissionTransport,
    Theme, Typewriter, TypewriterConfig,
};
use crate::infrastructure::PreferenceRepository;
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};

/// How long a toast stays visible.
pub const TOAST_DISPLAY: Duration = Duration::from_millis(2400);

const SEND_FAILURE_FALLBACK: &str = "Failed to send message. Please try again later.";

/// Represents the current mode of the application.
///
/// The mode determines how user input is interpreted and which overlay,
/// if any, is drawn over the sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    /// Section browsing - tabs, carousels, and shortcuts are live
    Normal,
    /// A contact form field is being edited
    EditField,
    /// A project is open in the detail popup
    ProjectDetail,
    /// Help screen is displayed
    Help,
    /// CSV export dialog is open
    ExportCsv,
}

/// One transient notification slot with a single hide deadline.
///
/// Showing a new message replaces any pending deadline, so two hide
/// timers never race for the same slot.
#[derive(Debug, Clone, Default)]
pub struct Toast {
    message: Option<String>,
    hide_at: Option<Instant>,
}

impl Toast {
    pub fn show(&mut self, message: impl Into<String>, now: Instant) {
        self.message = Some(message.into());
        self.hide_at = Some(now + TOAST_DISPLAY);
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Clears an expired message. Returns true when something changed.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.hide_at {
            Some(at) if at <= now => {
                self.hide_at = None;
                self.message = None;
                true
            }
            _ => false,
        }
    }
}

/// Owns the current theme and the injected preference store.
#[derive(Debug, Clone)]
pub struct ThemeManager {
    current: Theme,
    store: PreferenceRepository,
}

impl ThemeManager {
    /// Reads the stored preference; an absent or unreadable store means
    /// light.
    pub fn load(store: PreferenceRepository) -> Self {
        let current = store.load_theme();
        Self { current, store }
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    /// Flips the theme and persists the new value.
    pub fn toggle(&mut self) -> Result<Theme, String> {
        self.current = self.current.toggled();
        self.store.save_theme(self.current)?;
        Ok(self.current)
    }
}

/// Main application state.
///
/// Holds the portfolio content, one bounded index per carousel-like
/// control, the timer-driven components (typewriter, toast, contact
/// flow), and the channel a submission worker reports back on.
pub struct App {
    pub portfolio: Portfolio,
    pub theme: ThemeManager,
    pub mode: AppMode,
    /// Active section tab (the nav highlight)
    pub sections: BoundedIndex,
    /// Hero-line animation
    pub typewriter: Typewriter,
    /// Contact form and submission state machine
    pub contact: ContactFlow,
    /// Focused contact field (name, email, subject, message)
    pub contact_focus: BoundedIndex,
    /// Active testimonial dot
    pub testimonial_index: BoundedIndex,
    /// Selected blog post
    pub post_index: BoundedIndex,
    /// Work filter cycle: All plus one entry per category
    pub filter_index: BoundedIndex,
    /// Indices into `portfolio.projects` surviving the active filter
    pub visible_projects: Vec<usize>,
    /// Position within the filtered project scroller
    pub project_index: BoundedIndex,
    /// Current input buffer (for field editing mode)
    pub input: String,
    /// Cursor position within the input buffer
    pub cursor_position: usize,
    /// Input buffer for filename entry
    pub filename_input: String,
    /// Scroll position in help text
    pub help_scroll: usize,
    pub toast: Toast,
    transport: Arc<dyn SubmissionTransport>,
    submission_rx: Option<Receiver<Result<String, String>>>,
}

impl App {
    pub fn new(
        portfolio: Portfolio,
        theme: ThemeManager,
        transport: Arc<dyn SubmissionTransport>,
    ) -> Self {
        let typewriter = Typewriter::new(portfolio.roles.clone(), TypewriterConfig::default());
        let visible_projects: Vec<usize> = (0..portfolio.projects.len()).collect();
        Self {
            sections: BoundedIndex::new(Section::ALL.len()),
            typewriter,
            contact: ContactFlow::default(),
            contact_focus: BoundedIndex::new(4),
            testimonial_index: BoundedIndex::new(portfolio.testimonials.len()),
            post_index: BoundedIndex::new(portfolio.posts.len()),
            filter_index: BoundedIndex::new(ProjectCategory::ALL.len() + 1),
            project_index: BoundedIndex::new(visible_projects.len()),
            visible_projects,
            portfolio,
            theme,
            mode: AppMode::Normal,
            input: String::new(),
            cursor_position: 0,
            filename_input: String::new(),
            help_scroll: 0,
            toast: Toast::default(),
            transport,
            submission_rx: None,
        }
    }

    /// Starts the animation clock. Called once before the event loop.
    pub fn start(&mut self, now: Instant) {
        self.typewriter.start(now);
    }

    /// Advances every timer-driven component and drains the submission
    /// worker, if one is in flight.
    pub fn advance(&mut self, now: Instant) {
        self.typewriter.poll(now);
        self.toast.poll(now);
        self.contact.poll(now);
        self.poll_submission(now);
    }

    pub fn current_section(&self) -> Section {
        Section::ALL[self.sections.current().unwrap_or(0)]
    }

    /// The category selected by the filter cycle; `None` means all.
    pub fn active_filter(&self) -> Option<ProjectCategory> {
        match self.filter_index.current() {
            Some(0) | None => None,
            Some(i) => Some(ProjectCategory::ALL[i - 1]),
        }
    }

    pub fn filter_label(&self) -> &'static str {
        match self.active_filter() {
            None => "All",
            Some(category) => category.label(),
        }
    }

    /// Cycles the work filter and rebuilds the project scroller over the
    /// surviving projects.
    pub fn cycle_filter(&mut self) {
        self.filter_index.next();
        self.visible_projects = self.portfolio.projects_in(self.active_filter());
        self.project_index = BoundedIndex::new(self.visible_projects.len());
    }

    /// The project under the scroller cursor, after filtering.
    pub fn selected_project(&self) -> Option<&Project> {
        let position = self.project_index.current()?;
        let index = *self.visible_projects.get(position)?;
        self.portfolio.projects.get(index)
    }

    pub fn selected_post(&self) -> Option<&crate::domain::BlogPost> {
        self.portfolio.posts.get(self.post_index.current()?)
    }

    /// Opens the detail popup for the selected project, if any.
    pub fn open_project(&mut self) {
        if self.selected_project().is_some() {
            self.mode = AppMode::ProjectDetail;
        }
    }

    pub fn close_project(&mut self) {
        self.mode = AppMode::Normal;
    }

    /// Flips the theme, persists it, and raises the activation toast.
    pub fn toggle_theme(&mut self, now: Instant) {
        match self.theme.toggle() {
            Ok(Theme::Light) => self.toast.show("Light mode activated", now),
            Ok(Theme::Dark) => self.toast.show("Dark mode activated", now),
            Err(error) => self.toast.show(format!("Theme not saved: {}", error), now),
        }
    }

    /// Switches to field-editing mode for the focused contact field.
    ///
    /// Loads the field's current value into the input buffer and positions
    /// the cursor at the end.
    pub fn start_field_editing(&mut self) {
        self.mode = AppMode::EditField;
        let focus = self.contact_focus.current().unwrap_or(0);
        self.input = self.contact.form.field(focus).to_string();
        self.cursor_position = self.input.len();
    }

    /// Commits the input buffer into the focused field and returns to
    /// normal mode.
    pub fn finish_field_editing(&mut self) {
        let focus = self.contact_focus.current().unwrap_or(0);
        self.contact.form.set_field(focus, self.input.clone());
        self.mode = AppMode::Normal;
        self.input.clear();
        self.cursor_position = 0;
    }

    /// Abandons the edit without touching the field.
    pub fn cancel_field_editing(&mut self) {
        self.mode = AppMode::Normal;
        self.input.clear();
        self.cursor_position = 0;
    }

    /// Validates the form and, when clean, hands the message to the
    /// transport on a worker thread. Local rejections surface as a toast
    /// and the form note; a submission already in flight makes this a
    /// no-op.
    pub fn submit_contact(&mut self, now: Instant) {
        if self.contact.is_pending() {
            return;
        }
        match self.contact.begin(now) {
            Some(message) => {
                let (tx, rx) = mpsc::channel();
                let transport = Arc::clone(&self.transport);
                thread::spawn(move || {
                    let _ = tx.send(transport.deliver(&message));
                });
                self.submission_rx = Some(rx);
                self.toast.show("Sending...", now);
            }
            None => {
                if let Some(note) = self.contact.note() {
                    let text = note.text.clone();
                    self.toast.show(text, now);
                }
            }
        }
    }

    fn poll_submission(&mut self, now: Instant) {
        let Some(rx) = &self.submission_rx else {
            return;
        };
        let outcome = match rx.try_recv() {
            Ok(outcome) => outcome,
            Err(TryRecvError::Empty) => return,
            Err(TryRecvError::Disconnected) => Err(SEND_FAILURE_FALLBACK.to_string()),
        };
        self.submission_rx = None;
        let sent = outcome.is_ok();
        self.contact.resolve(outcome, now);
        self.toast
            .show(if sent { "Message sent." } else { "Message failed to send." }, now);
    }

    /// Switches to CSV export mode to prompt for a filename.
    pub fn start_csv_export(&mut self) {
        self.mode = AppMode::ExportCsv;
        self.filename_input = "projects.csv".to_string();
        self.cursor_position = self.filename_input.len();
    }

    /// Gets the filename to use for CSV export.
    pub fn get_csv_export_filename(&self) -> String {
        if self.filename_input.is_empty() {
            "projects.csv".to_string()
        } else {
            self.filename_input.clone()
        }
    }

    /// Processes the result of a CSV export operation and returns to
    /// normal mode.
    pub fn set_csv_export_result(&mut self, result: Result<String, String>, now: Instant) {
        match result {
            Ok(filename) => self.toast.show(format!("Exported to {}", filename), now),
            Err(error) => self.toast.show(format!("Export failed: {}", error), now),
        }
        self.mode = AppMode::Normal;
        self.filename_input.clear();
        self.cursor_position = 0;
    }

    /// Cancels filename input and returns to normal mode.
    pub fn cancel_filename_input(&mut self) {
        self.mode = AppMode::Normal;
        self.filename_input.clear();
        self.cursor_position = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ContactForm, ContactMessage, SubmissionPhase};
    use crate::domain::contact::NOTE_DISPLAY;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct MockTransport {
        calls: AtomicUsize,
        outcome: Result<String, String>,
        delay: Duration,
    }

    impl MockTransport {
        fn succeeding() -> Arc<Self> {
            Arc::new(Self {
                calls: AtomicUsize::new(0),
                outcome: Ok("Message sent successfully.".to_string()),
                delay: Duration::ZERO,
            })
        }

        fn failing(error: &str) -> Arc<Self> {
            Arc::new(Self {
                calls: AtomicUsize::new(0),
                outcome: Err(error.to_string()),
                delay: Duration::ZERO,
            })
        }

        fn slow() -> Arc<Self> {
            Arc::new(Self {
                calls: AtomicUsize::new(0),
                outcome: Ok("Message sent successfully.".to_string()),
                delay: Duration::from_millis(100),
            })
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl SubmissionTransport for MockTransport {
        fn deliver(&self, _message: &ContactMessage) -> Result<String, String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if !self.delay.is_zero() {
                thread::sleep(self.delay);
            }
            self.outcome.clone()
        }
    }

    fn app_with(transport: Arc<MockTransport>) -> App {
        let store = PreferenceRepository::new(
            std::env::temp_dir().join(format!("folio-test-{:p}.json", Arc::as_ptr(&transport))),
        );
        App::new(Portfolio::default(), ThemeManager::load(store), transport)
    }

    fn filled_form() -> ContactForm {
        ContactForm {
            name: "A".to_string(),
            email: "a@b.com".to_string(),
            subject: "S".to_string(),
            message: "0123456789".to_string(),
            website: String::new(),
        }
    }

    /// Drives `advance` until the in-flight submission resolves.
    fn settle(app: &mut App, from: Instant) -> Instant {
        let mut now = from;
        for _ in 0..200 {
            app.advance(now);
            if !app.contact.is_pending() {
                return now;
            }
            thread::sleep(Duration::from_millis(5));
            now += Duration::from_millis(5);
        }
        panic!("submission never resolved");
    }

    #[test]
    fn test_new_app_defaults() {
        let app = app_with(MockTransport::succeeding());
        assert_eq!(app.mode, AppMode::Normal);
        assert_eq!(app.current_section(), Section::Home);
        assert_eq!(app.active_filter(), None);
        assert_eq!(app.visible_projects.len(), 6);
        assert!(app.toast.message().is_none());
        assert_eq!(app.contact.phase(), SubmissionPhase::Idle);
    }

    #[test]
    fn test_cycle_filter_narrows_and_wraps() {
        let mut app = app_with(MockTransport::succeeding());

        app.cycle_filter();
        assert_eq!(app.active_filter(), Some(ProjectCategory::Design));
        assert_eq!(app.visible_projects.len(), 2);
        assert_eq!(app.selected_project().unwrap().category, ProjectCategory::Design);

        app.cycle_filter();
        app.cycle_filter();
        assert_eq!(app.active_filter(), Some(ProjectCategory::Branding));

        app.cycle_filter();
        assert_eq!(app.active_filter(), None); // back to All
        assert_eq!(app.visible_projects.len(), 6);
    }

    #[test]
    fn test_open_project_requires_selection() {
        let mut app = app_with(MockTransport::succeeding());
        app.open_project();
        assert_eq!(app.mode, AppMode::ProjectDetail);
        app.close_project();
        assert_eq!(app.mode, AppMode::Normal);

        // An empty portfolio has nothing to open.
        let mut empty = app_with(MockTransport::succeeding());
        empty.portfolio.projects.clear();
        empty.visible_projects.clear();
        empty.project_index = BoundedIndex::new(0);
        empty.open_project();
        assert_eq!(empty.mode, AppMode::Normal);
    }

    #[test]
    fn test_field_editing_round_trip() {
        let mut app = app_with(MockTransport::succeeding());
        app.contact_focus.set_to(1); // email

        app.start_field_editing();
        assert_eq!(app.mode, AppMode::EditField);
        assert!(app.input.is_empty());

        app.input = "a@b.com".to_string();
        app.finish_field_editing();
        assert_eq!(app.mode, AppMode::Normal);
        assert_eq!(app.contact.form.email, "a@b.com");
        assert!(app.input.is_empty());
    }

    #[test]
    fn test_cancel_field_editing_preserves_field() {
        let mut app = app_with(MockTransport::succeeding());
        app.contact.form.name = "Keep".to_string();

        app.start_field_editing();
        assert_eq!(app.input, "Keep");
        app.input = "Discard".to_string();
        app.cancel_field_editing();
        assert_eq!(app.contact.form.name, "Keep");
        assert_eq!(app.mode, AppMode::Normal);
    }

    #[test]
    fn test_honeypot_never_reaches_the_transport() {
        let transport = MockTransport::succeeding();
        let mut app = app_with(transport.clone());
        app.contact.form = filled_form();
        app.contact.form.website = "bot".to_string();

        let t0 = Instant::now();
        app.submit_contact(t0);

        assert_eq!(transport.calls(), 0);
        assert_eq!(app.contact.phase(), SubmissionPhase::Error);
        assert_eq!(app.toast.message(), Some("Spam detected!"));
    }

    #[test]
    fn test_successful_submission_end_to_end() {
        let transport = MockTransport::succeeding();
        let mut app = app_with(transport.clone());
        app.contact.form = filled_form();

        let t0 = Instant::now();
        app.submit_contact(t0);
        assert!(app.contact.is_pending());
        assert_eq!(app.toast.message(), Some("Sending..."));

        let settled = settle(&mut app, t0);
        assert_eq!(transport.calls(), 1);
        assert_eq!(app.contact.phase(), SubmissionPhase::Success);
        assert_eq!(app.contact.form, ContactForm::default()); // fields cleared
        assert!(!app.contact.note().unwrap().is_error);

        // Auto-reset after the display window.
        app.advance(settled + NOTE_DISPLAY);
        assert_eq!(app.contact.phase(), SubmissionPhase::Idle);
        assert!(app.contact.note().is_none());
    }

    #[test]
    fn test_second_submit_while_pending_is_noop() {
        let transport = MockTransport::slow();
        let mut app = app_with(transport.clone());
        app.contact.form = filled_form();

        let t0 = Instant::now();
        app.submit_contact(t0);
        app.submit_contact(t0 + Duration::from_millis(1));
        app.submit_contact(t0 + Duration::from_millis(2));

        settle(&mut app, t0);
        assert_eq!(transport.calls(), 1);
    }

    #[test]
    fn test_failed_submission_preserves_fields() {
        let transport = MockTransport::failing("All fields are required");
        let mut app = app_with(transport.clone());
        app.contact.form = filled_form();

        let t0 = Instant::now();
        app.submit_contact(t0);
        settle(&mut app, t0);

        assert_eq!(app.contact.phase(), SubmissionPhase::Error);
        assert_eq!(app.contact.form, filled_form());
        assert_eq!(app.contact.note().unwrap().text, "All fields are required");
        assert_eq!(app.toast.message(), Some("Message failed to send."));
    }

    #[test]
    fn test_toast_hides_after_display_window() {
        let mut app = app_with(MockTransport::succeeding());
        let t0 = Instant::now();

        app.toast.show("hello", t0);
        app.advance(t0 + TOAST_DISPLAY - Duration::from_millis(1));
        assert_eq!(app.toast.message(), Some("hello"));

        app.advance(t0 + TOAST_DISPLAY);
        assert!(app.toast.message().is_none());
    }

    #[test]
    fn test_showing_a_toast_rearms_the_deadline() {
        let mut app = app_with(MockTransport::succeeding());
        let t0 = Instant::now();

        app.toast.show("first", t0);
        app.toast.show("second", t0 + Duration::from_millis(2000));

        // The first deadline has passed but was replaced, not stacked.
        app.advance(t0 + TOAST_DISPLAY);
        assert_eq!(app.toast.message(), Some("second"));

        app.advance(t0 + Duration::from_millis(2000) + TOAST_DISPLAY);
        assert!(app.toast.message().is_none());
    }

    #[test]
    fn test_csv_export_mode_flow() {
        let mut app = app_with(MockTransport::succeeding());
        let t0 = Instant::now();

        app.start_csv_export();
        assert_eq!(app.mode, AppMode::ExportCsv);
        assert_eq!(app.get_csv_export_filename(), "projects.csv");

        app.filename_input.clear();
        assert_eq!(app.get_csv_export_filename(), "projects.csv");

        app.set_csv_export_result(Ok("projects.csv".to_string()), t0);
        assert_eq!(app.mode, AppMode::Normal);
        assert_eq!(app.toast.message(), Some("Exported to projects.csv"));

        app.start_csv_export();
        app.cancel_filename_input();
        assert_eq!(app.mode, AppMode::Normal);
        assert!(app.filename_input.is_empty());
    }

    #[test]
    fn test_theme_toggle_persists_and_toasts() {
        let dir = tempfile::tempdir().unwrap();
        let store = PreferenceRepository::new(dir.path().join("prefs.json"));
        let mut app = App::new(
            Portfolio::default(),
            ThemeManager::load(store.clone()),
            MockTransport::succeeding(),
        );
        let t0 = Instant::now();

        assert_eq!(app.theme.current(), Theme::Light);
        app.toggle_theme(t0);
        assert_eq!(app.theme.current(), Theme::Dark);
        assert_eq!(app.toast.message(), Some("Dark mode activated"));
        assert_eq!(store.load_theme(), Theme::Dark);

        app.toggle_theme(t0);
        assert_eq!(app.toast.message(), Some("Light mode activated"));
        assert_eq!(store.load_theme(), Theme::Light);
    }
}
