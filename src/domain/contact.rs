//! Contact form validation and the submission state machine.
//!
//! The flow owns one submission at a time: validate locally, hand the
//! message to a transport, then display the outcome until an auto-reset
//! deadline returns it to idle. The transport is a trait so the flow is
//! agnostic to which mailer backend answers.

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use super::errors::{FormError, FormResult};

/// Minimum trimmed message length accepted by the local pipeline.
pub const MIN_MESSAGE_LEN: usize = 10;

/// How long a success or error note stays on screen before the flow
/// resets to idle.
pub const NOTE_DISPLAY: Duration = Duration::from_millis(5000);

pub const FIELD_NAMES: [&str; 4] = ["name", "email", "subject", "message"];

/// Raw field buffers bound to the on-screen form. `website` is the hidden
/// honeypot: humans never see it, so a non-empty value marks the
/// submission as automated spam.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub website: String,
}

impl ContactForm {
    pub fn field(&self, index: usize) -> &str {
        match index {
            0 => &self.name,
            1 => &self.email,
            2 => &self.subject,
            _ => &self.message,
        }
    }

    pub fn set_field(&mut self, index: usize, value: String) {
        match index {
            0 => self.name = value,
            1 => self.email = value,
            2 => self.subject = value,
            _ => self.message = value,
        }
    }

    /// Runs the local pipeline in order: honeypot, required fields, email
    /// shape, message length. Success yields the trimmed wire message.
    pub fn validate(&self) -> FormResult<ContactMessage> {
        if !self.website.trim().is_empty() {
            return Err(FormError::SpamDetected);
        }

        let name = self.name.trim();
        let email = self.email.trim();
        let subject = self.subject.trim();
        let message = self.message.trim();

        let missing: Vec<&'static str> = FIELD_NAMES
            .iter()
            .zip([name, email, subject, message])
            .filter(|(_, value)| value.is_empty())
            .map(|(field, _)| *field)
            .collect();
        if !missing.is_empty() {
            return Err(FormError::MissingFields(missing));
        }

        if !is_valid_email(email) {
            return Err(FormError::InvalidEmail);
        }

        if message.chars().count() < MIN_MESSAGE_LEN {
            return Err(FormError::MessageTooShort);
        }

        Ok(ContactMessage {
            name: name.to_string(),
            email: email.to_string(),
            subject: subject.to_string(),
            message: message.to_string(),
            website: String::new(),
        })
    }
}

/// Checks the `local@domain.tld` shape: one `@`, no whitespace, and at
/// least one dot in the domain with text on both sides.
pub fn is_valid_email(email: &str) -> bool {
    let mut parts = email.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };
    if local.is_empty() || local.chars().any(char::is_whitespace) {
        return false;
    }
    if domain.chars().any(char::is_whitespace) {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

/// The validated wire body, matching both backends' field names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub website: String,
}

/// Delivers a validated message to whichever backend is configured.
///
/// Returns the backend's confirmation text, or its error text for the
/// user. Implementations run on a worker thread, hence `Send + Sync`.
pub trait SubmissionTransport: Send + Sync {
    fn deliver(&self, message: &ContactMessage) -> Result<String, String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionPhase {
    Idle,
    Validating,
    Pending,
    Success,
    Error,
}

/// A note shown next to the form, flagged so rendering can color it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormNote {
    pub text: String,
    pub is_error: bool,
}

/// The contact-submission state machine.
///
/// `begin` validates and, when the form is clean, parks the flow in
/// `Pending` and hands back the message to dispatch; exactly one
/// submission can be in flight, so `begin` is a no-op until `resolve`
/// lands the outcome. Success clears the field buffers; rejection and
/// transport errors preserve them. Both outcomes display a note for
/// [`NOTE_DISPLAY`] and then `poll` returns the flow to `Idle`.
#[derive(Debug, Clone)]
pub struct ContactFlow {
    pub form: ContactForm,
    phase: SubmissionPhase,
    note: Option<FormNote>,
    reset_at: Option<Instant>,
}

impl Default for ContactFlow {
    fn default() -> Self {
        Self {
            form: ContactForm::default(),
            phase: SubmissionPhase::Idle,
            note: None,
            reset_at: None,
        }
    }
}

impl ContactFlow {
    pub fn phase(&self) -> SubmissionPhase {
        self.phase
    }

    pub fn note(&self) -> Option<&FormNote> {
        self.note.as_ref()
    }

    pub fn is_pending(&self) -> bool {
        self.phase == SubmissionPhase::Pending
    }

    /// Validates the form and starts a submission.
    ///
    /// Returns the message to hand to the transport, or `None` when the
    /// form was rejected locally or a submission is already in flight.
    pub fn begin(&mut self, now: Instant) -> Option<ContactMessage> {
        if self.phase == SubmissionPhase::Pending {
            return None;
        }

        self.phase = SubmissionPhase::Validating;
        match self.form.validate() {
            Ok(message) => {
                self.phase = SubmissionPhase::Pending;
                self.note = None;
                self.reset_at = None;
                Some(message)
            }
            Err(error) => {
                self.show_note(error.to_string(), true, now);
                self.phase = SubmissionPhase::Error;
                None
            }
        }
    }

    /// Lands the transport outcome for the in-flight submission.
    pub fn resolve(&mut self, outcome: Result<String, String>, now: Instant) {
        if self.phase != SubmissionPhase::Pending {
            return;
        }
        match outcome {
            Ok(confirmation) => {
                self.form = ContactForm::default();
                self.show_note(confirmation, false, now);
                self.phase = SubmissionPhase::Success;
            }
            Err(error) => {
                // Fields stay put so the user can correct and retry.
                self.show_note(error, true, now);
                self.phase = SubmissionPhase::Error;
            }
        }
    }

    /// Clears an expired note and returns the flow to idle. Returns true
    /// when something changed.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.reset_at {
            Some(at) if at <= now => {
                self.reset_at = None;
                self.note = None;
                self.phase = SubmissionPhase::Idle;
                true
            }
            _ => false,
        }
    }

    /// Showing a note re-arms the single reset deadline; an earlier
    /// pending one is replaced, never stacked.
    fn show_note(&mut self, text: String, is_error: bool, now: Instant) {
        self.note = Some(FormNote { text, is_error });
        self.reset_at = Some(now + NOTE_DISPLAY);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> ContactForm {
        ContactForm {
            name: "A".to_string(),
            email: "a@b.com".to_string(),
            subject: "S".to_string(),
            message: "0123456789".to_string(),
            website: String::new(),
        }
    }

    #[test]
    fn test_honeypot_rejects_before_anything_else() {
        let mut form = ContactForm::default(); // everything else invalid too
        form.website = "http://spam.example".to_string();
        assert_eq!(form.validate(), Err(FormError::SpamDetected));
    }

    #[test]
    fn test_missing_fields_are_named() {
        let mut form = filled_form();
        form.email.clear();
        form.message = "   ".to_string(); // whitespace only counts as empty
        assert_eq!(
            form.validate(),
            Err(FormError::MissingFields(vec!["email", "message"]))
        );
    }

    #[test]
    fn test_email_shapes() {
        assert!(is_valid_email("a@b.c"));
        assert!(is_valid_email("first.last@mail.example.org"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("ab.c"));
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("a@@b.c"));
        assert!(!is_valid_email("a b@c.d"));
        assert!(!is_valid_email("a@.c"));
        assert!(!is_valid_email("a@b."));
    }

    #[test]
    fn test_invalid_email_rejected() {
        let mut form = filled_form();
        form.email = "a@b".to_string();
        assert_eq!(form.validate(), Err(FormError::InvalidEmail));
    }

    #[test]
    fn test_message_length_boundary() {
        let mut form = filled_form();
        form.message = "123456789".to_string(); // 9 chars
        assert_eq!(form.validate(), Err(FormError::MessageTooShort));

        form.message = "1234567890".to_string(); // 10 chars
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_validate_trims_the_wire_message() {
        let mut form = filled_form();
        form.name = "  A  ".to_string();
        form.message = "  0123456789  ".to_string();
        let message = form.validate().unwrap();
        assert_eq!(message.name, "A");
        assert_eq!(message.message, "0123456789");
        assert!(message.website.is_empty());
    }

    #[test]
    fn test_begin_returns_message_and_goes_pending() {
        let mut flow = ContactFlow::default();
        flow.form = filled_form();
        let t0 = Instant::now();

        let message = flow.begin(t0).expect("valid form must submit");
        assert_eq!(message.email, "a@b.com");
        assert_eq!(flow.phase(), SubmissionPhase::Pending);
        assert!(flow.note().is_none());
    }

    #[test]
    fn test_second_begin_while_pending_is_noop() {
        let mut flow = ContactFlow::default();
        flow.form = filled_form();
        let t0 = Instant::now();

        assert!(flow.begin(t0).is_some());
        assert!(flow.begin(t0).is_none());
        assert!(flow.begin(t0 + Duration::from_secs(1)).is_none());
        assert_eq!(flow.phase(), SubmissionPhase::Pending);
    }

    #[test]
    fn test_local_rejection_parks_in_error_with_fields_intact() {
        let mut flow = ContactFlow::default();
        flow.form = filled_form();
        flow.form.email = "nope".to_string();
        let t0 = Instant::now();

        assert!(flow.begin(t0).is_none());
        assert_eq!(flow.phase(), SubmissionPhase::Error);
        let note = flow.note().unwrap();
        assert!(note.is_error);
        assert_eq!(note.text, "Please enter a valid email address.");
        assert_eq!(flow.form.name, "A"); // inputs preserved
        assert_eq!(flow.form.email, "nope");
    }

    #[test]
    fn test_success_clears_fields_and_resets_to_idle() {
        let mut flow = ContactFlow::default();
        flow.form = filled_form();
        let t0 = Instant::now();

        flow.begin(t0);
        flow.resolve(Ok("Message sent successfully.".to_string()), t0);

        assert_eq!(flow.phase(), SubmissionPhase::Success);
        assert_eq!(flow.form, ContactForm::default());
        let note = flow.note().unwrap();
        assert!(!note.is_error);
        assert_eq!(note.text, "Message sent successfully.");

        // Note stays up until the display window passes.
        assert!(!flow.poll(t0 + NOTE_DISPLAY - Duration::from_millis(1)));
        assert_eq!(flow.phase(), SubmissionPhase::Success);

        assert!(flow.poll(t0 + NOTE_DISPLAY));
        assert_eq!(flow.phase(), SubmissionPhase::Idle);
        assert!(flow.note().is_none());
    }

    #[test]
    fn test_transport_error_preserves_fields() {
        let mut flow = ContactFlow::default();
        flow.form = filled_form();
        let t0 = Instant::now();

        flow.begin(t0);
        flow.resolve(Err("Failed to send message. Please try again later.".to_string()), t0);

        assert_eq!(flow.phase(), SubmissionPhase::Error);
        assert_eq!(flow.form, filled_form());
        assert!(flow.note().unwrap().is_error);

        flow.poll(t0 + NOTE_DISPLAY);
        assert_eq!(flow.phase(), SubmissionPhase::Idle);
        // Ready to retry with the same inputs.
        assert!(flow.begin(t0 + NOTE_DISPLAY).is_some());
    }

    #[test]
    fn test_resolve_outside_pending_is_ignored() {
        let mut flow = ContactFlow::default();
        let t0 = Instant::now();
        flow.resolve(Ok("stray".to_string()), t0);
        assert_eq!(flow.phase(), SubmissionPhase::Idle);
        assert!(flow.note().is_none());
    }
}
