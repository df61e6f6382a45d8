use std::rc::Rc;

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;
use yew::functional::Reducible;

use crate::config;

const DEFAULT_SUBJECT: &str = "General Inquiry";
pub const SENT_MESSAGE: &str = "Message sent successfully! I'll get back to you soon.";

/// Field values read from the contact form at submit time.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// Validation failures. The message is shown to the visitor as-is.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("Please fill in all fields")]
    MissingFields,
    #[error("Please enter a valid email address")]
    InvalidEmail,
}

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

impl ContactDraft {
    pub fn validate(&self) -> Result<(), ContactError> {
        let fields = [&self.name, &self.email, &self.subject, &self.message];
        if fields.iter().any(|f| f.trim().is_empty()) {
            return Err(ContactError::MissingFields);
        }
        if !is_valid_email(&self.email) {
            return Err(ContactError::InvalidEmail);
        }
        Ok(())
    }

    /// Greeting sent through the WhatsApp deep link. Missing fields are not an
    /// error here; an empty subject falls back to a generic one.
    pub fn whatsapp_message(&self) -> String {
        let subject = if self.subject.is_empty() { DEFAULT_SUBJECT } else { &self.subject };
        format!(
            "Hello {}! My name is {}.\n\nSubject: {}\n\n{}",
            config::OWNER_FIRST_NAME,
            self.name,
            subject,
            self.message
        )
    }

    pub fn whatsapp_url(&self) -> String {
        whatsapp_link(config::WHATSAPP_NUMBER, &self.whatsapp_message())
    }
}

pub fn whatsapp_link(phone: &str, text: &str) -> String {
    format!("https://wa.me/{}?text={}", phone, urlencoding::encode(text))
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SendState {
    #[default]
    Idle,
    Sending,
}

/// What a press of the submit button amounts to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Submission {
    /// A send is already in flight.
    Ignored,
    Rejected(ContactError),
    Started,
}

/// The contact form: the draft being edited plus the simulated send.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactForm {
    pub draft: ContactDraft,
    pub send: SendState,
}

impl ContactForm {
    pub fn is_sending(&self) -> bool {
        self.send == SendState::Sending
    }

    pub fn edit(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::Name => &mut self.draft.name,
            Field::Email => &mut self.draft.email,
            Field::Subject => &mut self.draft.subject,
            Field::Message => &mut self.draft.message,
        };
        *slot = value;
    }

    /// Validates and starts a send. The draft is kept untouched on rejection.
    pub fn submit(&mut self) -> Submission {
        if self.is_sending() {
            return Submission::Ignored;
        }
        match self.draft.validate() {
            Ok(()) => {
                self.send = SendState::Sending;
                Submission::Started
            }
            Err(err) => Submission::Rejected(err),
        }
    }

    /// Completes the in-flight send, clearing the draft. Yields the success
    /// message once per send and nothing when idle.
    pub fn settle(&mut self) -> Option<&'static str> {
        if !self.is_sending() {
            return None;
        }
        self.send = SendState::Idle;
        self.draft = ContactDraft::default();
        Some(SENT_MESSAGE)
    }
}

pub enum FormAction {
    Edit(Field, String),
    Submit,
    Settle,
}

impl Reducible for ContactForm {
    type Action = FormAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            FormAction::Edit(field, value) => next.edit(field, value),
            FormAction::Submit => {
                next.submit();
            }
            FormAction::Settle => {
                next.settle();
            }
        }
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

/// Result of asking the browser for a new tab. `Window::open` yields no
/// window when a popup blocker stepped in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TabOpen {
    Opened,
    Blocked,
    Failed,
}

impl TabOpen {
    pub fn from_result<W, E>(result: &Result<Option<W>, E>) -> Self {
        match result {
            Ok(Some(_)) => TabOpen::Opened,
            Ok(None) => TabOpen::Blocked,
            Err(_) => TabOpen::Failed,
        }
    }

    pub fn notice(&self) -> &'static str {
        match self {
            TabOpen::Opened => "Opening WhatsApp in a new tab",
            TabOpen::Blocked => "Your browser blocked the WhatsApp tab. Allow pop-ups and try again.",
            TabOpen::Failed => "Could not open WhatsApp",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactDraft {
        ContactDraft {
            name: "Ada".to_string(),
            email: "a@b.co".to_string(),
            subject: "Website".to_string(),
            message: "Need a landing page".to_string(),
        }
    }

    #[test]
    fn complete_draft_passes() {
        assert_eq!(filled().validate(), Ok(()));
    }

    #[test]
    fn any_blank_field_blocks_submission() {
        let blanks = ["", "   ", "\t\n"];
        for blank in blanks {
            let mut drafts = vec![filled(), filled(), filled(), filled()];
            drafts[0].name = blank.to_string();
            drafts[1].email = blank.to_string();
            drafts[2].subject = blank.to_string();
            drafts[3].message = blank.to_string();
            for draft in drafts {
                let before = draft.clone();
                assert_eq!(draft.validate(), Err(ContactError::MissingFields));
                assert_eq!(draft, before);
            }
        }
    }

    #[test]
    fn email_pattern_cases() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("first.last@mail.example.org"));
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("@b.co"));
        assert!(!is_valid_email("a@b."));
        assert!(!is_valid_email("a b@c.de"));
        assert!(!is_valid_email("a@@b.co"));
        assert!(!is_valid_email(" a@b.co"));
    }

    #[test]
    fn malformed_email_is_reported_after_presence() {
        let mut draft = filled();
        draft.email = "not-an-email".to_string();
        assert_eq!(draft.validate(), Err(ContactError::InvalidEmail));
        assert_eq!(ContactError::InvalidEmail.to_string(), "Please enter a valid email address");
        assert_eq!(ContactError::MissingFields.to_string(), "Please fill in all fields");
    }

    #[test]
    fn whatsapp_message_fills_defaults() {
        let draft = ContactDraft::default();
        assert_eq!(
            draft.whatsapp_message(),
            "Hello Michael! My name is .\n\nSubject: General Inquiry\n\n"
        );
        assert_eq!(
            filled().whatsapp_message(),
            "Hello Michael! My name is Ada.\n\nSubject: Website\n\nNeed a landing page"
        );
    }

    #[test]
    fn whatsapp_url_is_percent_encoded() {
        let url = whatsapp_link("254700000000", "Hi there!\n\nSubject: A&B");
        assert_eq!(url, "https://wa.me/254700000000?text=Hi%20there%21%0A%0ASubject%3A%20A%26B");
        assert!(filled().whatsapp_url().starts_with("https://wa.me/254700000000?text=Hello%20Michael%21"));
    }

    fn ready_form() -> ContactForm {
        ContactForm { draft: filled(), send: SendState::Idle }
    }

    #[test]
    fn valid_submission_runs_one_send_cycle() {
        let mut form = ready_form();
        assert_eq!(form.submit(), Submission::Started);
        assert!(form.is_sending());
        assert_eq!(form.draft, filled());

        assert_eq!(form.settle(), Some(SENT_MESSAGE));
        assert!(!form.is_sending());
        assert_eq!(form.draft, ContactDraft::default());
        // A late second settle must not notify again.
        assert_eq!(form.settle(), None);
    }

    #[test]
    fn submit_while_sending_is_ignored() {
        let mut form = ready_form();
        form.submit();
        let during = form.clone();
        assert_eq!(form.submit(), Submission::Ignored);
        assert_eq!(form, during);
    }

    #[test]
    fn rejected_submission_keeps_draft_and_stays_idle() {
        let mut form = ready_form();
        form.edit(Field::Email, "not-an-email".to_string());
        let before = form.clone();
        assert_eq!(form.submit(), Submission::Rejected(ContactError::InvalidEmail));
        assert_eq!(form, before);
        assert_eq!(form.settle(), None);
    }

    #[test]
    fn reducer_drives_edit_submit_settle() {
        let form = Rc::new(ContactForm::default());
        let form = form.reduce(FormAction::Edit(Field::Name, "Ada".to_string()));
        let form = form.reduce(FormAction::Edit(Field::Email, "a@b.co".to_string()));
        let form = form.reduce(FormAction::Edit(Field::Subject, "Website".to_string()));
        let form = form.reduce(FormAction::Edit(Field::Message, "Need a landing page".to_string()));
        assert_eq!(form.draft, filled());

        let sending = form.reduce(FormAction::Submit);
        assert_eq!(sending.send, SendState::Sending);
        let again = sending.clone().reduce(FormAction::Submit);
        assert!(Rc::ptr_eq(&sending, &again));

        let done = sending.reduce(FormAction::Settle);
        assert_eq!(*done, ContactForm::default());
    }

    #[test]
    fn blocked_popup_is_not_reported_as_opened() {
        let opened: Result<Option<()>, ()> = Ok(Some(()));
        let blocked: Result<Option<()>, ()> = Ok(None);
        let failed: Result<Option<()>, ()> = Err(());
        assert_eq!(TabOpen::from_result(&opened), TabOpen::Opened);
        assert_eq!(TabOpen::from_result(&blocked), TabOpen::Blocked);
        assert_eq!(TabOpen::from_result(&failed), TabOpen::Failed);
        assert_eq!(TabOpen::Opened.notice(), "Opening WhatsApp in a new tab");
        assert_ne!(TabOpen::Blocked.notice(), TabOpen::Opened.notice());
    }
}
