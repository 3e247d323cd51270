use std::sync::{Mutex, OnceLock};

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::errors::BlogError;
use crate::notice::Notice;

const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

pub const MSG_REQUIRED: &str = "Please fill in all required fields.";
pub const MSG_BAD_EMAIL: &str = "Please enter a valid email address.";

fn email_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(EMAIL_PATTERN).expect("email pattern compiles"))
}

pub fn is_valid_email(email: &str) -> bool {
    email_regex().is_match(email)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    pub phone: Option<String>,
    pub course: Option<String>,
    #[serde(default)]
    pub message: String,
}

impl ContactForm {
    pub fn validate(&self) -> Result<(), BlogError> {
        let missing = [&self.name, &self.email, &self.message]
            .iter()
            .any(|v| v.trim().is_empty());
        if missing {
            return Err(BlogError::ValidationFailure(MSG_REQUIRED.to_string()));
        }
        if !is_valid_email(&self.email) {
            return Err(BlogError::ValidationFailure(MSG_BAD_EMAIL.to_string()));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsletterForm {
    #[serde(default)]
    pub email: String,
}

impl NewsletterForm {
    pub fn validate(&self) -> Result<(), BlogError> {
        if !is_valid_email(&self.email) {
            return Err(BlogError::ValidationFailure(MSG_BAD_EMAIL.to_string()));
        }
        Ok(())
    }
}

/// Accepted submissions for the lifetime of the process. Invalid input never
/// reaches it.
#[derive(Debug, Default)]
pub struct Inbox {
    contacts: Mutex<Vec<ContactForm>>,
    subscribers: Mutex<Vec<String>>,
}

impl Inbox {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn submit_contact(&self, form: ContactForm) -> Result<Notice, BlogError> {
        form.validate()?;
        log::info!("[forms] contact form submitted by {}", form.email);
        self.contacts
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(form);
        Ok(Notice::form_success(
            "Thank you! Your message has been sent. We'll get back to you soon.",
        ))
    }

    /// Subscribing the same address twice is accepted but stored once.
    pub fn subscribe(&self, form: NewsletterForm) -> Result<Notice, BlogError> {
        form.validate()?;
        let email = form.email.trim().to_lowercase();
        let mut subscribers = self.subscribers.lock().unwrap_or_else(|e| e.into_inner());
        if !subscribers.contains(&email) {
            log::info!("[forms] newsletter subscription: {}", email);
            subscribers.push(email);
        }
        Ok(Notice::form_success("Thanks for subscribing to our newsletter!"))
    }

    pub fn contacts(&self) -> Vec<ContactForm> {
        self.contacts.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    pub fn subscribers(&self) -> Vec<String> {
        self.subscribers.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}
