//! Contact form validation. Submissions are acknowledged locally and never sent anywhere.

use serde::Deserialize;

use crate::logging::log_contact;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    Accepted,
    Rejected { missing: Vec<&'static str> },
}

impl Submission {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Submission::Accepted)
    }

    /// Text shown to the visitor.
    pub fn notice(&self) -> String {
        match self {
            Submission::Accepted => {
                "Thanks for reaching out! Your message has been noted.".to_string()
            }
            Submission::Rejected { missing } => {
                format!("Please fill in the required fields: {}.", missing.join(", "))
            }
        }
    }
}

impl ContactForm {
    /// `name`, `email` and `message` must be non-empty; `subject` is optional.
    pub fn validate(&self) -> Submission {
        let missing: Vec<&'static str> = [
            ("name", &self.name),
            ("email", &self.email),
            ("message", &self.message),
        ]
        .into_iter()
        .filter(|(_, v)| v.is_empty())
        .map(|(field, _)| field)
        .collect();

        if missing.is_empty() {
            Submission::Accepted
        } else {
            Submission::Rejected { missing }
        }
    }

    /// Validate and log. Returns the outcome with the form to show next:
    /// empty after success, as entered after a rejection.
    pub fn submit(self) -> (Submission, ContactForm) {
        let outcome = self.validate();
        let missing = match &outcome {
            Submission::Accepted => Vec::new(),
            Submission::Rejected { missing } => missing.clone(),
        };
        log_contact(outcome.is_accepted(), &missing, !self.subject.trim().is_empty());
        let next = if outcome.is_accepted() { ContactForm::default() } else { self };
        (outcome, next)
    }
}
