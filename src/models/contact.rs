//! Call / resolve buttons. They record nothing; the handler turns the
//! request into a one-shot flash message.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactKind {
    Call,
    Resolve,
    Complete,
    PostJob,
    Hired,
}

impl ContactKind {
    pub fn key(self) -> &'static str {
        match self {
            ContactKind::Call => "call",
            ContactKind::Resolve => "resolve",
            ContactKind::Complete => "complete",
            ContactKind::PostJob => "post_job",
            ContactKind::Hired => "hired",
        }
    }

    pub fn parse(key: &str) -> Option<Self> {
        match key {
            "call" => Some(ContactKind::Call),
            "resolve" => Some(ContactKind::Resolve),
            "complete" => Some(ContactKind::Complete),
            "post_job" => Some(ContactKind::PostJob),
            "hired" => Some(ContactKind::Hired),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactRequest {
    pub kind: ContactKind,
    /// Person being called, or empty for non-call actions.
    pub name: String,
    pub phone: String,
    /// What is being resolved / completed / staffed.
    pub subject: String,
}

impl ContactRequest {
    pub fn call(name: &str, phone: &str) -> Self {
        ContactRequest {
            kind: ContactKind::Call,
            name: name.to_string(),
            phone: phone.to_string(),
            subject: String::new(),
        }
    }

    pub fn about(kind: ContactKind, subject: impl Into<String>) -> Self {
        ContactRequest { kind, name: String::new(), phone: String::new(), subject: subject.into() }
    }

    pub fn flash_message(&self) -> String {
        match self.kind {
            ContactKind::Call if self.phone.is_empty() => format!("No phone number on record for {}", self.name),
            ContactKind::Call => format!("Calling {} on {}", self.name, self.phone),
            ContactKind::Resolve => format!("Resolution recorded: {}", self.subject),
            ContactKind::Complete => format!("Task marked complete: {}", self.subject),
            ContactKind::PostJob => format!("Job posting published: {}", self.subject),
            ContactKind::Hired => format!("New hire recorded: {}", self.subject),
        }
    }
}

/// A labelled button that submits a `ContactRequest`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionButton {
    pub label: String,
    pub request: ContactRequest,
}

impl ActionButton {
    pub fn new(label: impl Into<String>, request: ContactRequest) -> Self {
        ActionButton { label: label.into(), request }
    }
}
