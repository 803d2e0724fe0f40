use serde::{Deserialize, Serialize};

use crate::models::resume::{clean_bullets, non_blank};

pub const DEFAULT_CLOSING: &str = "Sincerely,";

/// Inputs for a one-page cover letter addressed to a single company.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoverLetterData {
    pub sender_name: String,
    pub sender_email: String,
    pub sender_phone: String,
    pub company: String,
    pub role: String,
    pub hiring_manager: Option<String>,
    pub paragraphs: Vec<String>,
    pub closing: String,
    /// Ask the suggestion service to draft the body paragraphs.
    pub assist: bool,
}

impl Default for CoverLetterData {
    fn default() -> Self {
        Self {
            sender_name: String::new(),
            sender_email: String::new(),
            sender_phone: String::new(),
            company: String::new(),
            role: String::new(),
            hiring_manager: None,
            paragraphs: Vec::new(),
            closing: DEFAULT_CLOSING.to_string(),
            assist: false,
        }
    }
}

impl CoverLetterData {
    pub fn normalized(&self) -> CoverLetterData {
        let closing = self.closing.trim();
        CoverLetterData {
            sender_name: self.sender_name.trim().to_string(),
            sender_email: self.sender_email.trim().to_string(),
            sender_phone: self.sender_phone.trim().to_string(),
            company: self.company.trim().to_string(),
            role: self.role.trim().to_string(),
            hiring_manager: non_blank(self.hiring_manager.as_deref()),
            paragraphs: clean_bullets(&self.paragraphs),
            closing: if closing.is_empty() {
                DEFAULT_CLOSING.to_string()
            } else {
                closing.to_string()
            },
            assist: self.assist,
        }
    }

    /// Name used after "Dear"; falls back to a generic greeting target.
    pub fn salutation_name(&self) -> &str {
        self.hiring_manager.as_deref().unwrap_or("Hiring Manager")
    }
}
