//! Customer feedback form. Submissions are echoed to the console and not
//! persisted.

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawFeedback {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FeedbackError {
    #[error("Please fill in all fields before submitting.")]
    MissingFields,
}

/// A complete feedback submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl Feedback {
    pub fn from_raw(raw: &RawFeedback) -> Result<Self, FeedbackError> {
        let name = raw.name.trim();
        let email = raw.email.trim();
        let message = raw.message.trim();
        if name.is_empty() || email.is_empty() || message.is_empty() {
            return Err(FeedbackError::MissingFields);
        }
        Ok(Feedback {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        })
    }

    /// Console block printed for a submission
    pub fn render(&self) -> String {
        format!(
            "--- FEEDBACK SUBMITTED ---\nName: {}\nEmail: {}\nFeedback:\n{}\n{}",
            self.name,
            self.email,
            self.message,
            "=".repeat(40)
        )
    }
}
