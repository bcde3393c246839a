//! Customer feedback aggregate.

use std::fmt;

use chrono::{DateTime, Utc};

use super::identifier::{CustomerId, FeedbackId};

/// Maximum length of a feedback message.
pub const FEEDBACK_MESSAGE_MAX: usize = 1000;

/// Validation errors returned by [`Feedback::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedbackValidationError {
    /// The message was empty or exceeded [`FEEDBACK_MESSAGE_MAX`] characters.
    InvalidMessageLength,
}

impl fmt::Display for FeedbackValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidMessageLength => {
                write!(
                    f,
                    "feedback message must be 1 to {FEEDBACK_MESSAGE_MAX} characters"
                )
            }
        }
    }
}

impl std::error::Error for FeedbackValidationError {}

/// A feedback entry posted by a customer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    id: FeedbackId,
    customer_id: CustomerId,
    message: String,
    posted_at: DateTime<Utc>,
}

impl Feedback {
    /// Validate and construct a feedback entry.
    pub fn new(
        id: FeedbackId,
        customer_id: CustomerId,
        message: impl Into<String>,
        posted_at: DateTime<Utc>,
    ) -> Result<Self, FeedbackValidationError> {
        let message = message.into();
        let length = message.chars().count();
        if length == 0 || length > FEEDBACK_MESSAGE_MAX || message.trim().is_empty() {
            return Err(FeedbackValidationError::InvalidMessageLength);
        }
        Ok(Self {
            id,
            customer_id,
            message,
            posted_at,
        })
    }

    /// Feedback identifier.
    pub fn id(&self) -> &FeedbackId {
        &self.id
    }

    /// Posting customer.
    pub fn customer_id(&self) -> &CustomerId {
        &self.customer_id
    }

    /// Message body.
    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    /// When the feedback was posted.
    pub fn posted_at(&self) -> DateTime<Utc> {
        self.posted_at
    }
}
