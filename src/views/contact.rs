use std::time::Duration;
use thiserror::Error;
use tokio::time::{sleep, Instant};
use tracing::info;

/// Simulated round trip of a submission
pub const SUBMIT_DELAY: Duration = Duration::from_secs(1);
/// How long the thank-you message stays up
pub const ACKNOWLEDGMENT_WINDOW: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContactError {
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("Please enter a valid email address")]
    InvalidEmail,

    #[error("A message is already being sent")]
    AlreadySubmitting,
}

/// "Get in touch" form. Nothing is sent anywhere; submission only drives the
/// acknowledgment state.
#[derive(Debug, Clone)]
pub struct ContactForm {
    pub draft: ContactMessage,
    submitting: bool,
    acknowledged_until: Option<Instant>,
    submit_delay: Duration,
    acknowledgment_window: Duration,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::with_timing(SUBMIT_DELAY, ACKNOWLEDGMENT_WINDOW)
    }
}

impl ContactForm {
    pub fn with_timing(submit_delay: Duration, acknowledgment_window: Duration) -> Self {
        Self {
            draft: ContactMessage::default(),
            submitting: false,
            acknowledged_until: None,
            submit_delay,
            acknowledgment_window,
        }
    }

    pub fn validate(&self) -> Result<(), ContactError> {
        let ContactMessage {
            name,
            email,
            message,
        } = &self.draft;

        if name.trim().is_empty() {
            return Err(ContactError::MissingField("Name"));
        }
        if email.trim().is_empty() {
            return Err(ContactError::MissingField("Email"));
        }
        match email.trim().split_once('@') {
            Some((user, domain)) if !user.is_empty() && !domain.is_empty() => {}
            _ => return Err(ContactError::InvalidEmail),
        }
        if message.trim().is_empty() {
            return Err(ContactError::MissingField("Message"));
        }
        Ok(())
    }

    /// Submit the draft: wait out the submit delay, clear the form and show
    /// the acknowledgment until the window runs out.
    pub async fn submit(&mut self) -> Result<(), ContactError> {
        if self.submitting {
            return Err(ContactError::AlreadySubmitting);
        }
        self.validate()?;

        self.submitting = true;
        sleep(self.submit_delay).await;

        info!("Contact message received from {}", self.draft.email);
        self.draft = ContactMessage::default();
        self.submitting = false;
        self.acknowledged_until = Some(Instant::now() + self.acknowledgment_window);
        Ok(())
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn is_acknowledged(&self) -> bool {
        self.acknowledged_until
            .is_some_and(|deadline| Instant::now() < deadline)
    }
}
