// src/services/contact.rs

//! Contact form submission to the mail relay.

use serde::Serialize;

use crate::error::{AppError, Result};
use crate::models::ContactConfig;

/// A contact message in the shape the mail relay accepts.
#[derive(Debug, Clone, Serialize)]
pub struct Submission {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl Submission {
    /// Reject submissions with any blank field before hitting the relay.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("name", &self.name),
            ("email", &self.email),
            ("subject", &self.subject),
            ("message", &self.message),
        ];
        for (label, value) in fields {
            if value.trim().is_empty() {
                return Err(AppError::validation(format!(
                    "contact field '{label}' must not be empty"
                )));
            }
        }
        Ok(())
    }
}

/// Sends contact submissions to the configured mail relay endpoint.
pub struct ContactRelay {
    client: reqwest::Client,
    config: ContactConfig,
}

impl ContactRelay {
    /// Create a new relay client.
    pub fn new(client: reqwest::Client, config: ContactConfig) -> Self {
        Self { client, config }
    }

    /// Submit a contact message.
    ///
    /// A non-2xx relay response maps to [`AppError::Submission`]. The
    /// submission itself is borrowed, so callers keep the message contents
    /// for a retry.
    pub async fn send(&self, submission: &Submission) -> Result<()> {
        submission.validate()?;

        log::info!("Submitting contact message to {}", self.config.endpoint);
        let response = self
            .client
            .post(&self.config.endpoint)
            .json(submission)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::submission(
                status.as_u16(),
                "mail relay rejected the message",
            ));
        }

        log::info!("Contact message accepted by relay");
        Ok(())
    }

    /// Direct-contact instructions shown when the relay path fails.
    pub fn fallback_instructions(&self) -> String {
        format!(
            "Message transmission failed. Please try again or contact directly: {}",
            self.config.fallback_email
        )
    }
}
