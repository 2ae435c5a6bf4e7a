//! Mailer that writes messages to the log
//!
//! Stands in for a real email provider; no message leaves the process.

use async_trait::async_trait;

use crate::domain::ports::Mailer;
use crate::error::NotificationError;

pub struct LogMailer;

#[async_trait]
impl Mailer for LogMailer {
    async fn send(&self, to: &str, subject: &str, body: &str) -> Result<(), NotificationError> {
        tracing::info!(to, subject, body, "Sending email");
        Ok(())
    }
}
