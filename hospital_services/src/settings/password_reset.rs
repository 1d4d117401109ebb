// hospital_services/src/settings/password_reset.rs
use std::sync::Arc;
use std::time::Duration;

use log::info;

use logging_service::{NotificationSink, Toast};
use models::errors::HospitalResult;
use schema::{ForgotPasswordData, ForgotPasswordForm, FormSchema};

/// "Forgot password" form. No mail is sent: the request waits a fixed delay
/// and then confirms.
#[derive(Clone)]
pub struct PasswordResetService {
    delay: Duration,
    notifier: Arc<dyn NotificationSink>,
}

impl PasswordResetService {
    pub fn new(delay: Duration, notifier: Arc<dyn NotificationSink>) -> Self {
        Self { delay, notifier }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub async fn request_reset(&self, email: &str) -> HospitalResult<()> {
        ForgotPasswordForm::validate_data(&ForgotPasswordData { email: email.to_string() })?;
        info!("Password reset requested for {}", email);
        tokio::time::sleep(self.delay).await;
        self.notifier
            .notify(Toast::new("Reset Link Sent", "Check your email for password reset instructions"))
            .await;
        Ok(())
    }
}
