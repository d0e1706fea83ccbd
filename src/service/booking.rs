//! Booking notification fan-out.

use crate::error::{validation::ValidationError, AppError};
use crate::mailer::{render_body, subject_for, BookingDetail, Mailer, OutboundEmail};

pub struct BookingService<'a> {
    mailer: &'a dyn Mailer,
    admin_email: &'a str,
}

impl<'a> BookingService<'a> {
    pub fn new(mailer: &'a dyn Mailer, admin_email: &'a str) -> Self {
        Self { mailer, admin_email }
    }

    /// Validates the request, then sends the admin notification followed by
    /// the client confirmation. Subjects and bodies are localized; unknown
    /// locales fall back to English.
    pub fn notify(&self, locale: &str, detail: BookingDetail) -> Result<(), AppError> {
        let mut validation = ValidationError::new();
        if detail.name.trim().is_empty() {
            validation.push("name", "The name field is required.");
        }
        if detail.email.trim().is_empty() {
            validation.push("email", "The email field is required.");
        } else if !detail.email.contains('@') {
            validation.push("email", "The email must be a valid email address.");
        }
        validation.into_result()?;

        let subject = subject_for(locale, detail.is_status_update());

        self.mailer.send(OutboundEmail {
            to: self.admin_email.to_string(),
            subject: subject.to_string(),
            html_body: render_body(&detail, locale, true),
        })?;
        self.mailer.send(OutboundEmail {
            to: detail.email.clone(),
            subject: subject.to_string(),
            html_body: render_body(&detail, locale, false),
        })?;

        Ok(())
    }
}
