//! Booking notification mail rendering and the outbound delivery boundary.
//!
//! The core logic here is subject selection from a fixed 4-locale table
//! (en/ar/ru/ch, default en) and rendering a locale-aware HTML body in an
//! admin or client variant. Actual delivery is an external collaborator
//! behind the [`Mailer`] trait; the shipped implementation only logs.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MailError {
    #[error("Failed to deliver mail to {to}: {reason}")]
    Delivery { to: String, reason: String },
}

/// Structured booking/inquiry details carried into the templates.
#[derive(Debug, Clone)]
pub struct BookingDetail {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub meeting_date: Option<String>,
    pub message: Option<String>,
    /// Set when this notification announces a status change rather than a
    /// fresh booking; selects the "status updated" subject table.
    pub status: Option<String>,
}

impl BookingDetail {
    pub fn is_status_update(&self) -> bool {
        self.status.is_some()
    }
}

/// Locale-specific subject line. Unknown locales default to English.
pub fn subject_for(locale: &str, status_update: bool) -> &'static str {
    if status_update {
        match locale {
            "ar" => "تم تحديث حالة حجز الاجتماع",
            "ru" => "Статус бронирования встречи обновлен",
            "ch" => "会议预订状态已更新",
            _ => "Meeting Booking Status Updated",
        }
    } else {
        match locale {
            "ar" => "تأكيد الحجز",
            "ru" => "Подтверждение бронирования",
            "ch" => "预订确认",
            _ => "Meeting Booking Confirmation",
        }
    }
}

fn greeting(locale: &str, is_admin: bool, name: &str) -> String {
    if is_admin {
        return format!("New booking request from {name}.");
    }
    match locale {
        "ar" => format!("عزيزي {name}، تم استلام طلب الحجز الخاص بك."),
        "ru" => format!("Уважаемый(ая) {name}, ваш запрос на бронирование получен."),
        "ch" => format!("尊敬的 {name}，我们已收到您的预订请求。"),
        _ => format!("Dear {name}, your booking request has been received."),
    }
}

/// Renders the HTML body for an admin or client notification.
pub fn render_body(detail: &BookingDetail, locale: &str, is_admin: bool) -> String {
    let direction = if locale == "ar" { "rtl" } else { "ltr" };
    let mut rows = vec![
        ("Name", detail.name.clone()),
        ("Email", detail.email.clone()),
    ];
    if let Some(phone) = &detail.phone {
        rows.push(("Phone", phone.clone()));
    }
    if let Some(date) = &detail.meeting_date {
        rows.push(("Meeting date", date.clone()));
    }
    if let Some(message) = &detail.message {
        rows.push(("Message", message.clone()));
    }
    if let Some(status) = &detail.status {
        rows.push(("Status", status.clone()));
    }

    let table: String = rows
        .iter()
        .map(|(label, value)| format!("<tr><th>{label}</th><td>{value}</td></tr>"))
        .collect();

    format!(
        "<!DOCTYPE html><html lang=\"{locale}\"><body style=\"direction:{direction}\">\
<p>{}</p><table>{table}</table></body></html>",
        greeting(locale, is_admin, &detail.name)
    )
}

/// A fully rendered message ready for delivery.
#[derive(Debug, Clone)]
pub struct OutboundEmail {
    pub to: String,
    pub subject: String,
    pub html_body: String,
}

/// Outbound delivery boundary.
pub trait Mailer: Send + Sync {
    fn send(&self, email: OutboundEmail) -> Result<(), MailError>;
}

/// Delivery stand-in that records the handoff in the application log.
pub struct LogMailer;

impl Mailer for LogMailer {
    fn send(&self, email: OutboundEmail) -> Result<(), MailError> {
        tracing::info!(to = %email.to, subject = %email.subject, "outbound booking email");
        Ok(())
    }
}
