//! Rendering: notification payloads to message envelopes.
//!
//! Pure functions of the payload plus the configured sender identity.
//! Subjects and body copy follow the product templates exactly; field
//! values are HTML-escaped before interpolation into the body markup.

use chrono::{DateTime, NaiveDate};

use crate::message::{MessageBody, MessageEnvelope};
use crate::notify::{JobAssigned, JobUpdate, Notification, PaymentCompleted};

/// Render a classified notification into a ready-to-send envelope.
pub fn render(notification: &Notification, from: &str) -> MessageEnvelope {
    let (subject, body) = match notification {
        Notification::JobAssigned(p) => (
            format!("New Job Assigned: {}", p.job_title),
            job_assigned_body(p),
        ),
        Notification::JobStarted(p) => (
            format!("Job Started: {}", p.job_title),
            job_started_body(p),
        ),
        Notification::JobCompleted(p) => (
            format!("Job Completed: {}", p.job_title),
            job_completed_body(p),
        ),
        Notification::PaymentCompleted(p) => (
            "Payment Received - Rentr Workflow".to_string(),
            payment_completed_body(p),
        ),
    };

    MessageEnvelope {
        from: from.to_string(),
        to: notification.recipient().to_string(),
        subject,
        body: MessageBody::Html(body),
    }
}

// ── Templates ───────────────────────────────────────────────────────

fn job_assigned_body(p: &JobAssigned) -> String {
    format!(
        "<h2>Job Assignment Notification</h2>\n\
         <p>Hello {contractor},</p>\n\
         <p>You have been assigned to a new job:</p>\n\
         <ul>\n\
         <li><strong>Job Title:</strong> {title}</li>\n\
         <li><strong>Description:</strong> {description}</li>\n\
         <li><strong>Timeline:</strong> {timeline}</li>\n\
         </ul>\n\
         <p>Please log in to view more details and start the job.</p>\n\
         <p>Best regards,<br>Rentr Workflow Team</p>",
        contractor = escape_html(&p.contractor_name),
        title = escape_html(&p.job_title),
        description = escape_html(&p.job_description),
        timeline = escape_html(&format_timeline(&p.timeline)),
    )
}

fn job_started_body(p: &JobUpdate) -> String {
    format!(
        "<h2>Job Started Notification</h2>\n\
         <p>Hello {agent},</p>\n\
         <p>The contractor started working on the job:</p>\n\
         <ul>\n\
         <li><strong>Job Title:</strong> {title}</li>\n\
         <li><strong>Contractor:</strong> {contractor}</li>\n\
         </ul>\n\
         <p>The work is now in progress. Please monitor the job status in your account.</p>\n\
         <p>Best regards,<br>Rentr Workflow Team</p>",
        agent = escape_html(&p.agent_name),
        title = escape_html(&p.job_title),
        contractor = escape_html(&p.contractor_name),
    )
}

fn job_completed_body(p: &JobUpdate) -> String {
    format!(
        "<h2>Job Completed Notification</h2>\n\
         <p>Hello {agent},</p>\n\
         <p>The contractor completed the job:</p>\n\
         <ul>\n\
         <li><strong>Job Title:</strong> {title}</li>\n\
         <li><strong>Contractor:</strong> {contractor}</li>\n\
         </ul>\n\
         <p>Please review the work and process payment if everything is satisfactory.</p>\n\
         <p>Best regards,<br>Rentr Workflow Team</p>",
        agent = escape_html(&p.agent_name),
        title = escape_html(&p.job_title),
        contractor = escape_html(&p.contractor_name),
    )
}

fn payment_completed_body(p: &PaymentCompleted) -> String {
    format!(
        "<h2>Payment Completed</h2>\n\
         <p>Hello {contractor},</p>\n\
         <p>Payment has been processed successfully:</p>\n\
         <ul>\n\
         <li><strong>Amount:</strong> ${amount}</li>\n\
         <li><strong>Payment ID:</strong> {payment_id}</li>\n\
         <li><strong>Job Title:</strong> {title}</li>\n\
         </ul>\n\
         <p>Thank you for your excellent work. Please allow 1-2 business days for funds to appear in your account.</p>\n\
         <p>Best regards,<br>Rentr Workflow Team</p>",
        contractor = escape_html(&p.contractor_name),
        amount = escape_html(&p.amount),
        payment_id = escape_html(&p.payment_id),
        title = escape_html(&p.job_title),
    )
}

// ── Helpers (public for testing) ────────────────────────────────────

/// Escape a field value for interpolation into HTML body markup.
pub fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Format a date-like timeline value as `M/D/YYYY`.
///
/// Accepts RFC 3339 timestamps, `YYYY-MM-DD` dates, and epoch
/// milliseconds. Anything unparseable renders the literal
/// `Invalid Date`, matching the upstream contract.
pub fn format_timeline(raw: &str) -> String {
    let date = DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.date_naive())
        .ok()
        .or_else(|| NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok())
        .or_else(|| {
            raw.parse::<i64>()
                .ok()
                .and_then(DateTime::from_timestamp_millis)
                .map(|dt| dt.date_naive())
        });

    match date {
        Some(date) => date.format("%-m/%-d/%Y").to_string(),
        None => "Invalid Date".to_string(),
    }
}
