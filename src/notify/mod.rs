//! Notification classification: a closed set of kinds parsed from
//! `{ "type": ..., ...payload }` dispatch requests.

pub mod render;

use serde::{Deserialize, Deserializer};
use serde_json::Value;

// ── Payloads ────────────────────────────────────────────────────────

/// Payload for `job_assigned`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct JobAssigned {
    #[serde(default, deserialize_with = "scalar_text")]
    pub to: String,
    #[serde(default, deserialize_with = "scalar_text")]
    pub job_title: String,
    #[serde(default, deserialize_with = "scalar_text")]
    pub job_description: String,
    #[serde(default, deserialize_with = "scalar_text")]
    pub contractor_name: String,
    /// Date-like value: RFC 3339, `YYYY-MM-DD`, or epoch milliseconds.
    #[serde(default, deserialize_with = "scalar_text")]
    pub timeline: String,
}

/// Payload for `job_started` and `job_completed`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct JobUpdate {
    #[serde(default, deserialize_with = "scalar_text")]
    pub to: String,
    #[serde(default, deserialize_with = "scalar_text")]
    pub job_title: String,
    #[serde(default, deserialize_with = "scalar_text")]
    pub agent_name: String,
    #[serde(default, deserialize_with = "scalar_text")]
    pub contractor_name: String,
}

/// Payload for `payment_completed`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PaymentCompleted {
    #[serde(default, deserialize_with = "scalar_text")]
    pub to: String,
    #[serde(default, deserialize_with = "scalar_text")]
    pub contractor_name: String,
    /// Raw amount, rendered as `$` + value with no currency formatting.
    #[serde(default, deserialize_with = "scalar_text")]
    pub amount: String,
    #[serde(default, deserialize_with = "scalar_text")]
    pub payment_id: String,
    #[serde(default, deserialize_with = "scalar_text")]
    pub job_title: String,
}

// ── Classification ──────────────────────────────────────────────────

/// A recognized notification kind with its payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    JobAssigned(JobAssigned),
    JobStarted(JobUpdate),
    JobCompleted(JobUpdate),
    PaymentCompleted(PaymentCompleted),
}

impl Notification {
    /// Classify a dispatch request by its `type` tag.
    ///
    /// Returns `None` when the tag is missing, not a string, or outside
    /// the recognized set. Payload fields are lenient: a missing field
    /// renders as empty text rather than rejecting the request.
    pub fn classify(request: &Value) -> Option<Notification> {
        let kind = request.get("type")?.as_str()?;
        let payload = request.clone();
        match kind {
            "job_assigned" => serde_json::from_value(payload).ok().map(Self::JobAssigned),
            "job_started" => serde_json::from_value(payload).ok().map(Self::JobStarted),
            "job_completed" => serde_json::from_value(payload).ok().map(Self::JobCompleted),
            "payment_completed" => serde_json::from_value(payload)
                .ok()
                .map(Self::PaymentCompleted),
            _ => None,
        }
    }

    /// Recipient address for this notification.
    pub fn recipient(&self) -> &str {
        match self {
            Notification::JobAssigned(p) => &p.to,
            Notification::JobStarted(p) | Notification::JobCompleted(p) => &p.to,
            Notification::PaymentCompleted(p) => &p.to,
        }
    }
}

/// Deserialize any JSON scalar into its interpolation text.
///
/// Strings pass through, numbers and booleans use their literal form,
/// `null` and missing fields become empty text. Non-scalar values fall
/// back to their JSON encoding.
fn scalar_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn classify_job_assigned() {
        let request = json!({
            "type": "job_assigned",
            "to": "a@x.com",
            "jobTitle": "Fix sink",
            "jobDescription": "Leaky pipe",
            "contractorName": "Bob",
            "timeline": "2024-01-15",
        });
        let Some(Notification::JobAssigned(p)) = Notification::classify(&request) else {
            panic!("expected job_assigned");
        };
        assert_eq!(p.to, "a@x.com");
        assert_eq!(p.job_title, "Fix sink");
        assert_eq!(p.job_description, "Leaky pipe");
        assert_eq!(p.contractor_name, "Bob");
        assert_eq!(p.timeline, "2024-01-15");
    }

    #[test]
    fn classify_job_started_and_completed_share_payload() {
        let request = json!({
            "type": "job_started",
            "to": "agent@x.com",
            "jobTitle": "Fix sink",
            "agentName": "Alice",
            "contractorName": "Bob",
        });
        assert!(matches!(
            Notification::classify(&request),
            Some(Notification::JobStarted(_))
        ));

        let request = json!({"type": "job_completed", "to": "agent@x.com"});
        assert!(matches!(
            Notification::classify(&request),
            Some(Notification::JobCompleted(_))
        ));
    }

    #[test]
    fn classify_unknown_kind_is_none() {
        assert!(Notification::classify(&json!({"type": "unknown_kind"})).is_none());
    }

    #[test]
    fn classify_missing_type_is_none() {
        assert!(Notification::classify(&json!({"to": "a@x.com"})).is_none());
    }

    #[test]
    fn classify_non_string_type_is_none() {
        assert!(Notification::classify(&json!({"type": 42})).is_none());
    }

    #[test]
    fn missing_fields_default_to_empty() {
        let request = json!({"type": "payment_completed", "to": "bob@x.com"});
        let Some(Notification::PaymentCompleted(p)) = Notification::classify(&request) else {
            panic!("expected payment_completed");
        };
        assert_eq!(p.amount, "");
        assert_eq!(p.payment_id, "");
        assert_eq!(p.job_title, "");
    }

    #[test]
    fn numeric_amount_keeps_literal_form() {
        let request = json!({"type": "payment_completed", "to": "bob@x.com", "amount": 150});
        let Some(Notification::PaymentCompleted(p)) = Notification::classify(&request) else {
            panic!("expected payment_completed");
        };
        assert_eq!(p.amount, "150");
    }

    #[test]
    fn fractional_amount_keeps_literal_form() {
        let request = json!({"type": "payment_completed", "to": "bob@x.com", "amount": 150.5});
        let Some(Notification::PaymentCompleted(p)) = Notification::classify(&request) else {
            panic!("expected payment_completed");
        };
        assert_eq!(p.amount, "150.5");
    }

    #[test]
    fn recipient_comes_from_payload() {
        let request = json!({"type": "job_assigned", "to": "a@x.com"});
        let notification = Notification::classify(&request).unwrap();
        assert_eq!(notification.recipient(), "a@x.com");
    }
}
