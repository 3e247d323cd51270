use std::time::Duration;

use serde::Serialize;

const ERROR_DISMISS: Duration = Duration::from_secs(5);
const SUCCESS_DISMISS: Duration = Duration::from_secs(3);
const FORM_SUCCESS_DISMISS: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeKind {
    Success,
    Error,
}

/// A transient message. The host page removes it after `dismiss_after`
/// or when the visitor clicks its close button.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
    #[serde(rename = "dismiss_after_ms", serialize_with = "as_millis")]
    pub dismiss_after: Duration,
}

impl Notice {
    pub fn error(message: impl Into<String>) -> Self {
        Notice {
            kind: NoticeKind::Error,
            message: message.into(),
            dismiss_after: ERROR_DISMISS,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Notice {
            kind: NoticeKind::Success,
            message: message.into(),
            dismiss_after: SUCCESS_DISMISS,
        }
    }

    /// Confirmation after a contact or newsletter submission.
    pub fn form_success(message: impl Into<String>) -> Self {
        Notice {
            kind: NoticeKind::Success,
            message: message.into(),
            dismiss_after: FORM_SUCCESS_DISMISS,
        }
    }
}

fn as_millis<S: serde::Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_u64(d.as_millis() as u64)
}
