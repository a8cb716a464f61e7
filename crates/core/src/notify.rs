use async_trait::async_trait;

/// Best-effort notification delivery.
///
/// Implementations must never propagate a failure into the scheduling flow:
/// a send either succeeds or returns `false`, and the caller collects the
/// failed recipients for reporting on an otherwise successful response.
#[async_trait]
pub trait NotificationSender: Send + Sync {
    async fn send(&self, recipient: &str, subject: &str, body: &str) -> bool;
}
