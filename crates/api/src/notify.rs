use async_trait::async_trait;
use examsync_core::notify::NotificationSender;

/// Logs each notification instead of delivering it. The upstream system
/// only simulated delivery; a real transport slots in behind the same
/// trait without touching the handlers.
pub struct LogNotifier;

#[async_trait]
impl NotificationSender for LogNotifier {
    async fn send(&self, recipient: &str, subject: &str, body: &str) -> bool {
        tracing::info!(%recipient, %subject, %body, "notification sent");
        true
    }
}
