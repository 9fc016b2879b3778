//! Notifier port trait.

/// Capability to deliver a message over some side-effecting channel.
///
/// Delivery is fire-and-forget: there is no error path.
#[async_trait::async_trait]
pub trait Notifier: Send + Sync + 'static {
    async fn send(&self, message: &str);
}
