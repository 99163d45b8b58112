#[derive(Debug, thiserror::Error)]
pub enum NotificationError {
    #[error("Invalid notification data: {0}")]
    Parse(#[from] serde_json::Error),
}
