use serde::{Deserialize, Serialize};

use crate::error::NotificationError;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: u64,
    pub message: String,
    pub time: String,
    #[serde(default)]
    pub dismissed: bool,
}

/// All notifications sharing one category, as shown by a single card.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NotificationGroup {
    pub category: String,
    #[serde(default)]
    pub notifications: Vec<Notification>,
}

impl NotificationGroup {
    pub fn new(category: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            notifications: Vec::new(),
        }
    }

    pub fn unread_count(&self) -> u32 {
        let unread = self.notifications.iter().filter(|n| !n.dismissed).count();
        u32::try_from(unread).unwrap_or(u32::MAX)
    }

    pub fn dismiss_all(&mut self) {
        for notification in &mut self.notifications {
            notification.dismissed = true;
        }
    }
}

/// Parse a JSON array of notification groups.
pub fn parse_groups(json: &str) -> Result<Vec<NotificationGroup>, NotificationError> {
    Ok(serde_json::from_str(json)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn notification(id: u64, dismissed: bool) -> Notification {
        Notification {
            id,
            message: format!("message {id}"),
            time: "2024-01-01 10:00".to_string(),
            dismissed,
        }
    }

    #[test]
    fn test_unread_count_skips_dismissed() {
        let mut group = NotificationGroup::new("alerts");
        group.notifications = vec![notification(1, false), notification(2, true), notification(3, false)];
        assert_eq!(group.unread_count(), 2);
    }

    #[test]
    fn test_dismiss_all() {
        let mut group = NotificationGroup::new("alerts");
        group.notifications = vec![notification(1, false), notification(2, false)];
        group.dismiss_all();
        assert_eq!(group.unread_count(), 0);
        assert!(group.notifications.iter().all(|n| n.dismissed));
    }

    #[test]
    fn test_parse_groups_defaults() {
        let groups = parse_groups(
            r#"[
                {"category": "dataset", "notifications": [{"id": 7, "message": "New dataset", "time": "today"}]},
                {"category": "contract"}
            ]"#,
        )
        .unwrap();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].unread_count(), 1);
        assert!(!groups[0].notifications[0].dismissed);
        assert!(groups[1].notifications.is_empty());
    }

    #[test]
    fn test_parse_groups_rejects_malformed() {
        let err = parse_groups(r#"{"category": "dataset"}"#).unwrap_err();
        assert!(matches!(err, NotificationError::Parse(_)));
        assert!(err.to_string().starts_with("Invalid notification data"));
    }
}
