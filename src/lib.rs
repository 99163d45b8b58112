//! Collapsible notification category cards for Dioxus frontends.

pub mod components;
pub mod error;
pub mod ids;
pub mod types;

pub use components::notification::{
    badge_visible, notification_title, DismissAction, NotificationBoard, NotificationCard,
    NotificationHeader,
};
pub use error::NotificationError;
pub use ids::CardIds;
pub use types::{parse_groups, Notification, NotificationGroup};
