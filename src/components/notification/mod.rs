pub mod board;
pub mod card;
pub mod header;

pub use board::NotificationBoard;
pub use card::{DismissAction, NotificationCard};
pub use header::{badge_visible, notification_title, NotificationHeader};
