use dioxus::prelude::*;

use crate::ids::CardIds;

/// Display title for a category: first character uppercased, the rest kept
/// as is. An empty category yields `" Notifications"`.
pub fn notification_title(category: &str) -> String {
    let mut chars = category.chars();
    let mut title = String::with_capacity(category.len() + 14);
    if let Some(first) = chars.next() {
        title.extend(first.to_uppercase());
        title.push_str(chars.as_str());
    }
    title.push_str(" Notifications");
    title
}

pub fn badge_visible(show_badge: bool, unread_count: u32) -> bool {
    show_badge && unread_count > 0
}

/// Clickable card header; toggles the matching `accordion-body-*` region.
#[component]
pub fn NotificationHeader(category: String, unread_count: u32, show_badge: bool) -> Element {
    let ids = CardIds::new(category.as_str());
    let title = notification_title(&category);

    rsx! {
        div {
            id: ids.header(),
            class: "card-header btn btn-link position-relative",
            "data-toggle": "collapse",
            "data-target": ids.toggle_target(),
            "aria-expanded": "false",
            "aria-controls": ids.body(),

            h2 { class: "card-title", "{title}" }

            if badge_visible(show_badge, unread_count) {
                h5 { class: "badge badge-primary card-badge", "{unread_count}" }
            }
        }
    }
}
