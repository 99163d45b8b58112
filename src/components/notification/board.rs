use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

use dioxus::prelude::*;

use super::card::NotificationCard;
use crate::types::NotificationGroup;

/// Categories that appear more than once, in first-repeat order.
pub fn duplicate_categories(groups: &[NotificationGroup]) -> Vec<&str> {
    let mut seen = HashSet::new();
    let mut duplicates = Vec::new();
    for group in groups {
        let category = group.category.as_str();
        if !seen.insert(category) && !duplicates.contains(&category) {
            duplicates.push(category);
        }
    }
    duplicates
}

/// Warn about duplicate categories when the set differs from the last one
/// reported. Returns whether anything was logged.
pub fn report_duplicates(reported: &RefCell<Vec<String>>, groups: &[NotificationGroup]) -> bool {
    let duplicates: Vec<String> = duplicate_categories(groups)
        .into_iter()
        .map(String::from)
        .collect();
    if *reported.borrow() == duplicates {
        return false;
    }
    for category in &duplicates {
        tracing::warn!(%category, "duplicate notification category, card ids will collide");
    }
    let logged = !duplicates.is_empty();
    *reported.borrow_mut() = duplicates;
    logged
}

/// One card per group, in input order.
#[component]
pub fn NotificationBoard(
    groups: Vec<NotificationGroup>,
    show_dismiss_control: bool,
    on_dismiss_all: EventHandler<String>,
) -> Element {
    let reported = use_hook(|| Rc::new(RefCell::new(Vec::new())));
    report_duplicates(&reported, &groups);

    rsx! {
        div {
            class: "notification-board",
            for (index, group) in groups.iter().enumerate() {
                NotificationCard {
                    key: "{index}-{group.category}",
                    category: group.category.clone(),
                    unread_count: group.unread_count(),
                    show_dismiss_control: show_dismiss_control,
                    on_dismiss_all: on_dismiss_all,

                    if group.notifications.is_empty() {
                        p { class: "text-muted", "No notifications" }
                    } else {
                        table {
                            class: "table table-sm",
                            tbody {
                                for notification in group.notifications.iter() {
                                    tr {
                                        key: "{notification.id}",
                                        class: if notification.dismissed { "notification-dismissed" } else { "notification-unread" },
                                        td { "{notification.message}" }
                                        td { class: "text-right", "{notification.time}" }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
