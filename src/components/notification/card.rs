use dioxus::prelude::*;

use super::header::NotificationHeader;
use crate::ids::CardIds;

/// Forwards a "dismiss all" request for one category to the owner's handler.
#[derive(Clone, PartialEq)]
pub struct DismissAction {
    category: String,
    handler: EventHandler<String>,
}

impl DismissAction {
    pub fn new(category: impl Into<String>, handler: EventHandler<String>) -> Self {
        Self {
            category: category.into(),
            handler,
        }
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    /// Call the handler once with the category label. Not debounced.
    pub fn fire(&self) {
        tracing::debug!(category = %self.category, "dismiss all requested");
        self.handler.call(self.category.clone());
    }
}

/// Collapsible card for one notification category.
///
/// The header and body ids come from the same [`CardIds`], so the header's
/// collapse toggle always targets this card's body. `children` is rendered
/// untouched inside `form-container-<category>`.
#[component]
pub fn NotificationCard(
    category: String,
    unread_count: u32,
    show_dismiss_control: bool,
    on_dismiss_all: EventHandler<String>,
    children: Element,
) -> Element {
    let ids = CardIds::new(category.as_str());
    let dismiss = DismissAction::new(category.as_str(), on_dismiss_all);

    rsx! {
        div {
            class: "row mt-4 accordion",
            div {
                class: "card col px-0",

                NotificationHeader {
                    category: category.clone(),
                    unread_count: unread_count,
                    show_badge: show_dismiss_control,
                }

                div {
                    id: ids.body(),
                    class: "collapse p-3",

                    if show_dismiss_control {
                        div {
                            class: "d-flex justify-content-end",
                            a {
                                class: "btn btn-link btn-outline float-right",
                                onclick: move |_| dismiss.fire(),
                                "Dismiss all"
                            }
                        }
                    }

                    div {
                        class: "card-body",
                        div {
                            id: ids.form_container(),
                            class: "card-text table-responsive",
                            {children}
                        }
                    }
                }
            }
        }
    }
}
