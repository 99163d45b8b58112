use dioxus::prelude::*;

use notification_card::{parse_groups, NotificationBoard, NotificationGroup};

const MAIN_CSS: Asset = asset!("/assets/main.css");

static DEMO_NOTIFICATIONS: &str = include_str!("../assets/demo_notifications.json");

fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let loaded = use_hook(|| match parse_groups(DEMO_NOTIFICATIONS) {
        Ok(groups) => {
            tracing::info!("Loaded {} notification categories", groups.len());
            Ok(groups)
        }
        Err(e) => {
            tracing::error!("Failed to load demo notifications: {}", e);
            Err(e.to_string())
        }
    });

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        match loaded {
            Ok(groups) => rsx! { Notifications { initial: groups } },
            Err(message) => rsx! { p { class: "demo-error", "{message}" } },
        }
    }
}

#[component]
fn Notifications(initial: Vec<NotificationGroup>) -> Element {
    let mut groups = use_signal(move || initial);

    rsx! {
        h1 { "Notifications" }
        NotificationBoard {
            groups: groups(),
            show_dismiss_control: true,
            on_dismiss_all: move |category: String| {
                if let Some(group) = groups.write().iter_mut().find(|g| g.category == category) {
                    group.dismiss_all();
                }
            },
        }
    }
}
