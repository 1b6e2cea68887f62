//! Tab navigation bar.

use crate::state::AppState;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct TabBarProps {
    /// Tab labels, in display order
    pub labels: Vec<String>,
}

/// Buttons that switch `AppState::active_tab`. Panels stay mounted and are
/// shown/hidden by the page, so chart DOM nodes survive tab switches.
#[component]
pub fn TabBar(props: TabBarProps) -> Element {
    let mut state = use_context::<AppState>();
    let active = (state.active_tab)();

    rsx! {
        div {
            style: "display: flex; gap: 2px; border-bottom: 2px solid #b6a89d; margin: 16px 0 12px 0;",
            for (index, label) in props.labels.iter().enumerate() {
                button {
                    key: "{index}",
                    style: if index == active {
                        "padding: 10px 24px; font-weight: bold; background: rgba(60, 90, 60, 0.5); border: none; cursor: pointer;"
                    } else {
                        "padding: 10px 24px; font-weight: bold; background: transparent; color: #b6a89d; border: none; cursor: pointer;"
                    },
                    onclick: move |_| state.active_tab.set(index),
                    "{label}"
                }
            }
        }
    }
}
