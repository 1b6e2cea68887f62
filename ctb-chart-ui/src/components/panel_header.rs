//! Panel header with title and an optional help line.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct PanelHeaderProps {
    /// Panel title
    pub title: String,
    /// Short explanation of what the panel shows
    #[props(default = String::new())]
    pub help: String,
}

/// Header for chart/map panels.
#[component]
pub fn PanelHeader(props: PanelHeaderProps) -> Element {
    rsx! {
        div {
            style: "margin-bottom: 8px;",
            h3 {
                style: "margin: 0 0 4px 0; font-size: 16px; color: #238b45;",
                "{props.title}"
            }
            if !props.help.is_empty() {
                p {
                    style: "margin: 0; font-size: 12px; color: #888;",
                    "{props.help}"
                }
            }
        }
    }
}
