//! Informational notice component.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct InfoNoticeProps {
    pub message: String,
}

/// A "no data" style notice, visually distinct from an error.
#[component]
pub fn InfoNotice(props: InfoNoticeProps) -> Element {
    rsx! {
        div {
            style: "padding: 10px 14px; margin: 8px 0; background: #E3F2FD; color: #1565C0; border-radius: 4px; border: 1px solid #90CAF9; font-size: 13px;",
            "{props.message}"
        }
    }
}
