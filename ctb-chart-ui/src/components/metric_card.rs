//! Scalar metric display.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct MetricCardProps {
    /// Metric label, e.g. "Average AGB 2022"
    pub label: String,
    /// Formatted value, e.g. "142.5 ton/ha"
    pub value: String,
    /// Short explanation shown under the value
    #[props(default = String::new())]
    pub help: String,
}

/// A label/value card for scalar summaries.
#[component]
pub fn MetricCard(props: MetricCardProps) -> Element {
    rsx! {
        div {
            style: "background: #232323; border-radius: 10px; padding: 12px 14px; margin: 6px 0; color: #fff;",
            div {
                style: "font-size: 12px; color: #A9A9A9; margin-bottom: 2px;",
                "{props.label}"
            }
            div {
                style: "font-size: 22px; font-weight: 600;",
                "{props.value}"
            }
            if !props.help.is_empty() {
                div {
                    style: "font-size: 11px; color: #A9A9A9; margin-top: 4px;",
                    "{props.help}"
                }
            }
        }
    }
}
