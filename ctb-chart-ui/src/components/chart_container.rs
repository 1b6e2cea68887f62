//! Container component that D3/Leaflet render into.

use dioxus::prelude::*;

/// Props for ChartContainer
#[derive(Props, Clone, PartialEq)]
pub struct ChartContainerProps {
    /// DOM id the JS renderer targets
    pub id: String,
    /// Whether the backing data is still loading
    #[props(default = false)]
    pub loading: bool,
    /// Minimum height in pixels (maps want more than charts)
    #[props(default = 350)]
    pub min_height: u32,
    /// Hide without unmounting, so tab switches keep the DOM node alive
    #[props(default = false)]
    pub hidden: bool,
}

/// A target div for the JS renderers with a loading overlay.
#[component]
pub fn ChartContainer(props: ChartContainerProps) -> Element {
    let display = if props.hidden { "none" } else { "block" };
    let style = format!(
        "min-height: {}px; position: relative; width: 100%; display: {};",
        props.min_height, display
    );

    rsx! {
        div {
            style: "{style}",
            if props.loading {
                div {
                    style: "position: absolute; top: 50%; left: 50%; transform: translate(-50%, -50%); color: #888;",
                    "Loading chart..."
                }
            }
            div {
                id: "{props.id}",
                style: "width: 100%; min-height: inherit;",
            }
        }
    }
}
