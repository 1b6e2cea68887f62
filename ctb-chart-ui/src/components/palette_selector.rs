//! Color palette selector for the map layer.

use crate::state::AppState;
use ctb_data::palette::Palette;
use dioxus::prelude::*;

/// Dropdown over the named color ramps.
#[component]
pub fn PaletteSelector() -> Element {
    let mut state = use_context::<AppState>();
    let current = (state.selected_palette)();

    let on_change = move |evt: Event<FormData>| {
        // Only accept known labels; an unknown value leaves the selection alone.
        if Palette::from_label(&evt.value()).is_some() {
            state.selected_palette.set(evt.value());
        }
    };

    rsx! {
        label {
            style: "font-weight: bold; display: inline-flex; gap: 6px; align-items: center;",
            "Palette: "
            select {
                onchange: on_change,
                for palette in Palette::ALL {
                    option {
                        value: "{palette.label()}",
                        selected: current == palette.label(),
                        "{palette.label()}"
                    }
                }
            }
        }
    }
}
