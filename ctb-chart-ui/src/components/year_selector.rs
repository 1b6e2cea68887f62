//! Year selector over the supported asset years.

use crate::state::AppState;
use ctb_gee::asset::SUPPORTED_YEARS;
use dioxus::prelude::*;

/// Dropdown over the enumerated supported years. The selection is already
/// validated by construction; consumers still go through `Year::new` before
/// composing asset paths.
#[component]
pub fn YearSelector() -> Element {
    let mut state = use_context::<AppState>();
    let current = (state.selected_year)();

    let on_change = move |evt: Event<FormData>| {
        if let Ok(year) = evt.value().parse::<i32>() {
            state.selected_year.set(year);
        }
    };

    rsx! {
        label {
            style: "font-weight: bold; display: inline-flex; gap: 6px; align-items: center;",
            "Year: "
            select {
                onchange: on_change,
                for year in SUPPORTED_YEARS {
                    option {
                        value: "{year}",
                        selected: current == year,
                        "{year}"
                    }
                }
            }
        }
    }
}
