//! Named color ramps for the AGB map layer.

/// The selectable palettes, each an ordered sequence of color stops from
/// low to high biomass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Palette {
    Greens,
    Viridis,
    Plasma,
    Earth,
}

const GREENS: [&str; 9] = [
    "#f7fcf5", "#e5f5e0", "#c7e9c0", "#a1d99b", "#74c476", "#41ab5d", "#238b45", "#006d2c",
    "#00441b",
];

const VIRIDIS: [&str; 10] = [
    "#440154", "#482878", "#3e4989", "#31688e", "#26828e", "#1f9e89", "#35b779", "#6ece58",
    "#b5de2b", "#fde725",
];

const PLASMA: [&str; 10] = [
    "#0d0887", "#46039f", "#7201a8", "#9c179e", "#bd3786", "#d8576b", "#ed7953", "#fb9f3a",
    "#fdca26", "#f0f921",
];

const EARTH: [&str; 5] = ["#f7f4f0", "#d4c5a9", "#a67c52", "#6b4423", "#3d2817"];

impl Palette {
    pub const ALL: [Palette; 4] = [
        Palette::Greens,
        Palette::Viridis,
        Palette::Plasma,
        Palette::Earth,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Palette::Greens => "Greens",
            Palette::Viridis => "Viridis",
            Palette::Plasma => "Plasma",
            Palette::Earth => "Earth",
        }
    }

    pub fn from_label(label: &str) -> Option<Palette> {
        Palette::ALL.into_iter().find(|p| p.label() == label)
    }

    pub fn stops(self) -> &'static [&'static str] {
        match self {
            Palette::Greens => &GREENS,
            Palette::Viridis => &VIRIDIS,
            Palette::Plasma => &PLASMA,
            Palette::Earth => &EARTH,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_round_trip() {
        for palette in Palette::ALL {
            assert_eq!(Palette::from_label(palette.label()), Some(palette));
        }
        assert_eq!(Palette::from_label("Magma"), None);
    }

    #[test]
    fn every_palette_has_ordered_stops() {
        for palette in Palette::ALL {
            let stops = palette.stops();
            assert!(stops.len() >= 5);
            for stop in stops {
                assert!(stop.starts_with('#') && stop.len() == 7, "bad stop {stop}");
            }
        }
    }
}
