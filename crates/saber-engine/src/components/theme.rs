use serde::{Deserialize, Serialize};

/// Blade colors offered by the color picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SaberColor {
    #[default]
    Blue,
    Red,
    Green,
    Purple,
    Yellow,
}

/// CSS colors for one blade theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ColorTheme {
    /// Color name, as accepted by [`SaberColor::from_name`].
    pub name: &'static str,
    /// Outer glow of the blade and title text shadow.
    pub glow: &'static str,
    /// Translucent wash behind the saber.
    pub background: &'static str,
    /// Page backdrop under the radial vignette.
    pub backdrop: &'static str,
    /// Title text color.
    pub title: &'static str,
    /// Picker button fill.
    pub swatch: &'static str,
}

impl SaberColor {
    pub const ALL: [SaberColor; 5] = [
        Self::Blue, Self::Red, Self::Green, Self::Purple, Self::Yellow,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Blue => "blue",
            Self::Red => "red",
            Self::Green => "green",
            Self::Purple => "purple",
            Self::Yellow => "yellow",
        }
    }

    /// Parse a color name, ignoring case and surrounding whitespace.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(name))
    }

    pub fn theme(&self) -> ColorTheme {
        match self {
            Self::Blue => ColorTheme {
                name: "blue",
                glow: "#0000FF",
                background: "rgba(0, 0, 255, 0.05)",
                backdrop: "#222233",
                title: "rgba(200,200,255,0.5)",
                swatch: "darkblue",
            },
            Self::Red => ColorTheme {
                name: "red",
                glow: "#FF0000",
                background: "rgba(255, 0, 0, 0.05)",
                backdrop: "#332222",
                title: "rgba(255,200,200,0.5)",
                swatch: "darkred",
            },
            Self::Green => ColorTheme {
                name: "green",
                glow: "#00FF00",
                background: "rgba(0, 255, 0, 0.05)",
                backdrop: "#223322",
                title: "rgba(200,255,200,0.5)",
                swatch: "darkgreen",
            },
            Self::Purple => ColorTheme {
                name: "purple",
                glow: "#800080",
                background: "rgba(255, 0, 255, 0.05)",
                backdrop: "#332233",
                title: "rgba(255,200,255,0.5)",
                swatch: "#590563",
            },
            Self::Yellow => ColorTheme {
                name: "yellow",
                glow: "#FFFF00",
                background: "rgba(255, 255, 0, 0.05)",
                backdrop: "#333222",
                title: "rgba(255,255,0,0.5)",
                swatch: "darkgoldenrod",
            },
        }
    }
}

impl ColorTheme {
    /// JSON object handed to the renderer.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
