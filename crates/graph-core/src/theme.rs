// File: crates/graph-core/src/theme.rs
// Summary: Color presets for the rendered widget (CSS color strings).

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: &'static str,
    pub grid: &'static str,
    pub line_stroke: &'static str,
    pub line_fill: &'static str,
    pub stroke_width: f32,
    pub cursor: &'static str,
    pub text: &'static str,
    pub tooltip_bg: &'static str,
    pub tooltip_border: &'static str,
}

impl Theme {
    pub fn periwinkle() -> Self {
        Self {
            name: "periwinkle",
            background: "#fdfdfd",
            grid: "#00000045",
            line_stroke: "#6E6BFF",
            line_fill: "#d0c4ff8f",
            stroke_width: 2.0,
            cursor: "#6E6BFF",
            text: "#222222",
            tooltip_bg: "#ffffff",
            tooltip_border: "#000000",
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: "#121214",
            grid: "#ffffff22",
            line_stroke: "#40a0ff",
            line_fill: "#40a0ff40",
            stroke_width: 2.0,
            cursor: "#ffe646",
            text: "#ebebf5",
            tooltip_bg: "#1c1c20",
            tooltip_border: "#9696a0",
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::periwinkle()
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::periwinkle(), Theme::dark()]
}

/// Find a theme by its `name`, falling back to the default.
pub fn find(name: &str) -> Theme {
    for t in presets() {
        if t.name.eq_ignore_ascii_case(name) {
            return t;
        }
    }
    Theme::default()
}
