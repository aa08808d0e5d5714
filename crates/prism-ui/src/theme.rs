//! Shared UI colors (dark theme).

pub mod colors {
    use iced::Color;

    pub const BG_DARK: Color = Color::from_rgb(0.118, 0.118, 0.118);
    pub const BG_MEDIUM: Color = Color::from_rgb(0.165, 0.165, 0.165);
    pub const BG_LIGHT: Color = Color::from_rgb(0.20, 0.20, 0.22);
    pub const BG_HOVER: Color = Color::from_rgb(0.26, 0.26, 0.28);
    pub const BG_ACTIVE: Color = Color::from_rgb(0.22, 0.28, 0.38);

    pub const BORDER: Color = Color::from_rgb(0.25, 0.25, 0.25);

    pub const TEXT_PRIMARY: Color = Color::from_rgb(0.83, 0.83, 0.83);
    pub const TEXT_SECONDARY: Color = Color::from_rgb(0.65, 0.65, 0.65);
    pub const TEXT_MUTED: Color = Color::from_rgb(0.50, 0.50, 0.50);

    pub const ACCENT: Color = Color::from_rgb(0.36, 0.54, 0.90);
    pub const SUCCESS: Color = Color::from_rgb(0.31, 0.98, 0.48);
    pub const DANGER: Color = Color::from_rgb(1.0, 0.33, 0.33);
}
