#![cfg(feature = "gui")]

/// Green-on-black terminal palette.
pub mod theme {
    pub const GREEN_300: u32 = 0xA8FF60; // Primary text
    pub const GREEN_500: u32 = 0x6FBF3A; // Secondary text
    pub const GREEN_700: u32 = 0x3F6B25; // Muted text, icons at rest
    pub const GREEN_900: u32 = 0x1E3318; // Borders

    pub const SURFACE_0: u32 = 0x0B0F0C; // Window background
    pub const SURFACE_1: u32 = 0x0F1511; // Panes, inputs
    pub const SURFACE_2: u32 = 0x142019; // Selection, hover

    pub const BG: u32 = SURFACE_0;
    pub const BG_SECONDARY: u32 = SURFACE_1;
    pub const BG_HOVER: u32 = SURFACE_2;
    pub const BG_SELECTED: u32 = SURFACE_2;
    pub const FG: u32 = GREEN_300;
    pub const FG_SECONDARY: u32 = GREEN_500;
    pub const MUTED: u32 = GREEN_700;

    pub const BORDER: u32 = GREEN_900;
    pub const OVERLAY: u32 = 0x00000099;

    pub const ACCENT: u32 = GREEN_300;
    pub const DANGER: u32 = 0xFF6B5E;
}
