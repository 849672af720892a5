//! Brand tokens for the Agent Wargame design kit
//!
//! Colors are 6-hex-digit sRGB values without a leading `#`, matching the
//! `val` attribute of `<a:srgbClr>`. Both tables are compile-time constants;
//! there is no runtime configuration.

/// Color palette
pub mod palette {
    /// Warm canvas background
    pub const BG: &str = "F3EFE7";
    /// Card / panel surface
    pub const SURFACE: &str = "FFFFFF";
    /// Secondary surface
    pub const SURFACE2: &str = "F7F4EE";
    /// Tertiary surface
    pub const SURFACE3: &str = "EFE9E1";
    /// Primary text
    pub const INK: &str = "12151A";
    /// Secondary dark tone
    pub const INK2: &str = "222832";
    /// Muted body text
    pub const MUTED: &str = "6D737F";
    /// Placeholder / faint text
    pub const MUTED2: &str = "9AA3AD";
    /// Burgundy primary accent
    pub const ACCENT: &str = "7B1E2B";
    /// Gold secondary accent
    pub const ACCENT2: &str = "C2A06A";
    /// Teal secondary accent
    pub const ACCENT3: &str = "2A6F66";
    /// Near-black warm neutral
    pub const STONE900: &str = "1C1917";
    /// Dark warm neutral
    pub const STONE700: &str = "44403C";
    /// Mid warm neutral
    pub const STONE600: &str = "57534E";
    /// Label warm neutral
    pub const STONE500: &str = "78716C";
    /// Cool light border
    pub const SLATE200: &str = "E2E8F0";
    /// Negative / alert
    pub const ROSE600: &str = "E11D48";
    /// Positive / success
    pub const EMERALD600: &str = "059669";
    /// Warning
    pub const AMBER700: &str = "B45309";
}

/// Font roles
pub mod fonts {
    /// Serif display face for titles
    pub const DISPLAY: &str = "Fraunces";
    /// Grotesk body face
    pub const BODY: &str = "Space Grotesk";
    /// Monospace face for figures
    pub const MONO: &str = "SF Mono";
}

/// Theme name carried in `ppt/theme/theme1.xml`
pub const THEME_NAME: &str = "PowerAI";
