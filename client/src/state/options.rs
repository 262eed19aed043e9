//! Processing options record bound to the dashboard form.
//!
//! DESIGN
//! ======
//! The record is sent verbatim to the backend as the `options` multipart
//! field, so its serde shape is the wire contract: camelCase keys, lowercase
//! enum keys, and unset numeric inputs encoded as `""` the way an empty form
//! field would be. Derived display rules (effective DPI, which inputs are
//! shown) live here so the form component stays declarative.

#[cfg(test)]
#[path = "options_test.rs"]
mod options_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// DPI assumed for screen-oriented output.
pub const SCREEN_DPI: u32 = 72;
/// DPI assumed for print presets and physical units.
pub const PRINT_DPI: u32 = 300;

/// Named output size. `Custom` means the resize inputs apply.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Preset {
    #[default]
    #[serde(rename = "")]
    Custom,
    #[serde(rename = "instagram_square")]
    InstagramSquare,
    #[serde(rename = "instagram_story")]
    InstagramStory,
    #[serde(rename = "instagram_portrait")]
    InstagramPortrait,
    #[serde(rename = "whatsapp_status")]
    WhatsappStatus,
    #[serde(rename = "whatsapp_dp")]
    WhatsappDp,
    #[serde(rename = "print_a4")]
    PrintA4,
    #[serde(rename = "print_letter")]
    PrintLetter,
}

impl Preset {
    pub const ALL: [Self; 8] = [
        Self::Custom,
        Self::InstagramSquare,
        Self::InstagramStory,
        Self::InstagramPortrait,
        Self::WhatsappStatus,
        Self::WhatsappDp,
        Self::PrintA4,
        Self::PrintLetter,
    ];

    /// Wire key, also used as the `<option>` value.
    pub fn key(self) -> &'static str {
        match self {
            Self::Custom => "",
            Self::InstagramSquare => "instagram_square",
            Self::InstagramStory => "instagram_story",
            Self::InstagramPortrait => "instagram_portrait",
            Self::WhatsappStatus => "whatsapp_status",
            Self::WhatsappDp => "whatsapp_dp",
            Self::PrintA4 => "print_a4",
            Self::PrintLetter => "print_letter",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Custom => "Custom",
            Self::InstagramSquare => "Instagram Square (1080x1080)",
            Self::InstagramStory => "Instagram Story (1080x1920)",
            Self::InstagramPortrait => "Instagram Portrait (1080x1350)",
            Self::WhatsappStatus => "WhatsApp Status (1080x1920)",
            Self::WhatsappDp => "WhatsApp Display Pic (640x640)",
            Self::PrintA4 => "Print A4 @300DPI (2480x3508)",
            Self::PrintLetter => "Print Letter @300DPI (2550x3300)",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        let key = key.trim().to_ascii_lowercase();
        Self::ALL.into_iter().find(|p| p.key() == key)
    }

    /// Target pixel size, `None` for `Custom`.
    pub fn dimensions(self) -> Option<(u32, u32)> {
        match self {
            Self::Custom => None,
            Self::InstagramSquare => Some((1080, 1080)),
            Self::InstagramStory | Self::WhatsappStatus => Some((1080, 1920)),
            Self::InstagramPortrait => Some((1080, 1350)),
            Self::WhatsappDp => Some((640, 640)),
            Self::PrintA4 => Some((2480, 3508)),
            Self::PrintLetter => Some((2550, 3300)),
        }
    }

    /// Print presets default to 300 DPI.
    pub fn is_print(self) -> bool {
        let key = self.key();
        key.starts_with("print_") || key.contains("a4") || key.contains("letter")
    }
}

/// Output encoding requested from the backend.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Jpeg,
    Png,
    Webp,
}

impl OutputFormat {
    pub const ALL: [Self; 3] = [Self::Jpeg, Self::Png, Self::Webp];

    pub fn key(self) -> &'static str {
        match self {
            Self::Jpeg => "jpeg",
            Self::Png => "png",
            Self::Webp => "webp",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Jpeg => "JPG",
            Self::Png => "PNG",
            Self::Webp => "WEBP",
        }
    }

    /// File extension for downloads (`jpeg` is shortened to `jpg`).
    pub fn extension(self) -> &'static str {
        match self {
            Self::Jpeg => "jpg",
            Self::Png => "png",
            Self::Webp => "webp",
        }
    }

    pub fn mime(self) -> &'static str {
        match self {
            Self::Jpeg => "image/jpeg",
            Self::Png => "image/png",
            Self::Webp => "image/webp",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        let key = key.trim().to_ascii_lowercase();
        Self::ALL.into_iter().find(|f| f.key() == key)
    }

    pub fn supports_transparency(self) -> bool {
        !matches!(self, Self::Jpeg)
    }
}

/// Fill used for transparent regions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Background {
    #[default]
    White,
    Transparent,
}

impl Background {
    pub const ALL: [Self; 2] = [Self::White, Self::Transparent];

    pub fn key(self) -> &'static str {
        match self {
            Self::White => "white",
            Self::Transparent => "transparent",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::White => "White",
            Self::Transparent => "Transparent",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|b| b.key() == key.trim())
    }
}

/// Unit for custom width/height.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResizeUnit {
    #[default]
    #[serde(rename = "px")]
    Px,
    #[serde(rename = "%")]
    Percent,
    #[serde(rename = "mm")]
    Mm,
    #[serde(rename = "cm")]
    Cm,
    #[serde(rename = "inch")]
    Inch,
}

impl ResizeUnit {
    pub const ALL: [Self; 5] = [Self::Px, Self::Percent, Self::Mm, Self::Cm, Self::Inch];

    pub fn key(self) -> &'static str {
        match self {
            Self::Px => "px",
            Self::Percent => "%",
            Self::Mm => "mm",
            Self::Cm => "cm",
            Self::Inch => "inch",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|u| u.key() == key.trim())
    }

    /// Physical units need a DPI to convert to pixels.
    pub fn is_physical(self) -> bool {
        matches!(self, Self::Mm | Self::Cm | Self::Inch)
    }
}

/// Custom resize request, used when no preset is selected.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResizeSpec {
    #[serde(serialize_with = "serialize_blank_or_number", deserialize_with = "deserialize_blank_or_number")]
    pub width: Option<u32>,
    #[serde(serialize_with = "serialize_blank_or_number", deserialize_with = "deserialize_blank_or_number")]
    pub height: Option<u32>,
    pub unit: ResizeUnit,
    pub lock_aspect: bool,
}

impl Default for ResizeSpec {
    fn default() -> Self {
        Self { width: None, height: None, unit: ResizeUnit::Px, lock_aspect: true }
    }
}

/// User-configured transformation parameters sent with every upload.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessingOptions {
    pub preset: Preset,
    pub format: OutputFormat,
    pub quality: u8,
    #[serde(serialize_with = "serialize_blank_or_number", deserialize_with = "deserialize_blank_or_number")]
    pub dpi: Option<u32>,
    pub crop: bool,
    pub remove_metadata: bool,
    pub background: Background,
    pub resize: ResizeSpec,
}

impl Default for ProcessingOptions {
    fn default() -> Self {
        Self {
            preset: Preset::Custom,
            format: OutputFormat::Jpeg,
            quality: 80,
            dpi: None,
            crop: false,
            remove_metadata: true,
            background: Background::White,
            resize: ResizeSpec::default(),
        }
    }
}

impl ProcessingOptions {
    /// Change the output format. JPEG has no alpha channel, so selecting it
    /// resets the background to white.
    pub fn set_format(&mut self, format: OutputFormat) {
        self.format = format;
        if !format.supports_transparency() {
            self.background = Background::White;
        }
    }

    /// Set quality, clamped to `1..=100`.
    pub fn set_quality(&mut self, quality: i64) {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        {
            self.quality = quality.clamp(1, 100) as u8;
        }
    }

    /// Whether the background selector is locked (JPEG output).
    pub fn background_locked(&self) -> bool {
        !self.format.supports_transparency()
    }

    /// The DPI input only matters for physical units.
    pub fn shows_dpi_input(&self) -> bool {
        self.resize.unit.is_physical()
    }

    /// Custom width/height inputs are hidden while a preset is active.
    pub fn shows_resize_inputs(&self) -> bool {
        self.preset == Preset::Custom
    }

    /// DPI the backend will use when none is given explicitly.
    pub fn effective_dpi(&self) -> u32 {
        if let Some(dpi) = self.dpi.filter(|d| *d > 0) {
            return dpi;
        }
        if self.preset != Preset::Custom {
            return if self.preset.is_print() { PRINT_DPI } else { SCREEN_DPI };
        }
        if self.shows_dpi_input() { PRINT_DPI } else { SCREEN_DPI }
    }

    /// Informational notes shown under the form.
    pub fn notes(&self) -> Vec<&'static str> {
        let mut notes = Vec::new();
        if self.background_locked() {
            notes.push("JPEG does not support transparency; background will be white.");
        }
        if self.remove_metadata {
            notes.push("Metadata will be removed from output images.");
            notes.push(
                "Note: DPI is stored in image metadata. When metadata is removed, DPI may not be embedded in the output file.",
            );
        }
        notes
    }
}

/// Parse a numeric form input; blank, zero, and junk mean "unset".
pub fn parse_positive(input: &str) -> Option<u32> {
    input.trim().parse::<u32>().ok().filter(|n| *n > 0)
}

/// Render an optional number back into its form input value.
pub fn display_positive(value: Option<u32>) -> String {
    value.map(|n| n.to_string()).unwrap_or_default()
}

#[allow(clippy::ref_option)]
fn serialize_blank_or_number<S>(value: &Option<u32>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value {
        Some(n) => serializer.serialize_u32(*n),
        None => serializer.serialize_str(""),
    }
}

fn deserialize_blank_or_number<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Null => Ok(None),
        serde_json::Value::String(s) if s.trim().is_empty() => Ok(None),
        serde_json::Value::String(s) => s
            .trim()
            .parse::<u32>()
            .map(Some)
            .map_err(|_| D::Error::custom(format!("expected a number, got {s:?}"))),
        serde_json::Value::Number(n) => n
            .as_u64()
            .and_then(|n| u32::try_from(n).ok())
            .map(Some)
            .ok_or_else(|| D::Error::custom(format!("number out of range: {n}"))),
        other => Err(D::Error::custom(format!("expected a number or blank, got {other}"))),
    }
}
