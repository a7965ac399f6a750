use std::{collections::BTreeMap, fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::foundation::error::{GlassCityError, GlassCityResult};

/// Straight (non-premultiplied) RGBA8 colour.
///
/// Parsed from `#RRGGBB` / `#RRGGBBAA` (case-insensitive, `#` optional) and written back as
/// lowercase hex, dropping the alpha byte when it is opaque.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl Color {
    /// Opaque colour from RGB bytes.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Parse a hex colour string.
    pub fn from_hex(s: &str) -> GlassCityResult<Self> {
        parse_hex(s).map_err(GlassCityError::palette)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)?;
        if self.a != 255 {
            write!(f, "{:02x}", self.a)?;
        }
        Ok(())
    }
}

impl FromStr for Color {
    type Err = GlassCityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        parse_hex(&s).map_err(serde::de::Error::custom)
    }
}

fn parse_hex(s: &str) -> Result<Color, String> {
    let s = s.trim();
    let s = s.strip_prefix('#').unwrap_or(s);

    fn hex_byte(pair: &str) -> Result<u8, String> {
        u8::from_str_radix(pair, 16).map_err(|_| format!("invalid hex byte \"{pair}\""))
    }

    if !s.is_ascii() {
        return Err("hex color must be ASCII".to_owned());
    }

    match s.len() {
        6 => Ok(Color::rgb(
            hex_byte(&s[0..2])?,
            hex_byte(&s[2..4])?,
            hex_byte(&s[4..6])?,
        )),
        8 => Ok(Color {
            r: hex_byte(&s[0..2])?,
            g: hex_byte(&s[2..4])?,
            b: hex_byte(&s[4..6])?,
            a: hex_byte(&s[6..8])?,
        }),
        _ => Err("hex color must be #RRGGBB or #RRGGBBAA (case-insensitive)".to_owned()),
    }
}

/// Named colour roles of a scene.
///
/// A closed record: every role is required. Incomplete palettes are rejected when parsed, there
/// is no merge with [`Palette::default`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Palette {
    /// Bottom of the sky gradient.
    pub sky_base: Color,
    /// Middle stop of the sky gradient.
    pub sky_mid: Color,
    /// Top of the sky gradient.
    pub sky_accent: Color,
    /// Upper glass gradient colour.
    pub glass_fill: Color,
    /// Lower glass gradient colour.
    pub glass_fill_deep: Color,
    /// First neon hue.
    pub neon_primary: Color,
    /// Second neon hue.
    pub neon_secondary: Color,
    /// Warm corner glow.
    pub warm_highlight: Color,
}

impl Palette {
    /// Role names in declaration order.
    pub const ROLES: [&'static str; 8] = [
        "sky_base",
        "sky_mid",
        "sky_accent",
        "glass_fill",
        "glass_fill_deep",
        "neon_primary",
        "neon_secondary",
        "warm_highlight",
    ];

    /// Build a palette from `(role, hex)` pairs.
    ///
    /// Every role in [`Palette::ROLES`] must be present exactly once; unknown roles are errors.
    pub fn from_roles<K, V>(roles: impl IntoIterator<Item = (K, V)>) -> GlassCityResult<Self>
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut map = BTreeMap::<String, Color>::new();
        for (k, v) in roles {
            let key = k.as_ref().trim().to_owned();
            if !Self::ROLES.contains(&key.as_str()) {
                return Err(GlassCityError::palette(format!(
                    "unknown palette role '{key}'"
                )));
            }
            let color = parse_hex(v.as_ref())
                .map_err(|e| GlassCityError::palette(format!("role '{key}': {e}")))?;
            if map.insert(key.clone(), color).is_some() {
                return Err(GlassCityError::palette(format!(
                    "duplicate palette role '{key}'"
                )));
            }
        }

        let missing: Vec<&str> = Self::ROLES
            .iter()
            .copied()
            .filter(|r| !map.contains_key(*r))
            .collect();
        if !missing.is_empty() {
            return Err(GlassCityError::palette(format!(
                "palette is missing roles: {}",
                missing.join(", ")
            )));
        }

        let take = |role: &str| map[role];
        Ok(Self {
            sky_base: take("sky_base"),
            sky_mid: take("sky_mid"),
            sky_accent: take("sky_accent"),
            glass_fill: take("glass_fill"),
            glass_fill_deep: take("glass_fill_deep"),
            neon_primary: take("neon_primary"),
            neon_secondary: take("neon_secondary"),
            warm_highlight: take("warm_highlight"),
        })
    }

    /// Parse a complete palette from a JSON object of role -> hex colour.
    pub fn from_json_str(s: &str) -> GlassCityResult<Self> {
        serde_json::from_str(s).map_err(|e| GlassCityError::palette(e.to_string()))
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            sky_base: Color::rgb(0x0f, 0x17, 0x2a),
            sky_mid: Color::rgb(0x0b, 0x44, 0x52),
            sky_accent: Color::rgb(0x0e, 0xa5, 0xb1),
            glass_fill: Color::rgb(0x60, 0xa5, 0xfa),
            glass_fill_deep: Color::rgb(0x1e, 0x3a, 0x8a),
            neon_primary: Color::rgb(0x38, 0xbd, 0xf8),
            neon_secondary: Color::rgb(0xfb, 0x92, 0x3c),
            warm_highlight: Color::rgb(0xff, 0xd7, 0xa8),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/palette.rs"]
mod tests;
