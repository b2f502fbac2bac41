//! Colors and the fixed five-slot star palette.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Number of color buckets the star field is split into.
pub const PALETTE_LEN: usize = 5;

/// Opaque RGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
	/// Red channel.
	pub r: u8,
	/// Green channel.
	pub g: u8,
	/// Blue channel.
	pub b: u8,
}

impl Color {
	/// Builds a color from its three channels.
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b }
	}

	/// Parses `#RRGGBB` or the short `#RGB` form. Case-insensitive.
	pub fn parse_hex(s: &str) -> Option<Self> {
		let hex = s.trim().strip_prefix('#')?;
		if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
			return None;
		}
		let channel = |h: &str| u8::from_str_radix(h, 16).ok();
		match hex.len() {
			6 => Some(Self::rgb(
				channel(&hex[0..2])?,
				channel(&hex[2..4])?,
				channel(&hex[4..6])?,
			)),
			3 => {
				// #abc == #aabbcc
				let short = |h: &str| channel(h).map(|v| v * 17);
				Some(Self::rgb(
					short(&hex[0..1])?,
					short(&hex[1..2])?,
					short(&hex[2..3])?,
				))
			}
			_ => None,
		}
	}

	/// Lowercase `#rrggbb`, the format `<input type="color">` expects.
	pub fn to_css(self) -> String {
		format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
	}
}

impl fmt::Display for Color {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.to_css())
	}
}

impl Serialize for Color {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.serialize_str(&self.to_css())
	}
}

impl<'de> Deserialize<'de> for Color {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		let s = String::deserialize(deserializer)?;
		Color::parse_hex(&s)
			.ok_or_else(|| serde::de::Error::custom(format!("invalid hex color {s:?}")))
	}
}

/// Ordered fill colors, one per bucket.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Palette(pub [Color; PALETTE_LEN]);

impl Palette {
	/// Warm red through green to violet.
	pub const fn spectrum() -> Self {
		Self([
			Color::rgb(0xb2, 0x4a, 0x35),
			Color::rgb(0x9c, 0xb2, 0x35),
			Color::rgb(0x36, 0xb2, 0x4a),
			Color::rgb(0x36, 0x9d, 0xb2),
			Color::rgb(0x4a, 0x35, 0xb2),
		])
	}

	/// Color for a bucket index. Indices past the end take the last color.
	pub fn get(&self, bucket: usize) -> Color {
		self.0[bucket.min(PALETTE_LEN - 1)]
	}

	/// Replaces one bucket's color. Out-of-range slots are ignored.
	pub fn set(&mut self, bucket: usize, color: Color) {
		if let Some(slot) = self.0.get_mut(bucket) {
			*slot = color;
		}
	}

	/// Colors in bucket order.
	pub fn iter(&self) -> impl Iterator<Item = &Color> {
		self.0.iter()
	}
}

impl Default for Palette {
	fn default() -> Self {
		Self::spectrum()
	}
}
