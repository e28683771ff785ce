//! Deterministic placeholder artwork.
//!
//! The image is a pure function of `(prompt, style, aspect)`: the SHA-256
//! digest of the concatenated inputs picks three gradient colours, the
//! aspect picks a fixed canvas, and the result is an SVG data URL.

use sha2::{Digest, Sha256};
use std::fmt;

use crate::art::data_url;

/// Longest prompt rendered into the image, in characters
pub const MAX_PROMPT_CHARS: usize = 80;

/// Canvas dimensions selected by the requested aspect ratio
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Aspect {
    Square,
    Wide,
    Portrait,
}

impl Aspect {
    /// Unrecognised ratios fall back to a square canvas
    pub fn parse(aspect: &str) -> Self {
        match aspect {
            "16:9" | "16-9" => Self::Wide,
            "3:4" | "3-4" => Self::Portrait,
            _ => Self::Square,
        }
    }

    /// `(width, height)` in pixels
    pub fn dimensions(self) -> (u32, u32) {
        match self {
            Self::Square => (1024, 1024),
            Self::Wide => (1280, 720),
            Self::Portrait => (960, 1280),
        }
    }
}

/// An `#rrggbb` colour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

/// Gradient stops, centre to edge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub center: Rgb,
    pub mid: Rgb,
    pub edge: Rgb,
}

impl Palette {
    /// Read three colours from hex digits 0-5, 6-11 and 12-17 of the seed
    pub fn from_seed(seed: &[u8; 32]) -> Self {
        // Two hex digits per byte, so each 6-digit window is three whole bytes.
        let rgb = |i: usize| Rgb(seed[i], seed[i + 1], seed[i + 2]);
        Self {
            center: rgb(0),
            mid: rgb(3),
            edge: rgb(6),
        }
    }
}

/// SHA-256 over `prompt || style || aspect`, no separators
pub fn seed(prompt: &str, style: &str, aspect: &str) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(prompt.as_bytes());
    hasher.update(style.as_bytes());
    hasher.update(aspect.as_bytes());

    let mut out = [0u8; 32];
    out.copy_from_slice(&hasher.finalize());
    out
}

/// Lowercase hex rendering of a seed
pub fn seed_hex(seed: &[u8; 32]) -> String {
    seed.iter().map(|b| format!("{:02x}", b)).collect()
}

fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Render the SVG markup for a prompt
pub fn render_svg(prompt: &str, style: &str, aspect: &str) -> String {
    let palette = Palette::from_seed(&seed(prompt, style, aspect));
    let (width, height) = Aspect::parse(aspect).dimensions();
    let caption: String = prompt.chars().take(MAX_PROMPT_CHARS).collect();

    format!(
        r##"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}">
  <defs>
    <radialGradient id="g" cx="50%" cy="50%" r="70%">
      <stop offset="0%" stop-color="{center}"/>
      <stop offset="50%" stop-color="{mid}"/>
      <stop offset="100%" stop-color="{edge}"/>
    </radialGradient>
    <filter id="f" x="-20%" y="-20%" width="140%" height="140%">
      <feTurbulence type="fractalNoise" baseFrequency="0.012" numOctaves="3"/>
      <feColorMatrix type="saturate" values="1.2"/>
      <feBlend mode="overlay"/>
    </filter>
  </defs>
  <rect width="100%" height="100%" fill="url(#g)"/>
  <rect width="100%" height="100%" filter="url(#f)" opacity="0.35"/>
  <g font-family="Inter,Arial" font-size="28" fill="white" opacity="0.9">
    <text x="50%" y="50%" text-anchor="middle">{caption}</text>
    <text x="50%" y="55%" text-anchor="middle" opacity="0.7">style: {style}</text>
  </g>
</svg>"##,
        width = width,
        height = height,
        center = palette.center,
        mid = palette.mid,
        edge = palette.edge,
        caption = escape_xml(&caption),
        style = escape_xml(style),
    )
}

/// Render and wrap as `data:image/svg+xml;base64,...`
pub fn render_data_url(prompt: &str, style: &str, aspect: &str) -> String {
    data_url::encode(render_svg(prompt, style, aspect).as_bytes(), data_url::SVG_FORMAT)
}
