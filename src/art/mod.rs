//! Art module - deterministic placeholder generation behind a provider trait

pub mod data_url;
pub mod generator;
pub mod provider;

pub use generator::{Aspect, Palette, Rgb, MAX_PROMPT_CHARS};
pub use provider::{ArtProvider, ArtRequest, ArtResult, ArtSpec, PlaceholderProvider};
