//! Art generation providers

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::art::generator;
use crate::error::Result;

pub const DEFAULT_STYLE: &str = "dreamy";
pub const DEFAULT_ASPECT: &str = "1:1";

/// Request body for art generation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtRequest {
    pub prompt: String,
    /// Style hint: dreamy, watercolor, neon, ink, clay
    #[serde(default)]
    pub style: Option<String>,
    /// Aspect ratio, e.g. 1:1, 3:4, 16:9
    #[serde(default)]
    pub aspect: Option<String>,
}

/// Fully resolved generation input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtSpec {
    pub prompt: String,
    pub style: String,
    pub aspect: String,
}

impl From<ArtRequest> for ArtSpec {
    /// Missing or empty style/aspect take their defaults
    fn from(request: ArtRequest) -> Self {
        fn or_default(value: Option<String>, default: &str) -> String {
            value
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| default.to_string())
        }

        Self {
            prompt: request.prompt,
            style: or_default(request.style, DEFAULT_STYLE),
            aspect: or_default(request.aspect, DEFAULT_ASPECT),
        }
    }
}

/// Generated artwork
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtResult {
    /// Data URL or hosted URL
    pub image: String,
    pub prompt: String,
    pub style: String,
    pub provider: String,
}

/// Trait for art generation backends
#[async_trait]
pub trait ArtProvider: Send + Sync {
    /// Tag reported in every result
    fn name(&self) -> &str;

    async fn generate(&self, spec: ArtSpec) -> Result<ArtResult>;
}

/// Hash-seeded SVG artwork; needs no model or API key
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaceholderProvider;

impl PlaceholderProvider {
    pub const NAME: &'static str = "placeholder";
}

#[async_trait]
impl ArtProvider for PlaceholderProvider {
    fn name(&self) -> &str {
        Self::NAME
    }

    async fn generate(&self, spec: ArtSpec) -> Result<ArtResult> {
        let image = generator::render_data_url(&spec.prompt, &spec.style, &spec.aspect);
        debug!(
            style = %spec.style,
            aspect = %spec.aspect,
            bytes = image.len(),
            "Generated placeholder art"
        );

        Ok(ArtResult {
            image,
            prompt: spec.prompt,
            style: spec.style,
            provider: self.name().to_string(),
        })
    }
}
