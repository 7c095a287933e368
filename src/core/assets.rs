use crate::core::{ImageResolver, TokenSource};
use crate::utils::error::{AssetError, Result};
use crate::utils::validation::{validate_non_empty_list, Validate};
use async_trait::async_trait;
use futures::future::join_all;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::ops::RangeInclusive;
use std::time::Duration;
use url::{form_urlencoded, Url};

pub const DEFAULT_ROTATION: [&str; 10] = [
    "artificial intelligence",
    "machine learning",
    "data science",
    "neural network",
    "technology",
    "code",
    "algorithm",
    "robotics",
    "deep learning",
    "computer vision",
];

pub const DEFAULT_FALLBACKS: [&str; 5] = [
    "https://picsum.photos/800/600?random=1",
    "https://picsum.photos/800/600?random=2",
    "https://picsum.photos/800/600?random=3",
    "https://picsum.photos/800/600?random=4",
    "https://picsum.photos/800/600?random=5",
];

pub const HERO_TOPIC: &str = "artificial intelligence technology code";
pub const PROFILE_TOPIC: &str = "professional portrait technology";

const STANDARD_TOKENS: RangeInclusive<u32> = 1000..=9999;
const HERO_TOKENS: RangeInclusive<u32> = 10000..=99999;
const PROFILE_TOKENS: RangeInclusive<u32> = 5000..=9999;
const PLACEHOLDER_TOKENS: RangeInclusive<u32> = 1..=1000;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetConfig {
    /// Image query endpoint, e.g. `https://source.unsplash.com`.
    pub base_url: String,
    /// Placeholder service used when hero or profile resolution fails.
    pub fallback_base_url: String,
    pub rotation: Vec<String>,
    pub fallbacks: Vec<String>,
    /// Courtesy pause after each successful resolution. Zero disables it.
    pub delay_ms: u64,
    pub default_width: u32,
    pub default_height: u32,
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self {
            base_url: "https://source.unsplash.com".to_string(),
            fallback_base_url: "https://picsum.photos".to_string(),
            rotation: DEFAULT_ROTATION.iter().map(|s| s.to_string()).collect(),
            fallbacks: DEFAULT_FALLBACKS.iter().map(|s| s.to_string()).collect(),
            delay_ms: 100,
            default_width: 800,
            default_height: 600,
        }
    }
}

impl AssetConfig {
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

/// Reduces any index onto `0..len`. Negative indices count back from the end.
pub fn slot(index: i64, len: usize) -> usize {
    index.rem_euclid(len as i64) as usize
}

pub struct AssetResolver<T: TokenSource> {
    config: AssetConfig,
    tokens: T,
}

impl<T: TokenSource> AssetResolver<T> {
    /// Fails when the rotation or fallback list is empty.
    pub fn new(config: AssetConfig, tokens: T) -> Result<Self> {
        validate_non_empty_list("asset.rotation", &config.rotation)?;
        validate_non_empty_list("asset.fallbacks", &config.fallbacks)?;
        Ok(Self { config, tokens })
    }

    pub fn category(&self, index: i64) -> &str {
        &self.config.rotation[slot(index, self.config.rotation.len())]
    }

    pub fn fallback(&self, index: i64) -> &str {
        &self.config.fallbacks[slot(index, self.config.fallbacks.len())]
    }

    pub async fn resolve_default(&self, index: i64) -> String {
        self.resolve(index, self.config.default_width, self.config.default_height)
            .await
    }

    fn query_url(
        &self,
        topic: &str,
        tokens: RangeInclusive<u32>,
        width: u32,
        height: u32,
    ) -> std::result::Result<String, AssetError> {
        if width == 0 || height == 0 {
            return Err(AssetError::InvalidDimensions { width, height });
        }

        let token = self.tokens.token(tokens)?;
        let topic: String = form_urlencoded::byte_serialize(topic.as_bytes()).collect();
        let url = format!(
            "{}/{}x{}/?{}&sig={}",
            self.config.base_url.trim_end_matches('/'),
            width,
            height,
            topic,
            token
        );

        match Url::parse(&url) {
            Ok(_) => Ok(url),
            Err(source) => Err(AssetError::MalformedUrl { url, source }),
        }
    }

    async fn pause(&self) {
        let delay = self.config.delay();
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }

    /// Resolves `topic`, substituting the fallback at `fallback_index` on failure.
    async fn resolve_topic(&self, topic: &str, fallback_index: i64, width: u32, height: u32) -> String {
        match self.query_url(topic, STANDARD_TOKENS, width, height) {
            Ok(url) => {
                self.pause().await;
                url
            }
            Err(e) => {
                tracing::warn!("Image resolution failed for '{}': {}", topic, e);
                self.fallback(fallback_index).to_string()
            }
        }
    }

    async fn resolve_fixed(
        &self,
        topic: &str,
        tokens: RangeInclusive<u32>,
        width: u32,
        height: u32,
    ) -> String {
        match self.query_url(topic, tokens, width, height) {
            Ok(url) => {
                self.pause().await;
                url
            }
            Err(e) => {
                tracing::warn!("Image resolution failed for '{}': {}", topic, e);
                self.placeholder_url(width, height)
            }
        }
    }

    fn placeholder_url(&self, width: u32, height: u32) -> String {
        match self.tokens.token(PLACEHOLDER_TOKENS) {
            Ok(random) => format!(
                "{}/{}/{}?random={}",
                self.config.fallback_base_url.trim_end_matches('/'),
                width,
                height,
                random
            ),
            Err(e) => {
                tracing::debug!("Placeholder token unavailable: {}", e);
                self.fallback(0).to_string()
            }
        }
    }
}

#[async_trait]
impl<T: TokenSource> ImageResolver for AssetResolver<T> {
    async fn resolve(&self, index: i64, width: u32, height: u32) -> String {
        let category = self.category(index);
        tracing::debug!("Resolving image {} ({}) at {}x{}", index, category, width, height);
        self.resolve_topic(category, index, width, height).await
    }

    async fn resolve_hero(&self, width: u32, height: u32) -> String {
        self.resolve_fixed(HERO_TOPIC, HERO_TOKENS, width, height).await
    }

    async fn resolve_profile(&self, width: u32, height: u32) -> String {
        self.resolve_fixed(PROFILE_TOPIC, PROFILE_TOKENS, width, height)
            .await
    }

    async fn resolve_batch(
        &self,
        categories: &[String],
        count: usize,
    ) -> HashMap<String, Vec<String>> {
        let (width, height) = (self.config.default_width, self.config.default_height);

        let per_category = categories.iter().map(|category| async move {
            let urls = join_all(
                (0..count).map(|i| self.resolve_topic(category, i as i64, width, height)),
            )
            .await;
            (category.clone(), urls)
        });

        let batch: HashMap<String, Vec<String>> = join_all(per_category).await.into_iter().collect();
        tracing::debug!("Resolved batch of {} categories x {}", batch.len(), count);
        batch
    }
}

impl Validate for AssetConfig {
    fn validate(&self) -> Result<()> {
        use crate::utils::validation::{
            validate_positive_number, validate_range, validate_url,
        };

        validate_url("asset.base_url", &self.base_url)?;
        validate_url("asset.fallback_base_url", &self.fallback_base_url)?;
        validate_non_empty_list("asset.rotation", &self.rotation)?;
        validate_non_empty_list("asset.fallbacks", &self.fallbacks)?;
        for fallback in &self.fallbacks {
            validate_url("asset.fallbacks", fallback)?;
        }
        validate_range("asset.delay_ms", self.delay_ms, 0, 10_000)?;
        validate_positive_number("asset.default_width", self.default_width, 1)?;
        validate_positive_number("asset.default_height", self.default_height, 1)?;
        Ok(())
    }
}
