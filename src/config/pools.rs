//! Pool configuration: the three read-only lists the controller samples from.
//!
//! Pools come either from the built-in defaults or from a JSON file:
//!
//! ```json
//! {
//!   "themes": ["What is happiness?"],
//!   "card_images": ["stars/vega.png", "stars/altair.png", "stars/deneb.png"],
//!   "reflections": ["Your answer is travelling between the stars now."],
//!   "template": { "prefix": "I think it is ", "suffix": "" }
//! }
//! ```

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::defaults;
use crate::error::ConfigError;

/// Number of cards shown at once.
pub const CARD_COUNT: usize = 3;

/// Fixed sentence the user's answer is placed into.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerTemplate {
    #[serde(default)]
    pub prefix: String,
    #[serde(default)]
    pub suffix: String,
}

impl Default for AnswerTemplate {
    fn default() -> Self {
        Self {
            prefix: defaults::TEMPLATE_PREFIX.to_string(),
            suffix: defaults::TEMPLATE_SUFFIX.to_string(),
        }
    }
}

impl AnswerTemplate {
    pub fn new(prefix: impl Into<String>, suffix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            suffix: suffix.into(),
        }
    }

    /// Place the trimmed answer into the sentence.
    pub fn apply(&self, answer: &str) -> String {
        format!("{}{}{}", self.prefix, answer.trim(), self.suffix)
    }
}

/// The themes, card images and reflective messages for a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolConfig {
    pub themes: Vec<String>,
    pub card_images: Vec<String>,
    pub reflections: Vec<String>,
    #[serde(default)]
    pub template: AnswerTemplate,
}

impl Default for PoolConfig {
    fn default() -> Self {
        fn owned(items: &[&str]) -> Vec<String> {
            items.iter().map(|s| s.to_string()).collect()
        }

        Self {
            themes: owned(defaults::THEMES),
            card_images: owned(defaults::CARD_IMAGES),
            reflections: owned(defaults::REFLECTIONS),
            template: AnswerTemplate::default(),
        }
    }
}

impl PoolConfig {
    /// Build and validate a pool set from explicit lists.
    pub fn new(
        themes: Vec<String>,
        card_images: Vec<String>,
        reflections: Vec<String>,
    ) -> Result<Self, ConfigError> {
        let config = Self {
            themes,
            card_images,
            reflections,
            template: AnswerTemplate::default(),
        };
        config.validate()?;
        Ok(config)
    }

    /// Replace the answer template.
    pub fn with_template(mut self, template: AnswerTemplate) -> Self {
        self.template = template;
        self
    }

    /// Parse pools from a JSON string.
    ///
    /// `origin` names the source in error messages.
    pub fn from_json_str(json: &str, origin: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json).map_err(|source| ConfigError::Parse {
            origin: origin.to_string(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Read and validate a pool file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json_str(&json, &path.display().to_string())?;
        tracing::info!(
            "Loaded pools from {}: {} themes, {} cards, {} reflections",
            path.display(),
            config.themes.len(),
            config.card_images.len(),
            config.reflections.len()
        );
        Ok(config)
    }

    /// Check the pools can support a full session.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_pool("themes", &self.themes, 1)?;
        check_pool("card_images", &self.card_images, CARD_COUNT)?;
        check_pool("reflections", &self.reflections, 1)?;

        let mut seen = HashSet::new();
        for image in &self.card_images {
            if !seen.insert(image.as_str()) {
                return Err(ConfigError::DuplicateCard {
                    entry: image.clone(),
                });
            }
        }
        Ok(())
    }
}

fn check_pool(pool: &'static str, entries: &[String], min: usize) -> Result<(), ConfigError> {
    if entries.len() < min {
        return Err(ConfigError::TooFewEntries {
            pool,
            min,
            found: entries.len(),
        });
    }
    if let Some(index) = entries.iter().position(|e| e.trim().is_empty()) {
        return Err(ConfigError::BlankEntry { pool, index });
    }
    Ok(())
}
