//! Landing page configuration.
//!
//! The page reads one TOML document (compiled into the binary). Every
//! section and key is optional; a document that fails to parse or validate
//! is logged and replaced by the defaults.

use crate::error::ConfigError;
use crate::hover::DEFAULT_PARALLAX_STRENGTH;
use serde::Deserialize;
use std::time::Duration;

/// Root configuration structure
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LandingConfig {
    /// When a section counts as on screen
    pub visibility: VisibilityConfig,
    /// Scroll container behavior
    pub scroll: ScrollConfig,
    /// Hero scene
    pub hero: HeroConfig,
    /// Feature cards
    pub features: FeaturesConfig,
    /// Call to action
    pub cta: CtaConfig,
}

/// Intersection settings shared by every observed section.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct VisibilityConfig {
    /// Fraction of the section that must intersect the viewport, `0.0..=1.0`
    pub threshold: f64,
}

impl Default for VisibilityConfig {
    fn default() -> Self {
        Self { threshold: 0.3 }
    }
}

/// Scroll container settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ScrollConfig {
    /// Full-screen snap scrolling between sections
    pub section_snap: bool,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self { section_snap: true }
    }
}

/// Hero scene settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct HeroConfig {
    /// Maximum mouse parallax drift in px
    pub parallax_strength: f64,
}

impl Default for HeroConfig {
    fn default() -> Self {
        Self {
            parallax_strength: DEFAULT_PARALLAX_STRENGTH,
        }
    }
}

/// Feature cards settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct FeaturesConfig {
    /// Delay between typed characters of a feature answer
    pub typing_interval_ms: u64,
}

impl Default for FeaturesConfig {
    fn default() -> Self {
        Self {
            typing_interval_ms: 20,
        }
    }
}

impl FeaturesConfig {
    /// Typing interval.
    pub fn typing_interval(&self) -> Duration {
        Duration::from_millis(self.typing_interval_ms)
    }
}

/// Call-to-action settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CtaConfig {
    /// Length of the launch-offer countdown
    pub countdown_hours: u32,
    /// Fixed "spots left today" figure
    pub spots_left: u32,
}

impl Default for CtaConfig {
    fn default() -> Self {
        Self {
            countdown_hours: 24,
            spots_left: 7,
        }
    }
}

impl LandingConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse a TOML document, falling back to defaults on any error.
    pub fn load(source: &str) -> Self {
        match Self::from_toml(source) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("{e}; using default landing config");
                Self::default()
            }
        }
    }

    /// Range checks the type system cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let threshold = self.visibility.threshold;
        if !(0.0..=1.0).contains(&threshold) {
            return Err(ConfigError::Invalid {
                key: "visibility.threshold",
                reason: format!("{threshold} is outside 0.0..=1.0"),
            });
        }
        let strength = self.hero.parallax_strength;
        if !strength.is_finite() || strength < 0.0 {
            return Err(ConfigError::Invalid {
                key: "hero.parallax_strength",
                reason: format!("{strength} must be a finite, non-negative number"),
            });
        }
        if self.features.typing_interval_ms == 0 {
            return Err(ConfigError::Invalid {
                key: "features.typing_interval_ms",
                reason: "must be greater than zero".into(),
            });
        }
        if self.cta.countdown_hours == 0 {
            return Err(ConfigError::Invalid {
                key: "cta.countdown_hours",
                reason: "must be greater than zero".into(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_document_gives_defaults() {
        let config = LandingConfig::from_toml("").unwrap();
        assert_eq!(config, LandingConfig::default());
        assert_eq!(config.visibility.threshold, 0.3);
        assert_eq!(config.cta.countdown_hours, 24);
        assert_eq!(config.cta.spots_left, 7);
        assert!(config.scroll.section_snap);
    }

    #[test]
    fn partial_document_keeps_other_defaults() {
        let config = LandingConfig::from_toml(
            r#"
            [cta]
            spots_left = 3

            [hero]
            parallax_strength = 0.0
            "#,
        )
        .unwrap();
        assert_eq!(config.cta.spots_left, 3);
        assert_eq!(config.cta.countdown_hours, 24);
        assert_eq!(config.hero.parallax_strength, 0.0);
    }

    #[test]
    fn out_of_range_threshold_is_rejected() {
        let err = LandingConfig::from_toml("[visibility]\nthreshold = 1.5").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "visibility.threshold", .. }));
    }

    #[test]
    fn zero_typing_interval_is_rejected() {
        let err = LandingConfig::from_toml("[features]\ntyping_interval_ms = 0").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "features.typing_interval_ms", .. }));
    }

    #[test]
    fn load_falls_back_on_garbage() {
        assert_eq!(LandingConfig::load("[cta\nbroken"), LandingConfig::default());
        assert_eq!(
            LandingConfig::load("[cta]\ncountdown_hours = 0"),
            LandingConfig::default()
        );
    }
}
