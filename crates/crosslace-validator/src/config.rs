//! Validator configuration.

use serde::{Deserialize, Serialize};

use crate::{FindingKind, Severity};

/// How strictly grid findings are classified.
///
/// The level is part of the cache key, so reports for different levels never mix.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::IsVariant,
)]
#[serde(rename_all = "lowercase")]
pub enum Strictness {
    /// Shape and density advisories become suggestions.
    #[display("lenient")]
    Lenient,
    /// Findings keep their default severity.
    #[default]
    #[display("normal")]
    Normal,
    /// Connectivity and reference warnings become errors.
    #[display("strict")]
    Strict,
}

impl Strictness {
    /// Returns the severity a finding of `kind` gets at this level.
    ///
    /// Errors are never downgraded.
    ///
    /// # Examples
    ///
    /// ```
    /// use crosslace_validator::{FindingKind, Severity, Strictness};
    ///
    /// let kind = FindingKind::Disconnected;
    /// assert_eq!(Strictness::Normal.classify(kind, Severity::Warning), Severity::Warning);
    /// assert_eq!(Strictness::Strict.classify(kind, Severity::Warning), Severity::Error);
    /// ```
    #[must_use]
    pub fn classify(self, kind: FindingKind, default: Severity) -> Severity {
        if default == Severity::Error {
            return default;
        }
        match self {
            Self::Normal => default,
            Self::Strict => match kind {
                FindingKind::Disconnected
                | FindingKind::IsolatedWord
                | FindingKind::MissingWordReference => Severity::Error,
                _ => default,
            },
            Self::Lenient => match kind {
                FindingKind::ExtremeAspectRatio
                | FindingKind::LargeArea
                | FindingKind::LowDensity
                | FindingKind::HighDensity
                | FindingKind::ExcessiveBlockedCells => Severity::Suggestion,
                _ => default,
            },
        }
    }
}

/// Thresholds and cache sizing shared by both validators.
///
/// # Examples
///
/// ```
/// use crosslace_validator::ValidatorConfig;
///
/// let config = ValidatorConfig::default()
///     .cache_capacity(16)
///     .density_range(0.2, 0.7);
/// assert_eq!(config.cache_capacity, 16);
/// assert_eq!(config.max_word_len, 25);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidatorConfig {
    /// Reports kept by the grid validator's LRU cache; `0` disables caching.
    pub cache_capacity: usize,
    /// Shortest acceptable answer.
    pub min_word_len: usize,
    /// Longest acceptable answer.
    pub max_word_len: usize,
    /// Shortest clue that does not draw a warning.
    pub min_clue_len: usize,
    /// Longest clue that does not draw a warning.
    pub max_clue_len: usize,
    /// Lowest density that does not draw a warning.
    pub min_density: f64,
    /// Highest density that does not draw a warning.
    pub max_density: f64,
    /// Highest blocked-cell ratio that does not draw a warning.
    pub max_blocked_ratio: f64,
    /// Highest long-side to short-side ratio that does not draw a warning.
    pub max_aspect_ratio: f64,
    /// Largest area that does not draw a warning.
    pub max_area: usize,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            cache_capacity: 128,
            min_word_len: 2,
            max_word_len: 25,
            min_clue_len: 5,
            max_clue_len: 200,
            min_density: 0.1,
            max_density: 0.8,
            max_blocked_ratio: 0.3,
            max_aspect_ratio: 2.0,
            max_area: 400,
        }
    }
}

impl ValidatorConfig {
    /// Sets the cache capacity.
    #[must_use]
    pub fn cache_capacity(mut self, capacity: usize) -> Self {
        self.cache_capacity = capacity;
        self
    }

    /// Sets the accepted answer length range.
    #[must_use]
    pub fn word_len_range(mut self, min: usize, max: usize) -> Self {
        self.min_word_len = min;
        self.max_word_len = max;
        self
    }

    /// Sets the clue length range that draws no warning.
    #[must_use]
    pub fn clue_len_range(mut self, min: usize, max: usize) -> Self {
        self.min_clue_len = min;
        self.max_clue_len = max;
        self
    }

    /// Sets the density band that draws no warning.
    #[must_use]
    pub fn density_range(mut self, min: f64, max: f64) -> Self {
        self.min_density = min;
        self.max_density = max;
        self
    }

    /// Sets the blocked-cell ratio ceiling.
    #[must_use]
    pub fn max_blocked_ratio(mut self, ratio: f64) -> Self {
        self.max_blocked_ratio = ratio;
        self
    }

    /// Sets the aspect ratio ceiling.
    #[must_use]
    pub fn max_aspect_ratio(mut self, ratio: f64) -> Self {
        self.max_aspect_ratio = ratio;
        self
    }

    /// Sets the area ceiling.
    #[must_use]
    pub fn max_area(mut self, area: usize) -> Self {
        self.max_area = area;
        self
    }

    /// Returns `true` if `density` lies inside the configured band.
    #[must_use]
    pub fn density_in_range(&self, density: f64) -> bool {
        (self.min_density..=self.max_density).contains(&density)
    }
}
