use crosslace_core::{
    ContentHash, Grid, WordCollection,
    digest::{grid_digest, words_digest},
};

use super::{BoxedGridCheck, CheckInput, GridAnalysis, all_checks};
use crate::{
    Finding, FindingKind, Findings, GridDetails, GridReport, LruCache, Severity, Strictness,
    ValidationError, ValidatorConfig, report::clamp_score,
};

const ERROR_PENALTY: f64 = 20.0;
const WARNING_PENALTY: f64 = 5.0;
const SYMMETRY_WEIGHT: f64 = 5.0;
const BALANCE_WEIGHT: f64 = 10.0;
const DENSITY_PENALTY: f64 = 10.0;

/// Validates whole grids and caches the reports by content.
///
/// The validator runs its [`GridCheck`](super::GridCheck)s in order, scores the result and
/// stores it under a key derived from the grid, the words and the strictness level. Asking
/// again about unchanged content returns the stored report without rerunning any check.
///
/// Score: 100, minus 20 per error and 5 per warning, plus 5 per unit of horizontal and
/// vertical symmetry, plus 10 times the quadrant balance, minus 10 when the density is
/// outside the configured band; clamped to `[0, 100]`.
///
/// # Examples
///
/// ```
/// use crosslace_core::{Direction, Position};
/// use crosslace_placement::Puzzle;
/// use crosslace_validator::{GridQualityValidator, Strictness};
///
/// let mut puzzle = Puzzle::new(7, 7)?;
/// puzzle.add_word("cat", "Feline pet", Direction::Horizontal, Position::new(2, 2))?;
/// puzzle.add_word("car", "Road vehicle", Direction::Vertical, Position::new(2, 2))?;
///
/// let mut validator = GridQualityValidator::default();
/// let report = validator.validate(puzzle.grid(), puzzle.words(), Strictness::Normal);
/// assert!(report.valid);
/// assert_eq!(report.details.intersections, 1);
///
/// let again = validator.validate(puzzle.grid(), puzzle.words(), Strictness::Normal);
/// assert_eq!(again, report);
/// assert_eq!(validator.hits(), 1);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct GridQualityValidator {
    config: ValidatorConfig,
    checks: Vec<BoxedGridCheck>,
    cache: LruCache<ContentHash, GridReport>,
    hits: usize,
    misses: usize,
}

impl Default for GridQualityValidator {
    fn default() -> Self {
        Self::new(ValidatorConfig::default())
    }
}

impl GridQualityValidator {
    /// Creates a validator running every check.
    #[must_use]
    pub fn new(config: ValidatorConfig) -> Self {
        Self::with_checks(config, all_checks())
    }

    /// Creates a validator running only `checks`, in the given order.
    ///
    /// Details produced by checks that are left out keep their default values.
    #[must_use]
    pub fn with_checks(config: ValidatorConfig, checks: Vec<BoxedGridCheck>) -> Self {
        Self {
            cache: LruCache::new(config.cache_capacity),
            config,
            checks,
            hits: 0,
            misses: 0,
        }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// Returns the checks in run order.
    #[must_use]
    pub fn checks(&self) -> &[BoxedGridCheck] {
        &self.checks
    }

    /// Returns the key a report for this content is cached under.
    #[must_use]
    pub fn cache_key(grid: &Grid, words: &WordCollection, strictness: Strictness) -> ContentHash {
        ContentHash::combine(
            &[grid_digest(grid), words_digest(words)],
            &strictness.to_string(),
        )
    }

    /// Validates `grid` and its `words`.
    ///
    /// Never fails: an internal failure yields a report with a single
    /// [`FindingKind::Internal`] error and score 0, which is not cached.
    pub fn validate(
        &mut self,
        grid: &Grid,
        words: &WordCollection,
        strictness: Strictness,
    ) -> GridReport {
        let key = Self::cache_key(grid, words, strictness);
        if let Some(report) = self.cache.get(&key) {
            self.hits += 1;
            log::debug!("grid report cache hit for {key}");
            return report.clone();
        }
        self.misses += 1;
        log::debug!("grid report cache miss for {key}");

        match self.try_validate(grid, words, strictness, key) {
            Ok(report) => {
                self.cache.insert(key, report.clone());
                report
            }
            Err(err) => {
                log::warn!("grid validation failed: {err}");
                critical_report(&err, key)
            }
        }
    }

    /// Validates each `(grid, words)` pair, returning one report per input in order.
    pub fn validate_batch<'a, I>(&mut self, puzzles: I, strictness: Strictness) -> Vec<GridReport>
    where
        I: IntoIterator<Item = (&'a Grid, &'a WordCollection)>,
    {
        let hits = self.hits;
        let reports: Vec<GridReport> = puzzles
            .into_iter()
            .map(|(grid, words)| self.validate(grid, words, strictness))
            .collect();
        log::info!(
            "validated {} grids: {} valid, {} from cache",
            reports.len(),
            reports.iter().filter(|report| report.valid).count(),
            self.hits - hits
        );
        reports
    }

    /// Drops every cached report.
    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    /// Returns how many lookups were answered from the cache.
    #[must_use]
    pub fn hits(&self) -> usize {
        self.hits
    }

    /// Returns how many lookups ran the checks.
    #[must_use]
    pub fn misses(&self) -> usize {
        self.misses
    }

    /// Returns the number of cached reports.
    #[must_use]
    pub fn cache_len(&self) -> usize {
        self.cache.len()
    }

    fn try_validate(
        &self,
        grid: &Grid,
        words: &WordCollection,
        strictness: Strictness,
        cache_key: ContentHash,
    ) -> Result<GridReport, ValidationError> {
        let input = CheckInput {
            grid,
            words,
            config: &self.config,
        };
        let mut analysis = GridAnalysis::new(strictness);
        for check in &self.checks {
            check.run(&input, &mut analysis)?;
        }
        let (findings, details) = analysis.into_parts();
        let score = score(&findings, &details, &self.config);
        Ok(GridReport {
            valid: findings.is_valid(),
            findings,
            score,
            details,
            cache_key,
        })
    }
}

#[expect(clippy::cast_precision_loss)]
fn score(findings: &Findings, details: &GridDetails, config: &ValidatorConfig) -> u8 {
    let mut raw = 100.0;
    raw -= ERROR_PENALTY * findings.errors.len() as f64;
    raw -= WARNING_PENALTY * findings.warnings.len() as f64;
    raw += SYMMETRY_WEIGHT * (details.horizontal_symmetry + details.vertical_symmetry);
    raw += BALANCE_WEIGHT * details.quadrant_balance;
    if !config.density_in_range(details.density) {
        raw -= DENSITY_PENALTY;
    }
    clamp_score(raw)
}

fn critical_report(err: &ValidationError, cache_key: ContentHash) -> GridReport {
    let mut findings = Findings::default();
    findings.push(Finding::new(
        FindingKind::Internal,
        Severity::Error,
        format!("validation failed: {err}"),
    ));
    GridReport {
        valid: false,
        findings,
        score: 0,
        details: GridDetails::default(),
        cache_key,
    }
}
