use std::{
    cmp::Ordering,
    env, fs,
    path::{Path, PathBuf},
    time::Duration,
};

use anyhow::{Context, anyhow};
use glowcard_core::carousel::DragTracker;
use glowcard_core::catalog::{CatalogSourceOptions, SampleCatalogOptions};
use glowcard_core::session::BrowseOptions;
use glowcard_model::BreakpointThresholds;
use serde::{Deserialize, Serialize};

use super::catalog::CatalogConfig;
use crate::error::ConfigLoadError;

/// Environment variable naming a TOML or JSON config file.
pub const CONFIG_PATH_ENV: &str = "GLOWCARD_CONFIG_PATH";
/// Environment variable holding an inline JSON config.
pub const CONFIG_JSON_ENV: &str = "GLOWCARD_CONFIG_JSON";

/// Source that produced the browse configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum BrowseConfigSource {
    #[default]
    Default,
    EnvPath(PathBuf),
    EnvInline,
    File(PathBuf),
}

/// Tunables for a browsing session. Every field is optional in the source
/// file; missing ones keep their defaults.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct BrowseConfig {
    /// Cards per page when pagination is on.
    pub page_size: usize,
    /// Off switches to the continuous layout, capped at twelve cards.
    pub pagination_enabled: bool,
    /// Quiet period before a typed search term is applied.
    pub search_debounce_ms: u64,
    /// Navigation lock after each carousel step. Zero disables it.
    pub transition_lock_ms: u64,
    /// Horizontal pointer travel that counts as one carousel step.
    pub drag_threshold_px: f32,
    pub breakpoints: BreakpointThresholds,
    pub catalog: CatalogConfig,
    /// Size of the sample catalog served when live data is unavailable.
    pub samples: SampleCatalogOptions,
}

impl Default for BrowseConfig {
    fn default() -> Self {
        Self {
            page_size: 9,
            pagination_enabled: true,
            search_debounce_ms: 300,
            transition_lock_ms: 500,
            drag_threshold_px: 50.0,
            breakpoints: BreakpointThresholds::default(),
            catalog: CatalogConfig::default(),
            samples: SampleCatalogOptions::default(),
        }
    }
}

impl BrowseConfig {
    /// Load configuration using environment variables.
    /// Evaluation order:
    /// 1) `$GLOWCARD_CONFIG_PATH` (TOML or JSON file),
    /// 2) `$GLOWCARD_CONFIG_JSON` (inline JSON),
    /// 3) the first default file found in the working directory,
    /// 4) defaults.
    ///
    /// The result is validated before it is returned.
    pub fn load_from_env() -> anyhow::Result<(Self, BrowseConfigSource)> {
        if let Ok(path_str) = env::var(CONFIG_PATH_ENV)
            && !path_str.trim().is_empty()
        {
            let path = PathBuf::from(path_str);
            let config = Self::load_from_file(&path)?;
            return Ok((config, BrowseConfigSource::EnvPath(path)));
        }

        if let Ok(raw) = env::var(CONFIG_JSON_ENV)
            && !raw.trim().is_empty()
        {
            let parsed = Self::parse_json(&raw)
                .and_then(Self::validated)
                .with_context(|| format!("failed to parse {CONFIG_JSON_ENV}"))?;
            return Ok((parsed, BrowseConfigSource::EnvInline));
        }

        if let Some(path) = Self::find_default_file(Path::new(".")) {
            let config = Self::load_from_file(&path)?;
            return Ok((config, BrowseConfigSource::File(path)));
        }

        tracing::debug!("no glowcard config found; using defaults");
        Ok((Self::default(), BrowseConfigSource::Default))
    }

    pub fn load_from_file(path: &Path) -> anyhow::Result<Self> {
        let contents = fs::read_to_string(path).with_context(|| {
            format!("failed to read glowcard config from {}", path.display())
        })?;

        let parsed = match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::parse_json(&contents).with_context(|| {
                format!("invalid glowcard config {}", path.display())
            }),
            Some("toml") | Some("tml") => {
                toml::from_str(&contents).map_err(|err| {
                    anyhow!(
                        "invalid glowcard config {}: {}",
                        path.display(),
                        err
                    )
                })
            }
            _ => Self::parse_from_str(&contents, &path.display().to_string()),
        }?;

        let config = Self::validated(parsed).with_context(|| {
            format!("rejected glowcard config {}", path.display())
        })?;
        tracing::info!(path = %path.display(), "loaded glowcard config");
        Ok(config)
    }

    pub fn parse_from_str(
        contents: &str,
        origin: &str,
    ) -> anyhow::Result<Self> {
        // TOML first, then JSON.
        toml::from_str(contents).or_else(|toml_err| {
            serde_json::from_str(contents).map_err(|json_err| {
                anyhow!(
                    "failed to parse glowcard config {}: toml error: {}; json error: {}",
                    origin,
                    toml_err,
                    json_err
                )
            })
        })
    }

    pub fn parse_json(raw: &str) -> anyhow::Result<Self> {
        serde_json::from_str(raw)
            .map_err(|err| anyhow!("invalid glowcard config json: {err}"))
    }

    pub fn validate(&self) -> Result<(), ConfigLoadError> {
        if self.page_size == 0 {
            return Err(ConfigLoadError::ZeroPageSize);
        }
        if !self.drag_threshold_px.is_finite() || self.drag_threshold_px <= 0.0
        {
            return Err(ConfigLoadError::InvalidDragThreshold(
                self.drag_threshold_px,
            ));
        }
        let BreakpointThresholds {
            medium_min_width,
            wide_min_width,
        } = self.breakpoints;
        // NaN widths compare as unordered and are rejected too.
        if medium_min_width.partial_cmp(&wide_min_width) != Some(Ordering::Less) {
            return Err(ConfigLoadError::InvalidBreakpoints {
                medium: medium_min_width,
                wide: wide_min_width,
            });
        }
        self.catalog.validate()
    }

    fn validated(self) -> anyhow::Result<Self> {
        self.validate()?;
        Ok(self)
    }

    pub fn search_debounce(&self) -> Duration {
        Duration::from_millis(self.search_debounce_ms)
    }

    pub fn transition_lock(&self) -> Duration {
        Duration::from_millis(self.transition_lock_ms)
    }

    pub fn browse_options(&self) -> BrowseOptions {
        BrowseOptions {
            page_size: self.page_size,
            pagination_enabled: self.pagination_enabled,
            transition_lock: self.transition_lock(),
        }
    }

    pub fn catalog_source_options(&self) -> CatalogSourceOptions {
        CatalogSourceOptions {
            pagination_enabled: self.pagination_enabled,
            cache_ttl: self.catalog.cache_ttl(),
            samples: self.samples,
        }
    }

    pub fn drag_tracker(&self) -> DragTracker {
        DragTracker::new(self.drag_threshold_px)
    }

    fn find_default_file(dir: &Path) -> Option<PathBuf> {
        const CANDIDATES: &[&str] = &[
            "glowcard.toml",
            "glowcard.json",
            "config/glowcard.toml",
            "config/glowcard.json",
        ];

        CANDIDATES
            .iter()
            .map(|candidate| dir.join(candidate))
            .find(|path| path.exists())
    }
}
