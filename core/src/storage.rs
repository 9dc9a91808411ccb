use std::path::Path;

use log::{info, warn};

use crate::config::{ActivityKind, ConfigOverrides, SamplingConfig};
use crate::error::ConfigError;

/// Leser samplingskonfig fra disk (JSON, delvis tillatt).
/// Manglende felt arver fra sportens preset; finnes ikke filen, returneres presetet.
pub fn load_config(path: &str, kind: ActivityKind) -> Result<SamplingConfig, ConfigError> {
    if !Path::new(path).exists() {
        warn!("fant ikke konfig på {}, bruker standard for {}", path, kind);
        return Ok(kind.default_config());
    }

    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_string(),
        source,
    })?;
    let overrides: ConfigOverrides =
        serde_json::from_str(&contents).map_err(|source| ConfigError::Json {
            path: path.to_string(),
            source,
        })?;

    let cfg = overrides.apply(kind.default_config());
    cfg.validate()?;
    info!(
        "konfig lastet fra {} ({}: k={}, tak={} km/t, gulv={} km/t)",
        path, kind, cfg.max_samples, cfg.speed_ceiling_kmh, cfg.outlier_floor_kmh
    );
    Ok(cfg)
}

/// Lagrer konfig til disk som JSON (pretty-print). Ugyldig konfig skrives ikke.
pub fn save_config(cfg: &SamplingConfig, path: &str) -> Result<(), ConfigError> {
    cfg.validate()?;
    let json = serde_json::to_string_pretty(cfg).map_err(|source| ConfigError::Json {
        path: path.to_string(),
        source,
    })?;
    std::fs::write(path, json).map_err(|source| ConfigError::Io {
        path: path.to_string(),
        source,
    })?;
    info!("konfig lagret til {}", path);
    Ok(())
}
