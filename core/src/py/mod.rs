use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::wrap_pyfunction;

use crate::api::downsample_json_observed;
use crate::metrics::DEFAULT_METRICS;

// ──────────────────────────────────────────────────────────────────────────────
// PyO3-MODUL
// ──────────────────────────────────────────────────────────────────────────────

/// JSON inn (str) -> JSON ut (str). Teller opp prosessens standard-metrics.
#[pyfunction]
fn downsample_json(json_in: &str) -> PyResult<String> {
    downsample_json_observed(json_in, &DEFAULT_METRICS).map_err(|e| PyValueError::new_err(e.to_string()))
}

/// Prometheus tekstformat for tellerne over.
#[pyfunction]
fn metrics_text() -> PyResult<String> {
    DEFAULT_METRICS
        .render()
        .map_err(|e| PyValueError::new_err(format!("failed to encode metrics: {e}")))
}

#[pymodule]
fn pathsample_core(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(downsample_json, m)?)?;
    m.add_function(wrap_pyfunction!(metrics_text, m)?)?;
    Ok(())
}
