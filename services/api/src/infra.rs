use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Parses one `ID=VALUE` answer given on the command line.
pub(crate) fn parse_answer(raw: &str) -> Result<(u32, i64), String> {
    let (id, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected ID=VALUE, got '{raw}'"))?;

    let id = id
        .trim()
        .parse::<u32>()
        .map_err(|err| format!("question id '{}' is not a number ({err})", id.trim()))?;
    let value = value
        .trim()
        .parse::<i64>()
        .map_err(|err| format!("answer '{}' is not an integer ({err})", value.trim()))?;

    Ok((id, value))
}
