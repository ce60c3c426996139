//! Shared application state

use bugtriage_engine::TriageService;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::Arc;

/// State shared by every handler. The triage service is built once at
/// startup and only ever read afterwards.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<TriageService>,
    pub metrics: Option<PrometheusHandle>,
}

impl AppState {
    pub fn new(service: Arc<TriageService>, metrics: Option<PrometheusHandle>) -> Self {
        Self { service, metrics }
    }
}
