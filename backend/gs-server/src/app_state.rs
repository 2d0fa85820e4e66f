use gs_control::{ControlPlane, ShutdownCoordinator};
use gs_core::ContainerRef;

use std::time::Duration;

use metrics_exporter_prometheus::PrometheusHandle;

/// Shared state handed to every route
#[derive(Clone)]
pub struct AppState {
    pub control: ControlPlane,
    pub shutdown: ShutdownCoordinator,
    pub container: ContainerRef,
    /// None when another recorder was already installed
    pub metrics: Option<PrometheusHandle>,
    /// Interval between SSE keep-alive comments
    pub keep_alive: Duration,
}
