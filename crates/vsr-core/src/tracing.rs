use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used when `RUST_LOG` is unset: the service's own target and the
/// request trace layer at `debug`, everything else at `info`.
pub fn default_filter(service_target: &str) -> String {
    format!("info,tower_http=debug,{service_target}=debug")
}

/// Install the JSON stdout subscriber for `service_target` (the service
/// crate's module path, e.g. `vsr_apiserver`). Later calls are no-ops.
pub fn init_tracing(service_target: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(service_target)));
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .json()
                .with_target(true)
                .with_current_span(true)
                .with_span_list(false)
                .flatten_event(true),
        )
        .try_init();
}
