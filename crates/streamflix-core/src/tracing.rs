use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Default directive when `RUST_LOG` is unset: the service crate at `debug`,
/// sqlx statement logging at `warn`, everything else at `info`.
fn default_filter(service_target: &str) -> EnvFilter {
    EnvFilter::new(format!("info,{service_target}=debug,sqlx=warn"))
}

/// Install the process-wide JSON subscriber for `service_target` (the
/// service's crate name, e.g. `streamflix_catalog`).
///
/// Later calls leave the first subscriber in place.
pub fn init_tracing(service_target: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter(service_target));
    let installed = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().json().flatten_event(true).with_current_span(true))
        .try_init()
        .is_ok();
    if installed {
        ::tracing::debug!(service = service_target, "tracing subscriber installed");
    }
}
