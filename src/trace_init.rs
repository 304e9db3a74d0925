#[cfg(feature = "cli")]
use std::sync::Once;

#[cfg(feature = "cli")]
static INIT: Once = Once::new();

/// Install the stderr subscriber. Filter from `RUST_LOG`, default
/// `thaiphon_dict=info`.
#[cfg(feature = "cli")]
pub fn init_tracing(json: bool) {
    use tracing_subscriber::EnvFilter;

    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("thaiphon_dict=info"));
        let builder = tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_env_filter(filter);
        if json {
            builder
                .json()
                .with_span_events(tracing_subscriber::fmt::format::FmtSpan::CLOSE)
                .init();
        } else {
            builder.init();
        }
    });
}

#[cfg(not(feature = "cli"))]
pub fn init_tracing(_json: bool) {}
