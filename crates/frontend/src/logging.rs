//! Log initialization
//!
//! Library code logs through `tracing`; these helpers route that output to
//! the browser console in a page context and to a formatted writer
//! elsewhere. Call once at startup.

/// Initialize tracing with console output for the browser
#[cfg(target_arch = "wasm32")]
pub fn init() {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;
    use tracing_web::MakeWebConsoleWriter;

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .without_time()
        .with_writer(MakeWebConsoleWriter::new());

    tracing_subscriber::registry().with(fmt_layer).init();
}

/// Initialize tracing with an env-filtered formatted writer
#[cfg(not(target_arch = "wasm32"))]
pub fn init() {
    use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .with(env_filter)
        .init();
}
