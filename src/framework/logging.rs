use tracing_subscriber::{
    prelude::__tracing_subscriber_SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

#[allow(unused_imports)]
use tracing::{error, instrument, trace};

/// Logs go to stderr so they never fight the overlay drawing on stdout.
#[instrument]
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                EnvFilter::try_new("katla_overlay=info")
                    .expect("hard-coded env filter should be valid")
            }),
        )
        .init();

    trace!("finished");
}
