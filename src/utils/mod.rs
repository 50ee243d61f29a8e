use std::{io, sync::Once};

use tracing_subscriber::{fmt, EnvFilter};

static TRACING_INIT: Once = Once::new();

const DEFAULT_FILTER: &str = "account_book=warn";

/// Initializes the global tracing subscriber. Logs go to stderr so stdout stays the menu.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        fmt().with_env_filter(filter).with_writer(io::stderr).init();
    });
}
