#![doc(test(attr(deny(warnings))))]

//! Account Book keeps a personal income and expense ledger in a single JSON file and
//! drives it from a numbered text menu.

pub mod cli;
pub mod config;
pub mod errors;
pub mod ledger;
pub mod storage;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup debug log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::debug!("Account Book tracing initialized.");
    });
}
