use std::cell::Cell;

use survey_checker::prelude::*;
use tracing::{debug, error, info, warn};

mod app;
mod dom;
mod host;
mod load;
mod logging;

pub use app::CheckerApp;
pub use dom::DomFocus;
pub use host::WebHost;

thread_local! {
    static STARTED: Cell<bool> = const { Cell::new(false) };
}

pub fn start() {
    console_error_panic_hook::set_once();

    // Logging must be up before a bad config can be reported, and its level
    // comes from the config, so parse first and warn afterwards.
    let parsed = match dom::page_config_text() {
        Ok(raw) => raw.map(|raw| BootConfig::from_json(&raw)),
        Err(e) => Some(Err(e)),
    };
    let config = match &parsed {
        Some(Ok(cfg)) => cfg.clone(),
        _ => BootConfig::default(),
    };
    logging::init(config.max_level());
    if let Some(Err(e)) = parsed {
        warn!("ignoring page config: {e}");
    }

    if let Err(e) = load::on_page_load(move || {
        boot(config);
    }) {
        error!("cannot wait for page load: {e}");
    }
}

/// Guard, then app. Returns `false` when an earlier call already did it.
fn boot(config: BootConfig) -> bool {
    if STARTED.with(|s| s.replace(true)) {
        debug!("bootstrap already started");
        return false;
    }

    let mut bootstrap = Bootstrap::new(config);
    match bootstrap.run(&mut WebHost, CheckerApp) {
        Ok(state) => info!(?state, "bootstrap done"),
        Err(e) => error!("bootstrap failed: {e}"),
    }
    true
}
