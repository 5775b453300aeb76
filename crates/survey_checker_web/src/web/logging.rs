//! `tracing` output to the browser console.

use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_wasm::{WASMLayer, WASMLayerConfigBuilder};

/// Install the global subscriber. `None` leaves logging off; a second call
/// keeps the first subscriber.
pub(super) fn init(max_level: Option<Level>) {
    let Some(level) = max_level else {
        return;
    };
    let cfg = WASMLayerConfigBuilder::new()
        .set_max_level(level)
        .set_report_logs_in_timings(false)
        .build();
    let _ = tracing_subscriber::registry()
        .with(WASMLayer::new(cfg))
        .try_init();
}
