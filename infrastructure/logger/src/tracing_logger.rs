use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

const TARGET: &str = "outfit_recommender";

/// Forwards business log lines to `tracing` under a single target, so they
/// can be filtered with `RUST_LOG=outfit_recommender=debug`.
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: TARGET, "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: TARGET, "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: TARGET, "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: TARGET, "{}", message);
    }
}
