use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

/// `Logger` adapter that forwards use-case messages to `tracing`.
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: "store::business", "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: "store::business", "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: "store::business", "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: "store::business", "{}", message);
    }
}
