use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: "CheatTech -- ", "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: "CheatTech -- ", "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: "CheatTech -- ", "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: "CheatTech -- ", "{}", message);
    }
}
