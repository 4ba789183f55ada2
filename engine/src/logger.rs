use std::sync::OnceLock;

use chrono::Local;

static LOGGER: OnceLock<Logger> = OnceLock::new();

pub struct Logger {
    scope: Option<String>,
}

impl Logger {
    fn new(scope: Option<String>) -> Self {
        Self { scope }
    }

    pub fn log(&self, message: &str) {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
        match &self.scope {
            Some(scope) => println!("[{}][{}] {}", timestamp, scope, message),
            None => println!("[{}] {}", timestamp, message),
        }
    }
}

/// Installs the global logger with a scope prefix. Calling it again keeps
/// the first scope.
pub fn init_logger(scope: Option<String>) {
    LOGGER.get_or_init(|| Logger::new(scope));
}

pub fn log(message: &str) {
    LOGGER.get_or_init(|| Logger::new(None)).log(message);
}

#[macro_export]
macro_rules! log {
    ($($arg:tt)*) => {
        $crate::logger::log(&format!($($arg)*))
    };
}
