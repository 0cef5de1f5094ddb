use std::sync::OnceLock;
use chrono::Local;

static LOGGER: OnceLock<Logger> = OnceLock::new();

pub struct Logger {
    prefix: Option<String>,
}

impl Logger {
    fn new(prefix: Option<String>) -> Self {
        Self { prefix }
    }

    pub fn log(&self, file: &str, line: u32, message: &str) {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S%.3f").to_string();
        let current = std::thread::current();
        let thread_name = current.name().unwrap_or("unnamed");
        eprintln!(
            "{}",
            format_line(&timestamp, self.prefix.as_deref(), thread_name, file, line, message)
        );
    }
}

/// `[timestamp][prefix][thread][file:line] message`, prefix omitted when unset.
/// Written to stderr; stdout carries only the game transcript.
pub fn format_line(
    timestamp: &str,
    prefix: Option<&str>,
    thread_name: &str,
    file: &str,
    line: u32,
    message: &str,
) -> String {
    let file_name = file.rsplit(['/', '\\']).next().unwrap_or(file);
    match prefix {
        Some(prefix) => format!(
            "[{}][{}][{}][{}:{}] {}",
            timestamp, prefix, thread_name, file_name, line, message
        ),
        None => format!(
            "[{}][{}][{}:{}] {}",
            timestamp, thread_name, file_name, line, message
        ),
    }
}

pub fn init_logger(prefix: Option<String>) {
    LOGGER.get_or_init(|| Logger::new(prefix));
}

/// Silently drops messages until `init_logger` runs, so library code and
/// tests can log without setting anything up.
pub fn log(file: &str, line: u32, message: &str) {
    if let Some(logger) = LOGGER.get() {
        logger.log(file, line, message);
    }
}

#[macro_export]
macro_rules! log {
    ($($arg:tt)*) => {
        $crate::logger::log(file!(), line!(), &format!($($arg)*))
    };
}
