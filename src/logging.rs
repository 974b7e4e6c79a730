use chrono::Local;
use std::fs::{create_dir_all, File, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::Mutex;

lazy_static::lazy_static! {
    static ref LOG_SINK: Mutex<Option<File>> = Mutex::new(None);
}

/// Open a timestamped log file under the cache directory and route
/// all subsequent log lines to it. The TUI owns stdout and stderr,
/// so nothing is ever printed there.
pub fn init_logging() -> Result<(), Box<dyn std::error::Error>> {
    let log_dir = dirs::cache_dir()
        .unwrap_or_else(|| PathBuf::from("/tmp"))
        .join("voyage-cli")
        .join("logs");

    create_dir_all(&log_dir)?;

    let path = log_dir.join(format!("voyage-{}.log", Local::now().format("%Y%m%d-%H%M%S")));
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    *LOG_SINK.lock().unwrap() = Some(file);

    log_info(&format!("Logging to {}", path.display()));

    Ok(())
}

pub fn log_error(message: &str) {
    write_line("ERROR", message);
}

pub fn log_info(message: &str) {
    write_line("INFO", message);
}

pub fn log_debug(message: &str) {
    write_line("DEBUG", message);
}

pub fn log_panic_info(info: &std::panic::PanicInfo) {
    let location = info
        .location()
        .map(|l| format!("{}:{}:{}", l.file(), l.line(), l.column()))
        .unwrap_or_else(|| "unknown location".to_string());

    let payload = if let Some(s) = info.payload().downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = info.payload().downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_string()
    };

    log_error(&format!("panic at {}: {}", location, payload));
}

fn write_line(level: &str, message: &str) {
    if let Some(file) = LOG_SINK.lock().unwrap().as_mut() {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
        let _ = writeln!(file, "[{}] {} - {}", timestamp, level, message);
    }
}
