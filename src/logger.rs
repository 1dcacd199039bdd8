use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::sync::Mutex;

lazy_static::lazy_static! {
    static ref LOGGER: Mutex<Option<File>> = Mutex::new(None);
}

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Open the log file in append mode. Only the first successful call takes effect.
pub fn init(path: &Path) -> io::Result<()> {
    let mut logger = match LOGGER.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    };
    if logger.is_none() {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        *logger = Some(file);
    }
    Ok(())
}

pub fn log(message: &str) {
    if let Ok(mut guard) = LOGGER.lock()
        && let Some(file) = guard.as_mut()
    {
        let _ = writeln!(file, "{}", format_line(&timestamp(), message));
    }
}

fn timestamp() -> String {
    chrono::Local::now().format(TIMESTAMP_FORMAT).to_string()
}

fn format_line(timestamp: &str, message: &str) -> String {
    format!("[{}] {}", timestamp, message)
}
