use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

const MAX_LOG_BYTES: u64 = 8 * 1024 * 1024;

fn log_path(name: &str) -> Option<PathBuf> {
    let dir = dirs::home_dir()?.join(".law-aid");
    let _ = std::fs::create_dir_all(&dir);
    Some(dir.join(name))
}

fn append(name: &str, msg: &str) {
    let Some(path) = log_path(name) else {
        let _ = writeln!(std::io::stderr(), "{msg}");
        return;
    };

    // One rotated copy is enough history for a client-side log
    if let Ok(meta) = std::fs::metadata(&path) {
        if meta.len() >= MAX_LOG_BYTES {
            let _ = std::fs::rename(&path, path.with_extension("log.old"));
        }
    }

    match OpenOptions::new().create(true).append(true).open(&path) {
        Ok(mut f) => {
            let ts = SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_secs())
                .unwrap_or(0);
            let _ = writeln!(f, "[{}] {}", ts, msg);
        }
        Err(_) => {
            let _ = writeln!(std::io::stderr(), "{msg}");
        }
    }
}

/// Append to the error log. The terminal is in raw mode while the app
/// runs, so files are the only useful sink.
pub fn log_error(msg: &str) {
    append("error.log", msg);
}

/// Append to the info log (submitted questions, startup details).
pub fn log_info(msg: &str) {
    append("info.log", msg);
}
