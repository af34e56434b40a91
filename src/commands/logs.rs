use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Session logger that writes timestamped lines to
/// `<project>/.gmlview/logs/latest.log`.
///
/// Logging is best-effort: a project on read-only media just runs without a
/// log, and individual write failures are ignored.
pub struct SessionLogger {
    writer: BufWriter<fs::File>,
}

impl SessionLogger {
    /// Create a new session logger for the given project.
    ///
    /// - Creates `.gmlview/logs/` if it doesn't exist
    /// - Rotates `latest.log` → `session-{timestamp}.log`
    /// - Cleans up old sessions (keeps max 10)
    pub fn new(project_root: &Path) -> Option<Self> {
        let logs_dir = project_root.join(".gmlview").join("logs");
        fs::create_dir_all(&logs_dir).ok()?;

        let latest = logs_dir.join("latest.log");
        if latest.exists() {
            let ts = unix_timestamp();
            let rotated = logs_dir.join(format!("session-{ts}.log"));
            let _ = fs::rename(&latest, &rotated);
        }

        cleanup_old_sessions(&logs_dir);

        let file = fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&latest)
            .ok()?;

        let mut logger = Self {
            writer: BufWriter::new(file),
        };
        let header = format!(
            "=== gmlview Session — {} ===\n\n",
            format_timestamp(unix_timestamp())
        );
        let _ = logger.writer.write_all(header.as_bytes());
        Some(logger)
    }

    /// Write one timestamped, prefixed line and flush so the log stays
    /// readable while the tool runs.
    pub fn log(&mut self, prefix: &str, line: &str) {
        let ts = format_timestamp(unix_timestamp());
        let _ = self
            .writer
            .write_all(format!("[{ts}] [{prefix}] {line}\n").as_bytes());
        let _ = self.writer.flush();
    }
}

impl Drop for SessionLogger {
    fn drop(&mut self) {
        let footer = format!(
            "\n=== Session ended — {} ===\n",
            format_timestamp(unix_timestamp())
        );
        let _ = self.writer.write_all(footer.as_bytes());
        let _ = self.writer.flush();
    }
}

/// Keep only the 10 most recent `session-*.log` files.
fn cleanup_old_sessions(logs_dir: &Path) {
    let entries = match fs::read_dir(logs_dir) {
        Ok(rd) => rd,
        Err(_) => return,
    };

    let mut session_files: Vec<std::path::PathBuf> = entries
        .flatten()
        .map(|e| e.path())
        .filter(|p| {
            p.file_name()
                .map(|n| {
                    let name = n.to_string_lossy();
                    name.starts_with("session-") && name.ends_with(".log")
                })
                .unwrap_or(false)
        })
        .collect();

    // Timestamp is embedded in the name, so lexicographic = chronological
    session_files.sort();
    while session_files.len() > 10 {
        let oldest = session_files.remove(0);
        let _ = fs::remove_file(oldest);
    }
}

/// Get current Unix timestamp in seconds.
pub(crate) fn unix_timestamp() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}

/// Format a Unix timestamp as ISO 8601 UTC (e.g. "2025-06-15T10:30:00Z").
/// No chrono dependency — pure arithmetic.
pub(crate) fn format_timestamp(secs: u64) -> String {
    let s = secs as i64;

    let sec = s % 60;
    let min = (s / 60) % 60;
    let hour = (s / 3600) % 24;
    let mut days = s / 86400;

    // Convert days since epoch to year/month/day
    let mut year: i64 = 1970;
    loop {
        let days_in_year = if is_leap(year) { 366 } else { 365 };
        if days < days_in_year {
            break;
        }
        days -= days_in_year;
        year += 1;
    }

    let month_days: [i64; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
    let mut month: i64 = 1;
    for i in 0..12 {
        let mut d = month_days[i];
        if i == 1 && is_leap(year) {
            d += 1;
        }
        if days < d {
            break;
        }
        days -= d;
        month += 1;
    }
    let day = days + 1;

    format!("{year:04}-{month:02}-{day:02}T{hour:02}:{min:02}:{sec:02}Z")
}

fn is_leap(y: i64) -> bool {
    (y % 4 == 0 && y % 100 != 0) || y % 400 == 0
}
