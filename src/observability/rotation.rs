//! Append-only trace file with size-based rotation.
//!
//! Before each line is appended, the writer checks whether the line would push
//! the file past [`RotationPolicy::max_bytes`]. If so the file is renamed to a
//! timestamped backup (`<stem>.<UTC timestamp>.<ext>`) and a fresh file is
//! started. Only the newest [`RotationPolicy::backups`] backups are kept.

use chrono::Utc;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Default rotation threshold (5 MiB).
pub const DEFAULT_MAX_BYTES: u64 = 5 * 1024 * 1024;

/// Default number of backups kept.
pub const DEFAULT_BACKUPS: usize = 2;

/// Limits applied by [`RotatingFile`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotationPolicy {
    /// Size the file may reach before it is rotated.
    pub max_bytes: u64,
    /// Rotated files kept next to the live one; `0` discards them.
    pub backups: usize,
}

impl Default for RotationPolicy {
    fn default() -> Self {
        Self {
            max_bytes: DEFAULT_MAX_BYTES,
            backups: DEFAULT_BACKUPS,
        }
    }
}

/// Line-oriented writer for one trace file.
///
/// The handle is opened lazily and shared behind a `Mutex`, so the writer can
/// sit inside an exporter that is called from any thread.
pub struct RotatingFile {
    path: PathBuf,
    policy: RotationPolicy,
    handle: Mutex<Option<File>>,
}

impl RotatingFile {
    #[must_use]
    pub const fn new(path: PathBuf, policy: RotationPolicy) -> Self {
        Self {
            path,
            policy,
            handle: Mutex::new(None),
        }
    }

    /// Appends `line` followed by a newline, rotating first when needed.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error when the file cannot be rotated, opened
    /// or written, or when a previous writer panicked while holding the lock.
    pub fn append_line(&self, line: &str) -> io::Result<()> {
        let mut handle = self
            .handle
            .lock()
            .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("trace file lock poisoned: {e}")))?;

        let incoming = line.len() as u64 + 1;
        let current = fs::metadata(&self.path).map(|m| m.len()).unwrap_or(0);
        if current > 0 && current + incoming > self.policy.max_bytes {
            *handle = None;
            self.rotate()?;
        }

        if handle.is_none() {
            *handle = Some(OpenOptions::new().create(true).append(true).open(&self.path)?);
        }
        let Some(file) = handle.as_mut() else {
            return Err(io::Error::new(io::ErrorKind::Other, "trace file unavailable"));
        };

        writeln!(file, "{line}")?;
        file.flush()
    }

    /// Moves the live file aside and prunes old backups.
    fn rotate(&self) -> io::Result<()> {
        if self.path.exists() {
            let stamp = Utc::now().format("%Y%m%dT%H%M%S%.6f").to_string();
            let mut backup = self.backup_path(&stamp);
            let mut attempt = 1;
            while backup.exists() {
                backup = self.backup_path(&format!("{stamp}_{attempt:03}"));
                attempt += 1;
            }
            fs::rename(&self.path, backup)?;
        }
        self.prune()
    }

    fn backup_path(&self, stamp: &str) -> PathBuf {
        let stem = self.stem();
        let name = match self.path.extension().and_then(|e| e.to_str()) {
            Some(ext) => format!("{stem}.{stamp}.{ext}"),
            None => format!("{stem}.{stamp}"),
        };
        self.path.with_file_name(name)
    }

    fn stem(&self) -> &str {
        self.path.file_stem().and_then(|s| s.to_str()).unwrap_or("trace")
    }

    /// Backups of this file, oldest first.
    ///
    /// Timestamps sort lexicographically, so name order is age order.
    #[must_use]
    pub fn backups(&self) -> Vec<PathBuf> {
        let dir = self.path.parent().unwrap_or_else(|| Path::new("."));
        let prefix = format!("{}.", self.stem());
        let live = self.path.file_name();

        let Ok(entries) = fs::read_dir(dir) else {
            return vec![];
        };
        let mut backups: Vec<PathBuf> = entries
            .filter_map(Result::ok)
            .map(|entry| entry.path())
            .filter(|path| path.file_name() != live)
            .filter(|path| {
                path.file_name()
                    .and_then(|name| name.to_str())
                    .is_some_and(|name| name.starts_with(&prefix))
            })
            .collect();
        backups.sort();
        backups
    }

    fn prune(&self) -> io::Result<()> {
        let backups = self.backups();
        let excess = backups.len().saturating_sub(self.policy.backups);
        for old in &backups[..excess] {
            fs::remove_file(old)?;
        }
        Ok(())
    }
}

impl std::fmt::Debug for RotatingFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RotatingFile")
            .field("path", &self.path)
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn writer(dir: &TempDir, max_bytes: u64, backups: usize) -> RotatingFile {
        RotatingFile::new(
            dir.path().join("fruitstand-otlp.json"),
            RotationPolicy { max_bytes, backups },
        )
    }

    #[test]
    fn appends_lines() {
        let dir = TempDir::new().unwrap();
        let file = writer(&dir, 1024, 2);
        file.append_line("{\"a\":1}").unwrap();
        file.append_line("{\"b\":2}").unwrap();

        let contents = fs::read_to_string(dir.path().join("fruitstand-otlp.json")).unwrap();
        assert_eq!(contents, "{\"a\":1}\n{\"b\":2}\n");
        assert!(file.backups().is_empty());
    }

    #[test]
    fn rotates_when_line_would_overflow() {
        let dir = TempDir::new().unwrap();
        let file = writer(&dir, 16, 2);
        file.append_line("0123456789").unwrap();
        file.append_line("abcdefghij").unwrap();

        let live = fs::read_to_string(dir.path().join("fruitstand-otlp.json")).unwrap();
        assert_eq!(live, "abcdefghij\n");

        let backups = file.backups();
        assert_eq!(backups.len(), 1);
        assert_eq!(fs::read_to_string(&backups[0]).unwrap(), "0123456789\n");
        let name = backups[0].file_name().unwrap().to_str().unwrap();
        assert!(name.starts_with("fruitstand-otlp.") && name.ends_with(".json"));
    }

    #[test]
    fn keeps_only_newest_backups() {
        let dir = TempDir::new().unwrap();
        let file = writer(&dir, 8, 2);
        for line in ["first..", "second.", "third..", "fourth."] {
            file.append_line(line).unwrap();
        }

        let backups = file.backups();
        assert_eq!(backups.len(), 2);
        assert_eq!(fs::read_to_string(&backups[0]).unwrap(), "second.\n");
        assert_eq!(fs::read_to_string(&backups[1]).unwrap(), "third..\n");
    }

    #[test]
    fn oversized_first_line_is_still_written() {
        let dir = TempDir::new().unwrap();
        let file = writer(&dir, 4, 1);
        file.append_line("longer than four").unwrap();
        assert!(file.backups().is_empty());
    }
}
