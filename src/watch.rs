//! Watch mode for automatic re-resolution on config changes
//!
//! Provides file system watching with debouncing for the
//! `styl resolve --watch` command.

use notify::RecursiveMode;
use notify_debouncer_mini::{new_debouncer, DebouncedEventKind};
use std::path::{Path, PathBuf};
use std::sync::mpsc::channel;
use std::time::{Duration, Instant};

use crate::config::loader;
use crate::pipeline::PipelinePlan;

/// Error during watch mode
#[derive(Debug)]
pub enum WatchError {
    /// Failed to initialize file watcher
    WatcherInit(notify::Error),
    /// Failed to add watch path
    WatchPath(notify::Error),
    /// Channel receive error
    ChannelError(String),
    /// Config file not found
    ConfigNotFound(PathBuf),
}

impl std::fmt::Display for WatchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WatchError::WatcherInit(e) => write!(f, "Failed to initialize file watcher: {}", e),
            WatchError::WatchPath(e) => write!(f, "Failed to watch path: {}", e),
            WatchError::ChannelError(msg) => write!(f, "Watch channel error: {}", msg),
            WatchError::ConfigNotFound(path) => {
                write!(f, "Config file not found: {}", path.display())
            }
        }
    }
}

impl std::error::Error for WatchError {}

/// Options for watch mode
#[derive(Debug, Clone)]
pub struct WatchOptions {
    /// Debounce delay between change batches
    pub debounce: Duration,
    /// Clear terminal between resolutions
    pub clear_screen: bool,
    /// Print the full plan after each resolution
    pub verbose: bool,
}

impl Default for WatchOptions {
    fn default() -> Self {
        Self { debounce: Duration::from_millis(200), clear_screen: false, verbose: false }
    }
}

/// Clear the terminal screen
fn clear_screen() {
    // ANSI escape code to clear screen and move cursor to top-left
    print!("\x1B[2J\x1B[1;1H");
}

/// Format duration for display
fn format_duration(duration: Duration) -> String {
    let millis = duration.as_millis();
    if millis < 1000 {
        format!("{}ms", millis)
    } else {
        format!("{:.2}s", duration.as_secs_f64())
    }
}

/// Get current timestamp for logging
fn timestamp() -> String {
    use std::time::SystemTime;
    let now = SystemTime::now().duration_since(SystemTime::UNIX_EPOCH).unwrap_or_default();
    let secs = now.as_secs() % 86400; // seconds since midnight
    let hours = (secs / 3600) % 24;
    let minutes = (secs / 60) % 60;
    let seconds = secs % 60;
    format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
}

/// File name portion of a path for log lines
fn display_name(path: &Path) -> String {
    path.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_else(|| {
        path.display().to_string()
    })
}

/// Perform one load-and-resolve pass, printing the outcome.
///
/// Returns true when the config resolved cleanly.
fn resolve_once(config_path: &Path, options: &WatchOptions) -> bool {
    let start = Instant::now();

    match loader::load_config(Some(config_path)) {
        Ok(config) => {
            let plan = PipelinePlan::from_config(&config);
            println!(
                "[{}] Resolved {} ({}) - {}",
                timestamp(),
                display_name(config_path),
                format_duration(start.elapsed()),
                plan.summary()
            );
            if options.verbose {
                println!("{}", plan);
            }
            true
        }
        Err(e) => {
            eprintln!(
                "[{}] Resolution failed ({})",
                timestamp(),
                format_duration(start.elapsed())
            );
            eprintln!("{}", e);
            false
        }
    }
}

/// Check if a debounced event path refers to the watched config file.
///
/// Matched by file name: editors often replace the file on save, so the
/// event path may be a fresh inode under the same name.
fn is_config_event(event_path: &Path, config_path: &Path) -> bool {
    match (event_path.file_name(), config_path.file_name()) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}

/// Watch a config file and re-resolve on every change.
///
/// This function blocks and runs until interrupted (Ctrl+C). Each change
/// batch triggers an independent load-and-resolve pass; a pass that fails
/// is reported and watching continues.
///
/// # Arguments
/// * `config_path` - Config file to watch
/// * `options` - Watch mode options
///
/// # Returns
/// * `Ok(())` if watch mode exits cleanly (shouldn't happen normally)
/// * `Err(WatchError)` if watch setup fails
pub fn watch_config(config_path: &Path, options: WatchOptions) -> Result<(), WatchError> {
    if !config_path.exists() {
        return Err(WatchError::ConfigNotFound(config_path.to_path_buf()));
    }

    // Watch the containing directory, not the file itself: saves that
    // replace the file would otherwise drop the watch.
    let watch_dir = match config_path.parent() {
        Some(dir) if dir.as_os_str().is_empty() => PathBuf::from("."),
        Some(dir) => dir.to_path_buf(),
        None => PathBuf::from("."),
    };

    // Create channel for debounced events
    let (tx, rx) = channel();

    // Create debounced watcher
    let mut debouncer = new_debouncer(options.debounce, tx).map_err(WatchError::WatcherInit)?;
    debouncer
        .watcher()
        .watch(&watch_dir, RecursiveMode::NonRecursive)
        .map_err(WatchError::WatchPath)?;

    // Initial resolution
    if options.clear_screen {
        clear_screen();
    }
    let mut last_ok = resolve_once(config_path, &options);
    println!("[{}] Watching {} for changes...", timestamp(), config_path.display());

    // Watch loop
    loop {
        match rx.recv() {
            Ok(Ok(events)) => {
                let changed = events.iter().any(|e| {
                    matches!(e.kind, DebouncedEventKind::Any)
                        && is_config_event(&e.path, config_path)
                });

                if changed {
                    if options.clear_screen {
                        clear_screen();
                    }
                    println!("[{}] Changed: {}", timestamp(), display_name(config_path));

                    let ok = resolve_once(config_path, &options);
                    if ok && !last_ok {
                        println!("[{}] Fixed: {}", timestamp(), display_name(config_path));
                    }
                    last_ok = ok;

                    println!(
                        "[{}] Watching {} for changes...",
                        timestamp(),
                        config_path.display()
                    );
                }
            }
            Ok(Err(error)) => {
                // Watch error (non-fatal) - log but continue watching
                eprintln!("[{}] Watch error: {:?}", timestamp(), error);
                eprintln!("[{}] Continuing to watch...", timestamp());
            }
            Err(e) => {
                return Err(WatchError::ChannelError(e.to_string()));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_watch_options_default() {
        let options = WatchOptions::default();
        assert_eq!(options.debounce, Duration::from_millis(200));
        assert!(!options.clear_screen);
        assert!(!options.verbose);
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(Duration::from_millis(50)), "50ms");
        assert_eq!(format_duration(Duration::from_millis(999)), "999ms");
        assert_eq!(format_duration(Duration::from_millis(1000)), "1.00s");
        assert_eq!(format_duration(Duration::from_millis(1500)), "1.50s");
    }

    #[test]
    fn test_is_config_event() {
        let config = Path::new("/project/styl.toml");
        assert!(is_config_event(Path::new("/project/styl.toml"), config));
        assert!(is_config_event(Path::new("/elsewhere/styl.toml"), config));
        assert!(!is_config_event(Path::new("/project/other.toml"), config));
        assert!(!is_config_event(Path::new("/project"), config));
    }

    #[test]
    fn test_display_name() {
        assert_eq!(display_name(Path::new("/project/styl.toml")), "styl.toml");
        assert_eq!(display_name(Path::new("styl.json5")), "styl.json5");
    }

    #[test]
    fn test_watch_error_config_not_found() {
        let result =
            watch_config(Path::new("/nonexistent/styl.toml"), WatchOptions::default());
        assert!(matches!(result, Err(WatchError::ConfigNotFound(_))));
    }

    #[test]
    fn test_resolve_once_valid_config() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join("styl.toml");
        fs::write(&config_path, "css = [\"main.css\"]").unwrap();

        assert!(resolve_once(&config_path, &WatchOptions::default()));
    }

    #[test]
    fn test_resolve_once_invalid_config() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join("styl.toml");
        fs::write(&config_path, "css = \"not-an-array\"").unwrap();

        assert!(!resolve_once(&config_path, &WatchOptions::default()));
    }
}
