//! Logging init: file under XDG state dir, or graceful fallback to stderr.

use anyhow::Result;
use std::fs;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,apim=debug"))
}

/// Writer handed out per event: the log file, or stderr when cloning the
/// file handle fails.
enum LogWriter {
    File(std::fs::File),
    Stderr,
}

impl io::Write for LogWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            LogWriter::File(f) => f.write(buf),
            LogWriter::Stderr => io::stderr().lock().write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            LogWriter::File(f) => f.flush(),
            LogWriter::Stderr => io::stderr().lock().flush(),
        }
    }
}

struct FileMakeWriter(std::fs::File);

impl<'a> MakeWriter<'a> for FileMakeWriter {
    type Writer = LogWriter;

    fn make_writer(&'a self) -> Self::Writer {
        self.0
            .try_clone()
            .map(LogWriter::File)
            .unwrap_or(LogWriter::Stderr)
    }
}

fn open_log_file() -> Result<(std::fs::File, PathBuf)> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("apim")?;
    let log_dir = xdg_dirs.get_state_home().join("apim");
    fs::create_dir_all(&log_dir)?;
    let path = log_dir.join("apim.log");
    let file = fs::OpenOptions::new().create(true).append(true).open(&path)?;
    Ok((file, path))
}

/// Initialize structured logging to `~/.local/state/apim/apim.log`.
///
/// If the state dir is unwritable, logs go to stderr instead so the CLI
/// still runs. Never returns an error for that case; the subscriber is
/// installed either way.
pub fn init() {
    match open_log_file() {
        Ok((file, path)) => {
            let writer: BoxMakeWriter = BoxMakeWriter::new(FileMakeWriter(file));
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_writer(writer)
                .with_ansi(false)
                .init();
            tracing::info!("apim logging initialized at {}", path.display());
        }
        Err(err) => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_writer(std::io::stderr)
                .with_ansi(false)
                .init();
            tracing::warn!("log file unavailable ({err:#}); logging to stderr");
        }
    }
}
