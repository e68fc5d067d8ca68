use std::path::Path;

use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;

type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Installs the global subscriber.
///
/// With a `log_file` the events go through a non-blocking file writer and the returned
/// guard must be held until exit so buffered lines get flushed. Otherwise they go to
/// stderr.
pub fn init(log_file: Option<&Path>, level: Level) -> Result<Option<WorkerGuard>, BoxError> {
    let builder = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false);

    let Some(path) = log_file else {
        builder.with_writer(std::io::stderr).try_init()?;
        return Ok(None);
    };

    let file_name = path
        .file_name()
        .ok_or_else(|| format!("Log file path {} has no file name", path.display()))?;
    let directory = path
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    let (writer, guard) =
        tracing_appender::non_blocking(tracing_appender::rolling::never(directory, file_name));
    builder.with_writer(writer).with_ansi(false).try_init()?;
    Ok(Some(guard))
}
