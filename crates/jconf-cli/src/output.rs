//! Output sink for the rendered graph.

use std::io::Write;

use tracing::info;

use jconf_error::{Error, Result};

/// Write `dot` to `path`, or to stdout when no path is given.
pub fn write_output(path: Option<&str>, dot: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, dot).map_err(|e| {
                Error::from(e)
                    .with_operation("output::write_output")
                    .with_context("path", path)
            })?;
            info!(path, "output written");
        }
        None => {
            let stdout = std::io::stdout();
            let mut lock = stdout.lock();
            lock.write_all(dot.as_bytes())?;
            lock.flush()?;
        }
    }
    Ok(())
}
