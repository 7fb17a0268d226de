use crate::err::{SerializationError, SerializationResult};

use log::debug;
use serde::Serialize;

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::Path;

/// Destination value meaning "write to standard output".
pub const STDOUT_SENTINEL: &str = "stdout";

/// Renders `value` as JSON. Non-ASCII text is written as is, never `\u` escaped.
pub fn to_json_string<T: Serialize>(value: &T, indent: bool) -> SerializationResult<String> {
    let rendered = if indent {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };

    Ok(rendered)
}

/// Writes `rendered` to `destination`, or to stdout for [`STDOUT_SENTINEL`].
///
/// Files are created (with parent directories) or overwritten, and closed before this returns.
pub fn write_output(destination: &str, rendered: &str) -> SerializationResult<()> {
    if destination == STDOUT_SENTINEL {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        writeln!(handle, "{}", rendered)?;
        handle.flush()?;
        return Ok(());
    }

    let mut f = create_output_file(Path::new(destination))?;
    f.write_all(rendered.as_bytes())?;
    f.flush()?;

    debug!("Wrote {} bytes to {}", rendered.len(), destination);
    Ok(())
}

fn create_output_file(p: &Path) -> SerializationResult<File> {
    if p.is_dir() {
        return Err(SerializationError::OutputIsDirectory {
            path: p.to_path_buf(),
        });
    }

    if let Some(parent) = p.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    Ok(File::create(p)?)
}
