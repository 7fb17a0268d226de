use thiserror::Error;

use std::borrow::Cow;
use std::io;
use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, ConvertError>;
pub type InputResult<T> = std::result::Result<T, InputError>;
pub type SerializationResult<T> = std::result::Result<T, SerializationError>;

/// Exit status used when the input file cannot be read or decoded.
pub const EXIT_INPUT_FAILURE: i32 = 2;
/// Exit status used when the parsed file misses mandatory sections.
pub const EXIT_SCHEMA_FAILURE: i32 = 3;
/// Exit status used when the output document cannot be written.
pub const EXIT_OUTPUT_FAILURE: i32 = 1;
/// Exit status used for command line misuse, the same status `clap` exits with.
pub const EXIT_USAGE_FAILURE: i32 = 2;

/// Errors related to reading the timing file from disk.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("Failed to open file {}: {source}", .path.display())]
    FailedToOpenFile { source: io::Error, path: PathBuf },

    #[error("An I/O error has occurred while reading {}: {source}", .path.display())]
    FailedToRead { source: io::Error, path: PathBuf },

    #[error("Failed to decode {} as UTF-8 or with the legacy fallback: {source}", .path.display())]
    FailedToDecode {
        path: PathBuf,
        source: LegacyDecodeError,
    },
}

/// The legacy codec rejected bytes that were not valid UTF-8 either.
#[derive(Debug, Error)]
#[error("`{encoding}` rejected the input: {reason}")]
pub struct LegacyDecodeError {
    pub encoding: &'static str,
    pub reason: Cow<'static, str>,
}

/// The structural gate failed: at least one mandatory section is absent.
#[derive(Debug, Error)]
#[error(
    "Incomplete timing file. Missing: {}",
    list_missing(.missing_sections, .missing_base_session)
)]
pub struct SchemaError {
    pub missing_sections: Vec<&'static str>,
    pub missing_base_session: bool,
}

fn list_missing(sections: &[&'static str], missing_base_session: &bool) -> String {
    let mut missing = sections.to_vec();
    if *missing_base_session {
        missing.push(crate::schema::BASE_SESSION_SECTION);
    }
    missing.join(", ")
}

/// Errors related to rendering and writing the output document.
#[derive(Debug, Error)]
pub enum SerializationError {
    #[error("`serde_json` failed with error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Writing output failed with: {0}")]
    IO(#[from] io::Error),

    #[error("There is a directory at {}, refusing to overwrite", .path.display())]
    OutputIsDirectory { path: PathBuf },
}

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error(transparent)]
    Serialization(#[from] SerializationError),
}

impl ConvertError {
    /// Process exit status for this failure category.
    pub fn exit_code(&self) -> i32 {
        match self {
            ConvertError::Input(_) => EXIT_INPUT_FAILURE,
            ConvertError::Schema(_) => EXIT_SCHEMA_FAILURE,
            ConvertError::Serialization(_) => EXIT_OUTPUT_FAILURE,
        }
    }
}
