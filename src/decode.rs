use crate::err::{InputError, InputResult, LegacyDecodeError};

use encoding::{DecoderTrap, EncodingRef};
use log::{debug, trace};

use std::fs::File;
use std::io::Read;
use std::path::Path;

const UTF8_BOM: char = '\u{feff}';

/// Reads the whole file at `path`.
///
/// The handle is closed before this returns; everything downstream works on the bytes in memory.
pub fn read_raw(path: impl AsRef<Path>) -> InputResult<Vec<u8>> {
    let path = path.as_ref();

    let mut f = File::open(path).map_err(|source| InputError::FailedToOpenFile {
        source,
        path: path.to_path_buf(),
    })?;

    let mut raw = Vec::new();
    f.read_to_end(&mut raw)
        .map_err(|source| InputError::FailedToRead {
            source,
            path: path.to_path_buf(),
        })?;

    trace!("Read {} bytes from {}", raw.len(), path.display());
    Ok(raw)
}

/// Decodes the contents of `path`, see [`decode_bytes`].
pub fn decode_file_contents(
    raw: Vec<u8>,
    path: &Path,
    ansi_codec: EncodingRef,
) -> InputResult<String> {
    decode_bytes(raw, ansi_codec).map_err(|source| InputError::FailedToDecode {
        path: path.to_path_buf(),
        source,
    })
}

/// Decodes `raw` as UTF-8, falling back to `ansi_codec` when the bytes are not valid UTF-8.
///
/// A leading byte order mark is dropped.
pub fn decode_bytes(
    raw: Vec<u8>,
    ansi_codec: EncodingRef,
) -> Result<String, LegacyDecodeError> {
    let mut text = match String::from_utf8(raw) {
        Ok(text) => {
            debug!("Input decoded as UTF-8");
            text
        }
        Err(e) => {
            debug!(
                "Input is not valid UTF-8 ({}), falling back to `{}`",
                e.utf8_error(),
                ansi_codec.name()
            );
            ansi_codec
                .decode(e.as_bytes(), DecoderTrap::Strict)
                .map_err(|reason| LegacyDecodeError {
                    encoding: ansi_codec.name(),
                    reason,
                })?
        }
    };

    if text.starts_with(UTF8_BOM) {
        text.remove(0);
    }

    Ok(text)
}
