//! Encoding-aware file reader.
//!
//! Decodes a file's bytes under a named text encoding. Decoding never
//! fails: invalid sequences map the same way the usual platform decoders
//! map them (replacement characters for UTF-8, high bit cleared for ASCII).

use crate::error::ReadError;
use std::fs;
use std::path::Path;
use std::str::FromStr;

pub const DEFAULT_ENCODING: &str = "utf-8";

/// Supported text encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Encoding {
    #[default]
    Utf8,
    Ascii,
    Latin1,
    Utf16Le,
}

impl FromStr for Encoding {
    type Err = ReadError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name.to_ascii_lowercase().as_str() {
            "utf-8" | "utf8" => Ok(Encoding::Utf8),
            "ascii" | "us-ascii" => Ok(Encoding::Ascii),
            "latin1" | "binary" | "iso-8859-1" => Ok(Encoding::Latin1),
            "utf-16le" | "utf16le" | "ucs2" | "ucs-2" => Ok(Encoding::Utf16Le),
            _ => Err(ReadError::UnsupportedEncoding(name.to_string())),
        }
    }
}

impl Encoding {
    pub fn decode(self, bytes: &[u8]) -> String {
        match self {
            Encoding::Utf8 => String::from_utf8_lossy(bytes).into_owned(),
            Encoding::Ascii => bytes.iter().map(|&b| char::from(b & 0x7f)).collect(),
            Encoding::Latin1 => bytes.iter().map(|&b| char::from(b)).collect(),
            Encoding::Utf16Le => {
                let units: Vec<u16> = bytes
                    .chunks_exact(2)
                    .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
                    .collect();
                String::from_utf16_lossy(&units)
            }
        }
    }
}

/// Read `path` and decode it with the encoding named by `encoding`.
///
/// The encoding name is checked before touching the file system.
pub fn read(path: &Path, encoding: &str) -> Result<String, ReadError> {
    let encoding: Encoding = encoding.parse()?;
    let bytes = fs::read(path).map_err(|e| ReadError::from_io(path.to_path_buf(), e))?;
    Ok(encoding.decode(&bytes))
}
