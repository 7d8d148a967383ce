//! PNG header parsing
//!
//! Only the signature and the `IHDR` chunk are read; the first 24 bytes of a
//! well-formed PNG carry the image size.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Serialize;
use thiserror::Error;

const SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];
const HEADER_LEN: usize = 24;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl std::fmt::Display for Dimensions {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

// region:    --- Error
#[derive(Debug, Error)]
pub enum PngError {
    #[error("file too short for a PNG header")]
    Truncated,

    #[error("not a PNG file")]
    BadSignature,

    #[error("first chunk is not IHDR")]
    MissingIhdr,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
// endregion: --- Error

/// Dimensions from the leading bytes of a PNG file.
pub fn parse_dimensions(bytes: &[u8]) -> Result<Dimensions, PngError> {
    if bytes.len() < HEADER_LEN {
        return Err(PngError::Truncated);
    }
    if bytes[..8] != SIGNATURE {
        return Err(PngError::BadSignature);
    }
    if &bytes[12..16] != b"IHDR" {
        return Err(PngError::MissingIhdr);
    }

    let width = u32::from_be_bytes([bytes[16], bytes[17], bytes[18], bytes[19]]);
    let height = u32::from_be_bytes([bytes[20], bytes[21], bytes[22], bytes[23]]);
    Ok(Dimensions { width, height })
}

pub fn read_dimensions(path: &Path) -> Result<Dimensions, PngError> {
    let mut header = [0u8; HEADER_LEN];
    let mut file = File::open(path)?;
    let mut filled = 0;
    while filled < HEADER_LEN {
        let n = file.read(&mut header[filled..])?;
        if n == 0 {
            break;
        }
        filled += n;
    }
    parse_dimensions(&header[..filled])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header(width: u32, height: u32) -> Vec<u8> {
        let mut bytes = SIGNATURE.to_vec();
        bytes.extend_from_slice(&13u32.to_be_bytes());
        bytes.extend_from_slice(b"IHDR");
        bytes.extend_from_slice(&width.to_be_bytes());
        bytes.extend_from_slice(&height.to_be_bytes());
        bytes.extend_from_slice(&[8, 6, 0, 0, 0]);
        bytes
    }

    #[test]
    fn test_parse_dimensions() {
        let dims = parse_dimensions(&header(192, 192)).unwrap();
        assert_eq!(dims, Dimensions { width: 192, height: 192 });
        assert_eq!(dims.to_string(), "192x192");
        assert_eq!(parse_dimensions(&header(540, 960)).unwrap().height, 960);
    }

    #[test]
    fn test_rejects_non_png() {
        assert!(matches!(parse_dimensions(b"GIF89a"), Err(PngError::Truncated)));
        assert!(matches!(parse_dimensions(&[0u8; 32]), Err(PngError::BadSignature)));

        let mut bad_chunk = header(1, 1);
        bad_chunk[12..16].copy_from_slice(b"IDAT");
        assert!(matches!(parse_dimensions(&bad_chunk), Err(PngError::MissingIhdr)));
    }
}
