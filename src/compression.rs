//! Detection and decoding of gzip-compressed NIfTI buffers.
//!
//! Files named `.nii.gz` are plain gzip streams around a regular `.nii`
//! file. Since this crate works on in-memory buffers rather than paths,
//! compression is detected from the leading bytes instead of the file
//! extension.

use crate::error::{NiftiError, Result};
use flate2::read::MultiGzDecoder;
use std::borrow::Cow;
use std::io::Read;

/// First byte of the gzip magic number.
pub const GZIP_MAGIC_1: u8 = 31;
/// Second byte of the gzip magic number.
pub const GZIP_MAGIC_2: u8 = 139;

/// Check whether the buffer looks like a gzip stream.
///
/// Matching either of the two magic bytes is enough, so a buffer which
/// only agrees with gzip in its first or second byte is still
/// reported as compressed.
///
/// # Errors
///
/// - `NiftiError::InvalidInput` if the buffer is empty.
pub fn is_compressed(buffer: &[u8]) -> Result<bool> {
    match buffer {
        [] => Err(NiftiError::InvalidInput),
        [b0] => Ok(*b0 == GZIP_MAGIC_1),
        [b0, b1, ..] => Ok(*b0 == GZIP_MAGIC_1 || *b1 == GZIP_MAGIC_2),
    }
}

/// Inflate a gzip-compressed buffer. Failures of the decoder are
/// returned as they are, wrapped in `NiftiError::Io`.
pub fn decompress(buffer: &[u8]) -> Result<Vec<u8>> {
    let mut out = Vec::with_capacity(buffer.len() * 4);
    let _ = MultiGzDecoder::new(buffer).read_to_end(&mut out)?;
    debug!("Inflated {} bytes into {}", buffer.len(), out.len());
    Ok(out)
}

/// Inflate the buffer if it looks compressed, or borrow it as is.
pub fn decompress_if_needed(buffer: &[u8]) -> Result<Cow<'_, [u8]>> {
    if is_compressed(buffer)? {
        decompress(buffer).map(Cow::Owned)
    } else {
        Ok(Cow::Borrowed(buffer))
    }
}
