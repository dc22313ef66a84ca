//! The length-prefixed auxiliary buffer that trails every response body.

use crate::config::DecodeLimits;
use crate::cursor::Cursor;
use crate::{Error, Result};

/// Reads `AuxiliaryBufferSize` followed by that many bytes.
///
/// Returns the declared size together with an owned copy of the bytes. The
/// bounds check runs before the limit check, so a size that overruns the
/// buffer is always reported as [`Error::OutOfBounds`].
///
/// # Errors
///
/// Returns [`Error::OutOfBounds`] if the size field or the declared bytes
/// are missing, and [`Error::MalformedLength`] if the size exceeds
/// `limits.max_auxiliary_buffer_size`.
pub fn read_auxiliary(cursor: &mut Cursor<'_>, limits: &DecodeLimits) -> Result<(u32, Vec<u8>)> {
    let size = cursor.read_u32()?;
    let len = usize::try_from(size).unwrap_or(usize::MAX);

    if len > cursor.remaining_len() {
        return Err(Error::OutOfBounds {
            offset: cursor.position(),
            requested: len,
            available: cursor.remaining_len(),
        });
    }
    if size > limits.max_auxiliary_buffer_size {
        return Err(Error::MalformedLength {
            field: "AuxiliaryBufferSize",
            declared: size,
            limit: limits.max_auxiliary_buffer_size,
        });
    }

    let buffer = cursor.read_bytes(len)?;
    Ok((size, buffer))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_read_auxiliary() {
        let data = [0x02, 0x00, 0x00, 0x00, 0xAA, 0xBB, 0xCC];
        let mut cursor = Cursor::new(&data);
        let (size, buffer) = read_auxiliary(&mut cursor, &DecodeLimits::default()).unwrap();
        assert_eq!(size, 2);
        assert_eq!(buffer, vec![0xAA, 0xBB]);
        assert_eq!(cursor.position(), 6);
    }

    #[test]
    fn test_overrun_reported_before_limit() {
        let data = [0xFF, 0xFF, 0xFF, 0xFF, 0x00];
        let mut cursor = Cursor::new(&data);
        let err = read_auxiliary(&mut cursor, &DecodeLimits::default()).unwrap_err();
        assert_eq!(
            err,
            Error::OutOfBounds {
                offset: 4,
                requested: 0xFFFF_FFFF,
                available: 1,
            }
        );
    }

    #[test]
    fn test_limit_exceeded() {
        let data = [0x03, 0x00, 0x00, 0x00, 1, 2, 3];
        let mut cursor = Cursor::new(&data);
        let limits = DecodeLimits::new().max_auxiliary_buffer_size(2);
        assert_eq!(
            read_auxiliary(&mut cursor, &limits).unwrap_err(),
            Error::MalformedLength {
                field: "AuxiliaryBufferSize",
                declared: 3,
                limit: 2,
            }
        );
    }
}
