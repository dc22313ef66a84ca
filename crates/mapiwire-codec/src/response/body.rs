//! Response body records.
//!
//! Each record is decoded as a fixed sequence of reads ending with the
//! auxiliary buffer. All bytes are copied, so a record never borrows from
//! the input.

use crate::Result;
use crate::config::DecodeLimits;
use crate::cursor::Cursor;
use crate::types::StatusCode;

use super::auxiliary::read_auxiliary;
use super::{Decode, parse_body};

/// Adds `parse` and `parse_with` entry points to a body record.
macro_rules! impl_parse {
    ($ty:ty) => {
        impl $ty {
            /// Parses a complete response body with the default limits.
            ///
            /// # Errors
            ///
            /// Returns an error if the body is truncated or a length field
            /// exceeds the protocol limit.
            pub fn parse(raw: &[u8]) -> Result<Self> {
                parse_body(raw, &DecodeLimits::default())
            }

            /// Parses a complete response body with custom limits.
            ///
            /// # Errors
            ///
            /// Returns an error if the body is truncated or a length field
            /// exceeds `limits`.
            pub fn parse_with(raw: &[u8], limits: &DecodeLimits) -> Result<Self> {
                parse_body(raw, limits)
            }
        }
    };
}

/// Failure response body, shared by every request type.
///
/// Wire layout: `StatusCode:u32`, `AuxiliaryBufferSize:u32`, then
/// `AuxiliaryBufferSize` bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FailureResponseBody {
    /// Status of the request.
    pub status_code: StatusCode,
    /// Declared size of the auxiliary buffer.
    pub auxiliary_buffer_size: u32,
    /// Auxiliary buffer bytes.
    pub auxiliary_buffer: Vec<u8>,
}

impl Decode for FailureResponseBody {
    fn decode(cursor: &mut Cursor<'_>, limits: &DecodeLimits) -> Result<Self> {
        let status_code = StatusCode::new(cursor.read_u32()?);
        let (auxiliary_buffer_size, auxiliary_buffer) = read_auxiliary(cursor, limits)?;

        Ok(Self {
            status_code,
            auxiliary_buffer_size,
            auxiliary_buffer,
        })
    }
}

impl_parse!(FailureResponseBody);

/// Success body carrying only a status and an error code.
///
/// Used by `Disconnect` and `Unbind`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct StatusResponseBody {
    /// Status of the request.
    pub status_code: StatusCode,
    /// Return code of the operation.
    pub error_code: u32,
    /// Declared size of the auxiliary buffer.
    pub auxiliary_buffer_size: u32,
    /// Auxiliary buffer bytes.
    pub auxiliary_buffer: Vec<u8>,
}

impl Decode for StatusResponseBody {
    fn decode(cursor: &mut Cursor<'_>, limits: &DecodeLimits) -> Result<Self> {
        let status_code = StatusCode::new(cursor.read_u32()?);
        let error_code = cursor.read_u32()?;
        let (auxiliary_buffer_size, auxiliary_buffer) = read_auxiliary(cursor, limits)?;

        Ok(Self {
            status_code,
            error_code,
            auxiliary_buffer_size,
            auxiliary_buffer,
        })
    }
}

impl_parse!(StatusResponseBody);

/// Success body of `Bind`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BindResponseBody {
    /// Status of the request.
    pub status_code: StatusCode,
    /// Return code of the operation.
    pub error_code: u32,
    /// GUID identifying the address book server, as sent on the wire.
    pub server_guid: [u8; 16],
    /// Declared size of the auxiliary buffer.
    pub auxiliary_buffer_size: u32,
    /// Auxiliary buffer bytes.
    pub auxiliary_buffer: Vec<u8>,
}

impl Decode for BindResponseBody {
    fn decode(cursor: &mut Cursor<'_>, limits: &DecodeLimits) -> Result<Self> {
        let status_code = StatusCode::new(cursor.read_u32()?);
        let error_code = cursor.read_u32()?;
        let server_guid = cursor.read_array()?;
        let (auxiliary_buffer_size, auxiliary_buffer) = read_auxiliary(cursor, limits)?;

        Ok(Self {
            status_code,
            error_code,
            server_guid,
            auxiliary_buffer_size,
            auxiliary_buffer,
        })
    }
}

impl_parse!(BindResponseBody);

/// Success body of `NotificationWait`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct NotificationWaitResponseBody {
    /// Status of the request.
    pub status_code: StatusCode,
    /// Return code of the operation.
    pub error_code: u32,
    /// Raw `EventPending` flags.
    pub event_pending: u32,
    /// Declared size of the auxiliary buffer.
    pub auxiliary_buffer_size: u32,
    /// Auxiliary buffer bytes.
    pub auxiliary_buffer: Vec<u8>,
}

impl NotificationWaitResponseBody {
    /// Returns true if the server has notifications queued.
    #[must_use]
    pub const fn is_event_pending(&self) -> bool {
        self.event_pending != 0
    }
}

impl Decode for NotificationWaitResponseBody {
    fn decode(cursor: &mut Cursor<'_>, limits: &DecodeLimits) -> Result<Self> {
        let status_code = StatusCode::new(cursor.read_u32()?);
        let error_code = cursor.read_u32()?;
        let event_pending = cursor.read_u32()?;
        let (auxiliary_buffer_size, auxiliary_buffer) = read_auxiliary(cursor, limits)?;

        Ok(Self {
            status_code,
            error_code,
            event_pending,
            auxiliary_buffer_size,
            auxiliary_buffer,
        })
    }
}

impl_parse!(NotificationWaitResponseBody);

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn test_parse_failure_body() {
        let raw = [0x00, 0x00, 0x00, 0x00, 0x02, 0x00, 0x00, 0x00, 0xAA, 0xBB];
        let body = FailureResponseBody::parse(&raw).unwrap();
        assert_eq!(body.status_code, StatusCode::SUCCESS);
        assert_eq!(body.auxiliary_buffer_size, 2);
        assert_eq!(body.auxiliary_buffer, vec![0xAA, 0xBB]);
    }

    #[test]
    fn test_failure_body_declared_size_missing() {
        let raw = [0x00, 0x00, 0x00, 0x00, 0x05, 0x00, 0x00, 0x00];
        let err = FailureResponseBody::parse(&raw).unwrap_err();
        assert!(err.is_truncated());
    }

    #[test]
    fn test_failure_body_header_too_short() {
        for len in 0..8 {
            let raw = vec![0u8; len];
            assert!(FailureResponseBody::parse(&raw).unwrap_err().is_truncated());
        }
    }

    #[test]
    fn test_failure_body_too_large() {
        let mut raw = vec![0x0C, 0x00, 0x00, 0x00];
        raw.extend_from_slice(&0x2000u32.to_le_bytes());
        raw.resize(8 + 0x2000, 0x55);

        assert!(matches!(
            FailureResponseBody::parse(&raw).unwrap_err(),
            Error::MalformedLength { declared: 0x2000, .. }
        ));

        let body = FailureResponseBody::parse_with(&raw, &DecodeLimits::unbounded()).unwrap();
        assert_eq!(body.status_code, StatusCode::INVALID_REQUEST_BODY);
        assert_eq!(body.auxiliary_buffer.len(), 0x2000);
    }

    #[test]
    fn test_parse_status_body() {
        let raw = [
            0x00, 0x00, 0x00, 0x00, // StatusCode
            0x01, 0x00, 0x00, 0x00, // ErrorCode
            0x00, 0x00, 0x00, 0x00, // AuxiliaryBufferSize
        ];
        let body = StatusResponseBody::parse(&raw).unwrap();
        assert_eq!(body.error_code, 1);
        assert!(body.auxiliary_buffer.is_empty());
    }

    #[test]
    fn test_parse_bind_body() {
        let mut raw = vec![0, 0, 0, 0, 0, 0, 0, 0];
        raw.extend(1..=16u8);
        raw.extend_from_slice(&[0x01, 0x00, 0x00, 0x00, 0x7F]);

        let body = BindResponseBody::parse(&raw).unwrap();
        assert_eq!(body.server_guid[0], 1);
        assert_eq!(body.server_guid[15], 16);
        assert_eq!(body.auxiliary_buffer, vec![0x7F]);
    }

    #[test]
    fn test_parse_notification_wait_body() {
        let raw = [
            0, 0, 0, 0, // StatusCode
            0, 0, 0, 0, // ErrorCode
            1, 0, 0, 0, // EventPending
            0, 0, 0, 0, // AuxiliaryBufferSize
        ];
        let body = NotificationWaitResponseBody::parse(&raw).unwrap();
        assert!(body.is_event_pending());
    }

    #[test]
    fn test_bind_body_truncated_guid() {
        let raw = [0u8; 12];
        assert!(BindResponseBody::parse(&raw).unwrap_err().is_truncated());
    }
}
