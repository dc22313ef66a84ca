//! MAPI/HTTP response body parsers.
//!
//! Every body is a run of fixed-width fields followed by a length-prefixed
//! auxiliary buffer. The layouts implement [`Decode`], and
//! [`ResponseBody::parse`] picks the layout for a request type and outcome.

mod auxiliary;
mod body;

pub use auxiliary::read_auxiliary;
pub use body::{
    BindResponseBody, FailureResponseBody, NotificationWaitResponseBody, StatusResponseBody,
};

use crate::config::DecodeLimits;
use crate::cursor::Cursor;
use crate::types::{Outcome, RequestType, StatusCode};
use crate::{Error, Result};

/// A record that can be decoded from a cursor.
pub trait Decode: Sized {
    /// Reads the record's fields in wire order.
    ///
    /// # Errors
    ///
    /// Returns an error if a read runs past the buffer or a length field
    /// violates `limits`.
    fn decode(cursor: &mut Cursor<'_>, limits: &DecodeLimits) -> Result<Self>;
}

/// Parses a complete body from the start of `raw`.
///
/// Bytes left after the record are ignored.
///
/// # Errors
///
/// Propagates the first decode error; no partial record is returned.
pub fn parse_body<T: Decode>(raw: &[u8], limits: &DecodeLimits) -> Result<T> {
    let mut cursor = Cursor::new(raw);
    let body = T::decode(&mut cursor, limits)?;

    if !cursor.is_eof() {
        tracing::trace!(
            consumed = cursor.position(),
            trailing = cursor.remaining_len(),
            "Ignoring bytes after response body"
        );
    }

    Ok(body)
}

/// A decoded response body of any supported layout.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "layout", rename_all = "snake_case"))]
pub enum ResponseBody {
    /// Failure body of any request type.
    Failure(FailureResponseBody),
    /// Success body of `Disconnect` or `Unbind`.
    Status(StatusResponseBody),
    /// Success body of `Bind`.
    Bind(BindResponseBody),
    /// Success body of `NotificationWait`.
    NotificationWait(NotificationWaitResponseBody),
}

impl ResponseBody {
    /// Parses `raw` using the layout registered for `request_type` and
    /// `outcome`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedLayout`] if no success layout is
    /// registered for `request_type`, otherwise any decode error.
    pub fn parse(
        request_type: RequestType,
        outcome: Outcome,
        raw: &[u8],
        limits: &DecodeLimits,
    ) -> Result<Self> {
        let parsed = match (outcome, request_type) {
            (Outcome::Failure, _) => parse_body(raw, limits).map(Self::Failure),
            (Outcome::Success, RequestType::Disconnect | RequestType::Unbind) => {
                parse_body(raw, limits).map(Self::Status)
            }
            (Outcome::Success, RequestType::Bind) => parse_body(raw, limits).map(Self::Bind),
            (Outcome::Success, RequestType::NotificationWait) => {
                parse_body(raw, limits).map(Self::NotificationWait)
            }
            (Outcome::Success, other) => Err(Error::UnsupportedLayout(other)),
        };

        match &parsed {
            Ok(body) => tracing::trace!(
                %request_type,
                ?outcome,
                len = raw.len(),
                status = %body.status_code(),
                "Decoded response body"
            ),
            Err(e) => tracing::debug!(
                %request_type,
                ?outcome,
                len = raw.len(),
                %e,
                "Rejected response body"
            ),
        }

        parsed
    }

    /// Returns the body's status code.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::Failure(b) => b.status_code,
            Self::Status(b) => b.status_code,
            Self::Bind(b) => b.status_code,
            Self::NotificationWait(b) => b.status_code,
        }
    }

    /// Returns the auxiliary buffer bytes.
    #[must_use]
    pub fn auxiliary_buffer(&self) -> &[u8] {
        match self {
            Self::Failure(b) => &b.auxiliary_buffer,
            Self::Status(b) => &b.auxiliary_buffer,
            Self::Bind(b) => &b.auxiliary_buffer,
            Self::NotificationWait(b) => &b.auxiliary_buffer,
        }
    }
}
