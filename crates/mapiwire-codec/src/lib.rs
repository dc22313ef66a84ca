//! # mapiwire-codec
//!
//! Wire-format decoder for MAPI/HTTP response bodies and MAPI property
//! values.
//!
//! ## Features
//!
//! - **Bounds-checked cursor**: little-endian primitive reads that fail
//!   instead of running past the buffer
//! - **Response bodies**: failure bodies for every `X-RequestType`, plus the
//!   `Bind`, `Unbind`, `Disconnect` and `NotificationWait` success bodies
//! - **Property values**: fixed and variable-width property codecs with a
//!   row decoder that mixes them in one pass
//! - **Limits**: configurable maximum for length-prefixed fields
//!
//! ## Quick Start
//!
//! ### Parsing a Response Body
//!
//! ```
//! use mapiwire_codec::FailureResponseBody;
//!
//! let raw = [0, 0, 0, 0, 2, 0, 0, 0, 0xAA, 0xBB];
//! let body = FailureResponseBody::parse(&raw)?;
//! assert_eq!(body.auxiliary_buffer, vec![0xAA, 0xBB]);
//! # Ok::<(), mapiwire_codec::Error>(())
//! ```
//!
//! ### Dispatching on Request Type
//!
//! ```
//! use mapiwire_codec::{DecodeLimits, Outcome, RequestType, ResponseBody};
//!
//! let request_type: RequestType = "ResortRestriction".parse()?;
//! let raw = [0x0A, 0, 0, 0, 0, 0, 0, 0];
//! let body = ResponseBody::parse(request_type, Outcome::Failure, &raw, &DecodeLimits::default())?;
//! assert!(!body.status_code().is_success());
//! # Ok::<(), mapiwire_codec::Error>(())
//! ```
//!
//! ### Decoding Property Values
//!
//! ```
//! use mapiwire_codec::{PropertyKind, PropertyValue, Scalar};
//!
//! let (value, consumed) = PropertyValue::decode_at(PropertyKind::AttachMethod, &[3, 0, 0, 0], 0)?;
//! assert_eq!(value.as_scalar(), Scalar::U32(3));
//! assert_eq!(consumed, 4);
//! # Ok::<(), mapiwire_codec::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

mod config;
mod error;

pub mod cursor;
pub mod property;
pub mod response;
pub mod types;

pub use config::{DecodeLimits, MAX_AUXILIARY_BUFFER_SIZE};
pub use cursor::Cursor;
pub use error::{Error, Result};
pub use property::{PropertyKind, PropertyRow, PropertyValue, Scalar};
pub use response::{
    BindResponseBody, Decode, FailureResponseBody, NotificationWaitResponseBody, ResponseBody,
    StatusResponseBody, parse_body,
};
pub use types::{Endpoint, Outcome, RequestType, StatusCode};
