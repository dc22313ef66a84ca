//! Value types shared by the decoders.

mod request;
mod status;

pub use request::{Endpoint, Outcome, RequestType};
pub use status::StatusCode;
