//! Response status codes.

/// `StatusCode` field of a MAPI/HTTP response body.
///
/// The decoder carries this value through untouched; deciding what a
/// non-zero status means is up to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct StatusCode(u32);

impl StatusCode {
    /// Creates a status code from its raw value.
    #[must_use]
    pub const fn new(code: u32) -> Self {
        Self(code)
    }

    /// Returns the raw value.
    #[must_use]
    pub const fn as_u32(self) -> u32 {
        self.0
    }

    /// Returns true if the server processed the request (status 0).
    #[must_use]
    pub const fn is_success(self) -> bool {
        self.0 == 0
    }
}

impl std::fmt::Display for StatusCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:#010x}", self.0)
    }
}

impl From<u32> for StatusCode {
    fn from(code: u32) -> Self {
        Self(code)
    }
}

// Status codes from the MAPI/HTTP transport
impl StatusCode {
    /// 0x00000000 Request processed
    pub const SUCCESS: Self = Self(0x0000_0000);
    /// 0x00000001 Unknown failure
    pub const UNKNOWN_FAILURE: Self = Self(0x0000_0001);
    /// 0x00000002 Invalid verb
    pub const INVALID_VERB: Self = Self(0x0000_0002);
    /// 0x00000003 Invalid path
    pub const INVALID_PATH: Self = Self(0x0000_0003);
    /// 0x00000004 Invalid header
    pub const INVALID_HEADER: Self = Self(0x0000_0004);
    /// 0x00000005 Invalid request type
    pub const INVALID_REQUEST_TYPE: Self = Self(0x0000_0005);
    /// 0x00000006 Invalid context cookie
    pub const INVALID_CONTEXT_COOKIE: Self = Self(0x0000_0006);
    /// 0x00000007 Missing header
    pub const MISSING_HEADER: Self = Self(0x0000_0007);
    /// 0x00000008 Anonymous not allowed
    pub const ANONYMOUS_NOT_ALLOWED: Self = Self(0x0000_0008);
    /// 0x00000009 Too large
    pub const TOO_LARGE: Self = Self(0x0000_0009);
    /// 0x0000000A Context not found
    pub const CONTEXT_NOT_FOUND: Self = Self(0x0000_000A);
    /// 0x0000000B No privilege
    pub const NO_PRIVILEGE: Self = Self(0x0000_000B);
    /// 0x0000000C Invalid request body
    pub const INVALID_REQUEST_BODY: Self = Self(0x0000_000C);
    /// 0x0000000D Missing cookie
    pub const MISSING_COOKIE: Self = Self(0x0000_000D);
    /// 0x0000000F Invalid sequence
    pub const INVALID_SEQUENCE: Self = Self(0x0000_000F);
    /// 0x00000010 Endpoint disabled
    pub const ENDPOINT_DISABLED: Self = Self(0x0000_0010);
    /// 0x00000011 Invalid response
    pub const INVALID_RESPONSE: Self = Self(0x0000_0011);
    /// 0x00000012 Endpoint shutting down
    pub const ENDPOINT_SHUTTING_DOWN: Self = Self(0x0000_0012);
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_status_code_success() {
        assert!(StatusCode::new(0).is_success());
        assert!(StatusCode::SUCCESS.is_success());
        assert!(!StatusCode::CONTEXT_NOT_FOUND.is_success());
    }

    #[test]
    fn test_status_code_display() {
        assert_eq!(StatusCode::INVALID_REQUEST_BODY.to_string(), "0x0000000c");
        assert_eq!(StatusCode::from(0x8004_0111).as_u32(), 0x8004_0111);
    }
}
