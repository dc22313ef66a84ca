//! MAPI/HTTP request types.
//!
//! Every request carries an `X-RequestType` header naming the operation.
//! The response body layout is selected by that name and by whether the
//! server succeeded.

use std::str::FromStr;

use crate::Error;

/// The MAPI/HTTP endpoint a request type belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// Mailbox server endpoint (`/mapi/emsmdb`).
    Mailbox,
    /// Address book server endpoint (`/mapi/nspi`).
    AddressBook,
}

/// Whether a response body is the success or the failure variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Outcome {
    /// The request type's success layout.
    Success,
    /// The shared failure layout.
    Failure,
}

impl FromStr for Outcome {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("success") {
            Ok(Self::Success)
        } else if s.eq_ignore_ascii_case("failure") {
            Ok(Self::Failure)
        } else {
            Err(Error::UnknownOutcome(s.to_string()))
        }
    }
}

macro_rules! request_types {
    ($( $(#[$doc:meta])* $variant:ident => $name:literal, $endpoint:ident; )+) => {
        /// `X-RequestType` header value.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub enum RequestType {
            $( $(#[$doc])* $variant, )+
        }

        impl RequestType {
            /// Every known request type.
            pub const ALL: &'static [Self] = &[$( Self::$variant, )+];

            /// Returns the header value.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $( Self::$variant => $name, )+
                }
            }

            /// Returns the endpoint that serves this request type.
            #[must_use]
            pub const fn endpoint(self) -> Endpoint {
                match self {
                    $( Self::$variant => Endpoint::$endpoint, )+
                }
            }
        }
    };
}

request_types! {
    /// Establishes a session context.
    Connect => "Connect", Mailbox;
    /// Submits ROP requests.
    Execute => "Execute", Mailbox;
    /// Tears down a session context.
    Disconnect => "Disconnect", Mailbox;
    /// Waits for pending notifications.
    NotificationWait => "NotificationWait", Mailbox;
    /// Establishes an address book session.
    Bind => "Bind", AddressBook;
    /// Tears down an address book session.
    Unbind => "Unbind", AddressBook;
    /// Compares two Minimal Entry IDs.
    CompareMIds => "CompareMIds", AddressBook;
    /// Maps distinguished names to Minimal Entry IDs.
    DnToMId => "DNToMId", AddressBook;
    /// Gets rows matching a restriction.
    GetMatches => "GetMatches", AddressBook;
    /// Lists properties of an object.
    GetPropList => "GetPropList", AddressBook;
    /// Gets property values of an object.
    GetProps => "GetProps", AddressBook;
    /// Gets the special hierarchy table.
    GetSpecialTable => "GetSpecialTable", AddressBook;
    /// Gets template information.
    GetTemplateInfo => "GetTemplateInfo", AddressBook;
    /// Modifies a link attribute.
    ModLinkAtt => "ModLinkAtt", AddressBook;
    /// Modifies properties of an object.
    ModProps => "ModProps", AddressBook;
    /// Reads rows from a table.
    QueryRows => "QueryRows", AddressBook;
    /// Lists columns of a table.
    QueryColumns => "QueryColumns", AddressBook;
    /// Resolves ambiguous names.
    ResolveNames => "ResolveNames", AddressBook;
    /// Sorts a restricted set of Minimal Entry IDs.
    ResortRestriction => "ResortRestriction", AddressBook;
    /// Positions a table cursor.
    SeekEntries => "SeekEntries", AddressBook;
    /// Updates table status.
    UpdateStat => "UpdateStat", AddressBook;
    /// Gets the mailbox server URL.
    GetMailboxUrl => "GetMailboxUrl", AddressBook;
    /// Gets the address book server URL.
    GetAddressBookUrl => "GetAddressBookUrl", AddressBook;
}

impl std::fmt::Display for RequestType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RequestType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|rt| rt.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::UnknownRequestType(s.to_string()))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_request_type_case_insensitive() {
        assert_eq!(
            "resortrestriction".parse::<RequestType>().unwrap(),
            RequestType::ResortRestriction
        );
        assert_eq!(" DNToMId ".parse::<RequestType>().unwrap(), RequestType::DnToMId);
    }

    #[test]
    fn test_request_type_display_round_trip() {
        for rt in RequestType::ALL {
            assert_eq!(rt.to_string().parse::<RequestType>().unwrap(), *rt);
        }
    }

    #[test]
    fn test_unknown_request_type() {
        assert_eq!(
            "PING".parse::<RequestType>().unwrap_err(),
            Error::UnknownRequestType("PING".into())
        );
    }

    #[test]
    fn test_endpoint() {
        assert_eq!(RequestType::Execute.endpoint(), Endpoint::Mailbox);
        assert_eq!(RequestType::GetProps.endpoint(), Endpoint::AddressBook);
    }

    #[test]
    fn test_parse_outcome() {
        assert_eq!("FAILURE".parse::<Outcome>().unwrap(), Outcome::Failure);
        assert_eq!("success".parse::<Outcome>().unwrap(), Outcome::Success);
        assert!("maybe".parse::<Outcome>().is_err());
    }
}
