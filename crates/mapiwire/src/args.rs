//! Command-line arguments.

use std::path::PathBuf;
use std::str::FromStr;

use clap::{Args, Parser, Subcommand};
use mapiwire_codec::{Outcome, PropertyKind, RequestType};

/// Inspector for captured MAPI/HTTP payloads.
#[derive(Debug, Parser)]
#[command(name = "mapiwire")]
#[command(about = "Decode MAPI/HTTP response bodies and property values")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// What to decode.
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Decode a response body
    Body {
        /// X-RequestType of the request, e.g. ResortRestriction
        #[arg(value_parser = RequestType::from_str)]
        request_type: RequestType,

        /// Body layout: success or failure
        #[arg(value_parser = Outcome::from_str)]
        outcome: Outcome,

        #[command(flatten)]
        input: Input,
    },

    /// Decode one property value
    Property {
        /// Property tag in hex, e.g. 0x37050003
        #[arg(value_parser = parse_property_tag)]
        kind: PropertyKind,

        /// Byte offset of the value
        #[arg(long, default_value_t = 0)]
        offset: usize,

        #[command(flatten)]
        input: Input,
    },
}

impl Command {
    /// Returns where the payload comes from.
    pub const fn input(&self) -> &Input {
        match self {
            Self::Body { input, .. } | Self::Property { input, .. } => input,
        }
    }
}

/// Payload source.
#[derive(Debug, Clone, PartialEq, Eq, Default, Args)]
pub struct Input {
    /// Payload file; reads stdin when omitted
    pub file: Option<PathBuf>,

    /// Treat the payload as base64 text
    #[arg(long)]
    pub base64: bool,
}

fn parse_property_tag(s: &str) -> Result<PropertyKind, String> {
    let digits = s
        .strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s);
    let tag = u32::from_str_radix(digits, 16).map_err(|e| format!("invalid tag {s}: {e}"))?;
    PropertyKind::try_from(tag).map_err(|e| e.to_string())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("mapiwire").chain(args.iter().copied()))
    }

    #[test]
    fn test_parse_body_command() {
        let cli = parse(&["body", "resortrestriction", "failure", "body.bin"]).unwrap();
        assert_eq!(
            cli.command,
            Command::Body {
                request_type: RequestType::ResortRestriction,
                outcome: Outcome::Failure,
                input: Input {
                    file: Some(PathBuf::from("body.bin")),
                    base64: false,
                },
            }
        );
    }

    #[test]
    fn test_parse_property_command() {
        let cli = parse(&["property", "0x37050003", "--offset", "8", "--base64"]).unwrap();
        assert_eq!(
            cli.command,
            Command::Property {
                kind: PropertyKind::AttachMethod,
                offset: 8,
                input: Input {
                    file: None,
                    base64: true,
                },
            }
        );
        assert!(cli.command.input().base64);
    }

    #[test]
    fn test_property_tag_without_prefix() {
        let cli = parse(&["property", "66730003"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Property {
                kind: PropertyKind::MemberRights,
                offset: 0,
                ..
            }
        ));
    }

    #[test]
    fn test_help_is_handled_by_clap() {
        let err = parse(&["--help"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_parse_errors() {
        assert!(parse(&[]).is_err());
        assert!(parse(&["body", "Bind"]).is_err());
        assert!(parse(&["body", "Bogus", "failure"]).is_err());
        assert!(parse(&["body", "Bind", "maybe"]).is_err());
        assert!(parse(&["body", "Bind", "success", "a", "b"]).is_err());
        assert!(parse(&["property", "zz"]).is_err());
        assert!(parse(&["property", "0x12340003"]).is_err());
        assert!(parse(&["body", "Bind", "success", "--verbose"]).is_err());
    }

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
