//! `mapiwire` - inspector for captured MAPI/HTTP payloads.
//!
//! Decodes a response body or a single property value and prints it as
//! JSON.
//!
//! # Usage
//!
//! ```bash
//! # Decode a ResortRestriction failure body
//! mapiwire body ResortRestriction failure body.bin
//!
//! # Decode a base64 capture from stdin
//! mapiwire body Bind success --base64 < bind.b64
//!
//! # Decode PidTagAttachMethod at offset 12
//! mapiwire property 0x37050003 row.bin --offset 12
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

mod args;
mod settings;

use std::io::{Read, Write};

use anyhow::{Context, Result};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use clap::Parser;
use mapiwire_codec::{DecodeLimits, PropertyValue, ResponseBody};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use args::{Cli, Command, Input};
use settings::Settings;

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mapiwire=info,mapiwire_codec=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let settings = Settings::load()?;
    let raw = read_input(cli.command.input())?;
    info!(len = raw.len(), "Decoding payload");

    let output = render(&cli.command, &raw, &settings.limits)?;

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{output}")?;
    Ok(())
}

/// Decodes `raw` as `command` asks and renders the result as pretty JSON.
fn render(command: &Command, raw: &[u8], limits: &DecodeLimits) -> Result<String> {
    let output = match *command {
        Command::Body {
            request_type,
            outcome,
            ..
        } => {
            let body = ResponseBody::parse(request_type, outcome, raw, limits)
                .with_context(|| format!("Failed to decode {request_type} {outcome:?} body"))?;
            serde_json::to_string_pretty(&body)?
        }
        Command::Property { kind, offset, .. } => {
            let (value, consumed) = PropertyValue::decode_at(kind, raw, offset)
                .with_context(|| format!("Failed to decode {kind:?} at offset {offset}"))?;
            serde_json::to_string_pretty(&serde_json::json!({
                "property": value,
                "value": value.as_scalar(),
                "bytes_consumed": consumed,
            }))?
        }
    };
    Ok(output)
}

/// Reads the payload from the input file or stdin.
fn read_input(input: &Input) -> Result<Vec<u8>> {
    let mut data = Vec::new();
    match &input.file {
        Some(path) => {
            data = std::fs::read(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
        }
        None => {
            std::io::stdin()
                .read_to_end(&mut data)
                .context("Failed to read stdin")?;
        }
    }

    decode_payload(data, input.base64)
}

/// Decodes base64 text when requested; whitespace and line breaks are ignored.
fn decode_payload(data: Vec<u8>, base64: bool) -> Result<Vec<u8>> {
    if !base64 {
        return Ok(data);
    }

    let text: String = String::from_utf8_lossy(&data)
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();
    STANDARD.decode(text).context("Input is not valid base64")
}
