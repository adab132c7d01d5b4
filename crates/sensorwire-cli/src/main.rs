//! Command-line decoder/encoder for sensorwire messages.
//!
//! Turns raw uplink hex into JSON readings and name=value pairs back into
//! hex, for poking at captured payloads without standing up the ingest
//! pipeline. Codec diagnostics surface through `RUST_LOG`.

use clap::{Parser, Subcommand};
use sensorwire_message::{encode_message, FieldValue, MessageCodec};

#[derive(Parser)]
#[command(name = "sensorwire", about = "Packed sensor message codec", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Decode a hex message into JSON readings.
    Decode {
        /// The packed message, e.g. 920e5a00b051680194597b00.
        hex: String,
        /// Field names whose values are packed text (repeatable).
        #[arg(long = "text-field", value_name = "NAME")]
        text_fields: Vec<String>,
        /// Drop a trailing partial field instead of failing.
        #[arg(long)]
        lenient: bool,
    },
    /// Encode name=value pairs into a hex message.
    Encode {
        /// Fields as name=value, emitted in argument order. Values parse
        /// as numbers unless the name is listed in --text-field.
        #[arg(value_name = "NAME=VALUE", required = true)]
        fields: Vec<String>,
        /// Field names whose values are packed text (repeatable).
        #[arg(long = "text-field", value_name = "NAME")]
        text_fields: Vec<String>,
    },
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Command::Decode {
            hex,
            text_fields,
            lenient,
        } => {
            let codec = MessageCodec::new()
                .with_text_fields(text_fields)
                .with_strict_length(!lenient);
            let readings = codec.decode(&hex)?;
            println!("{}", serde_json::to_string_pretty(&readings)?);
        }
        Command::Encode {
            fields,
            text_fields,
        } => {
            let mut entries = Vec::with_capacity(fields.len());
            for field in &fields {
                let (name, raw) = field
                    .split_once('=')
                    .ok_or_else(|| format!("expected NAME=VALUE, got {field:?}"))?;
                let value = if text_fields.iter().any(|t| t == name) {
                    FieldValue::Text(raw.to_string())
                } else {
                    FieldValue::Numeric(raw.parse()?)
                };
                entries.push((name.to_string(), value));
            }
            let hex = encode_message(entries.iter().map(|(n, v)| (n.as_str(), v)))?;
            println!("{hex}");
        }
    }
    Ok(())
}
