use std::io::{self, Read};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use pack64_core::{CodecConfig, Pack64Codec, PackedVector, Rounding, VectorCodec};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(author, version, about = "Pack numeric vectors into short URL-safe strings and back")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Encode a vector. Reads whitespace- or comma-separated values from stdin when none are given.
    Encode {
        #[arg(allow_hyphen_values = true)]
        values: Vec<String>,

        /// Truncate toward zero instead of rounding (legacy encoder behaviour)
        #[arg(long)]
        truncate: bool,
    },
    /// Decode a packed string (or stdin) into its components
    Decode {
        #[arg(allow_hyphen_values = true)]
        packed: Option<String>,

        /// Print a JSON array instead of one component per line
        #[arg(long)]
        json: bool,
    },
    /// Show dimension, exponent and step size of a packed string
    Inspect {
        #[arg(allow_hyphen_values = true)]
        packed: Option<String>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pack64=warn,pack64_core=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let args = Args::parse();

    match args.command {
        Command::Encode { values, truncate } => {
            let text = if values.is_empty() { read_stdin()? } else { values.join(" ") };
            let vector = parse_vector(&text)?;

            let rounding = if truncate { Rounding::Truncate } else { Rounding::Nearest };
            let codec = Pack64Codec::new(CodecConfig::new().with_rounding(rounding));
            tracing::debug!(components = vector.len(), codec = %codec.description(), "encoding");

            let packed = codec
                .encode(&vector)
                .with_context(|| format!("encode {} components", vector.len()))?;
            println!("{}", packed);
        }
        Command::Decode { packed, json } => {
            let packed = packed_arg(packed)?;
            let vector = Pack64Codec::default()
                .decode(&packed)
                .with_context(|| format!("decode {:?}", packed))?;
            if json {
                println!("{}", serde_json::to_string(&vector)?);
            } else {
                for x in &vector {
                    println!("{}", x);
                }
            }
        }
        Command::Inspect { packed } => {
            let packed: PackedVector = packed_arg(packed)?.parse().context("inspect")?;
            println!("dimension: {}", packed.dimension());
            println!("exponent:  {}", packed.exponent());
            println!("unit:      {:e}", packed.unit());
        }
    }

    Ok(())
}

fn read_stdin() -> Result<String> {
    let mut buf = String::new();
    io::stdin().read_to_string(&mut buf).context("read stdin")?;
    Ok(buf)
}

fn packed_arg(packed: Option<String>) -> Result<String> {
    match packed {
        Some(p) => Ok(p),
        None => Ok(read_stdin()?.trim().to_string()),
    }
}

/// Parse values separated by whitespace and/or commas. Brackets are
/// ignored so a JSON array can be piped straight in.
fn parse_vector(text: &str) -> Result<Vec<f64>> {
    text.split(|c: char| c.is_whitespace() || c == ',' || c == '[' || c == ']')
        .filter(|token| !token.is_empty())
        .map(|token| {
            token
                .parse::<f64>()
                .with_context(|| format!("invalid number {:?}", token))
        })
        .collect()
}
