use anyhow::Context;
use clap::{Parser, ValueEnum};
use env_logger::Env;
use log::debug;
use macnorm::{MacAddress, MacInput};
use num_bigint::BigInt;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
/// Normalize MAC addresses to canonical colon-delimited hex
struct Args {
    /// How each value should be read
    #[arg(short, long, value_enum, default_value_t = Shape::Text)]
    shape: Shape,
    /// Also print the address kind (eui48, eui64 or extended)
    #[arg(short, long)]
    kind: bool,
    /// Addresses to normalize
    #[arg(required = true)]
    values: Vec<String>,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Shape {
    /// Hex text such as 00:00:5e:00:53:01, 0000.5e00.5301 or 00005e005301
    Text,
    /// Decimal integer, or hex with a 0x prefix
    Int,
    /// Comma separated octet values such as 0,0,94,0,83,1
    Octets,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    for value in &args.values {
        let input = to_input(value, args.shape)?;
        debug!("normalizing {input:?}");

        let mac = macnorm::parse(input).map_err(|err| {
            anyhow::anyhow!("{}: {err}", err.kind().code())
        })?;
        println!("{}", render(&mac, args.kind));
    }

    Ok(())
}

fn to_input(value: &str, shape: Shape) -> anyhow::Result<MacInput> {
    let input = match shape {
        Shape::Text => MacInput::Text(value.to_owned()),
        Shape::Int => MacInput::Integer(parse_integer(value)?),
        Shape::Octets => MacInput::Octets(
            value
                .split(',')
                .map(|octet| {
                    octet
                        .trim()
                        .parse::<i64>()
                        .with_context(|| format!("Not an octet value: {octet:?}"))
                })
                .collect::<anyhow::Result<_>>()?,
        ),
    };
    Ok(input)
}

fn parse_integer(value: &str) -> anyhow::Result<BigInt> {
    let value = value.trim();
    let parsed = match value
        .strip_prefix("0x")
        .or_else(|| value.strip_prefix("0X"))
    {
        Some(hex_digits) => BigInt::parse_bytes(hex_digits.as_bytes(), 16),
        None => BigInt::parse_bytes(value.as_bytes(), 10),
    };
    parsed.with_context(|| format!("Not an integer: {value:?}"))
}

fn render(mac: &MacAddress, with_kind: bool) -> String {
    if with_kind {
        format!("{mac} {}", mac.kind().name())
    } else {
        mac.to_string()
    }
}
