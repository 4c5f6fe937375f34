use log::{debug, trace};
use num_bigint::{BigInt, BigUint};

use crate::{
    error::{Error, Result},
    mac_address::{AddressKind, MacAddress},
    patterns::{self, Rule},
};

/// The three input shapes a MAC address can be given in
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MacInput {
    /// Hex octets, optionally delimited by `:`, `-` or `.`
    Text(String),
    /// Big-endian integer value of the address
    Integer(BigInt),
    /// Explicit octet values
    Octets(Vec<i64>),
}

impl From<&str> for MacInput {
    fn from(text: &str) -> Self {
        MacInput::Text(text.to_owned())
    }
}

impl From<String> for MacInput {
    fn from(text: String) -> Self {
        MacInput::Text(text)
    }
}

impl From<u64> for MacInput {
    fn from(value: u64) -> Self {
        MacInput::Integer(value.into())
    }
}

impl From<u128> for MacInput {
    fn from(value: u128) -> Self {
        MacInput::Integer(value.into())
    }
}

impl From<BigInt> for MacInput {
    fn from(value: BigInt) -> Self {
        MacInput::Integer(value)
    }
}

impl From<BigUint> for MacInput {
    fn from(value: BigUint) -> Self {
        MacInput::Integer(value.into())
    }
}

impl From<Vec<i64>> for MacInput {
    fn from(octets: Vec<i64>) -> Self {
        MacInput::Octets(octets)
    }
}

impl From<Vec<u8>> for MacInput {
    fn from(octets: Vec<u8>) -> Self {
        MacInput::Octets(octets.into_iter().map(i64::from).collect())
    }
}

impl From<&[u8]> for MacInput {
    fn from(octets: &[u8]) -> Self {
        MacInput::Octets(octets.iter().copied().map(i64::from).collect())
    }
}

/// Normalize any supported input shape into a canonical MAC address
pub fn parse(input: impl Into<MacInput>) -> Result<MacAddress> {
    match input.into() {
        MacInput::Text(text) => parse_str(&text),
        MacInput::Integer(value) => parse_int(&value),
        MacInput::Octets(octets) => parse_octets(&octets),
    }
}

/// Text path: exact grammar match, then hex decode of the delimiter-free digits
pub fn parse_str(input: &str) -> Result<MacAddress> {
    let pattern = patterns::find_pattern(input).ok_or_else(|| {
        debug!("no MAC address pattern matches {input:?}");
        Error::Format {
            input: input.to_owned(),
        }
    })?;
    trace!(
        "{input:?} matched {:?} with {:?} delimiter",
        pattern.kind,
        pattern.delimiter
    );

    // Grammar already matched, so the pairs are present
    let digits: String = pattern
        .parse(input)
        .ok_or_else(|| Error::Format {
            input: input.to_owned(),
        })?
        .filter(|group| matches!(group.as_rule(), Rule::octet | Rule::quad))
        .map(|group| group.as_str())
        .collect();

    // Octet count comes from the digit count, leading zero octets included
    let octets = hex::decode(&digits)?;
    validate_octets(octets.iter().map(|&octet| i64::from(octet)))
}

/// Integer path: big-endian bytes, left padded to the smallest viable count
pub fn parse_int(value: &BigInt) -> Result<MacAddress> {
    let value = value.to_biguint().ok_or_else(|| {
        debug!("negative integer {value} given as MAC address");
        Error::Type {
            input: value.to_string(),
        }
    })?;

    let min_octets = (value.bits() as usize + 7) / 8;
    // Too wide for any kind: keep the true width so validation reports it
    let num_octets = AddressKind::fitting(min_octets).map_or(min_octets, AddressKind::octets);
    trace!("integer {value} needs {min_octets} octets, encoding as {num_octets}");

    let bytes = value.to_bytes_be();
    // `to_bytes_be` yields a single zero byte for zero
    let significant = if value.bits() == 0 { &[][..] } else { &bytes[..] };
    let mut octets = vec![0u8; num_octets - significant.len()];
    octets.extend_from_slice(significant);

    validate_octets(octets.into_iter().map(i64::from))
}

/// Sequence path: explicit octet values
pub fn parse_octets(octets: &[i64]) -> Result<MacAddress> {
    validate_octets(octets.iter().copied())
}

/// Range check each octet, then check the count is viable
pub fn validate_octets(octets: impl IntoIterator<Item = i64>) -> Result<MacAddress> {
    let bytes = octets
        .into_iter()
        .map(|value| {
            u8::try_from(value).map_err(|_| {
                debug!("octet {value} out of range");
                Error::OctetRange { value }
            })
        })
        .collect::<Result<Vec<u8>>>()?;

    MacAddress::from_octets(&bytes).map_err(|err| {
        debug!("{} octets is not a viable MAC address length", bytes.len());
        err
    })
}
