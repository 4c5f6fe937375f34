use std::{fmt, str::FromStr};

use crate::{
    error::{Error, Result},
    parser,
};

/// Octet counts a MAC address may have, ascending
pub const VIABLE_OCTET_COUNTS: [usize; 3] = [6, 8, 20];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Width family of a MAC address
pub enum AddressKind {
    /// IEEE 802 MAC-48 / EUI-48, 6 octets
    Eui48,
    /// EUI-64, 8 octets
    Eui64,
    /// 20 octet InfiniBand style hardware address
    Extended,
}

impl AddressKind {
    pub const fn octets(self) -> usize {
        match self {
            AddressKind::Eui48 => 6,
            AddressKind::Eui64 => 8,
            AddressKind::Extended => 20,
        }
    }

    pub fn from_octets(n: usize) -> Option<Self> {
        match n {
            6 => Some(AddressKind::Eui48),
            8 => Some(AddressKind::Eui64),
            20 => Some(AddressKind::Extended),
            _ => None,
        }
    }

    /// Smallest kind able to hold `min_octets` octets
    pub fn fitting(min_octets: usize) -> Option<Self> {
        VIABLE_OCTET_COUNTS
            .into_iter()
            .find(|&n| n >= min_octets)
            .and_then(Self::from_octets)
    }

    pub fn name(self) -> &'static str {
        match self {
            AddressKind::Eui48 => "eui48",
            AddressKind::Eui64 => "eui64",
            AddressKind::Extended => "extended",
        }
    }
}

/// A validated hardware address in canonical binary form.
///
/// Only constructed from a sequence that passed octet validation, so the
/// octet count is always one of [`VIABLE_OCTET_COUNTS`].
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub enum MacAddress {
    Eui48([u8; 6]),
    Eui64([u8; 8]),
    Extended([u8; 20]),
}

impl MacAddress {
    /// Wrap already range checked octets. Fails only on a non-viable length.
    pub(crate) fn from_octets(octets: &[u8]) -> Result<Self> {
        let n = octets.len();
        let mac = match AddressKind::from_octets(n) {
            Some(AddressKind::Eui48) => MacAddress::Eui48(copy_array(octets)),
            Some(AddressKind::Eui64) => MacAddress::Eui64(copy_array(octets)),
            Some(AddressKind::Extended) => MacAddress::Extended(copy_array(octets)),
            None => return Err(Error::OctetCount { n }),
        };
        Ok(mac)
    }

    pub fn as_bytes(&self) -> &[u8] {
        match self {
            MacAddress::Eui48(bytes) => bytes,
            MacAddress::Eui64(bytes) => bytes,
            MacAddress::Extended(bytes) => bytes,
        }
    }

    pub fn to_vec(&self) -> Vec<u8> {
        self.as_bytes().to_vec()
    }

    pub fn kind(&self) -> AddressKind {
        match self {
            MacAddress::Eui48(_) => AddressKind::Eui48,
            MacAddress::Eui64(_) => AddressKind::Eui64,
            MacAddress::Extended(_) => AddressKind::Extended,
        }
    }

    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.kind().octets()
    }
}

fn copy_array<const N: usize>(octets: &[u8]) -> [u8; N] {
    let mut bytes = [0; N];
    bytes.copy_from_slice(octets);
    bytes
}

/// Canonical text form: lowercase hex octets joined by `:`
pub fn format(mac: &MacAddress) -> String {
    mac.as_bytes()
        .iter()
        .map(|octet| format!("{octet:02x}"))
        .collect::<Vec<_>>()
        .join(":")
}

impl fmt::Display for MacAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format(self))
    }
}

impl fmt::Debug for MacAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MacAddress({})", self)
    }
}

impl FromStr for MacAddress {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parser::parse_str(s)
    }
}

impl TryFrom<&[u8]> for MacAddress {
    type Error = Error;

    fn try_from(octets: &[u8]) -> Result<Self> {
        Self::from_octets(octets)
    }
}

impl From<[u8; 6]> for MacAddress {
    fn from(bytes: [u8; 6]) -> Self {
        MacAddress::Eui48(bytes)
    }
}

impl From<[u8; 8]> for MacAddress {
    fn from(bytes: [u8; 8]) -> Self {
        MacAddress::Eui64(bytes)
    }
}

impl From<[u8; 20]> for MacAddress {
    fn from(bytes: [u8; 20]) -> Self {
        MacAddress::Extended(bytes)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn formats_lowercase_colon_hex() {
        let mac = MacAddress::from([0x00u8, 0x00, 0x5e, 0x00, 0x53, 0x01]);
        assert_eq!(format(&mac), "00:00:5e:00:53:01");
        assert_eq!(mac.to_string(), "00:00:5e:00:53:01");

        let mac = MacAddress::from([0xABu8; 8]);
        assert_eq!(mac.to_string(), "ab:ab:ab:ab:ab:ab:ab:ab");
    }

    #[test]
    fn formats_extended() {
        let bytes: [u8; 20] = std::array::from_fn(|i| i as u8);
        let formatted = MacAddress::from(bytes).to_string();
        assert_eq!(
            formatted,
            "00:01:02:03:04:05:06:07:08:09:0a:0b:0c:0d:0e:0f:10:11:12:13"
        );
    }

    #[test]
    fn debug_shows_canonical_text() {
        let mac = MacAddress::from([1u8, 2, 3, 4, 5, 6]);
        assert_eq!(format!("{mac:?}"), "MacAddress(01:02:03:04:05:06)");
    }

    #[test]
    fn kind_follows_length() {
        for n in VIABLE_OCTET_COUNTS {
            let mac = MacAddress::try_from(vec![0u8; n].as_slice()).unwrap();
            assert_eq!(mac.len(), n);
            assert_eq!(mac.as_bytes().len(), n);
            assert_eq!(mac.kind(), AddressKind::from_octets(n).unwrap());
        }
    }

    #[test]
    fn rejects_non_viable_slice() {
        let err = MacAddress::try_from([0u8; 7].as_slice()).unwrap_err();
        assert!(matches!(err, Error::OctetCount { n: 7 }));
    }

    #[test]
    fn fitting_picks_smallest_viable() {
        assert_eq!(AddressKind::fitting(0), Some(AddressKind::Eui48));
        assert_eq!(AddressKind::fitting(6), Some(AddressKind::Eui48));
        assert_eq!(AddressKind::fitting(7), Some(AddressKind::Eui64));
        assert_eq!(AddressKind::fitting(9), Some(AddressKind::Extended));
        assert_eq!(AddressKind::fitting(20), Some(AddressKind::Extended));
        assert_eq!(AddressKind::fitting(21), None);
    }
}
