use thiserror::Error;

use crate::mac_address::VIABLE_OCTET_COUNTS;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error(
        "Length and/or format of MAC address string is incorrect: {input:?} is not hex \
         octets delimited by one of \":\", \"-\" or \".\""
    )]
    Format { input: String },
    #[error("MAC address ({input}) not of type str, non-negative int, or sequence of octets")]
    Type { input: String },
    #[error("Octets are strictly 8-bit, cannot be bigger than 255: got {value}")]
    OctetRange { value: i64 },
    #[error("Number of octets in MAC address must be in {:?}, got {n}", VIABLE_OCTET_COUNTS)]
    OctetCount { n: usize },
    #[error("Hex decoding failed: {0}")]
    HexDecode(#[from] hex::FromHexError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Coarse classification a hosting framework can map onto its own errors
pub enum ErrorKind {
    Format,
    Type,
}

impl ErrorKind {
    pub fn code(self) -> &'static str {
        match self {
            ErrorKind::Format => "mac_address_format",
            ErrorKind::Type => "mac_address_type",
        }
    }
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Type { .. } => ErrorKind::Type,
            Error::Format { .. }
            | Error::OctetRange { .. }
            | Error::OctetCount { .. }
            | Error::HexDecode(_) => ErrorKind::Format,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn kinds_map_to_codes() {
        let format = Error::Format {
            input: "zz".to_owned(),
        };
        assert_eq!(format.kind().code(), "mac_address_format");
        assert_eq!(Error::OctetRange { value: 256 }.kind(), ErrorKind::Format);
        assert_eq!(Error::OctetCount { n: 7 }.kind(), ErrorKind::Format);

        let type_err = Error::Type {
            input: "-1".to_owned(),
        };
        assert_eq!(type_err.kind().code(), "mac_address_type");
    }

    #[test]
    fn messages_carry_offending_value() {
        let msg = Error::OctetCount { n: 7 }.to_string();
        assert_eq!(
            msg,
            "Number of octets in MAC address must be in [6, 8, 20], got 7"
        );

        let msg = Error::OctetRange { value: 300 }.to_string();
        assert!(msg.contains("strictly 8-bit"), "{msg}");
        assert!(msg.contains("300"), "{msg}");

        let msg = Error::Format {
            input: "00:00-5e:00:53:01".to_owned(),
        }
        .to_string();
        assert!(msg.contains("\"00:00-5e:00:53:01\""), "{msg}");
    }
}
