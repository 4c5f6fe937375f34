//! Normalize hardware (MAC) addresses given as text, integers or octet
//! sequences into one canonical binary form, and render it back as
//! lowercase colon-delimited hex.
//!
//! Supported widths are 6 octets (EUI-48), 8 octets (EUI-64) and 20 octets
//! (InfiniBand style). Text may use `:`, `-` or `.` (Cisco style 4 digit
//! groups) delimiters, or none at all, but never a mix.
//!
//! ```
//! use macnorm::{format, parse};
//!
//! let mac = parse("0000.5E00.5301").unwrap();
//! assert_eq!(format(&mac), "00:00:5e:00:53:01");
//! assert_eq!(parse(0x00005e005301u64).unwrap(), mac);
//! ```

pub mod error;
pub mod mac_address;
pub mod parser;
pub mod patterns;

pub use error::{Error, ErrorKind, Result};
pub use mac_address::{format, AddressKind, MacAddress, VIABLE_OCTET_COUNTS};
pub use parser::{parse, parse_int, parse_octets, parse_str, validate_octets, MacInput};
