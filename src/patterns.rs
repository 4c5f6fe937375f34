use pest::{iterators::Pairs, Parser};
use pest_derive::Parser;

use crate::mac_address::AddressKind;

#[derive(Parser)]
#[grammar = "mac_address.pest"]
struct MacAddressParse;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Separator between hex groups of a textual MAC address
pub enum Delimiter {
    Colon,
    Hyphen,
    Dot,
    Bare,
}

impl Delimiter {
    pub fn as_char(self) -> Option<char> {
        match self {
            Delimiter::Colon => Some(':'),
            Delimiter::Hyphen => Some('-'),
            Delimiter::Dot => Some('.'),
            Delimiter::Bare => None,
        }
    }

    /// Bytes covered by one group between delimiters
    pub fn group_width(self) -> usize {
        match self {
            Delimiter::Dot => 2,
            Delimiter::Colon | Delimiter::Hyphen | Delimiter::Bare => 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// One recognized textual shape: an octet count written with one delimiter
pub struct Pattern {
    pub rule: Rule,
    pub kind: AddressKind,
    pub delimiter: Delimiter,
}

impl Pattern {
    const fn new(rule: Rule, kind: AddressKind, delimiter: Delimiter) -> Self {
        Pattern {
            rule,
            kind,
            delimiter,
        }
    }

    /// Number of hex groups the pattern expects
    pub fn groups(&self) -> usize {
        self.kind.octets() / self.delimiter.group_width()
    }

    /// Match the whole input against this pattern, yielding its hex groups
    pub fn parse<'i>(&self, input: &'i str) -> Option<Pairs<'i, Rule>> {
        let mac = MacAddressParse::parse(self.rule, input).ok()?.next()?;
        Some(mac.into_inner())
    }

    pub fn matches(&self, input: &str) -> bool {
        MacAddressParse::parse(self.rule, input).is_ok()
    }
}

/// Every recognized shape, by ascending octet count then delimiter
pub static PATTERNS: [Pattern; 12] = [
    Pattern::new(Rule::eui48_colon, AddressKind::Eui48, Delimiter::Colon),
    Pattern::new(Rule::eui48_hyphen, AddressKind::Eui48, Delimiter::Hyphen),
    Pattern::new(Rule::eui48_dot, AddressKind::Eui48, Delimiter::Dot),
    Pattern::new(Rule::eui48_bare, AddressKind::Eui48, Delimiter::Bare),
    Pattern::new(Rule::eui64_colon, AddressKind::Eui64, Delimiter::Colon),
    Pattern::new(Rule::eui64_hyphen, AddressKind::Eui64, Delimiter::Hyphen),
    Pattern::new(Rule::eui64_dot, AddressKind::Eui64, Delimiter::Dot),
    Pattern::new(Rule::eui64_bare, AddressKind::Eui64, Delimiter::Bare),
    Pattern::new(Rule::extended_colon, AddressKind::Extended, Delimiter::Colon),
    Pattern::new(Rule::extended_hyphen, AddressKind::Extended, Delimiter::Hyphen),
    Pattern::new(Rule::extended_dot, AddressKind::Extended, Delimiter::Dot),
    Pattern::new(Rule::extended_bare, AddressKind::Extended, Delimiter::Bare),
];

/// The first pattern in table order that matches the whole input
pub fn find_pattern(input: &str) -> Option<&'static Pattern> {
    PATTERNS.iter().find(|pattern| pattern.matches(input))
}

/// All patterns matching the input. More than one means the grammar overlaps.
pub fn matching_patterns(input: &str) -> Vec<&'static Pattern> {
    PATTERNS
        .iter()
        .filter(|pattern| pattern.matches(input))
        .collect()
}
