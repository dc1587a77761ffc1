use std::fmt;

use thiserror::Error;

/// Reasons a CIDR or dotted-decimal string is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CidrError {
    #[error("invalid format: {0}")]
    InvalidFormat(String),
    #[error("value out of range: {0}")]
    InvalidRange(String),
}

/// A parsed `a.b.c.d/len` block. The address may be any host inside the block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CidrSpec {
    address: u32,
    prefix_len: u8,
}

impl CidrSpec {
    /// Build from raw parts; `None` when the prefix is longer than 32.
    pub fn new(address: u32, prefix_len: u8) -> Option<Self> {
        (prefix_len <= 32).then_some(Self {
            address,
            prefix_len,
        })
    }

    pub fn address(&self) -> u32 {
        self.address
    }

    pub fn prefix_len(&self) -> u8 {
        self.prefix_len
    }
}

impl fmt::Display for CidrSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{}",
            crate::netcalc::to_dotted(self.address),
            self.prefix_len
        )
    }
}

impl std::str::FromStr for CidrSpec {
    type Err = CidrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_cidr(s)
    }
}

/// Parse `dotted-ip/prefix-length`.
///
/// Exactly four dot-separated decimal octets, one `/`, and a decimal prefix.
/// Whitespace, signs, empty fields and extra separators are format errors;
/// numeric fields above 255 (octets) or 32 (prefix) are range errors.
pub fn parse_cidr(input: &str) -> Result<CidrSpec, CidrError> {
    let (addr_part, prefix_part) = input
        .split_once('/')
        .ok_or_else(|| CidrError::InvalidFormat(format!("missing '/' in {input:?}")))?;

    let address = parse_dotted(addr_part)?;
    let prefix = parse_decimal(prefix_part, "prefix length")?;
    if prefix > 32 {
        return Err(CidrError::InvalidRange(format!(
            "prefix length {prefix_part} exceeds 32"
        )));
    }

    Ok(CidrSpec {
        address,
        prefix_len: prefix as u8,
    })
}

/// Parse four dotted octets into a big-endian integer.
pub(crate) fn parse_dotted(input: &str) -> Result<u32, CidrError> {
    let fields: Vec<&str> = input.split('.').collect();
    if fields.len() != 4 {
        return Err(CidrError::InvalidFormat(format!(
            "expected 4 octets in {input:?}, found {}",
            fields.len()
        )));
    }

    let mut value: u32 = 0;
    for field in fields {
        let octet = parse_decimal(field, "octet")?;
        if octet > 255 {
            return Err(CidrError::InvalidRange(format!("octet {field} exceeds 255")));
        }
        value = (value << 8) | octet;
    }
    Ok(value)
}

// Digits only, no leading zeros. Anything longer than three digits is out of
// range for every field we parse, so it never reaches `u32::from_str`.
fn parse_decimal(field: &str, what: &str) -> Result<u32, CidrError> {
    if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CidrError::InvalidFormat(format!(
            "{what} {field:?} is not a decimal number"
        )));
    }
    if field.len() > 1 && field.starts_with('0') {
        return Err(CidrError::InvalidFormat(format!(
            "{what} {field:?} has a leading zero"
        )));
    }
    if field.len() > 3 {
        return Err(CidrError::InvalidRange(format!("{what} {field} is too large")));
    }
    field
        .parse::<u32>()
        .map_err(|e| CidrError::InvalidFormat(format!("{what} {field:?}: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_host_address_with_prefix() {
        let spec = parse_cidr("192.168.129.23/25").unwrap();
        assert_eq!(spec.address(), 0xC0A8_8117);
        assert_eq!(spec.prefix_len(), 25);
        assert_eq!(spec.to_string(), "192.168.129.23/25");
    }

    #[test]
    fn accepts_boundaries() {
        assert_eq!(parse_cidr("0.0.0.0/0").unwrap().prefix_len(), 0);
        let spec = parse_cidr("255.255.255.255/32").unwrap();
        assert_eq!(spec.address(), u32::MAX);
    }

    #[test]
    fn wrong_field_count_is_format_error() {
        for bad in ["10.0.0/24", "10.0.0.0.0/24", "10..0.0/24", "10.0.0./24"] {
            assert!(
                matches!(parse_cidr(bad), Err(CidrError::InvalidFormat(_))),
                "{bad} should be a format error"
            );
        }
    }

    #[test]
    fn garbage_is_format_error() {
        for bad in [
            "abc/24",
            "",
            "10.0.0.0",
            "10.0.0.0/",
            " 10.0.0.0/24",
            "10.0.0.0/24 ",
            "10.0.0.0/24/8",
            "10.0.0.+1/24",
            "10.0.0.0/-1",
            "010.0.0.1/24",
            "10.0.0.0/024",
            "10.00.0.0/8",
        ] {
            assert!(
                matches!(parse_cidr(bad), Err(CidrError::InvalidFormat(_))),
                "{bad:?} should be a format error"
            );
        }
    }

    #[test]
    fn out_of_bounds_numbers_are_range_errors() {
        for bad in ["10.0.0.0/33", "256.0.0.0/8", "10.0.0.1000/24", "10.0.0.0/100"] {
            assert!(
                matches!(parse_cidr(bad), Err(CidrError::InvalidRange(_))),
                "{bad} should be a range error"
            );
        }
    }

    #[test]
    fn dotted_with_leading_zeros_is_format_error() {
        assert!(matches!(parse_dotted("010.000.000.001"), Err(CidrError::InvalidFormat(_))));
        assert_eq!(parse_dotted("10.0.0.1"), Ok(0x0A00_0001));
        assert_eq!(parse_dotted("0.0.0.0"), Ok(0));
    }

    #[test]
    fn new_rejects_long_prefix() {
        assert!(CidrSpec::new(0, 33).is_none());
        assert!(CidrSpec::new(0, 32).is_some());
    }
}
