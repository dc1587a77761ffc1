use std::net::Ipv4Addr;

use crate::cidr::{self, CidrError, CidrSpec};

/// Blocks with a prefix this short or shorter (512+ addresses) need the user's go-ahead.
pub const LARGE_SCAN_MAX_PREFIX: u8 = 23;

/// Parse a dotted-decimal address into its big-endian integer form.
pub fn to_integer(dotted: &str) -> Result<u32, CidrError> {
    cidr::parse_dotted(dotted)
}

/// Render an address integer as `a.b.c.d`.
pub fn to_dotted(addr: u32) -> String {
    Ipv4Addr::from(addr).to_string()
}

/// Mask with the top `prefix_len` bits set. `/0` gives 0; anything above 32 saturates.
pub fn netmask(prefix_len: u8) -> u32 {
    let host_bits = 32u32.saturating_sub(u32::from(prefix_len));
    u32::MAX.checked_shl(host_bits).unwrap_or(0)
}

/// Addresses derived from a [`CidrSpec`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NetworkRange {
    pub prefix_len: u8,
    pub network: u32,
    pub broadcast: u32,
    pub netmask: u32,
    pub first_host: u32,
    pub last_host: u32,
}

impl NetworkRange {
    /// Compute the enclosing block of `address`.
    ///
    /// `address` does not have to be the network address; host bits are
    /// cleared here. `/31` keeps both addresses (RFC 3021), `/32` is the
    /// single address itself.
    pub fn compute(address: u32, prefix_len: u8) -> Self {
        let prefix_len = prefix_len.min(32);
        let netmask = netmask(prefix_len);
        let network = address & netmask;
        let broadcast = network | !netmask;
        let (first_host, last_host) = match prefix_len {
            32 => (network, network),
            31 => (network, broadcast),
            _ => (network + 1, broadcast - 1),
        };
        Self {
            prefix_len,
            network,
            broadcast,
            netmask,
            first_host,
            last_host,
        }
    }

    pub fn hosts(&self) -> HostRange {
        HostRange::new(self.first_host, self.last_host)
    }

    pub fn host_count(&self) -> u64 {
        self.hosts().size()
    }

    pub fn needs_confirmation(&self) -> bool {
        self.prefix_len <= LARGE_SCAN_MAX_PREFIX
    }
}

impl From<CidrSpec> for NetworkRange {
    fn from(spec: CidrSpec) -> Self {
        Self::compute(spec.address(), spec.prefix_len())
    }
}

/// Inclusive, ascending run of host addresses.
///
/// Iteration is lazy and the range can be walked any number of times.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HostRange {
    first: u32,
    last: u32,
}

impl HostRange {
    pub fn new(first: u32, last: u32) -> Self {
        Self { first, last }
    }

    /// Number of addresses; zero when `first > last`.
    pub fn size(&self) -> u64 {
        if self.first > self.last {
            0
        } else {
            u64::from(self.last - self.first) + 1
        }
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = u32> + Clone {
        self.first..=self.last
    }

    pub fn addrs(&self) -> impl DoubleEndedIterator<Item = Ipv4Addr> + Clone {
        self.iter().map(Ipv4Addr::from)
    }
}

impl IntoIterator for HostRange {
    type Item = u32;
    type IntoIter = std::ops::RangeInclusive<u32>;

    fn into_iter(self) -> Self::IntoIter {
        self.first..=self.last
    }
}
