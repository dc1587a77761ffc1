use cidr_sweep::cidr::parse_cidr;
use cidr_sweep::netcalc::{to_dotted, NetworkRange};
use ipnet::Ipv4Net;
use std::net::Ipv4Addr;

#[test]
fn matches_ipnet_for_every_prefix() {
    let addr = Ipv4Addr::new(172, 20, 133, 77);
    for prefix in 0..=32u8 {
        let ours = NetworkRange::compute(u32::from(addr), prefix);
        let theirs = Ipv4Net::new(addr, prefix).unwrap();
        assert_eq!(Ipv4Addr::from(ours.network), theirs.network(), "/{prefix}");
        assert_eq!(Ipv4Addr::from(ours.broadcast), theirs.broadcast(), "/{prefix}");
        assert_eq!(Ipv4Addr::from(ours.netmask), theirs.netmask(), "/{prefix}");
    }
}

#[test]
fn network_and_broadcast_bit_identities() {
    for (addr, prefix) in [(0xC0A8_8117u32, 25u8), (0x0A00_0005, 32), (0xFFFF_FFFF, 0), (0x0102_0304, 13)] {
        let r = NetworkRange::compute(addr, prefix);
        assert_eq!(r.network & !r.netmask, 0);
        assert_eq!(r.broadcast | r.netmask, u32::MAX);
    }
}

#[test]
fn usable_hosts_for_slash_25() {
    let range = NetworkRange::from(parse_cidr("192.168.129.23/25").unwrap());
    let hosts: Vec<String> = range.hosts().iter().map(to_dotted).collect();
    assert_eq!(hosts.len(), 126);
    assert_eq!(hosts.first().map(String::as_str), Some("192.168.129.1"));
    assert_eq!(hosts.last().map(String::as_str), Some("192.168.129.126"));
}

#[test]
fn usable_hosts_for_slash_30_exclude_ends() {
    let range = NetworkRange::from(parse_cidr("10.0.0.0/30").unwrap());
    let hosts: Vec<Ipv4Addr> = range.hosts().addrs().collect();
    assert_eq!(hosts, vec![Ipv4Addr::new(10, 0, 0, 1), Ipv4Addr::new(10, 0, 0, 2)]);
}
