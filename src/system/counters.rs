//! Per-interface counter source backed by the `sysinfo` crate.

use std::collections::BTreeMap;

use sysinfo::Networks;

/// Cumulative byte counters for one interface, as reported by the OS.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Counters {
    pub sent: u64,
    pub recv: u64,
}

/// A point-in-time reading of all (non-loopback) interfaces.
///
/// Keyed by interface name; a `BTreeMap` keeps iteration order
/// deterministic so chart colors are stable across runs.
pub type Snapshot = BTreeMap<String, Counters>;

/// Wraps the OS network-counter query.
pub struct CounterSource {
    networks: Networks,
}

impl CounterSource {
    pub fn new() -> Self {
        Self {
            networks: Networks::new_with_refreshed_list(),
        }
    }

    /// Read the current cumulative counters for every interface,
    /// excluding loopback. An empty interface list simply yields an
    /// empty snapshot; the tick proceeds with it.
    pub fn snapshot(&mut self) -> Snapshot {
        self.networks.refresh(true);

        self.networks
            .iter()
            .filter(|(name, _)| !is_loopback(name.as_str()))
            .map(|(name, data)| {
                (
                    name.clone(),
                    Counters {
                        sent: data.total_transmitted(),
                        recv: data.total_received(),
                    },
                )
            })
            .collect()
    }

    /// Best-effort link status. Returns `false` for unknown interfaces,
    /// on any probe failure, and on platforms without an implementation.
    /// Display-only; never an error.
    pub fn is_up(&self, name: &str) -> bool {
        link::is_up(name)
    }
}

/// Loopback is excluded from the data model entirely.
/// `lo` on Linux, `lo0` on BSD/macOS, `Loopback …` on Windows.
pub fn is_loopback(name: &str) -> bool {
    name == "lo" || name == "lo0" || name.starts_with("Loopback")
}

#[cfg(target_os = "linux")]
mod link {
    use std::fs;
    use std::path::Path;

    use nix::net::if_::InterfaceFlags;

    /// Read interface flags from sysfs and test IFF_UP.
    pub fn is_up(name: &str) -> bool {
        let path = Path::new("/sys/class/net").join(name).join("flags");
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(e) => {
                log::debug!("link status probe failed for {name}: {e}");
                return false;
            }
        };
        let raw = raw.trim().trim_start_matches("0x");
        match u32::from_str_radix(raw, 16) {
            Ok(bits) => {
                InterfaceFlags::from_bits_truncate(bits as i32).contains(InterfaceFlags::IFF_UP)
            }
            Err(_) => false,
        }
    }
}

#[cfg(not(target_os = "linux"))]
mod link {
    pub fn is_up(_name: &str) -> bool {
        false
    }
}
