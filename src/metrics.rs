//! Rolling per-interface throughput state.
//!
//! Speeds are derived from successive counter snapshots as
//! `(current - previous) / 1024` KB per tick. The delta is deliberately
//! not divided by elapsed wall time, so samples are in KB/s only when
//! ticks actually land on the configured interval. A counter that goes
//! backwards (interface reset) yields a negative sample, kept as-is.

use crate::system::counters::Snapshot;

/// Rolling state for one interface. Created on the first tick where the
/// interface appears in two consecutive snapshots, never removed — an
/// interface that disappears keeps its frozen history and stays on
/// screen in its last-known state.
#[derive(Debug, Clone)]
pub struct InterfaceSeries {
    pub name: String,
    /// TX speed samples, KB/s, oldest first.
    pub sent_history: Vec<f64>,
    /// RX speed samples, KB/s, oldest first.
    pub recv_history: Vec<f64>,
    /// X positions for the chart; always exactly `0..len` after an update.
    pub time_index: Vec<usize>,
    /// Lifetime maxima, never windowed or reset.
    pub peak_sent: f64,
    pub peak_recv: f64,
    /// Last observed cumulative counters (overwritten, not accumulated).
    pub total_sent: u64,
    pub total_recv: u64,
    /// Most recent best-effort link status.
    pub link_up: bool,
}

impl InterfaceSeries {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            sent_history: Vec::new(),
            recv_history: Vec::new(),
            time_index: Vec::new(),
            peak_sent: 0.0,
            peak_recv: 0.0,
            total_sent: 0,
            total_recv: 0,
            link_up: false,
        }
    }

    /// Latest (TX, RX) sample, if any.
    pub fn latest(&self) -> Option<(f64, f64)> {
        match (self.sent_history.last(), self.recv_history.last()) {
            (Some(&tx), Some(&rx)) => Some((tx, rx)),
            _ => None,
        }
    }

    /// An interface is active once it has at least one speed sample.
    pub fn is_active(&self) -> bool {
        !self.time_index.is_empty()
    }

    fn push_sample(&mut self, sent_kb: f64, recv_kb: f64, history_size: usize) {
        self.peak_sent = self.peak_sent.max(sent_kb);
        self.peak_recv = self.peak_recv.max(recv_kb);

        self.sent_history.push(sent_kb);
        self.recv_history.push(recv_kb);
        self.time_index.push(self.time_index.len());

        // All three sequences evict in lockstep, then the x positions
        // are reissued so the axis always spans [0, history_size).
        if self.time_index.len() > history_size {
            self.sent_history.remove(0);
            self.recv_history.remove(0);
            self.time_index = (0..self.sent_history.len()).collect();
        }
    }
}

/// Owns all per-interface series, in insertion order. Insertion order
/// drives both palette assignment and the panel listing.
pub struct MetricEngine {
    pub history_size: usize,
    pub interfaces: Vec<InterfaceSeries>,
}

impl MetricEngine {
    pub fn new(history_size: usize) -> Self {
        Self {
            history_size,
            interfaces: Vec::new(),
        }
    }

    /// Fold one pair of snapshots into the rolling state.
    ///
    /// Only interfaces present in both snapshots produce a sample this
    /// tick: a first-sighted interface has no delta yet, and one that
    /// vanished keeps its frozen series untouched.
    pub fn update(&mut self, current: &Snapshot, previous: &Snapshot) {
        let history_size = self.history_size;
        for (name, cur) in current {
            let Some(prev) = previous.get(name) else {
                continue;
            };
            let sent_kb = (cur.sent as f64 - prev.sent as f64) / 1024.0;
            let recv_kb = (cur.recv as f64 - prev.recv as f64) / 1024.0;

            let series = self.series_mut(name);
            series.total_sent = cur.sent;
            series.total_recv = cur.recv;
            series.push_sample(sent_kb, recv_kb, history_size);
        }
    }

    /// Re-probe link status for every known series, frozen ones included.
    pub fn refresh_link_status(&mut self, mut probe: impl FnMut(&str) -> bool) {
        for series in &mut self.interfaces {
            series.link_up = probe(&series.name);
        }
    }

    /// Sum of last-observed cumulative (sent, recv) counters.
    pub fn total_transferred(&self) -> (u64, u64) {
        self.active().fold((0, 0), |(tx, rx), s| {
            (tx + s.total_sent, rx + s.total_recv)
        })
    }

    /// Highest lifetime (TX, RX) peaks across interfaces.
    pub fn peak_throughput(&self) -> (f64, f64) {
        self.active().fold((0.0f64, 0.0f64), |(tx, rx), s| {
            (tx.max(s.peak_sent), rx.max(s.peak_recv))
        })
    }

    /// Sum of the most recent (TX, RX) samples across interfaces.
    pub fn current_throughput(&self) -> (f64, f64) {
        self.active()
            .filter_map(InterfaceSeries::latest)
            .fold((0.0, 0.0), |(tx, rx), (t, r)| (tx + t, rx + r))
    }

    /// Number of interfaces with at least one sample.
    pub fn active_count(&self) -> usize {
        self.active().count()
    }

    /// Largest speed sample currently in any window, either direction.
    /// Feeds the chart's y-axis scaling.
    pub fn max_observed_speed(&self) -> f64 {
        self.interfaces
            .iter()
            .flat_map(|s| s.sent_history.iter().chain(&s.recv_history))
            .fold(0.0f64, |acc, &v| acc.max(v))
    }

    fn active(&self) -> impl Iterator<Item = &InterfaceSeries> {
        self.interfaces.iter().filter(|s| s.is_active())
    }

    fn series_mut(&mut self, name: &str) -> &mut InterfaceSeries {
        let idx = match self.interfaces.iter().position(|s| s.name == name) {
            Some(idx) => idx,
            None => {
                log::debug!("tracking new interface {name}");
                self.interfaces.push(InterfaceSeries::new(name));
                self.interfaces.len() - 1
            }
        };
        &mut self.interfaces[idx]
    }
}
