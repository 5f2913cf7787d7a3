//! Beacon send scheduling: a registry of named beacons, a cyclic send
//! pattern, and a cursor.
//!
//! The pattern list and cursor are the one piece of shared mutable state:
//! an operator command may call `set_pattern` while the periodic send loop
//! is calling `get_next`. Both go through a single mutex; the critical
//! section only copies the current name out, so encoding never runs under
//! the lock.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use crate::codec::encode;
use crate::error::BeaconError;
use crate::frame::WirePacket;
use crate::registry::BeaconType;
use crate::snapshot::Snapshot;

const DEFAULT_INTERVAL_S: f64 = 1.0;

#[derive(Debug, Clone)]
struct BeaconEntry {
    name: String,
    ty: BeaconType,
    size: usize,
}

#[derive(Debug, Default)]
struct PatternState {
    names: Vec<String>,
    cursor: usize,
}

#[derive(Debug)]
pub struct BeaconScheduler {
    entries: Vec<BeaconEntry>,
    pattern: Mutex<PatternState>,
    /// Send period in seconds, stored as f64 bits for lock-free access from
    /// the timing loop.
    interval_bits: AtomicU64,
}

impl BeaconScheduler {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            pattern: Mutex::new(PatternState::default()),
            interval_bits: AtomicU64::new(DEFAULT_INTERVAL_S.to_bits()),
        }
    }

    /// Register a beacon under a pattern name. The declared size must match
    /// the registry's layout size; re-registering a name is only allowed
    /// when tag and size agree with the existing entry.
    pub fn add_beacon(&mut self, name: &str, ty: BeaconType, size: usize) -> Result<(), BeaconError> {
        if size != ty.size() {
            return Err(BeaconError::SizeMismatch {
                name: name.to_string(),
                declared: size,
                actual: ty.size(),
            });
        }
        if let Some(existing) = self.entries.iter().find(|e| e.name == name) {
            if existing.ty != ty || existing.size != size {
                return Err(BeaconError::Conflict(name.to_string()));
            }
            return Ok(());
        }
        self.entries.push(BeaconEntry {
            name: name.to_string(),
            ty,
            size,
        });
        Ok(())
    }

    /// Replace the send pattern. Every name must already be registered. The
    /// cursor resets to 0 so a resize can never leave it out of bounds.
    pub fn set_pattern(&self, names: &[&str]) -> Result<(), BeaconError> {
        for name in names {
            if !self.entries.iter().any(|e| e.name == *name) {
                return Err(BeaconError::UnknownName((*name).to_string()));
            }
        }
        let mut state = self.pattern.lock().unwrap_or_else(|e| e.into_inner());
        state.names = names.iter().map(|n| (*n).to_string()).collect();
        state.cursor = 0;
        Ok(())
    }

    /// Encode and frame the next beacon in the cycle, advancing the cursor
    /// (wrapping). Encoding happens outside the critical section.
    pub fn get_next(&self, snap: &Snapshot) -> Result<WirePacket, BeaconError> {
        let name = {
            let mut state = self.pattern.lock().unwrap_or_else(|e| e.into_inner());
            if state.names.is_empty() {
                return Err(BeaconError::PatternEmpty);
            }
            // Clamp first: set_pattern resets the cursor, but be safe against
            // any future mutation path.
            if state.cursor >= state.names.len() {
                state.cursor = 0;
            }
            let name = state.names[state.cursor].clone();
            state.cursor = (state.cursor + 1) % state.names.len();
            name
        };
        self.get_from_name(&name, snap)
    }

    /// Encode and frame a specific named beacon, out of cycle order. Does
    /// not move the cursor.
    pub fn get_from_name(&self, name: &str, snap: &Snapshot) -> Result<WirePacket, BeaconError> {
        let entry = self
            .entries
            .iter()
            .find(|e| e.name == name)
            .ok_or_else(|| BeaconError::UnknownName(name.to_string()))?;
        let payload = encode(entry.ty, snap)?;
        debug_assert_eq!(payload.len(), entry.size);
        WirePacket::wrap_beacon(&snap.node.name, payload)
    }

    /// Send period hint for the owning agent's timing loop.
    pub fn get_interval(&self) -> f64 {
        f64::from_bits(self.interval_bits.load(Ordering::Relaxed))
    }

    pub fn set_interval(&self, seconds: f64) {
        self.interval_bits.store(seconds.to_bits(), Ordering::Relaxed);
    }

    /// Registered beacon names, for status reporting.
    pub fn registered_names(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.name.clone()).collect()
    }
}

impl Default for BeaconScheduler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::{CpuDevice, DiskDevice, TempSensor};

    fn test_snapshot() -> Snapshot {
        let mut snap = Snapshot::new("testsat");
        snap.node.utcstart = 1_700_000_000.0;
        snap.node.utc = 1_700_000_120.0;
        snap.devspec.cpu.push(CpuDevice::default());
        snap.devspec.disk.push(DiskDevice::default());
        for _ in 0..3 {
            snap.devspec.tsen.push(TempSensor::default());
        }
        snap
    }

    fn test_scheduler() -> BeaconScheduler {
        let mut sched = BeaconScheduler::new();
        sched
            .add_beacon("cpu", BeaconType::Cpu1Short, BeaconType::Cpu1Short.size())
            .unwrap();
        sched
            .add_beacon("cpu2", BeaconType::Cpu2Short, BeaconType::Cpu2Short.size())
            .unwrap();
        sched
            .add_beacon("temp", BeaconType::TempShort, BeaconType::TempShort.size())
            .unwrap();
        sched
    }

    #[test]
    fn test_pattern_cycles_and_wraps() {
        let sched = test_scheduler();
        let snap = test_snapshot();
        sched.set_pattern(&["cpu", "cpu2", "temp"]).unwrap();

        let tags: Vec<u8> = (0..4).map(|_| sched.get_next(&snap).unwrap().subtype).collect();
        assert_eq!(tags, vec![10, 11, 12, 10]);
    }

    #[test]
    fn test_set_pattern_resets_cursor() {
        let sched = test_scheduler();
        let snap = test_snapshot();
        sched.set_pattern(&["cpu", "cpu2", "temp"]).unwrap();
        let _ = sched.get_next(&snap).unwrap();
        let _ = sched.get_next(&snap).unwrap();

        // Shrink the pattern mid-cycle; next send starts from the front.
        sched.set_pattern(&["temp"]).unwrap();
        assert_eq!(sched.get_next(&snap).unwrap().subtype, 12);
        assert_eq!(sched.get_next(&snap).unwrap().subtype, 12);
    }

    #[test]
    fn test_get_from_name_does_not_advance_cursor() {
        let sched = test_scheduler();
        let snap = test_snapshot();
        sched.set_pattern(&["cpu", "cpu2"]).unwrap();

        assert_eq!(sched.get_next(&snap).unwrap().subtype, 10);
        assert_eq!(sched.get_from_name("temp", &snap).unwrap().subtype, 12);
        assert_eq!(sched.get_next(&snap).unwrap().subtype, 11);
    }

    #[test]
    fn test_empty_pattern_is_an_error() {
        let sched = test_scheduler();
        let snap = test_snapshot();
        assert_eq!(sched.get_next(&snap), Err(BeaconError::PatternEmpty));
    }

    #[test]
    fn test_unknown_pattern_name_rejected() {
        let sched = test_scheduler();
        assert!(matches!(
            sched.set_pattern(&["cpu", "nope"]),
            Err(BeaconError::UnknownName(_))
        ));
    }

    #[test]
    fn test_conflicting_registration_rejected() {
        let mut sched = test_scheduler();
        // Same name, same registration: fine.
        sched
            .add_beacon("cpu", BeaconType::Cpu1Short, BeaconType::Cpu1Short.size())
            .unwrap();
        // Same name, different type: rejected.
        assert!(matches!(
            sched.add_beacon("cpu", BeaconType::TempShort, BeaconType::TempShort.size()),
            Err(BeaconError::Conflict(_))
        ));
        // Size disagreeing with the layout: rejected.
        assert!(matches!(
            sched.add_beacon("bad", BeaconType::Cpu1Short, 3),
            Err(BeaconError::SizeMismatch { .. })
        ));
    }

    #[test]
    fn test_interval_round_trips() {
        let sched = test_scheduler();
        assert!((sched.get_interval() - 1.0).abs() < f64::EPSILON);
        sched.set_interval(12.5);
        assert!((sched.get_interval() - 12.5).abs() < f64::EPSILON);
    }
}
