//! Beacon type registry: the single source of truth mapping wire tag to
//! display name to layout size.
//!
//! Tag values are a frozen interoperability contract shared with the ground
//! segment. Never renumber them.

use serde::{Deserialize, Serialize};

use crate::error::BeaconError;
use crate::layouts;

/// One-byte wire tag identifying a beacon layout. Short beacons snapshot a
/// single device or summary; long beacons carry an array of per-device
/// records capped to one transport packet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum BeaconType {
    Cpu1Short = 10,
    Cpu2Short = 11,
    TempShort = 12,
    EpsCpuShort = 30,
    EpsPvShort = 31,
    EpsSwchShort = 32,
    EpsBattShort = 33,
    AdcsCpuShort = 40,
    AdcsMtrShort = 41,
    AdcsRwShort = 42,
    AdcsImuShort = 43,
    AdcsGpsShort = 44,
    AdcsSttShort = 45,
    AdcsSsenShort = 46,
    AdcsSunShort = 47,
    AdcsNadirShort = 48,
    CpuLong = 110,
    TempLong = 112,
    EpsPvLong = 131,
    EpsSwchLong = 132,
    EpsBattLong = 133,
    AdcsMtrLong = 141,
    AdcsRwLong = 142,
    AdcsImuLong = 143,
    AdcsGpsLong = 144,
    AdcsSttLong = 145,
}

/// Every registered beacon type, in tag order.
pub const ALL_BEACON_TYPES: [BeaconType; 26] = [
    BeaconType::Cpu1Short,
    BeaconType::Cpu2Short,
    BeaconType::TempShort,
    BeaconType::EpsCpuShort,
    BeaconType::EpsPvShort,
    BeaconType::EpsSwchShort,
    BeaconType::EpsBattShort,
    BeaconType::AdcsCpuShort,
    BeaconType::AdcsMtrShort,
    BeaconType::AdcsRwShort,
    BeaconType::AdcsImuShort,
    BeaconType::AdcsGpsShort,
    BeaconType::AdcsSttShort,
    BeaconType::AdcsSsenShort,
    BeaconType::AdcsSunShort,
    BeaconType::AdcsNadirShort,
    BeaconType::CpuLong,
    BeaconType::TempLong,
    BeaconType::EpsPvLong,
    BeaconType::EpsSwchLong,
    BeaconType::EpsBattLong,
    BeaconType::AdcsMtrLong,
    BeaconType::AdcsRwLong,
    BeaconType::AdcsImuLong,
    BeaconType::AdcsGpsLong,
    BeaconType::AdcsSttLong,
];

impl BeaconType {
    pub fn tag(self) -> u8 {
        self as u8
    }

    /// Resolve a wire tag. Unregistered tags are an error, never a fallback.
    pub fn from_tag(tag: u8) -> Result<Self, BeaconError> {
        ALL_BEACON_TYPES
            .iter()
            .copied()
            .find(|t| t.tag() == tag)
            .ok_or(BeaconError::UnknownType(tag))
    }

    /// Resolve a registry display name.
    pub fn from_name(name: &str) -> Result<Self, BeaconError> {
        ALL_BEACON_TYPES
            .iter()
            .copied()
            .find(|t| t.name() == name)
            .ok_or_else(|| BeaconError::UnknownName(name.to_string()))
    }

    /// Display name used in decoded output and send patterns.
    pub fn name(self) -> &'static str {
        match self {
            BeaconType::Cpu1Short => "CPU1BeaconS",
            BeaconType::Cpu2Short => "CPU2BeaconS",
            BeaconType::TempShort => "TempBeaconS",
            BeaconType::EpsCpuShort => "EPSCPUBeaconS",
            BeaconType::EpsPvShort => "EPSPVBeaconS",
            BeaconType::EpsSwchShort => "EPSSWCHBeaconS",
            BeaconType::EpsBattShort => "EPSBATTBeaconS",
            BeaconType::AdcsCpuShort => "ADCSCPUBeaconS",
            BeaconType::AdcsMtrShort => "ADCSMTRBeaconS",
            BeaconType::AdcsRwShort => "ADCSRWBeaconS",
            BeaconType::AdcsImuShort => "ADCSIMUBeaconS",
            BeaconType::AdcsGpsShort => "ADCSGPSBeaconS",
            BeaconType::AdcsSttShort => "ADCSSTTBeaconS",
            BeaconType::AdcsSsenShort => "ADCSSSENBeaconS",
            BeaconType::AdcsSunShort => "ADCSSUNBeaconS",
            BeaconType::AdcsNadirShort => "ADCSNADIRBeaconS",
            BeaconType::CpuLong => "CPUBeaconL",
            BeaconType::TempLong => "TempBeaconL",
            BeaconType::EpsPvLong => "EPSPVBeaconL",
            BeaconType::EpsSwchLong => "EPSSWCHBeaconL",
            BeaconType::EpsBattLong => "EPSBATTBeaconL",
            BeaconType::AdcsMtrLong => "ADCSMTRBeaconL",
            BeaconType::AdcsRwLong => "ADCSRWBeaconL",
            BeaconType::AdcsImuLong => "ADCSIMUBeaconL",
            BeaconType::AdcsGpsLong => "ADCSGPSBeaconL",
            BeaconType::AdcsSttLong => "ADCSSTTBeaconL",
        }
    }

    /// Fixed encoded size in bytes, tag and MET header included.
    pub fn size(self) -> usize {
        match self {
            BeaconType::Cpu1Short => layouts::short::Cpu1Short::SIZE,
            BeaconType::Cpu2Short => layouts::short::Cpu2Short::SIZE,
            BeaconType::TempShort => layouts::short::TempShort::SIZE,
            BeaconType::EpsCpuShort
            | BeaconType::EpsPvShort
            | BeaconType::EpsSwchShort
            | BeaconType::AdcsMtrShort
            | BeaconType::AdcsSsenShort => layouts::short::DevPowerShort::SIZE,
            BeaconType::EpsBattShort => layouts::short::BattShort::SIZE,
            BeaconType::AdcsCpuShort => layouts::short::DevPowerShort::SIZE,
            BeaconType::AdcsRwShort => layouts::short::RwRateShort::SIZE,
            BeaconType::AdcsImuShort => layouts::short::MagShort::SIZE,
            BeaconType::AdcsGpsShort => layouts::short::GpsShort::SIZE,
            BeaconType::AdcsSttShort => layouts::short::SttShort::SIZE,
            BeaconType::AdcsSunShort | BeaconType::AdcsNadirShort => {
                layouts::short::AttShort::SIZE
            }
            BeaconType::CpuLong => layouts::long::CpuLong::SIZE,
            BeaconType::TempLong => layouts::long::TempLong::SIZE,
            BeaconType::EpsPvLong => layouts::long::EpsPvLong::SIZE,
            BeaconType::EpsSwchLong => layouts::long::EpsSwchLong::SIZE,
            BeaconType::EpsBattLong => layouts::long::EpsBattLong::SIZE,
            BeaconType::AdcsMtrLong => layouts::long::AdcsMtrLong::SIZE,
            BeaconType::AdcsRwLong => layouts::long::AdcsRwLong::SIZE,
            BeaconType::AdcsImuLong => layouts::long::AdcsImuLong::SIZE,
            BeaconType::AdcsGpsLong => layouts::long::AdcsGpsLong::SIZE,
            BeaconType::AdcsSttLong => layouts::long::AdcsSttLong::SIZE,
        }
    }

    pub fn is_long(self) -> bool {
        self.tag() >= 100
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layouts::MAX_BEACON_SIZE;

    #[test]
    fn test_tags_are_unique() {
        for (i, a) in ALL_BEACON_TYPES.iter().enumerate() {
            for b in &ALL_BEACON_TYPES[i + 1..] {
                assert_ne!(a.tag(), b.tag());
                assert_ne!(a.name(), b.name());
            }
        }
    }

    #[test]
    fn test_frozen_tag_assignments() {
        assert_eq!(BeaconType::Cpu1Short.tag(), 10);
        assert_eq!(BeaconType::EpsBattShort.tag(), 33);
        assert_eq!(BeaconType::CpuLong.tag(), 110);
    }

    #[test]
    fn test_every_layout_fits_one_packet() {
        for ty in ALL_BEACON_TYPES {
            assert!(ty.size() <= MAX_BEACON_SIZE, "{} too large", ty.name());
        }
    }

    #[test]
    fn test_tag_space_split() {
        for ty in ALL_BEACON_TYPES {
            assert_eq!(ty.is_long(), ty.tag() >= 100, "{}", ty.name());
            assert_eq!(ty.is_long(), ty.name().ends_with('L'), "{}", ty.name());
        }
    }

    #[test]
    fn test_tag_lookup_round_trips() {
        for ty in ALL_BEACON_TYPES {
            assert_eq!(BeaconType::from_tag(ty.tag()).unwrap(), ty);
            assert_eq!(BeaconType::from_name(ty.name()).unwrap(), ty);
        }
        assert_eq!(
            BeaconType::from_tag(255),
            Err(BeaconError::UnknownType(255))
        );
    }
}
