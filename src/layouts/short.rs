//! Short beacons: one device's (or one summary's) snapshot, tens of bytes.

use static_assertions::const_assert;

use super::{HEADER_SIZE, MAX_BEACON_SIZE};
use crate::error::BeaconError;
use crate::wire::{ByteReader, ByteWriter};

/// CPU utilization snapshot: load plus memory/disk in use.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Cpu1Short {
    pub load: f32,
    /// Memory in use, GiB.
    pub memory: f32,
    /// Disk in use, GiB.
    pub disk: f32,
}

impl Cpu1Short {
    pub const SIZE: usize = HEADER_SIZE + 12;

    pub fn write_body(&self, w: &mut ByteWriter<'_>) {
        w.put_f32(self.load);
        w.put_f32(self.memory);
        w.put_f32(self.disk);
    }

    pub fn read_body(r: &mut ByteReader<'_>) -> Result<Self, BeaconError> {
        Ok(Self {
            load: r.get_f32()?,
            memory: r.get_f32()?,
            disk: r.get_f32()?,
        })
    }
}

/// CPU lifecycle counters.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Cpu2Short {
    pub uptime: u32,
    pub boot_count: u32,
    /// Mission start epoch, unix seconds.
    pub initial_date: u32,
}

impl Cpu2Short {
    pub const SIZE: usize = HEADER_SIZE + 12;

    pub fn write_body(&self, w: &mut ByteWriter<'_>) {
        w.put_u32(self.uptime);
        w.put_u32(self.boot_count);
        w.put_u32(self.initial_date);
    }

    pub fn read_body(r: &mut ByteReader<'_>) -> Result<Self, BeaconError> {
        Ok(Self {
            uptime: r.get_u32()?,
            boot_count: r.get_u32()?,
            initial_date: r.get_u32()?,
        })
    }
}

/// First three temperature sensors.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TempShort {
    pub temp: [f32; 3],
}

impl TempShort {
    pub const SIZE: usize = HEADER_SIZE + 12;

    pub fn write_body(&self, w: &mut ByteWriter<'_>) {
        for t in self.temp {
            w.put_f32(t);
        }
    }

    pub fn read_body(r: &mut ByteReader<'_>) -> Result<Self, BeaconError> {
        Ok(Self {
            temp: [r.get_f32()?, r.get_f32()?, r.get_f32()?],
        })
    }
}

/// Volt/amp/temp triple shared by several device-power beacons (EPS CPU,
/// PV summary, switch summary, ADCS CPU, torque rod, sun-sensor electronics).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DevPowerShort {
    pub volt: f32,
    pub amp: f32,
    pub temp: f32,
}

impl DevPowerShort {
    pub const SIZE: usize = HEADER_SIZE + 12;

    pub fn write_body(&self, w: &mut ByteWriter<'_>) {
        w.put_f32(self.volt);
        w.put_f32(self.amp);
        w.put_f32(self.temp);
    }

    pub fn read_body(r: &mut ByteReader<'_>) -> Result<Self, BeaconError> {
        Ok(Self {
            volt: r.get_f32()?,
            amp: r.get_f32()?,
            temp: r.get_f32()?,
        })
    }
}

/// Battery snapshot with milli-scaled integers. Volt/amp saturate at
/// ±32.767 V / ±32.767 A; the scale factor is 1000 both ways.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BattShort {
    pub volt_mv: i16,
    pub amp_ma: i16,
    pub temp: f32,
}

impl BattShort {
    pub const SIZE: usize = HEADER_SIZE + 8;

    pub fn write_body(&self, w: &mut ByteWriter<'_>) {
        w.put_i16(self.volt_mv);
        w.put_i16(self.amp_ma);
        w.put_f32(self.temp);
    }

    pub fn read_body(r: &mut ByteReader<'_>) -> Result<Self, BeaconError> {
        Ok(Self {
            volt_mv: r.get_i16()?,
            amp_ma: r.get_i16()?,
            temp: r.get_f32()?,
        })
    }
}

/// Speeds of the first three reaction wheels, rad/s.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RwRateShort {
    pub omega: [f32; 3],
}

impl RwRateShort {
    pub const SIZE: usize = HEADER_SIZE + 12;

    pub fn write_body(&self, w: &mut ByteWriter<'_>) {
        for o in self.omega {
            w.put_f32(o);
        }
    }

    pub fn read_body(r: &mut ByteReader<'_>) -> Result<Self, BeaconError> {
        Ok(Self {
            omega: [r.get_f32()?, r.get_f32()?, r.get_f32()?],
        })
    }
}

/// Magnetometer vector from the first IMU, nT.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MagShort {
    pub mag: [f32; 3],
}

impl MagShort {
    pub const SIZE: usize = HEADER_SIZE + 12;

    pub fn write_body(&self, w: &mut ByteWriter<'_>) {
        for m in self.mag {
            w.put_f32(m);
        }
    }

    pub fn read_body(r: &mut ByteReader<'_>) -> Result<Self, BeaconError> {
        Ok(Self {
            mag: [r.get_f32()?, r.get_f32()?, r.get_f32()?],
        })
    }
}

/// Geocentric position from the first GPS receiver, m (narrowed to f32).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GpsShort {
    pub geoc: [f32; 3],
}

impl GpsShort {
    pub const SIZE: usize = HEADER_SIZE + 12;

    pub fn write_body(&self, w: &mut ByteWriter<'_>) {
        for g in self.geoc {
            w.put_f32(g);
        }
    }

    pub fn read_body(r: &mut ByteReader<'_>) -> Result<Self, BeaconError> {
        Ok(Self {
            geoc: [r.get_f32()?, r.get_f32()?, r.get_f32()?],
        })
    }
}

/// Pointing solution from the first star tracker, degrees.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SttShort {
    pub heading: f32,
    pub elevation: f32,
    pub bearing: f32,
}

impl SttShort {
    pub const SIZE: usize = HEADER_SIZE + 12;

    pub fn write_body(&self, w: &mut ByteWriter<'_>) {
        w.put_f32(self.heading);
        w.put_f32(self.elevation);
        w.put_f32(self.bearing);
    }

    pub fn read_body(r: &mut ByteReader<'_>) -> Result<Self, BeaconError> {
        Ok(Self {
            heading: r.get_f32()?,
            elevation: r.get_f32()?,
            bearing: r.get_f32()?,
        })
    }
}

/// Directional sensor reading (sun or nadir vector), degrees.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AttShort {
    pub azimuth: f32,
    pub elevation: f32,
    pub temp: f32,
}

impl AttShort {
    pub const SIZE: usize = HEADER_SIZE + 12;

    pub fn write_body(&self, w: &mut ByteWriter<'_>) {
        w.put_f32(self.azimuth);
        w.put_f32(self.elevation);
        w.put_f32(self.temp);
    }

    pub fn read_body(r: &mut ByteReader<'_>) -> Result<Self, BeaconError> {
        Ok(Self {
            azimuth: r.get_f32()?,
            elevation: r.get_f32()?,
            temp: r.get_f32()?,
        })
    }
}

const_assert!(Cpu1Short::SIZE <= MAX_BEACON_SIZE);
const_assert!(Cpu2Short::SIZE <= MAX_BEACON_SIZE);
const_assert!(TempShort::SIZE <= MAX_BEACON_SIZE);
const_assert!(DevPowerShort::SIZE <= MAX_BEACON_SIZE);
const_assert!(BattShort::SIZE <= MAX_BEACON_SIZE);
const_assert!(RwRateShort::SIZE <= MAX_BEACON_SIZE);
const_assert!(MagShort::SIZE <= MAX_BEACON_SIZE);
const_assert!(GpsShort::SIZE <= MAX_BEACON_SIZE);
const_assert!(SttShort::SIZE <= MAX_BEACON_SIZE);
const_assert!(AttShort::SIZE <= MAX_BEACON_SIZE);
