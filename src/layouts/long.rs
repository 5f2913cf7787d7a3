//! Long beacons: an array of per-device compact records for many devices of
//! one kind. Capacity is whatever fits after the 5-byte header; trailing
//! entries beyond the snapshot's device count are zero-filled so the encoded
//! size never varies by input.

use static_assertions::const_assert;

use super::{long_capacity, HEADER_SIZE, MAX_BEACON_SIZE};
use crate::error::BeaconError;
use crate::wire::{ByteReader, ByteWriter};

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CpuLongEntry {
    pub uptime: u32,
    pub boot_count: u32,
    pub load: f32,
    pub gib: f32,
    pub disk: f32,
    pub temp: f32,
}

impl CpuLongEntry {
    pub const SIZE: usize = 24;

    fn write(&self, w: &mut ByteWriter<'_>) {
        w.put_u32(self.uptime);
        w.put_u32(self.boot_count);
        w.put_f32(self.load);
        w.put_f32(self.gib);
        w.put_f32(self.disk);
        w.put_f32(self.temp);
    }

    fn read(r: &mut ByteReader<'_>) -> Result<Self, BeaconError> {
        Ok(Self {
            uptime: r.get_u32()?,
            boot_count: r.get_u32()?,
            load: r.get_f32()?,
            gib: r.get_f32()?,
            disk: r.get_f32()?,
            temp: r.get_f32()?,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CpuLong {
    pub cpu: [CpuLongEntry; Self::CAPACITY],
}

impl CpuLong {
    pub const CAPACITY: usize = long_capacity(CpuLongEntry::SIZE);
    pub const SIZE: usize = HEADER_SIZE + Self::CAPACITY * CpuLongEntry::SIZE;

    pub fn write_body(&self, w: &mut ByteWriter<'_>) {
        for entry in &self.cpu {
            entry.write(w);
        }
    }

    pub fn read_body(r: &mut ByteReader<'_>) -> Result<Self, BeaconError> {
        let mut out = Self::default();
        for entry in &mut out.cpu {
            *entry = CpuLongEntry::read(r)?;
        }
        Ok(out)
    }
}

impl Default for CpuLong {
    fn default() -> Self {
        Self {
            cpu: [CpuLongEntry::default(); Self::CAPACITY],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TempLong {
    pub temp: [f32; Self::CAPACITY],
}

impl TempLong {
    pub const CAPACITY: usize = long_capacity(4);
    pub const SIZE: usize = HEADER_SIZE + Self::CAPACITY * 4;

    pub fn write_body(&self, w: &mut ByteWriter<'_>) {
        for t in self.temp {
            w.put_f32(t);
        }
    }

    pub fn read_body(r: &mut ByteReader<'_>) -> Result<Self, BeaconError> {
        let mut out = Self::default();
        for t in &mut out.temp {
            *t = r.get_f32()?;
        }
        Ok(out)
    }
}

impl Default for TempLong {
    fn default() -> Self {
        Self {
            temp: [0.0; Self::CAPACITY],
        }
    }
}

/// Volt/amp pair shared by the PV-string and switch long beacons.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PowerPairEntry {
    pub volt: f32,
    pub amp: f32,
}

impl PowerPairEntry {
    pub const SIZE: usize = 8;

    fn write(&self, w: &mut ByteWriter<'_>) {
        w.put_f32(self.volt);
        w.put_f32(self.amp);
    }

    fn read(r: &mut ByteReader<'_>) -> Result<Self, BeaconError> {
        Ok(Self {
            volt: r.get_f32()?,
            amp: r.get_f32()?,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EpsPvLong {
    pub pv: [PowerPairEntry; Self::CAPACITY],
}

impl EpsPvLong {
    pub const CAPACITY: usize = long_capacity(PowerPairEntry::SIZE);
    pub const SIZE: usize = HEADER_SIZE + Self::CAPACITY * PowerPairEntry::SIZE;

    pub fn write_body(&self, w: &mut ByteWriter<'_>) {
        for entry in &self.pv {
            entry.write(w);
        }
    }

    pub fn read_body(r: &mut ByteReader<'_>) -> Result<Self, BeaconError> {
        let mut out = Self::default();
        for entry in &mut out.pv {
            *entry = PowerPairEntry::read(r)?;
        }
        Ok(out)
    }
}

impl Default for EpsPvLong {
    fn default() -> Self {
        Self {
            pv: [PowerPairEntry::default(); Self::CAPACITY],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EpsSwchLong {
    pub swch: [PowerPairEntry; Self::CAPACITY],
}

impl EpsSwchLong {
    pub const CAPACITY: usize = long_capacity(PowerPairEntry::SIZE);
    pub const SIZE: usize = HEADER_SIZE + Self::CAPACITY * PowerPairEntry::SIZE;

    pub fn write_body(&self, w: &mut ByteWriter<'_>) {
        for entry in &self.swch {
            entry.write(w);
        }
    }

    pub fn read_body(r: &mut ByteReader<'_>) -> Result<Self, BeaconError> {
        let mut out = Self::default();
        for entry in &mut out.swch {
            *entry = PowerPairEntry::read(r)?;
        }
        Ok(out)
    }
}

impl Default for EpsSwchLong {
    fn default() -> Self {
        Self {
            swch: [PowerPairEntry::default(); Self::CAPACITY],
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BattLongEntry {
    pub volt: f32,
    pub amp: f32,
    pub percent: f32,
    pub temp: f32,
}

impl BattLongEntry {
    pub const SIZE: usize = 16;

    fn write(&self, w: &mut ByteWriter<'_>) {
        w.put_f32(self.volt);
        w.put_f32(self.amp);
        w.put_f32(self.percent);
        w.put_f32(self.temp);
    }

    fn read(r: &mut ByteReader<'_>) -> Result<Self, BeaconError> {
        Ok(Self {
            volt: r.get_f32()?,
            amp: r.get_f32()?,
            percent: r.get_f32()?,
            temp: r.get_f32()?,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EpsBattLong {
    pub batt: [BattLongEntry; Self::CAPACITY],
}

impl EpsBattLong {
    pub const CAPACITY: usize = long_capacity(BattLongEntry::SIZE);
    pub const SIZE: usize = HEADER_SIZE + Self::CAPACITY * BattLongEntry::SIZE;

    pub fn write_body(&self, w: &mut ByteWriter<'_>) {
        for entry in &self.batt {
            entry.write(w);
        }
    }

    pub fn read_body(r: &mut ByteReader<'_>) -> Result<Self, BeaconError> {
        let mut out = Self::default();
        for entry in &mut out.batt {
            *entry = BattLongEntry::read(r)?;
        }
        Ok(out)
    }
}

impl Default for EpsBattLong {
    fn default() -> Self {
        Self {
            batt: [BattLongEntry::default(); Self::CAPACITY],
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MtrLongEntry {
    pub mom: f32,
    pub align: [f32; 4],
}

impl MtrLongEntry {
    pub const SIZE: usize = 20;

    fn write(&self, w: &mut ByteWriter<'_>) {
        w.put_f32(self.mom);
        for a in self.align {
            w.put_f32(a);
        }
    }

    fn read(r: &mut ByteReader<'_>) -> Result<Self, BeaconError> {
        Ok(Self {
            mom: r.get_f32()?,
            align: [r.get_f32()?, r.get_f32()?, r.get_f32()?, r.get_f32()?],
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdcsMtrLong {
    pub mtr: [MtrLongEntry; Self::CAPACITY],
}

impl AdcsMtrLong {
    pub const CAPACITY: usize = long_capacity(MtrLongEntry::SIZE);
    pub const SIZE: usize = HEADER_SIZE + Self::CAPACITY * MtrLongEntry::SIZE;

    pub fn write_body(&self, w: &mut ByteWriter<'_>) {
        for entry in &self.mtr {
            entry.write(w);
        }
    }

    pub fn read_body(r: &mut ByteReader<'_>) -> Result<Self, BeaconError> {
        let mut out = Self::default();
        for entry in &mut out.mtr {
            *entry = MtrLongEntry::read(r)?;
        }
        Ok(out)
    }
}

impl Default for AdcsMtrLong {
    fn default() -> Self {
        Self {
            mtr: [MtrLongEntry::default(); Self::CAPACITY],
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RwLongEntry {
    pub omega: f32,
    pub alpha: f32,
    pub moi: [f32; 3],
    pub align: [f32; 4],
}

impl RwLongEntry {
    pub const SIZE: usize = 36;

    fn write(&self, w: &mut ByteWriter<'_>) {
        w.put_f32(self.omega);
        w.put_f32(self.alpha);
        for m in self.moi {
            w.put_f32(m);
        }
        for a in self.align {
            w.put_f32(a);
        }
    }

    fn read(r: &mut ByteReader<'_>) -> Result<Self, BeaconError> {
        Ok(Self {
            omega: r.get_f32()?,
            alpha: r.get_f32()?,
            moi: [r.get_f32()?, r.get_f32()?, r.get_f32()?],
            align: [r.get_f32()?, r.get_f32()?, r.get_f32()?, r.get_f32()?],
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdcsRwLong {
    pub rw: [RwLongEntry; Self::CAPACITY],
}

impl AdcsRwLong {
    pub const CAPACITY: usize = long_capacity(RwLongEntry::SIZE);
    pub const SIZE: usize = HEADER_SIZE + Self::CAPACITY * RwLongEntry::SIZE;

    pub fn write_body(&self, w: &mut ByteWriter<'_>) {
        for entry in &self.rw {
            entry.write(w);
        }
    }

    pub fn read_body(r: &mut ByteReader<'_>) -> Result<Self, BeaconError> {
        let mut out = Self::default();
        for entry in &mut out.rw {
            *entry = RwLongEntry::read(r)?;
        }
        Ok(out)
    }
}

impl Default for AdcsRwLong {
    fn default() -> Self {
        Self {
            rw: [RwLongEntry::default(); Self::CAPACITY],
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ImuLongEntry {
    pub theta: [f32; 4],
    pub omega: f32,
    pub alpha: f32,
    pub accel: f32,
    pub bfield: f32,
    pub bdot: f32,
    pub align: [f32; 4],
}

impl ImuLongEntry {
    pub const SIZE: usize = 52;

    fn write(&self, w: &mut ByteWriter<'_>) {
        for t in self.theta {
            w.put_f32(t);
        }
        w.put_f32(self.omega);
        w.put_f32(self.alpha);
        w.put_f32(self.accel);
        w.put_f32(self.bfield);
        w.put_f32(self.bdot);
        for a in self.align {
            w.put_f32(a);
        }
    }

    fn read(r: &mut ByteReader<'_>) -> Result<Self, BeaconError> {
        Ok(Self {
            theta: [r.get_f32()?, r.get_f32()?, r.get_f32()?, r.get_f32()?],
            omega: r.get_f32()?,
            alpha: r.get_f32()?,
            accel: r.get_f32()?,
            bfield: r.get_f32()?,
            bdot: r.get_f32()?,
            align: [r.get_f32()?, r.get_f32()?, r.get_f32()?, r.get_f32()?],
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdcsImuLong {
    pub imu: [ImuLongEntry; Self::CAPACITY],
}

impl AdcsImuLong {
    pub const CAPACITY: usize = long_capacity(ImuLongEntry::SIZE);
    pub const SIZE: usize = HEADER_SIZE + Self::CAPACITY * ImuLongEntry::SIZE;

    pub fn write_body(&self, w: &mut ByteWriter<'_>) {
        for entry in &self.imu {
            entry.write(w);
        }
    }

    pub fn read_body(r: &mut ByteReader<'_>) -> Result<Self, BeaconError> {
        let mut out = Self::default();
        for entry in &mut out.imu {
            *entry = ImuLongEntry::read(r)?;
        }
        Ok(out)
    }
}

impl Default for AdcsImuLong {
    fn default() -> Self {
        Self {
            imu: [ImuLongEntry::default(); Self::CAPACITY],
        }
    }
}

/// GPS entries keep double precision: position error at f32 resolution would
/// exceed tens of meters in geocentric coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GpsLongEntry {
    pub utc: f64,
    pub geoc: [f64; 3],
    pub geocv: [f32; 3],
}

impl GpsLongEntry {
    pub const SIZE: usize = 44;

    fn write(&self, w: &mut ByteWriter<'_>) {
        w.put_f64(self.utc);
        for g in self.geoc {
            w.put_f64(g);
        }
        for v in self.geocv {
            w.put_f32(v);
        }
    }

    fn read(r: &mut ByteReader<'_>) -> Result<Self, BeaconError> {
        Ok(Self {
            utc: r.get_f64()?,
            geoc: [r.get_f64()?, r.get_f64()?, r.get_f64()?],
            geocv: [r.get_f32()?, r.get_f32()?, r.get_f32()?],
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdcsGpsLong {
    pub gps: [GpsLongEntry; Self::CAPACITY],
}

impl AdcsGpsLong {
    pub const CAPACITY: usize = long_capacity(GpsLongEntry::SIZE);
    pub const SIZE: usize = HEADER_SIZE + Self::CAPACITY * GpsLongEntry::SIZE;

    pub fn write_body(&self, w: &mut ByteWriter<'_>) {
        for entry in &self.gps {
            entry.write(w);
        }
    }

    pub fn read_body(r: &mut ByteReader<'_>) -> Result<Self, BeaconError> {
        let mut out = Self::default();
        for entry in &mut out.gps {
            *entry = GpsLongEntry::read(r)?;
        }
        Ok(out)
    }
}

impl Default for AdcsGpsLong {
    fn default() -> Self {
        Self {
            gps: [GpsLongEntry::default(); Self::CAPACITY],
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SttLongEntry {
    pub theta: [f32; 4],
    pub omega: [f32; 3],
    pub alpha: [f32; 3],
    pub align: [f32; 4],
}

impl SttLongEntry {
    pub const SIZE: usize = 56;

    fn write(&self, w: &mut ByteWriter<'_>) {
        for t in self.theta {
            w.put_f32(t);
        }
        for o in self.omega {
            w.put_f32(o);
        }
        for a in self.alpha {
            w.put_f32(a);
        }
        for a in self.align {
            w.put_f32(a);
        }
    }

    fn read(r: &mut ByteReader<'_>) -> Result<Self, BeaconError> {
        Ok(Self {
            theta: [r.get_f32()?, r.get_f32()?, r.get_f32()?, r.get_f32()?],
            omega: [r.get_f32()?, r.get_f32()?, r.get_f32()?],
            alpha: [r.get_f32()?, r.get_f32()?, r.get_f32()?],
            align: [r.get_f32()?, r.get_f32()?, r.get_f32()?, r.get_f32()?],
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdcsSttLong {
    pub stt: [SttLongEntry; Self::CAPACITY],
}

impl AdcsSttLong {
    pub const CAPACITY: usize = long_capacity(SttLongEntry::SIZE);
    pub const SIZE: usize = HEADER_SIZE + Self::CAPACITY * SttLongEntry::SIZE;

    pub fn write_body(&self, w: &mut ByteWriter<'_>) {
        for entry in &self.stt {
            entry.write(w);
        }
    }

    pub fn read_body(r: &mut ByteReader<'_>) -> Result<Self, BeaconError> {
        let mut out = Self::default();
        for entry in &mut out.stt {
            *entry = SttLongEntry::read(r)?;
        }
        Ok(out)
    }
}

impl Default for AdcsSttLong {
    fn default() -> Self {
        Self {
            stt: [SttLongEntry::default(); Self::CAPACITY],
        }
    }
}

const_assert!(CpuLong::SIZE <= MAX_BEACON_SIZE);
const_assert!(TempLong::SIZE <= MAX_BEACON_SIZE);
const_assert!(EpsPvLong::SIZE <= MAX_BEACON_SIZE);
const_assert!(EpsSwchLong::SIZE <= MAX_BEACON_SIZE);
const_assert!(EpsBattLong::SIZE <= MAX_BEACON_SIZE);
const_assert!(AdcsMtrLong::SIZE <= MAX_BEACON_SIZE);
const_assert!(AdcsRwLong::SIZE <= MAX_BEACON_SIZE);
const_assert!(AdcsImuLong::SIZE <= MAX_BEACON_SIZE);
const_assert!(AdcsGpsLong::SIZE <= MAX_BEACON_SIZE);
const_assert!(AdcsSttLong::SIZE <= MAX_BEACON_SIZE);

// At least one device record must fit in every long layout.
const_assert!(CpuLong::CAPACITY >= 1);
const_assert!(AdcsSttLong::CAPACITY >= 1);
