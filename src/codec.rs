//! Beacon encoder/decoder.
//!
//! Encoding narrows full-precision snapshot values into a fixed layout and
//! serializes it field-by-field little-endian. Decoding validates the tag
//! and length first, reconstructs the layout, and only then touches the
//! target snapshot, so a malformed packet never leaves partial writes.
//! The narrowing round trip is lossy by design: decoded values match the
//! wire precision, not the original doubles.

use serde_json::{json, Value};

use crate::error::{BeaconError, DeviceKind};
use crate::layouts::{long, short, MAX_BEACON_SIZE};
use crate::registry::BeaconType;
use crate::snapshot::{ensure_device, CpuDevice, PowerChannel, Snapshot};
use crate::wire::{from_milli_i16, to_milli_i16, ByteReader, ByteWriter};

/// Encoded beacon payload. Capacity equals the transport's hard limit.
pub type BeaconBytes = heapless::Vec<u8, MAX_BEACON_SIZE>;

fn require(kind: DeviceKind, need: usize, have: usize) -> Result<(), BeaconError> {
    if have < need {
        return Err(BeaconError::InsufficientDevices { kind, need, have });
    }
    Ok(())
}

fn role_cpu(snap: &Snapshot, role: Option<usize>) -> Result<&CpuDevice, BeaconError> {
    let have = snap.devspec.cpu.len();
    let idx = role.ok_or(BeaconError::InsufficientDevices {
        kind: DeviceKind::Cpu,
        need: 1,
        have: 0,
    })?;
    snap.devspec.cpu.get(idx).ok_or(BeaconError::InsufficientDevices {
        kind: DeviceKind::Cpu,
        need: idx + 1,
        have,
    })
}

fn channel_mean(channels: &[PowerChannel], kind: DeviceKind) -> Result<short::DevPowerShort, BeaconError> {
    require(kind, 1, channels.len())?;
    let n = channels.len() as f64;
    let (volt, amp, temp) = channels.iter().fold((0.0, 0.0, 0.0), |acc, c| {
        (acc.0 + c.volt, acc.1 + c.amp, acc.2 + c.temp)
    });
    Ok(short::DevPowerShort {
        volt: (volt / n) as f32,
        amp: (amp / n) as f32,
        temp: (temp / n) as f32,
    })
}

/// Encode one beacon from the live snapshot. The result length always equals
/// `ty.size()`; missing prerequisite devices yield `InsufficientDevices` and
/// no packet for this cycle.
pub fn encode(ty: BeaconType, snap: &Snapshot) -> Result<BeaconBytes, BeaconError> {
    let size = ty.size();
    let mut buf = [0u8; MAX_BEACON_SIZE];
    let mut w = ByteWriter::new(&mut buf[..size]);
    w.put_u8(ty.tag());
    w.put_u32(snap.node.met_deciseconds());

    let spec = &snap.devspec;
    match ty {
        BeaconType::Cpu1Short => {
            require(DeviceKind::Cpu, 1, spec.cpu.len())?;
            require(DeviceKind::Disk, 1, spec.disk.len())?;
            short::Cpu1Short {
                load: spec.cpu[0].load as f32,
                memory: spec.cpu[0].gib as f32,
                disk: spec.disk[0].gib as f32,
            }
            .write_body(&mut w);
        }
        BeaconType::Cpu2Short => {
            require(DeviceKind::Cpu, 1, spec.cpu.len())?;
            short::Cpu2Short {
                uptime: spec.cpu[0].uptime,
                boot_count: spec.cpu[0].boot_count,
                initial_date: snap.node.utcstart.max(0.0) as u32,
            }
            .write_body(&mut w);
        }
        BeaconType::TempShort => {
            require(DeviceKind::TempSensor, 3, spec.tsen.len())?;
            short::TempShort {
                temp: [
                    spec.tsen[0].temp as f32,
                    spec.tsen[1].temp as f32,
                    spec.tsen[2].temp as f32,
                ],
            }
            .write_body(&mut w);
        }
        BeaconType::EpsCpuShort => {
            let cpu = role_cpu(snap, snap.roles.eps_cpu)?;
            short::DevPowerShort {
                volt: cpu.volt as f32,
                amp: cpu.amp as f32,
                temp: cpu.temp as f32,
            }
            .write_body(&mut w);
        }
        BeaconType::AdcsCpuShort => {
            let cpu = role_cpu(snap, snap.roles.adcs_cpu)?;
            short::DevPowerShort {
                volt: cpu.volt as f32,
                amp: cpu.amp as f32,
                temp: cpu.temp as f32,
            }
            .write_body(&mut w);
        }
        BeaconType::EpsPvShort => {
            channel_mean(&spec.pv, DeviceKind::PvString)?.write_body(&mut w);
        }
        BeaconType::EpsSwchShort => {
            channel_mean(&spec.swch, DeviceKind::Switch)?.write_body(&mut w);
        }
        BeaconType::EpsBattShort => {
            require(DeviceKind::Battery, 1, spec.batt.len())?;
            short::BattShort {
                volt_mv: to_milli_i16(spec.batt[0].volt),
                amp_ma: to_milli_i16(spec.batt[0].amp),
                temp: spec.batt[0].temp as f32,
            }
            .write_body(&mut w);
        }
        BeaconType::AdcsMtrShort => {
            require(DeviceKind::TorqueRod, 1, spec.mtr.len())?;
            short::DevPowerShort {
                volt: spec.mtr[0].volt as f32,
                amp: spec.mtr[0].amp as f32,
                temp: spec.mtr[0].temp as f32,
            }
            .write_body(&mut w);
        }
        BeaconType::AdcsRwShort => {
            require(DeviceKind::ReactionWheel, 3, spec.rw.len())?;
            short::RwRateShort {
                omega: [
                    spec.rw[0].omega as f32,
                    spec.rw[1].omega as f32,
                    spec.rw[2].omega as f32,
                ],
            }
            .write_body(&mut w);
        }
        BeaconType::AdcsImuShort => {
            require(DeviceKind::Imu, 1, spec.imu.len())?;
            short::MagShort {
                mag: [
                    spec.imu[0].mag[0] as f32,
                    spec.imu[0].mag[1] as f32,
                    spec.imu[0].mag[2] as f32,
                ],
            }
            .write_body(&mut w);
        }
        BeaconType::AdcsGpsShort => {
            require(DeviceKind::Gps, 1, spec.gps.len())?;
            short::GpsShort {
                geoc: [
                    spec.gps[0].geoc[0] as f32,
                    spec.gps[0].geoc[1] as f32,
                    spec.gps[0].geoc[2] as f32,
                ],
            }
            .write_body(&mut w);
        }
        BeaconType::AdcsSttShort => {
            require(DeviceKind::StarTracker, 1, spec.stt.len())?;
            short::SttShort {
                heading: spec.stt[0].heading as f32,
                elevation: spec.stt[0].elevation as f32,
                bearing: spec.stt[0].bearing as f32,
            }
            .write_body(&mut w);
        }
        BeaconType::AdcsSsenShort => {
            require(DeviceKind::SunSensor, 1, spec.ssen.len())?;
            short::DevPowerShort {
                volt: spec.ssen[0].volt as f32,
                amp: spec.ssen[0].amp as f32,
                temp: spec.ssen[0].temp as f32,
            }
            .write_body(&mut w);
        }
        BeaconType::AdcsSunShort => {
            require(DeviceKind::SunAttitude, 1, spec.sun.len())?;
            short::AttShort {
                azimuth: spec.sun[0].azimuth as f32,
                elevation: spec.sun[0].elevation as f32,
                temp: spec.sun[0].temp as f32,
            }
            .write_body(&mut w);
        }
        BeaconType::AdcsNadirShort => {
            require(DeviceKind::NadirAttitude, 1, spec.nadir.len())?;
            short::AttShort {
                azimuth: spec.nadir[0].azimuth as f32,
                elevation: spec.nadir[0].elevation as f32,
                temp: spec.nadir[0].temp as f32,
            }
            .write_body(&mut w);
        }
        BeaconType::CpuLong => {
            require(DeviceKind::Cpu, 1, spec.cpu.len())?;
            let mut layout = long::CpuLong::default();
            for (entry, cpu) in layout.cpu.iter_mut().zip(&spec.cpu) {
                *entry = long::CpuLongEntry {
                    uptime: cpu.uptime,
                    boot_count: cpu.boot_count,
                    load: cpu.load as f32,
                    gib: cpu.gib as f32,
                    disk: spec.disk.first().map_or(0.0, |d| d.gib as f32),
                    temp: cpu.temp as f32,
                };
            }
            layout.write_body(&mut w);
        }
        BeaconType::TempLong => {
            require(DeviceKind::TempSensor, 1, spec.tsen.len())?;
            let mut layout = long::TempLong::default();
            for (slot, sensor) in layout.temp.iter_mut().zip(&spec.tsen) {
                *slot = sensor.temp as f32;
            }
            layout.write_body(&mut w);
        }
        BeaconType::EpsPvLong => {
            require(DeviceKind::PvString, 1, spec.pv.len())?;
            let mut layout = long::EpsPvLong::default();
            for (entry, pv) in layout.pv.iter_mut().zip(&spec.pv) {
                *entry = long::PowerPairEntry {
                    volt: pv.volt as f32,
                    amp: pv.amp as f32,
                };
            }
            layout.write_body(&mut w);
        }
        BeaconType::EpsSwchLong => {
            require(DeviceKind::Switch, 1, spec.swch.len())?;
            let mut layout = long::EpsSwchLong::default();
            for (entry, sw) in layout.swch.iter_mut().zip(&spec.swch) {
                *entry = long::PowerPairEntry {
                    volt: sw.volt as f32,
                    amp: sw.amp as f32,
                };
            }
            layout.write_body(&mut w);
        }
        BeaconType::EpsBattLong => {
            require(DeviceKind::Battery, 1, spec.batt.len())?;
            let mut layout = long::EpsBattLong::default();
            for (entry, batt) in layout.batt.iter_mut().zip(&spec.batt) {
                *entry = long::BattLongEntry {
                    volt: batt.volt as f32,
                    amp: batt.amp as f32,
                    percent: batt.percent as f32,
                    temp: batt.temp as f32,
                };
            }
            layout.write_body(&mut w);
        }
        BeaconType::AdcsMtrLong => {
            require(DeviceKind::TorqueRod, 1, spec.mtr.len())?;
            let mut layout = long::AdcsMtrLong::default();
            for (entry, mtr) in layout.mtr.iter_mut().zip(&spec.mtr) {
                *entry = long::MtrLongEntry {
                    mom: mtr.mom as f32,
                    align: mtr.align.map(|a| a as f32),
                };
            }
            layout.write_body(&mut w);
        }
        BeaconType::AdcsRwLong => {
            require(DeviceKind::ReactionWheel, 1, spec.rw.len())?;
            let mut layout = long::AdcsRwLong::default();
            for (entry, rw) in layout.rw.iter_mut().zip(&spec.rw) {
                *entry = long::RwLongEntry {
                    omega: rw.omega as f32,
                    alpha: rw.alpha as f32,
                    moi: rw.moi.map(|m| m as f32),
                    align: rw.align.map(|a| a as f32),
                };
            }
            layout.write_body(&mut w);
        }
        BeaconType::AdcsImuLong => {
            require(DeviceKind::Imu, 1, spec.imu.len())?;
            let mut layout = long::AdcsImuLong::default();
            for (entry, imu) in layout.imu.iter_mut().zip(&spec.imu) {
                *entry = long::ImuLongEntry {
                    theta: imu.theta.map(|t| t as f32),
                    omega: imu.omega as f32,
                    alpha: imu.alpha as f32,
                    accel: imu.accel as f32,
                    bfield: imu.bfield as f32,
                    bdot: imu.bdot as f32,
                    align: imu.align.map(|a| a as f32),
                };
            }
            layout.write_body(&mut w);
        }
        BeaconType::AdcsGpsLong => {
            require(DeviceKind::Gps, 1, spec.gps.len())?;
            let mut layout = long::AdcsGpsLong::default();
            for (entry, gps) in layout.gps.iter_mut().zip(&spec.gps) {
                *entry = long::GpsLongEntry {
                    utc: gps.utc,
                    geoc: gps.geoc,
                    geocv: gps.geocv.map(|v| v as f32),
                };
            }
            layout.write_body(&mut w);
        }
        BeaconType::AdcsSttLong => {
            require(DeviceKind::StarTracker, 1, spec.stt.len())?;
            let mut layout = long::AdcsSttLong::default();
            for (entry, stt) in layout.stt.iter_mut().zip(&spec.stt) {
                *entry = long::SttLongEntry {
                    theta: stt.theta.map(|t| t as f32),
                    omega: stt.omega.map(|o| o as f32),
                    alpha: stt.alpha.map(|a| a as f32),
                    align: stt.align.map(|a| a as f32),
                };
            }
            layout.write_body(&mut w);
        }
    }

    debug_assert_eq!(w.position(), size);
    BeaconBytes::from_slice(&buf[..size]).map_err(|_| BeaconError::PayloadOverflow)
}

/// Validate tag and length, returning the type and a reader positioned after
/// the tag byte. Nothing is written to any snapshot until this succeeds.
fn open(bytes: &[u8]) -> Result<(BeaconType, ByteReader<'_>), BeaconError> {
    if bytes.is_empty() {
        return Err(BeaconError::Truncated { need: 1, have: 0 });
    }
    let ty = BeaconType::from_tag(bytes[0])?;
    if bytes.len() < ty.size() {
        return Err(BeaconError::Truncated {
            need: ty.size(),
            have: bytes.len(),
        });
    }
    Ok((ty, ByteReader::new(&bytes[1..ty.size()])))
}

/// Decode beacon bytes back into a live snapshot (loop-back / ground-replay
/// path). Single-device beacons grow the target's device vector as needed;
/// long beacons write into the devices the target already has, since the wire
/// carries no population count.
pub fn decode_into(bytes: &[u8], snap: &mut Snapshot) -> Result<BeaconType, BeaconError> {
    let (ty, mut r) = open(bytes)?;
    let met_ds = r.get_u32()?;

    match ty {
        BeaconType::Cpu1Short => {
            let b = short::Cpu1Short::read_body(&mut r)?;
            let cpu = ensure_device(&mut snap.devspec.cpu, 0);
            cpu.load = f64::from(b.load);
            cpu.gib = f64::from(b.memory);
            ensure_device(&mut snap.devspec.disk, 0).gib = f64::from(b.disk);
        }
        BeaconType::Cpu2Short => {
            let b = short::Cpu2Short::read_body(&mut r)?;
            let cpu = ensure_device(&mut snap.devspec.cpu, 0);
            cpu.uptime = b.uptime;
            cpu.boot_count = b.boot_count;
            snap.node.utcstart = f64::from(b.initial_date);
        }
        BeaconType::TempShort => {
            let b = short::TempShort::read_body(&mut r)?;
            for (i, t) in b.temp.iter().enumerate() {
                ensure_device(&mut snap.devspec.tsen, i).temp = f64::from(*t);
            }
        }
        BeaconType::EpsCpuShort | BeaconType::AdcsCpuShort => {
            let b = short::DevPowerShort::read_body(&mut r)?;
            let role = if ty == BeaconType::EpsCpuShort {
                snap.roles.eps_cpu
            } else {
                snap.roles.adcs_cpu
            };
            let cpu = ensure_device(&mut snap.devspec.cpu, role.unwrap_or(0));
            cpu.volt = f64::from(b.volt);
            cpu.amp = f64::from(b.amp);
            cpu.temp = f64::from(b.temp);
        }
        BeaconType::EpsPvShort => {
            let b = short::DevPowerShort::read_body(&mut r)?;
            let pv = ensure_device(&mut snap.devspec.pv, 0);
            pv.volt = f64::from(b.volt);
            pv.amp = f64::from(b.amp);
            pv.temp = f64::from(b.temp);
        }
        BeaconType::EpsSwchShort => {
            let b = short::DevPowerShort::read_body(&mut r)?;
            let sw = ensure_device(&mut snap.devspec.swch, 0);
            sw.volt = f64::from(b.volt);
            sw.amp = f64::from(b.amp);
            sw.temp = f64::from(b.temp);
        }
        BeaconType::EpsBattShort => {
            let b = short::BattShort::read_body(&mut r)?;
            let batt = ensure_device(&mut snap.devspec.batt, 0);
            batt.volt = from_milli_i16(b.volt_mv);
            batt.amp = from_milli_i16(b.amp_ma);
            batt.temp = f64::from(b.temp);
        }
        BeaconType::AdcsMtrShort => {
            let b = short::DevPowerShort::read_body(&mut r)?;
            let mtr = ensure_device(&mut snap.devspec.mtr, 0);
            mtr.volt = f64::from(b.volt);
            mtr.amp = f64::from(b.amp);
            mtr.temp = f64::from(b.temp);
        }
        BeaconType::AdcsRwShort => {
            let b = short::RwRateShort::read_body(&mut r)?;
            for (i, omega) in b.omega.iter().enumerate() {
                ensure_device(&mut snap.devspec.rw, i).omega = f64::from(*omega);
            }
        }
        BeaconType::AdcsImuShort => {
            let b = short::MagShort::read_body(&mut r)?;
            let imu = ensure_device(&mut snap.devspec.imu, 0);
            for (i, m) in b.mag.iter().enumerate() {
                imu.mag[i] = f64::from(*m);
            }
        }
        BeaconType::AdcsGpsShort => {
            let b = short::GpsShort::read_body(&mut r)?;
            let gps = ensure_device(&mut snap.devspec.gps, 0);
            for (i, g) in b.geoc.iter().enumerate() {
                gps.geoc[i] = f64::from(*g);
            }
        }
        BeaconType::AdcsSttShort => {
            let b = short::SttShort::read_body(&mut r)?;
            let stt = ensure_device(&mut snap.devspec.stt, 0);
            stt.heading = f64::from(b.heading);
            stt.elevation = f64::from(b.elevation);
            stt.bearing = f64::from(b.bearing);
        }
        BeaconType::AdcsSsenShort => {
            let b = short::DevPowerShort::read_body(&mut r)?;
            let ssen = ensure_device(&mut snap.devspec.ssen, 0);
            ssen.volt = f64::from(b.volt);
            ssen.amp = f64::from(b.amp);
            ssen.temp = f64::from(b.temp);
        }
        BeaconType::AdcsSunShort => {
            let b = short::AttShort::read_body(&mut r)?;
            let sun = ensure_device(&mut snap.devspec.sun, 0);
            sun.azimuth = f64::from(b.azimuth);
            sun.elevation = f64::from(b.elevation);
            sun.temp = f64::from(b.temp);
        }
        BeaconType::AdcsNadirShort => {
            let b = short::AttShort::read_body(&mut r)?;
            let nadir = ensure_device(&mut snap.devspec.nadir, 0);
            nadir.azimuth = f64::from(b.azimuth);
            nadir.elevation = f64::from(b.elevation);
            nadir.temp = f64::from(b.temp);
        }
        BeaconType::CpuLong => {
            let b = long::CpuLong::read_body(&mut r)?;
            for (cpu, entry) in snap.devspec.cpu.iter_mut().zip(&b.cpu) {
                cpu.uptime = entry.uptime;
                cpu.boot_count = entry.boot_count;
                cpu.load = f64::from(entry.load);
                cpu.gib = f64::from(entry.gib);
                cpu.temp = f64::from(entry.temp);
            }
            if let (Some(disk), Some(entry)) = (snap.devspec.disk.first_mut(), b.cpu.first()) {
                disk.gib = f64::from(entry.disk);
            }
        }
        BeaconType::TempLong => {
            let b = long::TempLong::read_body(&mut r)?;
            for (sensor, t) in snap.devspec.tsen.iter_mut().zip(&b.temp) {
                sensor.temp = f64::from(*t);
            }
        }
        BeaconType::EpsPvLong => {
            let b = long::EpsPvLong::read_body(&mut r)?;
            for (pv, entry) in snap.devspec.pv.iter_mut().zip(&b.pv) {
                pv.volt = f64::from(entry.volt);
                pv.amp = f64::from(entry.amp);
            }
        }
        BeaconType::EpsSwchLong => {
            let b = long::EpsSwchLong::read_body(&mut r)?;
            for (sw, entry) in snap.devspec.swch.iter_mut().zip(&b.swch) {
                sw.volt = f64::from(entry.volt);
                sw.amp = f64::from(entry.amp);
            }
        }
        BeaconType::EpsBattLong => {
            let b = long::EpsBattLong::read_body(&mut r)?;
            for (batt, entry) in snap.devspec.batt.iter_mut().zip(&b.batt) {
                batt.volt = f64::from(entry.volt);
                batt.amp = f64::from(entry.amp);
                batt.percent = f64::from(entry.percent);
                batt.temp = f64::from(entry.temp);
            }
        }
        BeaconType::AdcsMtrLong => {
            let b = long::AdcsMtrLong::read_body(&mut r)?;
            for (mtr, entry) in snap.devspec.mtr.iter_mut().zip(&b.mtr) {
                mtr.mom = f64::from(entry.mom);
                mtr.align = entry.align.map(f64::from);
            }
        }
        BeaconType::AdcsRwLong => {
            let b = long::AdcsRwLong::read_body(&mut r)?;
            for (rw, entry) in snap.devspec.rw.iter_mut().zip(&b.rw) {
                rw.omega = f64::from(entry.omega);
                rw.alpha = f64::from(entry.alpha);
                rw.moi = entry.moi.map(f64::from);
                rw.align = entry.align.map(f64::from);
            }
        }
        BeaconType::AdcsImuLong => {
            let b = long::AdcsImuLong::read_body(&mut r)?;
            for (imu, entry) in snap.devspec.imu.iter_mut().zip(&b.imu) {
                imu.theta = entry.theta.map(f64::from);
                imu.omega = f64::from(entry.omega);
                imu.alpha = f64::from(entry.alpha);
                imu.accel = f64::from(entry.accel);
                imu.bfield = f64::from(entry.bfield);
                imu.bdot = f64::from(entry.bdot);
                imu.align = entry.align.map(f64::from);
            }
        }
        BeaconType::AdcsGpsLong => {
            let b = long::AdcsGpsLong::read_body(&mut r)?;
            for (gps, entry) in snap.devspec.gps.iter_mut().zip(&b.gps) {
                gps.utc = entry.utc;
                gps.geoc = entry.geoc;
                gps.geocv = entry.geocv.map(f64::from);
            }
        }
        BeaconType::AdcsSttLong => {
            let b = long::AdcsSttLong::read_body(&mut r)?;
            for (stt, entry) in snap.devspec.stt.iter_mut().zip(&b.stt) {
                stt.theta = entry.theta.map(f64::from);
                stt.omega = entry.omega.map(f64::from);
                stt.alpha = entry.alpha.map(f64::from);
                stt.align = entry.align.map(f64::from);
            }
        }
    }

    snap.node.met = f64::from(met_ds) / 10.0;
    Ok(ty)
}

/// Decode beacon bytes into the flat JSON surface consumed by the telemetry
/// pipeline. `origin` is the transport frame's sender identity; the payload
/// intentionally omits it to save bytes.
pub fn decode_to_json(bytes: &[u8], origin: &str) -> Result<Value, BeaconError> {
    let (ty, mut r) = open(bytes)?;
    let met = f64::from(r.get_u32()?) / 10.0;

    let mut obj = json!({
        "node_name": origin,
        "beacon_type": ty.name(),
        "met": met,
    });
    let map = obj.as_object_mut().ok_or(BeaconError::PayloadOverflow)?;

    match ty {
        BeaconType::Cpu1Short => {
            let b = short::Cpu1Short::read_body(&mut r)?;
            map.insert("Load".into(), json!(f64::from(b.load)));
            map.insert("Memory".into(), json!(f64::from(b.memory)));
            map.insert("Disk".into(), json!(f64::from(b.disk)));
        }
        BeaconType::Cpu2Short => {
            let b = short::Cpu2Short::read_body(&mut r)?;
            map.insert("Uptime".into(), json!(b.uptime));
            map.insert("BootCount".into(), json!(b.boot_count));
            map.insert("InitialDate".into(), json!(b.initial_date));
        }
        BeaconType::TempShort => {
            let b = short::TempShort::read_body(&mut r)?;
            map.insert("Temp1".into(), json!(f64::from(b.temp[0])));
            map.insert("Temp2".into(), json!(f64::from(b.temp[1])));
            map.insert("Temp3".into(), json!(f64::from(b.temp[2])));
        }
        BeaconType::EpsCpuShort
        | BeaconType::EpsPvShort
        | BeaconType::EpsSwchShort
        | BeaconType::AdcsCpuShort
        | BeaconType::AdcsMtrShort
        | BeaconType::AdcsSsenShort => {
            let b = short::DevPowerShort::read_body(&mut r)?;
            map.insert("Volt".into(), json!(f64::from(b.volt)));
            map.insert("Amp".into(), json!(f64::from(b.amp)));
            map.insert("Temp".into(), json!(f64::from(b.temp)));
        }
        BeaconType::EpsBattShort => {
            let b = short::BattShort::read_body(&mut r)?;
            map.insert("Volt".into(), json!(from_milli_i16(b.volt_mv)));
            map.insert("Amp".into(), json!(from_milli_i16(b.amp_ma)));
            map.insert("Temp".into(), json!(f64::from(b.temp)));
        }
        BeaconType::AdcsRwShort => {
            let b = short::RwRateShort::read_body(&mut r)?;
            map.insert("Omega1".into(), json!(f64::from(b.omega[0])));
            map.insert("Omega2".into(), json!(f64::from(b.omega[1])));
            map.insert("Omega3".into(), json!(f64::from(b.omega[2])));
        }
        BeaconType::AdcsImuShort => {
            let b = short::MagShort::read_body(&mut r)?;
            map.insert("MagX".into(), json!(f64::from(b.mag[0])));
            map.insert("MagY".into(), json!(f64::from(b.mag[1])));
            map.insert("MagZ".into(), json!(f64::from(b.mag[2])));
        }
        BeaconType::AdcsGpsShort => {
            let b = short::GpsShort::read_body(&mut r)?;
            map.insert("GeocX".into(), json!(f64::from(b.geoc[0])));
            map.insert("GeocY".into(), json!(f64::from(b.geoc[1])));
            map.insert("GeocZ".into(), json!(f64::from(b.geoc[2])));
        }
        BeaconType::AdcsSttShort => {
            let b = short::SttShort::read_body(&mut r)?;
            map.insert("Heading".into(), json!(f64::from(b.heading)));
            map.insert("Elevation".into(), json!(f64::from(b.elevation)));
            map.insert("Bearing".into(), json!(f64::from(b.bearing)));
        }
        BeaconType::AdcsSunShort | BeaconType::AdcsNadirShort => {
            let b = short::AttShort::read_body(&mut r)?;
            map.insert("Azimuth".into(), json!(f64::from(b.azimuth)));
            map.insert("Elevation".into(), json!(f64::from(b.elevation)));
            map.insert("Temp".into(), json!(f64::from(b.temp)));
        }
        BeaconType::CpuLong => {
            let b = long::CpuLong::read_body(&mut r)?;
            let cpus: Vec<Value> = b
                .cpu
                .iter()
                .map(|e| {
                    json!({
                        "Uptime": e.uptime,
                        "BootCount": e.boot_count,
                        "Load": f64::from(e.load),
                        "Gib": f64::from(e.gib),
                        "Disk": f64::from(e.disk),
                        "Temp": f64::from(e.temp),
                    })
                })
                .collect();
            map.insert("cpus".into(), json!(cpus));
        }
        BeaconType::TempLong => {
            let b = long::TempLong::read_body(&mut r)?;
            let temps: Vec<Value> = b.temp.iter().map(|t| json!(f64::from(*t))).collect();
            map.insert("temps".into(), json!(temps));
        }
        BeaconType::EpsPvLong => {
            let b = long::EpsPvLong::read_body(&mut r)?;
            let strings: Vec<Value> = b
                .pv
                .iter()
                .map(|e| json!({"Volt": f64::from(e.volt), "Amp": f64::from(e.amp)}))
                .collect();
            map.insert("strings".into(), json!(strings));
        }
        BeaconType::EpsSwchLong => {
            let b = long::EpsSwchLong::read_body(&mut r)?;
            let switches: Vec<Value> = b
                .swch
                .iter()
                .map(|e| json!({"Volt": f64::from(e.volt), "Amp": f64::from(e.amp)}))
                .collect();
            map.insert("switches".into(), json!(switches));
        }
        BeaconType::EpsBattLong => {
            let b = long::EpsBattLong::read_body(&mut r)?;
            let batteries: Vec<Value> = b
                .batt
                .iter()
                .map(|e| {
                    json!({
                        "Volt": f64::from(e.volt),
                        "Amp": f64::from(e.amp),
                        "Percent": f64::from(e.percent),
                        "Temp": f64::from(e.temp),
                    })
                })
                .collect();
            map.insert("batteries".into(), json!(batteries));
        }
        BeaconType::AdcsMtrLong => {
            let b = long::AdcsMtrLong::read_body(&mut r)?;
            let rods: Vec<Value> = b
                .mtr
                .iter()
                .map(|e| {
                    json!({
                        "Mom": f64::from(e.mom),
                        "Align": e.align.map(f64::from),
                    })
                })
                .collect();
            map.insert("rods".into(), json!(rods));
        }
        BeaconType::AdcsRwLong => {
            let b = long::AdcsRwLong::read_body(&mut r)?;
            let wheels: Vec<Value> = b
                .rw
                .iter()
                .map(|e| {
                    json!({
                        "Omega": f64::from(e.omega),
                        "Alpha": f64::from(e.alpha),
                        "Moi": e.moi.map(f64::from),
                        "Align": e.align.map(f64::from),
                    })
                })
                .collect();
            map.insert("wheels".into(), json!(wheels));
        }
        BeaconType::AdcsImuLong => {
            let b = long::AdcsImuLong::read_body(&mut r)?;
            let imus: Vec<Value> = b
                .imu
                .iter()
                .map(|e| {
                    json!({
                        "Theta": e.theta.map(f64::from),
                        "Omega": f64::from(e.omega),
                        "Alpha": f64::from(e.alpha),
                        "Accel": f64::from(e.accel),
                        "BField": f64::from(e.bfield),
                        "BDot": f64::from(e.bdot),
                        "Align": e.align.map(f64::from),
                    })
                })
                .collect();
            map.insert("imus".into(), json!(imus));
        }
        BeaconType::AdcsGpsLong => {
            let b = long::AdcsGpsLong::read_body(&mut r)?;
            let receivers: Vec<Value> = b
                .gps
                .iter()
                .map(|e| {
                    json!({
                        "Utc": e.utc,
                        "Geoc": e.geoc,
                        "GeocV": e.geocv.map(f64::from),
                    })
                })
                .collect();
            map.insert("receivers".into(), json!(receivers));
        }
        BeaconType::AdcsSttLong => {
            let b = long::AdcsSttLong::read_body(&mut r)?;
            let trackers: Vec<Value> = b
                .stt
                .iter()
                .map(|e| {
                    json!({
                        "Theta": e.theta.map(f64::from),
                        "Omega": e.omega.map(f64::from),
                        "Alpha": e.alpha.map(f64::from),
                        "Align": e.align.map(f64::from),
                    })
                })
                .collect();
            map.insert("trackers".into(), json!(trackers));
        }
    }

    Ok(obj)
}

/// Render one human-readable line for an incoming beacon payload. Wire bytes
/// the decoder does not understand are surfaced as explicit markers so
/// operators can spot version skew; nothing here ever panics.
pub fn describe(bytes: &[u8], origin: &str) -> String {
    match decode_to_json(bytes, origin) {
        Ok(value) => {
            let name = value["beacon_type"].as_str().unwrap_or("?").to_string();
            format!("[{}] {}", name, value)
        }
        Err(BeaconError::Truncated { .. }) => "[Truncated Beacon]".to_string(),
        Err(_) => "[Unknown Beacon]".to_string(),
    }
}
