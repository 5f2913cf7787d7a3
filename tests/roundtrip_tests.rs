//! Encode/decode round trips: decoded values must match wire precision
//! exactly, and every layout must encode to its declared fixed size.

mod common;

use common::full_snapshot;
use telebeacon::{decode_into, decode_to_json, encode, BeaconType, Snapshot, ALL_BEACON_TYPES};

#[test]
fn test_every_type_encodes_to_declared_size() {
    let snap = full_snapshot();
    for ty in ALL_BEACON_TYPES {
        let bytes = encode(ty, &snap).unwrap();
        assert_eq!(bytes.len(), ty.size(), "{}", ty.name());
        assert_eq!(bytes[0], ty.tag(), "{}", ty.name());
    }
}

#[test]
fn test_every_type_survives_a_decode_reencode_cycle() {
    let snap = full_snapshot();
    for ty in ALL_BEACON_TYPES {
        let bytes = encode(ty, &snap).unwrap();

        // Ground node sharing the flight clock and role assignments. Long
        // beacons additionally need the device population mirrored, since
        // their decode writes only into devices the target already has.
        let mut ground = Snapshot::new("demosat");
        ground.node.utc = snap.node.utc;
        ground.node.utcstart = snap.node.utcstart;
        ground.roles = snap.roles;
        if ty.is_long() {
            mirror_device_counts(&snap, &mut ground);
        }

        decode_into(&bytes, &mut ground).unwrap();

        // Re-encoding from the decoded state must reproduce the original
        // payload byte for byte: every wire field decoded, none invented.
        let reencoded = encode(ty, &ground).unwrap();
        assert_eq!(reencoded, bytes, "{}", ty.name());
    }
}

fn mirror_device_counts(from: &telebeacon::Snapshot, to: &mut telebeacon::Snapshot) {
    let (f, t) = (&from.devspec, &mut to.devspec);
    t.cpu.resize_with(f.cpu.len(), Default::default);
    t.disk.resize_with(f.disk.len(), Default::default);
    t.tsen.resize_with(f.tsen.len(), Default::default);
    t.batt.resize_with(f.batt.len(), Default::default);
    t.pv.resize_with(f.pv.len(), Default::default);
    t.swch.resize_with(f.swch.len(), Default::default);
    t.mtr.resize_with(f.mtr.len(), Default::default);
    t.rw.resize_with(f.rw.len(), Default::default);
    t.imu.resize_with(f.imu.len(), Default::default);
    t.gps.resize_with(f.gps.len(), Default::default);
    t.stt.resize_with(f.stt.len(), Default::default);
    t.ssen.resize_with(f.ssen.len(), Default::default);
    t.sun.resize_with(f.sun.len(), Default::default);
    t.nadir.resize_with(f.nadir.len(), Default::default);
}

#[test]
fn test_cpu1_round_trips_at_wire_precision() {
    let snap = full_snapshot();
    let bytes = encode(BeaconType::Cpu1Short, &snap).unwrap();

    let mut ground = Snapshot::new("demosat");
    let ty = decode_into(&bytes, &mut ground).unwrap();
    assert_eq!(ty, BeaconType::Cpu1Short);

    // Values come back at f32 precision, not the original f64.
    assert_eq!(ground.devspec.cpu[0].load, f64::from(0.437_f32));
    assert_eq!(ground.devspec.cpu[0].gib, f64::from(0.52_f32));
    assert_eq!(ground.devspec.disk[0].gib, f64::from(2.75_f32));

    let expected_met = f64::from(snap.node.met_deciseconds()) / 10.0;
    assert_eq!(ground.node.met, expected_met);
}

#[test]
fn test_met_header_is_decisecond_quantized() {
    let mut snap = full_snapshot();
    snap.node.utcstart = 1_700_000_000.0;
    snap.node.utc = 1_700_000_000.0 + 12.34;
    assert_eq!(snap.node.met_deciseconds(), 123);

    let bytes = encode(BeaconType::TempShort, &snap).unwrap();
    let json = decode_to_json(&bytes, "demosat").unwrap();
    assert_eq!(json["met"], 12.3);
}

#[test]
fn test_met_saturates_instead_of_going_negative() {
    let mut snap = full_snapshot();
    // Clock skew before mission start must clamp to zero, not wrap.
    snap.node.utc = snap.node.utcstart - 100.0;
    assert_eq!(snap.node.met_deciseconds(), 0);
}

#[test]
fn test_batt_round_trips_at_milli_precision() {
    let snap = full_snapshot();
    let bytes = encode(BeaconType::EpsBattShort, &snap).unwrap();

    let mut ground = Snapshot::new("demosat");
    decode_into(&bytes, &mut ground).unwrap();
    assert_eq!(ground.devspec.batt[0].volt, 7.432);
    assert_eq!(ground.devspec.batt[0].amp, -0.457);
    assert_eq!(ground.devspec.batt[0].temp, f64::from(285.25_f32));
}

#[test]
fn test_batt_saturates_instead_of_wrapping() {
    let mut snap = full_snapshot();
    snap.devspec.batt[0].volt = 1000.0;
    snap.devspec.batt[0].amp = -1000.0;

    let bytes = encode(BeaconType::EpsBattShort, &snap).unwrap();
    let mut ground = Snapshot::new("demosat");
    decode_into(&bytes, &mut ground).unwrap();

    // Clamped to the milli-i16 rails, never a sign-flipped artifact.
    assert_eq!(ground.devspec.batt[0].volt, 32.767);
    assert_eq!(ground.devspec.batt[0].amp, -32.768);
}

#[test]
fn test_pv_short_is_channel_mean() {
    // Strings at 10, 20, 30 volts; the summary beacon carries the mean.
    let snap = full_snapshot();
    let bytes = encode(BeaconType::EpsPvShort, &snap).unwrap();
    let json = decode_to_json(&bytes, "demosat").unwrap();
    assert_eq!(json["Volt"], 20.0);
    assert_eq!(json["Amp"], 0.25);
}

#[test]
fn test_role_indexed_cpu_beacons_pick_distinct_devices() {
    let mut snap = full_snapshot();
    snap.devspec.cpu[0].temp = 301.0;
    snap.devspec.cpu[1].temp = 302.0;

    let eps = decode_to_json(&encode(BeaconType::EpsCpuShort, &snap).unwrap(), "demosat").unwrap();
    let adcs =
        decode_to_json(&encode(BeaconType::AdcsCpuShort, &snap).unwrap(), "demosat").unwrap();
    assert_eq!(eps["Temp"], 301.0);
    assert_eq!(adcs["Temp"], 302.0);
}

#[test]
fn test_cpu2_carries_mission_epoch() {
    let snap = full_snapshot();
    let bytes = encode(BeaconType::Cpu2Short, &snap).unwrap();

    let json = decode_to_json(&bytes, "demosat").unwrap();
    assert_eq!(json["InitialDate"], 1_700_000_000_u32);
    assert_eq!(json["Uptime"], 3600);
    assert_eq!(json["BootCount"], 12);

    let mut ground = Snapshot::new("demosat");
    decode_into(&bytes, &mut ground).unwrap();
    assert_eq!(ground.node.utcstart, 1_700_000_000.0);
}

#[test]
fn test_long_beacon_zero_fills_trailing_entries() {
    let snap = full_snapshot();
    let bytes = encode(BeaconType::EpsBattLong, &snap).unwrap();
    assert_eq!(bytes.len(), BeaconType::EpsBattLong.size());

    let json = decode_to_json(&bytes, "demosat").unwrap();
    let batteries = json["batteries"].as_array().unwrap();
    // The layout always carries its full capacity; the one real battery is
    // followed by zeroed slots.
    assert!(batteries.len() > 1);
    assert_eq!(batteries[0]["Volt"], f64::from(7.4321_f32));
    assert_eq!(batteries[1]["Volt"], 0.0);
    assert_eq!(batteries[1]["Percent"], 0.0);
}

#[test]
fn test_gps_long_keeps_full_precision_position() {
    let snap = full_snapshot();
    let bytes = encode(BeaconType::AdcsGpsLong, &snap).unwrap();

    let mut ground = Snapshot::new("demosat");
    ground.devspec.gps.push(Default::default());
    decode_into(&bytes, &mut ground).unwrap();

    // Position rides as f64 and survives exactly; velocity is narrowed.
    assert_eq!(ground.devspec.gps[0].geoc, snap.devspec.gps[0].geoc);
    assert_eq!(ground.devspec.gps[0].utc, snap.devspec.gps[0].utc);
    assert_eq!(ground.devspec.gps[0].geocv[0], f64::from(-7_500.5_f32));
}

#[test]
fn test_temp_long_covers_all_registered_sensors() {
    let snap = full_snapshot();
    let bytes = encode(BeaconType::TempLong, &snap).unwrap();
    let json = decode_to_json(&bytes, "demosat").unwrap();
    let temps = json["temps"].as_array().unwrap();
    assert_eq!(temps[0], 290.0);
    assert_eq!(temps[3], 293.0);
    assert_eq!(temps[4], 0.0);
}

#[test]
fn test_json_surface_identity_fields() {
    let snap = full_snapshot();
    for ty in ALL_BEACON_TYPES {
        let bytes = encode(ty, &snap).unwrap();
        let json = decode_to_json(&bytes, "groundsat").unwrap();
        assert_eq!(json["node_name"], "groundsat", "{}", ty.name());
        assert_eq!(json["beacon_type"], ty.name(), "{}", ty.name());
        assert!(json["met"].is_f64() || json["met"].is_u64(), "{}", ty.name());
    }
}
