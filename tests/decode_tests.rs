//! Decoder failure handling: bad input is reported and skipped, and a failed
//! decode never leaves partial writes in the target snapshot.

mod common;

use common::full_snapshot;
use telebeacon::error::DeviceKind;
use telebeacon::{decode_into, describe, encode, BeaconError, BeaconType, Snapshot};

#[test]
fn test_unknown_tag_rejected_without_writes() {
    let mut ground = Snapshot::new("demosat");
    let bytes = [255u8, 0, 0, 0, 0, 1, 2, 3];

    assert_eq!(
        decode_into(&bytes, &mut ground),
        Err(BeaconError::UnknownType(255))
    );
    assert!(ground.devspec.cpu.is_empty());
    assert_eq!(ground.node.met, 0.0);
}

#[test]
fn test_truncated_beacon_leaves_snapshot_untouched() {
    let snap = full_snapshot();
    let bytes = encode(BeaconType::Cpu1Short, &snap).unwrap();

    let mut ground = Snapshot::new("demosat");
    assert_eq!(
        decode_into(&bytes[..8], &mut ground),
        Err(BeaconError::Truncated { need: 17, have: 8 })
    );
    assert!(ground.devspec.cpu.is_empty());
    assert!(ground.devspec.disk.is_empty());
    assert_eq!(ground.node.met, 0.0);
}

#[test]
fn test_empty_buffer_is_truncated_not_a_panic() {
    let mut ground = Snapshot::new("demosat");
    assert_eq!(
        decode_into(&[], &mut ground),
        Err(BeaconError::Truncated { need: 1, have: 0 })
    );
}

#[test]
fn test_short_decode_grows_device_vector() {
    let snap = full_snapshot();
    let bytes = encode(BeaconType::TempShort, &snap).unwrap();

    // Ground replay starts from a bare node; decoding materializes devices.
    let mut ground = Snapshot::new("demosat");
    decode_into(&bytes, &mut ground).unwrap();
    assert_eq!(ground.devspec.tsen.len(), 3);
    assert_eq!(ground.devspec.tsen[2].temp, 292.0);
}

#[test]
fn test_long_decode_respects_existing_population() {
    let mut snap = full_snapshot();
    snap.devspec.batt.push(Default::default());
    snap.devspec.batt[1].volt = 8.0;
    let bytes = encode(BeaconType::EpsBattLong, &snap).unwrap();

    // The wire carries no population count, so a long decode updates only
    // the devices the target already has.
    let mut ground = Snapshot::new("demosat");
    ground.devspec.batt.push(Default::default());
    ground.devspec.batt.push(Default::default());
    decode_into(&bytes, &mut ground).unwrap();

    assert_eq!(ground.devspec.batt.len(), 2);
    assert_eq!(ground.devspec.batt[0].volt, f64::from(7.4321_f32));
    assert_eq!(ground.devspec.batt[1].volt, 8.0);
}

#[test]
fn test_missing_devices_yield_no_packet() {
    let mut snap = full_snapshot();
    snap.devspec.batt.clear();

    assert_eq!(
        encode(BeaconType::EpsBattShort, &snap),
        Err(BeaconError::InsufficientDevices {
            kind: DeviceKind::Battery,
            need: 1,
            have: 0,
        })
    );
}

#[test]
fn test_unassigned_role_yields_no_packet() {
    let mut snap = full_snapshot();
    snap.roles.eps_cpu = None;

    assert_eq!(
        encode(BeaconType::EpsCpuShort, &snap),
        Err(BeaconError::InsufficientDevices {
            kind: DeviceKind::Cpu,
            need: 1,
            have: 0,
        })
    );
}

#[test]
fn test_role_index_out_of_range_yields_no_packet() {
    let mut snap = full_snapshot();
    snap.roles.adcs_cpu = Some(9);

    assert!(matches!(
        encode(BeaconType::AdcsCpuShort, &snap),
        Err(BeaconError::InsufficientDevices {
            kind: DeviceKind::Cpu,
            ..
        })
    ));
}

#[test]
fn test_too_few_sensors_for_summary_beacon() {
    let mut snap = full_snapshot();
    snap.devspec.tsen.truncate(2);

    assert_eq!(
        encode(BeaconType::TempShort, &snap),
        Err(BeaconError::InsufficientDevices {
            kind: DeviceKind::TempSensor,
            need: 3,
            have: 2,
        })
    );
}

#[test]
fn test_describe_marks_undecodable_input() {
    let snap = full_snapshot();
    let bytes = encode(BeaconType::Cpu1Short, &snap).unwrap();

    let line = describe(&bytes, "demosat");
    assert!(line.starts_with("[CPU1BeaconS]"), "{}", line);
    assert!(line.contains("\"node_name\":\"demosat\""), "{}", line);

    assert_eq!(describe(&bytes[..4], "demosat"), "[Truncated Beacon]");
    assert_eq!(describe(&[255u8; 20], "demosat"), "[Unknown Beacon]");
}
