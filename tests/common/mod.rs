//! Shared fixture: a node with every device class populated, distinct values
//! per device so decoded output can be traced back to its source.

use telebeacon::snapshot::{
    AttitudeSensor, BatteryDevice, CpuDevice, DiskDevice, GpsDevice, ImuDevice, PowerChannel,
    ReactionWheel, StarTracker, SunSensor, TempSensor, TorqueRod,
};
use telebeacon::Snapshot;

pub fn full_snapshot() -> Snapshot {
    let mut snap = Snapshot::new("demosat");
    snap.node.utcstart = 1_700_000_000.0;
    snap.node.utc = 1_700_000_123.4;

    for i in 0..2 {
        snap.devspec.cpu.push(CpuDevice {
            name: format!("cpu{}", i),
            uptime: 3600 + i as u32,
            boot_count: 12,
            load: 0.437,
            gib: 0.52,
            volt: 3.3,
            amp: 0.21,
            temp: 305.5,
        });
    }
    snap.roles.eps_cpu = Some(0);
    snap.roles.adcs_cpu = Some(1);

    snap.devspec.disk.push(DiskDevice {
        name: "disk0".to_string(),
        gib: 2.75,
    });
    for i in 0..4 {
        snap.devspec.tsen.push(TempSensor {
            name: format!("tsen{}", i),
            temp: 290.0 + i as f64,
        });
    }
    snap.devspec.batt.push(BatteryDevice {
        name: "batt0".to_string(),
        volt: 7.4321,
        amp: -0.4567,
        percent: 85.5,
        temp: 285.25,
    });
    for i in 0..3 {
        let f = i as f64;
        snap.devspec.pv.push(PowerChannel {
            name: format!("pv{}", i),
            volt: 10.0 + 10.0 * f,
            amp: 0.25,
            temp: 310.0,
        });
        snap.devspec.swch.push(PowerChannel {
            name: format!("swch{}", i),
            volt: 5.0,
            amp: 0.125 * (f + 1.0),
            temp: 300.0,
        });
        snap.devspec.mtr.push(TorqueRod {
            name: format!("mtr{}", i),
            volt: 5.0,
            amp: 0.5,
            temp: 295.0,
            mom: 0.2 + 0.1 * f,
            align: [1.0, 0.0, 0.0, 0.0],
        });
        snap.devspec.rw.push(ReactionWheel {
            name: format!("rw{}", i),
            omega: 100.0 * (f + 1.0),
            alpha: 0.5,
            moi: [0.01, 0.01, 0.02],
            align: [1.0, 0.0, 0.0, 0.0],
        });
    }
    snap.devspec.imu.push(ImuDevice {
        name: "imu0".to_string(),
        mag: [25_000.0, -15_000.0, 45_000.0],
        theta: [1.0, 0.0, 0.0, 0.0],
        omega: 0.01,
        alpha: 0.001,
        accel: 9.81,
        bfield: 50_000.0,
        bdot: -3.5,
        align: [1.0, 0.0, 0.0, 0.0],
    });
    snap.devspec.gps.push(GpsDevice {
        name: "gps0".to_string(),
        utc: 1_700_000_123.0,
        geoc: [6_778_137.0, -1_234.5, 400_000.25],
        geocv: [-7_500.5, 120.25, 0.0],
    });
    snap.devspec.stt.push(StarTracker {
        name: "stt0".to_string(),
        heading: 1.25,
        elevation: -0.5,
        bearing: 2.0,
        theta: [1.0, 0.0, 0.0, 0.0],
        omega: [0.001, 0.002, 0.003],
        alpha: [0.0, 0.0, 0.0],
        align: [1.0, 0.0, 0.0, 0.0],
    });
    snap.devspec.ssen.push(SunSensor {
        name: "ssen0".to_string(),
        volt: 3.3,
        amp: 0.05,
        temp: 280.0,
    });
    snap.devspec.sun.push(AttitudeSensor {
        name: "sun0".to_string(),
        azimuth: 0.75,
        elevation: 0.25,
        temp: 281.0,
    });
    snap.devspec.nadir.push(AttitudeSensor {
        name: "nadir0".to_string(),
        azimuth: -0.75,
        elevation: -0.25,
        temp: 282.0,
    });
    snap
}
