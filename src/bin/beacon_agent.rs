use clap::{App, Arg};
use std::sync::Arc;
use std::time::{Duration, SystemTime, UNIX_EPOCH};
use telebeacon::snapshot::{
    AttitudeSensor, BatteryDevice, CpuDevice, DiskDevice, GpsDevice, ImuDevice, PowerChannel,
    ReactionWheel, StarTracker, SunSensor, TempSensor, TorqueRod,
};
use telebeacon::{describe, BeaconScheduler, BeaconType, Snapshot};
use tokio::io::AsyncWriteExt;
use tokio::net::TcpListener;
use tokio::sync::{broadcast, Mutex};
use tokio::time;
use tracing::{error, info, warn};

const BROADCAST_BUFFER_SIZE: usize = 256;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let matches = App::new("beacon-agent")
        .version("0.1.0")
        .about("Flight-side beacon agent: encodes and broadcasts telemetry beacons")
        .arg(
            Arg::with_name("node")
                .short("n")
                .long("node")
                .value_name("NAME")
                .help("Node name reported in the transport frame origin")
                .takes_value(true)
                .default_value("demosat"),
        )
        .arg(
            Arg::with_name("port")
                .short("p")
                .long("port")
                .value_name("PORT")
                .help("TCP port to broadcast framed beacons on")
                .takes_value(true)
                .default_value("8081"),
        )
        .arg(
            Arg::with_name("interval")
                .short("i")
                .long("interval")
                .value_name("SECONDS")
                .help("Beacon send interval")
                .takes_value(true)
                .default_value("1.0"),
        )
        .get_matches();

    let node_name = matches.value_of("node").unwrap_or("demosat").to_string();
    let port: u16 = matches.value_of("port").unwrap_or("8081").parse()?;
    let interval_s: f64 = matches
        .value_of("interval")
        .unwrap_or("1.0")
        .parse::<f64>()?
        .max(0.1);

    let snapshot = Arc::new(Mutex::new(build_demo_snapshot(&node_name)));
    let scheduler = Arc::new(build_scheduler()?);
    scheduler.set_interval(interval_s);

    let (frame_tx, _) = broadcast::channel::<Vec<u8>>(BROADCAST_BUFFER_SIZE);

    // TCP broadcast server
    let server_tx = frame_tx.clone();
    let listener = TcpListener::bind(format!("127.0.0.1:{}", port)).await?;
    info!("beacon broadcast listening on port {}", port);
    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((mut stream, addr)) => {
                    info!("ground client connected: {}", addr);
                    let mut rx = server_tx.subscribe();
                    tokio::spawn(async move {
                        while let Ok(bytes) = rx.recv().await {
                            let len = (bytes.len() as u16).to_le_bytes();
                            if stream.write_all(&len).await.is_err()
                                || stream.write_all(&bytes).await.is_err()
                            {
                                break;
                            }
                        }
                        info!("ground client disconnected: {}", addr);
                    });
                }
                Err(e) => error!("accept failed: {}", e),
            }
        }
    });

    // Periodic send loop, timed by the scheduler's interval hint
    let mut ticker = time::interval(Duration::from_secs_f64(scheduler.get_interval()));
    info!(
        "sending pattern {:?} every {:.1}s",
        scheduler.registered_names(),
        scheduler.get_interval()
    );

    loop {
        ticker.tick().await;

        let packet = {
            let mut snap = snapshot.lock().await;
            simulate_tick(&mut snap);
            scheduler.get_next(&snap)
        };

        match packet {
            Ok(packet) => {
                let rendered = describe(&packet.payload, packet.origin.as_str());
                info!("TX {}", rendered);
                // No subscribers is fine; beacons are fire-and-forget.
                let _ = frame_tx.send(packet.to_bytes());
            }
            Err(e) => warn!("beacon skipped this cycle: {}", e),
        }
    }
}

fn build_scheduler() -> Result<BeaconScheduler, Box<dyn std::error::Error>> {
    let mut sched = BeaconScheduler::new();
    let pattern_types = [
        ("cpu", BeaconType::Cpu1Short),
        ("cpu2", BeaconType::Cpu2Short),
        ("temp", BeaconType::TempShort),
        ("batt", BeaconType::EpsBattShort),
        ("pv", BeaconType::EpsPvShort),
        ("rw", BeaconType::AdcsRwShort),
        ("imu", BeaconType::AdcsImuShort),
        ("gps", BeaconType::AdcsGpsShort),
        ("battl", BeaconType::EpsBattLong),
        ("cpul", BeaconType::CpuLong),
    ];
    for (name, ty) in pattern_types {
        sched.add_beacon(name, ty, ty.size())?;
    }
    sched.set_pattern(&[
        "cpu", "batt", "pv", "rw", "imu", "gps", "cpu2", "temp", "battl", "cpul",
    ])?;
    Ok(sched)
}

fn build_demo_snapshot(node_name: &str) -> Snapshot {
    let mut snap = Snapshot::new(node_name);
    let now = unix_now();
    snap.node.utcstart = now;
    snap.node.utc = now;

    for i in 0..2 {
        snap.devspec.cpu.push(CpuDevice {
            name: format!("cpu{}", i),
            boot_count: 12,
            ..Default::default()
        });
    }
    snap.roles.eps_cpu = Some(1);
    snap.devspec.disk.push(DiskDevice {
        name: "disk0".to_string(),
        gib: 3.2,
    });
    for i in 0..4 {
        snap.devspec.tsen.push(TempSensor {
            name: format!("tsen{}", i),
            temp: 290.0,
        });
    }
    snap.devspec.batt.push(BatteryDevice {
        name: "batt0".to_string(),
        volt: 7.4,
        amp: -0.5,
        percent: 85.0,
        temp: 285.0,
    });
    for i in 0..3 {
        snap.devspec.pv.push(PowerChannel {
            name: format!("pv{}", i),
            volt: 16.0,
            amp: 0.4,
            temp: 310.0,
        });
        snap.devspec.swch.push(PowerChannel {
            name: format!("swch{}", i),
            volt: 5.0,
            amp: 0.1,
            temp: 300.0,
        });
        snap.devspec.mtr.push(TorqueRod {
            name: format!("mtr{}", i),
            ..Default::default()
        });
        snap.devspec.rw.push(ReactionWheel {
            name: format!("rw{}", i),
            ..Default::default()
        });
    }
    snap.devspec.imu.push(ImuDevice {
        name: "imu0".to_string(),
        ..Default::default()
    });
    snap.devspec.gps.push(GpsDevice {
        name: "gps0".to_string(),
        ..Default::default()
    });
    snap.devspec.stt.push(StarTracker {
        name: "stt0".to_string(),
        ..Default::default()
    });
    snap.devspec.ssen.push(SunSensor {
        name: "ssen0".to_string(),
        ..Default::default()
    });
    snap.devspec.sun.push(AttitudeSensor {
        name: "sun0".to_string(),
        ..Default::default()
    });
    snap.devspec.nadir.push(AttitudeSensor {
        name: "nadir0".to_string(),
        ..Default::default()
    });
    snap
}

/// Drift the demo state so consecutive beacons show movement.
fn simulate_tick(snap: &mut Snapshot) {
    snap.node.utc = unix_now();
    let met = snap.node.utc - snap.node.utcstart;
    let phase = met * 0.05;

    for cpu in &mut snap.devspec.cpu {
        cpu.uptime = met as u32;
        cpu.load = 0.4 + 0.3 * phase.sin().abs();
        cpu.gib = 0.5 + 0.1 * phase.cos().abs();
        cpu.volt = 3.3;
        cpu.amp = 0.2;
        cpu.temp = 305.0 + 5.0 * phase.sin();
    }
    for (i, sensor) in snap.devspec.tsen.iter_mut().enumerate() {
        sensor.temp = 290.0 + 4.0 * (phase + i as f64).sin();
    }
    if let Some(batt) = snap.devspec.batt.first_mut() {
        batt.volt = 7.4 + 0.4 * phase.sin();
        batt.amp = if phase.sin() > 0.0 { 0.8 } else { -0.5 };
        batt.percent = 85.0 + 10.0 * phase.cos();
    }
    for (i, rw) in snap.devspec.rw.iter_mut().enumerate() {
        rw.omega = 100.0 * (phase + i as f64 * 2.0).sin();
        rw.alpha = 0.5 * (phase + i as f64 * 2.0).cos();
    }
    if let Some(imu) = snap.devspec.imu.first_mut() {
        imu.mag = [
            25_000.0 + 5_000.0 * phase.sin(),
            15_000.0 + 3_000.0 * phase.cos(),
            45_000.0 + 2_000.0 * (phase * 2.0).sin(),
        ];
    }
    if let Some(gps) = snap.devspec.gps.first_mut() {
        gps.utc = snap.node.utc;
        gps.geoc = [
            6_778_000.0 * phase.cos(),
            6_778_000.0 * phase.sin(),
            400_000.0,
        ];
        gps.geocv = [-7_500.0 * phase.sin(), 7_500.0 * phase.cos(), 0.0];
    }
}

fn unix_now() -> f64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs_f64())
        .unwrap_or(0.0)
}
