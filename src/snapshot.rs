//! Full-precision live spacecraft state.
//!
//! The snapshot is owned by the calling agent; the beacon codec only borrows
//! it for the duration of a single encode or decode call and caches nothing.

use serde::{Deserialize, Serialize};

/// Node-level identity and timekeeping.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NodeState {
    pub name: String,
    /// Current UTC as unix seconds.
    pub utc: f64,
    /// Mission start epoch as unix seconds.
    pub utcstart: f64,
    /// Mission elapsed time in seconds. Written back on decode.
    pub met: f64,
}

impl NodeState {
    /// MET as wire deciseconds, saturated into u32.
    pub fn met_deciseconds(&self) -> u32 {
        let ds = ((self.utc - self.utcstart) * 10.0).round();
        if ds <= 0.0 {
            0
        } else if ds >= f64::from(u32::MAX) {
            u32::MAX
        } else {
            ds as u32
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CpuDevice {
    pub name: String,
    pub uptime: u32,
    pub boot_count: u32,
    pub load: f64,
    /// Memory in use, GiB.
    pub gib: f64,
    pub volt: f64,
    pub amp: f64,
    pub temp: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DiskDevice {
    pub name: String,
    /// Storage in use, GiB.
    pub gib: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TempSensor {
    pub name: String,
    pub temp: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BatteryDevice {
    pub name: String,
    pub volt: f64,
    pub amp: f64,
    pub percent: f64,
    pub temp: f64,
}

/// Photovoltaic string or power switch channel.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PowerChannel {
    pub name: String,
    pub volt: f64,
    pub amp: f64,
    pub temp: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TorqueRod {
    pub name: String,
    pub volt: f64,
    pub amp: f64,
    pub temp: f64,
    /// Magnetic moment, A·m².
    pub mom: f64,
    /// Alignment quaternion (w, x, y, z).
    pub align: [f64; 4],
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReactionWheel {
    pub name: String,
    /// Wheel speed, rad/s.
    pub omega: f64,
    /// Wheel acceleration, rad/s².
    pub alpha: f64,
    pub moi: [f64; 3],
    pub align: [f64; 4],
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ImuDevice {
    pub name: String,
    /// Magnetic field, nT.
    pub mag: [f64; 3],
    /// Attitude quaternion (w, x, y, z).
    pub theta: [f64; 4],
    pub omega: f64,
    pub alpha: f64,
    pub accel: f64,
    pub bfield: f64,
    pub bdot: f64,
    pub align: [f64; 4],
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GpsDevice {
    pub name: String,
    /// Fix time, unix seconds.
    pub utc: f64,
    /// Geocentric position, m.
    pub geoc: [f64; 3],
    /// Geocentric velocity, m/s.
    pub geocv: [f64; 3],
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StarTracker {
    pub name: String,
    pub heading: f64,
    pub elevation: f64,
    pub bearing: f64,
    pub theta: [f64; 4],
    pub omega: [f64; 3],
    pub alpha: [f64; 3],
    pub align: [f64; 4],
}

/// Sun-sensor electronics (power telemetry side).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SunSensor {
    pub name: String,
    pub volt: f64,
    pub amp: f64,
    pub temp: f64,
}

/// Directional sensor reading (sun vector or nadir vector).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AttitudeSensor {
    pub name: String,
    pub azimuth: f64,
    pub elevation: f64,
    pub temp: f64,
}

/// Per-class device vectors. Variable length; a beacon type may be requested
/// before the relevant hardware is registered, so encoders guard on counts.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeviceSpec {
    pub cpu: Vec<CpuDevice>,
    pub disk: Vec<DiskDevice>,
    pub tsen: Vec<TempSensor>,
    pub batt: Vec<BatteryDevice>,
    pub pv: Vec<PowerChannel>,
    pub swch: Vec<PowerChannel>,
    pub mtr: Vec<TorqueRod>,
    pub rw: Vec<ReactionWheel>,
    pub imu: Vec<ImuDevice>,
    pub gps: Vec<GpsDevice>,
    pub stt: Vec<StarTracker>,
    pub ssen: Vec<SunSensor>,
    pub sun: Vec<AttitudeSensor>,
    pub nadir: Vec<AttitudeSensor>,
}

/// Device-role indices resolved once at configuration time. Replaces
/// per-encode name-substring searches: "the EPS CPU" is a fixed index into
/// the cpu vector, set when the node is configured.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct DeviceRoles {
    pub eps_cpu: Option<usize>,
    pub adcs_cpu: Option<usize>,
}

/// The full-precision state beacons are encoded from and decoded back into.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Snapshot {
    pub node: NodeState,
    pub devspec: DeviceSpec,
    pub roles: DeviceRoles,
}

impl Snapshot {
    pub fn new(node_name: &str) -> Self {
        Self {
            node: NodeState {
                name: node_name.to_string(),
                ..NodeState::default()
            },
            ..Self::default()
        }
    }
}

/// Grow `devices` with defaulted entries so index `idx` exists. Used by the
/// decode-into-snapshot path: ground replay may start from an empty node.
pub fn ensure_device<T: Default>(devices: &mut Vec<T>, idx: usize) -> &mut T {
    while devices.len() <= idx {
        devices.push(T::default());
    }
    &mut devices[idx]
}
