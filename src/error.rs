use thiserror::Error;

/// Device classes a beacon can require from the snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceKind {
    Cpu,
    Disk,
    TempSensor,
    Battery,
    PvString,
    Switch,
    TorqueRod,
    ReactionWheel,
    Imu,
    Gps,
    StarTracker,
    SunSensor,
    SunAttitude,
    NadirAttitude,
}

impl core::fmt::Display for DeviceKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let name = match self {
            DeviceKind::Cpu => "cpu",
            DeviceKind::Disk => "disk",
            DeviceKind::TempSensor => "tsen",
            DeviceKind::Battery => "batt",
            DeviceKind::PvString => "pv",
            DeviceKind::Switch => "swch",
            DeviceKind::TorqueRod => "mtr",
            DeviceKind::ReactionWheel => "rw",
            DeviceKind::Imu => "imu",
            DeviceKind::Gps => "gps",
            DeviceKind::StarTracker => "stt",
            DeviceKind::SunSensor => "ssen",
            DeviceKind::SunAttitude => "sun",
            DeviceKind::NadirAttitude => "nadir",
        };
        write!(f, "{}", name)
    }
}

/// Every failure in this crate is a local, recoverable condition: a bad
/// packet or a premature request must never take down the agent process.
#[derive(Debug, Error, PartialEq)]
pub enum BeaconError {
    #[error("unregistered beacon type tag {0}")]
    UnknownType(u8),

    #[error("unregistered beacon name '{0}'")]
    UnknownName(String),

    #[error("beacon needs {need} {kind} device(s), snapshot has {have}")]
    InsufficientDevices {
        kind: DeviceKind,
        need: usize,
        have: usize,
    },

    #[error("buffer truncated: layout needs {need} bytes, got {have}")]
    Truncated { need: usize, have: usize },

    #[error("frame subtype {frame} does not match payload tag {payload}")]
    TagMismatch { frame: u8, payload: u8 },

    #[error("send pattern is empty")]
    PatternEmpty,

    #[error("beacon '{0}' already registered with a different tag or size")]
    Conflict(String),

    #[error("beacon '{name}' declared {declared} bytes, layout is {actual}")]
    SizeMismatch {
        name: String,
        declared: usize,
        actual: usize,
    },

    #[error("payload exceeds maximum beacon size")]
    PayloadOverflow,

    #[error("frame origin is not valid UTF-8")]
    BadOrigin,

    #[error("packet class {0} is not a beacon")]
    NotABeacon(u8),
}
