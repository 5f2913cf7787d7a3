//! # Beacon Telemetry Codec
//!
//! A compact, bandwidth-constrained, bit-exact telemetry encoding/decoding
//! layer for narrowband satellite radio links. A live, full-precision
//! spacecraft state is narrowed into fixed-size binary beacons (each one
//! transport packet or less), and reconstructed on the ground as either a
//! state update or a JSON-readable telemetry record.
//!
//! ## Features
//!
//! - **Frozen wire contract**: one-byte type tags, fixed little-endian
//!   layouts, every beacon capped at 200 bytes
//! - **Lossy-by-design narrowing**: doubles ride as floats or milli-scaled
//!   integers with explicit saturation, never wraparound
//! - **Symmetric decode**: bytes back into a live snapshot, or into the
//!   flat JSON surface the telemetry pipeline consumes
//! - **Cyclic send patterns**: a mutex-guarded pattern/cursor shared between
//!   the periodic send loop and operator reconfiguration
//! - **Graceful degradation**: unknown tags and truncated buffers are
//!   reported, marked, and skipped, never fatal
//!
//! ## Quick Start
//!
//! ```rust
//! use telebeacon::{encode, decode_to_json, BeaconType, Snapshot};
//! use telebeacon::snapshot::{CpuDevice, DiskDevice};
//!
//! let mut snap = Snapshot::new("demosat");
//! snap.node.utcstart = 1_700_000_000.0;
//! snap.node.utc = 1_700_000_060.0;
//! snap.devspec.cpu.push(CpuDevice { load: 0.4, gib: 0.5, ..Default::default() });
//! snap.devspec.disk.push(DiskDevice { gib: 2.5, ..Default::default() });
//!
//! let bytes = encode(BeaconType::Cpu1Short, &snap).unwrap();
//! let json = decode_to_json(&bytes, "demosat").unwrap();
//! assert_eq!(json["beacon_type"], "CPU1BeaconS");
//! ```
//!
//! ## Architecture
//!
//! - [`registry`] - beacon type tags, display names, declared sizes
//! - [`layouts`] - the fixed-size binary record definitions
//! - [`codec`] - encoder and the two decoder surfaces
//! - [`scheduler`] - send pattern registry and cursor
//! - [`frame`] - outer transport envelope (wrap/unwrap only)
//! - [`snapshot`] - full-precision live state the codec borrows
//! - [`wire`] - explicit little-endian field readers/writers

#![deny(warnings)]
#![deny(clippy::all)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]

pub mod codec;
pub mod error;
pub mod frame;
pub mod layouts;
pub mod registry;
pub mod scheduler;
pub mod snapshot;
pub mod wire;

// Re-export main public types for convenience
pub use codec::{decode_into, decode_to_json, describe, encode, BeaconBytes};
pub use error::BeaconError;
pub use frame::{PacketClass, WirePacket};
pub use registry::{BeaconType, ALL_BEACON_TYPES};
pub use scheduler::BeaconScheduler;
pub use snapshot::Snapshot;
