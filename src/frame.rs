//! Outer transport envelope.
//!
//! The frame tells the link layer what class of payload it is carrying and
//! who sent it. It is a pure pass-through for beacon bytes: the adapter
//! never reinterprets the payload, it only validates that the payload's own
//! tag byte agrees with the declared subtype.

use arrayvec::ArrayString;
use byteorder::{ByteOrder, LittleEndian};

use crate::codec::BeaconBytes;
use crate::error::BeaconError;
use crate::layouts::MAX_BEACON_SIZE;

pub const MAX_ORIGIN_LEN: usize = 32;

/// Payload classes carried by the link layer. Numeric space is disjoint from
/// beacon type tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum PacketClass {
    Ack = 0xA0,
    Beacon = 0xB0,
    Command = 0xC0,
    FileChunk = 0xF0,
}

impl PacketClass {
    pub fn from_u8(v: u8) -> Result<Self, BeaconError> {
        match v {
            0xA0 => Ok(PacketClass::Ack),
            0xB0 => Ok(PacketClass::Beacon),
            0xC0 => Ok(PacketClass::Command),
            0xF0 => Ok(PacketClass::FileChunk),
            other => Err(BeaconError::NotABeacon(other)),
        }
    }
}

/// Node names longer than the origin field allows are clipped, on a char
/// boundary.
fn clip_origin(origin: &str) -> ArrayString<MAX_ORIGIN_LEN> {
    let mut name = ArrayString::new();
    for ch in origin.chars() {
        if name.try_push(ch).is_err() {
            break;
        }
    }
    name
}

/// One framed packet: class discriminator, payload subtype, sender identity,
/// raw payload bytes.
#[derive(Debug, Clone, PartialEq)]
pub struct WirePacket {
    pub class: PacketClass,
    pub subtype: u8,
    pub origin: ArrayString<MAX_ORIGIN_LEN>,
    pub payload: BeaconBytes,
}

impl WirePacket {
    /// Wrap encoded beacon bytes. The subtype is taken from the payload's
    /// own tag byte so the two can be cross-checked on receipt.
    pub fn wrap_beacon(origin: &str, payload: BeaconBytes) -> Result<Self, BeaconError> {
        let subtype = *payload.first().ok_or(BeaconError::Truncated { need: 1, have: 0 })?;
        Ok(Self {
            class: PacketClass::Beacon,
            subtype,
            origin: clip_origin(origin),
            payload,
        })
    }

    /// Unwrap a beacon payload, validating class and the subtype/tag match.
    pub fn unwrap_beacon(&self) -> Result<&[u8], BeaconError> {
        if self.class != PacketClass::Beacon {
            return Err(BeaconError::NotABeacon(self.class as u8));
        }
        let tag = *self
            .payload
            .first()
            .ok_or(BeaconError::Truncated { need: 1, have: 0 })?;
        if tag != self.subtype {
            return Err(BeaconError::TagMismatch {
                frame: self.subtype,
                payload: tag,
            });
        }
        Ok(&self.payload)
    }

    /// Serialize for the demo TCP link: class, subtype, origin length +
    /// bytes, payload length (u16 LE) + bytes.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(5 + self.origin.len() + self.payload.len());
        out.push(self.class as u8);
        out.push(self.subtype);
        out.push(self.origin.len() as u8);
        out.extend_from_slice(self.origin.as_bytes());
        let mut len = [0u8; 2];
        LittleEndian::write_u16(&mut len, self.payload.len() as u16);
        out.extend_from_slice(&len);
        out.extend_from_slice(&self.payload);
        out
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, BeaconError> {
        if bytes.len() < 5 {
            return Err(BeaconError::Truncated {
                need: 5,
                have: bytes.len(),
            });
        }
        let class = PacketClass::from_u8(bytes[0])?;
        let subtype = bytes[1];
        let origin_len = bytes[2] as usize;
        let header = 3 + origin_len + 2;
        if bytes.len() < header {
            return Err(BeaconError::Truncated {
                need: header,
                have: bytes.len(),
            });
        }
        let origin_bytes = &bytes[3..3 + origin_len];
        let origin_str =
            core::str::from_utf8(origin_bytes).map_err(|_| BeaconError::BadOrigin)?;
        let payload_len = LittleEndian::read_u16(&bytes[3 + origin_len..header]) as usize;
        if payload_len > MAX_BEACON_SIZE || bytes.len() < header + payload_len {
            return Err(BeaconError::Truncated {
                need: header + payload_len,
                have: bytes.len(),
            });
        }
        let origin = clip_origin(origin_str);
        let payload = BeaconBytes::from_slice(&bytes[header..header + payload_len])
            .map_err(|_| BeaconError::PayloadOverflow)?;
        Ok(Self {
            class,
            subtype,
            origin,
            payload,
        })
    }
}
