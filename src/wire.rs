//! Explicit little-endian field readers/writers.
//!
//! The wire format is defined field-by-field rather than by struct memory
//! layout, so encoded bytes are identical across compilers and platforms.

use byteorder::{ByteOrder, LittleEndian};

use crate::error::BeaconError;

/// Cursor over a fixed output buffer. Writes are infallible by construction:
/// every layout writes exactly its declared size into a buffer of that size.
pub struct ByteWriter<'a> {
    buf: &'a mut [u8],
    pos: usize,
}

impl<'a> ByteWriter<'a> {
    pub fn new(buf: &'a mut [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn put_u8(&mut self, v: u8) {
        self.buf[self.pos] = v;
        self.pos += 1;
    }

    pub fn put_i16(&mut self, v: i16) {
        LittleEndian::write_i16(&mut self.buf[self.pos..self.pos + 2], v);
        self.pos += 2;
    }

    pub fn put_u32(&mut self, v: u32) {
        LittleEndian::write_u32(&mut self.buf[self.pos..self.pos + 4], v);
        self.pos += 4;
    }

    pub fn put_f32(&mut self, v: f32) {
        LittleEndian::write_f32(&mut self.buf[self.pos..self.pos + 4], v);
        self.pos += 4;
    }

    pub fn put_f64(&mut self, v: f64) {
        LittleEndian::write_f64(&mut self.buf[self.pos..self.pos + 8], v);
        self.pos += 8;
    }
}

/// Checked cursor over received bytes. Length is validated up front by the
/// decoder, but every read is still bounds-checked so a layout bug cannot
/// turn radio noise into a panic.
pub struct ByteReader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> ByteReader<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    fn take(&mut self, n: usize) -> Result<&'a [u8], BeaconError> {
        if self.remaining() < n {
            return Err(BeaconError::Truncated {
                need: self.pos + n,
                have: self.buf.len(),
            });
        }
        let slice = &self.buf[self.pos..self.pos + n];
        self.pos += n;
        Ok(slice)
    }

    pub fn get_u8(&mut self) -> Result<u8, BeaconError> {
        Ok(self.take(1)?[0])
    }

    pub fn get_i16(&mut self) -> Result<i16, BeaconError> {
        Ok(LittleEndian::read_i16(self.take(2)?))
    }

    pub fn get_u32(&mut self) -> Result<u32, BeaconError> {
        Ok(LittleEndian::read_u32(self.take(4)?))
    }

    pub fn get_f32(&mut self) -> Result<f32, BeaconError> {
        Ok(LittleEndian::read_f32(self.take(4)?))
    }

    pub fn get_f64(&mut self) -> Result<f64, BeaconError> {
        Ok(LittleEndian::read_f64(self.take(8)?))
    }
}

/// Scale a full-precision value into milli-units, saturating at the i16
/// limits. Out-of-range telemetry clamps to the nearest representable value
/// rather than wrapping into a sign-flipped artifact.
pub fn to_milli_i16(v: f64) -> i16 {
    let scaled = (v * 1000.0).round();
    if scaled >= f64::from(i16::MAX) {
        i16::MAX
    } else if scaled <= f64::from(i16::MIN) {
        i16::MIN
    } else {
        scaled as i16
    }
}

/// Inverse of [`to_milli_i16`]; lossy by design.
pub fn from_milli_i16(v: i16) -> f64 {
    f64::from(v) / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_milli_scale_saturates() {
        assert_eq!(to_milli_i16(1000.0), i16::MAX);
        assert_eq!(to_milli_i16(-1000.0), i16::MIN);
        assert_eq!(to_milli_i16(3.7), 3700);
        assert!((from_milli_i16(3700) - 3.7).abs() < 1e-9);
    }

    #[test]
    fn test_reader_rejects_short_buffer() {
        let buf = [1u8, 2, 3];
        let mut reader = ByteReader::new(&buf);
        assert!(reader.get_u32().is_err());
    }

    #[test]
    fn test_round_trip_fields() {
        let mut buf = [0u8; 19];
        let mut writer = ByteWriter::new(&mut buf);
        writer.put_u8(0x42);
        writer.put_u32(123_456);
        writer.put_i16(-321);
        writer.put_f32(1.5);
        writer.put_f64(-2.25);
        assert_eq!(writer.position(), 19);

        let mut reader = ByteReader::new(&buf);
        assert_eq!(reader.get_u8().unwrap(), 0x42);
        assert_eq!(reader.get_u32().unwrap(), 123_456);
        assert_eq!(reader.get_i16().unwrap(), -321);
        assert_eq!(reader.get_f32().unwrap(), 1.5);
        assert_eq!(reader.get_f64().unwrap(), -2.25);
        assert_eq!(reader.remaining(), 0);
    }
}
