use byteorder::{BigEndian, ByteOrder, LittleEndian};
use log::warn;
use speedy::Endianness;

use crate::serialization::error::Underrun;

/// Read cursor over one message buffer.
///
/// All reads are bounds checked up front. A read that does not fit leaves the
/// cursor where it was and returns [`Underrun`].
#[derive(Debug, Clone)]
pub struct Deserializer<'a> {
  buffer: &'a [u8],
  pos: usize,
  // offset of `buffer` within the message, so that windows report absolute
  // positions
  base: usize,
  endianness: Endianness,
}

impl<'a> Deserializer<'a> {
  pub fn new(buffer: &'a [u8], endianness: Endianness) -> Deserializer<'a> {
    Deserializer {
      buffer,
      pos: 0,
      base: 0,
      endianness,
    }
  }

  pub fn endianness(&self) -> Endianness {
    self.endianness
  }

  /// Offset of the next byte to be read, counted from the start of the
  /// message.
  pub fn position(&self) -> usize {
    self.base + self.pos
  }

  pub fn remaining(&self) -> usize {
    self.buffer.len() - self.pos
  }

  pub fn at_end(&self) -> bool {
    self.pos >= self.buffer.len()
  }

  fn underrun(&self, needed: usize) -> Underrun {
    Underrun {
      position: self.position(),
      needed,
      available: self.remaining(),
    }
  }

  fn take(&mut self, n: usize) -> Result<&'a [u8], Underrun> {
    if n > self.remaining() {
      return Err(self.underrun(n));
    }
    let bytes = &self.buffer[self.pos..self.pos + n];
    self.pos += n;
    Ok(bytes)
  }

  pub fn read_u8(&mut self) -> Result<u8, Underrun> {
    Ok(self.take(1)?[0])
  }

  pub fn read_u16(&mut self) -> Result<u16, Underrun> {
    let b = self.take(2)?;
    Ok(match self.endianness {
      Endianness::LittleEndian => LittleEndian::read_u16(b),
      Endianness::BigEndian => BigEndian::read_u16(b),
    })
  }

  /// Three-byte unsigned integer, as used for object ids.
  pub fn read_u24(&mut self) -> Result<u32, Underrun> {
    let b = self.take(3)?;
    let v = match self.endianness {
      Endianness::LittleEndian => LittleEndian::read_uint(b, 3),
      Endianness::BigEndian => BigEndian::read_uint(b, 3),
    };
    Ok(v as u32)
  }

  pub fn read_u32(&mut self) -> Result<u32, Underrun> {
    let b = self.take(4)?;
    Ok(match self.endianness {
      Endianness::LittleEndian => LittleEndian::read_u32(b),
      Endianness::BigEndian => BigEndian::read_u32(b),
    })
  }

  pub fn read_bytes(&mut self, n: usize) -> Result<&'a [u8], Underrun> {
    self.take(n)
  }

  /// Byte run with a 4-byte length prefix. On failure the cursor is restored
  /// to the start of the prefix.
  pub fn read_sequence(&mut self) -> Result<&'a [u8], Underrun> {
    let start = self.pos;
    let len = self.read_u32()? as usize;
    match self.take(len) {
      Ok(bytes) => Ok(bytes),
      Err(mut u) => {
        self.pos = start;
        u.position = self.position();
        u.needed = len.saturating_add(4);
        u.available = self.remaining();
        Err(u)
      }
    }
  }

  /// Length-prefixed string. There is no terminator on the wire; a trailing
  /// NUL, if the sender put one there, is kept as part of the string.
  pub fn read_string(&mut self) -> Result<String, Underrun> {
    let start = self.position();
    let raw = self.read_sequence()?;
    match std::str::from_utf8(raw) {
      Ok(s) => Ok(s.to_string()),
      Err(e) => {
        warn!("String at offset {start} is not valid UTF-8 ({e}), decoding lossily");
        Ok(String::from_utf8_lossy(raw).into_owned())
      }
    }
  }

  /// Detaches the next `n` bytes (or whatever is left, if less) as a separate
  /// deserializer and moves this cursor past them.
  pub fn take_window(&mut self, n: usize) -> Deserializer<'a> {
    let n = n.min(self.remaining());
    let window = Deserializer {
      buffer: &self.buffer[self.pos..self.pos + n],
      pos: 0,
      base: self.position(),
      endianness: self.endianness,
    };
    self.pos += n;
    window
  }
}

/// Types that can be read from a [`Deserializer`].
pub trait Decode: Sized {
  type Error;

  fn decode(deserializer: &mut Deserializer<'_>) -> Result<Self, Self::Error>;
}
