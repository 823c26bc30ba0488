use std::fmt;

use byteorder::{BigEndian, ByteOrder, LittleEndian};
use speedy::{Context, Endianness, Writable, Writer};

use crate::serialization::{Decode, Deserializer, Underrun};

/// 24-bit identifier of an entity on the agent.
///
/// On the wire this is three bytes. Values built from a `u32` keep the low
/// 24 bits only.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct ObjectId(u32);

impl ObjectId {
  pub const MAX: u32 = 0x00FF_FFFF;
  pub const SIZE: usize = 3;

  pub const fn new(value: u32) -> ObjectId {
    ObjectId(value & ObjectId::MAX)
  }

  pub const fn value(self) -> u32 {
    self.0
  }
}

impl From<u32> for ObjectId {
  fn from(value: u32) -> ObjectId {
    ObjectId::new(value)
  }
}

impl From<ObjectId> for u32 {
  fn from(id: ObjectId) -> u32 {
    id.0
  }
}

impl fmt::Debug for ObjectId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "ObjectId(0x{:06X})", self.0)
  }
}

impl fmt::Display for ObjectId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "0x{:06X}", self.0)
  }
}

impl Decode for ObjectId {
  type Error = Underrun;

  fn decode(deserializer: &mut Deserializer<'_>) -> Result<Self, Underrun> {
    deserializer.read_u24().map(ObjectId)
  }
}

impl<C: Context> Writable<C> for ObjectId {
  fn write_to<T: ?Sized + Writer<C>>(&self, writer: &mut T) -> Result<(), C::Error> {
    let mut bytes = [0u8; ObjectId::SIZE];
    match writer.endianness() {
      Endianness::LittleEndian => LittleEndian::write_uint(&mut bytes, u64::from(self.0), 3),
      Endianness::BigEndian => BigEndian::write_uint(&mut bytes, u64::from(self.0), 3),
    }
    writer.write_bytes(&bytes)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn keeps_low_24_bits() {
    assert_eq!(ObjectId::from(0x1234_5678).value(), 0x34_5678);
    assert_eq!(ObjectId::new(0x00FF_FFFF).value(), ObjectId::MAX);
    assert_eq!(format!("{}", ObjectId::new(0x10)), "0x000010");
  }

  #[test]
  fn size_pass_does_not_need_context() {
    let id = ObjectId::new(0x00_0010);
    assert_eq!(Writable::<Endianness>::bytes_needed(&id).unwrap(), ObjectId::SIZE);
    let mut ids = Vec::new();
    ids.extend(id.write_to_vec_with_ctx(Endianness::LittleEndian).unwrap());
    ids.extend(id.write_to_vec_with_ctx(Endianness::BigEndian).unwrap());
    assert_eq!(ids, vec![0x10, 0x00, 0x00, 0x00, 0x00, 0x10]);
  }

  serialization_test!( type = ObjectId,
  {
      object_id_small,
      ObjectId::new(0x00_0010),
      le = [0x10, 0x00, 0x00],
      be = [0x00, 0x00, 0x10]
  },
  {
      object_id_full_width,
      ObjectId::new(0xAB_CDEF),
      le = [0xEF, 0xCD, 0xAB],
      be = [0xAB, 0xCD, 0xEF]
  });
}
