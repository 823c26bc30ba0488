use speedy::{Context, Writable, Writer};
use static_assertions::const_assert_eq;

use crate::serialization::{Decode, Deserializer, Underrun};

/// Fixed header at the start of every XRCE message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MessageHeader {
  pub client_key: u32,
  pub session_id: u8,
  pub stream_id: u8,
  pub sequence_nr: u16,
}

impl MessageHeader {
  /// Serialized size in bytes.
  pub const SIZE: usize = 8;
}

const_assert_eq!(MessageHeader::SIZE, 4 + 1 + 1 + 2);

impl Decode for MessageHeader {
  type Error = Underrun;

  fn decode(deserializer: &mut Deserializer<'_>) -> Result<Self, Underrun> {
    // Check the whole header first so that a short buffer does not leave the
    // cursor halfway in.
    if deserializer.remaining() < Self::SIZE {
      return Err(Underrun {
        position: deserializer.position(),
        needed: Self::SIZE,
        available: deserializer.remaining(),
      });
    }
    Ok(MessageHeader {
      client_key: deserializer.read_u32()?,
      session_id: deserializer.read_u8()?,
      stream_id: deserializer.read_u8()?,
      sequence_nr: deserializer.read_u16()?,
    })
  }
}

impl<C: Context> Writable<C> for MessageHeader {
  fn write_to<T: ?Sized + Writer<C>>(&self, writer: &mut T) -> Result<(), C::Error> {
    writer.write_u32(self.client_key)?;
    writer.write_u8(self.session_id)?;
    writer.write_u8(self.stream_id)?;
    writer.write_u16(self.sequence_nr)?;
    Ok(())
  }
}
