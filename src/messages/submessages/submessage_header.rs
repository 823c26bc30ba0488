use speedy::{Context, Writable, Writer};
use static_assertions::const_assert_eq;

use crate::{
  messages::submessages::submessage_kind::SubmessageKind,
  serialization::{Decode, Deserializer, Underrun},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubmessageHeader {
  pub submessage_id: SubmessageKind,
  pub flags: u8,
  /// Number of body bytes following this header.
  pub submessage_length: u16,
}

impl SubmessageHeader {
  pub const SIZE: usize = 4;
}

const_assert_eq!(SubmessageHeader::SIZE, 1 + 1 + 2);

impl Decode for SubmessageHeader {
  type Error = Underrun;

  fn decode(deserializer: &mut Deserializer<'_>) -> Result<Self, Underrun> {
    if deserializer.remaining() < Self::SIZE {
      return Err(Underrun {
        position: deserializer.position(),
        needed: Self::SIZE,
        available: deserializer.remaining(),
      });
    }
    Ok(SubmessageHeader {
      submessage_id: SubmessageKind::decode(deserializer)?,
      flags: deserializer.read_u8()?,
      submessage_length: deserializer.read_u16()?,
    })
  }
}

impl<C: Context> Writable<C> for SubmessageHeader {
  fn write_to<T: ?Sized + Writer<C>>(&self, writer: &mut T) -> Result<(), C::Error> {
    writer.write_value(&self.submessage_id)?;
    writer.write_u8(self.flags)?;
    writer.write_u16(self.submessage_length)?;
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  serialization_test!( type = SubmessageHeader,
  {
      submessage_header_create,
      SubmessageHeader {
        submessage_id: SubmessageKind::Create,
        flags: 0x00,
        submessage_length: 42,
      },
      le = [0x01, 0x00, 0x2A, 0x00],
      be = [0x01, 0x00, 0x00, 0x2A]
  },
  {
      submessage_header_unknown_kind,
      SubmessageHeader {
        submessage_id: SubmessageKind::Unknown(0x7F),
        flags: 0x03,
        submessage_length: 0x0102,
      },
      le = [0x7F, 0x03, 0x02, 0x01],
      be = [0x7F, 0x03, 0x01, 0x02]
  });
}
