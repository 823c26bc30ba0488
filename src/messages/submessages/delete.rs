use speedy::{Context, Writable, Writer};

use crate::{
  serialization::{Decode, DecodeError, Deserializer},
  structure::object_id::ObjectId,
};

/// Body of a DELETE submessage.
///
/// The agent does not dispatch DELETE, but clients that send it can still
/// have their requests decoded and logged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeletePayload {
  pub request_id: u32,
  pub object_id: ObjectId,
}

impl Decode for DeletePayload {
  type Error = DecodeError;

  fn decode(deserializer: &mut Deserializer<'_>) -> Result<Self, DecodeError> {
    Ok(DeletePayload {
      request_id: deserializer.read_u32()?,
      object_id: ObjectId::decode(deserializer)?,
    })
  }
}

impl<C: Context> Writable<C> for DeletePayload {
  fn write_to<T: ?Sized + Writer<C>>(&self, writer: &mut T) -> Result<(), C::Error> {
    writer.write_u32(self.request_id)?;
    writer.write_value(&self.object_id)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  serialization_test!( type = DeletePayload,
  {
      delete_object,
      DeletePayload {
        request_id: 9,
        object_id: ObjectId::new(0x00_0010),
      },
      le = [0x09, 0x00, 0x00, 0x00, 0x10, 0x00, 0x00],
      be = [0x00, 0x00, 0x00, 0x09, 0x00, 0x00, 0x10]
  });
}
