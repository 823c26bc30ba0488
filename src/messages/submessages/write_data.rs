use bytes::Bytes;
use speedy::{Context, Writable, Writer};

use crate::{
  serialization::{sequence::write_sequence, Decode, DecodeError, Deserializer},
  structure::object_id::ObjectId,
};

/// Body of a WRITE_DATA submessage: a sample for the data writer `object_id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteDataPayload {
  pub request_id: u32,
  pub object_id: ObjectId,
  /// Serialized sample, opaque to the agent.
  pub data: Bytes,
}

impl Decode for WriteDataPayload {
  type Error = DecodeError;

  fn decode(deserializer: &mut Deserializer<'_>) -> Result<Self, DecodeError> {
    Ok(WriteDataPayload {
      request_id: deserializer.read_u32()?,
      object_id: ObjectId::decode(deserializer)?,
      data: Bytes::copy_from_slice(deserializer.read_sequence()?),
    })
  }
}

impl<C: Context> Writable<C> for WriteDataPayload {
  fn write_to<T: ?Sized + Writer<C>>(&self, writer: &mut T) -> Result<(), C::Error> {
    writer.write_u32(self.request_id)?;
    writer.write_value(&self.object_id)?;
    write_sequence::<C, _>(writer, &self.data)?;
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use speedy::Endianness;

  use super::*;

  #[test]
  fn blob_longer_than_body() {
    let buf = [
      0x02, 0x00, 0x00, 0x00, // request_id
      0x11, 0x00, 0x00, // object_id
      0x08, 0x00, 0x00, 0x00, // declares 8 bytes of data
      0xDE, 0xAD,
    ];
    let mut de = Deserializer::new(&buf, Endianness::LittleEndian);
    match WriteDataPayload::decode(&mut de) {
      Err(DecodeError::Underrun(u)) => assert_eq!(u.position, 7),
      other => panic!("expected underrun, got {:?}", other),
    }
  }

  serialization_test!( type = WriteDataPayload,
  {
      write_data_sample,
      WriteDataPayload {
        request_id: 2,
        object_id: ObjectId::new(0x00_0011),
        data: Bytes::from_static(&[0xDE, 0xAD, 0xBE, 0xEF]),
      },
      le = [0x02, 0x00, 0x00, 0x00,
            0x11, 0x00, 0x00,
            0x04, 0x00, 0x00, 0x00,
            0xDE, 0xAD, 0xBE, 0xEF],
      be = [0x00, 0x00, 0x00, 0x02,
            0x00, 0x00, 0x11,
            0x00, 0x00, 0x00, 0x04,
            0xDE, 0xAD, 0xBE, 0xEF]
  },
  {
      write_data_empty,
      WriteDataPayload {
        request_id: 3,
        object_id: ObjectId::new(0x00_0011),
        data: Bytes::new(),
      },
      le = [0x03, 0x00, 0x00, 0x00, 0x11, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
      be = [0x00, 0x00, 0x00, 0x03, 0x00, 0x00, 0x11, 0x00, 0x00, 0x00, 0x00]
  });
}
