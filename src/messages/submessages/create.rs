use speedy::{Context, Writable, Writer};

use crate::{
  serialization::{Decode, DecodeError, Deserializer},
  structure::{object_id::ObjectId, object_representation::ObjectRepresentation},
};

/// Body of a CREATE submessage: asks the agent to create one entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatePayload {
  pub request_id: u32,
  pub object_id: ObjectId,
  pub object_representation: ObjectRepresentation,
}

impl Decode for CreatePayload {
  type Error = DecodeError;

  fn decode(deserializer: &mut Deserializer<'_>) -> Result<Self, DecodeError> {
    Ok(CreatePayload {
      request_id: deserializer.read_u32()?,
      object_id: ObjectId::decode(deserializer)?,
      object_representation: ObjectRepresentation::decode(deserializer)?,
    })
  }
}

impl<C: Context> Writable<C> for CreatePayload {
  fn write_to<T: ?Sized + Writer<C>>(&self, writer: &mut T) -> Result<(), C::Error> {
    writer.write_u32(self.request_id)?;
    writer.write_value(&self.object_id)?;
    writer.write_value(&self.object_representation)?;
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use speedy::Endianness;

  use super::*;
  use crate::structure::object_representation::{
    DataWriterRepresentation, PublisherRepresentation,
  };

  #[test]
  fn unknown_discriminator_fails_create() {
    let buf = [
      0x01, 0x00, 0x00, 0x00, // request_id
      0x10, 0x00, 0x00, // object_id
      0xFF, // bad discriminator
      0x00, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00,
    ];
    let mut de = Deserializer::new(&buf, Endianness::LittleEndian);
    assert_eq!(
      CreatePayload::decode(&mut de),
      Err(DecodeError::UnknownDiscriminator(0xFF))
    );
  }

  #[test]
  fn short_create_is_underrun() {
    let buf = [0x01, 0x00, 0x00, 0x00, 0x10, 0x00];
    let mut de = Deserializer::new(&buf, Endianness::LittleEndian);
    assert!(matches!(
      CreatePayload::decode(&mut de),
      Err(DecodeError::Underrun(_))
    ));
  }

  serialization_test!( type = CreatePayload,
  {
      create_data_writer,
      CreatePayload {
        request_id: 1,
        object_id: ObjectId::new(0x00_0010),
        object_representation: ObjectRepresentation::DataWriter(DataWriterRepresentation {
          as_string: "w1".to_string(),
          participant_id: ObjectId::new(0x00_0001),
          publisher_id: ObjectId::new(0x00_0002),
        }),
      },
      le = [0x01, 0x00, 0x00, 0x00, // request_id
            0x10, 0x00, 0x00,       // object_id
            0x05,                   // OBJK_DATAWRITER
            0x02, 0x00, 0x00, 0x00,
            b'w', b'1',
            0x01, 0x00, 0x00,
            0x02, 0x00, 0x00],
      be = [0x00, 0x00, 0x00, 0x01,
            0x00, 0x00, 0x10,
            0x05,
            0x00, 0x00, 0x00, 0x02,
            b'w', b'1',
            0x00, 0x00, 0x01,
            0x00, 0x00, 0x02]
  },
  {
      create_publisher,
      CreatePayload {
        request_id: 0xAABB_CCDD,
        object_id: ObjectId::new(0x00_0020),
        object_representation: ObjectRepresentation::Publisher(PublisherRepresentation {
          as_string: "p".to_string(),
          participant_id: ObjectId::new(0x00_0001),
        }),
      },
      le = [0xDD, 0xCC, 0xBB, 0xAA, 0x20, 0x00, 0x00, 0x03,
            0x01, 0x00, 0x00, 0x00, b'p', 0x01, 0x00, 0x00],
      be = [0xAA, 0xBB, 0xCC, 0xDD, 0x00, 0x00, 0x20, 0x03,
            0x00, 0x00, 0x00, 0x01, b'p', 0x00, 0x00, 0x01]
  });
}
