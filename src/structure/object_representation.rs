use std::convert::TryFrom;

use num_enum::{IntoPrimitive, TryFromPrimitive};
use speedy::{Context, Writable, Writer};

use crate::{
  serialization::{sequence::write_sequence, Decode, DecodeError, Deserializer},
  structure::object_id::ObjectId,
};

/// Entity kinds a client may ask the agent to create. Numbering follows the
/// XRCE `OBJK_*` constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, TryFromPrimitive, IntoPrimitive)]
#[repr(u8)]
pub enum ObjectKind {
  Publisher = 0x03,
  Subscriber = 0x04,
  DataWriter = 0x05,
  DataReader = 0x06,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataWriterRepresentation {
  pub as_string: String,
  pub participant_id: ObjectId,
  pub publisher_id: ObjectId,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataReaderRepresentation {
  pub as_string: String,
  pub participant_id: ObjectId,
  pub subscriber_id: ObjectId,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubscriberRepresentation {
  pub as_string: String,
  pub participant_id: ObjectId,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublisherRepresentation {
  pub as_string: String,
  pub participant_id: ObjectId,
}

/// Description of the entity carried in a CREATE request.
///
/// Wire layout: discriminator byte, length-prefixed string, then the parent
/// ids of the selected kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ObjectRepresentation {
  DataWriter(DataWriterRepresentation),
  DataReader(DataReaderRepresentation),
  Subscriber(SubscriberRepresentation),
  Publisher(PublisherRepresentation),
}

impl ObjectRepresentation {
  pub fn kind(&self) -> ObjectKind {
    match self {
      ObjectRepresentation::DataWriter(_) => ObjectKind::DataWriter,
      ObjectRepresentation::DataReader(_) => ObjectKind::DataReader,
      ObjectRepresentation::Subscriber(_) => ObjectKind::Subscriber,
      ObjectRepresentation::Publisher(_) => ObjectKind::Publisher,
    }
  }

  pub fn as_string(&self) -> &str {
    match self {
      ObjectRepresentation::DataWriter(w) => &w.as_string,
      ObjectRepresentation::DataReader(r) => &r.as_string,
      ObjectRepresentation::Subscriber(s) => &s.as_string,
      ObjectRepresentation::Publisher(p) => &p.as_string,
    }
  }

  pub fn participant_id(&self) -> ObjectId {
    match self {
      ObjectRepresentation::DataWriter(w) => w.participant_id,
      ObjectRepresentation::DataReader(r) => r.participant_id,
      ObjectRepresentation::Subscriber(s) => s.participant_id,
      ObjectRepresentation::Publisher(p) => p.participant_id,
    }
  }
}

impl Decode for ObjectRepresentation {
  type Error = DecodeError;

  fn decode(deserializer: &mut Deserializer<'_>) -> Result<Self, DecodeError> {
    let discriminator = deserializer.read_u8()?;
    let kind = ObjectKind::try_from(discriminator)
      .map_err(|_| DecodeError::UnknownDiscriminator(discriminator))?;
    let as_string = deserializer.read_string()?;

    let representation = match kind {
      ObjectKind::DataWriter => ObjectRepresentation::DataWriter(DataWriterRepresentation {
        as_string,
        participant_id: ObjectId::decode(deserializer)?,
        publisher_id: ObjectId::decode(deserializer)?,
      }),
      ObjectKind::DataReader => ObjectRepresentation::DataReader(DataReaderRepresentation {
        as_string,
        participant_id: ObjectId::decode(deserializer)?,
        subscriber_id: ObjectId::decode(deserializer)?,
      }),
      ObjectKind::Subscriber => ObjectRepresentation::Subscriber(SubscriberRepresentation {
        as_string,
        participant_id: ObjectId::decode(deserializer)?,
      }),
      ObjectKind::Publisher => ObjectRepresentation::Publisher(PublisherRepresentation {
        as_string,
        participant_id: ObjectId::decode(deserializer)?,
      }),
    };
    Ok(representation)
  }
}

impl<C: Context> Writable<C> for ObjectRepresentation {
  fn write_to<T: ?Sized + Writer<C>>(&self, writer: &mut T) -> Result<(), C::Error> {
    writer.write_u8(self.kind().into())?;
    write_sequence::<C, _>(writer, self.as_string().as_bytes())?;
    match self {
      ObjectRepresentation::DataWriter(w) => {
        writer.write_value(&w.participant_id)?;
        writer.write_value(&w.publisher_id)?;
      }
      ObjectRepresentation::DataReader(r) => {
        writer.write_value(&r.participant_id)?;
        writer.write_value(&r.subscriber_id)?;
      }
      ObjectRepresentation::Subscriber(s) => writer.write_value(&s.participant_id)?,
      ObjectRepresentation::Publisher(p) => writer.write_value(&p.participant_id)?,
    }
    Ok(())
  }
}
