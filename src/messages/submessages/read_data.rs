use speedy::{Context, Writable, Writer};

use crate::{
  serialization::{sequence::write_sequence, Decode, DecodeError, Deserializer},
  structure::object_id::ObjectId,
};

/// Body of a READ_DATA submessage: asks the data reader `object_id` to
/// deliver samples back to the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadDataPayload {
  pub request_id: u32,
  pub object_id: ObjectId,
  /// Upper bound on DATA submessages sent in reply.
  pub max_messages: u16,
  pub read_mode: u8,
  /// Milliseconds the read request stays active.
  pub max_elapsed_time: u32,
  /// Bytes per second the agent may send for this request.
  pub max_rate: u32,
  /// Empty when no filter is applied.
  pub content_filter_expression: String,
  pub max_samples: u16,
  pub include_sample_info: bool,
}

impl Decode for ReadDataPayload {
  type Error = DecodeError;

  fn decode(deserializer: &mut Deserializer<'_>) -> Result<Self, DecodeError> {
    Ok(ReadDataPayload {
      request_id: deserializer.read_u32()?,
      object_id: ObjectId::decode(deserializer)?,
      max_messages: deserializer.read_u16()?,
      read_mode: deserializer.read_u8()?,
      max_elapsed_time: deserializer.read_u32()?,
      max_rate: deserializer.read_u32()?,
      content_filter_expression: deserializer.read_string()?,
      max_samples: deserializer.read_u16()?,
      include_sample_info: deserializer.read_u8()? != 0,
    })
  }
}

impl<C: Context> Writable<C> for ReadDataPayload {
  fn write_to<T: ?Sized + Writer<C>>(&self, writer: &mut T) -> Result<(), C::Error> {
    writer.write_u32(self.request_id)?;
    writer.write_value(&self.object_id)?;
    writer.write_u16(self.max_messages)?;
    writer.write_u8(self.read_mode)?;
    writer.write_u32(self.max_elapsed_time)?;
    writer.write_u32(self.max_rate)?;
    write_sequence::<C, _>(writer, self.content_filter_expression.as_bytes())?;
    writer.write_u16(self.max_samples)?;
    writer.write_u8(u8::from(self.include_sample_info))?;
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use speedy::Endianness;

  use super::*;

  #[test]
  fn any_nonzero_sample_info_flag_is_true() {
    let mut buf = vec![
      0x04, 0x00, 0x00, 0x00, // request_id
      0x12, 0x00, 0x00, // object_id
      0x01, 0x00, // max_messages
      0x00, // read_mode
      0x00, 0x00, 0x00, 0x00, // max_elapsed_time
      0x00, 0x00, 0x00, 0x00, // max_rate
      0x00, 0x00, 0x00, 0x00, // filter
      0x01, 0x00, // max_samples
    ];
    buf.push(0x7F);
    let mut de = Deserializer::new(&buf, Endianness::LittleEndian);
    let payload = ReadDataPayload::decode(&mut de).unwrap();
    assert!(payload.include_sample_info);
    assert!(de.at_end());
  }

  serialization_test!( type = ReadDataPayload,
  {
      read_data_filtered,
      ReadDataPayload {
        request_id: 4,
        object_id: ObjectId::new(0x00_0012),
        max_messages: 10,
        read_mode: 1,
        max_elapsed_time: 1000,
        max_rate: 0x0001_0000,
        content_filter_expression: "x>1".to_string(),
        max_samples: 5,
        include_sample_info: true,
      },
      le = [0x04, 0x00, 0x00, 0x00,
            0x12, 0x00, 0x00,
            0x0A, 0x00,
            0x01,
            0xE8, 0x03, 0x00, 0x00,
            0x00, 0x00, 0x01, 0x00,
            0x03, 0x00, 0x00, 0x00, b'x', b'>', b'1',
            0x05, 0x00,
            0x01],
      be = [0x00, 0x00, 0x00, 0x04,
            0x00, 0x00, 0x12,
            0x00, 0x0A,
            0x01,
            0x00, 0x00, 0x03, 0xE8,
            0x00, 0x01, 0x00, 0x00,
            0x00, 0x00, 0x00, 0x03, b'x', b'>', b'1',
            0x00, 0x05,
            0x01]
  });
}
