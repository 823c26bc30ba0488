use std::convert::TryFrom;

use speedy::{Endianness, Writable};

use crate::{
  messages::{
    header::MessageHeader,
    submessages::{
      create::CreatePayload, delete::DeletePayload, read_data::ReadDataPayload,
      submessage_header::SubmessageHeader, submessage_kind::SubmessageKind,
      write_data::WriteDataPayload,
    },
  },
  serialization::EncodeError,
};

/// Assembles a complete XRCE message, filling in submessage lengths.
///
/// This is the encoding side of the parser: clients, test drivers and
/// loopback tools use it to produce byte buffers the parser accepts.
/// Encoding errors are remembered and reported by [`build`](Self::build),
/// so calls can be chained.
#[derive(Debug)]
pub struct MessageBuilder {
  endianness: Endianness,
  body: Vec<u8>,
  submessage_count: usize,
  error: Option<EncodeError>,
}

impl MessageBuilder {
  pub fn new(endianness: Endianness) -> MessageBuilder {
    MessageBuilder {
      endianness,
      body: Vec::new(),
      submessage_count: 0,
      error: None,
    }
  }

  /// Appends a submessage of `kind` whose body is `payload`. The length field
  /// is computed from the encoded body.
  pub fn submessage<P>(mut self, kind: SubmessageKind, flags: u8, payload: &P) -> MessageBuilder
  where
    P: Writable<Endianness>,
  {
    if self.error.is_some() {
      return self;
    }
    let encoded = match payload.write_to_vec_with_ctx(self.endianness) {
      Ok(encoded) => encoded,
      Err(e) => {
        self.error = Some(EncodeError::from(e));
        return self;
      }
    };
    let submessage_length = match u16::try_from(encoded.len()) {
      Ok(len) => len,
      Err(_) => {
        self.error = Some(EncodeError::SubmessageTooLong(encoded.len()));
        return self;
      }
    };
    let header = SubmessageHeader {
      submessage_id: kind,
      flags,
      submessage_length,
    };
    self.raw_submessage(header, &encoded)
  }

  /// Appends `header` and `body` exactly as given. The declared length is not
  /// checked against the body, which makes this the way to produce malformed
  /// input on purpose.
  pub fn raw_submessage(mut self, header: SubmessageHeader, body: &[u8]) -> MessageBuilder {
    if self.error.is_some() {
      return self;
    }
    match header.write_to_vec_with_ctx(self.endianness) {
      Ok(h) => {
        self.body.extend_from_slice(&h);
        self.body.extend_from_slice(body);
        self.submessage_count += 1;
      }
      Err(e) => self.error = Some(EncodeError::from(e)),
    }
    self
  }

  pub fn create(self, payload: &CreatePayload) -> MessageBuilder {
    self.submessage(SubmessageKind::Create, 0, payload)
  }

  pub fn write_data(self, payload: &WriteDataPayload) -> MessageBuilder {
    self.submessage(SubmessageKind::WriteData, 0, payload)
  }

  pub fn read_data(self, payload: &ReadDataPayload) -> MessageBuilder {
    self.submessage(SubmessageKind::ReadData, 0, payload)
  }

  pub fn delete(self, payload: &DeletePayload) -> MessageBuilder {
    self.submessage(SubmessageKind::Delete, 0, payload)
  }

  pub fn submessage_count(&self) -> usize {
    self.submessage_count
  }

  /// Prepends `header` to the collected submessages.
  pub fn build(self, header: MessageHeader) -> Result<Vec<u8>, EncodeError> {
    if let Some(e) = self.error {
      return Err(e);
    }
    let mut message = header.write_to_vec_with_ctx(self.endianness)?;
    message.extend_from_slice(&self.body);
    Ok(message)
  }
}

#[cfg(test)]
mod tests {
  use bytes::Bytes;
  use hex_literal::hex;

  use super::*;
  use crate::{
    structure::object_id::ObjectId,
    test::test_data::{create_data_writer, message_header},
  };

  #[test]
  fn create_message_layout() {
    let bytes = MessageBuilder::new(Endianness::LittleEndian)
      .create(&create_data_writer(1))
      .build(message_header())
      .unwrap();

    let expected = hex!(
      "
      44 33 22 11 01 02 07 00
      01 00 14 00
      01 00 00 00 10 00 00
      05 02 00 00 00 77 31 01 00 00 02 00 00
    "
    );
    assert_eq!(&bytes[..], &expected[..]);
  }

  #[test]
  fn raw_submessage_keeps_declared_length() {
    let bogus = SubmessageHeader {
      submessage_id: SubmessageKind::WriteData,
      flags: 0x80,
      submessage_length: 2,
    };
    let builder = MessageBuilder::new(Endianness::BigEndian).raw_submessage(bogus, &[1, 2, 3, 4]);
    assert_eq!(builder.submessage_count(), 1);
    let bytes = builder.build(message_header()).unwrap();
    assert_eq!(&bytes[8..], &[0x06, 0x80, 0x00, 0x02, 1, 2, 3, 4][..]);
  }

  #[test]
  fn oversized_body_is_rejected() {
    let blob = WriteDataPayload {
      request_id: 1,
      object_id: ObjectId::new(1),
      data: Bytes::from(vec![0u8; 70_000]),
    };
    let result = MessageBuilder::new(Endianness::LittleEndian)
      .write_data(&blob)
      .build(message_header());
    match result {
      Err(EncodeError::SubmessageTooLong(len)) => assert_eq!(len, 70_000 + 11),
      other => panic!("expected SubmessageTooLong, got {:?}", other),
    }
  }
}
