use crate::messages::submessages::{
  create::CreatePayload, read_data::ReadDataPayload, write_data::WriteDataPayload,
};

/// A decoded submessage body of one of the kinds the agent acts on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Payload {
  Create(CreatePayload),
  WriteData(WriteDataPayload),
  ReadData(ReadDataPayload),
}

impl Payload {
  pub fn request_id(&self) -> u32 {
    match self {
      Payload::Create(c) => c.request_id,
      Payload::WriteData(w) => w.request_id,
      Payload::ReadData(r) => r.request_id,
    }
  }
}

impl From<CreatePayload> for Payload {
  fn from(p: CreatePayload) -> Payload {
    Payload::Create(p)
  }
}

impl From<WriteDataPayload> for Payload {
  fn from(p: WriteDataPayload) -> Payload {
    Payload::WriteData(p)
  }
}

impl From<ReadDataPayload> for Payload {
  fn from(p: ReadDataPayload) -> Payload {
    Payload::ReadData(p)
  }
}
