use std::fmt;

use speedy::{Context, Writable, Writer};

use crate::serialization::{Decode, Deserializer, Underrun};

/// Submessage tag byte.
///
/// Every tag the protocol defines has its own variant. Anything else is kept
/// as `Unknown` so that the offending value can still be reported.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubmessageKind {
  Create,
  GetInfo,
  Delete,
  Status,
  Info,
  WriteData,
  ReadData,
  Data,
  AckNack,
  Heartbeat,
  Reset,
  Fragment,
  FragmentEnd,
  Unknown(u8),
}

impl SubmessageKind {
  pub const CREATE: u8 = 0x01;
  pub const GET_INFO: u8 = 0x02;
  pub const DELETE: u8 = 0x03;
  pub const STATUS: u8 = 0x04;
  pub const INFO: u8 = 0x05;
  pub const WRITE_DATA: u8 = 0x06;
  pub const READ_DATA: u8 = 0x07;
  pub const DATA: u8 = 0x08;
  pub const ACKNACK: u8 = 0x09;
  pub const HEARTBEAT: u8 = 0x0A;
  pub const RESET: u8 = 0x0B;
  pub const FRAGMENT: u8 = 0x0C;
  pub const FRAGMENT_END: u8 = 0x0D;
}

impl From<u8> for SubmessageKind {
  fn from(value: u8) -> SubmessageKind {
    match value {
      SubmessageKind::CREATE => SubmessageKind::Create,
      SubmessageKind::GET_INFO => SubmessageKind::GetInfo,
      SubmessageKind::DELETE => SubmessageKind::Delete,
      SubmessageKind::STATUS => SubmessageKind::Status,
      SubmessageKind::INFO => SubmessageKind::Info,
      SubmessageKind::WRITE_DATA => SubmessageKind::WriteData,
      SubmessageKind::READ_DATA => SubmessageKind::ReadData,
      SubmessageKind::DATA => SubmessageKind::Data,
      SubmessageKind::ACKNACK => SubmessageKind::AckNack,
      SubmessageKind::HEARTBEAT => SubmessageKind::Heartbeat,
      SubmessageKind::RESET => SubmessageKind::Reset,
      SubmessageKind::FRAGMENT => SubmessageKind::Fragment,
      SubmessageKind::FRAGMENT_END => SubmessageKind::FragmentEnd,
      other => SubmessageKind::Unknown(other),
    }
  }
}

impl From<SubmessageKind> for u8 {
  fn from(kind: SubmessageKind) -> u8 {
    match kind {
      SubmessageKind::Create => SubmessageKind::CREATE,
      SubmessageKind::GetInfo => SubmessageKind::GET_INFO,
      SubmessageKind::Delete => SubmessageKind::DELETE,
      SubmessageKind::Status => SubmessageKind::STATUS,
      SubmessageKind::Info => SubmessageKind::INFO,
      SubmessageKind::WriteData => SubmessageKind::WRITE_DATA,
      SubmessageKind::ReadData => SubmessageKind::READ_DATA,
      SubmessageKind::Data => SubmessageKind::DATA,
      SubmessageKind::AckNack => SubmessageKind::ACKNACK,
      SubmessageKind::Heartbeat => SubmessageKind::HEARTBEAT,
      SubmessageKind::Reset => SubmessageKind::RESET,
      SubmessageKind::Fragment => SubmessageKind::FRAGMENT,
      SubmessageKind::FragmentEnd => SubmessageKind::FRAGMENT_END,
      SubmessageKind::Unknown(other) => other,
    }
  }
}

impl fmt::Debug for SubmessageKind {
  fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
    match *self {
      SubmessageKind::Create => fmt.write_str("CREATE"),
      SubmessageKind::GetInfo => fmt.write_str("GET_INFO"),
      SubmessageKind::Delete => fmt.write_str("DELETE"),
      SubmessageKind::Status => fmt.write_str("STATUS"),
      SubmessageKind::Info => fmt.write_str("INFO"),
      SubmessageKind::WriteData => fmt.write_str("WRITE_DATA"),
      SubmessageKind::ReadData => fmt.write_str("READ_DATA"),
      SubmessageKind::Data => fmt.write_str("DATA"),
      SubmessageKind::AckNack => fmt.write_str("ACKNACK"),
      SubmessageKind::Heartbeat => fmt.write_str("HEARTBEAT"),
      SubmessageKind::Reset => fmt.write_str("RESET"),
      SubmessageKind::Fragment => fmt.write_str("FRAGMENT"),
      SubmessageKind::FragmentEnd => fmt.write_str("FRAGMENT_END"),
      SubmessageKind::Unknown(other) => {
        fmt.write_fmt(format_args!("SubmessageKind 0x{other:02X} (UNKNOWN!)"))
      }
    }
  }
}

impl Decode for SubmessageKind {
  type Error = Underrun;

  fn decode(deserializer: &mut Deserializer<'_>) -> Result<Self, Underrun> {
    deserializer.read_u8().map(SubmessageKind::from)
  }
}

impl<C: Context> Writable<C> for SubmessageKind {
  fn write_to<T: ?Sized + Writer<C>>(&self, writer: &mut T) -> Result<(), C::Error> {
    writer.write_u8(u8::from(*self))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn every_tag_maps_back_to_itself() {
    for value in 0..=u8::MAX {
      assert_eq!(value, u8::from(SubmessageKind::from(value)));
    }
  }

  #[test]
  fn unknown_tags_are_preserved() {
    assert_eq!(SubmessageKind::from(0x00), SubmessageKind::Unknown(0x00));
    assert_eq!(SubmessageKind::from(0x0E), SubmessageKind::Unknown(0x0E));
    assert_eq!(
      format!("{:?}", SubmessageKind::from(0xFF)),
      "SubmessageKind 0xFF (UNKNOWN!)"
    );
  }

  serialization_test!( type = SubmessageKind,
  {
      submessage_kind_create,
      SubmessageKind::Create,
      le = [0x01],
      be = [0x01]
  },
  {
      submessage_kind_write_data,
      SubmessageKind::WriteData,
      le = [0x06],
      be = [0x06]
  },
  {
      submessage_kind_read_data,
      SubmessageKind::ReadData,
      le = [0x07],
      be = [0x07]
  },
  {
      submessage_kind_fragment_end,
      SubmessageKind::FragmentEnd,
      le = [0x0D],
      be = [0x0D]
  });
}
