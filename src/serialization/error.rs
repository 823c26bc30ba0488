use std::{
  error,
  fmt::{self, Display},
};

use crate::messages::submessages::submessage_header::SubmessageHeader;

/// A read needed more bytes than the buffer had left.
///
/// The cursor is left where the failing read started, so `position` is also
/// the current read offset of the deserializer that reported it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Underrun {
  pub position: usize,
  pub needed: usize,
  pub available: usize,
}

impl Display for Underrun {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "buffer underrun at offset {}: needed {} bytes, {} available",
      self.position, self.needed, self.available
    )
  }
}

impl error::Error for Underrun {}

/// Failure to decode a submessage payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
  /// Some field ran past the end of the submessage body.
  Underrun(Underrun),
  /// The object representation tag is not one of the known entity kinds.
  /// The byte was there, but its value has no meaning.
  UnknownDiscriminator(u8),
  /// The payload did not consume exactly the number of bytes announced in
  /// the submessage header.
  LengthMismatch { declared: u16, consumed: usize },
}

impl Display for DecodeError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      DecodeError::Underrun(u) => write!(f, "{u}"),
      DecodeError::UnknownDiscriminator(d) => {
        write!(f, "unknown object representation discriminator 0x{d:02X}")
      }
      DecodeError::LengthMismatch { declared, consumed } => write!(
        f,
        "submessage length mismatch: header declares {declared} bytes, payload used {consumed}"
      ),
    }
  }
}

impl error::Error for DecodeError {
  fn source(&self) -> Option<&(dyn error::Error + 'static)> {
    match self {
      DecodeError::Underrun(u) => Some(u),
      _ => None,
    }
  }
}

impl From<Underrun> for DecodeError {
  fn from(u: Underrun) -> DecodeError {
    DecodeError::Underrun(u)
  }
}

/// Reported by a [`Listener`](crate::Listener) that could not accept a
/// decoded submessage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListenerError {
  pub reason: String,
}

impl ListenerError {
  pub fn new(reason: impl Into<String>) -> ListenerError {
    ListenerError {
      reason: reason.into(),
    }
  }
}

impl Display for ListenerError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "listener rejected submessage: {}", self.reason)
  }
}

impl error::Error for ListenerError {}

/// Why one submessage was dropped. None of these stop the parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmessageError {
  Decode(DecodeError),
  ListenerDeliveryFailure(ListenerError),
}

impl Display for SubmessageError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      SubmessageError::Decode(e) => write!(f, "decode failed: {e}"),
      SubmessageError::ListenerDeliveryFailure(e) => write!(f, "delivery failed: {e}"),
    }
  }
}

impl error::Error for SubmessageError {
  fn source(&self) -> Option<&(dyn error::Error + 'static)> {
    match self {
      SubmessageError::Decode(e) => Some(e),
      SubmessageError::ListenerDeliveryFailure(e) => Some(e),
    }
  }
}

impl From<DecodeError> for SubmessageError {
  fn from(e: DecodeError) -> SubmessageError {
    SubmessageError::Decode(e)
  }
}

impl From<ListenerError> for SubmessageError {
  fn from(e: ListenerError) -> SubmessageError {
    SubmessageError::ListenerDeliveryFailure(e)
  }
}

/// Fatal parse failures. Once one of these is returned, no further
/// submessages of that buffer were looked at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
  /// The buffer does not even hold a message header.
  MessageHeader(Underrun),
  /// A submessage header was expected but could not be read.
  SubmessageHeader(Underrun),
  /// The submessage kind is valid on the wire but this agent does not handle
  /// it. Usually a protocol version or capability mismatch with the client.
  UnsupportedSubmessageKind {
    submessage_header: SubmessageHeader,
    position: usize,
  },
}

impl Display for ParseError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ParseError::MessageHeader(u) => write!(f, "cannot read message header: {u}"),
      ParseError::SubmessageHeader(u) => write!(f, "cannot read submessage header: {u}"),
      ParseError::UnsupportedSubmessageKind {
        submessage_header,
        position,
      } => write!(
        f,
        "unsupported submessage {:?} at offset {position}",
        submessage_header.submessage_id
      ),
    }
  }
}

impl error::Error for ParseError {
  fn source(&self) -> Option<&(dyn error::Error + 'static)> {
    match self {
      ParseError::MessageHeader(u) | ParseError::SubmessageHeader(u) => Some(u),
      ParseError::UnsupportedSubmessageKind { .. } => None,
    }
  }
}

/// Errors from the reference encoder.
#[derive(Debug)]
pub enum EncodeError {
  Speedy(speedy::Error),
  /// A submessage body does not fit in the 16-bit length field.
  SubmessageTooLong(usize),
}

impl Display for EncodeError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      EncodeError::Speedy(e) => write!(f, "serialization failed: {e}"),
      EncodeError::SubmessageTooLong(len) => {
        write!(f, "submessage body of {len} bytes exceeds u16 length field")
      }
    }
  }
}

impl error::Error for EncodeError {}

impl From<speedy::Error> for EncodeError {
  fn from(e: speedy::Error) -> EncodeError {
    EncodeError::Speedy(e)
  }
}
