pub(crate) mod deserializer;
pub(crate) mod error;
pub(crate) mod sequence;

pub use deserializer::{Decode, Deserializer};
pub use error::{
  DecodeError, EncodeError, ListenerError, ParseError, SubmessageError, Underrun,
};
// Byte order is selected at runtime, so it is re-exported for callers
// configuring the parser or the encoder.
pub use speedy::Endianness;
