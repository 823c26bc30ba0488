use std::convert::TryFrom;

use speedy::{Context, Writer};

/// Length prefix for a byte run of `len` bytes. Runs that do not fit the
/// 4-byte prefix are an encoding error, never a truncated length.
pub(crate) fn sequence_length(len: usize) -> Result<u32, speedy::Error> {
  u32::try_from(len)
    .map_err(|_| speedy::Error::custom(format!("sequence of {len} bytes does not fit u32 length")))
}

/// Writes `bytes` with a 4-byte length prefix, the counterpart of
/// [`Deserializer::read_sequence`](super::Deserializer::read_sequence).
pub(crate) fn write_sequence<C, T>(writer: &mut T, bytes: &[u8]) -> Result<(), C::Error>
where
  C: Context,
  T: ?Sized + Writer<C>,
{
  let length = sequence_length(bytes.len()).map_err(C::Error::from)?;
  writer.write_u32(length)?;
  writer.write_bytes(bytes)
}
