use speedy::Endianness;

/// Settings of an [`XrceParser`](crate::XrceParser).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserConfig {
  /// Byte order of every multi-byte field in the message.
  pub endianness: Endianness,
  /// When set, a payload that leaves bytes unread inside its submessage is a
  /// decode failure. When cleared, the leftover bytes are skipped.
  pub strict_submessage_length: bool,
}

impl ParserConfig {
  pub fn with_endianness(mut self, endianness: Endianness) -> ParserConfig {
    self.endianness = endianness;
    self
  }

  pub fn with_strict_submessage_length(mut self, strict: bool) -> ParserConfig {
    self.strict_submessage_length = strict;
    self
  }
}

impl Default for ParserConfig {
  fn default() -> ParserConfig {
    ParserConfig {
      endianness: Endianness::LittleEndian,
      strict_submessage_length: true,
    }
  }
}
