#[allow(unused_imports)]
use log::{debug, error, trace, warn};

use crate::{
  agent::{config::ParserConfig, listener::Listener},
  messages::{
    header::MessageHeader,
    submessages::{
      create::CreatePayload, payload::Payload, read_data::ReadDataPayload,
      submessage_header::SubmessageHeader, submessage_kind::SubmessageKind,
      write_data::WriteDataPayload,
    },
  },
  serialization::{Decode, DecodeError, Deserializer, ParseError, SubmessageError},
};

/// A submessage that was read but not delivered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmessageFailure {
  /// Zero-based index of the submessage within the message.
  pub index: usize,
  /// Byte offset of its submessage header.
  pub position: usize,
  pub submessage_header: SubmessageHeader,
  pub error: SubmessageError,
}

/// Outcome of a parse that reached the end of the buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseReport {
  pub header: MessageHeader,
  /// Submessages the listener accepted.
  pub delivered: usize,
  /// Submessages skipped because their payload did not decode or the
  /// listener refused them, in stream order.
  pub failures: Vec<SubmessageFailure>,
}

impl ParseReport {
  pub fn submessage_count(&self) -> usize {
    self.delivered + self.failures.len()
  }

  pub fn is_clean(&self) -> bool {
    self.failures.is_empty()
  }
}

/// Decodes XRCE messages and hands their submessages to a [`Listener`].
///
/// The parser holds only its configuration. All cursor state lives inside a
/// single [`parse`](Self::parse) call, so one instance can be shared between
/// threads and connections.
#[derive(Debug, Clone, Copy, Default)]
pub struct XrceParser {
  config: ParserConfig,
}

impl XrceParser {
  pub fn new(config: ParserConfig) -> XrceParser {
    XrceParser { config }
  }

  pub fn config(&self) -> &ParserConfig {
    &self.config
  }

  /// Parses one complete message.
  ///
  /// A missing or short message header, a short submessage header, and any
  /// submessage kind other than CREATE, WRITE_DATA or READ_DATA end the parse
  /// with an error. Submessages handed to the listener before that point stay
  /// delivered.
  ///
  /// A supported submessage whose payload does not decode, or which the
  /// listener rejects, is recorded in [`ParseReport::failures`] and parsing
  /// resumes at the next submessage header.
  pub fn parse<L>(&self, buffer: &[u8], listener: &mut L) -> Result<ParseReport, ParseError>
  where
    L: Listener + ?Sized,
  {
    let mut deserializer = Deserializer::new(buffer, self.config.endianness);

    let header = MessageHeader::decode(&mut deserializer).map_err(|u| {
      warn!("Cannot read message header: {u}");
      debug!("Data was {:02X?}", buffer);
      ParseError::MessageHeader(u)
    })?;
    trace!("{header:?}");

    let mut report = ParseReport {
      header,
      delivered: 0,
      failures: Vec::new(),
    };

    let mut index = 0;
    loop {
      let position = deserializer.position();
      let submessage_header = SubmessageHeader::decode(&mut deserializer).map_err(|u| {
        warn!("Cannot read submessage header #{index}: {u}");
        ParseError::SubmessageHeader(u)
      })?;
      trace!("{submessage_header:?} at offset {position}");

      let payload = match submessage_header.submessage_id {
        SubmessageKind::Create => self
          .decode_body::<CreatePayload>(&mut deserializer, &submessage_header)
          .map(Payload::from),
        SubmessageKind::WriteData => self
          .decode_body::<WriteDataPayload>(&mut deserializer, &submessage_header)
          .map(Payload::from),
        SubmessageKind::ReadData => self
          .decode_body::<ReadDataPayload>(&mut deserializer, &submessage_header)
          .map(Payload::from),
        SubmessageKind::Delete
        | SubmessageKind::GetInfo
        | SubmessageKind::Status
        | SubmessageKind::Info
        | SubmessageKind::Data
        | SubmessageKind::AckNack
        | SubmessageKind::Heartbeat
        | SubmessageKind::Reset
        | SubmessageKind::Fragment
        | SubmessageKind::FragmentEnd
        | SubmessageKind::Unknown(_) => {
          error!(
            "Submessage {:?} at offset {position} is not supported. Dropping rest of message.",
            submessage_header.submessage_id
          );
          return Err(ParseError::UnsupportedSubmessageKind {
            submessage_header,
            position,
          });
        }
      };

      let delivery = payload
        .map_err(SubmessageError::from)
        .and_then(|payload| {
          debug!("Delivering {payload:?}");
          listener
            .on_message(header, submessage_header, payload)
            .map_err(SubmessageError::from)
        });

      match delivery {
        Ok(()) => report.delivered += 1,
        Err(error) => {
          warn!(
            "Skipping {:?} submessage #{index} at offset {position}: {error}",
            submessage_header.submessage_id
          );
          report.failures.push(SubmessageFailure {
            index,
            position,
            submessage_header,
            error,
          });
        }
      }

      index += 1;
      if deserializer.at_end() {
        break;
      }
    }

    debug!(
      "Message from client 0x{:08X} done: {} delivered, {} failed",
      header.client_key,
      report.delivered,
      report.failures.len()
    );
    Ok(report)
  }

  // The payload only sees the bytes its submessage header announced, and the
  // outer cursor always moves to the next submessage, whatever happens here.
  fn decode_body<P>(
    &self,
    deserializer: &mut Deserializer<'_>,
    submessage_header: &SubmessageHeader,
  ) -> Result<P, DecodeError>
  where
    P: Decode<Error = DecodeError>,
  {
    let declared = submessage_header.submessage_length;
    let mut window = deserializer.take_window(usize::from(declared));
    let window_len = window.remaining();
    let payload = P::decode(&mut window)?;
    let consumed = window_len - window.remaining();

    if consumed != usize::from(declared) {
      if self.config.strict_submessage_length || window_len < usize::from(declared) {
        return Err(DecodeError::LengthMismatch { declared, consumed });
      }
      trace!("Ignoring {} trailing bytes in submessage", window.remaining());
    }
    Ok(payload)
  }
}

/// Parses `buffer` with the default [`ParserConfig`].
pub fn parse_message<L>(buffer: &[u8], listener: &mut L) -> Result<ParseReport, ParseError>
where
  L: Listener + ?Sized,
{
  XrceParser::default().parse(buffer, listener)
}
