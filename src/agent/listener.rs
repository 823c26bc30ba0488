#[allow(unused_imports)]
use log::{debug, info, trace, warn};

use crate::{
  messages::{
    header::MessageHeader,
    submessages::{payload::Payload, submessage_header::SubmessageHeader},
  },
  serialization::ListenerError,
  structure::object_representation::ObjectRepresentation,
};

/// Receiver of decoded submessages.
///
/// The parser calls `on_message` once for every CREATE, WRITE_DATA or
/// READ_DATA submessage that decoded cleanly, in the order they appear in the
/// buffer. Returning an error does not stop the parse; it is recorded in the
/// [`ParseReport`](crate::ParseReport).
pub trait Listener {
  fn on_message(
    &mut self,
    header: MessageHeader,
    submessage_header: SubmessageHeader,
    payload: Payload,
  ) -> Result<(), ListenerError>;
}

impl<F> Listener for F
where
  F: FnMut(MessageHeader, SubmessageHeader, Payload) -> Result<(), ListenerError>,
{
  fn on_message(
    &mut self,
    header: MessageHeader,
    submessage_header: SubmessageHeader,
    payload: Payload,
  ) -> Result<(), ListenerError> {
    self(header, submessage_header, payload)
  }
}

/// Listener that only writes what it receives to the log.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingListener;

impl Listener for LoggingListener {
  fn on_message(
    &mut self,
    header: MessageHeader,
    submessage_header: SubmessageHeader,
    payload: Payload,
  ) -> Result<(), ListenerError> {
    info!(
      "client_key=0x{:08X} session_id=0x{:02X} stream_id=0x{:02X} sequence_nr={} {:?} flags=0x{:02X} \
       length={}",
      header.client_key,
      header.session_id,
      header.stream_id,
      header.sequence_nr,
      submessage_header.submessage_id,
      submessage_header.flags,
      submessage_header.submessage_length,
    );
    match payload {
      Payload::Create(create) => {
        info!(
          "  request_id=0x{:08X} object_id={} kind={:?} string={:?}",
          create.request_id,
          create.object_id,
          create.object_representation.kind(),
          create.object_representation.as_string(),
        );
        match &create.object_representation {
          ObjectRepresentation::DataWriter(w) => debug!(
            "  participant_id={} publisher_id={}",
            w.participant_id, w.publisher_id
          ),
          ObjectRepresentation::DataReader(r) => debug!(
            "  participant_id={} subscriber_id={}",
            r.participant_id, r.subscriber_id
          ),
          ObjectRepresentation::Subscriber(s) => debug!("  participant_id={}", s.participant_id),
          ObjectRepresentation::Publisher(p) => debug!("  participant_id={}", p.participant_id),
        }
      }
      Payload::WriteData(write) => info!(
        "  request_id=0x{:08X} object_id={} data={} bytes",
        write.request_id,
        write.object_id,
        write.data.len()
      ),
      Payload::ReadData(read) => info!(
        "  request_id=0x{:08X} object_id={} max_messages={} max_samples={}",
        read.request_id, read.object_id, read.max_messages, read.max_samples
      ),
    }
    Ok(())
  }
}
