//! Message framing and submessage dispatch for the DDS-XRCE client/agent
//! protocol.
//!
//! An agent receives one message per transport datagram or frame. Each
//! message starts with a [`MessageHeader`] and carries one or more
//! submessages. [`XrceParser`] walks the submessages in order and hands every
//! CREATE, WRITE_DATA and READ_DATA request to a [`Listener`].
//!
//! ```
//! use xrce_parser::{
//!   parse_message, CreatePayload, Endianness, ListenerError, MessageBuilder, MessageHeader,
//!   ObjectId, ObjectRepresentation, Payload, PublisherRepresentation, SubmessageHeader,
//! };
//!
//! let create = CreatePayload {
//!   request_id: 1,
//!   object_id: ObjectId::new(0x000010),
//!   object_representation: ObjectRepresentation::Publisher(PublisherRepresentation {
//!     as_string: "publisher".to_string(),
//!     participant_id: ObjectId::new(0x000001),
//!   }),
//! };
//! let header = MessageHeader {
//!   client_key: 0x11223344,
//!   session_id: 1,
//!   stream_id: 1,
//!   sequence_nr: 0,
//! };
//! let buffer = MessageBuilder::new(Endianness::LittleEndian)
//!   .create(&create)
//!   .build(header)
//!   .unwrap();
//!
//! let mut created = Vec::new();
//! let mut listener = |_: MessageHeader, _: SubmessageHeader, payload: Payload| {
//!   created.push(payload);
//!   Ok::<(), ListenerError>(())
//! };
//! let report = parse_message(&buffer, &mut listener).unwrap();
//! assert_eq!(report.delivered, 1);
//! assert_eq!(created, vec![Payload::Create(create)]);
//! ```

#[cfg(test)]
#[macro_use]
mod test;

pub mod agent;
pub mod messages;
pub mod serialization;
pub mod structure;

pub use agent::{
  config::ParserConfig,
  listener::{Listener, LoggingListener},
  parser::{parse_message, ParseReport, SubmessageFailure, XrceParser},
};
pub use messages::{
  header::MessageHeader,
  message_builder::MessageBuilder,
  submessages::{
    create::CreatePayload, delete::DeletePayload, payload::Payload, read_data::ReadDataPayload,
    submessage_header::SubmessageHeader, submessage_kind::SubmessageKind,
    write_data::WriteDataPayload,
  },
};
pub use serialization::{
  Decode, DecodeError, Deserializer, EncodeError, Endianness, ListenerError, ParseError,
  SubmessageError, Underrun,
};
pub use structure::{
  object_id::ObjectId,
  object_representation::{
    DataReaderRepresentation, DataWriterRepresentation, ObjectKind, ObjectRepresentation,
    PublisherRepresentation, SubscriberRepresentation,
  },
};
