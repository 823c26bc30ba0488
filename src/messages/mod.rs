// message header
pub mod header;

// submessages
pub mod submessages;

pub mod message_builder;
