pub mod submessage_header;
pub mod submessage_kind;

pub mod create;
pub mod delete;
pub mod payload;
pub mod read_data;
pub mod write_data;
