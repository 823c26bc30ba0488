pub mod object_id;
pub mod object_representation;
