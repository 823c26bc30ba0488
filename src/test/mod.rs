#[macro_use]
mod serialization_test;
