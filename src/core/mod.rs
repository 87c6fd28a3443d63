pub mod builtins;
pub mod calculator;
pub mod catalog;
pub mod greeting;
pub mod resources;
pub mod test_data;
pub mod tools;
