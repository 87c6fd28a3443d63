pub mod call;
pub mod config;
pub mod resource;
pub mod resources;
pub mod tools;
