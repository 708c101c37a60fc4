pub mod client;
pub mod outfit_generator;
