pub mod client;
pub mod headline_generator;
pub mod safety;
