pub mod dht;
pub mod reset;
