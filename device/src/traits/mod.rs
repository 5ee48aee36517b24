pub mod clock;
pub mod dht;
pub mod reset;
