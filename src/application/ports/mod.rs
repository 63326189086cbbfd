// src/application/ports/mod.rs
pub mod content;
pub mod time;

// Type aliases to make port injection sites more descriptive and reduce `dyn` noise
pub type ContentClientPort = dyn content::ContentClient;
pub type ClockPort = dyn time::Clock;
