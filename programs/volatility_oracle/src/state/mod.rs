pub mod accumulator;
pub mod manual_vol;
pub mod oracle_config;

pub use accumulator::*;
pub use manual_vol::*;
pub use oracle_config::*;
