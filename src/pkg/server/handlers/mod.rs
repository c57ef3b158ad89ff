pub mod probes;
pub mod sample;
