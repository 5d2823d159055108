//! Domain logic for the logixpress prototype
//!
//! Everything here is a pure function of the static fleet data; no IO, no
//! hidden state. The GUI and CLI build on these.

pub mod assignment;
pub mod marker;
pub mod orders;
pub mod selection;
pub mod stats;
