//! Map scene rendering for logixpress
//!
//! The renderer is a pure function from (streets, routes, animation time) to
//! an ordered list of draw commands for the 1000x600 logical surface. The GUI
//! translates the commands into egui shapes; the CLI can dump them as JSON.
//! Identical inputs always produce identical command lists.

mod frame;
pub mod palette;
mod primitives;
mod scheduler;

pub use frame::*;
pub use primitives::*;
pub use scheduler::*;
