//! Hardware abstraction traits
//!
//! These traits define the interface between the lock logic and
//! hardware-specific implementations.

pub mod diagnostic;
pub mod display;
pub mod led;

pub use diagnostic::DiagnosticOutput;
pub use display::{DisplayAdapter, DisplayAdapterExt};
pub use led::StatusLeds;
