//! Serial diagnostic output

pub mod diagnostic;

pub use diagnostic::SerialDiagnostic;
