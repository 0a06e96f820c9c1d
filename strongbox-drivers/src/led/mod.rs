//! Status LED drivers

pub mod gpio;

pub use gpio::GpioLeds;
