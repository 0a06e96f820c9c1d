//! GPIO status LEDs
//!
//! A red and a green LED, each on its own pin, driven directly or through
//! a transistor. Exactly one is lit once an indication has been shown.

use embedded_hal::digital::{OutputPin, PinState};

use strongbox_core::state::LedIndication;
use strongbox_core::traits::StatusLeds;

/// Red/green LED pair on GPIO
pub struct GpioLeds<P> {
    red: P,
    green: P,
    /// If true, LED on = pin LOW
    active_low: bool,
    current: Option<LedIndication>,
}

impl<P: OutputPin> GpioLeds<P> {
    /// Create the LED pair with both LEDs off
    ///
    /// # Arguments
    /// - `red`: Pin for the locked indicator
    /// - `green`: Pin for the unlocked indicator
    /// - `active_low`: If true, an LED lights when its pin is LOW
    pub fn new(red: P, green: P, active_low: bool) -> Self {
        let mut leds = Self {
            red,
            green,
            active_low,
            current: None,
        };
        leds.drive(false, false);
        leds
    }

    /// Create an LED pair lit by driving pins high
    pub fn new_active_high(red: P, green: P) -> Self {
        Self::new(red, green, false)
    }

    /// Create an LED pair lit by pulling pins low
    pub fn new_active_low(red: P, green: P) -> Self {
        Self::new(red, green, true)
    }

    /// Release the pins
    pub fn release(self) -> (P, P) {
        (self.red, self.green)
    }

    fn drive(&mut self, red_on: bool, green_on: bool) {
        // Pin errors are infallible on the supported chips
        let _ = self.red.set_state(PinState::from(red_on != self.active_low));
        let _ = self
            .green
            .set_state(PinState::from(green_on != self.active_low));
    }
}

impl<P: OutputPin> StatusLeds for GpioLeds<P> {
    fn show(&mut self, indication: LedIndication) {
        match indication {
            LedIndication::Locked => self.drive(true, false),
            LedIndication::Unlocked => self.drive(false, true),
        }
        self.current = Some(indication);
    }

    fn indication(&self) -> Option<LedIndication> {
        self.current
    }
}
