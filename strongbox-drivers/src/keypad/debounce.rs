//! Key debouncing
//!
//! Each key has a saturating integrator: it counts up while the raw input
//! reads pressed and down while it reads released. The debounced state
//! only flips when the counter reaches either rail, so a bouncing contact
//! has to settle for `threshold` consecutive samples first.

/// Integrating debouncer for up to 32 keys
#[derive(Debug, Clone)]
pub struct Debouncer<const N: usize> {
    counters: [u8; N],
    pressed: u32,
    threshold: u8,
}

impl<const N: usize> Debouncer<N> {
    /// Create a debouncer; `threshold` is clamped to at least 1
    pub fn new(threshold: u8) -> Self {
        debug_assert!(N <= 32);
        Self {
            counters: [0; N],
            pressed: 0,
            threshold: threshold.max(1),
        }
    }

    /// Feed one raw sample per key, return the keys that just went down
    ///
    /// Bit `i` of `raw` is key `i`'s instantaneous reading.
    pub fn update(&mut self, raw: u32) -> u32 {
        let mut newly_pressed = 0;
        for (i, counter) in self.counters.iter_mut().enumerate() {
            let bit = 1u32 << i;
            if raw & bit != 0 {
                if *counter < self.threshold {
                    *counter += 1;
                }
                if *counter == self.threshold && self.pressed & bit == 0 {
                    self.pressed |= bit;
                    newly_pressed |= bit;
                }
            } else {
                *counter = counter.saturating_sub(1);
                if *counter == 0 {
                    self.pressed &= !bit;
                }
            }
        }
        newly_pressed
    }

    /// Debounced state of every key
    pub fn pressed(&self) -> u32 {
        self.pressed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_reported_after_threshold() {
        let mut db = Debouncer::<4>::new(3);
        assert_eq!(db.update(0b0010), 0);
        assert_eq!(db.update(0b0010), 0);
        assert_eq!(db.update(0b0010), 0b0010);
        // Held keys are reported once
        assert_eq!(db.update(0b0010), 0);
        assert_eq!(db.pressed(), 0b0010);
    }

    #[test]
    fn test_bounce_is_filtered() {
        let mut db = Debouncer::<1>::new(3);
        for raw in [1, 0, 1, 0, 1, 0] {
            assert_eq!(db.update(raw), 0);
        }
        assert_eq!(db.pressed(), 0);
    }

    #[test]
    fn test_release_requires_settling() {
        let mut db = Debouncer::<1>::new(2);
        db.update(1);
        assert_eq!(db.update(1), 1);
        db.update(0);
        assert_eq!(db.pressed(), 1);
        db.update(0);
        assert_eq!(db.pressed(), 0);
        db.update(1);
        assert_eq!(db.update(1), 1);
    }

    #[test]
    fn test_simultaneous_keys() {
        let mut db = Debouncer::<3>::new(1);
        assert_eq!(db.update(0b101), 0b101);
    }

    #[test]
    fn test_zero_threshold_clamped() {
        let mut db = Debouncer::<1>::new(0);
        assert_eq!(db.update(1), 1);
    }
}
