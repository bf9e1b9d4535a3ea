//! Blink-Zustand der Status-LED
//!
//! Vollständig unabhängig von Tastern, Ziffer und Ton.

/// Status-LED Zustand: startet "aus", kippt einmal pro Blink-Periode
#[derive(Debug, Default)]
pub struct StatusBlinker {
    on: bool,
}

impl StatusBlinker {
    pub const fn new() -> Self {
        Self { on: false }
    }

    /// Kippt den Pegel und liefert den neuen Zustand
    pub fn toggle(&mut self) -> bool {
        self.on = !self.on;
        self.on
    }

    pub const fn is_on(&self) -> bool {
        self.on
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_off() {
        assert!(!StatusBlinker::new().is_on());
    }

    #[test]
    fn test_alternates_on_every_toggle() {
        let mut blinker = StatusBlinker::new();
        for period in 0..8 {
            let on = blinker.toggle();
            // Start bei "aus": erste Periode an, dann abwechselnd
            assert_eq!(on, period % 2 == 0);
            assert_eq!(blinker.is_on(), on);
        }
    }
}
