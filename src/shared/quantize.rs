//! Standard-Quantisierung der Rohwerte, falls der Host keine eigene liefert.

use super::options::{QuantizeMode, QuantizeOptions};

/// Bildet einen kontinuierlichen Rohwert auf den diskreten Ausgabebereich ab.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quantizer {
    options: QuantizeOptions,
}

impl Quantizer {
    pub fn new(options: QuantizeOptions) -> Self {
        Self { options }
    }

    /// Rundet gemäß Modus und klemmt auf `[min, max]`.
    pub fn apply(&self, raw: f32) -> f32 {
        let snapped = match self.options.mode {
            QuantizeMode::Round => raw.round(),
            QuantizeMode::Floor => raw.floor(),
            QuantizeMode::Ceil => raw.ceil(),
            QuantizeMode::None => raw,
        };
        let (lo, hi) = if self.options.min <= self.options.max {
            (self.options.min, self.options.max)
        } else {
            (self.options.max, self.options.min)
        };
        snapped.clamp(lo, hi)
    }
}

impl Default for Quantizer {
    fn default() -> Self {
        Self::new(QuantizeOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quantizer(mode: QuantizeMode) -> Quantizer {
        Quantizer::new(QuantizeOptions {
            mode,
            min: 0.0,
            max: 15.0,
        })
    }

    #[test]
    fn test_modi() {
        assert_eq!(quantizer(QuantizeMode::Round).apply(7.5), 8.0);
        assert_eq!(quantizer(QuantizeMode::Round).apply(7.49), 7.0);
        assert_eq!(quantizer(QuantizeMode::Floor).apply(7.9), 7.0);
        assert_eq!(quantizer(QuantizeMode::Ceil).apply(7.1), 8.0);
        assert_eq!(quantizer(QuantizeMode::None).apply(7.25), 7.25);
    }

    #[test]
    fn test_klemmt_auf_bereich() {
        let q = quantizer(QuantizeMode::Round);
        assert_eq!(q.apply(-3.0), 0.0);
        assert_eq!(q.apply(99.0), 15.0);
    }

    #[test]
    fn test_vertauschte_grenzen() {
        let q = Quantizer::new(QuantizeOptions {
            mode: QuantizeMode::None,
            min: 10.0,
            max: 0.0,
        });
        assert_eq!(q.apply(12.0), 10.0);
    }
}
