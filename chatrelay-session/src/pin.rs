//! Registration PIN generation.

use rand::Rng;
use rand::rngs::OsRng;

/// Lowest PIN value. Starting at 1000 keeps every PIN at exactly four
/// digits with no leading zero.
const PIN_MIN: u16 = 1000;

/// Highest PIN value, inclusive.
const PIN_MAX: u16 = 9999;

/// Generates a fresh 4-digit PIN from the OS entropy source.
///
/// Drawn uniformly from `[1000, 9999]`. The PIN gates local re-entry only
/// and is never sent to any server.
pub fn generate_pin() -> String {
    let mut rng = OsRng;
    rng.gen_range(PIN_MIN..=PIN_MAX).to_string()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pins_are_four_ascii_digits_in_range() {
        for _ in 0..10_000 {
            let pin = generate_pin();
            assert_eq!(pin.len(), 4, "PIN {pin:?} is not four characters");
            assert!(
                pin.bytes().all(|b| b.is_ascii_digit()),
                "PIN {pin:?} contains a non-digit"
            );
            let value: u16 = pin.parse().unwrap();
            assert!((1000..=9999).contains(&value), "PIN {pin} out of range");
        }
    }

    #[test]
    fn test_pins_vary() {
        let first = generate_pin();
        let varied = (0..1000).map(|_| generate_pin()).any(|pin| pin != first);
        assert!(varied, "1000 draws produced a single PIN value");
    }
}
