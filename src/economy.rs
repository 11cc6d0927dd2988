//! Currency accounting: zaar accumulation and automatic LAST conversion.

use crate::core::constants::ZAAR_TO_LAST_RATIO;
use serde::{Deserialize, Serialize};

/// The player's two currencies.
///
/// Zaar is the fractional accumulator earned from hunts, digs and social
/// rewards; whenever it reaches the conversion ratio the whole multiples
/// are eagerly converted into LAST, so `zaar < ZAAR_TO_LAST_RATIO` holds
/// after every update.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Wallet {
    pub zaar: f64,
    pub last: f64,
}

impl Wallet {
    /// Credits `amount` zaar and converts every whole multiple of the
    /// ratio into LAST. Returns the number of whole LAST gained so the
    /// caller can surface a conversion notification.
    ///
    /// Negative amounts are a caller contract violation and are not
    /// defended against.
    pub fn add_zaar(&mut self, amount: f64) -> u64 {
        self.zaar += amount;

        if self.zaar >= ZAAR_TO_LAST_RATIO {
            let gained = (self.zaar / ZAAR_TO_LAST_RATIO).floor();
            self.last += gained;
            self.zaar -= gained * ZAAR_TO_LAST_RATIO;
            gained as u64
        } else {
            0
        }
    }

    /// Credits LAST directly, bypassing conversion (prey LAST rewards).
    pub fn add_last(&mut self, amount: f64) {
        self.last += amount;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_amounts_accumulate_without_conversion() {
        let mut wallet = Wallet::default();
        assert_eq!(wallet.add_zaar(40.0), 0);
        assert_eq!(wallet.add_zaar(30.0), 0);
        assert_eq!(wallet.zaar, 70.0);
        assert_eq!(wallet.last, 0.0);
    }

    #[test]
    fn test_conversion_at_exact_ratio() {
        let mut wallet = Wallet::default();
        assert_eq!(wallet.add_zaar(100.0), 1);
        assert_eq!(wallet.zaar, 0.0);
        assert_eq!(wallet.last, 1.0);
    }

    #[test]
    fn test_conversion_keeps_strict_remainder() {
        let mut wallet = Wallet::default();
        let gained = wallet.add_zaar(250.0);
        assert_eq!(gained, 2);
        assert_eq!(wallet.zaar, 50.0);
        assert_eq!(wallet.last, 2.0);
    }

    #[test]
    fn test_remainder_below_ratio_after_every_call() {
        let mut wallet = Wallet::default();
        let amounts = [7.0, 99.0, 150.0, 3.5, 250.0, 0.25, 1000.0];
        for amount in amounts {
            wallet.add_zaar(amount);
            assert!(
                wallet.zaar < ZAAR_TO_LAST_RATIO,
                "zaar {} not below ratio after adding {}",
                wallet.zaar,
                amount
            );
        }
    }

    #[test]
    fn test_conversion_is_lossless_over_a_sequence() {
        let mut wallet = Wallet::default();
        let mut total = 0u64;
        for amount in [30u64, 45, 80, 120, 5, 99, 321] {
            wallet.add_zaar(amount as f64);
            total += amount;
        }
        let expected_last = total / ZAAR_TO_LAST_RATIO as u64;
        let expected_zaar = total % ZAAR_TO_LAST_RATIO as u64;
        assert_eq!(wallet.last, expected_last as f64);
        assert_eq!(wallet.zaar, expected_zaar as f64);
    }

    #[test]
    fn test_add_last_bypasses_conversion() {
        let mut wallet = Wallet::default();
        wallet.add_last(0.005);
        assert_eq!(wallet.last, 0.005);
        assert_eq!(wallet.zaar, 0.0);
    }
}
