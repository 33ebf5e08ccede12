//! Display formatting for balances and per-token prices.

use chatrelay_core::ProviderKind;

/// Formats a balance amount in the provider's display currency.
pub fn format_balance(amount: f64, provider: ProviderKind) -> String {
    match provider {
        ProviderKind::OpenRouter => format!("${amount:.2}"),
        ProviderKind::VseGpt => format!("{amount:.2}₽"),
    }
}

/// Formats a raw per-token price the way the provider's catalog displays it.
///
/// VseGPT quotes per-1K prices and the raw value is shown as given;
/// OpenRouter quotes per-token prices, rescaled here to per-million tokens.
pub fn format_pricing(price: f64, provider: ProviderKind) -> String {
    match provider {
        ProviderKind::OpenRouter => format!("${:.3}/M", price * 1_000_000.0),
        ProviderKind::VseGpt => format!("{price:.3}₽/K"),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_balance_openrouter() {
        assert_eq!(format_balance(6.5, ProviderKind::OpenRouter), "$6.50");
        assert_eq!(format_balance(0.0, ProviderKind::OpenRouter), "$0.00");
    }

    #[test]
    fn test_format_balance_vsegpt() {
        assert_eq!(format_balance(150.5, ProviderKind::VseGpt), "150.50₽");
        assert_eq!(format_balance(0.0, ProviderKind::VseGpt), "0.00₽");
    }

    #[test]
    fn test_format_pricing_openrouter_rescales_to_per_million() {
        assert_eq!(
            format_pricing(0.000_002, ProviderKind::OpenRouter),
            "$2.000/M"
        );
    }

    #[test]
    fn test_format_pricing_vsegpt_as_given() {
        assert_eq!(format_pricing(1.5, ProviderKind::VseGpt), "1.500₽/K");
    }
}
