//! Quantity normalization for free-form amount strings.
//!
//! Recipe amounts arrive as human-written text ("400g", "2 cucharadas",
//! "1 taza") and are normalized to grams for nutrient accumulation.

const GRAMS_PER_KG: f64 = 1000.0;
const GRAMS_PER_LIBRA: f64 = 453.592;
const GRAMS_PER_ONZA: f64 = 28.3495;
/// Liquid approximation for one cup.
const GRAMS_PER_TAZA: f64 = 240.0;
const GRAMS_PER_CUCHARADA: f64 = 15.0;
const GRAMS_PER_CUCHARADITA: f64 = 5.0;
const GRAMS_PER_LITRO: f64 = 1000.0;

/// Assumed amount when no number can be extracted.
pub const DEFAULT_GRAMS: f64 = 100.0;

/// Normalize a free-form amount string to grams.
///
/// Takes the first run of digits as the value; a string with no digits at
/// all falls back to [`DEFAULT_GRAMS`] without consulting units. Unit
/// keywords are matched case-insensitively, first hit wins, in fixed
/// priority order. Milliliters assume density ~1. A bare number with no
/// recognized unit is taken as grams already.
///
/// Total function: no input can fail.
pub fn normalize_to_grams(amount: &str) -> f64 {
    let Some(value) = first_number(amount) else {
        return DEFAULT_GRAMS;
    };

    let lower = amount.to_lowercase();

    if lower.contains("kg") {
        return value * GRAMS_PER_KG;
    }
    if lower.contains("libra") {
        return value * GRAMS_PER_LIBRA;
    }
    if lower.contains("onza") {
        return value * GRAMS_PER_ONZA;
    }
    if lower.contains("taza") {
        return value * GRAMS_PER_TAZA;
    }
    if lower.contains("cucharadita") {
        return value * GRAMS_PER_CUCHARADITA;
    }
    if lower.contains("cucharada") {
        return value * GRAMS_PER_CUCHARADA;
    }
    if lower.contains("ml") || lower.contains("cc") {
        // density ~1 assumption
        return value;
    }
    if lower.contains("litro") || has_liter_token(&lower) {
        return value * GRAMS_PER_LITRO;
    }

    // No unit keyword: assume the value is grams.
    value
}

/// Extract the first contiguous run of ASCII digits as a number.
///
/// Only whole numbers are recognized; "2.5" yields 2, matching the
/// tolerant-input contract (amounts are AI- or user-written text).
fn first_number(s: &str) -> Option<f64> {
    let digits: String = s
        .chars()
        .skip_while(|c| !c.is_ascii_digit())
        .take_while(|c| c.is_ascii_digit())
        .collect();

    digits.parse::<u64>().ok().map(|n| n as f64)
}

/// Detect a standalone liter token: "1 l", "2l", "3 lt".
///
/// A bare `contains('l')` would treat any word with an L in it ("lata",
/// "laminado") as liters, so liters require their own token.
fn has_liter_token(lower: &str) -> bool {
    lower.split_whitespace().any(|token| {
        let token = token.trim_matches(|c: char| !c.is_ascii_alphanumeric());
        match token {
            "l" | "lt" | "lts" => true,
            _ => {
                token.len() > 1
                    && token.ends_with('l')
                    && token[..token.len() - 1].chars().all(|c| c.is_ascii_digit())
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_grams() {
        assert_eq!(normalize_to_grams("400g"), 400.0);
        assert_eq!(normalize_to_grams("150 gramos"), 150.0);
    }

    #[test]
    fn test_no_digits_defaults() {
        assert_eq!(normalize_to_grams("sal"), DEFAULT_GRAMS);
        assert_eq!(normalize_to_grams("al gusto"), DEFAULT_GRAMS);
        assert_eq!(normalize_to_grams(""), DEFAULT_GRAMS);
    }

    #[test]
    fn test_default_ignores_units_without_digits() {
        // No digits short-circuits before unit detection.
        assert_eq!(normalize_to_grams("una taza"), DEFAULT_GRAMS);
    }

    #[test]
    fn test_kilograms() {
        assert_eq!(normalize_to_grams("1kg"), 1000.0);
        assert_eq!(normalize_to_grams("2 kg de harina"), 2000.0);
    }

    #[test]
    fn test_libras_and_onzas() {
        assert!((normalize_to_grams("1 libra") - 453.592).abs() < 1e-9);
        assert!((normalize_to_grams("2 onzas") - 56.699).abs() < 1e-9);
    }

    #[test]
    fn test_tazas() {
        assert_eq!(normalize_to_grams("1 taza"), 240.0);
        assert_eq!(normalize_to_grams("2 tazas de arroz"), 480.0);
    }

    #[test]
    fn test_cucharadas() {
        assert_eq!(normalize_to_grams("2 cucharadas"), 30.0);
        assert_eq!(normalize_to_grams("1 cucharada de aceite"), 15.0);
    }

    #[test]
    fn test_cucharaditas() {
        assert_eq!(normalize_to_grams("2 cucharaditas"), 10.0);
        assert_eq!(normalize_to_grams("1 cucharadita de sal"), 5.0);
    }

    #[test]
    fn test_milliliters() {
        assert_eq!(normalize_to_grams("500ml"), 500.0);
        assert_eq!(normalize_to_grams("250 cc"), 250.0);
    }

    #[test]
    fn test_liters() {
        assert_eq!(normalize_to_grams("1 litro"), 1000.0);
        assert_eq!(normalize_to_grams("2l"), 2000.0);
        assert_eq!(normalize_to_grams("1 l"), 1000.0);
    }

    #[test]
    fn test_embedded_l_is_not_liters() {
        assert_eq!(normalize_to_grams("1 lata"), 1.0);
    }

    #[test]
    fn test_first_number_wins() {
        // Only the first digit run is used.
        assert_eq!(normalize_to_grams("2 o 3 cucharadas"), 30.0);
    }

    #[test]
    fn test_decimal_truncates_to_first_run() {
        assert_eq!(normalize_to_grams("2.5g"), 2.0);
    }

    #[test]
    fn test_bare_number_is_grams() {
        assert_eq!(normalize_to_grams("350"), 350.0);
        assert_eq!(normalize_to_grams("1 unidad"), 1.0);
    }
}
