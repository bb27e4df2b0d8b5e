//! Request/response shapes and the accumulation loop.

use serde::{Deserialize, Serialize};

/// Descriptive label included in every response. Cosmetic only; carries
/// no routing or dispatch meaning.
pub const ENGINE: &str = "Rust (Axum) High Performance Engine";

#[derive(Debug, Deserialize)]
pub struct CalculationRequest {
    pub numbers: Vec<f64>,
}

#[derive(Debug, Serialize)]
pub struct CalculationResponse {
    pub result: f64,
    pub engine: &'static str,
}

/// Left-to-right fold with plain f64 addition. NaN and infinities
/// propagate per IEEE 754; an empty slice sums to exactly 0.
pub fn sum(numbers: &[f64]) -> f64 {
    let mut total = 0.0;
    for number in numbers {
        total += number;
    }
    total
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_sequence_sums_to_zero() {
        assert_eq!(sum(&[]), 0.0);
    }

    #[test]
    fn sums_left_to_right() {
        assert_eq!(sum(&[1.0, 2.0, 3.5]), 6.5);
    }

    #[test]
    fn negative_and_fractional_inputs() {
        assert_eq!(sum(&[-1.5, 0.5, 2.0]), 1.0);
    }

    #[test]
    fn nan_propagates() {
        assert!(sum(&[1.0, f64::NAN, 2.0]).is_nan());
    }

    #[test]
    fn infinity_propagates() {
        assert_eq!(sum(&[f64::INFINITY, 1.0]), f64::INFINITY);
    }

    #[test]
    fn request_decodes_numbers_field() {
        let request: CalculationRequest =
            serde_json::from_str(r#"{"numbers":[1,2.5]}"#).expect("valid request");
        assert_eq!(request.numbers, vec![1.0, 2.5]);
    }

    #[test]
    fn request_rejects_wrong_field_type() {
        let result = serde_json::from_str::<CalculationRequest>(r#"{"numbers":"abc"}"#);
        assert!(result.is_err());
    }
}
