//! Constant-product (x * y = k) swap math.

/// Output received for `amount_in` sold into a constant-product pool holding
/// `reserve_in` of the input token and `reserve_out` of the output token,
/// after a proportional `fee_rate` is taken from the input.
///
/// `amount_out = (amount_in * (1 - fee) * reserve_out) / (reserve_in + amount_in * (1 - fee))`
///
/// Callers must reject empty reserves first: with `reserve_in == 0` the output
/// is the whole `reserve_out` regardless of size.
pub fn get_amount_out(amount_in: f64, reserve_in: f64, reserve_out: f64, fee_rate: f64) -> f64 {
    let fee_adjusted_input = amount_in * (1.0 - fee_rate);
    (fee_adjusted_input * reserve_out) / (reserve_in + fee_adjusted_input)
}
