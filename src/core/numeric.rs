// Defensive numeric coercion for aggregation.
//
// Report math is best-effort by policy: a single malformed row must not abort
// an entire report, so every summation site funnels through these helpers
// instead of coercing inline. Missing or unparseable values contribute zero.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde_json::Value;

/// Coerce a nullable monetary column to a value, treating NULL as zero.
pub fn decimal_or_zero(value: Option<Decimal>) -> Decimal {
    value.unwrap_or(Decimal::ZERO)
}

/// Read a numeric field out of a free-form JSON metrics blob.
///
/// Accepts integer, float, and numeric-string representations. Anything
/// else (missing key, null blob, non-numeric value) yields zero.
pub fn metric_or_zero(blob: Option<&Value>, field: &str) -> Decimal {
    let Some(value) = blob.and_then(|b| b.get(field)) else {
        return Decimal::ZERO;
    };

    match value {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Decimal::from(i)
            } else {
                n.as_f64()
                    .and_then(Decimal::from_f64_retain)
                    .unwrap_or(Decimal::ZERO)
            }
        }
        Value::String(s) => s.trim().parse().unwrap_or(Decimal::ZERO),
        _ => Decimal::ZERO,
    }
}

/// Whole-number percentage `round(100 * part / total)`, zero when `total` is
/// zero. Never NaN, never negative for non-negative inputs.
pub fn whole_percentage(part: u64, total: u64) -> u32 {
    if total == 0 {
        return 0;
    }
    let pct = Decimal::from(part) * Decimal::ONE_HUNDRED / Decimal::from(total);
    pct.round().to_u32().unwrap_or(0)
}

/// Percentage `100 * part / total` rounded to 2 decimal places, zero when
/// `total` is zero.
pub fn percentage_2dp(part: Decimal, total: Decimal) -> Decimal {
    if total.is_zero() {
        return Decimal::ZERO;
    }
    (Decimal::ONE_HUNDRED * part / total).round_dp(2)
}

/// Plain ratio `part / total` rounded to 2 decimal places, zero when `total`
/// is zero.
pub fn ratio_2dp(part: Decimal, total: Decimal) -> Decimal {
    if total.is_zero() {
        return Decimal::ZERO;
    }
    (part / total).round_dp(2)
}
