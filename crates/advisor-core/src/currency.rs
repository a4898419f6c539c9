use crate::ValidationError;

/// Format a price as a USD display string: two fixed decimals and
/// thousands separators, e.g. `$1,234,567.89`.
///
/// Display-layer only; persisted CSV values are plain decimal text.
pub fn to_usd(amount: f64) -> Result<String, ValidationError> {
    if !amount.is_finite() {
        return Err(ValidationError::NonFiniteValue { field: "amount" });
    }

    let fixed = format!("{amount:.2}");
    let (sign, unsigned) = match fixed.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", fixed.as_str()),
    };
    let (int_part, frac_part) = unsigned
        .split_once('.')
        .expect("fixed-point format always has a fractional part");

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (index, digit) in int_part.chars().enumerate() {
        if index > 0 && (int_part.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    Ok(format!("${sign}{grouped}.{frac_part}"))
}
