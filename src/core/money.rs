//! Currency units and formatting.
//!
//! All engine values are held in silver pieces (the smaller unit) as `i64`.
//! Gold pieces only appear at the edges: gem plans carry a gold base value
//! and reports format back into gold where it reads naturally.

/// Silver pieces per gold piece.
pub const SP_PER_GP: i64 = 20;

/// Convert a gold value to silver, rounding to the nearest piece.
#[must_use]
pub fn to_sp(gp: f64) -> i64 {
    (gp * SP_PER_GP as f64).round() as i64
}

/// Round a fractional silver amount to the nearest piece.
#[must_use]
pub fn round_sp(value: f64) -> i64 {
    value.round() as i64
}

/// Format a silver value for display.
///
/// Zero is `"Nil"`. Amounts of at least one gold piece are shown in gold
/// (whole or with two decimals), anything smaller in silver.
///
/// ```
/// use gem_appraisal::core::format_sp;
///
/// assert_eq!(format_sp(0), "Nil");
/// assert_eq!(format_sp(15), "15 sp");
/// assert_eq!(format_sp(20_000), "1,000 gp");
/// assert_eq!(format_sp(30), "1.50 gp");
/// ```
#[must_use]
pub fn format_sp(value_sp: i64) -> String {
    if value_sp == 0 {
        return "Nil".to_string();
    }
    if value_sp >= SP_PER_GP {
        let whole = value_sp / SP_PER_GP;
        let rem = value_sp % SP_PER_GP;
        if rem == 0 {
            return format!("{} gp", group_thousands(whole));
        }
        // Two decimals of a twentieth are exact: rem * 5 hundredths.
        return format!("{}.{:02} gp", group_thousands(whole), rem * 100 / SP_PER_GP);
    }
    format!("{} sp", value_sp)
}

fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_sp() {
        assert_eq!(to_sp(1.0), 20);
        assert_eq!(to_sp(10.0 * 0.75), 150);
        assert_eq!(to_sp(0.5), 10);
        assert_eq!(to_sp(0.0), 0);
    }

    #[test]
    fn test_format_nil() {
        assert_eq!(format_sp(0), "Nil");
    }

    #[test]
    fn test_format_silver() {
        assert_eq!(format_sp(1), "1 sp");
        assert_eq!(format_sp(19), "19 sp");
    }

    #[test]
    fn test_format_whole_gold() {
        assert_eq!(format_sp(20), "1 gp");
        assert_eq!(format_sp(100_000), "5,000 gp");
        assert_eq!(format_sp(20_000_000), "1,000,000 gp");
    }

    #[test]
    fn test_format_fractional_gold() {
        assert_eq!(format_sp(21), "1.05 gp");
        assert_eq!(format_sp(20_010), "1,000.50 gp");
    }
}
