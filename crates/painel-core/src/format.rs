//! pt-BR currency formatting for dashboard cards

/// Format an amount as Brazilian reais: `R$ 1.234,56`
///
/// Negative values get a leading minus (`-R$ 40,00`). Amounts are rounded to
/// cents.
pub fn format_brl(value: f64) -> String {
    let cents = (value.abs() * 100.0).round() as u64;
    let sign = if value < 0.0 && cents > 0 { "-" } else { "" };
    format!(
        "{}R$ {},{:02}",
        sign,
        group_thousands(cents / 100),
        cents % 100
    )
}

fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_brl() {
        assert_eq!(format_brl(0.0), "R$ 0,00");
        assert_eq!(format_brl(40.0), "R$ 40,00");
        assert_eq!(format_brl(1234.5), "R$ 1.234,50");
        assert_eq!(format_brl(1_000_000.0), "R$ 1.000.000,00");
        assert_eq!(format_brl(999.999), "R$ 1.000,00");
    }

    #[test]
    fn test_format_brl_negative() {
        assert_eq!(format_brl(-40.0), "-R$ 40,00");
        assert_eq!(format_brl(-0.001), "R$ 0,00");
    }
}
