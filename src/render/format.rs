/// Thousands separator of the German wiki the output is written for.
pub const SEPARATOR: char = '.';

/// Group digits in threes with [`SEPARATOR`]; four-digit values stay bare.
///
/// `9999` → `9999`, `10000` → `10.000`, `123456` → `123.456`.
pub fn format_population(value: u32) -> String {
    let digits = value.to_string();
    if value < 10_000 {
        return digits;
    }

    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(SEPARATOR);
        }
        out.push(ch);
    }
    out
}

/// `1986` → `86`, `2005` → `05`.
pub fn two_digit_year(year: u16) -> String {
    format!("{:02}", year % 100)
}
