// src/core/format.rs
//
// Lithuanian display formatting: `1 234 567,89` with a no-break space.

const GROUP_SEP: char = '\u{a0}';
const DECIMAL_SEP: char = ',';

/// Two decimals, grouped thousands.
pub fn currency(value: f64) -> String {
    if !value.is_finite() {
        return s!("-");
    }
    let cents = (value.abs() * 100.0).round() as u128;
    let whole = (cents / 100).to_string();
    let frac = cents % 100;

    let mut out = String::with_capacity(whole.len() + whole.len() / 3 + 4);
    if value < 0.0 && cents > 0 {
        out.push('-');
    }
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            out.push(GROUP_SEP);
        }
        out.push(ch);
    }
    out.push(DECIMAL_SEP);
    out.push_str(&format!("{frac:02}"));
    out
}

/// `12.345` → `"12.35"`; used for plain averages.
pub fn fixed2(value: f64) -> String {
    if value.is_finite() { format!("{value:.2}") } else { s!("-") }
}

/// `yes`/`no` as shown in the report.
pub fn yes_no(v: bool) -> &'static str {
    if v { "Taip" } else { "Ne" }
}
