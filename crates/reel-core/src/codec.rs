#![forbid(unsafe_code)]

//! Conversion between integer values and padded digit sequences.
//!
//! A value of `None` is the "not a number" state: unparseable or
//! unrepresentable input. It has natural width 0 and renders as an
//! all-blank sequence, so it can never force slot growth.

use crate::symbol::Symbol;

/// Length of the canonical decimal rendering of `value`.
///
/// The minus sign of a negative value counts as one column. `None` has
/// width 0.
#[must_use]
pub fn natural_width(value: Option<i64>) -> usize {
    let Some(v) = value else { return 0 };
    let mut width = if v < 0 { 2 } else { 1 };
    let mut magnitude = v.unsigned_abs();
    while magnitude >= 10 {
        magnitude /= 10;
        width += 1;
    }
    width
}

/// Convert `value` to a fixed-width symbol sequence, most significant
/// first, left-padded with [`Symbol::Blank`].
///
/// `None` yields an all-blank sequence of length `width`. The sequence is
/// never truncated: if `width` is smaller than the natural width the
/// result is the natural rendering (callers uphold `width >=
/// natural_width(value)` by construction).
#[must_use]
pub fn digits_of(value: Option<i64>, width: usize) -> Vec<Symbol> {
    let Some(v) = value else {
        return vec![Symbol::Blank; width];
    };

    let natural = natural_width(value);
    let mut out = Vec::with_capacity(width.max(natural));
    out.resize(width.saturating_sub(natural), Symbol::Blank);

    if v < 0 {
        out.push(Symbol::Minus);
    }
    let digits_start = out.len();
    let mut magnitude = v.unsigned_abs();
    loop {
        out.insert(digits_start, Symbol::Digit((magnitude % 10) as u8));
        magnitude /= 10;
        if magnitude == 0 {
            break;
        }
    }
    out
}

/// Parse external textual input into an integer value.
///
/// Follows leading-prefix semantics: skip leading whitespace, accept an
/// optional `+`/`-` sign, then consume the longest run of decimal digits
/// and ignore any trailing garbage (`"12px"` parses as 12). An empty digit
/// run yields `None`, as does a digit run that overflows `i64`; both are
/// "not a representable integer", never an error.
#[must_use]
pub fn parse_value(raw: &str) -> Option<i64> {
    let mut rest = raw.trim_start().chars().peekable();

    let negative = match rest.peek() {
        Some('-') => {
            rest.next();
            true
        }
        Some('+') => {
            rest.next();
            false
        }
        _ => false,
    };

    // Accumulate negatively so i64::MIN parses without overflow.
    let mut acc: i64 = 0;
    let mut seen_digit = false;
    while let Some(d) = rest.peek().and_then(|c| c.to_digit(10)) {
        rest.next();
        seen_digit = true;
        acc = acc.checked_mul(10)?.checked_sub(d as i64)?;
    }

    if !seen_digit {
        return None;
    }
    if negative { Some(acc) } else { acc.checked_neg() }
}
