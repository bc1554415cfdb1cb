//! Digit-string arithmetic
//!
//! These helpers work on strings that already passed
//! [`is_numeric_string`](super::validation::is_numeric_string). They operate on
//! ASCII bytes directly and never go through a fixed-width integer, so there is
//! no upper bound on operand size.

/// Strips leading zeros. An all-zero input collapses to `"0"`.
pub fn canonicalize(digits: &str) -> &str {
    let trimmed = digits.trim_start_matches('0');
    if trimmed.is_empty() && !digits.is_empty() {
        "0"
    } else {
        trimmed
    }
}

/// Adds two digit strings with carry and returns the canonical sum.
pub fn add_digits(left: &str, right: &str) -> String {
    let left = canonicalize(left).as_bytes();
    let right = canonicalize(right).as_bytes();

    let mut out = Vec::with_capacity(left.len().max(right.len()) + 1);
    let mut lhs = left.iter().rev();
    let mut rhs = right.iter().rev();
    let mut carry = 0u8;

    loop {
        let (l, r) = (lhs.next(), rhs.next());
        if l.is_none() && r.is_none() {
            break;
        }
        let total = l.map_or(0, |d| d - b'0') + r.map_or(0, |d| d - b'0') + carry;
        out.push(b'0' + total % 10);
        carry = total / 10;
    }
    if carry > 0 {
        out.push(b'0' + carry);
    }
    if out.is_empty() {
        out.push(b'0');
    }

    out.reverse();
    // Only ASCII digits are ever pushed.
    out.into_iter().map(char::from).collect()
}
