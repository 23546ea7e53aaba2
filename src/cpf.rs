//! CPF handling — progressive display mask and mod-11 checksum validation.
//!
//! Pure string functions, no I/O. The mask is applied as the user types, so
//! `format` must accept arbitrary partial input (including its own output)
//! and never fail.

/// Digits of `input`, in order, nothing else.
pub fn strip(input: &str) -> String {
    input.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Masks `input` as `XXX.XXX.XXX-XX`, inserting each separator only once
/// enough digits exist to trigger it. Non-digits are stripped first, so
/// pasted text with spaces or dashes normalizes cleanly; anything past 11
/// digits is dropped. Idempotent: formatting formatted output is a no-op.
pub fn format(input: &str) -> String {
    let digits: Vec<char> = strip(input).chars().take(11).collect();

    let mut out = String::with_capacity(14);
    for (i, d) in digits.iter().enumerate() {
        match i {
            3 | 6 => out.push('.'),
            9 => out.push('-'),
            _ => {}
        }
        out.push(*d);
    }
    out
}

/// Checksum validation: strips non-digits, requires exactly 11 digits,
/// rejects all-identical sequences, then checks both verification digits
/// with the standard two-pass weighted-sum mod-11 algorithm.
pub fn is_valid(input: &str) -> bool {
    let digits: Vec<u32> = input.chars().filter_map(|c| c.to_digit(10)).collect();

    if digits.len() != 11 {
        return false;
    }
    // Trivial sequences like 00000000000 pass the checksum but are not
    // assignable CPFs.
    if digits.iter().all(|&d| d == digits[0]) {
        return false;
    }

    check_digit(&digits[..9], 10) == digits[9] && check_digit(&digits[..10], 11) == digits[10]
}

/// One verification digit: weights `first_weight` down to 2, sum·10 mod 11,
/// remainders 10 and 11 map to 0.
fn check_digit(digits: &[u32], first_weight: u32) -> u32 {
    let sum: u32 = digits
        .iter()
        .enumerate()
        .map(|(i, &d)| d * (first_weight - i as u32))
        .sum();
    match (sum * 10) % 11 {
        10 | 11 => 0,
        r => r,
    }
}
