//! This module checks and normalises UK postcodes.
//!
//! A postcode is an outward code (one or two letters, one or two digits and an optional letter)
//! followed, optionally after whitespace, by an inward code (a digit then two letters).
//! Matching is case-insensitive and ignores surrounding whitespace.

pub fn is_valid_postcode(postcode: &str) -> bool {
    split_postcode(postcode.trim()).is_some()
}

/// Upper-cases and re-spaces a postcode into its canonical "OUTWARD INWARD" form, or returns
/// `None` if it is not a valid UK postcode.
pub fn sanitize_postcode(postcode: &str) -> Option<String> {
    let cleaned = postcode
        .to_uppercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let (outward, inward) = split_postcode(&cleaned)?;

    Some(format!("{outward} {inward}"))
}

fn split_postcode(candidate: &str) -> Option<(&str, &str)> {
    let (inward_start, _) = candidate.char_indices().rev().nth(2)?;
    let (outward, inward) = candidate.split_at(inward_start);
    let outward = outward.trim_end();

    (is_outward_code(outward) && is_inward_code(inward)).then_some((outward, inward))
}

fn is_outward_code(code: &str) -> bool {
    let bytes = code.as_bytes();
    let letters = bytes
        .iter()
        .take_while(|byte| byte.is_ascii_alphabetic())
        .count();
    let digits = bytes[letters..]
        .iter()
        .take_while(|byte| byte.is_ascii_digit())
        .count();
    let remainder = &bytes[letters + digits..];

    (1..=2).contains(&letters)
        && (1..=2).contains(&digits)
        && match remainder {
            [] => true,
            [last] => last.is_ascii_alphabetic(),
            _ => false,
        }
}

fn is_inward_code(code: &str) -> bool {
    matches!(
        code.as_bytes(),
        [digit, first, second]
            if digit.is_ascii_digit() && first.is_ascii_alphabetic() && second.is_ascii_alphabetic()
    )
}
