// SPDX-FileCopyrightText: 2025 Hyperpolymath
// SPDX-License-Identifier: Apache-2.0

//! CPF checksum validator.
//!
//! A CPF is eleven digits, the last two being verification digits computed
//! from the preceding ones with a weighted modulo-11 sum. Punctuation such
//! as `529.982.247-25` is ignored.

/// Number of digits in a CPF.
pub const CPF_LEN: usize = 11;

const FIRST_DIGIT_WEIGHTS: [u32; 9] = [10, 9, 8, 7, 6, 5, 4, 3, 2];
const SECOND_DIGIT_WEIGHTS: [u32; 10] = [11, 10, 9, 8, 7, 6, 5, 4, 3, 2];

/// Check whether `candidate` is a checksum-correct CPF.
///
/// Never fails: empty, malformed or wrongly sized input is simply invalid.
pub fn is_valid(candidate: &str) -> bool {
    if candidate.trim().is_empty() {
        return false;
    }

    let digits = normalize(candidate);
    if digits.len() != CPF_LEN {
        return false;
    }

    // Repeated-digit sequences pass the checksum for some values.
    if digits.iter().all(|&d| d == digits[0]) {
        return false;
    }

    // The second digit is computed over the supplied tenth digit, not `first`.
    let first = verification_digit(&digits[..9], &FIRST_DIGIT_WEIGHTS);
    let second = verification_digit(&digits[..10], &SECOND_DIGIT_WEIGHTS);

    digits[9] == first && digits[10] == second
}

/// Same as [`is_valid`], treating an absent value as invalid.
pub fn is_valid_opt(candidate: Option<&str>) -> bool {
    candidate.is_some_and(is_valid)
}

/// Strip everything but ASCII digits, returning their numeric values in order.
pub fn normalize(candidate: &str) -> Vec<u32> {
    candidate
        .bytes()
        .filter(u8::is_ascii_digit)
        .map(|b| u32::from(b - b'0'))
        .collect()
}

fn verification_digit(digits: &[u32], weights: &[u32]) -> u32 {
    let sum: u32 = digits.iter().zip(weights).map(|(d, w)| d * w).sum();
    match sum % 11 {
        r if r < 2 => 0,
        r => 11 - r,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_document_is_valid() {
        assert!(is_valid("52998224725"));
    }

    #[test]
    fn test_formatted_document_is_valid() {
        assert!(is_valid("529.982.247-25"));
        assert!(is_valid(" 529 982 247 25 "));
    }

    #[test]
    fn test_wrong_check_digits_rejected() {
        assert!(!is_valid("52998224726"));
        assert!(!is_valid("52998224715"));
        assert!(!is_valid("12345678900"));
    }

    #[test]
    fn test_single_digit_mutations_rejected() {
        let valid = "52998224725";
        for i in 0..CPF_LEN {
            let original = valid.as_bytes()[i] - b'0';
            let mutated: String = valid
                .chars()
                .enumerate()
                .map(|(j, c)| {
                    if j == i {
                        char::from(b'0' + (original + 1) % 10)
                    } else {
                        c
                    }
                })
                .collect();
            assert!(!is_valid(&mutated), "mutation at index {} accepted: {}", i, mutated);
        }
    }

    #[test]
    fn test_repeated_digits_rejected() {
        for d in 0..=9 {
            let repeated = d.to_string().repeat(CPF_LEN);
            assert!(!is_valid(&repeated), "{} should be rejected", repeated);
        }
    }

    #[test]
    fn test_wrong_length_rejected() {
        assert!(!is_valid("123"));
        assert!(!is_valid("5299822472"));
        assert!(!is_valid("123456789012"));
        assert!(!is_valid("529982247250"));
    }

    #[test]
    fn test_empty_and_absent_rejected() {
        assert!(!is_valid(""));
        assert!(!is_valid("   \t\n"));
        assert!(!is_valid("abc.def-gh"));
        assert!(!is_valid_opt(None));
        assert!(is_valid_opt(Some("52998224725")));
    }

    #[test]
    fn test_non_ascii_numerals_are_stripped() {
        assert!(!is_valid("٥٢٩٩٨٢٢٤٧٢٥"));
        // Fullwidth five is dropped, leaving ten digits.
        assert!(!is_valid("５2998224725"));
    }

    #[test]
    fn test_other_known_documents() {
        assert!(is_valid("111.444.777-35"));
        assert!(!is_valid("111.444.777-45"));
    }

    #[test]
    fn test_remainder_below_two_yields_zero() {
        assert_eq!(verification_digit(&[1, 0, 0, 0, 0, 0, 0, 0, 1], &FIRST_DIGIT_WEIGHTS), 0);
        assert_eq!(verification_digit(&[1, 0, 0, 0, 0, 0, 0, 0, 0, 0], &SECOND_DIGIT_WEIGHTS), 0);
        assert_eq!(verification_digit(&[0, 0, 0, 0, 0, 0, 0, 1, 0], &FIRST_DIGIT_WEIGHTS), 8);
    }

    #[test]
    fn test_normalize_keeps_order() {
        assert_eq!(normalize("a1-2.3 b"), vec![1, 2, 3]);
        assert!(normalize("no digits").is_empty());
    }

    #[test]
    fn test_is_idempotent() {
        for input in ["52998224725", "52998224726", "", "529.982.247-25"] {
            assert_eq!(is_valid(input), is_valid(input));
        }
    }
}
