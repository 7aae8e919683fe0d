/// Check digit for numeric reference codes: the sum of all decimal
/// digits in `raw`, modulo 10. Non-digit characters contribute nothing.
pub fn check_digit(raw: &str) -> u32 {
    raw.chars().filter_map(|c| c.to_digit(10)).sum::<u32>() % 10
}

pub fn append_check_digit(raw: &str) -> String {
    format!("{}{}", raw, check_digit(raw))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn computes_digit_sum_mod_10() {
        let raw = "2503120001";
        let expected = (2 + 5 + 0 + 3 + 1 + 2 + 0 + 0 + 0 + 1) % 10;
        assert_eq!(check_digit(raw), expected);
        assert_eq!(append_check_digit(raw), format!("{}{}", raw, expected));
    }

    #[test]
    fn zero_for_empty_input() {
        assert_eq!(check_digit(""), 0);
    }

    #[test]
    fn check_digit_is_stable_under_reordering() {
        assert_eq!(check_digit("12345"), check_digit("54321"));
    }
}
