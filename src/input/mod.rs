//! Free-text parsing of the partition and request lists
//!
//! Both lists are re-parsed from the raw input text on every frame: the
//! same text always yields the same sequence, and malformed input
//! degrades to a shorter list instead of an error.

/// Parse a comma and/or whitespace delimited list of decimal numbers.
///
/// Tokens are consumed left to right; extraction stops at the first token
/// that does not parse as a `u32` (including overflow), so a malformed
/// tail truncates the list rather than failing the whole parse. Empty
/// tokens between delimiters are skipped, which makes `"1, 2"`, `"1,2"`,
/// and `"1 2"` equivalent.
pub fn parse_number_list(text: &str) -> Vec<u32> {
    text.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map_while(|token| token.parse().ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commas_and_spaces_mix() {
        assert_eq!(
            parse_number_list("300, 600,350  200,,750 ,125"),
            vec![300, 600, 350, 200, 750, 125]
        );
    }

    #[test]
    fn test_parse_is_idempotent() {
        let text = "115, 500, 358, 200, 375";
        assert_eq!(parse_number_list(text), parse_number_list(text));
        assert_eq!(parse_number_list(text), vec![115, 500, 358, 200, 375]);
    }

    #[test]
    fn test_parse_stops_at_first_malformed_token() {
        assert_eq!(parse_number_list("12, x, 5"), vec![12]);
        // 20 digits overflows u32 and counts as malformed.
        assert_eq!(parse_number_list("7, 99999999999999999999, 3"), vec![7]);
    }

    #[test]
    fn test_parse_empty_and_delimiter_only_input() {
        assert_eq!(parse_number_list(""), Vec::<u32>::new());
        assert_eq!(parse_number_list("  , ,  "), Vec::<u32>::new());
    }

    #[test]
    fn test_parse_accepts_zero() {
        assert_eq!(parse_number_list("0, 5"), vec![0, 5]);
    }
}
