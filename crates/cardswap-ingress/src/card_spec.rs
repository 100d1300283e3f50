//! Card-code specification grammar.
//!
//! ```text
//! spec   := code | prefix ":" suffix ("," suffix)*
//! ```
//!
//! A bare code is trimmed and uppercased. A prefixed spec expands to one
//! code per suffix: `"AB:01, 02"` -> `AB01`, `AB02`. Blank lines and empty
//! suffixes produce nothing.

use cardswap_types::{CardCode, Result, constants};

/// Expand one line into zero or more codes, in order.
pub fn parse_card_spec(line: &str) -> Result<Vec<CardCode>> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(Vec::new());
    }

    let Some((prefix, suffixes)) = line.split_once(constants::CARD_SPEC_PREFIX_SEPARATOR)
    else {
        return Ok(vec![CardCode::parse(line)?]);
    };

    let prefix = prefix.trim();
    suffixes
        .split(constants::CARD_SPEC_SUFFIX_SEPARATOR)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|suffix| CardCode::parse(&format!("{prefix}{suffix}")))
        .collect()
}

/// Expand every line of a list, concatenating the results.
pub fn parse_card_list(text: &str) -> Result<Vec<CardCode>> {
    let mut codes = Vec::new();
    for line in text.lines() {
        codes.extend(parse_card_spec(line)?);
    }
    Ok(codes)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strs(codes: &[CardCode]) -> Vec<&str> {
        codes.iter().map(CardCode::as_str).collect()
    }

    #[test]
    fn bare_code_is_normalized() {
        let codes = parse_card_spec("  abc ").unwrap();
        assert_eq!(strs(&codes), vec!["ABC"]);
    }

    #[test]
    fn case_normalization_is_idempotent() {
        assert_eq!(parse_card_spec("abc").unwrap(), parse_card_spec("ABC").unwrap());
    }

    #[test]
    fn prefix_expands_suffixes_in_order() {
        let codes = parse_card_spec("AB:01, 02").unwrap();
        assert_eq!(strs(&codes), vec!["AB01", "AB02"]);
    }

    #[test]
    fn prefix_expansion_uppercases_everything() {
        let codes = parse_card_spec("xy: a1,b2 ,  c3").unwrap();
        assert_eq!(strs(&codes), vec!["XYA1", "XYB2", "XYC3"]);
    }

    #[test]
    fn empty_suffixes_skipped() {
        let codes = parse_card_spec("AB:01,, 02,").unwrap();
        assert_eq!(strs(&codes), vec!["AB01", "AB02"]);
        assert!(parse_card_spec("AB:").unwrap().is_empty());
    }

    #[test]
    fn blank_line_yields_nothing() {
        assert!(parse_card_spec("").unwrap().is_empty());
        assert!(parse_card_spec("   \t").unwrap().is_empty());
    }

    #[test]
    fn list_concatenates_lines() {
        let codes = parse_card_list("x1\n\nAB:01, 02\r\ny2\n").unwrap();
        assert_eq!(strs(&codes), vec!["X1", "AB01", "AB02", "Y2"]);
    }
}
