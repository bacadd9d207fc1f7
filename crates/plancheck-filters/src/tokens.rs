//! Comma-delimited token lists, as carried in search query parameters.
//!
//! `encode` does not validate its input. A token that contains the delimiter
//! or has surrounding whitespace will not survive `decode(encode(..))`
//! unchanged; callers that need the round trip must pass clean tokens.

pub const DELIMITER: char = ',';

/// Joins tokens with a single delimiter and no padding.
pub fn encode<I, S>(tokens: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out = String::new();
    for (i, t) in tokens.into_iter().enumerate() {
        if i > 0 {
            out.push(DELIMITER);
        }
        out.push_str(t.as_ref());
    }
    out
}

/// Splits on the delimiter, trims each piece and drops the empty ones.
pub fn decode(text: &str) -> Vec<String> {
    text.split(DELIMITER)
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_joins_without_padding() {
        assert_eq!(encode(&["x", "y"]), "x,y");
        assert_eq!(encode(&["solo"]), "solo");
    }

    #[test]
    fn test_encode_empty_is_empty_string() {
        let empty: [&str; 0] = [];
        assert_eq!(encode(&empty), "");
    }

    #[test]
    fn test_decode_trims_each_token() {
        assert_eq!(decode("a,b, c"), vec!["a", "b", "c"]);
        assert_eq!(decode("  rust ,  sql\t"), vec!["rust", "sql"]);
    }

    #[test]
    fn test_decode_drops_blank_pieces() {
        assert_eq!(decode("a,,b, ,"), vec!["a", "b"]);
        assert_eq!(decode(" , "), Vec::<String>::new());
    }

    #[test]
    fn test_decode_empty_string_is_empty() {
        assert!(decode("").is_empty());
    }

    #[test]
    fn test_round_trip_for_clean_tokens() {
        let cases: Vec<Vec<String>> = vec![
            vec![],
            vec!["one".into()],
            vec!["a".into(), "b".into(), "c".into()],
            vec!["deep dive".into(), "postgres".into(), "Ünïcode".into()],
        ];
        for tokens in cases {
            assert_eq!(decode(&encode(&tokens)), tokens);
        }
    }

    #[test]
    fn test_round_trip_not_guaranteed_for_dirty_tokens() {
        // Embedded delimiter splits, surrounding whitespace is lost.
        let tokens = ["a,b", " c "];
        assert_eq!(decode(&encode(&tokens)), vec!["a", "b", "c"]);
    }
}
