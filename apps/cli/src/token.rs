//! # Tokenizer
//!
//! Splits a raw input line into command arguments.
//!
//! ## Rules
//! - A double-quoted segment is one argument, quotes stripped (this is
//!   how multi-word product names are passed).
//! - Otherwise a token is a maximal run of ASCII alphanumerics with
//!   internal hyphens allowed, which keeps UUID-style SKUs intact.
//! - Everything else is a separator.
//!
//! An unterminated quote is treated as a plain separator and the rest of
//! the line tokenizes as words.

/// Tokenizes one input line.
pub fn tokenize(line: &str) -> Vec<String> {
    let chars: Vec<char> = line.chars().collect();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];

        if c == '"' {
            if let Some(len) = chars[i + 1..].iter().position(|&c| c == '"') {
                if len > 0 {
                    tokens.push(chars[i + 1..i + 1 + len].iter().collect());
                }
                i += len + 2;
                continue;
            }
            i += 1;
            continue;
        }

        if c.is_ascii_alphanumeric() {
            let start = i;
            i += 1;
            loop {
                if i < chars.len() && chars[i].is_ascii_alphanumeric() {
                    i += 1;
                    continue;
                }
                // Hyphens only join a token when flanked by alphanumerics
                if i + 1 < chars.len() && chars[i] == '-' && chars[i + 1].is_ascii_alphanumeric() {
                    i += 2;
                    continue;
                }
                break;
            }
            tokens.push(chars[start..i].iter().collect());
            continue;
        }

        i += 1;
    }

    tokens
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn toks(line: &str) -> Vec<String> {
        tokenize(line)
    }

    #[test]
    fn test_plain_words() {
        assert_eq!(toks("LIST PRODUCTS"), vec!["LIST", "PRODUCTS"]);
        assert_eq!(toks("  STOCK  BED-1 970 1000  "), vec!["STOCK", "BED-1", "970", "1000"]);
    }

    #[test]
    fn test_quoted_segment_is_one_argument() {
        assert_eq!(
            toks(r#"ADD PRODUCT "Mid Century Modern Bed" BED-4821"#),
            vec!["ADD", "PRODUCT", "Mid Century Modern Bed", "BED-4821"]
        );
    }

    #[test]
    fn test_uuid_style_sku_stays_intact() {
        assert_eq!(
            toks("STOCK 5ce956fa-a71e-4bfb-b6ae-5eeaa5eb0a70 970 10"),
            vec!["STOCK", "5ce956fa-a71e-4bfb-b6ae-5eeaa5eb0a70", "970", "10"]
        );
    }

    #[test]
    fn test_leading_or_trailing_hyphen_is_a_separator() {
        assert_eq!(toks("-5"), vec!["5"]);
        assert_eq!(toks("abc-"), vec!["abc"]);
    }

    #[test]
    fn test_empty_and_noise_lines() {
        assert!(toks("").is_empty());
        assert!(toks("   \t ").is_empty());
        assert!(toks("!?!").is_empty());
        assert!(toks("\"\"").is_empty());
    }

    #[test]
    fn test_unterminated_quote_falls_back_to_words() {
        assert_eq!(toks(r#""abc def"#), vec!["abc", "def"]);
    }
}
