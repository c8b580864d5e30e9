/// Returned when no leading title token looks like part of a name
pub const UNKNOWN_COMPANY: &str = "Unknown";

const MAX_NAME_TOKENS: usize = 5;

/// Guess a company name from the leading capitalized words of a title.
///
/// Takes tokens from the first five while each starts with an uppercase
/// letter and is longer than two characters; the first token failing that
/// ends the name.
pub fn extract_company(title: &str) -> String {
    let words: Vec<&str> = title
        .split_whitespace()
        .take(MAX_NAME_TOKENS)
        .take_while(|word| {
            let capitalized = word.chars().next().is_some_and(char::is_uppercase);
            capitalized && word.chars().count() > 2
        })
        .collect();

    if words.is_empty() {
        UNKNOWN_COMPANY.to_string()
    } else {
        words.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stops_at_lowercase_token() {
        assert_eq!(extract_company("Moderna Announces New vaccine trial"), "Moderna Announces New");
    }

    #[test]
    fn test_every_leading_capitalized_token_counts() {
        assert_eq!(extract_company("Moderna Announces New Vaccine"), "Moderna Announces New Vaccine");
    }

    #[test]
    fn test_short_first_token_is_unknown() {
        assert_eq!(extract_company("A New Drug"), UNKNOWN_COMPANY);
    }

    #[test]
    fn test_short_token_stops_accumulation() {
        // "To" has length 2 and ends the name even though later tokens qualify
        assert_eq!(extract_company("Novartis To Acquire Chinook"), "Novartis");
    }

    #[test]
    fn test_at_most_five_tokens() {
        assert_eq!(
            extract_company("Alpha Beta Gamma Delta Epsilon Zeta"),
            "Alpha Beta Gamma Delta Epsilon"
        );
    }

    #[test]
    fn test_empty_and_lowercase_titles() {
        assert_eq!(extract_company(""), UNKNOWN_COMPANY);
        assert_eq!(extract_company("   "), UNKNOWN_COMPANY);
        assert_eq!(extract_company("biotech stocks rally"), UNKNOWN_COMPANY);
    }

    #[test]
    fn test_extra_whitespace_collapsed() {
        assert_eq!(extract_company("  Vertex   Pharmaceuticals  wins"), "Vertex Pharmaceuticals");
    }

    #[test]
    fn test_length_counts_characters() {
        // Three characters, four bytes
        assert_eq!(extract_company("Ölz Biologics raises"), "Ölz Biologics");
    }
}
