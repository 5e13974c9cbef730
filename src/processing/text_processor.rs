//! Text normalization and tokenization for term weighting

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

/// Runs of two or more word characters; everything else separates terms
static TOKEN_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\w\w+").expect("Invalid token regex"));

static STOP_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "a", "about", "above", "across", "after", "afterwards", "again", "against", "all",
        "almost", "alone", "along", "already", "also", "although", "always", "am", "among",
        "amongst", "amoungst", "amount", "an", "and", "another", "any", "anyhow", "anyone",
        "anything", "anyway", "anywhere", "are", "around", "as", "at", "back", "be", "became",
        "because", "become", "becomes", "becoming", "been", "before", "beforehand", "behind",
        "being", "below", "beside", "besides", "between", "beyond", "bill", "both", "bottom",
        "but", "by", "call", "can", "cannot", "cant", "co", "con", "could", "couldnt", "cry",
        "de", "describe", "detail", "do", "done", "down", "due", "during", "each", "eg",
        "eight", "either", "eleven", "else", "elsewhere", "empty", "enough", "etc", "even",
        "ever", "every", "everyone", "everything", "everywhere", "except", "few", "fifteen",
        "fifty", "fill", "find", "fire", "first", "five", "for", "former", "formerly", "forty",
        "found", "four", "from", "front", "full", "further", "get", "give", "go", "had", "has",
        "hasnt", "have", "he", "hence", "her", "here", "hereafter", "hereby", "herein",
        "hereupon", "hers", "herself", "him", "himself", "his", "how", "however", "hundred",
        "i", "ie", "if", "in", "inc", "indeed", "interest", "into", "is", "it", "its", "itself",
        "keep", "last", "latter", "latterly", "least", "less", "ltd", "made", "many", "may",
        "me", "meanwhile", "might", "mill", "mine", "more", "moreover", "most", "mostly",
        "move", "much", "must", "my", "myself", "name", "namely", "neither", "never",
        "nevertheless", "next", "nine", "no", "nobody", "none", "noone", "nor", "not",
        "nothing", "now", "nowhere", "of", "off", "often", "on", "once", "one", "only", "onto",
        "or", "other", "others", "otherwise", "our", "ours", "ourselves", "out", "over", "own",
        "part", "per", "perhaps", "please", "put", "rather", "re", "same", "see", "seem",
        "seemed", "seeming", "seems", "serious", "several", "she", "should", "show", "side",
        "since", "sincere", "six", "sixty", "so", "some", "somehow", "someone", "something",
        "sometime", "sometimes", "somewhere", "still", "such", "system", "take", "ten", "than",
        "that", "the", "their", "them", "themselves", "then", "thence", "there", "thereafter",
        "thereby", "therefore", "therein", "thereupon", "these", "they", "thick", "thin",
        "third", "this", "those", "though", "three", "through", "throughout", "thru", "thus",
        "to", "together", "too", "top", "toward", "towards", "twelve", "twenty", "two", "un",
        "under", "until", "up", "upon", "us", "very", "via", "was", "we", "well", "were",
        "what", "whatever", "when", "whence", "whenever", "where", "whereafter", "whereas",
        "whereby", "wherein", "whereupon", "wherever", "whether", "which", "while", "whither",
        "who", "whoever", "whole", "whom", "whose", "why", "will", "with", "within", "without",
        "would", "yet", "you", "your", "yours", "yourself", "yourselves",
    ]
    .into_iter()
    .collect()
});

pub fn is_stop_word(token: &str) -> bool {
    STOP_WORDS.contains(token)
}

/// Characters that belong inside a token
pub fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Tokenize text into lower-cased terms, dropping stop words and single characters
pub fn tokenize(text: &str) -> Vec<String> {
    let normalized = normalize_unicode(&text.to_lowercase());

    TOKEN_REGEX
        .find_iter(&normalized)
        .map(|m| m.as_str())
        .filter(|token| !is_stop_word(token))
        .map(str::to_string)
        .collect()
}

/// Normalize typographic punctuation to its ASCII form
fn normalize_unicode(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '\u{2018}' | '\u{2019}' => '\'',
            '\u{201C}' | '\u{201D}' => '"',
            '\u{2013}' | '\u{2014}' => '-',
            '\u{2026}' => '.',
            _ => c,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenization() {
        let tokens = tokenize("Rust programming language is awesome!");

        assert_eq!(tokens, vec!["rust", "programming", "language", "awesome"]);
    }

    #[test]
    fn test_splits_on_inner_punctuation() {
        let tokens = tokenize("Built services in Node.js, can't stop");

        assert!(tokens.contains(&"node".to_string()));
        assert!(tokens.contains(&"js".to_string()));
        assert!(tokens.contains(&"services".to_string()));
        // "can" is a stop word and "t" is too short
        assert!(!tokens.iter().any(|t| t == "can" || t == "t"));
    }

    #[test]
    fn test_stop_words_and_short_tokens() {
        assert!(tokenize("I am the one who is").is_empty());
        assert!(tokenize("a b c 1 2").is_empty());
        assert!(tokenize("   \n\t ").is_empty());
        assert!(STOP_WORDS.len() > 300);
    }

    #[test]
    fn test_non_latin_words_stay_whole() {
        let tokens = tokenize("数据科学 工程师 Rust");
        assert_eq!(tokens, vec!["数据科学", "工程师", "rust"]);

        let tokens = tokenize("Développeur café_bar straße");
        assert_eq!(tokens, vec!["développeur", "café_bar", "straße"]);
    }

    #[test]
    fn test_smart_quotes() {
        let tokens = tokenize("Teams\u{2019} \u{201C}cloud\u{201D} work");
        assert!(tokens.contains(&"teams".to_string()));
        assert!(tokens.contains(&"cloud".to_string()));
    }
}
