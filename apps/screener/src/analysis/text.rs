use std::borrow::Cow;
use std::collections::HashSet;

/// Upper-cases the first letter of every alphanumeric run: `node.js` → `Node.Js`.
pub fn title_case(term: &str) -> String {
    let mut out = String::with_capacity(term.len());
    let mut at_run_start = true;
    for c in term.chars() {
        if c.is_alphanumeric() {
            if at_run_start {
                out.extend(c.to_uppercase());
            } else {
                out.push(c);
            }
            at_run_start = false;
        } else {
            out.push(c);
            at_run_start = true;
        }
    }
    out
}

/// Loose skill/keyword match: either side contains the other, case-insensitively.
pub fn fuzzy_match(skill: &str, keyword: &str) -> bool {
    let skill = skill.to_lowercase();
    let keyword = keyword.to_lowercase();
    skill.contains(&keyword) || keyword.contains(&skill)
}

/// Removes case-insensitive duplicates; the first spelling wins.
pub fn dedup_case_insensitive<I>(items: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.to_lowercase()))
        .collect()
}

pub fn contains_case_insensitive(items: &[String], candidate: &str) -> bool {
    let candidate = candidate.to_lowercase();
    items.iter().any(|item| item.to_lowercase() == candidate)
}

pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

pub fn normalize_line_endings(text: &str) -> Cow<'_, str> {
    if text.contains('\r') {
        Cow::Owned(text.replace("\r\n", "\n"))
    } else {
        Cow::Borrowed(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_case_words_and_dotted_names() {
        assert_eq!(title_case("machine learning"), "Machine Learning");
        assert_eq!(title_case("node.js"), "Node.Js");
        assert_eq!(title_case("c++"), "C++");
        assert_eq!(title_case("typescript"), "Typescript");
    }

    #[test]
    fn test_fuzzy_match_is_bidirectional() {
        assert!(fuzzy_match("React.js", "react"));
        assert!(fuzzy_match("React", "React.js"));
        assert!(!fuzzy_match("Python", "AWS"));
    }

    #[test]
    fn test_dedup_keeps_first_spelling() {
        let deduped = dedup_case_insensitive(vec![
            "Python".to_string(),
            "python".to_string(),
            "SQL".to_string(),
        ]);
        assert_eq!(deduped, vec!["Python", "SQL"]);
    }

    #[test]
    fn test_word_count_ignores_surrounding_whitespace() {
        assert_eq!(word_count(""), 0);
        assert_eq!(word_count("  one two\n\tthree  "), 3);
    }

    #[test]
    fn test_normalize_line_endings() {
        assert_eq!(normalize_line_endings("a\r\nb"), "a\nb");
        assert!(matches!(normalize_line_endings("a\nb"), Cow::Borrowed(_)));
    }
}
