//! Ingredient and dish name handling
//!
//! Catalog cells carry display names such as `"Tomato [large]"`. Everything
//! that compares names goes through [`normalize`], which drops the bracketed
//! annotation, trims and lowercases.

/// Strip a trailing bracketed annotation and surrounding whitespace.
///
/// Case is preserved, so this is the form shown to the user and the form
/// stored in the quantities table.
pub fn clean_name(raw: &str) -> &str {
    match raw.find('[') {
        Some(idx) => raw[..idx].trim(),
        None => raw.trim(),
    }
}

/// Comparison key for ingredient and dish names.
///
/// `normalize(normalize(x)) == normalize(x)` for every input.
pub fn normalize(raw: &str) -> String {
    clean_name(raw).to_lowercase()
}

/// Normalize a cell, mapping blanks to `None`
pub fn normalize_cell(raw: &str) -> Option<String> {
    let name = normalize(raw);
    if name.is_empty() {
        None
    } else {
        Some(name)
    }
}

/// Title-case every word: first letter upper, the rest lower.
///
/// A word starts after any non-alphabetic character, so `"pecorino-romano"`
/// becomes `"Pecorino-Romano"`.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut at_word_start = true;
    for ch in s.chars() {
        if ch.is_alphabetic() {
            if at_word_start {
                out.extend(ch.to_uppercase());
            } else {
                out.extend(ch.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(ch);
            at_word_start = true;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_name_strips_annotation() {
        assert_eq!(clean_name("Tomato [large]"), "Tomato");
        assert_eq!(clean_name("  Egg  "), "Egg");
        assert_eq!(clean_name("Guanciale"), "Guanciale");
        assert_eq!(clean_name("Egg[large]"), "Egg");
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("Tomato [large]"), "tomato");
        assert_eq!(normalize("PARMIGIANO Reggiano "), "parmigiano reggiano");
        assert_eq!(normalize("[only annotation]"), "");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        for raw in [
            "Tomato [large]",
            "  Olive Oil [extra virgin] ",
            "egg",
            "A [b [c]]",
            "",
            "   ",
            "Crème Fraîche",
        ] {
            let once = normalize(raw);
            assert_eq!(normalize(&once), once, "input: {:?}", raw);
        }
    }

    #[test]
    fn test_normalize_is_case_insensitive() {
        assert_eq!(normalize("EGG"), normalize("egg"));
        assert_eq!(normalize("Pecorino [grated]"), normalize("pecorino"));
    }

    #[test]
    fn test_normalize_cell_drops_blanks() {
        assert_eq!(normalize_cell(""), None);
        assert_eq!(normalize_cell("  "), None);
        assert_eq!(normalize_cell("[x]"), None);
        assert_eq!(normalize_cell("Egg"), Some("egg".to_string()));
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("penne rigate"), "Penne Rigate");
        assert_eq!(title_case("FUSILLI"), "Fusilli");
        assert_eq!(title_case("pecorino-romano"), "Pecorino-Romano");
        assert_eq!(title_case("egg, pasta, cheese"), "Egg, Pasta, Cheese");
        assert_eq!(title_case(""), "");
    }
}
