//! Locale-aware collation for location names.
//!
//! The route dataset carries accented Portuguese city names ("São Paulo",
//! "Brasília") which must sort in natural alphabetical order for display.
//! Default lexical ordering on UTF-8 bytes puts every accented name after "z",
//! so comparisons use a folded key: lowercase with Latin diacritics mapped to
//! their base letters. The fold table covers Latin-1 Supplement and the
//! Latin Extended-A characters that occur in practice; anything else passes
//! through unchanged.

use std::cmp::Ordering;

/// Map a single character to its lowercase, diacritic-free base form.
fn fold_char(c: char) -> char {
    match c.to_lowercase().next().unwrap_or(c) {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' | 'ā' | 'ă' | 'ą' => 'a',
        'ç' | 'ć' | 'č' => 'c',
        'è' | 'é' | 'ê' | 'ë' | 'ē' | 'ĕ' | 'ė' | 'ę' | 'ě' => 'e',
        'ì' | 'í' | 'î' | 'ï' | 'ī' | 'į' => 'i',
        'ñ' | 'ń' | 'ň' => 'n',
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' | 'ō' | 'ő' => 'o',
        'ù' | 'ú' | 'û' | 'ü' | 'ū' | 'ů' | 'ű' => 'u',
        'ý' | 'ÿ' => 'y',
        'š' | 'ś' => 's',
        'ž' | 'ź' | 'ż' => 'z',
        lower => lower,
    }
}

/// Build the collation key for a string: lowercased with diacritics folded.
pub fn collation_key(value: &str) -> String {
    value.chars().map(fold_char).collect()
}

/// Compare two strings with diacritic- and case-insensitive collation.
///
/// Falls back to the raw strings as a secondary key so that names differing
/// only by accents ("Para" vs "Pará") still order deterministically.
pub fn collate(a: &str, b: &str) -> Ordering {
    collation_key(a)
        .cmp(&collation_key(b))
        .then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folds_portuguese_diacritics() {
        assert_eq!(collation_key("São Paulo, SP"), "sao paulo, sp");
        assert_eq!(collation_key("Brasília, DF"), "brasilia, df");
        assert_eq!(collation_key("Ônibus"), "onibus");
    }

    #[test]
    fn accented_names_sort_naturally() {
        let mut cities = vec!["Vitória, ES", "Aracaju, SE", "São Luís, MA", "Salvador, BA"];
        cities.sort_by(|a, b| collate(a, b));
        assert_eq!(
            cities,
            vec!["Aracaju, SE", "Salvador, BA", "São Luís, MA", "Vitória, ES"]
        );
    }

    #[test]
    fn collation_is_case_insensitive() {
        assert_eq!(collation_key("BELO"), collation_key("belo"));
        // Secondary key keeps equal-folding names deterministically ordered.
        assert_eq!(collate("BELO HORIZONTE", "belo horizonte"), Ordering::Less);
    }
}
