//! Accent- and case-insensitive matching for the header search box.

use std::collections::HashMap;

use once_cell::sync::Lazy;

static ACCENT_FOLDS: Lazy<HashMap<char, char>> = Lazy::new(|| {
    [
        ("áàâãä", 'a'),
        ("éèêë", 'e'),
        ("íìîï", 'i'),
        ("óòôõö", 'o'),
        ("úùûü", 'u'),
        ("ç", 'c'),
        ("ñ", 'n'),
    ]
    .into_iter()
    .flat_map(|(accented, base)| accented.chars().map(move |c| (c, base)))
    .collect()
});

/// Lowercases `text` and strips Portuguese diacritics.
pub fn fold(text: &str) -> String {
    text.chars()
        .flat_map(char::to_lowercase)
        .map(|c| ACCENT_FOLDS.get(&c).copied().unwrap_or(c))
        .collect()
}

/// Returns the keys of every candidate whose title contains `query`.
///
/// Candidates keep their input order. A blank query matches nothing.
pub fn search<'a, K>(query: &str, candidates: impl IntoIterator<Item = (K, &'a str)>) -> Vec<K> {
    let needle = fold(query.trim());
    if needle.is_empty() {
        return Vec::new();
    }
    candidates
        .into_iter()
        .filter(|(_, title)| fold(title).contains(&needle))
        .map(|(key, _)| key)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const TITLES: [(&str, &str); 4] = [
        ("overview", "Visão Geral"),
        ("trading.cotton", "Algodão"),
        ("market.quotes", "Cotações"),
        ("costs.production", "Custos de Produção"),
    ];

    #[test]
    fn folding_removes_case_and_accents() {
        assert_eq!(fold("Cotações"), "cotacoes");
        assert_eq!(fold("VISÃO"), "visao");
    }

    #[test]
    fn query_matches_without_accents() {
        assert_eq!(search("algodao", TITLES), vec!["trading.cotton"]);
        assert_eq!(search("  COTA ", TITLES), vec!["market.quotes"]);
    }

    #[test]
    fn results_keep_candidate_order() {
        assert_eq!(search("o", TITLES).len(), 4);
        assert_eq!(search("ç", TITLES), vec!["market.quotes", "costs.production"]);
    }

    #[test]
    fn blank_query_matches_nothing() {
        assert!(search("   ", TITLES).is_empty());
    }
}
