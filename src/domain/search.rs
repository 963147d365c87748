//! Case-insensitive substring search over catalog titles.
//!
//! Matching folds both sides character by character (upper case, then lower case)
//! so that comparisons hold across scripts: `ß` matches `SS`, a final sigma matches
//! a medial one, and Cyrillic or Greek titles fold the same way Latin ones do.
//! Folding may change the length of a string, so match positions are tracked
//! against the original characters for highlighting.

use crate::domain::CatalogItem;

/// Folds a single character into its caseless form.
fn fold_char(c: char) -> impl Iterator<Item = char> {
    c.to_uppercase().flat_map(char::to_lowercase)
}

/// Folds a string into its caseless form.
///
/// ```
/// use fruitstand::domain::search::fold_case;
///
/// assert_eq!(fold_case("Straße"), fold_case("STRASSE"));
/// assert_eq!(fold_case("ΟΔΟΣ"), fold_case("οδος"));
/// ```
#[must_use]
pub fn fold_case(text: &str) -> String {
    text.chars().flat_map(fold_char).collect()
}

/// Filters `items` down to those whose title contains `query`, ignoring case.
///
/// The source slice is never modified. An empty query returns every item in its
/// original order; a query that matches nothing returns an empty vector.
///
/// ```
/// use fruitstand::domain::{build_catalog, filter};
///
/// let items = build_catalog(&["Apple", "Pineapple", "Kiwi"], "");
/// let titles: Vec<_> = filter(&items, "APPLE").into_iter().map(|i| i.title).collect();
/// assert_eq!(titles, vec!["Apple", "Pineapple"]);
/// ```
#[must_use]
pub fn filter(items: &[CatalogItem], query: &str) -> Vec<CatalogItem> {
    if query.is_empty() {
        return items.to_vec();
    }

    let needle = fold_case(query);
    items
        .iter()
        .filter(|item| fold_case(&item.title).contains(&needle))
        .cloned()
        .collect()
}

/// Locates the first case-insensitive occurrence of `query` in `text`.
///
/// Returns a `(start, end)` range of character indices into `text` (exclusive end)
/// covering every original character that contributed to the match. Returns
/// `None` for an empty query or when there is no match.
///
/// ```
/// use fruitstand::domain::search::match_range;
///
/// assert_eq!(match_range("Pineapple", "APPLE"), Some((4, 9)));
/// assert_eq!(match_range("Kiwi", "melon"), None);
/// ```
#[must_use]
pub fn match_range(text: &str, query: &str) -> Option<(usize, usize)> {
    if query.is_empty() {
        return None;
    }

    // folded[i] came from the original character at origin[i]
    let mut folded: Vec<char> = Vec::new();
    let mut origin: Vec<usize> = Vec::new();
    for (idx, c) in text.chars().enumerate() {
        for f in fold_char(c) {
            folded.push(f);
            origin.push(idx);
        }
    }

    let needle: Vec<char> = query.chars().flat_map(fold_char).collect();
    if needle.len() > folded.len() {
        return None;
    }

    let start = folded
        .windows(needle.len())
        .position(|window| window == needle.as_slice())?;
    let end = start + needle.len() - 1;

    Some((origin[start], origin[end] + 1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::build_catalog;
    use pretty_assertions::assert_eq;

    fn titles(items: &[CatalogItem]) -> Vec<String> {
        items.iter().map(|i| i.title.clone()).collect()
    }

    fn catalog() -> Vec<CatalogItem> {
        build_catalog(
            &["Apple", "Orange", "Kiwi", "Strawberry", "Berry", "Pineapple"],
            "",
        )
    }

    #[test]
    fn empty_query_is_identity() {
        let items = catalog();
        assert_eq!(filter(&items, ""), items);
    }

    #[test]
    fn matches_keep_source_order() {
        let items = catalog();
        assert_eq!(
            titles(&filter(&items, "berry")),
            vec!["Strawberry".to_string(), "Berry".to_string()]
        );
    }

    #[test]
    fn exact_title_matches() {
        let items = catalog();
        let result = filter(&items, "Kiwi");
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, items[2].id);
    }

    #[test]
    fn no_match_is_empty_not_error() {
        assert!(filter(&catalog(), "watermelon").is_empty());
        assert!(filter(&catalog(), "!!").is_empty());
    }

    #[test]
    fn case_of_query_does_not_matter() {
        let items = build_catalog(&["Apple"], "");
        assert_eq!(filter(&items, "apple"), filter(&items, "APPLE"));
        assert_eq!(filter(&items, "aPpLe").len(), 1);
    }

    #[test]
    fn source_list_is_untouched() {
        let items = catalog();
        let before = items.clone();
        let _ = filter(&items, "an");
        assert_eq!(items, before);
    }

    #[test]
    fn folding_works_across_scripts() {
        let items = build_catalog(&["Яблоко", "Πορτοκάλι", "Straße", "ΚΑΡΠΟΥΖΙ"], "");
        assert_eq!(titles(&filter(&items, "ЯБЛ")), vec!["Яблоко".to_string()]);
        assert_eq!(titles(&filter(&items, "πορτο")), vec!["Πορτοκάλι".to_string()]);
        assert_eq!(titles(&filter(&items, "STRASSE")), vec!["Straße".to_string()]);
        assert_eq!(titles(&filter(&items, "καρπουζι")), vec!["ΚΑΡΠΟΥΖΙ".to_string()]);
    }

    #[test]
    fn final_sigma_matches_medial_sigma() {
        let items = build_catalog(&["ΣΑΣ", "σας"], "");
        assert_eq!(filter(&items, "ς").len(), 2);
        assert_eq!(filter(&items, "Σ").len(), 2);
    }

    #[test]
    fn whitespace_query_is_matched_literally() {
        let items = build_catalog(&["Dragon Fruit", "Kiwi"], "");
        assert_eq!(titles(&filter(&items, "n f")), vec!["Dragon Fruit".to_string()]);
        assert!(filter(&items, "  ").is_empty());
    }

    #[test]
    fn match_range_maps_back_to_original_characters() {
        assert_eq!(match_range("Strawberry", "BERRY"), Some((5, 10)));
        assert_eq!(match_range("Straße", "ss"), Some((4, 5)));
        assert_eq!(match_range("Straße", "asse"), Some((3, 6)));
        assert_eq!(match_range("Kiwi", ""), None);
        assert_eq!(match_range("Kiwi", "kiwis"), None);
    }
}
