//! Property tests for the filter engine and renderer

use character_catalog::{
    filter_by_category, filter_by_text, CardContainer, Record, OTHER_WORLD_KEYWORDS,
};
use proptest::prelude::*;

/// Field text drawn from a small alphabet so matches actually happen,
/// with keyword fragments and accented letters mixed in
fn field_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            Just("a".to_string()),
            Just("O".to_string()),
            Just(" ".to_string()),
            Just("ã".to_string()),
            Just("Outra".to_string()),
            Just("beldam".to_string()),
            Just("Mão".to_string()),
            Just("gato".to_string()),
        ],
        0..6,
    )
    .prop_map(|parts| parts.concat())
}

fn record_strategy() -> impl Strategy<Value = Record> {
    (field_strategy(), field_strategy(), field_strategy(), 0i32..100).prop_map(
        |(name, title, description, age)| Record::new(name, title, description, age, "link"),
    )
}

fn catalog_strategy() -> impl Strategy<Value = Vec<Record>> {
    prop::collection::vec(record_strategy(), 0..12)
}

fn contains_term(record: &Record, term: &str) -> bool {
    record.name.to_lowercase().contains(term)
        || record.title.to_lowercase().contains(term)
        || record.description.to_lowercase().contains(term)
}

proptest! {
    /// Whitespace-only terms never show anything
    #[test]
    fn blank_term_is_empty(catalog in catalog_strategy(), spaces in "[ \t\n]{0,4}") {
        prop_assert!(filter_by_text(&catalog, &spaces).is_empty());
    }

    /// Returned records contain the term; skipped ones do not
    #[test]
    fn text_filter_is_sound_and_complete(catalog in catalog_strategy(), term in field_strategy()) {
        let normalized = term.to_lowercase().trim().to_string();
        prop_assume!(!normalized.is_empty());

        let found = filter_by_text(&catalog, &term);

        for record in &catalog {
            let returned = found.iter().any(|r| std::ptr::eq(*r, record));
            prop_assert_eq!(returned, contains_term(record, &normalized));
        }
    }

    /// Both buckets together are the catalog, each record exactly once,
    /// and each bucket keeps catalog order
    #[test]
    fn category_buckets_partition_catalog(catalog in catalog_strategy()) {
        let other = filter_by_category(&catalog, OTHER_WORLD_KEYWORDS, true);
        let real = filter_by_category(&catalog, OTHER_WORLD_KEYWORDS, false);

        prop_assert_eq!(other.len() + real.len(), catalog.len());

        for record in &catalog {
            let in_other = other.iter().any(|r| std::ptr::eq(*r, record));
            let in_real = real.iter().any(|r| std::ptr::eq(*r, record));
            prop_assert!(in_other != in_real);
        }

        let position = |r: &Record| catalog.iter().position(|c| std::ptr::eq(c, r)).unwrap();
        for bucket in [&other, &real] {
            let positions: Vec<usize> = bucket.iter().map(|r| position(*r)).collect();
            prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
        }
    }

    /// Rendering the same input twice looks like rendering it once
    #[test]
    fn render_is_idempotent(catalog in catalog_strategy()) {
        let input: Vec<&Record> = catalog.iter().collect();

        let mut once = CardContainer::new();
        once.render(&input);

        let mut twice = CardContainer::new();
        twice.render(&input);
        twice.render(&input);

        prop_assert_eq!(once.display(), twice.display());
        prop_assert_eq!(twice.display().card_count(), catalog.len());
    }
}
