//! Property tests for the project filter/sort engine.

mod common;

use common::project;
use folio_core::search::filter::collate;
use folio_core::{filter_projects, Catalog, FacetFilter, Project, ProjectQuery, SortKey};
use proptest::prelude::*;
use std::cmp::Ordering;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

const CATEGORIES: &[&str] = &["ml", "data", "analytics", "strategy"];
const DOMAINS: &[&str] = &[
    "Media",
    "finance",
    "Health",
    "retail",
    "\u{c9}nergie",
    "\u{f6}kologie",
];
const WORDS: &[&str] = &[
    "Spark",
    "python",
    "Churn",
    "dash",
    "SQL",
    "vision",
    "\u{c9}clair",
    "eclair",
    "\u{e9}clair",
    "\u{dc}ber",
    "cafe\u{301}",
    "Caf\u{e9}",
];

fn project_strategy() -> impl Strategy<Value = (usize, usize, i32, String, Vec<String>)> {
    (
        0..CATEGORIES.len(),
        0..DOMAINS.len(),
        2000..=2030i32,
        prop::sample::select(WORDS).prop_map(str::to_string),
        prop::collection::vec(prop::sample::select(WORDS).prop_map(str::to_string), 0..3),
    )
}

fn catalog_strategy() -> impl Strategy<Value = Catalog<Project>> {
    prop::collection::vec(project_strategy(), 0..16).prop_map(|rows| {
        let projects = rows
            .into_iter()
            .enumerate()
            .map(|(index, (category, domain, year, title_word, technologies))| {
                let mut item = project(
                    &format!("p{index}"),
                    CATEGORIES[category],
                    DOMAINS[domain],
                    year,
                );
                item.title = format!("{title_word} {index}");
                item.technologies = technologies;
                item
            })
            .collect();
        Catalog::try_new(projects).unwrap()
    })
}

/// Accent- and case-insensitive key, the first level of title/domain order.
fn base_key(value: &str) -> String {
    value
        .nfd()
        .filter(|ch| !is_combining_mark(*ch))
        .flat_map(char::to_lowercase)
        .collect()
}

fn sort_strategy() -> impl Strategy<Value = SortKey> {
    prop::sample::select(SortKey::ALL.to_vec())
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: a concrete category keeps only and exactly its members.
    #[test]
    fn property_category_filter_is_exact(
        catalog in catalog_strategy(),
        category in prop::sample::select(CATEGORIES),
        sort in sort_strategy(),
    ) {
        let query = ProjectQuery {
            category: FacetFilter::from_selection(category),
            sort,
            ..ProjectQuery::default()
        };
        let result = filter_projects(&catalog, &query);

        prop_assert!(result.iter().all(|p| p.category == category));
        let expected = catalog.iter().filter(|p| p.category == category).count();
        prop_assert_eq!(result.len(), expected);
    }

    /// PROPERTY: a non-empty text query never grows the result.
    #[test]
    fn property_text_query_only_narrows(
        catalog in catalog_strategy(),
        needle in "[a-zA-Z]{1,4}",
        sort in sort_strategy(),
    ) {
        let unfiltered = filter_projects(&catalog, &ProjectQuery { sort, ..ProjectQuery::default() });
        let narrowed = filter_projects(
            &catalog,
            &ProjectQuery { text: needle, sort, ..ProjectQuery::default() },
        );
        prop_assert!(narrowed.len() <= unfiltered.len());
    }

    /// PROPERTY: results are ordered by the selected key.
    #[test]
    fn property_results_are_ordered(
        catalog in catalog_strategy(),
        sort in sort_strategy(),
    ) {
        let result = filter_projects(&catalog, &ProjectQuery { sort, ..ProjectQuery::default() });
        for pair in result.windows(2) {
            match sort {
                SortKey::Year => prop_assert!(pair[0].year >= pair[1].year),
                SortKey::Title => {
                    prop_assert!(collate(&pair[0].title, &pair[1].title) != Ordering::Greater);
                    prop_assert!(base_key(&pair[0].title) <= base_key(&pair[1].title));
                }
                SortKey::Domain => {
                    prop_assert!(collate(&pair[0].domain, &pair[1].domain) != Ordering::Greater);
                    prop_assert!(base_key(&pair[0].domain) <= base_key(&pair[1].domain));
                }
            }
        }
    }

    /// PROPERTY: the engine is a pure function of its inputs.
    #[test]
    fn property_engine_is_deterministic(
        catalog in catalog_strategy(),
        sort in sort_strategy(),
        needle in "[a-z]{0,3}",
    ) {
        let query = ProjectQuery { text: needle, sort, ..ProjectQuery::default() };
        let first = filter_projects(&catalog, &query)
            .iter()
            .map(|p| p.id.clone())
            .collect::<Vec<_>>();
        let second = filter_projects(&catalog, &query)
            .iter()
            .map(|p| p.id.clone())
            .collect::<Vec<_>>();
        prop_assert_eq!(first, second);
    }
}
