mod common;

use common::{ids, project, ten_project_catalog, with_technologies};
use folio_core::{filter_projects, projects, Catalog, FacetFilter, Project, ProjectQuery, SortKey};

fn unsorted_ids(catalog: &Catalog<Project>, query: &ProjectQuery) -> Vec<String> {
    catalog
        .iter()
        .filter(|project| query.admits(project))
        .map(|project| project.id.clone())
        .collect()
}

#[test]
fn category_filter_keeps_exactly_matching_projects_in_catalog_order() {
    let catalog = ten_project_catalog();
    let query = ProjectQuery {
        category: FacetFilter::from_selection("ml"),
        ..ProjectQuery::default()
    };

    assert_eq!(unsorted_ids(&catalog, &query), vec!["p02", "p04", "p07"]);

    let sorted = filter_projects(&catalog, &query);
    assert_eq!(ids(&sorted), vec!["p04", "p07", "p02"]);

    let by_title = filter_projects(
        &catalog,
        &ProjectQuery {
            sort: SortKey::Title,
            ..query
        },
    );
    assert_eq!(ids(&by_title), vec!["p02", "p04", "p07"]);
}

#[test]
fn all_sentinel_disables_facets() {
    let catalog = ten_project_catalog();
    let query = ProjectQuery::from_selections("all", "all", "", SortKey::Year);
    assert_eq!(filter_projects(&catalog, &query).len(), catalog.len());
}

#[test]
fn category_and_domain_filters_combine() {
    let catalog = ten_project_catalog();
    let query = ProjectQuery::from_selections("ml", "media", "", SortKey::Year);
    assert_eq!(ids(&filter_projects(&catalog, &query)), vec!["p07"]);

    let none = ProjectQuery::from_selections("ml", "telecom", "", SortKey::Year);
    assert!(filter_projects(&catalog, &none).is_empty());
}

#[test]
fn year_sort_is_descending_and_stable_on_ties() {
    let catalog = ten_project_catalog();
    let sorted = filter_projects(&catalog, &ProjectQuery::default());
    assert_eq!(
        ids(&sorted),
        vec!["p04", "p03", "p08", "p05", "p07", "p02", "p09", "p01", "p10", "p06"]
    );
}

#[test]
fn domain_sort_is_ascending_and_stable_on_ties() {
    let catalog = ten_project_catalog();
    let query = ProjectQuery {
        sort: SortKey::Domain,
        ..ProjectQuery::default()
    };
    let sorted = filter_projects(&catalog, &query);
    assert_eq!(
        ids(&sorted),
        vec!["p02", "p09", "p04", "p10", "p03", "p05", "p07", "p01", "p06", "p08"]
    );
}

#[test]
fn title_sort_ignores_case_and_accents() {
    let mut lower = project("lower", "ml", "media", 2024);
    lower.title = "apache pipeline".to_string();
    let mut upper = project("upper", "ml", "media", 2024);
    upper.title = "Zebra dashboard".to_string();
    let mut middle = project("middle", "ml", "media", 2024);
    middle.title = "Beta model".to_string();
    let mut accented = project("accented", "ml", "media", 2024);
    accented.title = "\u{c9}clair Demand Forecast".to_string();
    let mut fintech = project("fintech", "ml", "media", 2024);
    fintech.title = "Fintech Market Entry".to_string();
    let catalog = Catalog::try_new(vec![upper, fintech, accented, lower, middle]).unwrap();

    let query = ProjectQuery {
        sort: SortKey::Title,
        ..ProjectQuery::default()
    };
    assert_eq!(
        ids(&filter_projects(&catalog, &query)),
        vec!["lower", "middle", "accented", "fintech", "upper"]
    );
}

#[test]
fn domain_sort_places_accented_domains_by_base_letter() {
    let catalog = Catalog::try_new(vec![
        project("telecom", "ml", "Telecom", 2024),
        project("energy", "ml", "\u{c9}nergie", 2024),
        project("finance", "ml", "Finance", 2024),
        project("plain-energy", "ml", "energie", 2024),
    ])
    .unwrap();

    let query = ProjectQuery {
        sort: SortKey::Domain,
        ..ProjectQuery::default()
    };
    assert_eq!(
        ids(&filter_projects(&catalog, &query)),
        vec!["plain-energy", "energy", "finance", "telecom"]
    );
}

#[test]
fn text_search_matches_title_description_technologies_and_tags() {
    let catalog = projects();
    let search = |text: &str| {
        let query = ProjectQuery {
            text: text.to_string(),
            ..ProjectQuery::default()
        };
        ids(&filter_projects(catalog, &query))
    };

    // title
    assert_eq!(search("LAKEHOUSE"), vec!["retail-lakehouse"]);
    // description
    assert_eq!(search("chest x-rays"), vec!["medical-image-triage"]);
    // technology
    assert_eq!(search("pytorch"), vec!["medical-image-triage"]);
    // tag
    assert_eq!(search("m&a"), vec!["strategic-merger-ott"]);
    assert!(search("quantum annealing").is_empty());
}

#[test]
fn text_search_result_is_then_sorted() {
    let catalog = Catalog::try_new(vec![
        with_technologies(project("old", "ml", "media", 2020), &["Rust"]),
        with_technologies(project("new", "ml", "media", 2025), &["rust-analyzer"]),
        with_technologies(project("other", "ml", "media", 2030), &["Go"]),
    ])
    .unwrap();

    let query = ProjectQuery {
        text: "rust".to_string(),
        ..ProjectQuery::default()
    };
    assert_eq!(ids(&filter_projects(&catalog, &query)), vec!["new", "old"]);
}

#[test]
fn engine_is_deterministic_and_leaves_catalog_untouched() {
    let catalog = projects();
    let before = catalog.iter().map(|p| p.id.clone()).collect::<Vec<_>>();
    let query = ProjectQuery::from_selections("all", "Media", "stream", SortKey::Title);

    let first = ids(&filter_projects(catalog, &query));
    let second = ids(&filter_projects(catalog, &query));
    assert_eq!(first, second);
    // "Streamlit" is a technology of the A/B platform.
    assert_eq!(
        first,
        vec![
            "ab-testing-platform",
            "streaming-etl-pipeline",
            "strategic-merger-ott"
        ]
    );

    let after = catalog.iter().map(|p| p.id.clone()).collect::<Vec<_>>();
    assert_eq!(before, after);
}
