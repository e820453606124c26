use std::io::Write;

use safra_fixtures::{DataSource, FixtureError, StaticDataSource};
use safra_types::{NavTarget, PageId};

#[test]
fn embedded_fixtures_load() {
    let source = StaticDataSource::embedded().expect("load embedded fixtures");
    let fixtures = source.fixtures();
    assert_eq!(fixtures.user.email, "admin@locks.com.br");
    assert_eq!(fixtures.notifications.len(), 3);
    assert_eq!(fixtures.ticker.len(), 6);
    assert_eq!(fixtures.kpis.len(), 4);
    assert_eq!(fixtures.quick_actions.len(), 4);
}

#[test]
fn every_navigation_item_has_exactly_one_target() {
    let source = StaticDataSource::embedded().expect("load embedded fixtures");
    for item in source.fixtures().navigation.items() {
        match item.target() {
            NavTarget::Page(_) => assert!(item.children().is_empty(), "{} has children", item.id()),
            NavTarget::Group(children) => {
                assert!(!children.is_empty(), "{} is an empty group", item.id());
                assert!(children.iter().all(|child| child.target_page().is_some()), "{} nests a group", item.id());
            }
        }
    }
}

#[test]
fn settings_and_overview_are_navigable() {
    let source = StaticDataSource::embedded().expect("load embedded fixtures");
    let pages: Vec<&PageId> = source.fixtures().navigation.leaves().filter_map(|leaf| leaf.target_page()).collect();
    assert!(pages.contains(&&PageId::overview()));
    assert!(pages.contains(&&PageId::settings()));
}

#[test]
fn fixtures_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    write!(
        file,
        r#"{{"user":{{"name":"Bia","email":"bia@example.com"}},"navigation":[{{"id":"overview","label":"Visão Geral","icon":"overview","page":"overview"}}]}}"#
    )
    .expect("write fixtures");

    let source = StaticDataSource::load(Some(file.path())).expect("load fixtures file");
    assert_eq!(source.fixtures().user.name, "Bia");
}

#[test]
fn missing_file_reports_path() {
    let error = StaticDataSource::from_path("/definitely/not/here.json").unwrap_err();
    assert!(matches!(error, FixtureError::Io { .. }));
    assert!(error.to_string().contains("/definitely/not/here.json"));
}
