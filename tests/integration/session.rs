//! End-to-end session scenarios

use pronouns::catalog::{Catalog, CatalogEntry};
use pronouns::foundation::{Declension, ErrorKind, Number};
use pronouns::runtime::{RuntimeConfig, Session};
use pronouns::template::{ExampleLibrary, Format};

fn session() -> Session {
    Session::new(RuntimeConfig::batch()).unwrap()
}

#[test]
fn pick_customize_and_share() {
    let mut session = session();

    session.set_path("they").unwrap();
    assert_eq!(session.share_url().as_deref(), Some("https://pronouns.me/they"));
    assert!(
        session
            .render_example(0)
            .unwrap()
            .contains("They have a wonderful personality.")
    );

    session.set_number(Number::Singular);
    assert_eq!(
        session.share_url().as_deref(),
        Some("https://pronouns.me/they/singular")
    );
    assert!(
        session
            .render_example(0)
            .unwrap()
            .contains("They has a wonderful personality.")
    );

    session.set_value(Declension::Reflexive, "themself").unwrap();
    assert_eq!(
        session.share_url().as_deref(),
        Some("https://pronouns.me/they/them/their/theirs/themself/singular")
    );
}

#[test]
fn shared_link_resolves_back() {
    let mut session = session();
    session.set_path("xe/xem/xir/plural").unwrap();
    let url = session.share_url().unwrap();
    let path = url.strip_prefix("https://pronouns.me/").unwrap();

    let before = session.record().clone();
    session.set_path("he").unwrap();
    session.set_path(path).unwrap();
    assert_eq!(session.record(), &before);
}

#[test]
fn title_and_description_for_previews() {
    let mut session = session();
    session.set_path("ey").unwrap();
    assert_eq!(session.title(), "Pronoun example: ey/em/eir/eirs/eirself");
    assert!(
        session
            .description()
            .starts_with("Hello! Today I met a new friend, and **ey** is really nice.")
    );
}

#[test]
fn configured_format_and_links() {
    let config = RuntimeConfig::batch()
        .with_format(Format::Markdown)
        .with_shorten_links(false)
        .with_base_url("https://example.test");
    let mut session = Session::new(config).unwrap();
    session.set_path("it").unwrap();
    assert_eq!(
        session.share_url().as_deref(),
        Some("https://example.test/it/it/its/its/itself")
    );
    assert!(session.render_example(0).unwrap().contains("**it** is really nice"));
}

#[test]
fn custom_catalog_and_library() {
    let catalog: Catalog = ["ae/aer/aer/aers/aerself", "e/em/es/ems/emself"]
        .iter()
        .map(|p| CatalogEntry::new(p.parse().unwrap(), true))
        .collect();
    let library = ExampleLibrary::from_sources(["{S} waved at {o}."]).unwrap();
    let mut session = Session::with_parts(catalog, library, RuntimeConfig::batch()).unwrap();

    assert_eq!(session.render_example(0).unwrap(), "Ae waved at aer.");
    session.set_path("e").unwrap();
    assert_eq!(session.render_example(0).unwrap(), "E waved at em.");
    assert_eq!(session.share_url().as_deref(), Some("https://pronouns.me/e"));

    let err = session.set_path("he").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::NoMatch { .. }));
}
