use piles::content::ContentKind;
use piles::store::ContentStore;

#[test]
fn test_add_appends_in_insertion_order() {
    let mut store = ContentStore::new();
    let first = store.add("Dune", "Sci-fi epic", ContentKind::Movies).unwrap();
    let second = store.add("Arrival", "", ContentKind::Movies).unwrap();

    assert_eq!(store.len(), 2);
    assert_ne!(first, second);

    let items = store.items();
    assert_eq!(items[0].title, "Dune");
    assert_eq!(items[1].title, "Arrival");
    assert_eq!(items[0].kind, ContentKind::Movies);
}

#[test]
fn test_blank_title_add_is_declined() {
    let mut store = ContentStore::new();
    assert!(store.add("", "some description", ContentKind::Music).is_none());
    assert!(store.add("   ", "", ContentKind::Music).is_none());
    assert!(store.add("\t\n", "", ContentKind::Music).is_none());
    assert!(store.is_empty());
}

#[test]
fn test_add_keeps_title_verbatim() {
    // Trimming only feeds the guard; the stored title is the submitted string
    let mut store = ContentStore::new();
    let id = store.add("  Dune  ", "", ContentKind::Movies).unwrap();
    assert_eq!(store.get(id).unwrap().title, "  Dune  ");
}

#[test]
fn test_items_are_filtered_by_category() {
    let mut store = ContentStore::new();
    store.add("Show A", "", ContentKind::Series).unwrap();
    store.add("Movie A", "", ContentKind::Movies).unwrap();
    store.add("Show B", "", ContentKind::Series).unwrap();

    let series: Vec<&str> = store.items_for(ContentKind::Series).map(|i| i.title.as_str()).collect();
    assert_eq!(series, vec!["Show A", "Show B"]);

    let movies: Vec<&str> = store.items_for(ContentKind::Movies).map(|i| i.title.as_str()).collect();
    assert_eq!(movies, vec!["Movie A"]);

    assert_eq!(store.count_for(ContentKind::Carousel), 0);
}

#[test]
fn test_update_preserves_id_kind_and_position() {
    let mut store = ContentStore::new();
    store.add("First", "", ContentKind::Music).unwrap();
    let target = store.add("Second", "old", ContentKind::Music).unwrap();
    store.add("Third", "", ContentKind::Music).unwrap();

    assert!(store.update(target, "Second (remastered)", "new"));

    let items = store.items();
    assert_eq!(items.len(), 3);
    assert_eq!(items[1].id, target);
    assert_eq!(items[1].title, "Second (remastered)");
    assert_eq!(items[1].description.as_deref(), Some("new"));
    assert_eq!(items[1].kind, ContentKind::Music);

    // Neighbors untouched
    assert_eq!(items[0].title, "First");
    assert_eq!(items[2].title, "Third");
}

#[test]
fn test_update_accepts_blank_title() {
    // Only add validates the title; edits go through unchecked
    let mut store = ContentStore::new();
    let id = store.add("Named", "", ContentKind::Users).unwrap();
    assert!(store.update(id, "", ""));
    assert_eq!(store.get(id).unwrap().title, "");
}

#[test]
fn test_update_unknown_id_is_a_noop() {
    let mut store = ContentStore::new();
    store.add("Keep me", "", ContentKind::Movies).unwrap();
    let snapshot = store.items().to_vec();

    assert!(!store.update(uuid::Uuid::new_v4(), "other", ""));
    assert_eq!(store.items(), snapshot.as_slice());
}

#[test]
fn test_remove_deletes_exactly_one_item() {
    let mut store = ContentStore::new();
    let a = store.add("A", "", ContentKind::Carousel).unwrap();
    let b = store.add("B", "", ContentKind::Carousel).unwrap();
    let c = store.add("C", "", ContentKind::Movies).unwrap();

    assert!(store.remove(b));
    assert!(!store.remove(b));

    assert_eq!(store.len(), 2);
    assert!(store.get(a).is_some());
    assert!(store.get(c).is_some());
}

#[test]
fn test_empty_description_normalizes_to_none() {
    let mut store = ContentStore::new();
    let id = store.add("Title", "", ContentKind::Series).unwrap();
    assert!(store.get(id).unwrap().description.is_none());

    assert!(store.update(id, "Title", "now set"));
    assert_eq!(store.get(id).unwrap().description.as_deref(), Some("now set"));

    assert!(store.update(id, "Title", ""));
    assert!(store.get(id).unwrap().description.is_none());
}

#[test]
fn test_cross_category_scenario() {
    // Start empty; add under series, then movies; each view shows only its own
    let mut store = ContentStore::new();

    store.add("Show A", "", ContentKind::Series).unwrap();
    assert_eq!(store.len(), 1);

    store.add("Movie A", "", ContentKind::Movies).unwrap();
    assert_eq!(store.len(), 2);

    let series: Vec<&str> = store.items_for(ContentKind::Series).map(|i| i.title.as_str()).collect();
    assert_eq!(series, vec!["Show A"]);
}
