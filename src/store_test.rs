use super::*;

#[test]
fn load_theme_absent_is_none() {
    let store = MemoryStore::new();
    assert_eq!(load_theme(&store, "theme"), None);
}

#[test]
fn load_theme_reads_literals() {
    let dark = MemoryStore::new().with_entry("theme", "dark");
    let light = MemoryStore::new().with_entry("theme", "light");
    assert_eq!(load_theme(&dark, "theme"), Some(Theme::Dark));
    assert_eq!(load_theme(&light, "theme"), Some(Theme::Light));
}

#[test]
fn load_theme_unknown_value_reads_as_unset() {
    let store = MemoryStore::new().with_entry("theme", "sepia");
    assert_eq!(load_theme(&store, "theme"), None);
}

#[test]
fn load_theme_respects_key() {
    let store = MemoryStore::new().with_entry("other", "dark");
    assert_eq!(load_theme(&store, "theme"), None);
}

#[test]
fn save_theme_writes_literal() {
    let mut store = MemoryStore::new();
    save_theme(&mut store, "theme", Theme::Dark).expect("write should succeed");
    assert_eq!(store.get("theme").as_deref(), Some("dark"));
    save_theme(&mut store, "theme", Theme::Light).expect("write should succeed");
    assert_eq!(store.get("theme").as_deref(), Some("light"));
}

#[test]
fn read_only_store_rejects_writes() {
    let mut store = MemoryStore::read_only();
    let err = save_theme(&mut store, "theme", Theme::Dark).expect_err("write should fail");
    assert!(err.to_string().contains("theme"));
    assert_eq!(store.get("theme"), None);
}

#[test]
fn boxed_store_delegates() {
    let mut store: Box<dyn PreferenceStore> = Box::new(MemoryStore::new());
    save_theme(&mut store, "theme", Theme::Dark).expect("write should succeed");
    assert_eq!(load_theme(&store, "theme"), Some(Theme::Dark));
}
