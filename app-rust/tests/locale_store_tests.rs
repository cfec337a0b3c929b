use fridge_chef_app::{
    FileLocaleStore, LanguageSettings, LocaleStore, MemoryLocaleStore, TranslationKey,
};
use fridge_chef_sdk::Locale;
use std::fs;

#[test]
fn settings_default_to_english_without_a_saved_choice() {
    let settings = LanguageSettings::new(MemoryLocaleStore::new());

    assert_eq!(settings.locale(), Locale::En);
    assert_eq!(settings.t(TranslationKey::Back, &[]), "Back");
}

#[test]
fn set_language_switches_translations_and_persists() {
    let mut settings = LanguageSettings::new(MemoryLocaleStore::new());

    settings.set_language(Locale::Th);

    assert_eq!(settings.locale(), Locale::Th);
    assert_eq!(settings.t(TranslationKey::Back, &[]), "ย้อนกลับ");
    assert_eq!(settings.store().load(), Some(Locale::Th));
}

#[test]
fn settings_restore_the_saved_choice() {
    let settings = LanguageSettings::new(MemoryLocaleStore::with_locale(Locale::Th));
    assert_eq!(settings.locale(), Locale::Th);
}

#[test]
fn file_store_round_trips_through_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings").join("language.json");
    let store = FileLocaleStore::new(&path);

    assert_eq!(store.load(), None);
    store.save(Locale::Th);

    assert_eq!(fs::read_to_string(&path).unwrap(), r#"{"language":"th"}"#);
    assert_eq!(FileLocaleStore::new(&path).load(), Some(Locale::Th));
}

#[test]
fn file_store_ignores_malformed_or_unsupported_content() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("language.json");

    fs::write(&path, "not json").unwrap();
    assert_eq!(FileLocaleStore::new(&path).load(), None);

    fs::write(&path, r#"{"language":"fr"}"#).unwrap();
    assert_eq!(FileLocaleStore::new(&path).load(), None);

    fs::write(&path, r#"{"language":"th-TH"}"#).unwrap();
    assert_eq!(FileLocaleStore::new(&path).load(), Some(Locale::Th));
}

#[test]
fn file_store_save_failure_is_not_fatal() {
    let dir = tempfile::tempdir().unwrap();
    // A directory cannot be written as a file.
    let store = FileLocaleStore::new(dir.path());

    store.save(Locale::Th);

    let mut settings = LanguageSettings::new(store);
    assert_eq!(settings.locale(), Locale::En);
    settings.set_language(Locale::Th);
    assert_eq!(settings.locale(), Locale::Th);
}
