use shopkeep::inventory::ProductStore;
use shopkeep::model::ProductDraft;
use shopkeep::seed::seed_products;
use shopkeep::store::backend::StorageBackend;
use shopkeep::store::fs_backend::{FsBackend, SLOT_FILENAME};
use shopkeep::store::slot_store::SlotStore;
use shopkeep::store::DataStore;
use std::fs;
use tempfile::TempDir;

fn setup() -> (TempDir, SlotStore<FsBackend>) {
    let dir = TempDir::new().unwrap();
    let store = SlotStore::with_backend(FsBackend::new(dir.path().to_path_buf()));
    (dir, store)
}

#[test]
fn test_missing_slot_loads_seed() {
    let (dir, store) = setup();
    assert_eq!(store.load(), seed_products());
    // Loading never writes.
    assert!(!dir.path().join(SLOT_FILENAME).exists());
}

#[test]
fn test_save_writes_json_array() {
    let (dir, mut store) = setup();
    store.save(&seed_products()).unwrap();

    let on_disk = fs::read_to_string(dir.path().join(SLOT_FILENAME)).unwrap();
    let value: serde_json::Value = serde_json::from_str(&on_disk).unwrap();
    let array = value.as_array().unwrap();
    assert_eq!(array.len(), seed_products().len());
    assert_eq!(array[0]["id"], "seed-01");
    assert!(array[0]["creationDate"].as_str().unwrap().starts_with("2024-01-01T"));
}

#[test]
fn test_atomic_write_leaves_no_tmp_files() {
    let (dir, mut store) = setup();
    store.save(&seed_products()).unwrap();
    store.save(&[]).unwrap();

    for entry in fs::read_dir(dir.path()).unwrap() {
        let path = entry.unwrap().path();
        let name = path.file_name().unwrap().to_str().unwrap().to_string();
        assert!(!name.ends_with(".tmp"), "Found leftover tmp file: {}", name);
    }
}

#[test]
fn test_creates_missing_data_dir() {
    let dir = TempDir::new().unwrap();
    let nested = dir.path().join("a").join("b");
    let mut store = SlotStore::with_backend(FsBackend::new(nested.clone()));

    store.save(&[]).unwrap();
    assert!(nested.join(SLOT_FILENAME).exists());
}

#[test]
fn test_malformed_slot_falls_back_to_seed() {
    let (dir, store) = setup();
    fs::write(dir.path().join(SLOT_FILENAME), "[{\"id\": 42").unwrap();
    assert_eq!(store.load(), seed_products());
}

#[test]
fn test_save_of_load_is_a_no_op() {
    let (dir, mut store) = setup();
    let mut products = ProductStore::open(SlotStore::with_backend(FsBackend::new(
        dir.path().to_path_buf(),
    )));
    products
        .create(&ProductDraft::new("Teapot", 27.0).with_description("Cast iron"))
        .unwrap();

    let path = dir.path().join(SLOT_FILENAME);
    let before = fs::read_to_string(&path).unwrap();
    let loaded = store.load();
    store.save(&loaded).unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), before);
}

#[test]
fn test_mutations_survive_reopen() {
    let dir = TempDir::new().unwrap();
    let open = || ProductStore::open(SlotStore::with_backend(FsBackend::new(dir.path().to_path_buf())));

    let mut first = open();
    let created = first.create(&ProductDraft::new("Teapot", 27.0)).unwrap();
    let doomed = first.products()[0].id.clone();
    first.delete(&doomed).unwrap();

    let second = open();
    assert_eq!(second.products(), first.products());
    assert_eq!(second.products().last(), Some(&created));
    assert!(second.get(&doomed).is_none());
}

#[test]
fn test_custom_slot_name() {
    let dir = TempDir::new().unwrap();
    let backend = FsBackend::new(dir.path().to_path_buf()).with_slot_name("catalog.json");
    assert_eq!(backend.slot_path(), dir.path().join("catalog.json"));
    assert_eq!(backend.root(), dir.path());

    backend.write_slot("[]").unwrap();
    assert_eq!(backend.read_slot().unwrap().as_deref(), Some("[]"));
}

#[test]
fn test_failed_rename_removes_tmp_file() {
    let dir = TempDir::new().unwrap();
    // A non-empty directory where the slot should go makes the rename fail.
    let blocker = dir.path().join(SLOT_FILENAME);
    fs::create_dir(&blocker).unwrap();
    fs::write(blocker.join("keep"), "x").unwrap();

    let backend = FsBackend::new(dir.path().to_path_buf());
    assert!(backend.write_slot("[]").is_err());

    for entry in fs::read_dir(dir.path()).unwrap() {
        let name = entry.unwrap().file_name().to_string_lossy().to_string();
        assert!(!name.ends_with(".tmp"), "Found leftover tmp file: {}", name);
    }
}
