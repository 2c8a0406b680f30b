use notebook_core::store::decode_document;
use notebook_core::{FileNotebookRepository, Note, NotebookRepository};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

fn stored_map(path: &Path) -> BTreeMap<String, String> {
    let bytes = fs::read(path).unwrap();
    decode_document(&bytes).unwrap().notes
}

fn in_memory_map(repo: &FileNotebookRepository) -> BTreeMap<String, String> {
    repo.list_notes()
        .unwrap()
        .into_iter()
        .map(|note| (note.title, note.content))
        .collect()
}

#[test]
fn missing_file_bootstraps_empty_and_creates_no_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("notebook.json");

    let repo = FileNotebookRepository::open(&path).unwrap();
    assert_eq!(repo.count_notes().unwrap(), 0);
    assert!(repo.list_notes().unwrap().is_empty());
    assert!(!path.exists());
}

#[test]
fn every_mutation_flushes_the_full_map() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("notebook.json");
    let mut repo = FileNotebookRepository::open(&path).unwrap();

    repo.add_note(&Note::new("a", "alpha")).unwrap();
    assert_eq!(stored_map(&path), in_memory_map(&repo));

    repo.add_note(&Note::new("b", "beta")).unwrap();
    assert_eq!(stored_map(&path), in_memory_map(&repo));

    assert!(repo.delete_note("a").unwrap());
    assert_eq!(stored_map(&path), in_memory_map(&repo));
}

#[test]
fn reload_from_fresh_repository_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("notebook.json");

    {
        let mut repo = FileNotebookRepository::open(&path).unwrap();
        repo.add_note(&Note::new("groceries", "milk\neggs")).unwrap();
        repo.add_note(&Note::new("ideas", "garden shed")).unwrap();
        repo.add_note(&Note::new("scratch", "tmp")).unwrap();
        assert!(repo.delete_note("scratch").unwrap());
    }

    let reloaded = FileNotebookRepository::open(&path).unwrap();
    assert_eq!(
        in_memory_map(&reloaded),
        BTreeMap::from([
            ("groceries".to_string(), "milk\neggs".to_string()),
            ("ideas".to_string(), "garden shed".to_string()),
        ])
    );
}

#[test]
fn delete_miss_returns_false_and_leaves_file_bytes_unchanged() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("notebook.json");
    let mut repo = FileNotebookRepository::open(&path).unwrap();
    repo.add_note(&Note::new("keep", "me")).unwrap();

    let before = fs::read(&path).unwrap();
    assert!(!repo.delete_note("ghost").unwrap());
    assert_eq!(fs::read(&path).unwrap(), before);
    assert_eq!(repo.count_notes().unwrap(), 1);
}

#[test]
fn delete_miss_on_pristine_store_creates_no_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("notebook.json");
    let mut repo = FileNotebookRepository::open(&path).unwrap();

    assert!(!repo.delete_note("anything").unwrap());
    assert!(!path.exists());
}

#[test]
fn re_adding_a_title_overwrites_the_single_entry() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("notebook.json");
    let mut repo = FileNotebookRepository::open(&path).unwrap();

    repo.add_note(&Note::new("x", "a")).unwrap();
    repo.add_note(&Note::new("x", "b")).unwrap();

    assert_eq!(repo.count_notes().unwrap(), 1);
    assert_eq!(repo.get_note("x").unwrap().unwrap().content, "b");
    assert_eq!(
        stored_map(&path),
        BTreeMap::from([("x".to_string(), "b".to_string())])
    );
}

#[test]
fn deleted_note_is_absent_in_memory_and_after_reload() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("notebook.json");

    {
        let mut repo = FileNotebookRepository::open(&path).unwrap();
        repo.add_note(&Note::new("x", "a")).unwrap();
        assert!(repo.delete_note("x").unwrap());
        assert!(repo.get_note("x").unwrap().is_none());
    }

    let reloaded = FileNotebookRepository::open(&path).unwrap();
    assert!(reloaded.get_note("x").unwrap().is_none());
    assert_eq!(reloaded.count_notes().unwrap(), 0);
}
