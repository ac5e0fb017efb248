//! Tests for the file-backed student directory

use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tempfile::TempDir;

use genealogy::application::GenealogyService;
use genealogy::domain::{Rank, StudentId};
use genealogy::infrastructure::traits::{RealFileSystem, StudentDirectory};
use genealogy::infrastructure::JsonDirectory;

const FIXTURE: &str = "tests/resources/directory";

fn create_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).ok();
    }
    std::fs::write(&path, content).expect("write fixture file");
    path
}

fn directory(root: &Path) -> JsonDirectory {
    JsonDirectory::new(Arc::new(RealFileSystem), root)
}

#[test]
fn given_family_file_when_fetching_then_returns_its_content() {
    // Arrange
    let temp = TempDir::new().unwrap();
    create_file(&temp, "families/12.json", "[]");

    // Act
    let payload = directory(temp.path()).family(StudentId(12)).unwrap();

    // Assert
    assert_eq!(payload, "[]");
}

#[test]
fn given_no_family_file_when_fetching_then_not_found() {
    // Arrange
    let temp = TempDir::new().unwrap();

    // Act
    let err = directory(temp.path()).family(StudentId(12)).unwrap_err();

    // Assert
    assert_eq!(err.kind(), io::ErrorKind::NotFound);
}

#[test]
fn given_directory_in_place_of_family_file_when_fetching_then_not_found() {
    // Arrange
    let temp = TempDir::new().unwrap();
    std::fs::create_dir_all(temp.path().join("families/12.json")).unwrap();

    // Act
    let err = directory(temp.path()).family(StudentId(12)).unwrap_err();

    // Assert
    assert_eq!(err.kind(), io::ErrorKind::NotFound);
}

#[test]
fn given_layout_when_resolving_paths_then_uses_families_dir_and_roster_file() {
    let dir = directory(Path::new("/data"));

    assert_eq!(dir.family_path(StudentId(7)), PathBuf::from("/data/families/7.json"));
    assert_eq!(dir.roster_path(), PathBuf::from("/data/students.json"));
}

#[test]
fn given_fixture_directory_when_loading_family_then_crossed_pairs_aligned() {
    // Arrange
    let service = GenealogyService::new(Arc::new(directory(Path::new(FIXTURE))), Rank::Alumni);

    // Act
    let family = service.family(StudentId(5)).unwrap();

    // Assert
    let rows: Vec<Vec<StudentId>> = family.generations.iter().map(|g| g.ids()).collect();
    assert_eq!(
        rows,
        vec![
            vec![StudentId(1), StudentId(2)],
            vec![StudentId(4), StudentId(3)],
            vec![StudentId(5)],
        ]
    );
    assert_eq!(family.query.map(|s| s.name), Some("Inès Roux".to_string()));
}

#[test]
fn given_fixture_roster_when_searching_accented_name_then_found() {
    // Arrange
    let service = GenealogyService::new(Arc::new(directory(Path::new(FIXTURE))), Rank::Alumni);

    // Act
    let results = service.search("léa").unwrap();

    // Assert
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].id, StudentId(3));
    assert_eq!(results[0].rank, Some(Rank::I3));
    assert_eq!(results[0].promotion.as_deref(), Some("2017"));
}
