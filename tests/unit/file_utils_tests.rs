/*!
 * Tests for file and directory utilities
 */

use subsmith::file_utils::FileManager;

use crate::common;

/// ensure_dir creates nested directories and tolerates existing ones
#[test]
fn test_ensure_dir_withNestedPath_shouldCreateAll() {
    let temp_dir = common::create_temp_dir().unwrap();
    let nested = temp_dir.path().join("a/b/c");

    FileManager::ensure_dir(&nested).unwrap();
    assert!(nested.is_dir());

    // Second call is a no-op
    FileManager::ensure_dir(&nested).unwrap();
}

/// write_to_file creates missing parent directories
#[test]
fn test_write_to_file_withMissingParents_shouldCreateThem() {
    let temp_dir = common::create_temp_dir().unwrap();
    let path = temp_dir.path().join("deep/dir/file.txt");

    FileManager::write_to_file(&path, "content").unwrap();

    assert_eq!(std::fs::read_to_string(&path).unwrap(), "content");
}

/// file_exists distinguishes files from directories and absences
#[test]
fn test_file_exists_withVariousPaths_shouldClassify() {
    let temp_dir = common::create_temp_dir().unwrap();
    let file = common::create_test_file(temp_dir.path(), "a.txt", "x").unwrap();

    assert!(FileManager::file_exists(&file));
    assert!(!FileManager::file_exists(temp_dir.path()));
    assert!(!FileManager::file_exists(temp_dir.path().join("missing")));
}

/// Video discovery filters by extension, recurses, and sorts
#[test]
fn test_find_video_files_withMixedTree_shouldFilterAndSort() {
    let temp_dir = common::create_temp_dir().unwrap();
    let root = temp_dir.path();

    common::create_test_file(root, "b.mp4", "").unwrap();
    common::create_test_file(root, "a.MKV", "").unwrap();
    common::create_test_file(root, "notes.txt", "").unwrap();
    std::fs::create_dir(root.join("sub")).unwrap();
    common::create_test_file(&root.join("sub"), "c.webm", "").unwrap();

    let found = FileManager::find_video_files(root).unwrap();
    let names: Vec<_> = found
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();

    assert_eq!(names, vec!["a.MKV", "b.mp4", "c.webm"]);
}
