use super::*;
use tempfile::TempDir;

fn file(name: &str) -> MigrationFile {
    MigrationFile::new(PathBuf::from("/migrations").join(name), 0)
}

fn names(files: &[MigrationFile]) -> Vec<&str> {
    files.iter().map(|f| f.name.as_str()).collect()
}

#[test]
fn test_sort_key_leading_digits() {
    assert_eq!(sort_key("001_init.sql"), 1);
    assert_eq!(sort_key("010_seed.sql"), 10);
    assert_eq!(sort_key("42.sql"), 42);
    assert_eq!(sort_key("0_zero.sql"), 0);
    assert_eq!(sort_key("12abc34.sql"), 12);
}

#[test]
fn test_sort_key_without_digits_is_unordered() {
    assert_eq!(sort_key("readme.sql"), UNORDERED_SORT_KEY);
    assert_eq!(sort_key("v2_users.sql"), UNORDERED_SORT_KEY);
    assert_eq!(sort_key(".sql"), UNORDERED_SORT_KEY);
    assert_eq!(sort_key(""), UNORDERED_SORT_KEY);
}

#[test]
fn test_sort_key_overflow_falls_back_to_sentinel() {
    assert_eq!(
        sort_key("99999999999999999999999999_huge.sql"),
        UNORDERED_SORT_KEY
    );
}

#[test]
fn test_sort_key_ignores_non_ascii_digits() {
    // Arabic-Indic digits are not treated as an ordering prefix
    assert_eq!(sort_key("\u{0663}_init.sql"), UNORDERED_SORT_KEY);
}

#[test]
fn test_numbered_files_sort_before_unordered() {
    let mut files = vec![
        file("readme.sql"),
        file("010_seed.sql"),
        file("notes.sql"),
        file("001_init.sql"),
        file("9998_last.sql"),
    ];
    sort_migrations(&mut files);
    assert_eq!(
        names(&files),
        vec![
            "001_init.sql",
            "010_seed.sql",
            "9998_last.sql",
            "readme.sql",
            "notes.sql"
        ]
    );
}

#[test]
fn test_equal_keys_keep_incoming_order() {
    let mut files = vec![
        file("002_b.sql"),
        file("zeta.sql"),
        file("002_a.sql"),
        file("001_x.sql"),
        file("alpha.sql"),
    ];
    sort_migrations(&mut files);
    assert_eq!(
        names(&files),
        vec!["001_x.sql", "002_b.sql", "002_a.sql", "zeta.sql", "alpha.sql"]
    );
}

#[test]
fn test_large_prefix_sorts_after_sentinel() {
    let mut files = vec![file("10000_big.sql"), file("plain.sql")];
    sort_migrations(&mut files);
    assert_eq!(names(&files), vec!["plain.sql", "10000_big.sql"]);
}

#[test]
fn test_discover_missing_directory_returns_empty() {
    let dir = TempDir::new().unwrap();
    let files = discover_migrations(&dir.path().join("migrations")).unwrap();
    assert!(files.is_empty());
}

#[test]
fn test_discover_filters_and_orders() {
    let dir = TempDir::new().unwrap();
    let root = dir.path();
    std::fs::write(root.join("010_seed.sql"), "INSERT INTO t VALUES (1);").unwrap();
    std::fs::write(root.join("readme.sql"), "-- notes").unwrap();
    std::fs::write(root.join("001_init.sql"), "CREATE TABLE t;").unwrap();
    std::fs::write(root.join("002_upper.SQL"), "-- wrong case").unwrap();
    std::fs::write(root.join("003_notes.txt"), "not sql").unwrap();
    std::fs::create_dir(root.join("nested")).unwrap();
    std::fs::write(root.join("nested").join("000_deep.sql"), "-- deep").unwrap();

    let files = discover_migrations(root).unwrap();
    assert_eq!(
        names(&files),
        vec!["001_init.sql", "010_seed.sql", "readme.sql"]
    );
    assert_eq!(files[0].size, "CREATE TABLE t;".len() as u64);
    assert_eq!(files[0].path, root.join("001_init.sql"));
    assert_eq!(files[2].sort_key, UNORDERED_SORT_KEY);
}

#[test]
fn test_discover_empty_directory() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("schema.txt"), "nothing").unwrap();
    assert!(discover_migrations(dir.path()).unwrap().is_empty());
}
