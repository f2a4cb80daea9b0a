use page_glance::position;
use tempfile::tempdir;

#[test]
fn save_then_load_round_trips() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("page");
    let path = path.to_str().unwrap();

    // 255/256 straddle the one-byte/two-byte encoding boundary
    for cursor in [0u64, 5, 255, 256] {
        position::save(path, cursor).unwrap();
        assert_eq!(position::load(path), cursor, "cursor {cursor}");
    }
}

#[test]
fn zero_is_written_as_a_single_byte() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("page");
    position::save(path.to_str().unwrap(), 0).unwrap();
    assert_eq!(std::fs::read(&path).unwrap(), vec![0]);
}

#[test]
fn missing_file_loads_as_zero() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("no-such-file");
    assert_eq!(position::load(path.to_str().unwrap()), 0);
}

#[test]
fn corrupt_file_loads_as_zero() {
    let dir = tempdir().unwrap();

    let empty = dir.path().join("empty");
    std::fs::write(&empty, []).unwrap();
    assert_eq!(position::load(empty.to_str().unwrap()), 0);

    let oversized = dir.path().join("oversized");
    std::fs::write(&oversized, [1u8; 12]).unwrap();
    assert_eq!(position::load(oversized.to_str().unwrap()), 0);
}

#[test]
fn save_replaces_prior_content() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("page");
    let path = path.to_str().unwrap();
    position::save(path, 70_000).unwrap();
    position::save(path, 3).unwrap();
    assert_eq!(std::fs::read(path).unwrap(), vec![3]);
    assert_eq!(position::load(path), 3);
}
