//! Tests for log level functionality.

use linelog::Level;

#[test]
fn level_codes_match_c_header() {
    assert_eq!(Level::Debug as i32, 0);
    assert_eq!(Level::Error as i32, 1);
    assert_eq!(Level::Information as i32, 2);
    assert_eq!(Level::Warning as i32, 3);
    assert_eq!(Level::Print as i32, 4);
    assert_eq!(Level::None as i32, 99);
}

#[test]
fn level_from_code_roundtrips() {
    for level in Level::leveled() {
        assert_eq!(Level::from_code(level as i32), Some(level));
    }
    assert_eq!(Level::from_code(4), Some(Level::Print));
    assert_eq!(Level::from_code(99), Some(Level::None));
    assert_eq!(Level::from_code(5), None);
    assert_eq!(Level::from_code(-1), None);
}

#[test]
fn prefix_index_only_for_leveled() {
    assert_eq!(Level::Debug.prefix_index(), Some(0));
    assert_eq!(Level::Warning.prefix_index(), Some(3));
    assert_eq!(Level::Print.prefix_index(), None);
    assert_eq!(Level::None.prefix_index(), None);
}
