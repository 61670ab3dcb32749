//! Content digest behaviour over real directory trees

use agents_fs::checksum::{self, Digest};
use agents_test_utils::TestTree;
use pretty_assertions::{assert_eq, assert_ne};
use proptest::prelude::*;
use std::fs;

#[test]
fn identical_single_file_directories_match() {
    let tree = TestTree::new();
    tree.write("one/a.txt", "hi");
    tree.write("two/a.txt", "hi");

    assert_eq!(
        checksum::digest(&tree.path("one")),
        checksum::digest(&tree.path("two"))
    );
}

#[test]
fn creation_order_does_not_matter() {
    let tree = TestTree::new();
    for name in ["z.txt", "m/inner.txt", "a.txt", "m/deeper/x.txt"] {
        tree.write(&format!("first/{name}"), name);
    }
    for name in ["m/deeper/x.txt", "a.txt", "m/inner.txt", "z.txt"] {
        tree.write(&format!("second/{name}"), name);
    }

    assert_eq!(
        checksum::digest(&tree.path("first")),
        checksum::digest(&tree.path("second"))
    );
}

#[test]
fn adding_a_file_changes_digest() {
    let tree = TestTree::new();
    tree.write("dir/file.txt", "content");
    let before = checksum::digest(&tree.path("dir"));

    tree.write("dir/new.txt", "new");

    assert_ne!(before, checksum::digest(&tree.path("dir")));
}

#[test]
fn removing_a_file_changes_digest() {
    let tree = TestTree::new();
    tree.write("dir/keep.txt", "keep");
    let path = tree.write("dir/drop.txt", "drop");
    let before = checksum::digest(&tree.path("dir"));

    fs::remove_file(path).unwrap();

    assert_ne!(before, checksum::digest(&tree.path("dir")));
}

#[test]
fn renaming_a_file_changes_digest() {
    let tree = TestTree::new();
    tree.write("a/old.txt", "same");
    tree.write("b/new.txt", "same");

    assert_ne!(
        checksum::digest(&tree.path("a")),
        checksum::digest(&tree.path("b"))
    );
}

#[test]
fn empty_subdirectories_do_not_contribute() {
    let tree = TestTree::new();
    tree.write("a/file.txt", "x");
    tree.write("b/file.txt", "x");
    tree.mkdir("b/empty");

    assert_eq!(
        checksum::digest(&tree.path("a")),
        checksum::digest(&tree.path("b"))
    );
}

#[test]
fn nonexistent_paths_are_sentinel() {
    let tree = TestTree::new();

    assert_eq!(checksum::digest(&tree.path("missing.txt")).as_str(), Digest::NOT_EXISTS);
    assert_eq!(checksum::digest(&tree.path("missing/dir")).as_str(), "NOT_EXISTS");
}

#[cfg(unix)]
#[test]
fn dangling_link_inside_directory_hashes_as_sentinel() {
    let tree = TestTree::new();
    tree.write("with_link/a.txt", "a");
    std::os::unix::fs::symlink(tree.path("nowhere"), tree.path("with_link/b.txt")).unwrap();

    // the unreadable entry contributes the sentinel in place of a hash
    let expected = {
        use sha2::{Digest as _, Sha256};
        let mut h = Sha256::new();
        h.update(b"a.txt");
        h.update(checksum::file_digest(&tree.path("with_link/a.txt")).as_str().as_bytes());
        h.update(b"b.txt");
        h.update(b"NOT_EXISTS");
        format!("{:x}", h.finalize())
    };

    assert_eq!(checksum::digest(&tree.path("with_link")).as_str(), expected);
    assert!(!checksum::digest(&tree.path("with_link")).is_missing());
}

proptest! {
    #[test]
    fn equal_bytes_give_equal_digests(content in proptest::collection::vec(any::<u8>(), 0..512)) {
        let tree = TestTree::new();
        let a = tree.path("a.bin");
        let b = tree.path("b.bin");
        fs::write(&a, &content).unwrap();
        fs::write(&b, &content).unwrap();

        prop_assert_eq!(checksum::digest(&a), checksum::digest(&b));
    }

    #[test]
    fn one_flipped_byte_changes_digest(
        content in proptest::collection::vec(any::<u8>(), 1..512),
        index in any::<prop::sample::Index>(),
    ) {
        let tree = TestTree::new();
        let a = tree.path("a.bin");
        let b = tree.path("b.bin");
        let mut altered = content.clone();
        let i = index.index(altered.len());
        altered[i] ^= 0xff;
        fs::write(&a, &content).unwrap();
        fs::write(&b, &altered).unwrap();

        prop_assert_ne!(checksum::digest(&a), checksum::digest(&b));
    }
}
