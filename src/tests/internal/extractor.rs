//! 解压器测试：目录与文件、非归档、幂等与覆盖、跳过的条目、各类损坏输入。

use std::fs;
use std::path::{Path, PathBuf};

use crate::extractor::{ExtractError, ExtractOutcome, ExtractSummary, SkipReason, extract, is_archive};
use crate::tests::{TarItem, build_tar, build_tar_gz, gzip, not_gzip, random_bytes};

fn write_archive(dir: &Path, name: &str, bytes: &[u8]) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, bytes).unwrap();
    path
}

fn summary(outcome: ExtractOutcome) -> ExtractSummary {
    match outcome {
        ExtractOutcome::Extracted(summary) => summary,
        ExtractOutcome::NotAnArchive => panic!("应当被当作归档处理"),
    }
}

#[test]
fn suffix_detection() {
    assert!(is_archive(Path::new("HDPatchv1.tar.gz")));
    assert!(is_archive(Path::new("/x/y/a.tar.gz")));
    assert!(!is_archive(Path::new("info.txt")));
    assert!(!is_archive(Path::new("a.tgz")));
    assert!(!is_archive(Path::new("a.tar.gz.part")));
}

#[test]
fn extracts_directories_and_files() {
    let src = tempfile::tempdir().unwrap();
    let dest = tempfile::tempdir().unwrap();
    let archive = write_archive(
        src.path(),
        "patch.tar.gz",
        &build_tar_gz(&[TarItem::Dir("a/"), TarItem::File("a/b.txt", b"hello")]),
    );

    let summary = summary(extract(&archive, dest.path()).unwrap());

    assert_eq!(summary.directories, 1);
    assert_eq!(summary.files, 1);
    assert!(summary.skipped.is_empty());
    assert!(dest.path().join("a").is_dir());
    assert_eq!(fs::read(dest.path().join("a/b.txt")).unwrap(), b"hello");
}

#[test]
fn concatenated_gzip_members_fully_extracted() {
    let src = tempfile::tempdir().unwrap();
    let dest = tempfile::tempdir().unwrap();
    let tar = build_tar(&[
        TarItem::File("one.txt", b"first"),
        TarItem::File("two.txt", b"second"),
    ]);
    // one.txt 占两个 512 字节块（头 + 数据），之后的内容放进第二个成员
    let (head, tail) = tar.split_at(1024);
    let mut bytes = gzip(head);
    bytes.extend_from_slice(&gzip(tail));
    let archive = write_archive(src.path(), "multi.tar.gz", &bytes);

    let summary = summary(extract(&archive, dest.path()).unwrap());

    assert_eq!(summary.files, 2);
    assert_eq!(fs::read(dest.path().join("one.txt")).unwrap(), b"first");
    assert_eq!(fs::read(dest.path().join("two.txt")).unwrap(), b"second");
}

#[test]
fn large_file_content_preserved() {
    let src = tempfile::tempdir().unwrap();
    let dest = tempfile::tempdir().unwrap();
    let data = random_bytes(300 * 1024);
    let archive = write_archive(
        src.path(),
        "big.tar.gz",
        &build_tar_gz(&[TarItem::File("big.bin", &data)]),
    );

    summary(extract(&archive, dest.path()).unwrap());
    assert_eq!(fs::read(dest.path().join("big.bin")).unwrap(), data);
}

#[test]
fn creates_missing_parent_dirs() {
    let src = tempfile::tempdir().unwrap();
    let dest = tempfile::tempdir().unwrap();
    let archive = write_archive(
        src.path(),
        "nested.tar.gz",
        &build_tar_gz(&[TarItem::File("x/y/z.txt", b"deep")]),
    );

    let summary = summary(extract(&archive, dest.path()).unwrap());
    assert_eq!(summary.directories, 0);
    assert_eq!(fs::read(dest.path().join("x/y/z.txt")).unwrap(), b"deep");
}

#[test]
fn non_archive_is_noop() {
    let src = tempfile::tempdir().unwrap();
    let dest = tempfile::tempdir().unwrap();
    let file = write_archive(src.path(), "info.txt", b"just text");
    let missing_dest = dest.path().join("never-created");

    let outcome = extract(&file, &missing_dest).unwrap();
    assert_eq!(outcome, ExtractOutcome::NotAnArchive);
    assert!(!missing_dest.exists());

    // 不存在的非归档文件同样不报错
    let outcome = extract(&src.path().join("ghost.txt"), dest.path()).unwrap();
    assert_eq!(outcome, ExtractOutcome::NotAnArchive);
}

#[test]
fn existing_dirs_and_files_are_reused() {
    let src = tempfile::tempdir().unwrap();
    let dest = tempfile::tempdir().unwrap();
    fs::create_dir_all(dest.path().join("a")).unwrap();
    fs::write(dest.path().join("a/b.txt"), b"old content that is longer").unwrap();

    let archive = write_archive(
        src.path(),
        "patch.tar.gz",
        &build_tar_gz(&[TarItem::Dir("a/"), TarItem::File("a/b.txt", b"new")]),
    );

    summary(extract(&archive, dest.path()).unwrap());
    assert_eq!(fs::read(dest.path().join("a/b.txt")).unwrap(), b"new");

    // 再解压一次结果相同
    summary(extract(&archive, dest.path()).unwrap());
    assert_eq!(fs::read(dest.path().join("a/b.txt")).unwrap(), b"new");
}

#[test]
fn symlink_is_skipped() {
    let src = tempfile::tempdir().unwrap();
    let dest = tempfile::tempdir().unwrap();
    let archive = write_archive(
        src.path(),
        "links.tar.gz",
        &build_tar_gz(&[
            TarItem::File("real.txt", b"data"),
            TarItem::Symlink("link.txt", "real.txt"),
            TarItem::File("after.txt", b"still extracted"),
        ]),
    );

    let summary = summary(extract(&archive, dest.path()).unwrap());

    assert_eq!(summary.files, 2);
    assert_eq!(summary.skipped.len(), 1);
    assert_eq!(summary.skipped[0].path, PathBuf::from("link.txt"));
    assert_eq!(summary.skipped[0].reason, SkipReason::UnsupportedKind(b'2'));
    assert!(fs::symlink_metadata(dest.path().join("link.txt")).is_err());
    assert_eq!(
        fs::read(dest.path().join("after.txt")).unwrap(),
        b"still extracted"
    );
}

#[test]
fn escaping_paths_are_skipped() {
    let root = tempfile::tempdir().unwrap();
    let dest = root.path().join("dest");
    fs::create_dir(&dest).unwrap();
    let archive = write_archive(
        root.path(),
        "evil.tar.gz",
        &build_tar_gz(&[
            TarItem::RawFile("../evil.txt", b"outside"),
            TarItem::File("ok.txt", b"inside"),
        ]),
    );

    let summary = summary(extract(&archive, &dest).unwrap());

    assert_eq!(summary.files, 1);
    assert_eq!(summary.skipped.len(), 1);
    assert_eq!(summary.skipped[0].reason, SkipReason::UnsafePath);
    assert!(!root.path().join("evil.txt").exists());
    assert_eq!(fs::read(dest.join("ok.txt")).unwrap(), b"inside");
}

#[test]
fn not_gzip_fails_to_initialize() {
    let src = tempfile::tempdir().unwrap();
    let dest = tempfile::tempdir().unwrap();
    let archive = write_archive(src.path(), "fake.tar.gz", &not_gzip());

    let err = extract(&archive, dest.path()).unwrap_err();
    assert!(matches!(err, ExtractError::DecompressionInit(_)), "{:?}", err);
}

#[test]
fn empty_file_fails_to_initialize() {
    let src = tempfile::tempdir().unwrap();
    let dest = tempfile::tempdir().unwrap();
    let archive = write_archive(src.path(), "empty.tar.gz", b"");

    let err = extract(&archive, dest.path()).unwrap_err();
    assert!(matches!(err, ExtractError::DecompressionInit(_)), "{:?}", err);
}

#[test]
fn truncated_archive_fails_to_read() {
    let src = tempfile::tempdir().unwrap();
    let dest = tempfile::tempdir().unwrap();
    let data = random_bytes(128 * 1024);
    let full = build_tar_gz(&[TarItem::File("big.bin", &data)]);
    let archive = write_archive(src.path(), "cut.tar.gz", &full[..full.len() / 2]);

    let err = extract(&archive, dest.path()).unwrap_err();
    assert!(matches!(err, ExtractError::ArchiveRead(_)), "{:?}", err);
}

#[test]
fn missing_archive_fails_to_open() {
    let src = tempfile::tempdir().unwrap();
    let dest = tempfile::tempdir().unwrap();

    let err = extract(&src.path().join("gone.tar.gz"), dest.path()).unwrap_err();
    assert!(matches!(err, ExtractError::OpenSource(_)));
}
