//! `.tar.gz` 解包实现。

use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, Read, Write};
use std::path::{Component, Path, PathBuf};

use flate2::bufread::MultiGzDecoder;
use tracing::{debug, info, warn};

use crate::internal::extractor::structs::{
    ArchiveEntry, EntryKind, ExtractError, ExtractOutcome, ExtractSummary, SkipReason,
    SkippedEntry,
};

/// 需要解压的文件后缀
pub const ARCHIVE_SUFFIX: &str = ".tar.gz";

const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

const COPY_BUFFER_SIZE: usize = 64 * 1024;

/// 文件名是否以 [`ARCHIVE_SUFFIX`] 结尾
pub fn is_archive(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| n.ends_with(ARCHIVE_SUFFIX))
}

/// 把 `archive_path` 解包到 `destination_dir`。
///
/// - 非 `.tar.gz` 文件直接返回 [`ExtractOutcome::NotAnArchive`]，不会访问目标目录；
/// - 目录条目：逐级创建，已存在不报错；
/// - 普通文件：创建（覆盖）后完整写入，缺失的父目录会一并创建；
/// - 其它类型、绝对路径或含 `..` 的条目：记录警告后跳过；
/// - 遇到第一个 I/O 错误立即返回，剩余条目不再处理。
pub fn extract(archive_path: &Path, destination_dir: &Path) -> Result<ExtractOutcome, ExtractError> {
    if !is_archive(archive_path) {
        debug!("跳过非归档文件 {}", archive_path.display());
        return Ok(ExtractOutcome::NotAnArchive);
    }

    info!(
        "开始解压 {} -> {}",
        archive_path.display(),
        destination_dir.display()
    );

    let file = File::open(archive_path).map_err(ExtractError::OpenSource)?;
    let mut reader = BufReader::new(file);
    check_gzip_magic(&mut reader)?;

    // 可能由多个 gzip 成员拼接而成，需读到最后一个成员
    let mut archive = tar::Archive::new(MultiGzDecoder::new(reader));
    let entries = archive.entries().map_err(ExtractError::ArchiveRead)?;

    let mut summary = ExtractSummary::default();

    for entry in entries {
        let entry = entry.map_err(ExtractError::ArchiveRead)?;
        let mut entry = ArchiveEntry::from_tar(entry).map_err(ExtractError::ArchiveRead)?;

        let Some(relative_path) = sanitize_entry_path(entry.relative_path()) else {
            warn!(
                "跳过越界路径条目 {} (来自 {})",
                entry.relative_path().display(),
                archive_path.display()
            );
            summary.skipped.push(SkippedEntry {
                path: entry.relative_path().to_path_buf(),
                reason: SkipReason::UnsafePath,
            });
            continue;
        };
        let target = destination_dir.join(&relative_path);

        match entry.kind() {
            EntryKind::Directory => {
                fs::create_dir_all(&target).map_err(|source| ExtractError::CreateDir {
                    path: target.clone(),
                    source,
                })?;
                summary.directories += 1;
            }
            EntryKind::RegularFile => {
                write_entry(&mut entry, &target)?;
                summary.files += 1;
            }
            EntryKind::Other(flag) => {
                warn!(
                    "无法解压类型为 {:?} 的条目 {} (来自 {})",
                    flag as char,
                    relative_path.display(),
                    archive_path.display()
                );
                summary.skipped.push(SkippedEntry {
                    path: relative_path,
                    reason: SkipReason::UnsupportedKind(flag),
                });
            }
        }
    }

    info!(
        "解压完成 {}：目录 {} 个，文件 {} 个，跳过 {} 个",
        archive_path.display(),
        summary.directories,
        summary.files,
        summary.skipped.len()
    );

    Ok(ExtractOutcome::Extracted(summary))
}

/// 在真正解压前确认是 gzip 流，区分「不是压缩包」和「压缩包损坏」。
fn check_gzip_magic<R: BufRead>(reader: &mut R) -> Result<(), ExtractError> {
    let head = reader.fill_buf().map_err(ExtractError::OpenSource)?;
    if head.len() < GZIP_MAGIC.len() || head[..GZIP_MAGIC.len()] != GZIP_MAGIC {
        return Err(ExtractError::DecompressionInit(io::Error::new(
            io::ErrorKind::InvalidData,
            "不是 gzip 格式",
        )));
    }
    Ok(())
}

/// 去掉 `.`，拒绝绝对路径和 `..`；返回 `None` 表示不安全。
fn sanitize_entry_path(path: &Path) -> Option<PathBuf> {
    let mut clean = PathBuf::new();
    for component in path.components() {
        match component {
            Component::Normal(part) => clean.push(part),
            Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => return None,
        }
    }
    Some(clean)
}

/// 读写分开映射错误：读失败是归档问题，写失败是目标目录问题。
fn write_entry<R: Read>(entry: &mut R, target: &Path) -> Result<(), ExtractError> {
    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent).map_err(|source| ExtractError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    let write_err = |source| ExtractError::EntryWrite {
        path: target.to_path_buf(),
        source,
    };

    let mut out = File::create(target).map_err(write_err)?;
    let mut buf = vec![0u8; COPY_BUFFER_SIZE];
    loop {
        let n = match entry.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(ExtractError::ArchiveRead(e)),
        };
        out.write_all(&buf[..n]).map_err(write_err)?;
    }
    out.flush().map_err(write_err)?;
    Ok(())
}
