use std::io::{self, Read};
use std::path::{Path, PathBuf};

use tar::EntryType;

/// 归档条目类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Directory,
    RegularFile,
    /// 其它类型，保留原始类型字节（如 `b'2'` 表示符号链接）
    Other(u8),
}

impl From<EntryType> for EntryKind {
    fn from(entry_type: EntryType) -> Self {
        if entry_type.is_dir() {
            EntryKind::Directory
        } else if entry_type.is_file() {
            EntryKind::RegularFile
        } else {
            EntryKind::Other(entry_type.as_byte())
        }
    }
}

/// 解压过程中的一个条目，只在一次遍历内有效；内容只能顺序读取一次。
pub struct ArchiveEntry<'a, R: 'a + Read> {
    kind: EntryKind,
    relative_path: PathBuf,
    content: tar::Entry<'a, R>,
}

impl<'a, R: 'a + Read> ArchiveEntry<'a, R> {
    pub(crate) fn from_tar(entry: tar::Entry<'a, R>) -> io::Result<Self> {
        let kind = EntryKind::from(entry.header().entry_type());
        let relative_path = entry.path()?.into_owned();
        Ok(Self {
            kind,
            relative_path,
            content: entry,
        })
    }

    pub fn kind(&self) -> EntryKind {
        self.kind
    }

    /// 归档内记录的原始相对路径（未做任何清理）
    pub fn relative_path(&self) -> &Path {
        &self.relative_path
    }
}

impl<'a, R: 'a + Read> Read for ArchiveEntry<'a, R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.content.read(buf)
    }
}
