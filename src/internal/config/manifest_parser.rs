//! patches.toml 的极简解析，build.rs 与测试共用；只支持单行字符串和字符串数组。

/// 解析 `key = "value"` 形式的单行字符串。
pub fn parse_string_value(content: &str, key: &str) -> Option<String> {
    content.lines().find_map(|line| {
        let line = line.trim();
        let rest = line.strip_prefix(key)?.trim_start();
        let value = rest.strip_prefix('=')?.trim();
        let value = value.strip_prefix('"')?;
        let end = value.find('"')?;
        Some(value[..end].to_string())
    })
}

/// 解析 files = ["a","b"] 或多行 files = [ "a", "b" ]
pub fn parse_files_array(content: &str) -> Option<Vec<String>> {
    let array_start = find_files_key(content)?;
    let mut depth = 1u32;
    let mut i = array_start + 1;
    let bytes = content.as_bytes();
    while i < content.len() && depth > 0 {
        match bytes.get(i) {
            Some(b'[') => depth += 1,
            Some(b']') => depth -= 1,
            _ => {}
        }
        i += 1;
    }
    if depth != 0 {
        return None;
    }
    let inner = &content[array_start + 1..i - 1];
    let names: Vec<String> = inner
        .lines()
        .map(|l| l.split('#').next().unwrap_or(""))
        .flat_map(|l| l.split(','))
        .map(|s| s.trim().trim_matches('"').to_string())
        .filter(|s| !s.is_empty())
        .collect();
    Some(names)
}

/// 定位行首 `files = [` 中 `[` 的字节偏移；注释或其它值里出现的 "files" 不算。
fn find_files_key(content: &str) -> Option<usize> {
    let mut offset = 0;
    for line in content.split_inclusive('\n') {
        let trimmed = line.trim_start();
        if let Some(rest) = trimmed.strip_prefix("files") {
            if let Some(value) = rest.trim_start().strip_prefix('=') {
                let open = value.find('[')?;
                return Some(offset + (line.len() - value.len()) + open);
            }
        }
        offset += line.len();
    }
    None
}
