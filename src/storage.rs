use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::models::{LogBook, LogBookData};

/// 从TOML文件加载记录集合
///
/// 文件不存在时返回空集合
pub fn load_logs(path: &Path) -> Result<LogBook> {
    if !path.exists() {
        return Ok(LogBook::new());
    }

    let content = fs::read_to_string(path)?;
    let data: LogBookData = toml::from_str(&content)?;

    Ok(LogBook::from_data(data))
}

/// 保存记录集合到TOML文件，整体覆盖旧内容
pub fn save_logs(book: &LogBook, path: &Path) -> Result<()> {
    let data = book.to_data();
    let content = toml::to_string_pretty(&data)?;

    fs::write(path, content)?;
    Ok(())
}
