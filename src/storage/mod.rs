pub mod tasks;

use std::path::{Path, PathBuf};

use crate::error::Result;

/// 获取 ~/.twig/ 目录路径
pub fn twig_dir() -> PathBuf {
    dirs::home_dir()
        .expect("Cannot find home directory")
        .join(".twig")
}

/// 确保数据目录存在: ~/.twig/
pub fn ensure_data_dir() -> Result<PathBuf> {
    let path = twig_dir();
    std::fs::create_dir_all(&path)?;
    Ok(path)
}

/// 从 JSON 文件加载反序列化数据
pub fn load_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let content = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// 将数据序列化后保存到 JSON 文件
pub fn save_json<T: serde::Serialize>(path: &Path, data: &T) -> Result<()> {
    let content = serde_json::to_string_pretty(data)?;
    std::fs::write(path, content)?;
    Ok(())
}
