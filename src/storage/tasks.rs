//! 任务列表持久化（tasks.json，顶层 JSON 数组）

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::model::Task;

use super::{ensure_data_dir, load_json, save_json};

/// 获取 tasks.json 文件路径
pub fn tasks_file_path() -> Result<PathBuf> {
    Ok(ensure_data_dir()?.join("tasks.json"))
}

/// 加载任务列表（文件不存在视为空列表）
pub fn load_tasks(path: &Path) -> Result<Vec<Task>> {
    if !path.exists() {
        return Ok(Vec::new());
    }
    load_json(path)
}

/// 保存完整任务列表（整体覆盖写入，首次写入时创建文件）
pub fn save_tasks(path: &Path, tasks: &[Task]) -> Result<()> {
    save_json(path, &tasks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_loads_as_empty() {
        let dir = TempDir::new().unwrap();
        let tasks = load_tasks(&dir.path().join("tasks.json")).unwrap();
        assert!(tasks.is_empty());
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("tasks.json");

        let tasks = vec![
            Task::new(
                "write report",
                NaiveDate::from_ymd_opt(2099, 3, 1),
                Some("high".to_string()),
            ),
            Task::new("water plants", None, None),
        ];
        save_tasks(&path, &tasks).unwrap();

        let loaded = load_tasks(&path).unwrap();
        assert_eq!(loaded, tasks);
    }

    #[test]
    fn test_optional_keys_absent_when_unset() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("tasks.json");

        save_tasks(&path, &[Task::new("bare", None, None)]).unwrap();
        let raw = std::fs::read_to_string(&path).unwrap();
        assert!(raw.contains("\"title\""));
        assert!(raw.contains("\"done\""));
        assert!(!raw.contains("\"due\""));
        assert!(!raw.contains("\"priority\""));
    }

    #[test]
    fn test_loads_records_with_missing_keys() {
        // 缺省键按默认值处理：done=false，due/priority=None
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("tasks.json");
        std::fs::write(
            &path,
            r#"[{"title": "Buy milk", "done": true, "due": "2099-01-02", "priority": "low"}, {"title": "Rest"}]"#,
        )
        .unwrap();

        let loaded = load_tasks(&path).unwrap();
        assert_eq!(loaded.len(), 2);
        assert!(loaded[0].done);
        assert_eq!(loaded[0].due, NaiveDate::from_ymd_opt(2099, 1, 2));
        assert_eq!(loaded[0].priority.as_deref(), Some("low"));
        assert!(!loaded[1].done);
        assert_eq!(loaded[1].due, None);
        assert_eq!(loaded[1].priority, None);
    }
}
