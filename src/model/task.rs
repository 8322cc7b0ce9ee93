use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// 单个待办任务
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// 任务标题（store 内大小写不敏感唯一）
    pub title: String,
    /// 是否已完成
    #[serde(default)]
    pub done: bool,
    /// 截止日期（可选，序列化为 YYYY-MM-DD）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due: Option<NaiveDate>,
    /// 优先级标签（可选，如 high/medium/low，不做枚举限制）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,
}

impl Task {
    /// 创建新任务，done 初始为 false
    pub fn new(title: impl Into<String>, due: Option<NaiveDate>, priority: Option<String>) -> Self {
        Self {
            title: title.into(),
            done: false,
            due,
            priority,
        }
    }

    /// 返回完成状态对应的图标
    pub fn status_icon(&self) -> &'static str {
        if self.done {
            "✔"
        } else {
            "✘"
        }
    }

    /// 格式化单行展示，如 `2. Buy milk ✘ (Due: 2030-05-01) [Priority: low]`
    pub fn display_row(&self, position: usize) -> String {
        let mut row = format!("{}. {} {}", position, self.title, self.status_icon());
        if let Some(due) = self.due {
            row.push_str(&format!(" (Due: {})", due));
        }
        if let Some(priority) = &self.priority {
            row.push_str(&format!(" [Priority: {}]", priority));
        }
        row
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_icon() {
        let mut task = Task::new("demo", None, None);
        assert_eq!(task.status_icon(), "✘");
        task.done = true;
        assert_eq!(task.status_icon(), "✔");
    }

    #[test]
    fn test_display_row_minimal() {
        let task = Task::new("Buy milk", None, None);
        assert_eq!(task.display_row(1), "1. Buy milk ✘");
    }

    #[test]
    fn test_display_row_full() {
        let mut task = Task::new(
            "Buy milk",
            NaiveDate::from_ymd_opt(2030, 5, 1),
            Some("low".to_string()),
        );
        task.done = true;
        assert_eq!(
            task.display_row(2),
            "2. Buy milk ✔ (Due: 2030-05-01) [Priority: low]"
        );
    }
}
