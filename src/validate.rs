//! 截止日期输入校验
//!
//! 纯校验函数：接收 `YYYY-MM-DD` 文本，返回解析后的日期或具体拒绝原因。
//! 重试/再次提示由交互层负责，这里不做任何 I/O。

use chrono::{Datelike, Local, NaiveDate};
use thiserror::Error;

/// 截止日期年份上限
const MAX_DUE_YEAR: i32 = 2100;

/// 截止日期拒绝原因（Display 文本直接用作提示语）
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DueDateError {
    /// 无法按 YYYY-MM-DD 解析（含 2 月 30 日这类不存在的日期）
    #[error("Invalid date format. Please use YYYY-MM-DD.")]
    Malformed,

    /// 年份不在 [当前年, 2100] 区间
    #[error("Year must be between {min} and 2100.")]
    YearOutOfRange { min: i32 },

    /// 早于今天
    #[error("Due date cannot be in the past.")]
    PastDate,
}

/// 校验截止日期输入；空串（或纯空白）表示不设截止日期
pub fn validate_due_date(input: &str) -> Result<Option<NaiveDate>, DueDateError> {
    validate_due_date_at(input, Local::now().date_naive())
}

/// 按给定的"今天"校验，不读时钟
fn validate_due_date_at(input: &str, today: NaiveDate) -> Result<Option<NaiveDate>, DueDateError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    let date =
        NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").map_err(|_| DueDateError::Malformed)?;

    // 年份检查在前：往年的日期报年份错误而不是过期错误
    if date.year() < today.year() || date.year() > MAX_DUE_YEAR {
        return Err(DueDateError::YearOutOfRange { min: today.year() });
    }
    if date < today {
        return Err(DueDateError::PastDate);
    }

    Ok(Some(date))
}
