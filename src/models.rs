use chrono::{DateTime, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 图表显示所需的最少记录数
pub const CHART_MIN_ENTRIES: usize = 3;
/// 图表最多取最近几条记录
pub const CHART_MAX_POINTS: usize = 7;

/// 单条健康记录
///
/// 创建后不再修改，只会被整体删除
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    pub id: String,
    pub water: u32,
    pub steps: u32,
    pub sleep: f64,
    pub logged_at: DateTime<Local>,
}

impl LogEntry {
    pub fn new(water: u32, steps: u32, sleep: f64) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            water,
            steps,
            sleep,
            logged_at: Local::now(),
        }
    }
}

/// TOML文件结构
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogBookData {
    pub meta: BookMeta,
    #[serde(default)]
    pub entries: Vec<LogEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookMeta {
    pub version: String,
    pub created_at: DateTime<Local>,
    pub last_modified: DateTime<Local>,
}

/// 今日汇总
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DailySummary {
    pub total_water: u32,
    pub total_steps: u32,
    pub total_sleep: f64,
}

/// 运行时记录集合（最新的记录排在最前面）
#[derive(Debug, Clone)]
pub struct LogBook {
    pub entries: Vec<LogEntry>,
    created_at: DateTime<Local>,
}

impl LogBook {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            created_at: Local::now(),
        }
    }

    pub fn from_data(data: LogBookData) -> Self {
        Self {
            entries: data.entries,
            created_at: data.meta.created_at,
        }
    }

    pub fn to_data(&self) -> LogBookData {
        LogBookData {
            meta: BookMeta {
                version: "1.0".to_string(),
                created_at: self.created_at,
                last_modified: Local::now(),
            },
            entries: self.entries.clone(),
        }
    }

    /// 添加新记录（插入到最前面），返回记录 ID
    pub fn add_entry(&mut self, water: u32, steps: u32, sleep: f64) -> String {
        let entry = LogEntry::new(water, steps, sleep);
        let id = entry.id.clone();
        self.entries.insert(0, entry);
        id
    }

    /// 按 ID 删除记录，返回是否确实删除了
    pub fn delete_entry(&mut self, entry_id: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != entry_id);
        self.entries.len() < before
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 汇总指定日期当天的记录
    pub fn daily_summary(&self, day: NaiveDate) -> DailySummary {
        self.entries
            .iter()
            .filter(|e| e.logged_at.date_naive() == day)
            .fold(DailySummary::default(), |mut acc, e| {
                acc.total_water += e.water;
                acc.total_steps += e.steps;
                acc.total_sleep += e.sleep;
                acc
            })
    }

    /// 生成步数趋势图数据集（标签 + 步数）
    ///
    /// 记录不足 CHART_MIN_ENTRIES 条时返回 None；
    /// 否则取最近 CHART_MAX_POINTS 条，标签按总数倒序编号（#N, #N-1, …）
    pub fn chart_dataset(&self) -> Option<Vec<(String, u64)>> {
        if self.entries.len() < CHART_MIN_ENTRIES {
            return None;
        }

        let total = self.entries.len();
        Some(
            self.entries
                .iter()
                .take(CHART_MAX_POINTS)
                .enumerate()
                .map(|(i, e)| (format!("#{}", total - i), u64::from(e.steps)))
                .collect(),
        )
    }
}

impl Default for LogBook {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_add_entry_prepends() {
        let mut book = LogBook::new();
        book.add_entry(100, 1000, 7.0);
        let newest = book.add_entry(200, 2000, 8.0);

        assert_eq!(book.len(), 2);
        assert_eq!(book.entries[0].id, newest);
        assert_eq!(book.entries[0].water, 200);
    }

    #[test]
    fn test_delete_by_id() {
        let mut book = LogBook::new();
        let oldest = book.add_entry(1, 1, 1.0);
        let middle = book.add_entry(2, 2, 2.0);
        let newest = book.add_entry(3, 3, 3.0);

        assert!(book.delete_entry(&middle));
        assert_eq!(book.len(), 2);
        assert_eq!(book.entries[0].id, newest);
        assert_eq!(book.entries[1].id, oldest);

        // 同一个 ID 再删一次没有效果
        assert!(!book.delete_entry(&middle));
        assert_eq!(book.len(), 2);
    }

    #[test]
    fn test_daily_summary_only_counts_today() {
        let mut book = LogBook::new();
        book.add_entry(200, 300, 1.0);
        book.entries[0].logged_at = Local::now() - Duration::days(1);
        book.add_entry(100, 500, 7.0);

        let summary = book.daily_summary(Local::now().date_naive());
        assert_eq!(summary.total_water, 100);
        assert_eq!(summary.total_steps, 500);
        assert!((summary.total_sleep - 7.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_chart_dataset_takes_seven_newest() {
        let mut book = LogBook::new();
        for i in 0..10u32 {
            book.add_entry(0, i * 100, 0.0);
        }

        let dataset = book.chart_dataset().unwrap();
        assert_eq!(dataset.len(), 7);
        // 最新一条排最前，标签从记录总数开始倒数
        assert_eq!(dataset[0], ("#10".to_string(), 900));
        assert_eq!(dataset[6], ("#4".to_string(), 300));
    }

    #[test]
    fn test_chart_hidden_below_threshold() {
        let mut book = LogBook::new();
        assert!(book.chart_dataset().is_none());
        book.add_entry(1, 1, 1.0);
        assert!(book.chart_dataset().is_none());
        book.add_entry(2, 2, 2.0);
        assert!(book.chart_dataset().is_none());
        book.add_entry(3, 3, 3.0);
        assert!(book.chart_dataset().is_some());
    }
}
