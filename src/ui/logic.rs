//! 业务逻辑处理 (Update/Dispatch)
//!
//! 包含核心的 dispatch 逻辑和各种业务处理方法

use super::actions::Action;
use super::state::{App, AppMode, InputField};
use crate::storage::save_logs;

/// 校验失败时的固定提示
pub const EMPTY_FIELDS_ALERT: &str = "请填写所有字段";

impl App {
    /// 核心逻辑分发
    pub fn dispatch(&mut self, action: Action) -> bool {
        match action {
            Action::Quit => return true,
            Action::MoveSelectionUp => self.move_up(),
            Action::MoveSelectionDown => self.move_down(),

            Action::StartAddEntry => self.start_add_entry(),
            Action::DeleteSelected => self.delete_selected(),

            Action::Cancel => self.cancel(),

            Action::Submit => match &self.mode {
                AppMode::AddingEntry => match self.input_field.next() {
                    Some(next_field) => self.input_field = next_field,
                    None => self.confirm_add_entry(),
                },
                AppMode::Alert(_) => self.dismiss_alert(),
                AppMode::Normal => {}
            },

            Action::Input(c) => {
                if self.mode == AppMode::AddingEntry {
                    self.focused_input().push(c);
                }
            }

            Action::DeleteChar => {
                if self.mode == AppMode::AddingEntry {
                    self.focused_input().pop();
                }
            }
        }
        false
    }

    // ============ 导航相关 ============

    /// 向上移动选择
    pub fn move_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    /// 向下移动选择
    pub fn move_down(&mut self) {
        if self.selected_index + 1 < self.book.len() {
            self.selected_index += 1;
        }
    }

    // ============ 添加记录相关 ============

    /// 开始添加记录
    pub fn start_add_entry(&mut self) {
        self.mode = AppMode::AddingEntry;
        self.water_input.clear();
        self.steps_input.clear();
        self.sleep_input.clear();
        self.input_field = InputField::Water;
    }

    /// 确认添加记录
    ///
    /// 三个字段都必须非空；数值解析失败按 0 处理
    pub fn confirm_add_entry(&mut self) {
        if self.water_input.is_empty()
            || self.steps_input.is_empty()
            || self.sleep_input.is_empty()
        {
            self.mode = AppMode::Alert(EMPTY_FIELDS_ALERT.to_string());
            return;
        }

        let water = parse_count(&self.water_input);
        let steps = parse_count(&self.steps_input);
        let sleep = parse_hours(&self.sleep_input);

        self.book.add_entry(water, steps, sleep);
        self.water_input.clear();
        self.steps_input.clear();
        self.sleep_input.clear();
        self.selected_index = 0;
        self.mode = AppMode::Normal;
        self.message = Some("记录已添加".to_string());
        self.persist();
    }

    /// 关闭提示弹窗，回到录入表单（已输入的内容保留）
    pub fn dismiss_alert(&mut self) {
        self.mode = AppMode::AddingEntry;
    }

    // ============ 删除记录相关 ============

    /// 删除当前选中的记录，无确认步骤
    pub fn delete_selected(&mut self) {
        let Some(id) = self.selected_entry_id() else {
            return;
        };

        if self.book.delete_entry(&id) {
            self.clamp_selection();
            self.message = Some("记录已删除".to_string());
            self.persist();
        }
    }

    // ============ 通用操作 ============

    /// 取消当前操作
    pub fn cancel(&mut self) {
        self.mode = AppMode::Normal;
        self.water_input.clear();
        self.steps_input.clear();
        self.sleep_input.clear();
        self.message = None;
    }

    /// 把当前集合整体写回数据文件
    ///
    /// 失败只记日志，不回滚内存状态，也不重试
    pub fn persist(&self) {
        if let Err(e) = save_logs(&self.book, &self.data_path) {
            tracing::error!("保存记录失败: {e}");
        }
    }
}

/// 整数字段解析，无效输入按 0 处理
fn parse_count(input: &str) -> u32 {
    input.trim().parse().unwrap_or(0)
}

/// 睡眠小时数解析，无效输入按 0 处理，负数归零
fn parse_hours(input: &str) -> f64 {
    input.trim().parse::<f64>().unwrap_or(0.0).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LogBook;
    use crate::storage::load_logs;

    fn test_app() -> (App, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let app = App::new(LogBook::new(), dir.path().join("data.toml"));
        (app, dir)
    }

    fn type_into(app: &mut App, text: &str) {
        for c in text.chars() {
            app.dispatch(Action::Input(c));
        }
    }

    #[test]
    fn test_add_entry_via_form() {
        let (mut app, _dir) = test_app();
        app.dispatch(Action::StartAddEntry);
        type_into(&mut app, "250");
        app.dispatch(Action::Submit); // -> 步数
        type_into(&mut app, "8000");
        app.dispatch(Action::Submit); // -> 睡眠
        type_into(&mut app, "7.5");
        app.dispatch(Action::Submit);

        assert_eq!(app.book.len(), 1);
        assert_eq!(app.book.entries[0].water, 250);
        assert_eq!(app.book.entries[0].steps, 8000);
        assert!((app.book.entries[0].sleep - 7.5).abs() < f64::EPSILON);
        assert_eq!(app.mode, AppMode::Normal);

        // 提交后缓冲清空
        assert!(app.water_input.is_empty());
        assert!(app.steps_input.is_empty());
        assert!(app.sleep_input.is_empty());
    }

    #[test]
    fn test_empty_field_raises_alert() {
        let (mut app, _dir) = test_app();
        app.dispatch(Action::StartAddEntry);
        type_into(&mut app, "250");
        app.dispatch(Action::Submit);
        app.dispatch(Action::Submit); // 步数留空
        type_into(&mut app, "7.5");
        app.dispatch(Action::Submit);

        assert_eq!(app.book.len(), 0);
        assert_eq!(app.mode, AppMode::Alert(EMPTY_FIELDS_ALERT.to_string()));

        // 关闭弹窗后回到表单，已输入的内容保留
        app.dispatch(Action::Submit);
        assert_eq!(app.mode, AppMode::AddingEntry);
        assert_eq!(app.water_input, "250");
    }

    #[test]
    fn test_numeric_coercion_defaults_to_zero() {
        let (mut app, _dir) = test_app();
        app.dispatch(Action::StartAddEntry);
        type_into(&mut app, "abc");
        app.dispatch(Action::Submit);
        type_into(&mut app, "5");
        app.dispatch(Action::Submit);
        type_into(&mut app, "2.5");
        app.dispatch(Action::Submit);

        let entry = &app.book.entries[0];
        assert_eq!(entry.water, 0);
        assert_eq!(entry.steps, 5);
        assert!((entry.sleep - 2.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_delete_selected_by_stable_id() {
        let (mut app, _dir) = test_app();
        let oldest = app.book.add_entry(1, 1, 1.0);
        app.book.add_entry(2, 2, 2.0);
        let newest = app.book.add_entry(3, 3, 3.0);

        app.selected_index = 1;
        app.dispatch(Action::DeleteSelected);

        assert_eq!(app.book.len(), 2);
        assert_eq!(app.book.entries[0].id, newest);
        assert_eq!(app.book.entries[1].id, oldest);

        // 删到末尾时选中索引收缩
        app.selected_index = 1;
        app.dispatch(Action::DeleteSelected);
        assert_eq!(app.selected_index, 0);
        assert_eq!(app.book.len(), 1);
    }

    #[test]
    fn test_mutations_write_back_to_disk() {
        let (mut app, _dir) = test_app();
        app.dispatch(Action::StartAddEntry);
        type_into(&mut app, "100");
        app.dispatch(Action::Submit);
        type_into(&mut app, "500");
        app.dispatch(Action::Submit);
        type_into(&mut app, "7");
        app.dispatch(Action::Submit);

        let reloaded = load_logs(&app.data_path).unwrap();
        assert_eq!(reloaded.entries, app.book.entries);

        app.dispatch(Action::DeleteSelected);
        let reloaded = load_logs(&app.data_path).unwrap();
        assert!(reloaded.is_empty());
    }
}
