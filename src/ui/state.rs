//! App 状态定义 (Model)
//!
//! 包含应用状态结构体及相关枚举

use std::path::PathBuf;

use crate::models::LogBook;

/// 应用状态
pub struct App {
    pub book: LogBook,
    pub data_path: PathBuf,
    pub selected_index: usize,
    pub mode: AppMode,
    pub water_input: String,
    pub steps_input: String,
    pub sleep_input: String,
    pub input_field: InputField,
    pub message: Option<String>,
}

/// 应用模式
#[derive(Debug, Clone, PartialEq)]
pub enum AppMode {
    Normal,
    AddingEntry,
    Alert(String), // String is the alert message
}

/// 输入字段类型
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputField {
    Water,
    Steps,
    Sleep,
}

impl InputField {
    /// 下一个输入字段，Sleep 是最后一个
    pub fn next(self) -> Option<Self> {
        match self {
            InputField::Water => Some(InputField::Steps),
            InputField::Steps => Some(InputField::Sleep),
            InputField::Sleep => None,
        }
    }
}

impl App {
    /// 创建新的应用实例
    pub fn new(book: LogBook, data_path: PathBuf) -> Self {
        Self {
            book,
            data_path,
            selected_index: 0,
            mode: AppMode::Normal,
            water_input: String::new(),
            steps_input: String::new(),
            sleep_input: String::new(),
            input_field: InputField::Water,
            message: None,
        }
    }

    /// 确保选中索引有效
    pub fn clamp_selection(&mut self) {
        if self.book.is_empty() {
            self.selected_index = 0;
        } else if self.selected_index >= self.book.len() {
            self.selected_index = self.book.len() - 1;
        }
    }

    /// 获取当前选中的记录 ID
    pub fn selected_entry_id(&self) -> Option<String> {
        self.book
            .entries
            .get(self.selected_index)
            .map(|e| e.id.clone())
    }

    /// 当前聚焦字段的输入缓冲
    pub fn focused_input(&mut self) -> &mut String {
        match self.input_field {
            InputField::Water => &mut self.water_input,
            InputField::Steps => &mut self.steps_input,
            InputField::Sleep => &mut self.sleep_input,
        }
    }
}
