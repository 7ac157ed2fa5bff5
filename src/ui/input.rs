//! 键盘事件映射 (Input -> Action)
//!
//! 将按键事件转换为 Action

use crossterm::event::KeyCode;

use super::actions::Action;
use super::state::{App, AppMode};
use crate::error::Result;

/// 根据当前模式和按键获取对应的 Action
pub fn get_action(mode: &AppMode, key: KeyCode) -> Option<Action> {
    match mode {
        AppMode::Normal => match key {
            KeyCode::Char('q') => Some(Action::Quit),
            KeyCode::Char('j') | KeyCode::Down => Some(Action::MoveSelectionDown),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::MoveSelectionUp),
            KeyCode::Char('a') => Some(Action::StartAddEntry),
            KeyCode::Char('d') => Some(Action::DeleteSelected),
            _ => None,
        },
        AppMode::AddingEntry => match key {
            KeyCode::Esc => Some(Action::Cancel),
            KeyCode::Enter => Some(Action::Submit),
            KeyCode::Backspace => Some(Action::DeleteChar),
            KeyCode::Char(c) => Some(Action::Input(c)),
            _ => None,
        },
        AppMode::Alert(_) => match key {
            KeyCode::Enter | KeyCode::Esc => Some(Action::Submit),
            _ => None,
        },
    }
}

/// 处理按键事件
pub fn handle_key_event(app: &mut App, key: KeyCode) -> Result<bool> {
    if let Some(action) = get_action(&app.mode, key) {
        Ok(app.dispatch(action))
    } else {
        Ok(false)
    }
}
