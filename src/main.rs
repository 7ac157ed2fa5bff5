mod error;
mod models;
mod storage;
mod ui;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;

use crate::error::{Result, VitalogError};
use crate::models::LogBook;
use crate::storage::load_logs;
use crate::ui::{App, render};

/// 获取数据目录路径 (~/.local/share/vitalog/)
fn get_data_dir() -> Result<PathBuf> {
    let data_dir = dirs::data_dir()
        .ok_or(VitalogError::DataDirNotFound)?
        .join("vitalog");

    fs::create_dir_all(&data_dir)?;

    Ok(data_dir)
}

/// 初始化诊断日志，写入数据目录下的 vitalog.log
///
/// 标准输出被 TUI 占用，诊断信息只进文件
fn init_tracing(data_dir: &Path) -> Result<()> {
    let log_file = fs::File::create(data_dir.join("vitalog.log"))?;
    tracing_subscriber::fmt()
        .with_writer(Mutex::new(log_file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn main() -> Result<()> {
    let data_dir = get_data_dir()?;
    init_tracing(&data_dir)?;

    // 数据文件路径 (~/.local/share/vitalog/data.toml)
    let data_path = data_dir.join("data.toml");

    // 加载记录；读取失败按"无数据"处理，应用继续运行
    let book = match load_logs(&data_path) {
        Ok(book) => book,
        Err(e) => {
            tracing::error!("加载记录失败: {e}");
            LogBook::new()
        }
    };
    tracing::info!("已加载 {} 条记录，数据文件 {}", book.len(), data_path.display());

    // 创建应用状态
    let mut app = App::new(book, data_path);

    // 设置终端
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // 主循环
    let result = run_app(&mut terminal, &mut app);

    // 恢复终端
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| render(f, app))?;

        if let crossterm::event::Event::Key(key) = crossterm::event::read()? {
            if key.kind == crossterm::event::KeyEventKind::Press {
                if ui::handle_key_event(app, key.code)? {
                    break;
                }
            }
        }
    }
    Ok(())
}
