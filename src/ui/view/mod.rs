//! 视图层模块
//!
//! 包含主渲染入口和各种视图组件

pub mod components;
pub mod layouts;

use chrono::Local;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Clear, List, ListItem, ListState, Paragraph},
};

use super::state::{App, AppMode, InputField};
use components::{render_dialog_framework, render_input_widget};
use layouts::centered_rect;

/// 图表主色
const CHART_COLOR: Color = Color::LightMagenta;
/// 每根柱子的宽度
const CHART_BAR_WIDTH: u16 = 7;

/// 渲染 UI
pub fn render(frame: &mut Frame, app: &mut App) {
    let show_chart = app.book.chart_dataset().is_some();

    // 记录不足时不为图表留空间
    let mut constraints = vec![
        Constraint::Length(3), // 标题
        Constraint::Length(5), // 今日汇总
    ];
    if show_chart {
        constraints.push(Constraint::Length(12)); // 步数趋势
    }
    constraints.push(Constraint::Min(8)); // 记录列表
    constraints.push(Constraint::Length(3)); // 帮助

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(frame.area());

    let mut next = 0;
    render_title(frame, chunks[next]);
    next += 1;
    render_summary(frame, app, chunks[next]);
    next += 1;
    if show_chart {
        render_chart(frame, app, chunks[next]);
        next += 1;
    }
    render_log_list(frame, app, chunks[next]);
    next += 1;
    render_help(frame, app, chunks[next]);

    // 渲染弹窗
    match &app.mode {
        AppMode::AddingEntry => render_add_dialog(frame, app),
        AppMode::Alert(message) => {
            // 提示浮在录入表单上面
            render_add_dialog(frame, app);
            render_alert_dialog(frame, message);
        }
        AppMode::Normal => {}
    }
}

fn render_title(frame: &mut Frame, area: Rect) {
    let title = Paragraph::new("🌿 健康日志")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, area);
}

fn render_summary(frame: &mut Frame, app: &App, area: Rect) {
    let summary = app.book.daily_summary(Local::now().date_naive());
    let text = format!(
        "💧 饮水: {}ml\n👣 步数: {}\n😴 睡眠: {:.1} 小时",
        summary.total_water, summary.total_steps, summary.total_sleep
    );

    let widget = Paragraph::new(text)
        .style(Style::default().fg(Color::White))
        .block(Block::default().title("今日汇总").borders(Borders::ALL));

    frame.render_widget(widget, area);
}

fn render_chart(frame: &mut Frame, app: &App, area: Rect) {
    let Some(dataset) = app.book.chart_dataset() else {
        return;
    };

    let bars: Vec<Bar> = dataset
        .iter()
        .map(|(label, steps)| {
            Bar::default()
                .value(*steps)
                .label(Line::from(label.as_str()))
                .style(Style::default().fg(CHART_COLOR))
                .value_style(Style::default().fg(Color::Black).bg(CHART_COLOR))
        })
        .collect();

    let chart = BarChart::default()
        .block(Block::default().title("📊 步数趋势").borders(Borders::ALL))
        .data(BarGroup::default().bars(&bars))
        .bar_width(CHART_BAR_WIDTH)
        .bar_gap(1);

    frame.render_widget(chart, area);
}

fn render_log_list(frame: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .book
        .entries
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let content = format!(
                "🕒 {}  💧 {}ml  👣 {}  😴 {} 小时",
                entry.logged_at.format("%Y-%m-%d %H:%M"),
                entry.water,
                entry.steps,
                entry.sleep
            );

            let style = if i == app.selected_index {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD | Modifier::REVERSED)
            } else {
                Style::default().fg(Color::White)
            };

            ListItem::new(Line::from(vec![Span::styled(content, style)]))
        })
        .collect();

    let list_widget = List::new(items)
        .block(Block::default().title("📋 记录列表").borders(Borders::ALL))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));

    let mut state = ListState::default();
    state.select((!app.book.is_empty()).then_some(app.selected_index));

    frame.render_stateful_widget(list_widget, area, &mut state);
}

fn render_help(frame: &mut Frame, app: &App, area: Rect) {
    let help_text = match &app.mode {
        AppMode::Normal => "[a] 记录  [d] 删除选中  [j/k] 导航  [q] 退出",
        AppMode::AddingEntry => "输入数值后按 [Enter] 切换/提交  [Esc] 取消",
        AppMode::Alert(_) => "[Enter] 关闭提示",
    };

    let message = app.message.as_deref().unwrap_or("");
    let text = if message.is_empty() {
        help_text.to_string()
    } else {
        format!("{}  |  {}", help_text, message)
    };

    let help = Paragraph::new(text)
        .style(Style::default().fg(Color::Gray))
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(help, area);
}

fn render_add_dialog(frame: &mut Frame, app: &App) {
    let area = centered_rect(60, 60, frame.area());
    let inner = render_dialog_framework(frame, area, "➕ 添加记录");

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(1),
        ])
        .split(inner);

    render_input_widget(
        frame,
        chunks[0],
        "饮水量 (ml)",
        &app.water_input,
        "例如 250",
        app.input_field == InputField::Water,
    );
    render_input_widget(
        frame,
        chunks[1],
        "步数",
        &app.steps_input,
        "例如 8000",
        app.input_field == InputField::Steps,
    );
    render_input_widget(
        frame,
        chunks[2],
        "睡眠 (小时)",
        &app.sleep_input,
        "例如 7.5",
        app.input_field == InputField::Sleep,
    );

    let hint = match app.input_field {
        InputField::Water | InputField::Steps => "按 Enter 切换到下一项",
        InputField::Sleep => "按 Enter 提交记录",
    };
    frame.render_widget(
        Paragraph::new(hint).style(Style::default().fg(Color::Gray)),
        chunks[3],
    );
}

fn render_alert_dialog(frame: &mut Frame, message: &str) {
    let area = centered_rect(40, 20, frame.area());
    frame.render_widget(Clear, area);

    let dialog = Paragraph::new(format!("{}\n\n[Enter] 关闭", message))
        .style(Style::default().fg(Color::Red))
        .block(Block::default().title("⚠️ 提示").borders(Borders::ALL));

    frame.render_widget(dialog, area);
}
