use crate::application::{App, AppMode};
use crate::presentation::layout::{
    CANCEL_LABEL, CONFIRM_LABEL, DialogLayout, RowLayout, ScreenLayout,
};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

pub fn render_ui(f: &mut Frame, app: &App) {
    let layout = ScreenLayout::compute(f.area(), app);

    render_header(f, app, layout.header);
    render_input(f, app, &layout);
    render_list(f, app, &layout);
    render_buttons(f, &layout);
    render_status_bar(f, app, layout.status);

    if let Some(dialog) = &layout.dialog {
        render_clear_dialog(f, dialog);
    } else if matches!(app.mode, AppMode::Help) {
        render_help_popup(f, app.help_scroll);
    }
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let header = Paragraph::new(app.title.as_str())
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));
    f.render_widget(header, area);
}

fn render_input(f: &mut Frame, app: &App, layout: &ScreenLayout) {
    let editing = matches!(app.mode, AppMode::Editing);
    let border_style = if editing {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };

    let text_width = layout.input.width.saturating_sub(2) as usize;
    let (scroll, column) = if text_width == 0 {
        (0, 0)
    } else {
        input_window(app.pending_input(), app.cursor_position, text_width)
    };

    let paragraph = if app.pending_input().is_empty() {
        Paragraph::new(app.placeholder.as_str()).style(Style::default().fg(Color::DarkGray))
    } else {
        let visible: String = app.pending_input().chars().skip(scroll).collect();
        Paragraph::new(visible)
    };
    f.render_widget(
        paragraph.block(
            Block::default()
                .borders(Borders::ALL)
                .title("New item")
                .border_style(border_style),
        ),
        layout.input,
    );

    if editing && layout.dialog.is_none() && text_width > 0 {
        f.set_cursor_position((layout.input.x + 1 + column, layout.input.y + 1));
    }

    let button = Paragraph::new("Add Item")
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::White)
                .bg(Color::Indexed(61))
                .add_modifier(Modifier::BOLD),
        )
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(button, layout.add_button);
}

/// Characters to skip and the cursor's cell column, keeping the cursor
/// inside a box `width` cells wide. Wide characters take two cells.
fn input_window(text: &str, cursor: usize, width: usize) -> (usize, u16) {
    let before: Vec<char> = text.chars().take(cursor).collect();
    let mut skip = 0;
    loop {
        let shown: String = before[skip..].iter().collect();
        let cells = Span::raw(shown).width();
        if cells < width || skip >= before.len() {
            return (skip, cells as u16);
        }
        skip += 1;
    }
}

fn render_list(f: &mut Frame, app: &App, layout: &ScreenLayout) {
    let items = app.manager.items();
    let title = format!(
        "Items ({} item{}, total {})",
        items.len(),
        if items.len() == 1 { "" } else { "s" },
        items.total_count()
    );
    f.render_widget(Block::default().borders(Borders::ALL).title(title), layout.list);

    if items.is_empty() {
        let inner = layout.list_inner;
        let line = Rect::new(inner.x, inner.y + inner.height / 2, inner.width, inner.height.min(1));
        let placeholder = Paragraph::new(app.empty_message.as_str())
            .alignment(Alignment::Center)
            .style(Style::default().add_modifier(Modifier::BOLD));
        f.render_widget(placeholder, line);
        return;
    }

    let selected = app.selected_index();
    for row in &layout.rows {
        render_row(f, app, row, selected == Some(row.index));
    }
}

fn render_row(f: &mut Frame, app: &App, row: &RowLayout, is_selected: bool) {
    let Some(item) = app.manager.items().get(row.index) else {
        return;
    };

    let name_style = if is_selected {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD | Modifier::REVERSED)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };
    f.render_widget(Paragraph::new(item.name.as_str()).style(name_style), row.name);

    f.render_widget(
        Paragraph::new("[+]").style(Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)),
        row.increase,
    );
    f.render_widget(
        Paragraph::new(item.count.to_string()).alignment(Alignment::Right),
        row.count,
    );
    f.render_widget(
        Paragraph::new("[-]").style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
        row.decrease,
    );
}

fn render_buttons(f: &mut Frame, layout: &ScreenLayout) {
    let reset = Paragraph::new("Reset Counts")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::White).bg(Color::Blue))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(reset, layout.reset_button);

    let clear = Paragraph::new("Clear List")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::White).bg(Color::Red))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(clear, layout.clear_button);
}

fn render_status_bar(f: &mut Frame, app: &App, area: Rect) {
    let text = if app.manager.is_clear_confirmation_open() {
        "y/Enter: clear the list | n/Esc: cancel".to_string()
    } else {
        match app.mode {
            AppMode::Normal => {
                if let Some(ref status) = app.status_message {
                    status.clone()
                } else {
                    "a: add | j/k: select | +/-: count | r: reset | c: clear | ?: help | q: quit"
                        .to_string()
                }
            }
            AppMode::Editing => match app.status_message {
                Some(ref status) => format!("{} | Enter: add | Esc: done", status),
                None => "Enter: add | Esc: done | Ctrl+V: paste".to_string(),
            },
            AppMode::Help => "↑↓/jk: scroll | Esc/q: close help".to_string(),
        }
    };

    let style = if app.manager.is_clear_confirmation_open() {
        Style::default().fg(Color::Red)
    } else {
        match app.mode {
            AppMode::Normal => Style::default(),
            AppMode::Editing => Style::default().fg(Color::Green),
            AppMode::Help => Style::default().fg(Color::Cyan),
        }
    };

    let status = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL).title("Status"))
        .style(style);
    f.render_widget(status, area);
}

fn render_clear_dialog(f: &mut Frame, dialog: &DialogLayout) {
    f.render_widget(
        Block::default().style(Style::default().add_modifier(Modifier::DIM)),
        f.area(),
    );
    f.render_widget(Clear, dialog.content);
    f.render_widget(
        Block::default()
            .borders(Borders::ALL)
            .title("Are you sure?")
            .title_alignment(Alignment::Center)
            .style(Style::default().fg(Color::Black).bg(Color::White)),
        dialog.content,
    );

    let message = Paragraph::new("\nThis will clear all items from the list.")
        .alignment(Alignment::Center);
    f.render_widget(message, dialog.message);

    f.render_widget(
        Paragraph::new(CONFIRM_LABEL).style(
            Style::default()
                .fg(Color::White)
                .bg(Color::Red)
                .add_modifier(Modifier::BOLD),
        ),
        dialog.confirm,
    );
    f.render_widget(
        Paragraph::new(CANCEL_LABEL).style(Style::default().fg(Color::White).bg(Color::DarkGray)),
        dialog.cancel,
    );
}

fn render_help_popup(f: &mut Frame, scroll: usize) {
    let area = f.area();
    let popup_area = Rect {
        x: area.width / 10,
        y: area.height / 10,
        width: area.width * 4 / 5,
        height: area.height * 4 / 5,
    };

    f.render_widget(Clear, popup_area);

    let help_lines: Vec<&str> = HELP_TEXT.lines().collect();
    let visible_height = popup_area.height.saturating_sub(2) as usize;

    let start_line = scroll.min(help_lines.len().saturating_sub(visible_height));
    let end_line = (start_line + visible_height).min(help_lines.len());

    let visible_text = help_lines[start_line..end_line].join("\n");

    let help_widget = Paragraph::new(visible_text)
        .block(Block::default()
            .borders(Borders::ALL)
            .title(format!("tally Help (Line {}/{})", start_line + 1, help_lines.len()))
            .style(Style::default().fg(Color::Cyan)))
        .style(Style::default().fg(Color::White));

    f.render_widget(help_widget, popup_area);
}

pub const HELP_TEXT: &str = r#"TALLY KEY REFERENCE

=== LIST ===
a / i / Tab     Focus the add box
↑↓ or k/j       Select previous/next item
+ / → / l       Increase the selected count
- / ← / h       Decrease the selected count (never below 0)
r               Reset every count to 0
c               Clear the list (asks for confirmation)
q / Ctrl+C      Quit

=== ADD BOX ===
Enter           Add the typed name as a new item
Esc / Tab       Back to the list (typed text is kept)
←→ Home End     Move the cursor
Backspace/Del   Delete characters
Ctrl+V          Paste from the clipboard

Blank names are ignored. Duplicate names are allowed.

=== CLEAR CONFIRMATION ===
y / Enter       Yes, clear every item
n / Esc         Cancel

=== MOUSE ===
Click the add box, Add Item, [+] and [-], Reset Counts or Clear List.
Click a row to select it.
In the confirmation dialog, clicking outside the box cancels.

=== HELP NAVIGATION ===
↑↓ or j/k       Scroll help text
Page Up/Down    Scroll help text 5 lines
Home            Jump to top
Esc/F1/?/q      Close this help window

Items live only for this session and are never saved."#;
