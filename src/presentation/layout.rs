//! Screen geometry shared by rendering and mouse handling.
//!
//! The same [`ScreenLayout`] is used to draw a frame and to resolve a click,
//! so whatever is on screen is exactly what can be hit.

use crate::application::App;
use ratatui::layout::{Constraint, Direction, Layout, Margin, Position, Rect};

/// Narrowest the count column gets; it widens to fit the largest count.
pub const MIN_COUNT_WIDTH: u16 = 7;
pub const CONFIRM_LABEL: &str = "[ Yes, Clear ]";
pub const CANCEL_LABEL: &str = "[ Cancel ]";

const DIALOG_WIDTH: u16 = 46;
const DIALOG_HEIGHT: u16 = 8;
const DIALOG_BUTTON_GAP: u16 = 4;

/// What a click landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    AddBox,
    AddButton,
    Row(usize),
    Increase(usize),
    Decrease(usize),
    ResetButton,
    ClearButton,
    DialogConfirm,
    DialogCancel,
    /// Inside the modal but not on a button
    DialogContent,
    /// Outside the modal while it is open
    Backdrop,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RowLayout {
    /// Position of the item in the list
    pub index: usize,
    pub area: Rect,
    pub name: Rect,
    pub increase: Rect,
    pub count: Rect,
    pub decrease: Rect,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DialogLayout {
    pub content: Rect,
    pub message: Rect,
    pub confirm: Rect,
    pub cancel: Rect,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScreenLayout {
    pub header: Rect,
    pub input: Rect,
    pub add_button: Rect,
    pub list: Rect,
    pub list_inner: Rect,
    pub rows: Vec<RowLayout>,
    pub reset_button: Rect,
    pub clear_button: Rect,
    pub status: Rect,
    pub dialog: Option<DialogLayout>,
}

impl ScreenLayout {
    pub fn compute(area: Rect, app: &App) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(3),
                Constraint::Min(3),
                Constraint::Length(3),
                Constraint::Length(3),
            ])
            .split(area);

        let input_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(10), Constraint::Length(14)])
            .split(chunks[1]);

        let button_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(16),
                Constraint::Length(2),
                Constraint::Length(14),
                Constraint::Min(0),
            ])
            .split(chunks[3]);

        let list = chunks[2];
        let list_inner = list.inner(Margin::new(1, 1));
        let rows = Self::row_layouts(list_inner, app);
        let dialog = app
            .manager
            .is_clear_confirmation_open()
            .then(|| Self::dialog_layout(area));

        Self {
            header: chunks[0],
            input: input_chunks[0],
            add_button: input_chunks[1],
            list,
            list_inner,
            rows,
            reset_button: button_chunks[1],
            clear_button: button_chunks[3],
            status: chunks[4],
            dialog,
        }
    }

    fn row_layouts(inner: Rect, app: &App) -> Vec<RowLayout> {
        let len = app.manager.items().len();
        let start = app.list_scroll.min(len);
        let visible = (inner.height as usize).min(len - start);
        let count_width = Self::count_width(app);
        // `[+] ` + count + ` [-]`
        let controls_width = count_width + 8;

        (0..visible)
            .map(|offset| {
                let index = start + offset;
                let area = Rect::new(inner.x, inner.y + offset as u16, inner.width, 1);
                let name_width = inner.width.saturating_sub(controls_width + 1);
                let controls_x = area.right().saturating_sub(controls_width).max(area.x);
                let cell = |dx: u16, width: u16| {
                    Rect::new(controls_x.saturating_add(dx), area.y, width, 1).intersection(area)
                };

                RowLayout {
                    index,
                    area,
                    name: Rect::new(area.x, area.y, name_width, 1),
                    increase: cell(0, 3),
                    count: cell(4, count_width),
                    decrease: cell(count_width + 5, 3),
                }
            })
            .collect()
    }

    /// Digits in the largest count, so every row lines up.
    fn count_width(app: &App) -> u16 {
        let widest = app
            .manager
            .items()
            .iter()
            .map(|item| item.count.to_string().len())
            .max()
            .unwrap_or(0);
        (widest as u16).max(MIN_COUNT_WIDTH)
    }

    fn dialog_layout(area: Rect) -> DialogLayout {
        let width = DIALOG_WIDTH.min(area.width);
        let height = DIALOG_HEIGHT.min(area.height);
        let content = Rect::new(
            area.x + (area.width - width) / 2,
            area.y + (area.height - height) / 2,
            width,
            height,
        );

        let inner = content.inner(Margin::new(1, 1));
        let button_y = inner.bottom().saturating_sub(1).max(inner.y);
        let message = Rect::new(inner.x, inner.y, inner.width, button_y.saturating_sub(inner.y));

        let confirm_width = CONFIRM_LABEL.chars().count() as u16;
        let cancel_width = CANCEL_LABEL.chars().count() as u16;
        let total = confirm_width + DIALOG_BUTTON_GAP + cancel_width;
        let start_x = inner.x + inner.width.saturating_sub(total) / 2;
        let button_row = Rect::new(inner.x, button_y, inner.width, inner.height.min(1));

        DialogLayout {
            content,
            message,
            confirm: Rect::new(start_x, button_y, confirm_width, 1).intersection(button_row),
            cancel: Rect::new(
                start_x + confirm_width + DIALOG_BUTTON_GAP,
                button_y,
                cancel_width,
                1,
            )
            .intersection(button_row),
        }
    }

    /// Resolves a terminal cell to the control drawn there.
    ///
    /// While the dialog is open nothing behind it can be hit.
    pub fn hit_test(&self, column: u16, row: u16) -> Option<HitTarget> {
        let position = Position::new(column, row);

        if let Some(dialog) = &self.dialog {
            let target = if dialog.confirm.contains(position) {
                HitTarget::DialogConfirm
            } else if dialog.cancel.contains(position) {
                HitTarget::DialogCancel
            } else if dialog.content.contains(position) {
                HitTarget::DialogContent
            } else {
                HitTarget::Backdrop
            };
            return Some(target);
        }

        if self.add_button.contains(position) {
            return Some(HitTarget::AddButton);
        }
        if self.input.contains(position) {
            return Some(HitTarget::AddBox);
        }
        if self.reset_button.contains(position) {
            return Some(HitTarget::ResetButton);
        }
        if self.clear_button.contains(position) {
            return Some(HitTarget::ClearButton);
        }

        self.rows
            .iter()
            .find(|row| row.area.contains(position))
            .map(|row| {
                if row.increase.contains(position) {
                    HitTarget::Increase(row.index)
                } else if row.decrease.contains(position) {
                    HitTarget::Decrease(row.index)
                } else {
                    HitTarget::Row(row.index)
                }
            })
    }
}
