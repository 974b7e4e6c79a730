use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Vertical form regions, top to bottom.
pub struct FormLayout {
    pub prompt: Rect,
    pub continent: Rect,
    pub country: Rect,
    pub error: Rect,
    pub sentence: Rect,
    pub footer: Rect,
}

pub fn form_layout(area: Rect) -> FormLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // prompt + hint
            Constraint::Length(3), // continent trigger
            Constraint::Length(3), // country trigger
            Constraint::Length(1), // warning message
            Constraint::Min(3),    // sentence
            Constraint::Length(1), // key hints
        ])
        .split(area);

    FormLayout {
        prompt: chunks[0],
        continent: chunks[1],
        country: chunks[2],
        error: chunks[3],
        sentence: chunks[4],
        footer: chunks[5],
    }
}

/// Rect for an open menu, anchored directly under its trigger and
/// clipped to the frame. Height covers the options plus borders.
pub fn menu_rect(trigger: Rect, option_count: usize, bounds: Rect) -> Rect {
    let height = (option_count as u16 + 2).max(3);
    let y = trigger.y + trigger.height;
    let max_height = bounds.height.saturating_sub(y.saturating_sub(bounds.y));
    Rect::new(trigger.x, y, trigger.width, height.min(max_height))
}
