use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
    Frame,
};

use crate::interactive::app::{Focus, InteractiveApp};
use crate::interactive::dropdown::DropdownList;
use crate::interactive::layout::{form_layout, menu_rect};

pub fn draw(frame: &mut Frame, app: &InteractiveApp) {
    let layout = form_layout(frame.size());

    draw_prompt(frame, layout.prompt);
    draw_trigger(
        frame,
        layout.continent,
        &app.continent_select,
        app.focus == Focus::ContinentSelect,
        " Continent ",
    );
    draw_trigger(
        frame,
        layout.country,
        &app.country_select,
        app.focus == Focus::CountrySelect,
        " Country ",
    );
    draw_error(frame, layout.error, &app.country_select);
    draw_sentence(frame, layout.sentence, app);
    draw_footer(frame, layout.footer, app);

    // Open menu last, as an overlay under its trigger.
    if app.continent_select.is_open() {
        draw_menu(frame, layout.continent, &app.continent_select);
    } else if app.country_select.is_open() {
        draw_menu(frame, layout.country, &app.country_select);
    }
}

fn draw_prompt(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from("Please select a country you want to go."),
        Line::from(Span::styled(
            "Try to select North Korea",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

fn draw_trigger(
    frame: &mut Frame,
    area: Rect,
    dropdown: &DropdownList,
    focused: bool,
    title: &str,
) {
    let border_style = if dropdown.error {
        Style::default().fg(Color::Red)
    } else if dropdown.disabled {
        Style::default().fg(Color::DarkGray)
    } else if focused {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(border_style);

    let label_style = if dropdown.has_selection() {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let trigger = Paragraph::new(Line::from(vec![
        Span::styled(dropdown.trigger_label().to_string(), label_style),
        Span::styled(
            if dropdown.is_open() { "  ▲" } else { "  ▼" },
            Style::default().fg(Color::DarkGray),
        ),
    ]))
    .block(block);

    frame.render_widget(trigger, area);
}

fn draw_menu(frame: &mut Frame, trigger: Rect, dropdown: &DropdownList) {
    let area = menu_rect(trigger, dropdown.options().len(), frame.size());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let max_visible = inner.height as usize;
    let scroll_offset = if dropdown.highlight() >= max_visible {
        dropdown.highlight() - max_visible + 1
    } else {
        0
    };

    let items: Vec<ListItem> = dropdown
        .options()
        .iter()
        .enumerate()
        .skip(scroll_offset)
        .take(max_visible)
        .map(|(i, option)| {
            let selected = dropdown.selected_value() == Some(option.value.as_str());
            let marker = if selected { "✓" } else { " " };
            let style = if i == dropdown.highlight() {
                Style::default()
                    .fg(Color::Rgb(0, 0, 0))
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else if selected {
                Style::default().fg(Color::Cyan)
            } else {
                Style::default().fg(Color::White)
            };
            ListItem::new(Line::from(Span::styled(
                format!(" {} {} ", marker, option.label),
                style,
            )))
        })
        .collect();

    frame.render_widget(List::new(items), inner);
}

fn draw_error(frame: &mut Frame, area: Rect, dropdown: &DropdownList) {
    if !dropdown.error {
        return;
    }
    let Some(message) = dropdown.error_message.as_deref() else {
        return;
    };
    let warning = Paragraph::new(Line::from(Span::styled(
        format!(" ⚠ {}", message),
        Style::default().fg(Color::Red),
    )));
    frame.render_widget(warning, area);
}

fn draw_sentence(frame: &mut Frame, area: Rect, app: &InteractiveApp) {
    let sentence = app.cascade.sentence();
    if sentence.is_empty() {
        return;
    }
    let paragraph = Paragraph::new(Line::from(Span::styled(
        sentence,
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
    )));
    frame.render_widget(paragraph, area);
}

fn draw_footer(frame: &mut Frame, area: Rect, app: &InteractiveApp) {
    let hints = if app.menu_open() {
        "↑/↓ Navigate  Enter: Select  Esc: Close"
    } else {
        "Tab/↑/↓ Switch field  Enter: Open  q: Quit"
    };
    let footer = Paragraph::new(Line::from(Span::styled(
        hints,
        Style::default().fg(Color::DarkGray),
    )));
    frame.render_widget(footer, area);
}
