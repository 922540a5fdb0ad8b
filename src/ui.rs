use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

use crate::app::{ConfirmApp, SelectApp};

pub fn draw_select(frame: &mut Frame<'_>, app: &SelectApp) {
    let size = frame.size();

    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(3)].as_ref())
        .split(size);

    let mut state = ListState::default();
    if app.total_count() > 0 {
        state.select(Some(app.cursor()));
    }

    let list_items: Vec<ListItem> = app
        .items()
        .iter()
        .map(|branch| {
            let marker = if branch.selected { "[x]" } else { "[ ]" };
            let line = Line::from(vec![
                Span::styled(marker, Style::default().fg(Color::Cyan)),
                Span::raw(" "),
                Span::styled(&branch.name, Style::default().fg(Color::Yellow)),
            ]);
            ListItem::new(line)
        })
        .collect();

    let list = List::new(list_items)
        .block(
            Block::default()
                .title(Span::styled(
                    app.title(),
                    Style::default().add_modifier(Modifier::BOLD),
                ))
                .borders(Borders::ALL),
        )
        .highlight_style(
            Style::default()
                .fg(Color::White)
                .bg(Color::Blue)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    frame.render_stateful_widget(list, vertical[0], &mut state);

    let help_line = "up/down or j/k: move  space: toggle  a: toggle all  enter: continue  q/esc: abort";
    let status_line = format!("{} / {} selected", app.selected_count(), app.total_count());

    let status_block = Paragraph::new(vec![Line::from(help_line), Line::from(status_line)])
        .block(Block::default().title("Status").borders(Borders::ALL));

    frame.render_widget(status_block, vertical[1]);
}

pub fn draw_confirm(frame: &mut Frame<'_>, app: &ConfirmApp) {
    let size = frame.size();

    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(3)].as_ref())
        .split(size);

    let mut lines = vec![Line::from(Span::styled(
        app.title(),
        Style::default().add_modifier(Modifier::BOLD),
    ))];
    if !app.details().is_empty() {
        lines.push(Line::from(""));
        for detail in app.details() {
            lines.push(Line::from(format!("  {detail}")));
        }
    }

    let question = Paragraph::new(lines)
        .block(Block::default().title("Confirm").borders(Borders::ALL));
    frame.render_widget(question, vertical[0]);

    let highlight = Style::default()
        .fg(Color::White)
        .bg(Color::Blue)
        .add_modifier(Modifier::BOLD);
    let plain = Style::default().fg(Color::Gray);

    let (yes_style, no_style) = if app.yes_highlighted() {
        (highlight, plain)
    } else {
        (plain, highlight)
    };

    let buttons = Line::from(vec![
        Span::styled("[ Yes ]", yes_style),
        Span::raw("   "),
        Span::styled("[ No ]", no_style),
    ]);

    let button_block = Paragraph::new(buttons).alignment(Alignment::Center).block(
        Block::default()
            .title("left/right: choose  y/n: answer  enter: accept  q/esc: abort")
            .borders(Borders::ALL),
    );

    frame.render_widget(button_block, vertical[1]);
}
