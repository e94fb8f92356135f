//! Worksheet rendering (Elm View).

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Tabs, Wrap};
use ratatui::Frame;

use agcfo_core::present::DISCLAIMER;
use agcfo_core::CalculatorKind;

use super::state::TuiApp;

const ACCENT: Color = Color::Green;

/// Split the screen into (tabs, form, results, footer).
pub fn compute_layout(area: Rect) -> (Rect, Rect, Rect, Rect) {
    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // calculator tabs
            Constraint::Min(8),    // form + results
            Constraint::Length(5), // key hints + disclaimer
        ])
        .split(area);

    let main = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(outer[1]);

    (outer[0], main[0], main[1], outer[2])
}

/// Render the full worksheet view.
pub fn render(frame: &mut Frame, app: &TuiApp) {
    let (tabs_area, form_area, results_area, footer_area) = compute_layout(frame.area());
    render_tabs(frame, tabs_area, app);
    render_form(frame, form_area, app);
    render_results(frame, results_area, app);
    render_footer(frame, footer_area);
}

fn render_tabs(frame: &mut Frame, area: Rect, app: &TuiApp) {
    let titles: Vec<Line> = CalculatorKind::ALL
        .iter()
        .map(|k| Line::from(k.display_name()))
        .collect();
    let tabs = Tabs::new(titles)
        .select(app.active_index())
        .block(Block::default().borders(Borders::ALL).title(" MyAgCFO Calculators "))
        .highlight_style(Style::default().fg(ACCENT).add_modifier(Modifier::BOLD));
    frame.render_widget(tabs, area);
}

fn render_form(frame: &mut Frame, area: Rect, app: &TuiApp) {
    let sheet = app.active_sheet();
    let label_width = sheet
        .fields()
        .iter()
        .map(|f| f.label.len() + f.unit.len() + 4)
        .max()
        .unwrap_or(0);

    let lines: Vec<Line> = sheet
        .fields()
        .iter()
        .enumerate()
        .map(|(i, field)| {
            let focused = i == app.focused_field();
            let label = format!(
                "{}{} ({})",
                field.label,
                if field.required { "*" } else { "" },
                field.unit
            );
            let text = sheet.text(i).unwrap_or_default();
            let value = if text.is_empty() && !focused {
                Span::styled(field.placeholder, Style::default().fg(Color::DarkGray))
            } else if focused {
                Span::styled(format!("{}_", text), Style::default().fg(ACCENT))
            } else {
                Span::raw(text.to_string())
            };
            let marker = if focused { "> " } else { "  " };
            let label_style = if focused {
                Style::default().add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            Line::from(vec![
                Span::raw(marker),
                Span::styled(format!("{:<width$}", label, width = label_width), label_style),
                value,
            ])
        })
        .collect();

    let spec = app.focused_spec();
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", sheet.kind().display_name()))
        .title_bottom(format!(" {} e.g. {} ", spec.label, spec.placeholder));
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_results(frame: &mut Frame, area: Rect, app: &TuiApp) {
    let block = Block::default().borders(Borders::ALL).title(" Results ");

    // Incomplete input: the panel stays empty.
    let lines: Vec<Line> = match app.active_sheet().result() {
        Some(output) => {
            let result_lines = output.lines();
            let width = result_lines.iter().map(|l| l.label.len()).max().unwrap_or(0) + 2;
            result_lines
                .iter()
                .map(|l| {
                    let style = if l.emphasis {
                        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
                    } else {
                        Style::default()
                    };
                    Line::from(vec![
                        Span::styled(
                            format!("{:<width$}", format!("{}:", l.label), width = width),
                            style,
                        ),
                        Span::styled(l.formatted(), style),
                    ])
                })
                .collect()
        }
        None => Vec::new(),
    };

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_footer(frame: &mut Frame, area: Rect) {
    let text = vec![
        Line::from(Span::styled(
            "←/→ calculator  ↑/↓ field  0-9 . - type  ⌫ delete  Del clear  x clear all  e examples  q quit",
            Style::default().fg(Color::Cyan),
        )),
        Line::from(Span::styled(DISCLAIMER, Style::default().fg(Color::Yellow))),
    ];
    let paragraph = Paragraph::new(text)
        .block(Block::default().borders(Borders::TOP))
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::keymap::KeyAction;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn screen(app: &TuiApp) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 30)).unwrap();
        terminal.draw(|f| render(f, app)).unwrap();
        let buffer = terminal.backend().buffer();
        let width = buffer.area.width as usize;
        buffer
            .content
            .chunks(width)
            .map(|row| row.iter().map(|c| c.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn layout_fills_area() {
        let area = Rect::new(0, 0, 100, 40);
        let (tabs, form, results, footer) = compute_layout(area);
        assert_eq!(tabs.height, 3);
        assert_eq!(footer.height, 5);
        assert_eq!(form.height, results.height);
        assert_eq!(form.width + results.width, 100);
    }

    #[test]
    fn renders_results_for_complete_input() {
        let app = TuiApp::new(true);
        let text = screen(&app);
        assert!(text.contains("Feedlot Breakeven"));
        assert!(text.contains("Breakeven Price:"));
        assert!(text.contains("$0.62/cwt"));
    }

    #[test]
    fn results_panel_empty_for_incomplete_input() {
        let mut app = TuiApp::new(true);
        app.handle_key_action(KeyAction::ClearField);
        let text = screen(&app);
        assert!(text.contains("Results"));
        assert!(!text.contains("Breakeven Price:"));
        assert!(!text.contains("$0.00"));
    }
}
