use ratatui::{prelude::*, widgets::ListItem};

use crate::counters::Counter;

/// Stateless presentation of one counter: name, current value, and the
/// control legend. The board builds one of these per visible record each
/// render pass; rows hold no state of their own.
pub struct CounterRow<'a> {
    counter: &'a Counter,
    selected: bool,
}

impl<'a> CounterRow<'a> {
    pub fn new(counter: &'a Counter, selected: bool) -> Self {
        Self { counter, selected }
    }

    fn line(&self) -> Line<'a> {
        Line::from(vec![
            Span::styled(
                self.counter.name.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(
                format!("Value: {}", self.counter.value),
                Style::default().fg(Color::Gray),
            ),
            Span::raw("  "),
            Span::styled("[-] [+] [x]", Style::default().fg(Color::DarkGray)),
        ])
    }
}

impl<'a> From<CounterRow<'a>> for ListItem<'a> {
    fn from(row: CounterRow<'a>) -> Self {
        let style = if row.selected {
            Style::default().bg(Color::DarkGray)
        } else {
            Style::default()
        };
        ListItem::new(row.line()).style(style)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn text_of(line: &Line) -> String {
        line.spans.iter().map(|span| span.content.as_ref()).collect()
    }

    #[test]
    fn row_shows_name_value_and_controls() {
        let counter = Counter {
            id: 2,
            name: "Counter_3".into(),
            value: -7,
        };
        let line = CounterRow::new(&counter, false).line();
        assert_eq!(text_of(&line), "Counter_3  Value: -7  [-] [+] [x]");
    }

    #[test]
    fn selection_only_changes_the_style() {
        let counter = Counter {
            id: 0,
            name: "Counter_1".into(),
            value: 0,
        };
        let plain = CounterRow::new(&counter, false).line();
        let selected = CounterRow::new(&counter, true).line();
        assert_eq!(text_of(&plain), text_of(&selected));
    }
}
