use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{prelude::*, widgets::*};
use tracing::{debug, info};

use super::{Component, row::CounterRow};
use crate::{
    action::Action,
    config::Config,
    counters::CounterBoard,
};

/// The counter screen. Owns the counter collection for as long as it is
/// mounted, turns key presses into board actions, and applies those actions
/// when they come back through the dispatch loop.
pub struct Board {
    counters: CounterBoard,
    selected_index: usize,
    scroll_offset: usize,
    visible_height: usize,
    scroll_state: ScrollbarState,
    config: Config,
}

impl Board {
    pub fn new() -> Self {
        Self {
            counters: CounterBoard::seeded(),
            selected_index: 0,
            scroll_offset: 0,
            visible_height: 10,
            scroll_state: ScrollbarState::default(),
            config: Config::default(),
        }
    }

    /// Id of the counter the selection currently sits on.
    fn selected_id(&self) -> Option<u64> {
        self.counters
            .counters()
            .get(self.selected_index)
            .map(|counter| counter.id)
    }

    fn select_next(&mut self) -> bool {
        if self.selected_index + 1 < self.counters.len() {
            self.selected_index += 1;
            true
        } else {
            false
        }
    }

    fn select_prev(&mut self) -> bool {
        if self.selected_index > 0 {
            self.selected_index -= 1;
            true
        } else {
            false
        }
    }

    fn select_first(&mut self) -> bool {
        let moved = self.selected_index != 0;
        self.selected_index = 0;
        moved
    }

    fn select_last(&mut self) -> bool {
        let last = self.counters.len().saturating_sub(1);
        let moved = self.selected_index != last;
        self.selected_index = last;
        moved
    }

    /// Keep the selection inside the collection after removals.
    fn clamp_selection(&mut self) {
        let last = self.counters.len().saturating_sub(1);
        if self.selected_index > last {
            self.selected_index = last;
        }
    }

    /// Keep the selected row inside the visible window.
    fn follow_selection(&mut self) {
        if self.visible_height == 0 {
            return;
        }
        if self.selected_index < self.scroll_offset {
            self.scroll_offset = self.selected_index;
        }
        let last_visible = self.scroll_offset + self.visible_height.saturating_sub(1);
        if self.selected_index > last_visible {
            self.scroll_offset = self
                .selected_index
                .saturating_sub(self.visible_height.saturating_sub(1));
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for Board {
    fn component_will_mount(
        &mut self,
        _tx: tokio::sync::mpsc::UnboundedSender<Action>,
        config: Config,
    ) -> color_eyre::Result<()> {
        info!(
            "Board::component_will_mount - seeded with {} counters",
            self.counters.len()
        );
        self.config = config;
        Ok(())
    }

    fn component_did_mount(&mut self, area: ratatui::layout::Size) -> color_eyre::Result<()> {
        info!("Board::component_did_mount - mounted with area: {:?}", area);
        Ok(())
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> color_eyre::Result<Option<Action>> {
        // Leave modified keys to the global keymap (quit, suspend).
        if key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
        {
            return Ok(None);
        }
        debug!("Board received key: {:?}", key.code);

        let action = match key.code {
            KeyCode::Down | KeyCode::Char('j') => self.select_next().then_some(Action::Render),
            KeyCode::Up | KeyCode::Char('k') => self.select_prev().then_some(Action::Render),
            KeyCode::Home => self.select_first().then_some(Action::Render),
            KeyCode::End => self.select_last().then_some(Action::Render),
            KeyCode::Char('a') => Some(Action::AddCounter),
            KeyCode::Char('+') | KeyCode::Char('=') => self.selected_id().map(Action::Increment),
            KeyCode::Char('-') => self.selected_id().map(Action::Decrement),
            KeyCode::Char('x') | KeyCode::Delete | KeyCode::Backspace => {
                self.selected_id().map(Action::RemoveCounter)
            }
            _ => None,
        };
        Ok(action)
    }

    fn should_component_update(&mut self, action: &Action) -> bool {
        matches!(
            action,
            Action::AddCounter
                | Action::Increment(_)
                | Action::Decrement(_)
                | Action::RemoveCounter(_)
        )
    }

    fn component_did_update(&mut self, action: Action) -> color_eyre::Result<Option<Action>> {
        match action {
            Action::AddCounter => {
                let id = self.counters.add();
                info!("Board::component_did_update - added counter {}", id);
                // Move the selection onto the new row so +/-/x target it.
                self.select_last();
            }
            Action::Increment(id) => self.counters.increment(id),
            Action::Decrement(id) => self.counters.decrement(id),
            Action::RemoveCounter(id) => {
                if self.counters.remove(id) {
                    info!("Board::component_did_update - removed counter {}", id);
                }
                self.clamp_selection();
            }
            _ => return Ok(None),
        }
        Ok(Some(Action::Render))
    }

    fn component_will_unmount(&mut self) -> color_eyre::Result<()> {
        info!(
            "Board::component_will_unmount - dropping {} counters",
            self.counters.len()
        );
        Ok(())
    }

    fn render(&mut self, frame: &mut Frame, area: Rect) -> color_eyre::Result<()> {
        let [header, body, footer] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(area);

        let title = Paragraph::new(Span::styled(
            "Multi Counter",
            Style::default().add_modifier(Modifier::BOLD),
        ));
        frame.render_widget(title, header);

        // Update visible height based on the list area (subtract 2 for borders).
        self.visible_height = body.height.saturating_sub(2) as usize;
        self.clamp_selection();
        self.follow_selection();

        let items: Vec<ListItem> = if self.counters.is_empty() {
            vec![ListItem::new(Line::from(Span::styled(
                "No counters. Press a to add one.",
                Style::default().fg(Color::Gray),
            )))]
        } else {
            self.counters
                .counters()
                .iter()
                .enumerate()
                .map(|(idx, counter)| {
                    ListItem::from(CounterRow::new(counter, idx == self.selected_index))
                })
                .collect()
        };

        self.scroll_state = self
            .scroll_state
            .content_length(self.counters.len().saturating_sub(self.visible_height))
            .position(self.scroll_offset);

        let list = List::new(items)
            .block(
                Block::default()
                    .title(format!("Counters ({})", self.counters.len()))
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan)),
            )
            .style(Style::default().fg(Color::White))
            .scroll_padding(1);

        let mut list_state = ListState::default()
            .with_selected((!self.counters.is_empty()).then_some(self.selected_index))
            .with_offset(self.scroll_offset);
        frame.render_stateful_widget(list, body, &mut list_state);

        let scrollbar = Scrollbar::default()
            .orientation(ScrollbarOrientation::VerticalRight)
            .begin_symbol(Some("↑"))
            .end_symbol(Some("↓"));
        frame.render_stateful_widget(
            scrollbar,
            body.inner(Margin {
                vertical: 1,
                horizontal: 0,
            }),
            &mut self.scroll_state,
        );

        let legend = Paragraph::new(Span::styled(
            "a add | +/- adjust | x remove | up/down select | q quit",
            Style::default().fg(Color::DarkGray),
        ));
        frame.render_widget(legend, footer);

        Ok(())
    }
}
