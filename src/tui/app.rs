//! TUI application state and event handling.
//!
//! The `App` struct owns the roster, the current search query, and one
//! visibility flag per employee row. It implements the live filter loop:
//!
//! - **Per-keystroke filtering**: every query edit triggers a full
//!   synchronous re-evaluation of every row before the next event is read.
//!   There is no debouncing and no background work; a new keystroke simply
//!   supersedes the previous result.
//! - **Visibility invariant**: after any evaluation, a row is visible iff
//!   its lowercased display text contains the lowercased query.
//! - **Status messages**: transient feedback for clipboard operations
//! - **Dirty state tracking**: redraw only when state changes
//!
//! Before any filtering every row is visible; the empty query keeps it
//! that way.

use std::time::{Duration, Instant};

use anyhow::Result;
use ratatui::Terminal;
use ratatui::backend::Backend;

use super::events::{Action, poll_event};
use super::rendering::{RenderState, render_ui};
use crate::clipboard::copy_to_clipboard;
use crate::filter::compute_visibility;
use crate::models::Employee;

/// Duration for success status messages (milliseconds)
const STATUS_SUCCESS_DURATION_MS: u64 = 3000;
/// Duration for error status messages (milliseconds)
const STATUS_ERROR_DURATION_MS: u64 = 5000;
/// Maximum query length in characters; further input is ignored
const MAX_QUERY_LEN: usize = 256;

/// Type of status message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageType {
    Success,
    Error,
}

/// Transient status message with expiry
#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub message_type: MessageType,
    pub expires_at: Instant,
}

pub struct App {
    employees: Vec<Employee>,
    // Row text is derived once; the filter re-reads it on every evaluation
    row_texts: Vec<String>,
    visibility: Vec<bool>,
    search_query: String,
    selected_idx: usize,
    should_quit: bool,
    status_message: Option<StatusMessage>,
    needs_redraw: bool,
    last_draw_time: Instant,
}

impl App {
    pub fn new(employees: Vec<Employee>) -> Self {
        let row_texts: Vec<String> = employees.iter().map(|e| e.display_line()).collect();
        // Every row starts visible; filtering only begins with the first keystroke
        let visibility = vec![true; employees.len()];

        Self {
            employees,
            row_texts,
            visibility,
            search_query: String::new(),
            selected_idx: 0,
            should_quit: false,
            status_message: None,
            needs_redraw: true, // Initial draw needed
            last_draw_time: Instant::now(),
        }
    }

    /// Re-evaluate every row against the current query.
    ///
    /// This is the whole filter: one pass, synchronous, run to completion.
    fn refilter(&mut self) {
        self.visibility = compute_visibility(&self.search_query, &self.row_texts);
        self.selected_idx = 0;
        self.needs_redraw = true;
    }

    /// Rows currently visible, in roster order
    fn visible_rows(&self) -> Vec<&Employee> {
        self.employees
            .iter()
            .zip(&self.visibility)
            .filter_map(|(employee, visible)| visible.then_some(employee))
            .collect()
    }

    fn visible_count(&self) -> usize {
        self.visibility.iter().filter(|v| **v).count()
    }

    /// Set a transient status message with automatic expiry
    fn set_status(&mut self, text: impl Into<String>, message_type: MessageType, duration_ms: u64) {
        self.status_message = Some(StatusMessage {
            text: text.into(),
            message_type,
            expires_at: Instant::now() + Duration::from_millis(duration_ms),
        });
        self.needs_redraw = true;
    }

    /// Check and clear expired status messages
    fn check_and_clear_expired_status(&mut self) {
        let should_clear = self
            .status_message
            .as_ref()
            .map(|msg| Instant::now() >= msg.expires_at)
            .unwrap_or(false);
        if should_clear {
            self.status_message = None;
            self.needs_redraw = true;
        }
    }

    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        while !self.should_quit {
            self.check_and_clear_expired_status();

            let visible = self.visible_rows();

            // Draw if dirty or if it's been >100ms (for terminal resize handling)
            let now = Instant::now();
            let elapsed = now.duration_since(self.last_draw_time);
            if self.needs_redraw || elapsed >= Duration::from_millis(100) {
                terminal.draw(|f| {
                    let state = RenderState {
                        search_query: &self.search_query,
                        visible_count: visible.len(),
                        total_count: self.employees.len(),
                        status_message: self.status_message.as_ref(),
                    };
                    render_ui(f, &visible, self.selected_idx, &state);
                })?;
                self.needs_redraw = false;
                self.last_draw_time = now;
            }

            // Handle events; each keystroke is processed to completion here
            // before the next poll
            let action = poll_event(Duration::from_millis(100))?;
            self.handle_action(action);
        }

        Ok(())
    }

    /// Handle a user action (extracted for testing)
    fn handle_action(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::ClearSearch => {
                if self.search_query.is_empty() {
                    self.should_quit = true;
                } else {
                    self.search_query.clear();
                    self.refilter();
                }
            }
            Action::MoveUp => self.move_selection(-1),
            Action::MoveDown => self.move_selection(1),
            Action::PageUp => self.move_selection(-10),
            Action::PageDown => self.move_selection(10),
            Action::UpdateSearch(c) => self.update_search(c),
            Action::DeleteChar => self.delete_char(),
            Action::CopyContact => self.copy_selected_contact(),
            Action::None => {}
        }
    }

    fn copy_selected_contact(&mut self) {
        let visible = self.visible_rows();

        if visible.is_empty() {
            self.set_status("✗ No employee to copy", MessageType::Error, STATUS_ERROR_DURATION_MS);
            return;
        }
        if self.selected_idx >= visible.len() {
            self.set_status("✗ Invalid selection", MessageType::Error, STATUS_ERROR_DURATION_MS);
            return;
        }

        let contact = visible[self.selected_idx].contact_line();
        match copy_to_clipboard(&contact) {
            Ok(()) => {
                self.set_status(
                    "✓ Copied contact",
                    MessageType::Success,
                    STATUS_SUCCESS_DURATION_MS,
                );
            }
            Err(e) => {
                self.set_status(
                    format!("✗ Clipboard error: {}", e),
                    MessageType::Error,
                    STATUS_ERROR_DURATION_MS,
                );
            }
        }
    }

    fn move_selection(&mut self, delta: isize) {
        let total = self.visible_count();
        if total == 0 {
            self.selected_idx = 0;
            return;
        }

        let old_idx = self.selected_idx;
        let new_idx = (self.selected_idx as isize + delta).max(0) as usize;
        self.selected_idx = new_idx.min(total - 1);

        if old_idx != self.selected_idx {
            self.needs_redraw = true;
        }
    }

    fn update_search(&mut self, c: char) {
        // Cap query length in characters, not bytes; extra input is dropped
        // rather than erroring
        if self.search_query.chars().count() < MAX_QUERY_LEN {
            self.search_query.push(c);
            self.refilter();
        }
    }

    fn delete_char(&mut self) {
        if self.search_query.pop().is_some() {
            self.refilter();
        }
    }
}
