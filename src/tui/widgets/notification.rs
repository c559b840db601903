//! Toast notification widget
//!
//! Short-lived messages about ledger writes: saved, deleted, or a write that
//! did not reach disk.

use std::time::{Duration, Instant};

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

use crate::tui::theme::Palette;

const DEFAULT_DURATION: Duration = Duration::from_secs(3);
const ERROR_DURATION: Duration = Duration::from_secs(6);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationType {
    Info,
    Success,
    Error,
}

impl NotificationType {
    /// Success follows the income colour and errors the expense colour
    pub fn color(&self, palette: &Palette) -> Color {
        match self {
            Self::Info => palette.muted,
            Self::Success => palette.income,
            Self::Error => palette.expense,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Info => "Info",
            Self::Success => "Saved",
            Self::Error => "Not saved",
        }
    }
}

/// A toast shown in the corner and mirrored in the status bar
#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub notification_type: NotificationType,
    shown_at: Instant,
    pub duration: Duration,
}

impl Notification {
    fn new(message: impl Into<String>, notification_type: NotificationType) -> Self {
        let duration = match notification_type {
            NotificationType::Error => ERROR_DURATION,
            _ => DEFAULT_DURATION,
        };
        Self {
            message: message.into(),
            notification_type,
            shown_at: Instant::now(),
            duration,
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, NotificationType::Info)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, NotificationType::Success)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, NotificationType::Error)
    }

    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    pub fn is_expired(&self) -> bool {
        self.shown_at.elapsed() >= self.duration
    }
}

pub struct NotificationWidget<'a> {
    notification: &'a Notification,
    palette: Palette,
}

impl<'a> NotificationWidget<'a> {
    pub fn new(notification: &'a Notification, palette: Palette) -> Self {
        Self {
            notification,
            palette,
        }
    }
}

impl Widget for NotificationWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let kind = self.notification.notification_type;
        let color = kind.color(&self.palette);

        Clear.render(area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color))
            .title(format!(" {} ", kind.title()))
            .title_style(Style::default().fg(color).add_modifier(Modifier::BOLD))
            .style(self.palette.base());

        Paragraph::new(self.notification.message.as_str())
            .wrap(Wrap { trim: true })
            .block(block)
            .render(area, buf);
    }
}

/// Pending toasts; the oldest live one is shown
#[derive(Debug, Default)]
pub struct NotificationQueue {
    pending: Vec<Notification>,
}

impl NotificationQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, notification: Notification) {
        self.pending.push(notification);
    }

    pub fn remove_expired(&mut self) {
        self.pending.retain(|n| !n.is_expired());
    }

    pub fn current(&self) -> Option<&Notification> {
        self.pending.first()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Theme;

    #[test]
    fn test_notification_creation() {
        let n = Notification::success("Income added");
        assert_eq!(n.message, "Income added");
        assert_eq!(n.notification_type, NotificationType::Success);
        assert!(!n.is_expired());
    }

    #[test]
    fn test_error_lasts_longer() {
        assert!(Notification::error("x").duration > Notification::info("x").duration);
    }

    #[test]
    fn test_colors_follow_palette() {
        let palette = Palette::for_theme(Theme::Dark);
        assert_eq!(NotificationType::Success.color(&palette), palette.income);
        assert_eq!(NotificationType::Error.color(&palette), palette.expense);
    }

    #[test]
    fn test_queue_drops_expired() {
        let mut queue = NotificationQueue::new();
        assert!(queue.is_empty());

        queue.push(Notification::info("gone").with_duration(Duration::ZERO));
        queue.push(Notification::success("stays"));
        assert_eq!(queue.len(), 2);

        queue.remove_expired();
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.current().unwrap().message, "stays");
    }
}
