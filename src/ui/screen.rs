//! Shared screen capability
//!
//! Every non-play screen has the same background, an optional title and a
//! fade-in. `Screen` holds those once; each screen's setup function takes it
//! and adds its own lines and menu items.

use serde::{Deserialize, Serialize};

/// What a menu entry does when selected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MenuAction {
    Play,
    Score,
    Exit,
    Back,
    Continue,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    pub label: String,
    pub action: MenuAction,
}

impl MenuItem {
    fn new(label: &str, action: MenuAction) -> Self {
        Self {
            label: label.to_string(),
            action,
        }
    }
}

/// Background, title and fade shared by all screens
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Screen {
    /// Asset key of the background image
    pub background: String,
    pub title: Option<String>,
    pub fade_ms: u32,
    /// Vertical distance between stacked menu lines
    pub line_height: f32,
}

impl Default for Screen {
    fn default() -> Self {
        Self {
            background: "sky".to_string(),
            title: None,
            fade_ms: 250,
            line_height: 42.0,
        }
    }
}

impl Screen {
    pub fn with_title(&self, title: &str) -> Self {
        Self {
            title: Some(title.to_string()),
            ..self.clone()
        }
    }
}

/// A screen ready to present
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScreenView {
    pub screen: Screen,
    /// Static text lines above the items
    pub lines: Vec<String>,
    pub items: Vec<MenuItem>,
}

impl ScreenView {
    pub fn action_at(&self, index: usize) -> Option<MenuAction> {
        self.items.get(index).map(|item| item.action)
    }

    pub fn offers(&self, action: MenuAction) -> bool {
        self.items.iter().any(|item| item.action == action)
    }
}

pub fn menu_screen(shared: &Screen) -> ScreenView {
    ScreenView {
        screen: shared.clone(),
        lines: Vec::new(),
        items: vec![
            MenuItem::new("Play", MenuAction::Play),
            MenuItem::new("Score", MenuAction::Score),
            MenuItem::new("Exit", MenuAction::Exit),
        ],
    }
}

pub fn score_screen(shared: &Screen, best_score: u32) -> ScreenView {
    ScreenView {
        screen: shared.with_title("Score"),
        lines: vec![format!("Best Score: {best_score}")],
        items: vec![MenuItem::new("Back", MenuAction::Back)],
    }
}

pub fn pause_screen(shared: &Screen) -> ScreenView {
    ScreenView {
        screen: shared.with_title("Paused"),
        lines: Vec::new(),
        items: vec![
            MenuItem::new("Continue", MenuAction::Continue),
            MenuItem::new("Exit", MenuAction::Exit),
        ],
    }
}
