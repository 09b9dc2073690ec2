use crossterm::event::KeyCode;
use ratatui::layout::Rect;

use crate::tui::element::FocusId;

/// A focusable element discovered during rendering
pub struct FocusableInfo<Msg> {
    pub id: FocusId,
    pub rect: Rect,
    /// Key handler for the element while focused
    pub on_key: Box<dyn Fn(KeyCode) -> Option<Msg> + Send>,
}

/// Focusable elements in render order, rebuilt every frame
pub struct FocusRegistry<Msg> {
    focusables: Vec<FocusableInfo<Msg>>,
}

impl<Msg> FocusRegistry<Msg> {
    pub fn new() -> Self {
        Self {
            focusables: Vec::new(),
        }
    }

    pub fn register(&mut self, info: FocusableInfo<Msg>) {
        self.focusables.push(info);
    }

    pub fn clear(&mut self) {
        self.focusables.clear();
    }

    pub fn contains(&self, id: &FocusId) -> bool {
        self.focusables.iter().any(|f| &f.id == id)
    }

    pub fn find(&self, id: &FocusId) -> Option<&FocusableInfo<Msg>> {
        self.focusables.iter().find(|f| &f.id == id)
    }

    /// Topmost focusable under the given position
    pub fn find_at_position(&self, x: u16, y: u16) -> Option<FocusId> {
        self.focusables
            .iter()
            .rev()
            .find(|f| {
                x >= f.rect.x
                    && x < f.rect.x + f.rect.width
                    && y >= f.rect.y
                    && y < f.rect.y + f.rect.height
            })
            .map(|f| f.id.clone())
    }

    /// Focusable IDs in render order, for Tab cycling
    pub fn ids(&self) -> Vec<FocusId> {
        self.focusables.iter().map(|f| f.id.clone()).collect()
    }
}

impl<Msg> Default for FocusRegistry<Msg> {
    fn default() -> Self {
        Self::new()
    }
}
