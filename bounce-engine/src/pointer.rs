use crate::Viewport;

use glam::DVec2;

/// Latest pointer location along with the one it replaced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerState {
    pub pos: DVec2,
    pub prev: DVec2,
}

impl PointerState {
    /// A pointer resting at `pos`, it has not moved yet
    pub fn at(pos: DVec2) -> Self {
        Self { pos, prev: pos }
    }

    pub fn centered(viewport: Viewport) -> Self {
        Self::at(viewport.center())
    }

    pub fn move_to(&mut self, pos: DVec2) {
        self.prev = self.pos;
        self.pos = pos;
    }

    /// How far the pointer travelled on its last move
    pub fn displacement(&self) -> DVec2 {
        self.pos - self.prev
    }
}
