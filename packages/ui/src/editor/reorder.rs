//! # Block reordering
//!
//! Drag-and-drop is a capability, [`DragAndDrop`], so the gesture recognizer
//! can be swapped without touching the document model. [`SortableBlocks`] is
//! the recognizer the editor uses:
//!
//! ```text
//! Idle --begin_drag--> Dragging { source, target, via }
//! Dragging --update_drag_target / step_target / pointer_moved--> Dragging
//! Dragging --commit_drop--> Idle   (DropOutcome::Reorder or Cancelled)
//! Dragging --cancel_drop--> Idle
//! ```
//!
//! Pointer drags pick the block whose centre is nearest the pointer; keyboard
//! drags step one block at a time and clamp at the ends.

use std::collections::HashMap;

use store::BlockId;

use super::document::{PageDocument, PendingSave};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A block's on-screen box.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}

/// How a drag was started.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragInput {
    Pointer,
    Keyboard,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        source: BlockId,
        target: Option<BlockId>,
        via: DragInput,
    },
}

/// Result of releasing a drag.
#[derive(Clone, Debug, PartialEq)]
pub enum DropOutcome {
    Reorder { from: BlockId, to: BlockId },
    Cancelled,
}

impl DropOutcome {
    /// Move the block in `doc`. `None` for a cancelled drop.
    pub fn apply(&self, doc: &mut PageDocument) -> Option<PendingSave> {
        match self {
            Self::Reorder { from, to } => doc.reorder(from, to),
            Self::Cancelled => None,
        }
    }
}

pub trait DragAndDrop {
    fn begin_drag(&mut self, source: BlockId, via: DragInput);
    fn update_drag_target(&mut self, target: Option<BlockId>);
    fn commit_drop(&mut self) -> DropOutcome;
    fn cancel_drop(&mut self);
}

/// The candidate whose centre is nearest `point`. Ties go to the earliest
/// candidate.
pub fn closest_center<'a, I>(point: Point, candidates: I) -> Option<&'a BlockId>
where
    I: IntoIterator<Item = (&'a BlockId, Rect)>,
{
    let mut best: Option<(&BlockId, f64)> = None;
    for (id, rect) in candidates {
        let c = rect.center();
        let distance = (c.x - point.x).hypot(c.y - point.y);
        match best {
            Some((_, d)) if d <= distance => {}
            _ => best = Some((id, distance)),
        }
    }
    best.map(|(id, _)| id)
}

/// A vertical list of blocks that can be reordered by pointer or keyboard.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SortableBlocks {
    order: Vec<BlockId>,
    rects: HashMap<BlockId, Rect>,
    state: DragState,
}

impl SortableBlocks {
    pub fn new(order: Vec<BlockId>) -> Self {
        Self {
            order,
            ..Self::default()
        }
    }

    /// Replace the document order. Cancels a drag whose source is gone.
    pub fn set_order(&mut self, order: Vec<BlockId>) {
        self.rects.retain(|id, _| order.contains(id));
        self.order = order;
        if let DragState::Dragging { source, .. } = &self.state {
            if !self.order.contains(source) {
                self.state = DragState::Idle;
            }
        }
    }

    /// Record a block's measured bounds. Ids outside the order are ignored.
    pub fn set_rect(&mut self, id: BlockId, rect: Rect) {
        if self.order.contains(&id) {
            self.rects.insert(id, rect);
        }
    }

    pub fn is_measured(&self, id: &BlockId) -> bool {
        self.rects.contains_key(id)
    }

    pub fn state(&self) -> &DragState {
        &self.state
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    pub fn source(&self) -> Option<&BlockId> {
        match &self.state {
            DragState::Dragging { source, .. } => Some(source),
            DragState::Idle => None,
        }
    }

    pub fn target(&self) -> Option<&BlockId> {
        match &self.state {
            DragState::Dragging { target, .. } => target.as_ref(),
            DragState::Idle => None,
        }
    }

    /// Retarget a pointer drag to the block nearest `point`.
    pub fn pointer_moved(&mut self, point: Point) {
        if !self.is_dragging() {
            return;
        }
        let candidates = self
            .order
            .iter()
            .filter_map(|id| self.rects.get(id).map(|r| (id, *r)));
        let nearest = closest_center(point, candidates).cloned();
        if nearest.is_some() {
            self.update_drag_target(nearest);
        }
    }

    /// Move a keyboard drag's target one block, clamped to the list.
    pub fn step_target(&mut self, direction: Direction) {
        let Some(current) = self.target().or(self.source()) else {
            return;
        };
        let Some(index) = self.order.iter().position(|id| id == current) else {
            return;
        };
        let next = match direction {
            Direction::Up => index.saturating_sub(1),
            Direction::Down => (index + 1).min(self.order.len() - 1),
        };
        let target = self.order[next].clone();
        self.update_drag_target(Some(target));
    }
}

impl DragAndDrop for SortableBlocks {
    fn begin_drag(&mut self, source: BlockId, via: DragInput) {
        if !self.order.contains(&source) {
            return;
        }
        self.state = DragState::Dragging {
            target: Some(source.clone()),
            source,
            via,
        };
    }

    fn update_drag_target(&mut self, new_target: Option<BlockId>) {
        if let DragState::Dragging { target, .. } = &mut self.state {
            *target = new_target;
        }
    }

    fn commit_drop(&mut self) -> DropOutcome {
        match std::mem::take(&mut self.state) {
            DragState::Dragging {
                source,
                target: Some(target),
                ..
            } if source != target => DropOutcome::Reorder {
                from: source,
                to: target,
            },
            _ => DropOutcome::Cancelled,
        }
    }

    fn cancel_drop(&mut self) {
        self.state = DragState::Idle;
    }
}
