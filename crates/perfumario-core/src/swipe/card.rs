//! Swipe gesture card state machine

use std::fmt;

use crate::error::{Error, Result};

/// Default reveal width in layout units.
pub const DEFAULT_SWIPE_THRESHOLD: f32 = 120.0;
/// Default background of the right-hand (edit) action region.
pub const DEFAULT_EDIT_BUTTON_COLOR: &str = "#FF9500";
/// Default background of the left-hand (delete) action region.
pub const DEFAULT_DELETE_BUTTON_COLOR: &str = "#FF3B30";

type Action = Box<dyn FnMut()>;

/// Which action region the committed offset exposes.
///
/// Content moving right (positive offset) uncovers the left region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealSide {
    None,
    /// Delete region
    Left,
    /// Edit region
    Right,
}

/// Interaction phase of a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipePhase {
    Closed,
    DraggingFromClosed,
    RevealedLeft,
    DraggingFromLeft,
    RevealedRight,
    DraggingFromRight,
}

impl SwipePhase {
    /// Whether a drag gesture is in progress.
    #[must_use]
    pub const fn is_dragging(self) -> bool {
        matches!(
            self,
            Self::DraggingFromClosed | Self::DraggingFromLeft | Self::DraggingFromRight
        )
    }
}

/// Live offsets of one card.
///
/// `settled_offset` only changes when a position is committed; committing
/// always resets `drag_offset` to zero.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GestureState {
    drag_offset: f32,
    settled_offset: f32,
}

impl GestureState {
    /// In-progress pointer displacement since the gesture started.
    #[must_use]
    pub const fn drag_offset(&self) -> f32 {
        self.drag_offset
    }

    /// Last committed rest position.
    #[must_use]
    pub const fn settled_offset(&self) -> f32 {
        self.settled_offset
    }

    /// Rendering offset, clamped to `[-threshold, threshold]`.
    #[must_use]
    pub fn effective_offset(&self, threshold: f32) -> f32 {
        (self.drag_offset + self.settled_offset).clamp(-threshold, threshold)
    }

    /// Side exposed by the committed offset.
    #[must_use]
    pub fn reveal_side(&self) -> RevealSide {
        if self.settled_offset > 0.0 {
            RevealSide::Left
        } else if self.settled_offset < 0.0 {
            RevealSide::Right
        } else {
            RevealSide::None
        }
    }

    fn commit(&mut self, settled_offset: f32) {
        self.settled_offset = settled_offset;
        self.drag_offset = 0.0;
    }
}

/// A list row that reveals edit/delete actions when dragged sideways.
pub struct SwipeGestureCard<C> {
    content: C,
    threshold: f32,
    edit_button_color: String,
    delete_button_color: String,
    state: GestureState,
    dragging: bool,
    on_edit: Action,
    on_delete: Action,
}

impl<C> SwipeGestureCard<C> {
    /// Create a card with the default threshold and colors.
    pub fn new(
        content: C,
        on_edit: impl FnMut() + 'static,
        on_delete: impl FnMut() + 'static,
    ) -> Result<Self> {
        Self::builder(content)
            .on_edit(on_edit)
            .on_delete(on_delete)
            .build()
    }

    /// Start building a card around `content`.
    pub fn builder(content: C) -> SwipeGestureCardBuilder<C> {
        SwipeGestureCardBuilder {
            content,
            threshold: DEFAULT_SWIPE_THRESHOLD,
            edit_button_color: DEFAULT_EDIT_BUTTON_COLOR.to_string(),
            delete_button_color: DEFAULT_DELETE_BUTTON_COLOR.to_string(),
            on_edit: None,
            on_delete: None,
        }
    }

    /// Begin a drag gesture from the last committed position.
    pub fn handle_drag_start(&mut self) {
        if !self.dragging {
            self.dragging = true;
            self.state.drag_offset = 0.0;
        }
    }

    /// Track the pointer displacement of the active gesture.
    ///
    /// Never commits a rest position. Non-finite displacements are ignored.
    pub fn handle_drag_update(&mut self, delta_x: f32) {
        if !delta_x.is_finite() {
            return;
        }
        self.dragging = true;
        self.state.drag_offset = delta_x;
    }

    /// Resolve the rest position when the gesture ends.
    pub fn handle_drag_end(&mut self, delta_x: f32) -> RevealSide {
        let total = self.state.settled_offset + delta_x;
        let half = self.threshold / 2.0;

        let next = if total > half {
            self.threshold
        } else if total < -half {
            -self.threshold
        } else {
            0.0
        };

        self.commit(next);
        self.state.reveal_side()
    }

    /// A gesture cancelled by the platform resolves like a normal release.
    pub fn handle_drag_cancel(&mut self, delta_x: f32) -> RevealSide {
        self.handle_drag_end(delta_x)
    }

    /// Snap back to the neutral position from any state.
    pub fn close(&mut self) {
        self.commit(0.0);
    }

    /// Close the row, then run the delete action.
    pub fn press_delete(&mut self) {
        self.close();
        (self.on_delete)();
    }

    /// Close the row, then run the edit action.
    pub fn press_edit(&mut self) {
        self.close();
        (self.on_edit)();
    }

    #[must_use]
    pub fn phase(&self) -> SwipePhase {
        match (self.state.reveal_side(), self.dragging) {
            (RevealSide::None, false) => SwipePhase::Closed,
            (RevealSide::None, true) => SwipePhase::DraggingFromClosed,
            (RevealSide::Left, false) => SwipePhase::RevealedLeft,
            (RevealSide::Left, true) => SwipePhase::DraggingFromLeft,
            (RevealSide::Right, false) => SwipePhase::RevealedRight,
            (RevealSide::Right, true) => SwipePhase::DraggingFromRight,
        }
    }

    #[must_use]
    pub fn effective_offset(&self) -> f32 {
        self.state.effective_offset(self.threshold)
    }

    #[must_use]
    pub fn reveal_side(&self) -> RevealSide {
        self.state.reveal_side()
    }

    /// Whether an action region is exposed or a drag is under way.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.dragging || self.state.reveal_side() != RevealSide::None
    }

    #[must_use]
    pub const fn state(&self) -> GestureState {
        self.state
    }

    #[must_use]
    pub const fn threshold(&self) -> f32 {
        self.threshold
    }

    #[must_use]
    pub fn edit_button_color(&self) -> &str {
        &self.edit_button_color
    }

    #[must_use]
    pub fn delete_button_color(&self) -> &str {
        &self.delete_button_color
    }

    pub const fn content(&self) -> &C {
        &self.content
    }

    pub fn content_mut(&mut self) -> &mut C {
        &mut self.content
    }

    pub fn into_content(self) -> C {
        self.content
    }

    fn commit(&mut self, settled_offset: f32) {
        tracing::trace!(
            from = self.state.settled_offset,
            to = settled_offset,
            "Swipe card settled"
        );
        self.state.commit(settled_offset);
        self.dragging = false;
    }
}

impl<C: fmt::Debug> fmt::Debug for SwipeGestureCard<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SwipeGestureCard")
            .field("content", &self.content)
            .field("threshold", &self.threshold)
            .field("state", &self.state)
            .field("dragging", &self.dragging)
            .finish_non_exhaustive()
    }
}

/// Builder for [`SwipeGestureCard`].
pub struct SwipeGestureCardBuilder<C> {
    content: C,
    threshold: f32,
    edit_button_color: String,
    delete_button_color: String,
    on_edit: Option<Action>,
    on_delete: Option<Action>,
}

impl<C> SwipeGestureCardBuilder<C> {
    /// Reveal width; must be finite and positive.
    #[must_use]
    pub const fn threshold(mut self, threshold: f32) -> Self {
        self.threshold = threshold;
        self
    }

    #[must_use]
    pub fn edit_button_color(mut self, color: impl Into<String>) -> Self {
        self.edit_button_color = color.into();
        self
    }

    #[must_use]
    pub fn delete_button_color(mut self, color: impl Into<String>) -> Self {
        self.delete_button_color = color.into();
        self
    }

    #[must_use]
    pub fn on_edit(mut self, action: impl FnMut() + 'static) -> Self {
        self.on_edit = Some(Box::new(action));
        self
    }

    #[must_use]
    pub fn on_delete(mut self, action: impl FnMut() + 'static) -> Self {
        self.on_delete = Some(Box::new(action));
        self
    }

    /// Validate the configuration and build the card in the closed state.
    pub fn build(self) -> Result<SwipeGestureCard<C>> {
        let threshold = validate_threshold(self.threshold)?;
        Ok(SwipeGestureCard {
            content: self.content,
            threshold,
            edit_button_color: self.edit_button_color,
            delete_button_color: self.delete_button_color,
            state: GestureState::default(),
            dragging: false,
            on_edit: self.on_edit.unwrap_or_else(|| Box::new(|| {})),
            on_delete: self.on_delete.unwrap_or_else(|| Box::new(|| {})),
        })
    }
}

/// Thresholds must be finite and positive.
pub(super) fn validate_threshold(threshold: f32) -> Result<f32> {
    if threshold.is_finite() && threshold > 0.0 {
        Ok(threshold)
    } else {
        Err(Error::Config(format!(
            "swipe threshold must be a positive number, got {threshold}"
        )))
    }
}
