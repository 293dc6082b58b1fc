//! Swipeable list rows.
//!
//! A row can be dragged horizontally to reveal one of two fixed action
//! regions behind it: the left region holds "delete", the right region holds
//! "edit". On release the row snaps to closed, left-revealed or
//! right-revealed using the half-threshold rule.
//!
//! The card only tracks numbers. Animating the snap between the previous and
//! the newly committed offset is left to the host renderer, and a gesture that
//! starts mid-animation starts from the last committed offset.

mod card;
mod recognizer;
mod rows;

pub use card::{
    GestureState, RevealSide, SwipeGestureCard, SwipeGestureCardBuilder, SwipePhase,
    DEFAULT_DELETE_BUTTON_COLOR, DEFAULT_EDIT_BUTTON_COLOR, DEFAULT_SWIPE_THRESHOLD,
};
pub use recognizer::{PanDecision, PanRecognizer, ACTIVE_OFFSET_X, FAIL_OFFSET_Y};
pub use rows::{RowAction, SwipeRowSet};
