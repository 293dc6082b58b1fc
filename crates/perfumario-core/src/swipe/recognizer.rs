//! Horizontal pan activation.
//!
//! Decides whether pointer movement over a row is a horizontal swipe, or a
//! vertical scroll that the row must yield to. Short accidental touches stay
//! pending and never move the row.

/// Horizontal travel (logical px) that activates a swipe.
pub const ACTIVE_OFFSET_X: f32 = 20.0;
/// Vertical travel (logical px) that fails a not-yet-active swipe.
pub const FAIL_OFFSET_Y: f32 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanDecision {
    /// Not enough movement to decide yet
    Pending,
    /// Horizontal swipe in progress
    Active,
    /// Yielded to another gesture (vertical scroll)
    Failed,
}

/// Tracks one pointer from press to release.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanRecognizer {
    active_offset_x: f32,
    fail_offset_y: f32,
    decision: PanDecision,
}

impl Default for PanRecognizer {
    fn default() -> Self {
        Self::new(ACTIVE_OFFSET_X, FAIL_OFFSET_Y)
    }
}

impl PanRecognizer {
    #[must_use]
    pub const fn new(active_offset_x: f32, fail_offset_y: f32) -> Self {
        Self {
            active_offset_x,
            fail_offset_y,
            decision: PanDecision::Pending,
        }
    }

    /// Feed the pointer translation since press.
    ///
    /// Once active or failed the decision sticks until [`Self::reset`].
    pub fn update(&mut self, translation_x: f32, translation_y: f32) -> PanDecision {
        if self.decision == PanDecision::Pending {
            if translation_y.abs() > self.fail_offset_y {
                self.decision = PanDecision::Failed;
            } else if translation_x.abs() > self.active_offset_x {
                self.decision = PanDecision::Active;
            }
        }
        self.decision
    }

    #[must_use]
    pub const fn decision(&self) -> PanDecision {
        self.decision
    }

    /// Forget the current pointer.
    pub fn reset(&mut self) {
        self.decision = PanDecision::Pending;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_movement_stays_pending() {
        let mut recognizer = PanRecognizer::default();
        assert_eq!(recognizer.update(15.0, 5.0), PanDecision::Pending);
        assert_eq!(recognizer.update(-20.0, -10.0), PanDecision::Pending);
    }

    #[test]
    fn horizontal_travel_activates() {
        let mut recognizer = PanRecognizer::default();
        assert_eq!(recognizer.update(-21.0, 3.0), PanDecision::Active);
        // Vertical drift after activation keeps the swipe
        assert_eq!(recognizer.update(-60.0, 40.0), PanDecision::Active);
    }

    #[test]
    fn vertical_travel_fails_before_activation() {
        let mut recognizer = PanRecognizer::default();
        assert_eq!(recognizer.update(8.0, 12.0), PanDecision::Failed);
        assert_eq!(recognizer.update(80.0, 0.0), PanDecision::Failed);

        recognizer.reset();
        assert_eq!(recognizer.decision(), PanDecision::Pending);
    }
}
