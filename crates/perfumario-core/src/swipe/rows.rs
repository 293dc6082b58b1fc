//! A list of swipeable rows where at most one row is open at a time.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use super::card::{validate_threshold, RevealSide, SwipeGestureCard, DEFAULT_SWIPE_THRESHOLD};
use crate::error::Result;

/// An action button pressed on a row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowAction<K> {
    Edit(K),
    Delete(K),
}

type ActionQueue<K> = Rc<RefCell<VecDeque<RowAction<K>>>>;

/// Owns one [`SwipeGestureCard`] per row key.
///
/// Each card keeps its own gesture state; the set only closes the other rows
/// when a new drag begins and queues pressed actions for the screen to handle.
pub struct SwipeRowSet<K, C> {
    rows: Vec<(K, SwipeGestureCard<C>)>,
    threshold: f32,
    actions: ActionQueue<K>,
}

impl<K, C> SwipeRowSet<K, C>
where
    K: Clone + PartialEq + 'static,
{
    pub fn new(threshold: f32) -> Result<Self> {
        Ok(Self {
            rows: Vec::new(),
            threshold: validate_threshold(threshold)?,
            actions: Rc::new(RefCell::new(VecDeque::new())),
        })
    }

    /// Mount a row, replacing any existing row with the same key.
    pub fn insert(&mut self, key: K, content: C) -> Result<()> {
        let card = self.build_card(key.clone(), content)?;
        if let Some(slot) = self.rows.iter_mut().find(|(existing, _)| *existing == key) {
            slot.1 = card;
        } else {
            self.rows.push((key, card));
        }
        Ok(())
    }

    /// Unmount a row, returning its content.
    pub fn remove(&mut self, key: &K) -> Option<C> {
        let index = self.rows.iter().position(|(existing, _)| existing == key)?;
        Some(self.rows.remove(index).1.into_content())
    }

    /// Replace the row list with `items`, in order.
    ///
    /// Rows whose key survives keep their gesture state; new keys get a fresh
    /// closed card; missing keys are unmounted.
    pub fn sync(&mut self, items: impl IntoIterator<Item = (K, C)>) -> Result<()> {
        let mut previous = std::mem::take(&mut self.rows);
        for (key, content) in items {
            if let Some(index) = previous.iter().position(|(existing, _)| *existing == key) {
                let (key, mut card) = previous.swap_remove(index);
                *card.content_mut() = content;
                self.rows.push((key, card));
            } else {
                let card = self.build_card(key.clone(), content)?;
                self.rows.push((key, card));
            }
        }
        Ok(())
    }

    pub fn get(&self, key: &K) -> Option<&SwipeGestureCard<C>> {
        self.rows
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, card)| card)
    }

    /// Begin dragging `key`, closing every other row.
    pub fn drag_start(&mut self, key: &K) -> bool {
        self.close_others(key);
        self.card_mut(key)
            .map(SwipeGestureCard::handle_drag_start)
            .is_some()
    }

    pub fn drag_update(&mut self, key: &K, delta_x: f32) -> bool {
        let starting = self
            .get(key)
            .is_some_and(|card| !card.phase().is_dragging());
        if starting {
            self.close_others(key);
        }
        self.card_mut(key)
            .map(|card| card.handle_drag_update(delta_x))
            .is_some()
    }

    pub fn drag_end(&mut self, key: &K, delta_x: f32) -> Option<RevealSide> {
        self.card_mut(key).map(|card| card.handle_drag_end(delta_x))
    }

    pub fn press_edit(&mut self, key: &K) -> bool {
        self.card_mut(key)
            .map(SwipeGestureCard::press_edit)
            .is_some()
    }

    pub fn press_delete(&mut self, key: &K) -> bool {
        self.card_mut(key)
            .map(SwipeGestureCard::press_delete)
            .is_some()
    }

    pub fn close_all(&mut self) {
        for (_, card) in &mut self.rows {
            card.close();
        }
    }

    /// Key of the row currently open or being dragged.
    pub fn open_key(&self) -> Option<&K> {
        self.rows
            .iter()
            .find(|(_, card)| card.is_open())
            .map(|(key, _)| key)
    }

    /// Take every action pressed since the last call, oldest first.
    pub fn drain_actions(&mut self) -> Vec<RowAction<K>> {
        self.actions.borrow_mut().drain(..).collect()
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.rows.iter().map(|(key, _)| key)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn card_mut(&mut self, key: &K) -> Option<&mut SwipeGestureCard<C>> {
        self.rows
            .iter_mut()
            .find(|(existing, _)| existing == key)
            .map(|(_, card)| card)
    }

    fn close_others(&mut self, key: &K) {
        for (existing, card) in &mut self.rows {
            if existing != key && card.is_open() {
                card.close();
            }
        }
    }

    fn build_card(&self, key: K, content: C) -> Result<SwipeGestureCard<C>> {
        let edit_queue = Rc::clone(&self.actions);
        let delete_queue = Rc::clone(&self.actions);
        let edit_key = key.clone();
        let delete_key = key;

        SwipeGestureCard::builder(content)
            .threshold(self.threshold)
            .on_edit(move || {
                edit_queue
                    .borrow_mut()
                    .push_back(RowAction::Edit(edit_key.clone()));
            })
            .on_delete(move || {
                delete_queue
                    .borrow_mut()
                    .push_back(RowAction::Delete(delete_key.clone()));
            })
            .build()
    }
}

impl<K, C> Default for SwipeRowSet<K, C> {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            threshold: DEFAULT_SWIPE_THRESHOLD,
            actions: Rc::new(RefCell::new(VecDeque::new())),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::error::Error;
    use crate::swipe::SwipePhase;

    fn rows() -> SwipeRowSet<String, &'static str> {
        let mut rows = SwipeRowSet::new(DEFAULT_SWIPE_THRESHOLD).unwrap();
        rows.sync([
            ("a".to_string(), "Sauvage"),
            ("b".to_string(), "Light Blue"),
            ("c".to_string(), "Aventus"),
        ])
        .unwrap();
        rows
    }

    #[test]
    fn rejects_invalid_threshold() {
        for threshold in [0.0, -1.0, f32::NAN] {
            assert!(matches!(
                SwipeRowSet::<String, ()>::new(threshold),
                Err(Error::Config(_))
            ));
        }
        assert_eq!(SwipeRowSet::<String, ()>::new(80.0).unwrap().threshold, 80.0);
    }

    #[test]
    fn drag_start_closes_other_rows_and_marks_dragging() {
        let mut rows = rows();
        let a = "a".to_string();
        let b = "b".to_string();

        rows.drag_end(&a, -90.0);
        assert_eq!(rows.get(&a).unwrap().phase(), SwipePhase::RevealedRight);

        assert!(rows.drag_start(&b));
        assert_eq!(rows.get(&a).unwrap().phase(), SwipePhase::Closed);
        assert_eq!(rows.get(&b).unwrap().phase(), SwipePhase::DraggingFromClosed);
        assert_eq!(rows.open_key(), Some(&b));

        rows.drag_update(&b, 90.0);
        assert_eq!(rows.drag_end(&b, 90.0), Some(RevealSide::Left));
        assert_eq!(rows.open_key(), Some(&b));

        assert!(!rows.drag_start(&"missing".to_string()));
        assert_eq!(rows.open_key(), Some(&b));
    }

    #[test]
    fn starting_a_drag_closes_other_rows() {
        let mut rows = rows();
        let a = "a".to_string();
        let b = "b".to_string();

        rows.drag_end(&a, 90.0);
        assert_eq!(rows.open_key(), Some(&a));

        rows.drag_update(&b, -30.0);
        assert_eq!(rows.get(&a).unwrap().state().settled_offset(), 0.0);
        rows.drag_end(&b, -70.0);
        assert_eq!(rows.open_key(), Some(&b));
        assert_eq!(rows.get(&b).unwrap().reveal_side(), RevealSide::Right);
    }

    #[test]
    fn pressed_actions_are_queued_in_order() {
        let mut rows = rows();
        let a = "a".to_string();
        let c = "c".to_string();

        rows.drag_end(&a, -90.0);
        assert!(rows.press_edit(&a));
        rows.drag_end(&c, 90.0);
        assert!(rows.press_delete(&c));
        assert!(!rows.press_delete(&"missing".to_string()));

        assert_eq!(
            rows.drain_actions(),
            vec![RowAction::Edit(a), RowAction::Delete(c)]
        );
        assert!(rows.drain_actions().is_empty());
        assert_eq!(rows.open_key(), None);
    }

    #[test]
    fn sync_keeps_state_for_surviving_rows() {
        let mut rows = rows();
        let b = "b".to_string();
        rows.drag_end(&b, 100.0);

        rows.sync([("b".to_string(), "Light Blue Intense"), ("d".to_string(), "Oud")])
            .unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(
            rows.keys().cloned().collect::<Vec<_>>(),
            vec!["b".to_string(), "d".to_string()]
        );
        let card = rows.get(&b).unwrap();
        assert_eq!(*card.content(), "Light Blue Intense");
        assert_eq!(card.reveal_side(), RevealSide::Left);
    }

    #[test]
    fn removed_row_returns_content() {
        let mut rows = rows();
        assert_eq!(rows.remove(&"c".to_string()), Some("Aventus"));
        assert_eq!(rows.remove(&"c".to_string()), None);
        rows.close_all();
        assert!(!rows.is_empty());
    }
}
