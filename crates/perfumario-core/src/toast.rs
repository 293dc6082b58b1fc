//! Transient notification state.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastKind {
    Success,
    Error,
    #[default]
    Info,
}

impl ToastKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Info => "info",
        }
    }
}

impl fmt::Display for ToastKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The single toast shown by the app
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToastState {
    pub visible: bool,
    pub message: String,
    pub kind: ToastKind,
}

impl ToastState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&mut self, message: impl Into<String>, kind: ToastKind) {
        self.visible = true;
        self.message = message.into();
        self.kind = kind;
    }

    pub fn show_success(&mut self, message: impl Into<String>) {
        self.show(message, ToastKind::Success);
    }

    pub fn show_error(&mut self, message: impl Into<String>) {
        self.show(message, ToastKind::Error);
    }

    pub fn show_info(&mut self, message: impl Into<String>) {
        self.show(message, ToastKind::Info);
    }

    /// Hide the toast; message and kind stay for the exit animation.
    pub fn hide(&mut self) {
        self.visible = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn show_and_hide() {
        let mut toast = ToastState::new();
        assert!(!toast.visible);
        assert_eq!(toast.kind, ToastKind::Info);

        toast.show_error("Could not delete");
        assert!(toast.visible);
        assert_eq!(toast.kind, ToastKind::Error);

        toast.hide();
        assert!(!toast.visible);
        assert_eq!(toast.message, "Could not delete");
        assert_eq!(toast.kind, ToastKind::Error);

        toast.show_success("Saved");
        assert_eq!((toast.kind, toast.message.as_str()), (ToastKind::Success, "Saved"));
    }
}
