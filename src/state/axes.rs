//! State axes: window focus, window chrome, per-element pointer.

/// Whether the window has input focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Focus {
    #[default]
    Active,
    Inactive,
}

impl Focus {
    /// Whether the window has focus.
    pub fn is_active(self) -> bool {
        self == Focus::Active
    }
}

/// How the window occupies the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Chrome {
    #[default]
    Normal,
    Maximized,
    FullScreen,
}

/// Host window-state bit for a maximized window.
const STATE_MAXIMIZED: u32 = 0x2;
/// Host window-state bit for a full-screen window.
const STATE_FULL_SCREEN: u32 = 0x4;

impl Chrome {
    /// Decode the host's window-state flags. Full screen wins over maximized;
    /// every other bit (minimized, active) reads as normal.
    pub fn from_window_state(bits: u32) -> Self {
        if bits & STATE_FULL_SCREEN != 0 {
            Chrome::FullScreen
        } else if bits & STATE_MAXIMIZED != 0 {
            Chrome::Maximized
        } else {
            Chrome::Normal
        }
    }

    /// Whether the window fills the screen and draws no frame decoration.
    pub fn is_expanded(self) -> bool {
        matches!(self, Chrome::Maximized | Chrome::FullScreen)
    }
}

/// The pointer's relation to one element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Pointer {
    #[default]
    Idle,
    Hovered,
    Pressed,
}

impl Pointer {
    /// Collapse the two pointer flags. A held press outranks hover.
    pub fn from_flags(hovered: bool, pressed: bool) -> Self {
        if pressed {
            Pointer::Pressed
        } else if hovered {
            Pointer::Hovered
        } else {
            Pointer::Idle
        }
    }
}

/// Window-level state: focus × chrome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WindowState {
    pub focus: Focus,
    pub chrome: Chrome,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let state = WindowState::default();
        assert_eq!(state.focus, Focus::Active);
        assert_eq!(state.chrome, Chrome::Normal);
        assert_eq!(Pointer::default(), Pointer::Idle);
    }

    #[test]
    fn chrome_from_window_state() {
        assert_eq!(Chrome::from_window_state(0), Chrome::Normal);
        assert_eq!(Chrome::from_window_state(0x1), Chrome::Normal);
        assert_eq!(Chrome::from_window_state(0x2), Chrome::Maximized);
        assert_eq!(Chrome::from_window_state(0x4), Chrome::FullScreen);
        assert_eq!(Chrome::from_window_state(0x6), Chrome::FullScreen);
        assert_eq!(Chrome::from_window_state(0x8 | 0x2), Chrome::Maximized);
    }

    #[test]
    fn expanded() {
        assert!(!Chrome::Normal.is_expanded());
        assert!(Chrome::Maximized.is_expanded());
        assert!(Chrome::FullScreen.is_expanded());
    }

    #[test]
    fn pointer_from_flags() {
        assert_eq!(Pointer::from_flags(false, false), Pointer::Idle);
        assert_eq!(Pointer::from_flags(true, false), Pointer::Hovered);
        assert_eq!(Pointer::from_flags(true, true), Pointer::Pressed);
        assert_eq!(Pointer::from_flags(false, true), Pointer::Pressed);
    }
}
