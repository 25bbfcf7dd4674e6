pub const THEME_ATTRIBUTE: &str = "data-theme";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Caption for the toggle button: the mode a click switches to.
    pub fn toggle_caption(self) -> &'static str {
        match self {
            Self::Light => "Dark",
            Self::Dark => "Light",
        }
    }
}

/// Receiver of the root-level theme attribute. The document root is the only
/// production implementation.
pub trait ThemeTarget {
    fn set_theme_attribute(&self, value: &str);
}

pub struct ThemeController<T: ThemeTarget> {
    mode: ThemeMode,
    target: T,
}

impl<T: ThemeTarget> ThemeController<T> {
    pub fn new(target: T) -> Self {
        let controller = Self {
            mode: ThemeMode::default(),
            target,
        };
        controller.mirror();
        controller
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    pub fn toggle(&mut self) -> ThemeMode {
        self.mode = self.mode.toggled();
        self.mirror();
        log::debug!("theme switched to {}", self.mode.as_str());
        self.mode
    }

    fn mirror(&self) {
        self.target.set_theme_attribute(self.mode.as_str());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{cell::RefCell, rc::Rc};

    #[derive(Clone, Default)]
    struct RecordingRoot {
        writes: Rc<RefCell<Vec<String>>>,
    }

    impl RecordingRoot {
        fn last(&self) -> Option<String> {
            self.writes.borrow().last().cloned()
        }
    }

    impl ThemeTarget for RecordingRoot {
        fn set_theme_attribute(&self, value: &str) {
            self.writes.borrow_mut().push(value.to_string());
        }
    }

    #[test]
    fn mount_starts_light_and_mirrors_attribute() {
        let root = RecordingRoot::default();
        let controller = ThemeController::new(root.clone());

        assert_eq!(controller.mode(), ThemeMode::Light);
        assert_eq!(root.last().as_deref(), Some("light"));
    }

    #[test]
    fn single_toggle_switches_to_dark() {
        let root = RecordingRoot::default();
        let mut controller = ThemeController::new(root.clone());

        assert_eq!(controller.toggle(), ThemeMode::Dark);
        assert_eq!(root.last().as_deref(), Some("dark"));
    }

    #[test]
    fn toggle_parity_decides_mode() {
        let root = RecordingRoot::default();
        let mut controller = ThemeController::new(root.clone());

        for count in 1..=9 {
            controller.toggle();
            let expected = if count % 2 == 0 {
                ThemeMode::Light
            } else {
                ThemeMode::Dark
            };
            assert_eq!(controller.mode(), expected, "after {count} toggles");
            assert_eq!(root.last().as_deref(), Some(expected.as_str()));
        }

        // One write at mount plus one per toggle.
        assert_eq!(root.writes.borrow().len(), 10);
    }

    #[test]
    fn mode_is_readable_before_any_toggle_and_follows_it() {
        let root = RecordingRoot::default();
        let mut controller = ThemeController::new(root.clone());

        assert_eq!(controller.mode().toggle_caption(), "Dark");
        let returned = controller.toggle();
        assert_eq!(controller.mode(), returned);
        assert_eq!(root.last().as_deref(), Some(controller.mode().as_str()));
    }

    #[test]
    fn toggle_caption_names_the_next_mode() {
        assert_eq!(ThemeMode::Light.toggle_caption(), "Dark");
        assert_eq!(ThemeMode::Dark.toggle_caption(), "Light");
    }
}
