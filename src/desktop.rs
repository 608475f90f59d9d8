use std::{thread, time::Duration};
use crate::{error::Result, handle::WindowHandle};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VolumeKey {
    Up,
    Down,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Hidden,
    Shown,
}

/// Lookup of windows by class name, one level of the window tree at a time.
pub trait WindowEnumerator {
    /// Finds the next window of `class` under `parent` (top level when
    /// `None`), continuing after `after` in enumeration order.
    fn find_window(
        &self,
        parent: Option<WindowHandle>,
        after: Option<WindowHandle>,
        class: &str,
    ) -> Result<Option<WindowHandle>>;
}

pub trait KeyInjector {
    /// Synthesizes a key-down followed by a key-up.
    fn press_key(&mut self, key: VolumeKey) -> Result<()>;
}

pub trait WindowVisibility {
    fn set_visibility(&mut self, handle: WindowHandle, visibility: Visibility) -> Result<()>;
}

pub trait Pause {
    fn pause(&mut self, duration: Duration) {
        thread::sleep(duration);
    }
}

/// Everything the controller needs from the desktop session.
pub trait Desktop: WindowEnumerator + KeyInjector + WindowVisibility + Pause {}

impl<T> Desktop for T where T: WindowEnumerator + KeyInjector + WindowVisibility + Pause {}
