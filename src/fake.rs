use std::{cell::RefCell, io, time::Duration};
use crate::{
    desktop::*,
    error::{OsdError, Result},
    handle::WindowHandle,
    locator::{CONTENT_CLASS, HOST_CLASS},
};

pub const OSD_HOST: WindowHandle = WindowHandle(0x100);
pub const OSD_CONTENT: WindowHandle = WindowHandle(0x101);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    KeyPress(VolumeKey),
    Pause(Duration),
    SetVisibility(WindowHandle, Visibility),
}

#[derive(Debug, Clone)]
struct FakeWindow {
    handle: WindowHandle,
    parent: Option<WindowHandle>,
    class: String,
}

/// In-memory window tree that records every side effect.
#[derive(Debug, Default)]
pub struct FakeDesktop {
    windows: Vec<FakeWindow>,
    pending: Vec<FakeWindow>,
    spawn_after: u32,
    volume_down_presses: u32,
    fail_enumeration: bool,
    vanishing: Vec<WindowHandle>,
    destroyed: RefCell<Vec<WindowHandle>>,
    pub events: Vec<Event>,
}

impl FakeDesktop {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_window(&mut self, handle: WindowHandle, parent: Option<WindowHandle>, class: &str) {
        self.windows.push(FakeWindow { handle, parent, class: class.to_owned() });
    }

    /// The OSD appears once `nudges` volume nudges have been injected.
    pub fn spawn_osd_after(&mut self, nudges: u32) {
        self.pending = vec![
            FakeWindow { handle: OSD_HOST, parent: None, class: HOST_CLASS.to_owned() },
            FakeWindow { handle: OSD_CONTENT, parent: Some(OSD_HOST), class: CONTENT_CLASS.to_owned() },
        ];
        self.spawn_after = nudges;
        self.spawn_if_due();
    }

    /// `handle` is destroyed right after a top-level lookup returns it. It
    /// keeps its place in enumeration order but its children are gone.
    pub fn vanish_after_lookup(&mut self, handle: WindowHandle) {
        self.vanishing.push(handle);
    }

    pub fn fail_enumeration(&mut self) {
        self.fail_enumeration = true;
    }

    pub fn nudges(&self) -> usize {
        self.events
            .windows(2)
            .filter(|w| {
                w[0] == Event::KeyPress(VolumeKey::Up) && w[1] == Event::KeyPress(VolumeKey::Down)
            })
            .count()
    }

    pub fn pauses(&self) -> Vec<Duration> {
        self.events
            .iter()
            .filter_map(|e| match e {
                Event::Pause(d) => Some(*d),
                _ => None,
            })
            .collect()
    }

    pub fn visibility_calls(&self) -> Vec<(WindowHandle, Visibility)> {
        self.events
            .iter()
            .filter_map(|e| match e {
                Event::SetVisibility(h, v) => Some((*h, *v)),
                _ => None,
            })
            .collect()
    }

    fn spawn_if_due(&mut self) {
        if !self.pending.is_empty() && self.volume_down_presses >= self.spawn_after {
            self.windows.append(&mut self.pending);
        }
    }
}

impl WindowEnumerator for FakeDesktop {
    fn find_window(
        &self,
        parent: Option<WindowHandle>,
        after: Option<WindowHandle>,
        class: &str,
    ) -> Result<Option<WindowHandle>> {
        if self.fail_enumeration {
            return Err(OsdError::os("FindWindowExW", io::Error::other("enumeration failed")));
        }
        let destroyed = self.destroyed.borrow().clone();
        if parent.is_some_and(|p| destroyed.contains(&p)) {
            return Ok(None);
        }
        let mut siblings = self.windows.iter().filter(|w| w.parent == parent);
        if let Some(after) = after {
            siblings.by_ref().find(|w| w.handle == after);
        }
        let found = siblings
            .filter(|w| !destroyed.contains(&w.handle))
            .find(|w| w.class == class)
            .map(|w| w.handle);
        if let Some(handle) = found.filter(|h| parent.is_none() && self.vanishing.contains(h)) {
            self.destroyed.borrow_mut().push(handle);
        }
        Ok(found)
    }
}

impl KeyInjector for FakeDesktop {
    fn press_key(&mut self, key: VolumeKey) -> Result<()> {
        self.events.push(Event::KeyPress(key));
        if key == VolumeKey::Down {
            self.volume_down_presses += 1;
            self.spawn_if_due();
        }
        Ok(())
    }
}

impl WindowVisibility for FakeDesktop {
    fn set_visibility(&mut self, handle: WindowHandle, visibility: Visibility) -> Result<()> {
        self.events.push(Event::SetVisibility(handle, visibility));
        Ok(())
    }
}

impl Pause for FakeDesktop {
    fn pause(&mut self, duration: Duration) {
        self.events.push(Event::Pause(duration));
    }
}
