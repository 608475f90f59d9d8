use std::time::Duration;
use tracing::{error, info, warn};
use crate::{
    desktop::{Desktop, Visibility, VolumeKey},
    error::{OsdError, Result},
    handle::WindowHandle,
    locator::find_osd_window,
    options::RunIntent,
};

pub struct App<D: Desktop> {
    intent: RunIntent,
    desktop: D,
}

impl<D: Desktop> App<D> {
    pub const MAX_RETRIES: u32 = 10;
    pub const RETRY_INTERVAL: Duration = Duration::from_secs(1);
    pub const EXIT_OK: u8 = 0;
    pub const EXIT_NOT_FOUND: u8 = 1;

    pub fn new(intent: RunIntent, desktop: D) -> Self {
        Self { intent, desktop }
    }

    /// Toggles the OSD and returns the process exit code. Only
    /// `OsdError::NotFound` is recovered here.
    pub fn run(&mut self) -> Result<u8> {
        match self.toggle() {
            Ok(_) => Ok(Self::EXIT_OK),
            Err(e @ OsdError::NotFound { .. }) => {
                error!("{e}");
                Ok(Self::EXIT_NOT_FOUND)
            }
            Err(e) => Err(e),
        }
    }

    pub fn toggle(&mut self) -> Result<WindowHandle> {
        let handle = self
            .locate_with_retries()?
            .ok_or(OsdError::NotFound { attempts: Self::MAX_RETRIES + 1 })?;
        self.apply(handle)?;
        Ok(handle)
    }

    pub fn locate_with_retries(&mut self) -> Result<Option<WindowHandle>> {
        if let Some(handle) = find_osd_window(&self.desktop)? {
            return Ok(Some(handle));
        }
        for attempt in 1..=Self::MAX_RETRIES {
            self.nudge()?;
            if let Some(handle) = find_osd_window(&self.desktop)? {
                // stop nudging as soon as any OSD instance shows up
                warn!(attempt, "volume OSD window appeared after nudging the volume");
                return Ok(Some(handle));
            }
            warn!(attempt, "the volume OSD window is not found");
            if attempt < Self::MAX_RETRIES {
                warn!("sleep a while");
                self.desktop.pause(Self::RETRY_INTERVAL);
            }
        }
        Ok(None)
    }

    /// Volume up then down, so the level is unchanged but the OSD is spawned.
    pub fn nudge(&mut self) -> Result<()> {
        self.desktop.press_key(VolumeKey::Up)?;
        self.desktop.press_key(VolumeKey::Down)
    }

    pub fn apply(&mut self, handle: WindowHandle) -> Result<()> {
        match self.intent {
            RunIntent::Hide => {
                info!(%handle, "hiding the volume OSD window");
                self.desktop.set_visibility(handle, Visibility::Hidden)
            }
            RunIntent::Show => {
                info!(%handle, "showing the volume OSD window");
                self.desktop.set_visibility(handle, Visibility::Shown)?;
                self.nudge()
            }
        }
    }
}
