use tracing::{debug, info};
use crate::{desktop::WindowEnumerator, error::Result, handle::WindowHandle};

pub const HOST_CLASS: &str = "NativeHWNDHost";
pub const CONTENT_CLASS: &str = "DirectUIHWND";

/// Returns the first top-level host window that owns a content child.
pub fn find_osd_window<E: WindowEnumerator + ?Sized>(windows: &E) -> Result<Option<WindowHandle>> {
    info!("finding the volume OSD window");
    let mut host = None;
    loop {
        host = windows.find_window(None, host, HOST_CLASS)?;
        let Some(candidate) = host else {
            return Ok(None);
        };
        match windows.find_window(Some(candidate), None, CONTENT_CLASS)? {
            Some(content) => {
                debug!(host = %candidate, content = %content, "found volume OSD window");
                return Ok(Some(candidate));
            }
            None => debug!(host = %candidate, "host window has no content child"),
        }
    }
}
