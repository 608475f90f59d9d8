use std::mem::size_of;
use windows::{
    core::{w, HSTRING},
    Win32::{
        Foundation::{
            SetLastError, ERROR_CANNOT_FIND_WND_CLASS, ERROR_INVALID_WINDOW_HANDLE, HWND,
            WIN32_ERROR,
        },
        UI::{
            Input::KeyboardAndMouse::{
                SendInput, INPUT, INPUT_0, INPUT_KEYBOARD, KEYBDINPUT, KEYBD_EVENT_FLAGS,
                KEYEVENTF_KEYUP, VIRTUAL_KEY, VK_VOLUME_DOWN, VK_VOLUME_UP,
            },
            WindowsAndMessaging::{FindWindowExW, ShowWindow, SHOW_WINDOW_CMD, SW_MINIMIZE, SW_RESTORE},
        },
    },
};
use crate::{
    desktop::*,
    error::{OsdError, Result},
    handle::WindowHandle,
};

/// The interactive desktop of the current session.
#[derive(Default)]
pub struct Win32Desktop;

impl Win32Desktop {
    pub fn new() -> Self {
        Self
    }

    fn key_input(vk: VIRTUAL_KEY, flags: KEYBD_EVENT_FLAGS) -> INPUT {
        INPUT {
            r#type: INPUT_KEYBOARD,
            Anonymous: INPUT_0 {
                ki: KEYBDINPUT {
                    wVk: vk,
                    wScan: 0,
                    dwFlags: flags,
                    time: 0,
                    dwExtraInfo: 0,
                },
            },
        }
    }

    fn show_command(visibility: Visibility) -> SHOW_WINDOW_CMD {
        match visibility {
            Visibility::Hidden => SW_MINIMIZE,
            Visibility::Shown => SW_RESTORE,
        }
    }
}

/// A `NULL` lookup with no error code, a destroyed window, or a class nobody
/// has registered yet all mean the OSD is not there (yet).
fn miss_or_error(e: windows::core::Error) -> Result<Option<WindowHandle>> {
    let code = e.code();
    if code.is_ok()
        || code == ERROR_INVALID_WINDOW_HANDLE.to_hresult()
        || code == ERROR_CANNOT_FIND_WND_CLASS.to_hresult()
    {
        return Ok(None);
    }
    Err(OsdError::os("FindWindowExW", e))
}

impl WindowEnumerator for Win32Desktop {
    fn find_window(
        &self,
        parent: Option<WindowHandle>,
        after: Option<WindowHandle>,
        class: &str,
    ) -> Result<Option<WindowHandle>> {
        let parent = parent.map_or(HWND::default(), HWND::from);
        let after = after.map_or(HWND::default(), HWND::from);
        unsafe {
            // a miss leaves the last error untouched, so clear it first
            SetLastError(WIN32_ERROR(0));
            match FindWindowExW(parent, after, &HSTRING::from(class), w!("")) {
                Ok(hwnd) => Ok(Some(hwnd.into())),
                Err(e) => miss_or_error(e),
            }
        }
    }
}

impl KeyInjector for Win32Desktop {
    fn press_key(&mut self, key: VolumeKey) -> Result<()> {
        let vk = match key {
            VolumeKey::Up => VK_VOLUME_UP,
            VolumeKey::Down => VK_VOLUME_DOWN,
        };
        let inputs = [
            Self::key_input(vk, KEYBD_EVENT_FLAGS(0)),
            Self::key_input(vk, KEYEVENTF_KEYUP),
        ];
        let sent = unsafe { SendInput(&inputs, size_of::<INPUT>() as i32) };
        if sent as usize != inputs.len() {
            return Err(OsdError::os("SendInput", windows::core::Error::from_win32()));
        }
        Ok(())
    }
}

impl WindowVisibility for Win32Desktop {
    fn set_visibility(&mut self, handle: WindowHandle, visibility: Visibility) -> Result<()> {
        // the return value is the previous visibility, not a status
        let _ = unsafe { ShowWindow(HWND::from(handle), Self::show_command(visibility)) };
        Ok(())
    }
}

impl Pause for Win32Desktop {}
