use anyhow::{bail, Context, Result};
use scopeguard::defer;
use windows::Win32::{
    Foundation::{GetLastError, SetLastError, FALSE, HWND, NO_ERROR, TRUE},
    System::{
        DataExchange::{
            CloseClipboard, EmptyClipboard, GetClipboardData, IsClipboardFormatAvailable,
            OpenClipboard, SetClipboardData,
        },
        Memory::{GlobalLock, GlobalSize, GlobalUnlock},
        Ole::CF_UNICODETEXT,
    },
};

use super::mem::GlobalTextGuard;

pub struct WinClipboard;

impl WinClipboard {
    pub fn new() -> Result<Self> {
        Ok(Self)
    }

    pub fn read_text(&mut self) -> Result<String> {
        let _session = ClipboardSession::open()?;

        unsafe {
            if IsClipboardFormatAvailable(CF_UNICODETEXT.0 as u32) == FALSE {
                bail!("CF_UNICODETEXT not available: {:?}", GetLastError());
            }
        }
        let handle = unsafe { GetClipboardData(CF_UNICODETEXT.0 as u32)? };
        let ptr = unsafe { GlobalLock(handle.0) } as *const u16;
        if ptr.is_null() {
            unsafe { GetLastError().ok().context("GlobalLock")? };
            bail!("GlobalLock returned null");
        }
        defer! {
            unsafe {
                GlobalUnlock(handle.0);
            }
        }

        // CF_UNICODETEXT is NUL terminated by contract; the allocation
        // size bounds the scan when a producer breaks it.
        let capacity = unsafe { GlobalSize(handle.0) } / std::mem::size_of::<u16>();
        let raw = unsafe { std::slice::from_raw_parts(ptr, capacity) };
        Ok(String::from_utf16_lossy(text_units(raw)))
    }

    pub fn write_text(&mut self, text: String) -> Result<()> {
        let mut units: Vec<u16> = text.encode_utf16().collect();
        units.push(0);

        let session = ClipboardSession::open()?;
        let buffer = GlobalTextGuard::alloc_moveable(units.len())?;
        unsafe {
            let dst = buffer.lock();
            std::ptr::copy_nonoverlapping(units.as_ptr(), dst, units.len());
        }
        buffer.unlock();

        session.empty()?;
        unsafe { SetClipboardData(CF_UNICODETEXT.0 as u32, buffer.handle())? };
        buffer.release();
        Ok(())
    }
}

/// The leading run of `units` up to its NUL terminator, or all of it
/// when none is present.
fn text_units(units: &[u16]) -> &[u16] {
    let len = units.iter().position(|&u| u == 0).unwrap_or(units.len());
    &units[..len]
}

/// Open clipboard scope; closed again on drop.
struct ClipboardSession;

impl ClipboardSession {
    fn open() -> Result<Self> {
        unsafe {
            if OpenClipboard(HWND(0)) == TRUE {
                return Ok(Self);
            }
            // ERROR_ACCESS_DENIED 0x80070005 while another process holds it
            log::debug!("OpenClipboard failed: {:?}", GetLastError().ok());
            SetLastError(NO_ERROR);
            if OpenClipboard(HWND(0)) == TRUE {
                return Ok(Self);
            }
            GetLastError().ok().context("OpenClipboard")?;
            bail!("OpenClipboard failed")
        }
    }

    fn empty(&self) -> Result<()> {
        unsafe {
            if EmptyClipboard() == FALSE {
                GetLastError().ok().context("EmptyClipboard")?;
            }
        }
        Ok(())
    }
}

impl Drop for ClipboardSession {
    fn drop(&mut self) {
        unsafe { CloseClipboard() };
    }
}
