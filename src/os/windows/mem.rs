use anyhow::Result;
use windows::Win32::{
    Foundation::{GetLastError, SetLastError, HANDLE, NO_ERROR},
    System::Memory::{GlobalAlloc, GlobalFree, GlobalLock, GlobalUnlock, GMEM_MOVEABLE},
};

/// Moveable global memory holding UTF-16 text on its way to the
/// clipboard. The buffer frees itself unless ownership is released to
/// the system.
pub struct GlobalTextGuard {
    hmem: isize,
    owned: bool,
}

impl GlobalTextGuard {
    pub fn alloc_moveable(units: usize) -> Result<Self> {
        let hmem = unsafe {
            SetLastError(NO_ERROR);
            GlobalAlloc(GMEM_MOVEABLE, units * std::mem::size_of::<u16>())
        };
        log::trace!("hmem: 0x{:x}", hmem);
        unsafe { GetLastError().ok()? };
        Ok(Self { hmem, owned: true })
    }

    pub fn handle(&self) -> HANDLE {
        HANDLE(self.hmem)
    }

    pub fn lock(&self) -> *mut u16 {
        log::trace!("lock hmem 0x{:x}", self.hmem);
        unsafe { GlobalLock(self.hmem) as *mut u16 }
    }

    pub fn unlock(&self) {
        let r = unsafe { GlobalUnlock(self.hmem) };
        log::trace!("unlock hmem 0x{:x} {:?}", self.hmem, r);
    }

    /// SetClipboardData succeeded; the system owns the buffer from here.
    pub fn release(mut self) {
        self.owned = false;
    }
}

impl Drop for GlobalTextGuard {
    fn drop(&mut self) {
        if !self.owned {
            return;
        }
        let r = unsafe { GlobalFree(self.hmem) };
        log::trace!("free hmem 0x{:x} {}", self.hmem, r);
    }
}
