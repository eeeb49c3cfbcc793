mod clipboard;
mod mem;

pub use clipboard::WinClipboard;
