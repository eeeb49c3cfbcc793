mod clipboard;

pub use clipboard::X11Clipboard;
