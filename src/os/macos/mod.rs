mod clipboard;

pub use clipboard::PasteboardClipboard;
