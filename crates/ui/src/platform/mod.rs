mod clipboard;
mod mail;

pub use clipboard::WebviewClipboard;
pub use mail::DesktopMailComposer;
