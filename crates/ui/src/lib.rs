pub mod app;
pub mod context;
pub mod platform;
pub mod views;
pub mod vm;

pub use app::{App, SessionScreen};
pub use context::{AppContext, UiApp, build_app_context};
pub use platform::{DesktopMailComposer, WebviewClipboard};
