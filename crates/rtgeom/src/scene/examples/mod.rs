mod cornell;
mod debug;

pub use cornell::CornellBoxScene;
pub use debug::DebugScene;
