pub mod app;
pub mod celebration;
pub mod context;
pub mod vm;
pub mod views;

pub use app::App;
pub use celebration::ConfettiCelebration;
pub use context::{AppContext, UiApp, build_app_context};
