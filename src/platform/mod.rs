pub mod desktop;
pub mod headless;

pub use desktop::{InputAdapter, SoftbufferPresenter, WinitPlatform};
pub use headless::{CapturePresenter, HeadlessPlatform};
