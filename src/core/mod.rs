pub mod clock;
pub mod error;
pub mod event;
pub mod event_queue;
pub mod keys;
pub mod mouse;
pub mod notification;
pub mod session;
pub mod state;
pub mod surface;
pub mod translator;

pub use clock::*;
pub use error::*;
pub use event::*;
pub use event_queue::*;
pub use keys::Key;
pub use mouse::*;
pub use notification::*;
pub use session::*;
pub use state::*;
pub use surface::*;
pub use translator::translate;
