pub mod property;
pub mod session;
pub mod window;

pub use property::*;
pub use session::*;
pub use window::*;
