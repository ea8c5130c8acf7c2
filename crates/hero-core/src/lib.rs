pub mod constants;
pub mod engine;
pub mod features;
pub mod flicker;
pub mod layout;
pub mod network;
pub mod particle;
pub mod phase;
pub mod progress;

pub use engine::*;
pub use features::*;
pub use flicker::*;
pub use layout::*;
pub use network::*;
pub use particle::*;
pub use phase::*;
pub use progress::*;
