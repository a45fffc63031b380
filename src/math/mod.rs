pub mod pos;
pub mod rng;

pub use pos::Pos;
pub use rng::Rng;
