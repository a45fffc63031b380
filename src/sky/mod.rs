pub mod cloud;
pub mod factory;
pub mod puff;

pub use cloud::Cloud;
pub use factory::CloudFactory;
pub use puff::{Puff, PuffFactory};
