//! Scene lifecycle around the simulation

pub mod events;
pub mod play;

pub use events::{SceneEvent, SceneEvents, SubscriptionId};
pub use play::PlayScene;
