mod events;
mod resources;
mod service;

pub use events::{EventBus, EventHandler};
pub use resources::{LoadCallback, ResourceLoader};
pub use service::ServiceSlot;
