mod state;

pub use state::{AttributeValue, Instance, Resource, StateDocument};
