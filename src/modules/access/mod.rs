pub mod resolver;

pub use resolver::{can_use, AccessItem, AccessPolicy};
