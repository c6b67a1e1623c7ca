pub mod access;
pub mod binding;
pub mod trend;
