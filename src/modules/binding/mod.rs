pub mod store;

#[cfg(test)]
pub use store::MockBindingStore;
pub use store::{
    BindingError, BindingResult, BindingStore, Bindings, InMemoryBindingStore,
    JsonFileBindingStore, BINDINGS_FILE,
};
