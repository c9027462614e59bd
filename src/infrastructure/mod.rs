#[cfg(test)]
pub mod memory;
pub mod models;
pub mod pg_store;

#[cfg(test)]
pub use memory::InMemoryStore;
pub use pg_store::DieselStore;
