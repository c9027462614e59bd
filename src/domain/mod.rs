pub mod cart;
pub mod errors;
pub mod order;
pub mod placement;
pub mod ports;
pub mod product;
pub mod user;
