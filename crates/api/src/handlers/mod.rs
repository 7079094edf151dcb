pub mod car;
pub mod catalog;
pub mod ping;
pub mod search;
