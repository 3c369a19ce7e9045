pub mod events;
pub mod info;
pub mod select;
pub mod tickets;
pub mod validate;
