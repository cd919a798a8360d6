pub mod fleet;
pub mod permissions;
