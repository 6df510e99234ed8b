pub mod distribution;
pub mod roller;
pub mod summary;
