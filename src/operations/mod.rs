pub mod dimension;
pub mod elevation;
pub mod offset;
