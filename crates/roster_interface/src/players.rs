pub mod filter;
pub mod model;
pub mod navigation;
pub mod roster;
pub mod service;
