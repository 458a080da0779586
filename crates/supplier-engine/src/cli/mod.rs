pub mod build;
pub mod common;
pub mod compare;
pub mod drift;
pub mod plan;
pub mod traits;
