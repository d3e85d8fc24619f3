pub mod error;
pub mod normalize;
pub mod raw_model;
pub mod view_model;
