pub mod bounds;
pub mod point;
pub mod transform;
