//! Ray/shape intersection for the renderer's scene representation.
//!
//! Every object a ray can be tested against implements [shape::Hitable]. Leaf
//! shapes (axis aligned rectangles) solve the intersection analytically, while
//! decorators ([shape::FlipNormals], [shape::Translate], [shape::RotateY]) move
//! the ray into the frame of the shape they wrap and move the result back.

pub mod aggregate;
pub mod material;
pub mod math;
pub mod ray;
pub mod scene;
pub mod shape;
pub mod utils;
