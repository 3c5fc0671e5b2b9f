//! Collections of shapes that are themselves shapes.

pub mod shapelist;

pub use shapelist::ShapeList;
