//! Vector algebra kernel shared by the coordinate system and its transforms

pub mod vector;

pub use vector::Vec3;
