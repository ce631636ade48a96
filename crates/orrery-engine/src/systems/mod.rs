pub mod render;
pub mod text;
pub mod vector;
