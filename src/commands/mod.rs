pub mod compute;
pub mod input;
pub mod render;

pub use input::{read_heights, HeightInput};
