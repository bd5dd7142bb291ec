mod component;
mod model;
mod render;

pub use component::ElementChart;
