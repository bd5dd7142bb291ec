mod component;
mod frame_loop;
mod legend;
mod render;
mod simulation;
mod state;
mod types;

pub use component::NetworkGraph;
