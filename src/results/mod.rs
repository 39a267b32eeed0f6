// Result shapes produced by the engine.

pub mod grid;

pub use grid::QueryGrid;
