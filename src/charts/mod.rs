//! Charts module - Chart rendering

mod bars;
mod map;
mod pie;

pub use bars::CountBarChart;
pub use map::HeightMap;
pub use pie::{PieChart, PALETTE};
