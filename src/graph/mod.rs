pub mod builders;
pub mod model;
pub mod serialization;

pub use model::BenchGraph;
pub use serialization::{graph6_string, parse_graph6, Graph6Writer};
