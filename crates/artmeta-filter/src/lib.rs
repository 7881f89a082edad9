pub mod evaluate;
pub mod facet;

pub use evaluate::{filter, matches};
pub use facet::FacetIndex;
