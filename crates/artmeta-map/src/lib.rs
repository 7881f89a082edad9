pub mod chains;
pub mod normalize;
pub mod numeric;

pub use chains::resolve;
pub use normalize::normalize_record;
pub use numeric::parse_number;
