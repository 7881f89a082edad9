pub mod criteria;
pub mod detail;
pub mod record;

pub use criteria::{BoundedRange, Criteria};
pub use detail::detail_entries;
pub use record::{CanonicalRecord, RawRecord, SourceFormat};
