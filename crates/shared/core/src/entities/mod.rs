mod annotated;
mod record;

pub use annotated::AnnotatedRecord;
pub use record::{Record, validate_series};
