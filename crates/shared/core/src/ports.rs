use crate::entities::Record;

/// Port for the data source feeding the detector
///
/// Any source that yields records ordered by ascending date can stand in:
/// - Synthetic random-walk generator for demos and tests
/// - Fixed in-memory fixtures
pub trait SeriesSource {
    /// Produce the full ordered series
    fn records(&self) -> Vec<Record>;

    /// Get the source's name/identifier for logging
    fn name(&self) -> &str {
        "SeriesSource"
    }
}

impl SeriesSource for Vec<Record> {
    fn records(&self) -> Vec<Record> {
        self.clone()
    }

    fn name(&self) -> &str {
        "in-memory"
    }
}
