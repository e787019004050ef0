use super::trip::TripRecord;

/// Append-only, insertion-ordered sequence of trips owned by one session.
///
/// Records are never edited or removed individually; `clear` drops them all.
#[derive(Debug, Clone, Default)]
pub struct TripLog {
    records: Vec<TripRecord>,
}

impl TripLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, record: TripRecord) {
        self.records.push(record);
    }

    /// Remove every record, returning how many were dropped.
    pub fn clear(&mut self) -> usize {
        let n = self.records.len();
        self.records.clear();
        n
    }

    pub fn records(&self) -> &[TripRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TripRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl FromIterator<TripRecord> for TripLog {
    fn from_iter<I: IntoIterator<Item = TripRecord>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a TripLog {
    type Item = &'a TripRecord;
    type IntoIter = std::slice::Iter<'a, TripRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
