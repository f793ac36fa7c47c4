// ---------------------------------------------------------------------------
// Record – one data row of the run log
// ---------------------------------------------------------------------------

/// A single parsed data row: `(time_step, score)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Record {
    pub time_step: f64,
    pub score: f64,
}

// ---------------------------------------------------------------------------
// ScoreSeries – the complete loaded run
// ---------------------------------------------------------------------------

/// Two parallel sequences in file order.
///
/// Index `i` of `time_steps` belongs to index `i` of `scores`. Values are kept
/// exactly as parsed: not sorted, not deduplicated.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScoreSeries {
    time_steps: Vec<f64>,
    scores: Vec<f64>,
}

impl ScoreSeries {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one record to both sequences.
    pub fn push(&mut self, record: Record) {
        self.time_steps.push(record.time_step);
        self.scores.push(record.score);
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.time_steps.len()
    }

    /// Whether no data rows were loaded.
    pub fn is_empty(&self) -> bool {
        self.time_steps.is_empty()
    }

    pub fn time_steps(&self) -> &[f64] {
        &self.time_steps
    }

    pub fn scores(&self) -> &[f64] {
        &self.scores
    }

    /// `[time_step, score]` pairs in row order.
    pub fn points(&self) -> impl Iterator<Item = [f64; 2]> + '_ {
        self.time_steps()
            .iter()
            .zip(self.scores())
            .map(|(&x, &y)| [x, y])
    }
}

impl FromIterator<Record> for ScoreSeries {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        let mut series = ScoreSeries::new();
        for record in iter {
            series.push(record);
        }
        series
    }
}
