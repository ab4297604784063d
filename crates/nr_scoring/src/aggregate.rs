use nr_core::{ArticleRecord, PeriodTotals};

/// Sums weighted scores per period. Records without a period are skipped.
pub fn aggregate(records: &[ArticleRecord]) -> PeriodTotals {
    let mut totals = PeriodTotals::new();
    for record in records {
        if let Some(period) = record.period() {
            *totals.entry(period).or_insert(0.0) += record.weighted_score();
        }
    }
    totals
}
