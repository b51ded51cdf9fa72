use std::collections::BTreeMap;

use super::model::ProgramRecord;

/// Default size of the cheapest / most expensive lists.
pub const DEFAULT_TOP_K: usize = 5;

/// Mean numeric cost of one university.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupMean {
    pub university: String,
    pub mean_cost: f64,
    /// Records that contributed a numeric cost.
    pub count: usize,
}

/// Direction of a ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankOrder {
    /// Cheapest first.
    Ascending,
    /// Most expensive first.
    Descending,
}

/// Mean numeric cost per university, highest first.
///
/// Records without a university or without a numeric cost are skipped, so a
/// university with no numeric cost never appears. Equal means are ordered
/// by university name.
pub fn aggregate_mean<'a, I>(records: I) -> Vec<GroupMean>
where
    I: IntoIterator<Item = &'a ProgramRecord>,
{
    let mut sums: BTreeMap<&'a str, (f64, usize)> = BTreeMap::new();
    for rec in records {
        let (Some(uni), Some(cost)) = (rec.university.as_deref(), rec.cost_numeric()) else {
            continue;
        };
        let entry = sums.entry(uni).or_insert((0.0, 0));
        entry.0 += cost;
        entry.1 += 1;
    }

    let mut means: Vec<GroupMean> = sums
        .into_iter()
        .map(|(uni, (sum, count))| GroupMean {
            university: uni.to_string(),
            mean_cost: sum / count as f64,
            count,
        })
        .collect();

    // BTreeMap iteration is already name-ascending and the sort is stable.
    means.sort_by(|a, b| b.mean_cost.total_cmp(&a.mean_cost));
    means
}

/// The first `k` records by numeric cost in the given order.
///
/// Records without a numeric cost are dropped first; fewer than `k`
/// survivors is not an error. Ties keep their input order.
pub fn top_k<'a, I>(records: I, k: usize, order: RankOrder) -> Vec<&'a ProgramRecord>
where
    I: IntoIterator<Item = &'a ProgramRecord>,
{
    let mut ranked: Vec<(&'a ProgramRecord, f64)> = records
        .into_iter()
        .filter_map(|r| r.cost_numeric().map(|c| (r, c)))
        .collect();

    ranked.sort_by(|(_, a), (_, b)| match order {
        RankOrder::Ascending => a.total_cmp(b),
        RankOrder::Descending => b.total_cmp(a),
    });

    ranked.into_iter().take(k).map(|(r, _)| r).collect()
}

// ---------------------------------------------------------------------------
// Summary line under the table
// ---------------------------------------------------------------------------

/// Headline numbers for a set of records.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CostSummary {
    pub shown: usize,
    pub with_cost: usize,
    pub mean: Option<f64>,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

pub fn summarize<'a, I>(records: I) -> CostSummary
where
    I: IntoIterator<Item = &'a ProgramRecord>,
{
    let mut summary = CostSummary::default();
    let mut sum = 0.0;

    for rec in records {
        summary.shown += 1;
        let Some(cost) = rec.cost_numeric() else {
            continue;
        };
        summary.with_cost += 1;
        sum += cost;
        summary.min = Some(summary.min.map_or(cost, |m| m.min(cost)));
        summary.max = Some(summary.max.map_or(cost, |m| m.max(cost)));
    }

    if summary.with_cost > 0 {
        summary.mean = Some(sum / summary.with_cost as f64);
    }
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::tests::record;

    fn costs(rows: &[&ProgramRecord]) -> Vec<f64> {
        rows.iter().filter_map(|r| r.cost_numeric()).collect()
    }

    #[test]
    fn end_to_end_example() {
        let records = vec![
            record("A", "F", "P1", "T", "10,000 บาท"),
            record("A", "F", "P2", "T", "20,000"),
            record("B", "F", "P3", "T", "N/A"),
        ];

        let means = aggregate_mean(&records);
        assert_eq!(
            means,
            [GroupMean {
                university: "A".into(),
                mean_cost: 15000.0,
                count: 2
            }]
        );

        let cheapest = top_k(&records, 5, RankOrder::Ascending);
        assert_eq!(costs(&cheapest), [10000.0, 20000.0]);
        assert!(cheapest.iter().all(|r| r.university.as_deref() == Some("A")));
    }

    #[test]
    fn means_sorted_descending_with_name_tie_break() {
        let records = vec![
            record("C", "F", "P", "T", "100"),
            record("B", "F", "P", "T", "300"),
            record("A", "F", "P", "T", "100"),
            record("B", "F", "P", "T", "100"),
            record("", "F", "P", "T", "999"),
        ];
        let order: Vec<_> = aggregate_mean(&records)
            .into_iter()
            .map(|g| (g.university, g.mean_cost))
            .collect();
        assert_eq!(
            order,
            [
                ("B".to_string(), 200.0),
                ("A".to_string(), 100.0),
                ("C".to_string(), 100.0)
            ]
        );
    }

    #[test]
    fn groups_without_numeric_cost_are_omitted() {
        let records = vec![
            record("A", "F", "P", "T", "N/A"),
            record("A", "F", "P", "T", ""),
            record("B", "F", "P", "T", "500"),
        ];
        let means = aggregate_mean(&records);
        assert!(means.iter().all(|g| g.university != "A"));
        assert_eq!(means.len(), 1);
        assert!(aggregate_mean(&Vec::<ProgramRecord>::new()).is_empty());
    }

    #[test]
    fn ranking_is_bounded_and_ordered() {
        let records: Vec<_> = [700, 100, 0, 300, 900, 200, 500]
            .iter()
            .map(|c| record("A", "F", "P", "T", &c.to_string()))
            .chain([record("A", "F", "P", "T", "N/A")])
            .collect();

        let cheapest = top_k(&records, 5, RankOrder::Ascending);
        assert_eq!(costs(&cheapest), [0.0, 100.0, 200.0, 300.0, 500.0]);

        let dearest = top_k(&records, 5, RankOrder::Descending);
        assert_eq!(costs(&dearest), [900.0, 700.0, 500.0, 300.0, 200.0]);

        for k in 0..10 {
            assert_eq!(top_k(&records, k, RankOrder::Ascending).len(), k.min(7));
        }
    }

    #[test]
    fn ranking_ties_keep_input_order() {
        let records = vec![
            record("A", "F", "first", "T", "100"),
            record("A", "F", "second", "T", "100"),
        ];
        for order in [RankOrder::Ascending, RankOrder::Descending] {
            let names: Vec<_> = top_k(&records, 5, order)
                .iter()
                .map(|r| r.program_name.as_str())
                .collect();
            assert_eq!(names, ["first", "second"]);
        }
    }

    #[test]
    fn repeated_calls_are_identical() {
        let records = vec![
            record("A", "F", "P1", "T", "3"),
            record("B", "F", "P2", "T", "1"),
            record("B", "F", "P3", "T", "2"),
        ];
        assert_eq!(aggregate_mean(&records), aggregate_mean(&records));
        assert_eq!(
            top_k(&records, 2, RankOrder::Descending),
            top_k(&records, 2, RankOrder::Descending)
        );
    }

    #[test]
    fn summary_counts() {
        let records = vec![
            record("A", "F", "P", "T", "100"),
            record("A", "F", "P", "T", "N/A"),
            record("B", "F", "P", "T", "300"),
        ];
        let s = summarize(&records);
        assert_eq!(s.shown, 3);
        assert_eq!(s.with_cost, 2);
        assert_eq!(s.mean, Some(200.0));
        assert_eq!(s.min, Some(100.0));
        assert_eq!(s.max, Some(300.0));

        assert_eq!(summarize(&Vec::<ProgramRecord>::new()), CostSummary::default());
    }
}
