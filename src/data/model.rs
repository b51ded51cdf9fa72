use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use super::cost::parse_cost;

// ---------------------------------------------------------------------------
// Dimension – the categorical columns a user can filter on
// ---------------------------------------------------------------------------

/// A filterable categorical column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Dimension {
    University,
    Faculty,
    ProgramType,
}

impl Dimension {
    pub const ALL: [Dimension; 3] = [
        Dimension::University,
        Dimension::Faculty,
        Dimension::ProgramType,
    ];

    /// Column name in the source table.
    pub fn column(self) -> &'static str {
        match self {
            Dimension::University => "university",
            Dimension::Faculty => "faculty",
            Dimension::ProgramType => "program_type",
        }
    }

    /// Human-readable label for the UI.
    pub fn label(self) -> &'static str {
        match self {
            Dimension::University => "University",
            Dimension::Faculty => "Faculty",
            Dimension::ProgramType => "Program type",
        }
    }
}

// ---------------------------------------------------------------------------
// ProgramRecord – one row of the source table
// ---------------------------------------------------------------------------

/// A single program (one row of the source table).
///
/// `cost_numeric` is derived from `cost` when the record is built and is
/// never set independently.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProgramRecord {
    pub university: Option<String>,
    pub faculty: Option<String>,
    pub program_name: String,
    pub program_type: Option<String>,
    /// Cost as written in the source, e.g. `"12,345 บาท"`.
    pub cost: Option<String>,
    #[serde(skip)]
    cost_numeric: Option<f64>,
}

impl ProgramRecord {
    /// Build a record, deriving the numeric cost from `cost`.
    pub fn new(
        university: Option<String>,
        faculty: Option<String>,
        program_name: String,
        program_type: Option<String>,
        cost: Option<String>,
        currency_token: &str,
    ) -> Self {
        let cost_numeric = cost
            .as_deref()
            .and_then(|c| parse_cost(c, currency_token));
        Self {
            university,
            faculty,
            program_name,
            program_type,
            cost,
            cost_numeric,
        }
    }

    pub fn cost_numeric(&self) -> Option<f64> {
        self.cost_numeric
    }

    /// Value of a categorical column, `None` when missing.
    pub fn dimension(&self, dim: Dimension) -> Option<&str> {
        match dim {
            Dimension::University => self.university.as_deref(),
            Dimension::Faculty => self.faculty.as_deref(),
            Dimension::ProgramType => self.program_type.as_deref(),
        }
    }
}

/// Normalise a raw cell: empty text is a missing value.
pub fn non_empty(cell: Option<&str>) -> Option<String> {
    cell.filter(|s| !s.is_empty()).map(str::to_string)
}

/// Markers spreadsheet exports (and `pandas.read_csv`) use for "no value".
/// Matched exactly, without trimming or case folding.
pub const MISSING_MARKERS: [&str; 18] = [
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Categorical cell: empty text or a missing-value marker is absent, so it
/// never becomes a filter option and never matches a selection.
pub fn category_value(cell: Option<String>) -> Option<String> {
    cell.filter(|s| !s.is_empty() && !MISSING_MARKERS.contains(&s.as_str()))
}

// ---------------------------------------------------------------------------
// ProgramDataset – the complete loaded table
// ---------------------------------------------------------------------------

/// The normalised dataset with pre-computed filter options.
/// Immutable once built.
#[derive(Debug, Clone, Default)]
pub struct ProgramDataset {
    records: Vec<ProgramRecord>,
    /// For each dimension the sorted set of distinct non-missing values.
    unique_values: BTreeMap<Dimension, BTreeSet<String>>,
}

impl ProgramDataset {
    /// Build dimension indices from the loaded records.
    pub fn from_records(records: Vec<ProgramRecord>) -> Self {
        let mut unique_values: BTreeMap<Dimension, BTreeSet<String>> = Dimension::ALL
            .iter()
            .map(|&dim| (dim, BTreeSet::new()))
            .collect();

        for rec in &records {
            for dim in Dimension::ALL {
                if let Some(val) = rec.dimension(dim) {
                    unique_values
                        .entry(dim)
                        .or_default()
                        .insert(val.to_string());
                }
            }
        }

        ProgramDataset {
            records,
            unique_values,
        }
    }

    pub fn records(&self) -> &[ProgramRecord] {
        &self.records
    }

    /// Distinct values of a dimension (missing values excluded).
    pub fn unique_values(&self, dim: Dimension) -> &BTreeSet<String> {
        static EMPTY: BTreeSet<String> = BTreeSet::new();
        self.unique_values.get(&dim).unwrap_or(&EMPTY)
    }

    /// Number of records whose cost could not be parsed.
    pub fn unparsed_cost_count(&self) -> usize {
        self.records
            .iter()
            .filter(|r| r.cost_numeric.is_none())
            .count()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::data::cost::DEFAULT_CURRENCY_TOKEN;

    /// Shorthand used across the data-layer tests.
    pub(crate) fn record(
        university: &str,
        faculty: &str,
        program_name: &str,
        program_type: &str,
        cost: &str,
    ) -> ProgramRecord {
        let opt = |s: &str| non_empty(Some(s));
        ProgramRecord::new(
            category_value(opt(university)),
            category_value(opt(faculty)),
            program_name.to_string(),
            category_value(opt(program_type)),
            opt(cost),
            DEFAULT_CURRENCY_TOKEN,
        )
    }

    #[test]
    fn cost_numeric_is_derived_from_cost() {
        assert_eq!(record("A", "F", "P", "T", "10,000 บาท").cost_numeric(), Some(10000.0));
        assert_eq!(record("A", "F", "P", "T", "N/A").cost_numeric(), None);
        assert_eq!(record("A", "F", "P", "T", "").cost_numeric(), None);
    }

    #[test]
    fn unique_values_skip_missing() {
        let ds = ProgramDataset::from_records(vec![
            record("B", "Eng", "P1", "Thai", "1"),
            record("A", "", "P2", "Inter", "N/A"),
            record("", "Eng", "P3", "", "3"),
        ]);
        let unis: Vec<_> = ds.unique_values(Dimension::University).iter().collect();
        assert_eq!(unis, ["A", "B"]);
        assert_eq!(ds.unique_values(Dimension::Faculty).len(), 1);
        assert_eq!(ds.unique_values(Dimension::ProgramType).len(), 2);
        assert_eq!(ds.unparsed_cost_count(), 1);
        assert_eq!(ds.len(), 3);
    }

    #[test]
    fn missing_markers_are_absent_categories() {
        for marker in ["N/A", "NA", "null", "nan", "None", "#N/A", "n/a", "<NA>"] {
            assert_eq!(category_value(Some(marker.to_string())), None, "{marker}");
        }
        assert_eq!(category_value(Some(String::new())), None);
        assert_eq!(category_value(None), None);
        // only exact markers count
        assert_eq!(category_value(Some("NASA".into())).as_deref(), Some("NASA"));
        assert_eq!(category_value(Some(" N/A".into())).as_deref(), Some(" N/A"));
    }

    #[test]
    fn empty_dataset_has_empty_options() {
        let ds = ProgramDataset::from_records(Vec::new());
        assert!(ds.is_empty());
        for dim in Dimension::ALL {
            assert!(ds.unique_values(dim).is_empty());
        }
    }
}
