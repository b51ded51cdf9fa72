use std::collections::BTreeSet;

use super::model::{Dimension, ProgramDataset, ProgramRecord};

// ---------------------------------------------------------------------------
// Filter criteria: allowed values per dimension plus a keyword
// ---------------------------------------------------------------------------

/// Allowed values per dimension plus an optional keyword.
///
/// An empty allowed-set means nothing is selected, so no record passes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub university: BTreeSet<String>,
    pub faculty: BTreeSet<String>,
    pub program_type: BTreeSet<String>,
    /// Case-insensitive substring of `program_name`, matched as typed;
    /// blank means no constraint.
    pub keyword: String,
}

impl FilterCriteria {
    /// Criteria with every known value selected and no keyword (show everything).
    pub fn select_all(dataset: &ProgramDataset) -> Self {
        Self {
            university: dataset.unique_values(Dimension::University).clone(),
            faculty: dataset.unique_values(Dimension::Faculty).clone(),
            program_type: dataset.unique_values(Dimension::ProgramType).clone(),
            keyword: String::new(),
        }
    }

    pub fn selection(&self, dim: Dimension) -> &BTreeSet<String> {
        match dim {
            Dimension::University => &self.university,
            Dimension::Faculty => &self.faculty,
            Dimension::ProgramType => &self.program_type,
        }
    }

    pub fn selection_mut(&mut self, dim: Dimension) -> &mut BTreeSet<String> {
        match dim {
            Dimension::University => &mut self.university,
            Dimension::Faculty => &mut self.faculty,
            Dimension::ProgramType => &mut self.program_type,
        }
    }

    /// Whether a single record passes every condition.
    ///
    /// A record passes when:
    /// * each dimension value is present and selected (missing never matches)
    /// * the keyword is blank, or `program_name` contains it ignoring case
    pub fn matches(&self, record: &ProgramRecord) -> bool {
        let dims_ok = Dimension::ALL.iter().all(|&dim| {
            record
                .dimension(dim)
                .is_some_and(|val| self.selection(dim).contains(val))
        });
        dims_ok && keyword_matches(&record.program_name, &self.keyword)
    }
}

fn keyword_matches(program_name: &str, keyword: &str) -> bool {
    keyword.trim().is_empty() || program_name.to_lowercase().contains(&keyword.to_lowercase())
}

/// Records passing `criteria`, in their original order.
pub fn filter_records<'a>(
    records: &'a [ProgramRecord],
    criteria: &FilterCriteria,
) -> Vec<&'a ProgramRecord> {
    records.iter().filter(|r| criteria.matches(r)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::tests::record;

    fn dataset() -> ProgramDataset {
        ProgramDataset::from_records(vec![
            record("A", "Engineering", "Computer Engineering", "Thai", "10,000"),
            record("A", "Science", "Physics", "Inter", "20,000"),
            record("B", "Engineering", "Civil ENGINEERING", "Thai", "N/A"),
            record("", "Science", "Chemistry", "Thai", "9000"),
            record("C", "Arts", "History", "", "5000"),
        ])
    }

    fn names(rows: &[&ProgramRecord]) -> Vec<String> {
        rows.iter().map(|r| r.program_name.clone()).collect()
    }

    #[test]
    fn select_all_keeps_rows_with_every_dimension_present() {
        let ds = dataset();
        let criteria = FilterCriteria::select_all(&ds);
        let rows = filter_records(ds.records(), &criteria);
        assert_eq!(
            names(&rows),
            ["Computer Engineering", "Physics", "Civil ENGINEERING"]
        );
    }

    #[test]
    fn empty_selection_excludes_all() {
        let ds = dataset();
        let mut criteria = FilterCriteria::select_all(&ds);
        criteria.university.clear();
        assert!(filter_records(ds.records(), &criteria).is_empty());

        assert!(filter_records(ds.records(), &FilterCriteria::default()).is_empty());
    }

    #[test]
    fn dimensions_are_conjunctive() {
        let ds = dataset();
        let mut criteria = FilterCriteria::select_all(&ds);
        criteria.university = ["A".to_string()].into();
        criteria.faculty = ["Engineering".to_string()].into();
        let rows = filter_records(ds.records(), &criteria);
        assert_eq!(names(&rows), ["Computer Engineering"]);
    }

    #[test]
    fn keyword_is_case_insensitive() {
        let ds = dataset();
        let mut criteria = FilterCriteria::select_all(&ds);
        criteria.keyword = "engineering".to_string();
        let rows = filter_records(ds.records(), &criteria);
        assert_eq!(names(&rows), ["Computer Engineering", "Civil ENGINEERING"]);

        criteria.keyword = "medicine".to_string();
        assert!(filter_records(ds.records(), &criteria).is_empty());
    }

    #[test]
    fn keyword_is_matched_as_typed_unless_blank() {
        let ds = dataset();
        let mut criteria = FilterCriteria::select_all(&ds);

        // leading space must match a space in the name
        criteria.keyword = " engineering".to_string();
        let rows = filter_records(ds.records(), &criteria);
        assert_eq!(names(&rows), ["Computer Engineering", "Civil ENGINEERING"]);

        criteria.keyword = " physics".to_string();
        assert!(filter_records(ds.records(), &criteria).is_empty());

        criteria.keyword = "   ".to_string();
        assert_eq!(filter_records(ds.records(), &criteria).len(), 3);
    }

    #[test]
    fn matches_agrees_with_every_condition() {
        let ds = dataset();
        let mut criteria = FilterCriteria::select_all(&ds);
        criteria.program_type = ["Thai".to_string()].into();
        criteria.keyword = "c".to_string();

        for rec in ds.records() {
            let expected = Dimension::ALL.iter().all(|&dim| {
                rec.dimension(dim)
                    .is_some_and(|v| criteria.selection(dim).contains(v))
            }) && rec.program_name.to_lowercase().contains('c');
            assert_eq!(criteria.matches(rec), expected, "{}", rec.program_name);
        }
    }

    #[test]
    fn source_is_not_mutated() {
        let ds = dataset();
        let before = ds.records().to_vec();
        let mut criteria = FilterCriteria::select_all(&ds);
        criteria.faculty.clear();
        let _ = filter_records(ds.records(), &criteria);
        assert_eq!(ds.records(), before.as_slice());
    }
}
