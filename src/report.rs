// src/report.rs
//
// Report model built from one exam result page.
//
// - InfoPanel:     cell texts of one candidate/exam metadata table.
// - SectionResult: per-section tally of question outcomes.
// - OverallResult: element-wise sum of all sections.
// - Report:        the three above, built once and never mutated.

use crate::render::classify;

/// Result of classifying one question panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Correct,
    Wrong,
    NotAnswered,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InfoPanel {
    pub table_rows: Vec<Vec<String>>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SectionResult {
    pub name: String,
    pub correct: u32,
    pub wrong: u32,
    pub not_answered: u32,
}

impl SectionResult {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), correct: 0, wrong: 0, not_answered: 0 }
    }

    /// Count one question. Exactly one counter moves per call.
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Correct     => self.correct += 1,
            Outcome::Wrong       => self.wrong += 1,
            Outcome::NotAnswered => self.not_answered += 1,
        }
    }

    pub fn total(&self) -> u32 {
        self.correct + self.wrong + self.not_answered
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OverallResult {
    pub correct: u32,
    pub wrong: u32,
    pub not_answered: u32,
}

impl OverallResult {
    pub fn sum(sections: &[SectionResult]) -> Self {
        sections.iter().fold(Self::default(), |acc, s| Self {
            correct: acc.correct + s.correct,
            wrong: acc.wrong + s.wrong,
            not_answered: acc.not_answered + s.not_answered,
        })
    }

    pub fn total(&self) -> u32 {
        self.correct + self.wrong + self.not_answered
    }
}

/// Everything extracted from one result page.
///
/// Fields are private so the overall tally always matches the sections.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Report {
    panels: Vec<InfoPanel>,
    sections: Vec<SectionResult>,
    overall: OverallResult,
}

impl Report {
    pub fn new(panels: Vec<InfoPanel>, sections: Vec<SectionResult>) -> Self {
        let overall = OverallResult::sum(&sections);
        Self { panels, sections, overall }
    }

    pub fn panels(&self) -> &[InfoPanel] { &self.panels }
    pub fn sections(&self) -> &[SectionResult] { &self.sections }
    pub fn overall(&self) -> OverallResult { self.overall }

    pub fn is_empty(&self) -> bool {
        self.panels.is_empty() && self.sections.is_empty()
    }

    /* ---------------- Tabular shapes (export / GUI) ---------------- */

    pub fn section_headers() -> Vec<String> {
        ["Section", "Correct", "Wrong", "Not answered", "Total"]
            .into_iter()
            .map(String::from)
            .collect()
    }

    /// One row per section, followed by an `Overall` row.
    pub fn section_rows(&self) -> Vec<Vec<String>> {
        let mut rows: Vec<Vec<String>> = self
            .sections
            .iter()
            .map(|s| vec![
                s.name.clone(),
                s.correct.to_string(),
                s.wrong.to_string(),
                s.not_answered.to_string(),
                s.total().to_string(),
            ])
            .collect();

        let o = self.overall;
        rows.push(vec![
            s!("Overall"),
            o.correct.to_string(),
            o.wrong.to_string(),
            o.not_answered.to_string(),
            o.total().to_string(),
        ]);
        rows
    }

    pub fn panel_headers() -> Vec<String> {
        vec![s!("Panel"), s!("Key"), s!("Cells")]
    }

    /// `[panel #, key, cells…]`, where key is the classified first cell.
    /// Ragged by design: cells keep their source width.
    pub fn panel_rows(&self) -> Vec<Vec<String>> {
        let mut rows = Vec::new();
        for (i, panel) in self.panels.iter().enumerate() {
            for cells in &panel.table_rows {
                let key = cells.first().map(|c| classify(c)).unwrap_or_else(|| classify(""));
                let mut row = Vec::with_capacity(cells.len() + 2);
                row.push((i + 1).to_string());
                row.push(key);
                row.extend(cells.iter().cloned());
                rows.push(row);
            }
        }
        rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section(name: &str, c: u32, w: u32, n: u32) -> SectionResult {
        SectionResult { name: s!(name), correct: c, wrong: w, not_answered: n }
    }

    #[test]
    fn record_moves_one_counter() {
        let mut s = SectionResult::new("Maths");
        s.record(Outcome::Correct);
        s.record(Outcome::Wrong);
        s.record(Outcome::NotAnswered);
        s.record(Outcome::NotAnswered);
        assert_eq!((s.correct, s.wrong, s.not_answered), (1, 1, 2));
        assert_eq!(s.total(), 4);
    }

    #[test]
    fn overall_is_sum_of_sections() {
        let report = Report::new(
            Vec::new(),
            vec![section("A", 3, 1, 0), section("B", 0, 0, 2)],
        );
        assert_eq!(
            report.overall(),
            OverallResult { correct: 3, wrong: 1, not_answered: 2 }
        );
    }

    #[test]
    fn overall_of_nothing_is_zero() {
        assert_eq!(OverallResult::sum(&[]), OverallResult::default());
    }

    #[test]
    fn section_rows_end_with_overall() {
        let report = Report::new(Vec::new(), vec![section("Physics", 2, 1, 1)]);
        let rows = report.section_rows();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], vec!["Physics", "2", "1", "1", "4"]);
        assert_eq!(rows[1], vec!["Overall", "2", "1", "1", "4"]);
    }

    #[test]
    fn panel_rows_carry_panel_number_and_key() {
        let panels = vec![
            InfoPanel { table_rows: vec![vec![s!("Candidate Name"), s!("Jane Doe")]] },
            InfoPanel { table_rows: Vec::new() },
            InfoPanel { table_rows: vec![vec![s!("Roll No 42"), s!("1234")], Vec::new()] },
        ];
        let rows = Report::new(panels, Vec::new()).panel_rows();
        assert_eq!(rows[0], vec!["1", "candidate-name", "Candidate Name", "Jane Doe"]);
        assert_eq!(rows[1], vec!["3", "roll-no", "Roll No 42", "1234"]);
        assert_eq!(rows[2], vec!["3", "no-class"]);
    }
}
