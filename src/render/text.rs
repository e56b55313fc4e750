// src/render/text.rs
//
// Plain-text report for terminals and the clipboard.

use crate::core::sanitize::normalize_ws;
use crate::report::{InfoPanel, Report};

pub fn render(report: &Report) -> String {
    let mut out = render_panels(report.panels());
    if !out.is_empty() {
        out.push('\n');
    }
    out.push_str(&render_sections(report));
    out
}

/// Each panel as a left-aligned grid, columns sized to their widest cell.
pub fn render_panels(panels: &[InfoPanel]) -> String {
    let mut out = String::new();
    for (i, panel) in panels.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(&format!("Info panel {}\n", i + 1));

        if panel.table_rows.is_empty() {
            out.push_str("  (no table)\n");
            continue;
        }

        let rows: Vec<Vec<String>> = panel
            .table_rows
            .iter()
            .map(|r| r.iter().map(|c| normalize_ws(c)).collect())
            .collect();
        let widths = column_widths(&rows);

        for row in &rows {
            let cells: Vec<String> = row
                .iter()
                .enumerate()
                .map(|(ci, c)| format!("{:<w$}", c, w = widths[ci]))
                .collect();
            out.push_str("  ");
            out.push_str(cells.join("  ").trim_end());
            out.push('\n');
        }
    }
    out
}

/// Section table with a trailing `Overall` row; counts right-aligned.
pub fn render_sections(report: &Report) -> String {
    let mut rows = vec![Report::section_headers()];
    rows.extend(report.section_rows());
    let widths = column_widths(&rows);

    let mut out = String::new();
    let last = rows.len() - 1;
    for (ri, row) in rows.iter().enumerate() {
        if ri == last {
            let rule = widths.iter().sum::<usize>() + 2 * (widths.len() - 1);
            out.push_str(&"-".repeat(rule));
            out.push('\n');
        }
        let cells: Vec<String> = row
            .iter()
            .enumerate()
            .map(|(ci, c)| {
                if ci == 0 {
                    format!("{:<w$}", c, w = widths[ci])
                } else {
                    format!("{:>w$}", c, w = widths[ci])
                }
            })
            .collect();
        out.push_str(&cells.join("  "));
        out.push('\n');
    }
    out
}

fn column_widths(rows: &[Vec<String>]) -> Vec<usize> {
    let cols = rows.iter().map(|r| r.len()).max().unwrap_or(0);
    (0..cols)
        .map(|ci| {
            rows.iter()
                .filter_map(|r| r.get(ci))
                .map(|c| c.chars().count())
                .max()
                .unwrap_or(0)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::SectionResult;

    fn sample() -> Report {
        let mut physics = SectionResult::new("Physics");
        physics.correct = 3;
        physics.wrong = 1;
        let mut chem = SectionResult::new("Chemistry");
        chem.not_answered = 2;
        Report::new(
            vec![
                InfoPanel { table_rows: vec![
                    vec![s!("Name"), s!("Jane\n  Doe")],
                    vec![s!("Roll No"), s!("1234")],
                ]},
                InfoPanel::default(),
            ],
            vec![physics, chem],
        )
    }

    #[test]
    fn panels_are_aligned_and_whitespace_collapsed() {
        let text = render_panels(sample().panels());
        assert_eq!(
            text,
            "Info panel 1\n  Name     Jane Doe\n  Roll No  1234\n\nInfo panel 2\n  (no table)\n"
        );
    }

    #[test]
    fn sections_end_with_overall() {
        let text = render_sections(&sample());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Section    Correct  Wrong  Not answered  Total");
        assert_eq!(lines[1], "Physics          3      1             0      4");
        assert_eq!(lines[2], "Chemistry        0      0             2      2");
        assert!(lines[3].chars().all(|c| c == '-'));
        assert_eq!(lines[4], "Overall          3      1             2      6");
    }

    #[test]
    fn no_panels_means_sections_only() {
        let report = Report::new(Vec::new(), Vec::new());
        assert_eq!(render(&report), render_sections(&report));
    }
}
