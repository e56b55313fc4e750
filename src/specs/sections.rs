// src/specs/sections.rs
//
// Per-section question tallies.
//
//   <div class="section-cntnr">
//     <span class="bold">Physics</span>
//     <div class="question-pnl">
//       <td class="bold">Q.No</td><td class="bold">Question 1</td>
//       <td class="rightAns">Ans: 2</td>
//       <table class="menu-tbl"> … <td>Chosen Option: 2</td></table>
//     </div>
//     …
//
// Every `span.bold` is a section label. Its questions are the
// `div.question-pnl` elements under the nearest enclosing `div.section-cntnr`.
// A label outside any container still yields a section, with zero counts.

use crate::config::consts::MISSING_CELL;
use crate::core::Node;
use crate::core::sanitize::first_digit;
use crate::report::{Outcome, SectionResult};

const LABEL: (&str, &str) = ("span", "bold");
const CONTAINER: (&str, &str) = ("div", "section-cntnr");
const QUESTION: (&str, &str) = ("div", "question-pnl");
const META_CELL: (&str, &str) = ("td", "bold");
const RIGHT_ANSWER: (&str, &str) = ("td", "rightAns");
const SELECTION: (&str, &str) = ("table", "menu-tbl");

pub fn extract_sections(root: Node<'_>) -> Vec<SectionResult> {
    root.find_all(LABEL.0, LABEL.1).map(tally_section).collect()
}

fn tally_section(label: Node<'_>) -> SectionResult {
    let mut result = SectionResult::new(label.text());

    if let Some(container) = label.nearest_ancestor(CONTAINER.0, CONTAINER.1) {
        for question in container.find_all(QUESTION.0, QUESTION.1) {
            result.record(classify_question(question));
        }
    }
    result
}

/// Outcome of one `div.question-pnl`.
///
/// Panels with fewer than two meta cells never had a question rendered,
/// so they count as not answered without looking at the answers.
pub fn classify_question(question: Node<'_>) -> Outcome {
    if question.find_all(META_CELL.0, META_CELL.1).nth(1).is_none() {
        return Outcome::NotAnswered;
    }

    let right = question
        .find(RIGHT_ANSWER.0, RIGHT_ANSWER.1)
        .map(|td| td.text())
        .unwrap_or_else(|| s!(MISSING_CELL));

    let selected = question
        .find(SELECTION.0, SELECTION.1)
        .and_then(|table| table.find_all_tag("td").last())
        .map(|td| td.text())
        .unwrap_or_else(|| s!(MISSING_CELL));

    compare_answers(&right, &selected)
}

/// Compare the first digit of each answer text.
pub fn compare_answers(right: &str, selected: &str) -> Outcome {
    match (first_digit(right), first_digit(selected)) {
        (Some(r), Some(s)) if r == s => Outcome::Correct,
        (Some(_), Some(_))           => Outcome::Wrong,
        _                            => Outcome::NotAnswered,
    }
}
