// tests/extract_report.rs
//
// End-to-end extraction on hand-written result pages. No network.
//
use exam_scrape::specs::exam_result::parse_markup;
use exam_scrape::{OverallResult, Report, SectionResult};

/// One `div.question-pnl`. `meta` are the bold label/value cells.
fn question(meta: &[&str], right: Option<&str>, selected: Option<&str>) -> String {
    let meta: String = meta.iter().map(|m| format!(r#"<td class="bold">{m}</td>"#)).collect();
    let right = right
        .map(|r| format!(r#"<tr><td>Correct Answer :</td><td class="rightAns">{r}</td></tr>"#))
        .unwrap_or_default();
    let selected = selected
        .map(|s| format!(
            r#"<table class="menu-tbl"><tbody>
                 <tr><td>Status :</td><td>Answered</td></tr>
                 <tr><td>Chosen Option :</td><td>{s}</td></tr>
               </tbody></table>"#
        ))
        .unwrap_or_default();
    format!(
        r#"<div class="question-pnl"><table class="questionRowTbl">
             <tr>{meta}</tr>{right}
           </table>{selected}</div>"#
    )
}

fn section(name: &str, questions: &[String]) -> String {
    format!(
        r#"<div class="section-cntnr">
             <div class="section-lbl"><span class="bold">{name}</span></div>
             {}
           </div>"#,
        questions.concat()
    )
}

fn page(panels: &str, sections: &[String]) -> String {
    format!(
        r#"<!DOCTYPE html><html><head><title>Response Sheet</title></head>
           <body><div class="container">{panels}<div class="grp-cntnr">{}</div></div></body></html>"#,
        sections.concat()
    )
}

fn correct(n: u32) -> String { question(&["Q.No:", &format!("Question {n}")], Some("Ans: 2"), Some("Selected: 2")) }
fn wrong(n: u32) -> String { question(&["Q.No:", &format!("Question {n}")], Some("Ans: 2"), Some("Selected: 3")) }
fn skipped(n: u32) -> String { question(&["Q.No:", &format!("Question {n}")], Some("Ans: 2"), Some("--")) }

fn only_section(report: &Report) -> &SectionResult {
    assert_eq!(report.sections().len(), 1, "expected exactly one section");
    &report.sections()[0]
}

fn counts(s: &SectionResult) -> (u32, u32, u32) {
    (s.correct, s.wrong, s.not_answered)
}

#[test]
fn scenario_a_matching_digit_is_correct() {
    let html = page("", &[section("Physics", &[correct(1)])]);
    let report = parse_markup(&html).unwrap();
    assert_eq!(counts(only_section(&report)), (1, 0, 0));
}

#[test]
fn scenario_b_different_digit_is_wrong() {
    let html = page("", &[section("Physics", &[wrong(1)])]);
    let report = parse_markup(&html).unwrap();
    assert_eq!(counts(only_section(&report)), (0, 1, 0));
}

#[test]
fn scenario_c_single_bold_cell_is_not_answered() {
    let q = question(&["Q.No:"], Some("Ans: 2"), Some("Selected: 2"));
    let html = page("", &[section("Physics", &[q])]);
    let report = parse_markup(&html).unwrap();
    assert_eq!(counts(only_section(&report)), (0, 0, 1));
}

#[test]
fn scenario_d_missing_right_answer_is_not_answered() {
    let q = question(&["Q.No:", "Question 1"], None, Some("4"));
    let html = page("", &[section("Physics", &[q])]);
    let report = parse_markup(&html).unwrap();
    assert_eq!(counts(only_section(&report)), (0, 0, 1));
}

#[test]
fn scenario_e_empty_section_is_listed_with_zeros() {
    let html = page("", &[section("Physics 101", &[])]);
    let report = parse_markup(&html).unwrap();
    assert_eq!(report.sections(), &[SectionResult::new("Physics 101")]);
    assert_eq!(report.overall(), OverallResult::default());
}

#[test]
fn scenario_f_overall_sums_sections() {
    let html = page("", &[
        section("Maths", &[correct(1), correct(2), wrong(3), correct(4)]),
        section("English", &[skipped(5), question(&["Q.No:"], None, None)]),
    ]);
    let report = parse_markup(&html).unwrap();

    let names: Vec<&str> = report.sections().iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["Maths", "English"]);
    assert_eq!(counts(&report.sections()[0]), (3, 1, 0));
    assert_eq!(counts(&report.sections()[1]), (0, 0, 2));
    assert_eq!(
        report.overall(),
        OverallResult { correct: 3, wrong: 1, not_answered: 2 }
    );
}

#[test]
fn every_question_panel_counts_exactly_once() {
    let questions = vec![
        correct(1),
        wrong(2),
        skipped(3),
        question(&["Q.No:"], None, None),
        question(&["Q.No:", "Question 5"], None, None),
        question(&["Q.No:", "Question 6"], Some("Option 3"), Some("Chosen: 3 (was 1)")),
    ];
    let n = questions.len() as u32;
    let html = page("", &[section("Mixed", &questions)]);
    let report = parse_markup(&html).unwrap();

    let s = only_section(&report);
    assert_eq!(s.total(), n);
    assert_eq!(counts(s), (2, 1, 3));

    let sum: u32 = report.sections().iter().map(|s| s.total()).sum();
    assert_eq!(report.overall().total(), sum);
}

#[test]
fn info_panels_keep_document_order_and_tolerate_missing_tables() {
    let panels = r#"
        <div class="main-info-pnl">
          <strong>Candidate Details</strong>
          <table>
            <tr><td>Participant ID</td><td> CAND0042 </td></tr>
            <tr><td>Participant Name</td><td>Jane Doe</td></tr>
            <tr><td>Test Date</td><td>12/03/2024</td></tr>
          </table>
        </div>
        <div class="main-info-pnl"><strong>Notes</strong></div>
    "#;
    let html = page(panels, &[section("Physics", &[correct(1)])]);
    let report = parse_markup(&html).unwrap();

    assert_eq!(report.panels().len(), 2);
    assert_eq!(
        report.panels()[0].table_rows,
        vec![
            vec!["Participant ID".to_string(), "CAND0042".to_string()],
            vec!["Participant Name".to_string(), "Jane Doe".to_string()],
            vec!["Test Date".to_string(), "12/03/2024".to_string()],
        ]
    );
    assert!(report.panels()[1].table_rows.is_empty());

    let keys: Vec<String> = report.panel_rows().into_iter().map(|r| r[1].clone()).collect();
    assert_eq!(keys, vec!["participant-id", "participant-name", "test-date"]);
}

#[test]
fn page_without_markers_is_an_empty_report() {
    let report = parse_markup("<html><body><p>Session expired</p></body></html>").unwrap();
    assert!(report.is_empty());
    assert_eq!(report.overall().total(), 0);
}
