// src/specs/info_panel.rs
//
// Candidate/exam metadata panels.
//
//   <div class="main-info-pnl">
//     <table>
//       <tr><td>Candidate Name</td><td>Jane Doe</td></tr>
//       ...
//
// Only the first table inside each panel is read. A panel without a table
// still produces an (empty) InfoPanel so panel numbering stays stable.

use crate::core::Node;
use crate::report::InfoPanel;

const PANEL_TAG: &str = "div";
const PANEL_CLASS: &str = "main-info-pnl";

pub fn extract_panels(root: Node<'_>) -> Vec<InfoPanel> {
    root.find_all(PANEL_TAG, PANEL_CLASS).map(read_panel).collect()
}

fn read_panel(panel: Node<'_>) -> InfoPanel {
    let table_rows = match panel.first_descendant("table") {
        Some(table) => table
            .find_all_tag("tr")
            .map(|tr| tr.find_all_tag("td").map(|td| td.text()).collect::<Vec<String>>())
            .collect(),
        None => Vec::new(),
    };
    InfoPanel { table_rows }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Document;

    #[test]
    fn reads_first_table_only() {
        let doc = Document::parse(r#"
            <div class="main-info-pnl">
              <strong>Candidate</strong>
              <table>
                <tr><td> Name </td><td>Jane Doe</td></tr>
                <tr><td>Roll No</td><td> 1234 </td></tr>
              </table>
              <table><tr><td>ignored</td></tr></table>
            </div>
        "#);
        let panels = extract_panels(doc.root());
        assert_eq!(panels.len(), 1);
        assert_eq!(
            panels[0].table_rows,
            vec![vec![s!("Name"), s!("Jane Doe")], vec![s!("Roll No"), s!("1234")]]
        );
    }

    #[test]
    fn header_cells_are_not_data_cells() {
        let doc = Document::parse(r#"
            <div class="main-info-pnl"><table>
              <tr><th>Field</th><th>Value</th></tr>
              <tr><td>Exam</td><td>Mock 3</td></tr>
            </table></div>
        "#);
        let panels = extract_panels(doc.root());
        assert_eq!(panels[0].table_rows, vec![Vec::<String>::new(), vec![s!("Exam"), s!("Mock 3")]]);
    }

    #[test]
    fn panel_without_table_is_kept_empty() {
        let doc = Document::parse(r#"
            <div class="main-info-pnl"><p>No data</p></div>
            <div class="main-info-pnl"><table><tr><td>x</td></tr></table></div>
        "#);
        let panels = extract_panels(doc.root());
        assert_eq!(panels.len(), 2);
        assert!(panels[0].table_rows.is_empty());
        assert_eq!(panels[1].table_rows, vec![vec![s!("x")]]);
    }
}
