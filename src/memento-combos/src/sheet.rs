//! Synergy spreadsheet ingestion
//!
//! The sheet is laid out as nested sections: a row with a Civilization value
//! opens a civilization section, and inside it each row with a Leader value
//! opens a leader group. Combo rows hang off the current group.
//!
//! CSV exports are always readable. ODS/XLSX need the `spreadsheet` feature.

use crate::error::{Error, Result};
use std::path::Path;
use tracing::warn;

pub const CIV_COL: &str = "Civilization";
pub const LEADER_COL: &str = "Leader";
pub const THEME_COL: &str = "Theme";
pub const MEM_1_COL: &str = "Memento 1";
pub const MEM_2_COL: &str = "Memento 2";

/// One spreadsheet row, restricted to the columns we care about
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SheetRow {
    pub civilization: Option<String>,
    pub leader: Option<String>,
    pub theme: Option<String>,
    pub memento_one: Option<String>,
    pub memento_two: Option<String>,
}

/// Rows between one Leader value and the next, within a civilization
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaderBlock {
    /// Leader cell of the row that opened the group
    pub label: String,
    /// Includes the opening row
    pub rows: Vec<SheetRow>,
}

/// Rows between one Civilization value and the next
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CivSection {
    pub label: String,
    pub groups: Vec<LeaderBlock>,
}

/// Column positions resolved from the header row
#[derive(Debug, Clone, Copy)]
struct Columns {
    civilization: usize,
    leader: usize,
    theme: usize,
    memento_one: usize,
    memento_two: usize,
}

impl Columns {
    fn from_header<S: AsRef<str>>(header: &[S]) -> Result<Self> {
        let find = |name: &'static str| {
            header
                .iter()
                .position(|h| h.as_ref().trim() == name)
                .ok_or(Error::MissingColumn(name))
        };
        Ok(Self {
            civilization: find(CIV_COL)?,
            leader: find(LEADER_COL)?,
            theme: find(THEME_COL)?,
            memento_one: find(MEM_1_COL)?,
            memento_two: find(MEM_2_COL)?,
        })
    }

    fn row<S: AsRef<str>>(&self, cells: &[S]) -> SheetRow {
        let cell = |idx: usize| {
            cells
                .get(idx)
                .map(|c| c.as_ref())
                .filter(|c| !c.trim().is_empty())
                .map(str::to_string)
        };
        SheetRow {
            civilization: cell(self.civilization),
            leader: cell(self.leader),
            theme: cell(self.theme),
            memento_one: cell(self.memento_one),
            memento_two: cell(self.memento_two),
        }
    }
}

/// Build rows from a header and raw cell text
pub fn rows_from_cells<S: AsRef<str>>(header: &[S], cells: &[Vec<S>]) -> Result<Vec<SheetRow>> {
    let columns = Columns::from_header(header)?;
    Ok(cells.iter().map(|c| columns.row(c)).collect())
}

/// Read a CSV export of the spreadsheet
pub fn read_csv<P: AsRef<Path>>(path: P) -> Result<Vec<SheetRow>> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(path.as_ref())?;

    let header: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
    let columns = Columns::from_header(&header)?;

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        let cells: Vec<&str> = record.iter().collect();
        rows.push(columns.row(&cells));
    }
    Ok(rows)
}

/// Read a worksheet from an ODS/XLSX/XLS workbook
///
/// Uses the first worksheet unless `sheet` names one.
#[cfg(feature = "spreadsheet")]
pub fn read_workbook<P: AsRef<Path>>(path: P, sheet: Option<&str>) -> Result<Vec<SheetRow>> {
    use calamine::{open_workbook_auto, Data, Reader};

    let mut workbook = open_workbook_auto(path.as_ref())?;
    let name = match sheet {
        Some(name) => name.to_string(),
        None => workbook
            .sheet_names()
            .first()
            .cloned()
            .ok_or_else(|| Error::MissingSheet("<first>".to_string()))?,
    };

    let range = workbook
        .worksheet_range(&name)
        .map_err(|_| Error::MissingSheet(name.clone()))?;

    let text = |cell: &Data| match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        other => other.to_string(),
    };

    let mut table = range.rows().map(|r| r.iter().map(text).collect::<Vec<_>>());
    let Some(header) = table.next() else {
        return Err(Error::MissingColumn(CIV_COL));
    };
    let body: Vec<Vec<String>> = table.collect();
    rows_from_cells(&header, &body)
}

/// Read a spreadsheet, choosing the reader from the file extension
pub fn read_rows<P: AsRef<Path>>(path: P, sheet: Option<&str>) -> Result<Vec<SheetRow>> {
    let path = path.as_ref();
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    match ext.as_str() {
        "csv" => {
            if let Some(name) = sheet {
                warn!("Ignoring sheet '{}' for CSV input {}", name, path.display());
            }
            read_csv(path)
        }
        #[cfg(feature = "spreadsheet")]
        "ods" | "xlsx" | "xlsm" | "xls" => read_workbook(path, sheet),
        _ => Err(Error::UnsupportedFormat(path.to_path_buf())),
    }
}

/// Split flat rows into civilization sections and leader groups
///
/// Header rows for civilizations carry no combo and are not kept. Rows
/// before the first civilization, or before the first leader of a section,
/// belong to no group and are dropped.
pub fn split_sections(rows: &[SheetRow]) -> Vec<CivSection> {
    let mut sections: Vec<CivSection> = Vec::new();

    for row in rows {
        if let Some(civ) = &row.civilization {
            sections.push(CivSection {
                label: civ.trim().to_string(),
                groups: Vec::new(),
            });
            continue;
        }

        let Some(section) = sections.last_mut() else {
            continue;
        };

        if let Some(leader) = &row.leader {
            section.groups.push(LeaderBlock {
                label: leader.trim().to_string(),
                rows: Vec::new(),
            });
        }

        if let Some(group) = section.groups.last_mut() {
            group.rows.push(row.clone());
        }
    }

    sections
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn row(civ: &str, leader: &str, theme: &str) -> SheetRow {
        let opt = |s: &str| (!s.is_empty()).then(|| s.to_string());
        SheetRow {
            civilization: opt(civ),
            leader: opt(leader),
            theme: opt(theme),
            memento_one: None,
            memento_two: None,
        }
    }

    #[test]
    fn test_split_sections() {
        let rows = vec![
            row("", "Amina", "Orphan"),
            row("AKSUM", "", ""),
            row("", "", "Before any leader"),
            row("", "Amina", "Trade"),
            row("", "", "Trade follow-up"),
            row("", "SCIENTIFIC", "Science"),
            row("GENERIC ANTIQUITY", "", ""),
            row("", "CULTURAL", "Wonders"),
        ];

        let sections = split_sections(&rows);
        assert_eq!(sections.len(), 2);

        let aksum = &sections[0];
        assert_eq!(aksum.label, "AKSUM");
        assert_eq!(aksum.groups.len(), 2);
        assert_eq!(aksum.groups[0].label, "Amina");
        assert_eq!(aksum.groups[0].rows.len(), 2);
        assert_eq!(aksum.groups[1].label, "SCIENTIFIC");

        let generic = &sections[1];
        assert_eq!(generic.label, "GENERIC ANTIQUITY");
        assert_eq!(generic.groups.len(), 1);
        assert_eq!(generic.groups[0].rows[0].theme.as_deref(), Some("Wonders"));
    }

    #[test]
    fn test_rows_from_cells_missing_column() {
        let header = vec!["Civilization", "Leader", "Theme", "Memento 1"];
        let result = rows_from_cells(&header, &[]);
        assert!(matches!(result, Err(Error::MissingColumn("Memento 2"))));
    }

    #[test]
    fn test_rows_from_cells_column_order() {
        let header = vec!["Notes", "Memento 2", "Memento 1", "Theme", "Leader", "Civilization"];
        let cells = vec![vec!["x", "Crown", "Scroll", "Royal", "Amina", ""]];
        let rows = rows_from_cells(&header, &cells).unwrap();
        assert_eq!(rows[0].memento_one.as_deref(), Some("Scroll"));
        assert_eq!(rows[0].memento_two.as_deref(), Some("Crown"));
        assert_eq!(rows[0].civilization, None);
    }

    #[test]
    fn test_read_csv() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("synergies.csv");
        std::fs::write(
            &path,
            "Civilization,Leader,Theme,Memento 1,Memento 2,Notes\n\
             AKSUM,,,,\n\
             ,Amina,Trade Empire,Crown,Scroll,good\n\
             ,,  ,,\n",
        )
        .unwrap();

        let rows = read_rows(&path, None).unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].civilization.as_deref(), Some("AKSUM"));
        assert_eq!(rows[1].theme.as_deref(), Some("Trade Empire"));
        assert_eq!(rows[2], SheetRow::default());
    }

    #[test]
    fn test_csv_ignores_sheet_name() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("synergies.csv");
        std::fs::write(
            &path,
            "Civilization,Leader,Theme,Memento 1,Memento 2\n\
             AKSUM,,,,\n\
             ,Amina,Trade Empire,Crown,Scroll\n",
        )
        .unwrap();

        let rows = read_rows(&path, Some("Synergies")).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].leader.as_deref(), Some("Amina"));
    }

    #[cfg(feature = "spreadsheet")]
    fn write_workbook(path: &Path) {
        use rust_xlsxwriter::Workbook;

        let header = [CIV_COL, LEADER_COL, THEME_COL, MEM_1_COL, MEM_2_COL];
        let mut workbook = Workbook::new();
        {
            let sheet = workbook.add_worksheet();
            sheet.set_name("Notes").unwrap();
            for (col, name) in header.iter().enumerate() {
                sheet.write_string(0, col as u16, *name).unwrap();
            }
            sheet.write_string(1, 0, "AKSUM").unwrap();
            sheet.write_string(2, 1, "Amina").unwrap();
            sheet.write_string(2, 2, "Trade Empire").unwrap();
        }
        {
            let sheet = workbook.add_worksheet();
            sheet.set_name("Synergies").unwrap();
            // Header columns in a different order than the first sheet
            for (col, name) in header.iter().rev().enumerate() {
                sheet.write_string(0, col as u16, *name).unwrap();
            }
            sheet.write_string(1, 4, "NORMANS").unwrap();
            sheet.write_string(2, 3, "William").unwrap();
            sheet.write_number(2, 2, 1066.0).unwrap();
            sheet.write_string(2, 1, "Crown").unwrap();
            sheet.write_string(2, 0, "Scroll").unwrap();
        }
        workbook.save(path).unwrap();
    }

    #[cfg(feature = "spreadsheet")]
    #[test]
    fn test_read_workbook_first_sheet() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("synergies.xlsx");
        write_workbook(&path);

        let rows = read_rows(&path, None).unwrap();
        // Header row is consumed, not returned
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].civilization.as_deref(), Some("AKSUM"));
        assert_eq!(rows[1].leader.as_deref(), Some("Amina"));
        assert_eq!(rows[1].theme.as_deref(), Some("Trade Empire"));
        assert_eq!(rows[1].memento_one, None);
    }

    #[cfg(feature = "spreadsheet")]
    #[test]
    fn test_read_workbook_named_sheet() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("synergies.xlsx");
        write_workbook(&path);

        let rows = read_workbook(&path, Some("Synergies")).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].civilization.as_deref(), Some("NORMANS"));
        assert_eq!(rows[1].leader.as_deref(), Some("William"));
        // Numeric cells come back as text
        assert_eq!(rows[1].theme.as_deref(), Some("1066"));
        assert_eq!(rows[1].memento_one.as_deref(), Some("Crown"));
        assert_eq!(rows[1].memento_two.as_deref(), Some("Scroll"));
    }

    #[cfg(feature = "spreadsheet")]
    #[test]
    fn test_read_workbook_missing_sheet() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("synergies.xlsx");
        write_workbook(&path);

        let result = read_workbook(&path, Some("Absent"));
        assert!(matches!(result, Err(Error::MissingSheet(name)) if name == "Absent"));
    }

    #[test]
    fn test_unsupported_format() {
        let result = read_rows("synergies.txt", None);
        assert!(matches!(result, Err(Error::UnsupportedFormat(_))));
    }
}
