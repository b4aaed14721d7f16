//! Spreadsheet export of a state's restaurants.
//!
//! One "Summary" sheet, one sheet listing every restaurant, and one sheet
//! per LGA. LGA sheets are sorted by name; restaurants without an LGA are
//! grouped under "Unknown".

use chow_common::Restaurant;
use chrono::NaiveDate;
use rust_xlsxwriter::{Format, Workbook, Worksheet, XlsxError};
use std::collections::BTreeMap;

pub const XLSX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Excel allows 31; leave room for suffixes
const MAX_LGA_SHEET_NAME: usize = 28;
const MAX_SHEET_NAME: usize = 31;
const UNKNOWN_LGA: &str = "Unknown";

const COLUMNS: &[(&str, f64)] = &[
    ("#", 6.0),
    ("Name", 32.0),
    ("City", 16.0),
    ("LGA", 20.0),
    ("Address", 40.0),
    ("Rating", 8.0),
    ("Cuisine", 14.0),
    ("Specialties", 30.0),
    ("Website", 45.0),
];

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("Spreadsheet error: {0}")]
    Xlsx(#[from] XlsxError),
}

/// `{state}[_{lga}]_Restaurants_{YYYYMMDD}.xlsx`.
///
/// Everything outside `[A-Za-z0-9._-]` becomes `_`, so the name is always a
/// valid quoted header parameter.
pub fn export_filename(state: &str, lga: Option<&str>, date: NaiveDate) -> String {
    let mut stem = state.to_string();
    if let Some(lga) = lga {
        stem.push('_');
        stem.push_str(lga);
    }
    let stem: String = stem
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                c
            } else {
                '_'
            }
        })
        .collect();
    format!("{}_Restaurants_{}.xlsx", stem, date.format("%Y%m%d"))
}

fn truncate(name: &str, max: usize) -> String {
    name.chars().take(max).collect()
}

/// Sheet name for each LGA: truncated, then suffixed `~2`, `~3`, ... until
/// it clashes with no earlier sheet. Excel compares names case-insensitively.
fn lga_sheet_names<'a>(
    lgas: impl Iterator<Item = &'a str>,
    taken: &[&str],
) -> Vec<String> {
    let mut used: Vec<String> = taken.iter().map(|t| t.to_lowercase()).collect();
    let mut names = Vec::new();

    for lga in lgas {
        let base = truncate(lga, MAX_LGA_SHEET_NAME);
        let mut name = base.clone();
        let mut n = 2;
        while used.contains(&name.to_lowercase()) {
            name = format!("{}~{}", base, n);
            n += 1;
        }
        used.push(name.to_lowercase());
        names.push(name);
    }

    names
}

fn group_by_lga(restaurants: &[Restaurant]) -> BTreeMap<&str, Vec<&Restaurant>> {
    let mut groups: BTreeMap<&str, Vec<&Restaurant>> = BTreeMap::new();
    for r in restaurants {
        groups
            .entry(r.lga.as_deref().unwrap_or(UNKNOWN_LGA))
            .or_default()
            .push(r);
    }
    groups
}

/// Build the workbook and return the `.xlsx` bytes
pub fn build_workbook(
    state: &str,
    restaurants: &[Restaurant],
    generated: &str,
) -> Result<Vec<u8>, ExportError> {
    let mut workbook = Workbook::new();
    let title = Format::new().set_bold().set_font_size(14);
    let bold = Format::new().set_bold();
    let groups = group_by_lga(restaurants);

    let summary = workbook.add_worksheet();
    summary.set_name("Summary")?;
    write_summary(summary, state, restaurants.len(), &groups, generated, &title, &bold)?;

    let all_name = truncate(&format!("All {} Restaurants", state), MAX_SHEET_NAME);
    let all = workbook.add_worksheet();
    all.set_name(&all_name)?;
    write_listing(all, restaurants.iter(), &bold)?;

    let sheet_names = lga_sheet_names(groups.keys().copied(), &["Summary", all_name.as_str()]);
    for (name, members) in sheet_names.iter().zip(groups.values()) {
        let sheet = workbook.add_worksheet();
        sheet.set_name(name)?;
        write_listing(sheet, members.iter().copied(), &bold)?;
    }

    Ok(workbook.save_to_buffer()?)
}

fn write_summary(
    sheet: &mut Worksheet,
    state: &str,
    total: usize,
    groups: &BTreeMap<&str, Vec<&Restaurant>>,
    generated: &str,
    title: &Format,
    bold: &Format,
) -> Result<(), XlsxError> {
    sheet.write_string_with_format(0, 0, format!("{} Restaurants", state), title)?;
    sheet.write_string(1, 0, format!("Generated: {}", generated))?;
    sheet.write_string_with_format(2, 0, "Total restaurants", bold)?;
    sheet.write_number(2, 1, total as f64)?;

    sheet.write_string_with_format(4, 0, "LGA", bold)?;
    sheet.write_string_with_format(4, 1, "Restaurants", bold)?;
    sheet.write_string_with_format(4, 2, "Percentage", bold)?;

    for (row, (lga, members)) in (5u32..).zip(groups) {
        let share = if total == 0 {
            0.0
        } else {
            members.len() as f64 * 100.0 / total as f64
        };
        sheet.write_string(row, 0, *lga)?;
        sheet.write_number(row, 1, members.len() as f64)?;
        sheet.write_string(row, 2, format!("{:.1}%", share))?;
    }

    sheet.set_column_width(0, 28.0)?;
    sheet.set_column_width(1, 14.0)?;
    sheet.set_column_width(2, 12.0)?;
    Ok(())
}

fn write_listing<'a>(
    sheet: &mut Worksheet,
    restaurants: impl Iterator<Item = &'a Restaurant>,
    bold: &Format,
) -> Result<(), XlsxError> {
    for (col, (header, width)) in (0u16..).zip(COLUMNS) {
        sheet.write_string_with_format(0, col, *header, bold)?;
        sheet.set_column_width(col, *width)?;
    }

    let mut last_row = 0u32;
    for (row, r) in (1u32..).zip(restaurants) {
        sheet.write_number(row, 0, row as f64)?;
        sheet.write_string(row, 1, &r.name)?;
        sheet.write_string(row, 2, r.city.as_deref().unwrap_or(""))?;
        sheet.write_string(row, 3, r.lga.as_deref().unwrap_or(UNKNOWN_LGA))?;
        sheet.write_string(row, 4, r.location.as_deref().unwrap_or(""))?;
        match r.rating {
            Some(rating) => sheet.write_number(row, 5, rating)?,
            None => sheet.write_string(row, 5, "N/A")?,
        };
        sheet.write_string(row, 6, &r.cuisine)?;
        sheet.write_string(row, 7, r.specialties.join(", "))?;
        sheet.write_string(row, 8, &r.url)?;
        last_row = row;
    }

    sheet.set_freeze_panes(1, 0)?;
    sheet.autofilter(0, 0, last_row, (COLUMNS.len() - 1) as u16)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chow_common::{normalize, RawRestaurant};

    fn sample() -> Vec<Restaurant> {
        vec![
            normalize(RawRestaurant::new("Yellow Chilli").with_location("Victoria Island, Lagos"))
                .unwrap(),
            normalize(RawRestaurant::new("Amala Shitta").with_location("Surulere, Lagos")).unwrap(),
            normalize(RawRestaurant::new("Mama Cass").with_place("Lagos", "Lagos", "")).unwrap(),
        ]
    }

    #[test]
    fn test_filename() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        assert_eq!(export_filename("Lagos", None, date), "Lagos_Restaurants_20240309.xlsx");
        assert_eq!(
            export_filename("Lagos", Some("Lagos Mainland"), date),
            "Lagos_Lagos_Mainland_Restaurants_20240309.xlsx"
        );
    }

    #[test]
    fn test_filename_strips_header_breaking_chars() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        assert_eq!(
            export_filename("Lagos", Some("a\nb"), date),
            "Lagos_a_b_Restaurants_20240309.xlsx"
        );
        let name = export_filename("Lagos", Some("x\"; filename=evil.exe"), date);
        assert_eq!(name, "Lagos_x___filename_evil.exe_Restaurants_20240309.xlsx");
        assert!(name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-')));
    }

    #[test]
    fn test_lga_sheet_names_unique() {
        let long_a = "Local Government Area Number One";
        let long_b = "Local Government Area Number Two";
        let names = lga_sheet_names(
            [long_a, long_b, "summary"].into_iter(),
            &["Summary", "All Lagos Restaurants"],
        );
        assert_eq!(names[0], "Local Government Area Number");
        assert_eq!(names[1], "Local Government Area Number~2");
        assert_eq!(names[2], "summary~2");
        assert!(names.iter().all(|n| n.chars().count() <= MAX_SHEET_NAME));
    }

    #[test]
    fn test_workbook_with_colliding_lga_prefixes() {
        let mut records = sample();
        records[0].lga = Some("Local Government Area Number One".to_string());
        records[1].lga = Some("Local Government Area Number Two".to_string());
        assert!(build_workbook("Lagos", &records, "now").is_ok());
    }

    #[test]
    fn test_groups_sorted_with_unknown() {
        let mut records = sample();
        records[2].lga = None;
        let groups = group_by_lga(&records);
        let names: Vec<&str> = groups.keys().copied().collect();
        assert_eq!(names, vec!["Eti-Osa", "Surulere", "Unknown"]);
    }

    #[test]
    fn test_workbook_is_zip() {
        let bytes = build_workbook("Lagos", &sample(), "2024-03-09 12:00").unwrap();
        assert!(bytes.starts_with(b"PK"));
    }

    #[test]
    fn test_empty_workbook() {
        let bytes = build_workbook("Kaduna", &[], "2024-03-09 12:00").unwrap();
        assert!(bytes.starts_with(b"PK"));
    }

    #[test]
    fn test_long_lga_sheet_name() {
        let mut records = sample();
        records[0].lga = Some("An Extremely Long Local Government Area Name".to_string());
        assert!(build_workbook("Lagos", &records, "now").is_ok());
    }
}
