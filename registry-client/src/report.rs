//! Report helpers
//!
//! Pure functions over the rows already loaded for a month: name filtering
//! and CSV export. Neither touches the server; printing stays with the
//! host environment.

use shared::models::BirthdayRow;

/// Relation label shown for primary rows
const PRIMARY_RELATION_LABEL: &str = "Member";

/// Placeholder for missing phone/address values
const MISSING_FIELD_PLACEHOLDER: &str = "-";

/// Fixed CSV header - five columns
const CSV_HEADER: [&str; 5] = ["Day", "Name", "Relation", "Phone", "Address"];

/// MIME type for the exported file
pub const CSV_MIME_TYPE: &str = "text/csv";

/// Case-insensitive substring filter on the member name
pub fn filter_by_name(rows: &[BirthdayRow], query: &str) -> Vec<BirthdayRow> {
    let q = query.trim().to_lowercase();
    if q.is_empty() {
        return rows.to_vec();
    }
    rows.iter()
        .filter(|r| r.name.to_lowercase().contains(&q))
        .cloned()
        .collect()
}

/// Export the visible rows as semicolon-separated CSV.
///
/// Every field is double-quoted with embedded quotes doubled; the day is
/// zero-padded to two digits; missing phone/address render as "-".
pub fn export_csv(rows: &[BirthdayRow]) -> String {
    let header = CSV_HEADER
        .iter()
        .map(|c| quote(c))
        .collect::<Vec<_>>()
        .join(";");

    let mut lines = vec![header];
    for row in rows {
        let fields = [
            format!("{:02}", row.birth_day),
            row.name.clone(),
            relation_label(row),
            placeholder_if_missing(row.phone.as_deref()),
            placeholder_if_missing(row.address.as_deref()),
        ];
        lines.push(
            fields
                .iter()
                .map(|f| quote(f))
                .collect::<Vec<_>>()
                .join(";"),
        );
    }
    lines.join("\n")
}

/// Download filename for a month's export, e.g. `birthdays-05.csv`
pub fn csv_filename(month: u32) -> String {
    format!("birthdays-{month:02}.csv")
}

/// Relation column: "Member" for primaries, the stored relation (or blank)
/// otherwise
fn relation_label(row: &BirthdayRow) -> String {
    if row.is_primary {
        PRIMARY_RELATION_LABEL.to_string()
    } else {
        row.relation.clone().unwrap_or_default()
    }
}

fn placeholder_if_missing(value: Option<&str>) -> String {
    value
        .filter(|v| !v.is_empty())
        .unwrap_or(MISSING_FIELD_PLACEHOLDER)
        .to_string()
}

fn quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(
        name: &str,
        day: i64,
        is_primary: bool,
        relation: Option<&str>,
        phone: Option<&str>,
        address: Option<&str>,
    ) -> BirthdayRow {
        BirthdayRow {
            id: day,
            name: name.into(),
            birthdate: format!("1990-05-{day:02}"),
            birth_day: day,
            is_primary,
            relation: relation.map(String::from),
            phone: phone.map(String::from),
            address: address.map(String::from),
        }
    }

    /// Parse the CSV back the way a spreadsheet import would: split on `;`,
    /// strip the outer quotes, un-double the embedded ones.
    fn parse_csv(csv: &str) -> Vec<Vec<String>> {
        csv.lines()
            .map(|line| {
                line.split(';')
                    .map(|f| {
                        f.strip_prefix('"')
                            .and_then(|f| f.strip_suffix('"'))
                            .unwrap_or(f)
                            .replace("\"\"", "\"")
                    })
                    .collect()
            })
            .collect()
    }

    #[test]
    fn filter_is_case_insensitive_substring() {
        let rows = vec![
            row("Ana Silva", 1, true, None, Some("11999998888"), Some("Rua A")),
            row("Leo Silva", 3, false, Some("Son"), None, None),
            row("Rui Costa", 7, true, None, None, None),
        ];

        let hits = filter_by_name(&rows, "SILVA");
        let names: Vec<_> = hits.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["Ana Silva", "Leo Silva"]);

        // Blank query keeps everything in order
        assert_eq!(filter_by_name(&rows, "  ").len(), 3);
    }

    #[test]
    fn csv_round_trips_the_visible_rows() {
        let rows = vec![
            row("Ana Silva", 1, true, None, Some("11999998888"), Some("Rua A, 10")),
            row("Leo Silva", 3, false, Some("Son"), None, None),
            row("Bia Silva", 9, false, None, Some(""), Some("")),
        ];

        let parsed = parse_csv(&export_csv(&rows));
        assert_eq!(parsed[0], ["Day", "Name", "Relation", "Phone", "Address"]);
        assert_eq!(parsed[1], ["01", "Ana Silva", "Member", "11999998888", "Rua A, 10"]);
        assert_eq!(parsed[2], ["03", "Leo Silva", "Son", "-", "-"]);
        // Blank relation stays blank; empty strings render as the dash too
        assert_eq!(parsed[3], ["09", "Bia Silva", "", "-", "-"]);
    }

    #[test]
    fn embedded_quotes_are_doubled_and_restored() {
        let rows = vec![row(
            r#"Jo "Jojo" Reis"#,
            12,
            true,
            None,
            None,
            Some(r#"Sitio "Bela Vista""#),
        )];

        let csv = export_csv(&rows);
        assert!(csv.contains(r#""Jo ""Jojo"" Reis""#));

        let parsed = parse_csv(&csv);
        assert_eq!(parsed[1][1], r#"Jo "Jojo" Reis"#);
        assert_eq!(parsed[1][4], r#"Sitio "Bela Vista""#);
    }

    #[test]
    fn filename_embeds_zero_padded_month() {
        assert_eq!(csv_filename(5), "birthdays-05.csv");
        assert_eq!(csv_filename(12), "birthdays-12.csv");
    }
}
