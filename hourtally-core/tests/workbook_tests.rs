use hourtally_core::{
    ErrorKind, HeaderRow, SheetTotal, Tally, TallyConfig, TallyError, read_workbook,
    render_report, workbook_total,
};
use std::fs::File;
use std::io::Write;
use std::path::Path;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

// Helper to create a minimal XLSX with inline-string cells
fn create_timesheet_xlsx(path: &Path, sheets: &[(&str, &[&[&str]])]) -> anyhow::Result<()> {
    let file = File::create(path)?;
    let mut zip = ZipWriter::new(file);
    let options = SimpleFileOptions::default().compression_method(zip::CompressionMethod::Stored);

    zip.start_file("[Content_Types].xml", options)?;
    let mut content_types = String::from(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">
<Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>
<Default Extension="xml" ContentType="application/xml"/>
<Override PartName="/xl/workbook.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml"/>
"#,
    );
    for (i, _) in sheets.iter().enumerate() {
        content_types.push_str(&format!(
            r#"<Override PartName="/xl/worksheets/sheet{}.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.worksheet+xml"/>"#,
            i + 1
        ));
    }
    content_types.push_str("</Types>");
    zip.write_all(content_types.as_bytes())?;

    zip.start_file("_rels/.rels", options)?;
    zip.write_all(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
<Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="xl/workbook.xml"/>
</Relationships>"#.as_bytes())?;

    zip.start_file("xl/workbook.xml", options)?;
    let mut workbook_xml = String::from(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<workbook xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships">
<sheets>
"#,
    );
    for (i, (name, _)) in sheets.iter().enumerate() {
        workbook_xml.push_str(&format!(
            r#"<sheet name="{}" sheetId="{}" r:id="rId{}"/>"#,
            name,
            i + 1,
            i + 1
        ));
    }
    workbook_xml.push_str("</sheets></workbook>");
    zip.write_all(workbook_xml.as_bytes())?;

    zip.start_file("xl/_rels/workbook.xml.rels", options)?;
    let mut rels = String::from(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
"#,
    );
    for (i, _) in sheets.iter().enumerate() {
        rels.push_str(&format!(
            r#"<Relationship Id="rId{}" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet" Target="worksheets/sheet{}.xml"/>"#,
            i + 1,
            i + 1
        ));
    }
    rels.push_str("</Relationships>");
    zip.write_all(rels.as_bytes())?;

    for (i, (_, rows)) in sheets.iter().enumerate() {
        zip.start_file(format!("xl/worksheets/sheet{}.xml", i + 1), options)?;
        let mut sheet_xml = String::from(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<worksheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main"><sheetData>"#,
        );
        for (r, row) in rows.iter().enumerate() {
            sheet_xml.push_str(&format!(r#"<row r="{}">"#, r + 1));
            for (c, value) in row.iter().enumerate() {
                if value.is_empty() {
                    continue;
                }
                let col = (b'A' + c as u8) as char;
                sheet_xml.push_str(&format!(
                    r#"<c r="{}{}" t="inlineStr"><is><t>{}</t></is></c>"#,
                    col,
                    r + 1,
                    value
                ));
            }
            sheet_xml.push_str("</row>");
        }
        sheet_xml.push_str("</sheetData></worksheet>");
        zip.write_all(sheet_xml.as_bytes())?;
    }

    zip.finish()?;
    Ok(())
}

const JANUARY: &[&[&str]] = &[
    &["date", "ticket", "time"],
    &["2024-01-02", "T-1", "1h 30min"],
    &["2024-01-03", "T-2", "2h"],
];

const FEBRUARY: &[&[&str]] = &[&["date", "ticket", "time"], &["2024-02-01", "T-3", "45min"]];

#[test]
fn test_tally_xlsx_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("work_hours.xlsx");
    create_timesheet_xlsx(&path, &[("January", JANUARY), ("February", FEBRUARY)]).unwrap();

    let workbook = read_workbook(&path).unwrap();
    assert_eq!(workbook.sheet_names(), vec!["January", "February"]);

    let totals = workbook_total(&workbook, "time", Some(HeaderRow::new(0))).unwrap();
    assert_eq!(
        totals.sheets,
        vec![SheetTotal::new("January", 3.5), SheetTotal::new("February", 0.75)]
    );
    assert_eq!(totals.total_hours, 4.25);

    let report = render_report(&totals);
    assert!(report.starts_with("January | 3.5\n"));
    assert!(report.ends_with("Total: 4.25\n"));
}

#[test]
fn test_tally_single_configured_sheet() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("work_hours.xlsx");
    create_timesheet_xlsx(&path, &[("January", JANUARY), ("February", FEBRUARY)]).unwrap();

    let config: TallyConfig = toml::from_str("sheet = \"February\"").unwrap();
    let totals = Tally::with_config(config).tally_file(&path).unwrap();
    assert_eq!(totals.sheets, vec![SheetTotal::new("February", 0.75)]);
    assert_eq!(totals.total_hours, 0.75);
}

#[test]
fn test_missing_sheet_in_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("work_hours.xlsx");
    create_timesheet_xlsx(&path, &[("January", JANUARY)]).unwrap();

    let config: TallyConfig = toml::from_str("sheet = \"December\"").unwrap();
    let err = Tally::with_config(config).tally_file(&path).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ResourceNotFound);
    assert!(matches!(err, TallyError::SheetNotFound(name) if name == "December"));
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = Tally::new()
        .tally_file(dir.path().join("absent.ods"))
        .unwrap_err();
    assert!(matches!(err, TallyError::FileNotFound(_)));
}
