mod common;

use anyhow::Result;
use common::{add_expense, test_service};
use spesa::domain::Category;
use spesa::io::Exporter;

#[test]
fn test_export_empty_ledger_is_header_only() -> Result<()> {
    let (service, _temp) = test_service()?;

    let mut buffer = Vec::new();
    let count = Exporter::new(&service).export_expenses_csv(&mut buffer)?;

    assert_eq!(count, 0);
    assert_eq!(
        String::from_utf8(buffer)?,
        "date,amount,category,description\n"
    );
    Ok(())
}

#[test]
fn test_export_rows_follow_canonical_order() -> Result<()> {
    let (service, _temp) = test_service()?;

    // Insertion order is not date order; the export must keep insertion order
    add_expense(&service, "2024-03-04", 100.0, Category::Food, "Lunch")?;
    add_expense(&service, "2024-03-01", 50.5, Category::Transport, "Bus")?;

    let mut buffer = Vec::new();
    let count = Exporter::new(&service).export_expenses_csv(&mut buffer)?;

    assert_eq!(count, 2);
    let content = String::from_utf8(buffer)?;
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(
        lines,
        [
            "date,amount,category,description",
            "2024-03-04,100,Food,Lunch",
            "2024-03-01,50.5,Transport,Bus",
        ]
    );
    Ok(())
}

#[test]
fn test_export_quotes_descriptions_with_commas() -> Result<()> {
    let (service, _temp) = test_service()?;

    add_expense(&service, "2024-03-04", 12.0, Category::Food, "Lunch, downtown")?;

    let mut buffer = Vec::new();
    Exporter::new(&service).export_expenses_csv(&mut buffer)?;

    let content = String::from_utf8(buffer)?;
    assert!(content.contains("\"Lunch, downtown\""));
    Ok(())
}

#[test]
fn test_export_to_file_overwrites_destination() -> Result<()> {
    let (service, temp) = test_service()?;
    let output = temp.path().join("expenses_export.csv");

    std::fs::write(&output, "stale content from a previous run")?;

    add_expense(&service, "2024-03-04", 100.0, Category::Food, "Lunch")?;
    let file = std::fs::File::create(&output)?;
    let count = Exporter::new(&service).export_expenses_csv(file)?;

    assert_eq!(count, 1);
    let content = std::fs::read_to_string(&output)?;
    assert_eq!(
        content,
        "date,amount,category,description\n2024-03-04,100,Food,Lunch\n"
    );
    Ok(())
}
