use crate::error::CtabError;
use crate::processor::Processor;
use crate::records::RecordSource;
use crate::table::Alignment;
use crate::CtabResult;

const SIMPLE_CSV: &str = include_str!("../test/simple.csv");
const QUOTED_CSV: &str = include_str!("../test/quoted.csv");

#[test]
fn simple_table_test() -> CtabResult<()> {
    let processor = Processor::new();
    let lines = processor.render_from_string(SIMPLE_CSV)?;
    assert_eq!(
        lines,
        vec![
            "+-------+-----+",
            "| name  | age |",
            "+-------+-----+",
            "| Alice | 30  |",
            "| Bob   | 5   |",
            "+-------+-----+",
        ]
    );
    Ok(())
}

#[test]
fn rectangularity_test() -> CtabResult<()> {
    let processor = Processor::new();
    let lines = processor.render_from_string(QUOTED_CSV)?;
    let length = lines[0].chars().count();
    for line in &lines {
        assert_eq!(line.chars().count(), length);
    }
    Ok(())
}

#[test]
fn multibyte_width_test() -> CtabResult<()> {
    let processor = Processor::new();
    let lines = processor.render_from_string("이름,나이\n홍길동,30\n")?;
    // Widths are character counts, not byte counts
    let length = lines[0].chars().count();
    for line in &lines {
        assert_eq!(line.chars().count(), length);
    }
    Ok(())
}

#[test]
fn duplicate_header_test() -> CtabResult<()> {
    let processor = Processor::new();
    let lines = processor.render_from_string("name,age\nname,age\nAlice,30\n")?;
    assert_eq!(
        lines,
        vec![
            "+-------+-----+",
            "| name  | age |",
            "+-------+-----+",
            "| Alice | 30  |",
            "+-------+-----+",
        ]
    );
    Ok(())
}

#[test]
fn row_limit_test() -> CtabResult<()> {
    let mut processor = Processor::new();
    processor.config.max_rows.replace(1);
    let lines = processor.render_from_string(SIMPLE_CSV)?;
    assert_eq!(
        lines,
        vec![
            "+-------+-----+",
            "| name  | age |",
            "+-------+-----+",
            "| Alice | 30  |",
            "+-------+-----+",
        ]
    );
    Ok(())
}

#[test]
fn width_cap_test() -> CtabResult<()> {
    let mut processor = Processor::new();
    processor.config.max_width.replace(3);
    let lines = processor.render_from_string(SIMPLE_CSV)?;
    // Cells wider than a capped column are hard-cut without an ellipsis
    assert_eq!(
        lines,
        vec![
            "+-----+-----+",
            "| nam | age |",
            "+-----+-----+",
            "| Ali | 30  |",
            "| Bob | 5   |",
            "+-----+-----+",
        ]
    );
    Ok(())
}

#[test]
fn alignment_test() -> CtabResult<()> {
    let mut processor = Processor::new();
    processor.config.align = Alignment::Right;
    let lines = processor.render_from_string(SIMPLE_CSV)?;
    assert_eq!(lines[3], "| Alice |  30 |");
    assert_eq!(lines[4], "|   Bob |   5 |");

    processor.config.align = Alignment::Center;
    let lines = processor.render_from_string(SIMPLE_CSV)?;
    assert_eq!(lines[3], "| Alice | 30  |");
    assert_eq!(lines[4], "|  Bob  |  5  |");
    Ok(())
}

#[test]
fn ragged_row_test() -> CtabResult<()> {
    let processor = Processor::new();
    let lines = processor.render_from_string("a,b\n1,2,3,4\n")?;
    // Header is padded to the widest row with empty cells
    assert_eq!(
        lines,
        vec![
            "+---+---+---+---+",
            "| a | b |   |   |",
            "+---+---+---+---+",
            "| 1 | 2 | 3 | 4 |",
            "+---+---+---+---+",
        ]
    );
    Ok(())
}

#[test]
fn quoted_cell_test() -> CtabResult<()> {
    let source = RecordSource::from_string(QUOTED_CSV);
    let rows = source.records().collect::<CtabResult<Vec<_>>>()?;
    assert_eq!(rows[0], vec!["name", "note"]);
    assert_eq!(rows[1], vec!["Smith, John", "He said \"hi\""]);
    Ok(())
}

#[test]
fn embedded_newline_test() -> CtabResult<()> {
    let source = RecordSource::from_string("a,b\n\"multi\nline\",x\n");
    let rows = source.records().collect::<CtabResult<Vec<_>>>()?;
    assert_eq!(rows[1], vec!["multi\nline", "x"]);
    Ok(())
}

#[test]
fn crlf_test() -> CtabResult<()> {
    let processor = Processor::new();
    let lines = processor.render_from_string("name,age\r\nAlice,30\r\n")?;
    assert_eq!(
        lines,
        vec![
            "+-------+-----+",
            "| name  | age |",
            "+-------+-----+",
            "| Alice | 30  |",
            "+-------+-----+",
        ]
    );
    Ok(())
}

#[test]
fn malformed_input_test() {
    let source = RecordSource::from_string("a,b\n\"unterminated");
    let mut records = source.records();
    assert!(records.next().unwrap().is_ok());
    assert!(matches!(
        records.next().unwrap(),
        Err(CtabError::MalformedInput(_))
    ));
    // Iterator is fused after the failure
    assert!(records.next().is_none());

    let processor = Processor::new();
    assert!(matches!(
        processor.render_from_string("a,b\n\"unterminated"),
        Err(CtabError::MalformedInput(_))
    ));
}

#[test]
fn missing_file_test() {
    let processor = Processor::new();
    let path = std::env::temp_dir().join("ctab_no_such_file.csv");
    assert!(matches!(
        processor.render_from_file(&path),
        Err(CtabError::NotFound(_))
    ));
}

#[test]
fn idempotence_test() -> CtabResult<()> {
    let processor = Processor::new();
    let first = processor.render_from_string(SIMPLE_CSV)?;
    let second = processor.render_from_string(SIMPLE_CSV)?;
    assert_eq!(first, second);
    Ok(())
}

#[test]
fn empty_input_test() -> CtabResult<()> {
    let processor = Processor::new();
    let lines = processor.render_from_string("")?;
    assert!(lines.is_empty());
    Ok(())
}

#[test]
fn write_to_file_test() -> CtabResult<()> {
    let processor = Processor::new();
    let lines = processor.render_from_string(SIMPLE_CSV)?;
    let path = std::env::temp_dir().join("ctab_write_test.txt");
    processor.write_to_file(&path, &lines)?;
    let written = std::fs::read_to_string(&path)
        .map_err(|err| CtabError::not_found(err, "Failed to read written table"))?;
    assert_eq!(written, lines.join("\n") + "\n");
    Ok(())
}

#[test]
fn alignment_from_str_test() {
    assert_eq!(Alignment::from_str("LEFT"), Some(Alignment::Left));
    assert_eq!(Alignment::from_str("r"), Some(Alignment::Right));
    assert_eq!(Alignment::from_str("center"), Some(Alignment::Center));
    assert_eq!(Alignment::from_str("middle"), None);
}
