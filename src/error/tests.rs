//! Unit tests for error handling

use super::*;
use std::io;

#[test]
fn test_header_not_found_message() {
    let error = AdminError::HeaderNotFound {
        header: "BIRTH YEAR".to_string(),
    };

    let error_string = error.to_string();
    assert!(error_string.contains("column header not found"));
    assert!(error_string.contains("BIRTH YEAR"));
}

#[test]
fn test_malformed_row_message() {
    let error = AdminError::MalformedRow {
        row: 3,
        expected: 8,
        found: 5,
    };

    let error_string = error.to_string();
    assert!(error_string.contains("row 3"));
    assert!(error_string.contains("expected 8"));
    assert!(error_string.contains("5 cells"));
}

#[test]
fn test_invalid_number_message() {
    let error = AdminError::InvalidNumber {
        row: 0,
        column: "HEIGHT".to_string(),
        value: "tall".to_string(),
    };

    let error_string = error.to_string();
    assert!(error_string.contains("row 0"));
    assert!(error_string.contains("HEIGHT"));
    assert!(error_string.contains("tall"));
}

#[test]
fn test_rejected_statement_message_is_exact() {
    let error = AdminError::RejectedStatement;
    assert_eq!(error.to_string(), ONLY_SELECT_MSG);
}

#[test]
fn test_json_error_conversion() {
    let json_error = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
    let admin_error = AdminError::from(json_error);

    match admin_error {
        AdminError::Json(_) => (),
        _ => panic!("Expected Json error variant"),
    }
}

#[test]
fn test_io_error_conversion() {
    let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
    let admin_error = AdminError::from(io_error);

    match admin_error {
        AdminError::Io(_) => (),
        _ => panic!("Expected Io error variant"),
    }
}

#[test]
fn test_anyhow_error_conversion() {
    let anyhow_error = anyhow::anyhow!("storage went away");
    let admin_error = AdminError::from(anyhow_error);

    match admin_error {
        AdminError::Storage(e) => assert!(e.to_string().contains("storage went away")),
        _ => panic!("Expected Storage error variant"),
    }
}

#[test]
fn test_sql_parse_error_conversion() {
    let parse_error = sqlparser::parser::Parser::parse_sql(
        &sqlparser::dialect::SQLiteDialect {},
        "SELECT * FROM",
    )
    .unwrap_err();
    let admin_error = AdminError::from(parse_error);

    match admin_error {
        AdminError::SqlParse(_) => (),
        _ => panic!("Expected SqlParse error variant"),
    }
}

#[test]
fn test_result_type_alias() {
    fn test_function() -> Result<String> {
        Ok("success".to_string())
    }

    let result = test_function();
    assert!(result.is_ok());
    assert_eq!(result.unwrap(), "success");
}
