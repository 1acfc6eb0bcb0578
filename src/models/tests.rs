use serde_json::json;

use super::row::ColumnValue;
use super::{LoanGradeRequest, LoanIntRateRequest, LoanStatusRequest, LoanSubGradeRequest};

#[test]
fn test_status_row_order_and_kinds() {
    let req = LoanStatusRequest {
        amount: 10000,
        employment_length: 5,
        debt_to_income: 0.22,
        fico: 700.0,
    };

    let row = req.into_row();
    let names: Vec<_> = row.names().collect();
    assert_eq!(names, ["amount", "employment_length", "debt_to_income", "fico"]);

    assert_eq!(row.columns()[0].1, ColumnValue::Int(10000));
    assert_eq!(row.columns()[1].1, ColumnValue::Int(5));
    assert_eq!(row.columns()[2].1, ColumnValue::Float(0.22));
    assert_eq!(row.columns()[3].1, ColumnValue::Float(700.0));
}

#[test]
fn test_grade_row_order() {
    let req: LoanGradeRequest = serde_json::from_value(json!({
        "loan_amnt": 10000.0,
        "term": 36.0,
        "home_ownership": "RENT",
        "verification_status": "Verified",
        "dti": 18.2,
        "total_acc": 24.0,
        "fico": 690.0,
        "Year": 2018
    }))
    .unwrap();

    let row = req.into_row();
    let names: Vec<_> = row.names().collect();
    assert_eq!(
        names,
        ["loan_amnt", "term", "home_ownership", "verification_status", "dti", "total_acc", "fico", "Year"]
    );
    assert_eq!(row.columns()[2].1, ColumnValue::Text("RENT".to_string()));
    assert_eq!(row.columns()[7].1, ColumnValue::Int(2018));
}

#[test]
fn test_subgrade_row_order() {
    let req: LoanSubGradeRequest = serde_json::from_value(json!({
        "loan_amnt": 12000.0,
        "term": 60.0,
        "home_ownership": "MORTGAGE",
        "grade": "B",
        "emp_length": 4.0,
        "dti": 21.4,
        "open_acc": 9.0,
        "total_acc": 31.0,
        "fico": 705.0,
        "Year": 2017,
        "CPI": 245.1
    }))
    .unwrap();

    let row = req.into_row();
    let names: Vec<_> = row.names().collect();
    assert_eq!(
        names,
        [
            "loan_amnt", "term", "home_ownership", "grade", "emp_length", "dti",
            "open_acc", "total_acc", "fico", "Year", "CPI"
        ]
    );
    assert_eq!(row.columns()[10].1, ColumnValue::Float(245.1));
}

#[test]
fn test_intrate_row_order() {
    let req: LoanIntRateRequest = serde_json::from_value(json!({
        "loan_amnt": 15000.0,
        "term": 36.0,
        "dti": 12.8,
        "total_acc": 18.0,
        "fico": 720.0,
        "emp_length": 7.0,
        "open_acc": 6.0,
        "CPI": 251.7,
        "exch_rate": 1.12,
        "Year": 2019,
        "grade": "A",
        "sub_grade": "A4"
    }))
    .unwrap();

    let row = req.into_row();
    let names: Vec<_> = row.names().collect();
    assert_eq!(
        names,
        [
            "loan_amnt", "term", "dti", "total_acc", "fico", "emp_length",
            "open_acc", "CPI", "exch_rate", "Year", "grade", "sub_grade"
        ]
    );
    assert_eq!(row.columns()[10].1, ColumnValue::Text("A".to_string()));
    assert_eq!(row.columns()[11].1, ColumnValue::Text("A4".to_string()));
}

#[test]
fn test_missing_field_fails_deserialization() {
    let result: Result<LoanStatusRequest, _> = serde_json::from_value(json!({
        "amount": 10000,
        "employment_length": 5,
        "debt_to_income": 0.22
    }));

    let err = result.unwrap_err().to_string();
    assert!(err.contains("fico"), "error should name the missing field: {}", err);
}

#[test]
fn test_mistyped_field_fails_deserialization() {
    let result: Result<LoanStatusRequest, _> = serde_json::from_value(json!({
        "amount": "a lot",
        "employment_length": 5,
        "debt_to_income": 0.22,
        "fico": 700.0
    }));

    assert!(result.is_err());
}

#[test]
fn test_unknown_fields_are_ignored() {
    let result: Result<LoanStatusRequest, _> = serde_json::from_value(json!({
        "amount": 10000,
        "employment_length": 5,
        "debt_to_income": 0.22,
        "fico": 700.0,
        "note": "extra"
    }));

    assert!(result.is_ok());
}
