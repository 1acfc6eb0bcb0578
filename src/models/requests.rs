//! Request schemas, one per prediction endpoint.
//!
//! Fields are mandatory and type-checked at deserialization; there are no
//! cross-field invariants at this layer (a `fico` of 9000 is the model's
//! problem, not ours). Each schema maps into a [`Row`] with columns in
//! field-declaration order.

use serde::Deserialize;

use super::row::Row;

/// Body of `POST /predict_loan_status`.
#[derive(Debug, Clone, Deserialize)]
pub struct LoanStatusRequest {
    pub amount: i64,
    pub employment_length: i64,
    pub debt_to_income: f64,
    pub fico: f64,
}

impl LoanStatusRequest {
    pub fn into_row(self) -> Row {
        Row::new()
            .int("amount", self.amount)
            .int("employment_length", self.employment_length)
            .float("debt_to_income", self.debt_to_income)
            .float("fico", self.fico)
    }
}

/// Body of `POST /predict_loan_grade`.
#[derive(Debug, Clone, Deserialize)]
pub struct LoanGradeRequest {
    pub loan_amnt: f64,
    pub term: f64,
    pub home_ownership: String,
    pub verification_status: String,
    pub dti: f64,
    pub total_acc: f64,
    pub fico: f64,
    #[serde(rename = "Year")]
    pub year: i64,
}

impl LoanGradeRequest {
    pub fn into_row(self) -> Row {
        Row::new()
            .float("loan_amnt", self.loan_amnt)
            .float("term", self.term)
            .text("home_ownership", self.home_ownership)
            .text("verification_status", self.verification_status)
            .float("dti", self.dti)
            .float("total_acc", self.total_acc)
            .float("fico", self.fico)
            .int("Year", self.year)
    }
}

/// Body of `POST /predict_loan_subgrade`.
#[derive(Debug, Clone, Deserialize)]
pub struct LoanSubGradeRequest {
    pub loan_amnt: f64,
    pub term: f64,
    pub home_ownership: String,
    pub grade: String,
    pub emp_length: f64,
    pub dti: f64,
    pub open_acc: f64,
    pub total_acc: f64,
    pub fico: f64,
    #[serde(rename = "Year")]
    pub year: i64,
    #[serde(rename = "CPI")]
    pub cpi: f64,
}

impl LoanSubGradeRequest {
    pub fn into_row(self) -> Row {
        Row::new()
            .float("loan_amnt", self.loan_amnt)
            .float("term", self.term)
            .text("home_ownership", self.home_ownership)
            .text("grade", self.grade)
            .float("emp_length", self.emp_length)
            .float("dti", self.dti)
            .float("open_acc", self.open_acc)
            .float("total_acc", self.total_acc)
            .float("fico", self.fico)
            .int("Year", self.year)
            .float("CPI", self.cpi)
    }
}

/// Body of `POST /predict_loan_intrate`.
#[derive(Debug, Clone, Deserialize)]
pub struct LoanIntRateRequest {
    pub loan_amnt: f64,
    pub term: f64,
    pub dti: f64,
    pub total_acc: f64,
    pub fico: f64,
    pub emp_length: f64,
    pub open_acc: f64,
    #[serde(rename = "CPI")]
    pub cpi: f64,
    pub exch_rate: f64,
    #[serde(rename = "Year")]
    pub year: i64,
    pub grade: String,
    pub sub_grade: String,
}

impl LoanIntRateRequest {
    pub fn into_row(self) -> Row {
        Row::new()
            .float("loan_amnt", self.loan_amnt)
            .float("term", self.term)
            .float("dti", self.dti)
            .float("total_acc", self.total_acc)
            .float("fico", self.fico)
            .float("emp_length", self.emp_length)
            .float("open_acc", self.open_acc)
            .float("CPI", self.cpi)
            .float("exch_rate", self.exch_rate)
            .int("Year", self.year)
            .text("grade", self.grade)
            .text("sub_grade", self.sub_grade)
    }
}
