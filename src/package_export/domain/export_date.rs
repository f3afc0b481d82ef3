use crate::shared::error::ExportError;
use crate::shared::Result;
use chrono::NaiveDate;

/// Format used for dates in export file names (`YYYY-MM-DD`)
const DATE_FORMAT: &str = "%Y-%m-%d";

/// NewType wrapper for the calendar date an export is filed under
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ExportDate(NaiveDate);

impl ExportDate {
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Parses a strict `YYYY-MM-DD` string
    ///
    /// # Errors
    /// Returns a validation error if the string is not a real calendar date
    /// in that exact shape (e.g. `2024-3-5` or `2024-02-30` are rejected)
    pub fn parse(value: &str) -> Result<Self> {
        let trimmed = value.trim();

        // chrono accepts unpadded fields, the file name format does not
        if trimmed.len() != 10 {
            return Err(Self::invalid(value));
        }

        NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
            .map(Self)
            .map_err(|_| Self::invalid(value))
    }

    pub fn as_naive_date(&self) -> NaiveDate {
        self.0
    }

    fn invalid(value: &str) -> anyhow::Error {
        ExportError::Validation {
            message: format!(
                "Invalid date '{}'. Expected a calendar date in YYYY-MM-DD format (e.g. 2024-03-15)",
                value
            ),
        }
        .into()
    }
}

impl std::fmt::Display for ExportDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

impl std::str::FromStr for ExportDate {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::parse(s)
    }
}
