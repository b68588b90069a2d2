use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Deserializer};

use super::domain::AnswerSet;

#[derive(Debug)]
pub enum ImportError {
    Io(std::io::Error),
    Csv(csv::Error),
}

impl std::fmt::Display for ImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ImportError::Io(err) => write!(f, "failed to read answer sheet: {}", err),
            ImportError::Csv(err) => write!(f, "invalid answer sheet CSV data: {}", err),
        }
    }
}

impl std::error::Error for ImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ImportError::Io(err) => Some(err),
            ImportError::Csv(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for ImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for ImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

/// Answers collected for one respondent.
#[derive(Debug, Clone, PartialEq)]
pub struct AnswerSheet {
    pub respondent: String,
    pub email: Option<String>,
    pub answers: AnswerSet,
}

/// Reads long-format answer exports (`respondent,email,question,answer`).
pub struct AnswerSheetImporter;

impl AnswerSheetImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<AnswerSheet>, ImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    /// Groups rows by respondent in first-appearance order. A repeated
    /// question for the same respondent keeps the last answer.
    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<AnswerSheet>, ImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut sheets: Vec<AnswerSheet> = Vec::new();
        let mut positions: HashMap<String, usize> = HashMap::new();

        for record in csv_reader.deserialize::<AnswerRow>() {
            let row = record?;
            let index = match positions.get(&row.respondent) {
                Some(&index) => index,
                None => {
                    let index = sheets.len();
                    positions.insert(row.respondent.clone(), index);
                    sheets.push(AnswerSheet {
                        respondent: row.respondent.clone(),
                        email: None,
                        answers: AnswerSet::new(),
                    });
                    index
                }
            };
            let sheet = &mut sheets[index];

            if sheet.email.is_none() {
                sheet.email = row.email;
            }
            sheet.answers.insert(row.question, row.answer);
        }

        Ok(sheets)
    }
}

#[derive(Debug, Deserialize)]
struct AnswerRow {
    respondent: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    email: Option<String>,
    question: u32,
    answer: i64,
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}
