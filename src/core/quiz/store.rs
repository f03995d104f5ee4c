//=========================================================================
// Question Store
//=========================================================================
//
// Ordered, read-only question list loaded from CSV.
//
// Expected columns (header row required, extra columns ignored):
//   id, question, option_a, option_b, option_c, correct_answer
//
// Loading fails fast: the first malformed record aborts the load and the
// error names the offending line.
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::fs::File;
use std::io::Read;
use std::path::Path;

//=== External Crates =====================================================

use log::{debug, info};
use serde::Deserialize;

//=== Internal Dependencies ===============================================

use super::error::QuizError;
use super::question::{OptionKey, Question};

//=== QuestionRow =========================================================

/// Raw CSV record, deserialized by header name.
#[derive(Debug, Deserialize)]
struct QuestionRow {
    id: String,
    question: String,
    option_a: String,
    option_b: String,
    option_c: String,
    correct_answer: String,
}

impl QuestionRow {
    fn into_question(self, line: u64) -> Result<Question, QuizError> {
        let Some(correct) = OptionKey::parse(&self.correct_answer) else {
            return Err(QuizError::InvalidAnswer {
                id: self.id,
                line,
                value: self.correct_answer,
            });
        };

        Ok(Question {
            id: self.id,
            prompt: self.question,
            options: [self.option_a, self.option_b, self.option_c],
            correct,
        })
    }
}

//=== QuestionStore =======================================================

/// Questions in presentation order. Never mutated after construction.
#[derive(Debug, Clone, Default)]
pub struct QuestionStore {
    questions: Vec<Question>,
}

impl QuestionStore {
    //--- Construction -----------------------------------------------------

    /// Wraps an already-built question list.
    pub fn new(questions: Vec<Question>) -> Self {
        Self { questions }
    }

    /// Loads questions from a CSV file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, QuizError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| QuizError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let store = Self::from_reader(file)?;
        info!(
            target: "quiz",
            "Loaded {} questions from {}",
            store.len(),
            path.display()
        );
        Ok(store)
    }

    /// Loads questions from any CSV byte source.
    ///
    /// Fields are trimmed. An input with a header but no rows is rejected
    /// with [`QuizError::Empty`].
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, QuizError> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = reader.headers()?.clone();
        let mut questions = Vec::new();

        for record in reader.records() {
            let record = record?;
            let line = record.position().map(|p| p.line()).unwrap_or_default();
            let row: QuestionRow = record.deserialize(Some(&headers))?;
            let question = row.into_question(line)?;

            debug!(target: "quiz", "Question {} loaded from line {}", question.id, line);
            questions.push(question);
        }

        if questions.is_empty() {
            return Err(QuizError::Empty);
        }

        Ok(Self { questions })
    }

    //--- Queries ----------------------------------------------------------

    /// Returns the question at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Question> {
        self.questions.iter()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "id,question,option_a,option_b,option_c,correct_answer\n";

    fn load(body: &str) -> Result<QuestionStore, QuizError> {
        let data = format!("{HEADER}{body}");
        QuestionStore::from_reader(data.as_bytes())
    }

    #[test]
    fn loads_rows_in_order() {
        let store = load(
            "1,What is 2+2?,3,4,5,b\n\
             2,Capital of France?,Paris,Rome,Berlin,a\n",
        )
        .unwrap();

        assert_eq!(store.len(), 2);

        let first = store.get(0).unwrap();
        assert_eq!(first.id, "1");
        assert_eq!(first.prompt, "What is 2+2?");
        assert_eq!(first.option(OptionKey::B), "4");
        assert_eq!(first.correct, OptionKey::B);

        let second = store.get(1).unwrap();
        assert_eq!(second.correct, OptionKey::A);
        assert!(store.get(2).is_none());
    }

    #[test]
    fn accepts_upper_case_answers_and_padding() {
        let store = load("1, Pick one , x , y , z , C \n").unwrap();
        let q = store.get(0).unwrap();
        assert_eq!(q.prompt, "Pick one");
        assert_eq!(q.option(OptionKey::A), "x");
        assert_eq!(q.correct, OptionKey::C);
    }

    #[test]
    fn quoted_fields_may_contain_commas() {
        let store = load("1,\"Pick one, please\",\"a, b\",y,z,a\n").unwrap();
        let q = store.get(0).unwrap();
        assert_eq!(q.prompt, "Pick one, please");
        assert_eq!(q.option(OptionKey::A), "a, b");
    }

    #[test]
    fn invalid_answer_fails_fast_with_row_identity() {
        let err = load(
            "1,Q1,x,y,z,a\n\
             2,Q2,x,y,z,d\n\
             3,Q3,x,y,z,b\n",
        )
        .unwrap_err();

        match err {
            QuizError::InvalidAnswer { id, line, value } => {
                assert_eq!(id, "2");
                assert_eq!(line, 3, "Header is line 1, second row is line 3");
                assert_eq!(value, "d");
            }
            other => panic!("Expected InvalidAnswer, got {:?}", other),
        }
    }

    #[test]
    fn missing_columns_are_rejected() {
        let err = load("1,Q1,x,y\n").unwrap_err();
        assert!(matches!(err, QuizError::Csv(_)), "Got {:?}", err);
    }

    #[test]
    fn missing_header_column_is_rejected() {
        let data = "id,question,option_a,option_b,option_c\n1,Q,x,y,z\n";
        let err = QuestionStore::from_reader(data.as_bytes()).unwrap_err();
        assert!(matches!(err, QuizError::Csv(_)), "Got {:?}", err);
    }

    #[test]
    fn empty_file_is_rejected() {
        let err = load("").unwrap_err();
        assert!(matches!(err, QuizError::Empty));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = QuestionStore::from_path("definitely/not/here.csv").unwrap_err();
        let message = err.to_string();
        assert!(message.contains("definitely/not/here.csv"), "{message}");
    }
}
