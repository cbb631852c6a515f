use serde::{Deserialize, Serialize};

use crate::models::ClientError;

// Every question carries exactly this many maturity levels
pub const LEVELS_PER_QUESTION: usize = 5;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Level {
    pub value: u8,
    pub description: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Question {
    pub text: String,
    pub levels: Vec<Level>,
}

impl Question {
    // A fresh question with blank descriptions for levels 1 through 5
    pub fn with_empty_levels(text: impl Into<String>) -> Self {
        Question {
            text: text.into(),
            levels: (1..=LEVELS_PER_QUESTION as u8)
                .map(|value| Level {
                    value,
                    description: String::new(),
                })
                .collect(),
        }
    }

    pub fn level_description(&self, value: u8) -> Option<&str> {
        self.levels
            .iter()
            .find(|level| level.value == value)
            .map(|level| level.description.as_str())
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct MaturityModel {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub questions: Vec<Question>,
    // Set when the model is scoped to a single team instead of the
    // global catalogue
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_id: Option<String>,
}

impl MaturityModel {
    pub fn new(name: impl Into<String>) -> Self {
        MaturityModel {
            id: None,
            name: name.into(),
            questions: Vec::new(),
            team_id: None,
        }
    }

    // Reject malformed models before they ever reach the backend
    pub fn validate(&self) -> Result<(), ClientError> {
        if self.name.trim().is_empty() {
            return Err(ClientError::Validation(
                "Model name is required.".to_string(),
            ));
        }

        for (index, question) in self.questions.iter().enumerate() {
            if question.text.trim().is_empty() {
                return Err(ClientError::Validation(format!(
                    "Question {} has no text.",
                    index + 1
                )));
            }

            if question.levels.len() != LEVELS_PER_QUESTION {
                return Err(ClientError::Validation(format!(
                    "Question {} must define exactly {} levels.",
                    index + 1,
                    LEVELS_PER_QUESTION
                )));
            }

            for (position, level) in question.levels.iter().enumerate() {
                if level.value as usize != position + 1 {
                    return Err(ClientError::Validation(format!(
                        "Question {} levels must be numbered 1 to {} in order.",
                        index + 1,
                        LEVELS_PER_QUESTION
                    )));
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_levels_are_numbered_one_to_five() {
        let question = Question::with_empty_levels("How do you deploy?");
        let values: Vec<u8> = question.levels.iter().map(|l| l.value).collect();
        assert_eq!(values, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_validate_accepts_well_formed_model() {
        let mut model = MaturityModel::new("DevOps maturity");
        model
            .questions
            .push(Question::with_empty_levels("How do you deploy?"));
        assert!(model.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_wrong_level_count() {
        let mut model = MaturityModel::new("DevOps maturity");
        let mut question = Question::with_empty_levels("How do you deploy?");
        question.levels.pop();
        model.questions.push(question);

        let error = model.validate().unwrap_err();
        assert!(error.user_message().contains("exactly 5 levels"));
    }

    #[test]
    fn test_validate_rejects_missing_name() {
        let model = MaturityModel::new("  ");
        assert!(model.validate().is_err());
    }
}
