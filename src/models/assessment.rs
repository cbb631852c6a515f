use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{MaturityModel, Team};

// Highest selectable maturity level; 0 means "not answered yet"
pub const MAX_LEVEL: u8 = 5;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Answer {
    pub question_text: String,
    pub selected_level: u8,
    #[serde(default)]
    pub comment: String,
}

impl Answer {
    // The default answer the edit form starts from
    pub fn empty(question_text: impl Into<String>) -> Self {
        Answer {
            question_text: question_text.into(),
            selected_level: 0,
            comment: String::new(),
        }
    }

    pub fn is_answered(&self) -> bool {
        (1..=MAX_LEVEL).contains(&self.selected_level)
    }
}

// One participant's answers within an assessment
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub user_id: String,
    #[serde(default)]
    pub answers: Vec<Answer>,
    pub date: DateTime<Utc>,
}

impl Submission {
    pub fn answer_for(&self, question_text: &str) -> Option<&Answer> {
        self.answers
            .iter()
            .find(|answer| answer.question_text == question_text)
    }
}

// One team taking one maturity model on a given date
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Assessment {
    pub id: String,
    pub team: Team,
    pub maturity_model: MaturityModel,
    pub date: DateTime<Utc>,
    #[serde(default)]
    pub submissions: Vec<Submission>,
}

impl Assessment {
    // The submission owned by the signed-in user, if they answered before
    pub fn submission_for(&self, user_id: &str) -> Option<&Submission> {
        self.submissions
            .iter()
            .find(|submission| submission.user_id == user_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_answer_level_range() {
        let mut answer = Answer::empty("How do you deploy?");
        assert!(!answer.is_answered());

        answer.selected_level = 3;
        assert!(answer.is_answered());

        answer.selected_level = 6;
        assert!(!answer.is_answered());
    }

    #[test]
    fn test_submission_lookup_by_question_text() {
        let submission = Submission {
            user_id: "u1".to_string(),
            answers: vec![Answer {
                question_text: "How do you deploy?".to_string(),
                selected_level: 4,
                comment: "CI pipeline".to_string(),
            }],
            date: Utc::now(),
        };

        assert!(submission.answer_for("How do you deploy?").is_some());
        assert!(submission.answer_for("How do you test?").is_none());
    }
}
