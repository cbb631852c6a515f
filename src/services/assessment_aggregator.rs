// src/services/assessment_aggregator.rs
//
// Pure transformations between an assessment's submissions and what the
// screens render: the chart-ready aggregation and the editable answer list.

use crate::models::{Answer, MaturityModel, Submission, MAX_LEVEL};

// One chart row: a question, one optional level per participant, the mean
#[derive(Debug, Clone, PartialEq)]
pub struct ChartPoint {
    pub question: String,
    pub max: u8,
    // One entry per submission, in submission order; None when that
    // participant has no answered level for this question
    pub levels: Vec<Option<u8>>,
    pub average: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AssessmentChart {
    // Participant user ids, in submission order
    pub participants: Vec<String>,
    // One point per question, in model order
    pub points: Vec<ChartPoint>,
}

// Build the chart series: per question, each participant's selected level
// and the average over participants who answered it. A level of 0 counts
// as unanswered and is excluded from both sides of the mean.
pub fn aggregate_submissions(
    model: &MaturityModel,
    submissions: &[Submission],
) -> AssessmentChart {
    let participants = submissions
        .iter()
        .map(|submission| submission.user_id.clone())
        .collect();

    let points = model
        .questions
        .iter()
        .map(|question| {
            let levels: Vec<Option<u8>> = submissions
                .iter()
                .map(|submission| {
                    submission
                        .answer_for(&question.text)
                        .filter(|answer| answer.is_answered())
                        .map(|answer| answer.selected_level)
                })
                .collect();

            let answered: Vec<u8> = levels.iter().flatten().copied().collect();
            let average = if answered.is_empty() {
                0.0
            } else {
                let sum: u32 = answered.iter().map(|level| u32::from(*level)).sum();
                round_one_decimal(f64::from(sum) / answered.len() as f64)
            };

            ChartPoint {
                question: question.text.clone(),
                max: MAX_LEVEL,
                levels,
                average,
            }
        })
        .collect();

    AssessmentChart {
        participants,
        points,
    }
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

// Build the editable answer list for the signed-in user: one answer per
// question in model order, pre-filled from their prior submission when one
// exists, defaulted to level 0 with an empty comment otherwise.
pub fn reconcile_answers(
    model: &MaturityModel,
    submissions: &[Submission],
    user_id: &str,
) -> Vec<Answer> {
    let history = submissions
        .iter()
        .find(|submission| submission.user_id == user_id);

    model
        .questions
        .iter()
        .map(|question| {
            history
                .and_then(|submission| submission.answer_for(&question.text))
                .cloned()
                .unwrap_or_else(|| Answer::empty(question.text.clone()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Question;
    use chrono::Utc;

    fn model_with_questions(texts: &[&str]) -> MaturityModel {
        let mut model = MaturityModel::new("DevOps maturity");
        for text in texts {
            model.questions.push(Question::with_empty_levels(*text));
        }
        model
    }

    fn submission(user_id: &str, answers: &[(&str, u8)]) -> Submission {
        Submission {
            user_id: user_id.to_string(),
            answers: answers
                .iter()
                .map(|(question, level)| Answer {
                    question_text: question.to_string(),
                    selected_level: *level,
                    comment: String::new(),
                })
                .collect(),
            date: Utc::now(),
        }
    }

    #[test]
    fn test_average_of_two_submissions() {
        let model = model_with_questions(&["How do you deploy?"]);
        let submissions = vec![
            submission("u1", &[("How do you deploy?", 5)]),
            submission("u2", &[("How do you deploy?", 3)]),
        ];

        let chart = aggregate_submissions(&model, &submissions);

        assert_eq!(chart.participants, vec!["u1", "u2"]);
        assert_eq!(chart.points.len(), 1);
        assert_eq!(chart.points[0].levels, vec![Some(5), Some(3)]);
        assert_eq!(chart.points[0].average, 4.0);
        assert_eq!(chart.points[0].max, 5);
    }

    #[test]
    fn test_average_is_rounded_to_one_decimal() {
        let model = model_with_questions(&["How do you test?"]);
        let submissions = vec![
            submission("u1", &[("How do you test?", 5)]),
            submission("u2", &[("How do you test?", 3)]),
            submission("u3", &[("How do you test?", 2)]),
        ];

        let chart = aggregate_submissions(&model, &submissions);

        // 10 / 3 = 3.333... rounds to 3.3
        assert_eq!(chart.points[0].average, 3.3);
    }

    #[test]
    fn test_missing_answers_are_excluded_from_the_mean() {
        let model = model_with_questions(&["How do you deploy?", "How do you test?"]);
        let submissions = vec![
            submission("u1", &[("How do you deploy?", 4), ("How do you test?", 2)]),
            submission("u2", &[("How do you deploy?", 2)]),
        ];

        let chart = aggregate_submissions(&model, &submissions);

        assert_eq!(chart.points[0].levels, vec![Some(4), Some(2)]);
        assert_eq!(chart.points[0].average, 3.0);
        // u2 never answered the second question: excluded, not counted as 0
        assert_eq!(chart.points[1].levels, vec![Some(2), None]);
        assert_eq!(chart.points[1].average, 2.0);
    }

    #[test]
    fn test_unanswered_level_zero_counts_as_missing() {
        let model = model_with_questions(&["How do you deploy?"]);
        let submissions = vec![
            submission("u1", &[("How do you deploy?", 0)]),
            submission("u2", &[("How do you deploy?", 4)]),
        ];

        let chart = aggregate_submissions(&model, &submissions);

        assert_eq!(chart.points[0].levels, vec![None, Some(4)]);
        assert_eq!(chart.points[0].average, 4.0);
    }

    #[test]
    fn test_question_nobody_answered_averages_zero() {
        let model = model_with_questions(&["How do you deploy?"]);
        let submissions = vec![submission("u1", &[])];

        let chart = aggregate_submissions(&model, &submissions);

        assert_eq!(chart.points[0].levels, vec![None]);
        assert_eq!(chart.points[0].average, 0.0);
    }

    #[test]
    fn test_aggregation_preserves_model_and_submission_order() {
        let model = model_with_questions(&["Q1", "Q2", "Q3"]);
        let submissions = vec![
            submission("second", &[("Q3", 1)]),
            submission("first", &[("Q1", 5)]),
        ];

        let chart = aggregate_submissions(&model, &submissions);

        let questions: Vec<&str> = chart
            .points
            .iter()
            .map(|point| point.question.as_str())
            .collect();
        assert_eq!(questions, vec!["Q1", "Q2", "Q3"]);
        assert_eq!(chart.participants, vec!["second", "first"]);
    }

    #[test]
    fn test_aggregation_is_idempotent() {
        let model = model_with_questions(&["Q1", "Q2"]);
        let submissions = vec![
            submission("u1", &[("Q1", 3), ("Q2", 5)]),
            submission("u2", &[("Q1", 1)]),
        ];

        let first = aggregate_submissions(&model, &submissions);
        let second = aggregate_submissions(&model, &submissions);

        assert_eq!(first, second);
    }

    #[test]
    fn test_reconcile_always_covers_every_question() {
        let model = model_with_questions(&["Q1", "Q2", "Q3"]);
        let submissions = vec![submission("u1", &[("Q2", 4)])];

        let answers = reconcile_answers(&model, &submissions, "u1");

        assert_eq!(answers.len(), model.questions.len());
        assert_eq!(answers[0], Answer::empty("Q1"));
        assert_eq!(answers[1].selected_level, 4);
        assert_eq!(answers[2], Answer::empty("Q3"));
    }

    #[test]
    fn test_reconcile_without_history_defaults_everything() {
        let model = model_with_questions(&["Q1", "Q2"]);
        let submissions = vec![submission("someone-else", &[("Q1", 5)])];

        let answers = reconcile_answers(&model, &submissions, "u1");

        assert_eq!(answers.len(), 2);
        assert!(answers.iter().all(|answer| !answer.is_answered()));
        assert!(answers.iter().all(|answer| answer.comment.is_empty()));
    }

    #[test]
    fn test_reconcile_keeps_comments_from_history() {
        let model = model_with_questions(&["Q1"]);
        let mut history = submission("u1", &[("Q1", 2)]);
        history.answers[0].comment = "Manual deploys only".to_string();

        let answers = reconcile_answers(&model, &[history], "u1");

        assert_eq!(answers[0].comment, "Manual deploys only");
    }
}
