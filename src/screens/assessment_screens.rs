use log::error;

use crate::models::{Answer, Assessment, ClientError, MAX_LEVEL};
use crate::screens::{prompt, prompt_with_default};
use crate::services::assessment_aggregator::{
    aggregate_submissions, reconcile_answers, AssessmentChart,
};
use crate::services::{assessment_service, ApiClient};
use crate::utils::session::Session;

// Assessment screen: the aggregated chart for everyone's submissions plus
// the signed-in user's editable answer form
pub async fn assessment_view(
    client: &ApiClient,
    session: &Session,
    assessment_id: &str,
) -> Result<(), ClientError> {
    let user = match session.current_user() {
        Some(user) => user.clone(),
        None => {
            println!("Please log in.");
            return Ok(());
        }
    };
    let token = user.access_token.clone();

    let mut assessment =
        match assessment_service::get_assessment(client, &token, assessment_id).await {
            Ok(assessment) => assessment,
            Err(e) => {
                error!("❌ Error loading assessment: {}", e);
                println!("Error loading assessment.");
                return Ok(());
            }
        };

    // One editable answer per question, pre-filled from the user's history
    let mut answers =
        reconcile_answers(&assessment.maturity_model, &assessment.submissions, &user.id);
    if assessment.submission_for(&user.id).is_some() {
        println!("Your previous answers were loaded.");
    }

    loop {
        println!("\n--- Assessment: {} ---", assessment.maturity_model.name);
        println!("Team: {}", assessment.team.name);
        println!("Date: {}", assessment.date.format("%Y-%m-%d"));

        let chart = aggregate_submissions(&assessment.maturity_model, &assessment.submissions);
        render_chart(&assessment, &chart);

        println!("\nYour answers:");
        for (index, answer) in answers.iter().enumerate() {
            let level = if answer.is_answered() {
                format!("level {}", answer.selected_level)
            } else {
                "unanswered".to_string()
            };
            let comment_marker = if answer.comment.is_empty() { "" } else { " 💬" };
            println!(
                "  {}) {} [{}]{}",
                index + 1,
                answer.question_text,
                level,
                comment_marker
            );
        }
        println!("  s) Save assessment");
        println!("  b) Back");

        let choice = prompt("Choice")?;
        match choice.as_str() {
            "s" => {
                match assessment_service::submit_assessment(
                    client,
                    &token,
                    assessment_id,
                    &answers,
                )
                .await
                {
                    Ok(updated) => {
                        // Full reload: the chart and the other participants'
                        // submissions now match server state
                        assessment = updated;
                        answers = reconcile_answers(
                            &assessment.maturity_model,
                            &assessment.submissions,
                            &user.id,
                        );
                        println!("Assessment saved successfully!");
                    }
                    Err(e) => {
                        // Keep the edited answers; the user can retry
                        error!("❌ Error saving assessment: {}", e);
                        println!("{}", e.user_message());
                    }
                }
            }
            "b" => return Ok(()),
            other => match other.parse::<usize>() {
                Ok(index) if index >= 1 && index <= answers.len() => {
                    edit_answer(&assessment, &mut answers, index - 1)?;
                }
                _ => println!("Unknown option."),
            },
        }
    }
}

fn edit_answer(
    assessment: &Assessment,
    answers: &mut [Answer],
    index: usize,
) -> Result<(), ClientError> {
    let question = &assessment.maturity_model.questions[index];

    println!("\n{}", question.text);
    for level in &question.levels {
        println!("  {}) {}", level.value, level.description);
    }

    let level = loop {
        let input = prompt(&format!("Maturity level (0-{}, 0 = not answered)", MAX_LEVEL))?;
        match input.parse::<u8>() {
            Ok(level) if level <= MAX_LEVEL => break level,
            _ => println!("Please enter a number between 0 and {}.", MAX_LEVEL),
        }
    };

    let comment = if answers[index].comment.is_empty() {
        prompt("Comments (observations or evidence, optional)")?
    } else {
        prompt_with_default("Comments", &answers[index].comment)?
    };

    answers[index].selected_level = level;
    answers[index].comment = comment;

    Ok(())
}

// Text rendering of the radar series: one row per question with each
// participant's level and a bar for the average
fn render_chart(assessment: &Assessment, chart: &AssessmentChart) {
    if chart.participants.is_empty() {
        println!("No submissions yet.");
        return;
    }

    let labels: Vec<String> = chart
        .participants
        .iter()
        .map(|user_id| participant_label(assessment, user_id))
        .collect();
    println!("Participants: {}", labels.join(", "));

    for point in &chart.points {
        let series: Vec<String> = point
            .levels
            .iter()
            .map(|level| match level {
                Some(level) => level.to_string(),
                None => "-".to_string(),
            })
            .collect();
        let bar = "█".repeat(point.average.round() as usize);

        println!(
            "  {:<48} [{}] avg {:.1}/{} {}",
            point.question,
            series.join(" "),
            point.average,
            point.max,
            bar
        );
    }
}

// Resolve a submission's user id to a display name via the team roster
fn participant_label(assessment: &Assessment, user_id: &str) -> String {
    assessment
        .team
        .members
        .iter()
        .find(|member| member.id == user_id)
        .map(|member| member.display_name())
        .unwrap_or_else(|| user_id.to_string())
}
