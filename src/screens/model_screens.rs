use log::error;

use crate::models::{ClientError, MaturityModel, Question, LEVELS_PER_QUESTION};
use crate::screens::{confirm, prompt, prompt_with_default};
use crate::services::{maturity_model_service, ApiClient};
use crate::utils::session::Session;

// Maturity model administration, reserved for PMO users
pub async fn models_admin(client: &ApiClient, session: &Session) -> Result<(), ClientError> {
    let user = match session.current_user() {
        Some(user) => user,
        None => {
            println!("Please log in.");
            return Ok(());
        }
    };

    if !user.is_pmo() {
        println!("Only PMO users can manage maturity models.");
        return Ok(());
    }

    let token = user.access_token.clone();

    loop {
        println!("\n--- Maturity Models ---");

        let models = match maturity_model_service::get_all_models(client, &token, None).await {
            Ok(models) => models,
            Err(e) => {
                error!("❌ Error loading models: {}", e);
                println!("{}", e.user_message());
                return Ok(());
            }
        };

        if models.is_empty() {
            println!("No maturity models defined yet.");
        }
        for (index, model) in models.iter().enumerate() {
            println!(
                "  {}) {} ({} questions)",
                index + 1,
                model.name,
                model.questions.len()
            );
        }
        println!("  n) Create new model");
        println!("  b) Back");

        let choice = prompt("Choice")?;
        match choice.as_str() {
            "n" => create_model_screen(client, &token).await?,
            "b" => return Ok(()),
            other => match other.parse::<usize>() {
                Ok(index) if index >= 1 && index <= models.len() => {
                    manage_model_screen(client, &token, models[index - 1].clone()).await?;
                }
                _ => println!("Unknown option."),
            },
        }
    }
}

async fn create_model_screen(client: &ApiClient, token: &str) -> Result<(), ClientError> {
    println!("\n--- Create Maturity Model ---");

    let name = prompt("Model name")?;
    let mut model = MaturityModel::new(name);

    edit_questions(&mut model)?;

    match maturity_model_service::create_model(client, token, &model).await {
        Ok(_) => println!("Model created successfully!"),
        Err(e) => {
            error!("❌ Error creating model: {}", e);
            println!("{}", e.user_message());
        }
    }

    Ok(())
}

async fn manage_model_screen(
    client: &ApiClient,
    token: &str,
    model: MaturityModel,
) -> Result<(), ClientError> {
    let id = match model.id.clone() {
        Some(id) => id,
        None => {
            println!("That model has not been saved yet.");
            return Ok(());
        }
    };

    println!("\n--- {} ---", model.name);
    println!("  e) Edit");
    println!("  d) Delete");
    println!("  b) Back");

    let choice = prompt("Choice")?;
    match choice.as_str() {
        "e" => {
            // Edit the latest server copy, not the cached listing
            let mut model =
                match maturity_model_service::get_model_by_id(client, token, &id).await {
                    Ok(model) => model,
                    Err(e) => {
                        error!("❌ Error loading model: {}", e);
                        println!("{}", e.user_message());
                        return Ok(());
                    }
                };

            model.name = prompt_with_default("Model name", &model.name)?;
            edit_questions(&mut model)?;

            match maturity_model_service::update_model(client, token, &id, &model).await {
                Ok(_) => println!("Model updated successfully!"),
                Err(e) => {
                    error!("❌ Error updating model: {}", e);
                    println!("{}", e.user_message());
                }
            }
        }
        "d" => {
            if !confirm("Are you sure you want to delete this model?")? {
                return Ok(());
            }

            match maturity_model_service::delete_model(client, token, &id).await {
                Ok(()) => println!("Model deleted."),
                Err(e) => {
                    error!("❌ Error deleting model: {}", e);
                    println!("{}", e.user_message());
                }
            }
        }
        _ => {}
    }

    Ok(())
}

// Question editor loop shared by create and edit
fn edit_questions(model: &mut MaturityModel) -> Result<(), ClientError> {
    loop {
        println!("\nQuestions ({}):", model.questions.len());
        for (index, question) in model.questions.iter().enumerate() {
            println!("  {}) {}", index + 1, question.text);
        }
        println!("  a) Add question");
        if !model.questions.is_empty() {
            println!("  e) Edit a question");
            println!("  x) Remove a question");
        }
        println!("  d) Done");

        let choice = prompt("Choice")?;
        match choice.as_str() {
            "a" => {
                let question = collect_question(None)?;
                model.questions.push(question);
            }
            "e" if !model.questions.is_empty() => {
                let index = select_question(model)?;
                if let Some(index) = index {
                    let updated = collect_question(Some(&model.questions[index]))?;
                    model.questions[index] = updated;
                }
            }
            "x" if !model.questions.is_empty() => {
                let index = select_question(model)?;
                if let Some(index) = index {
                    model.questions.remove(index);
                }
            }
            "d" => return Ok(()),
            _ => println!("Unknown option."),
        }
    }
}

fn select_question(model: &MaturityModel) -> Result<Option<usize>, ClientError> {
    let choice = prompt("Question number")?;
    match choice.parse::<usize>() {
        Ok(index) if index >= 1 && index <= model.questions.len() => Ok(Some(index - 1)),
        _ => {
            println!("Unknown question.");
            Ok(None)
        }
    }
}

// Collect a question's text and its 5 level descriptions, pre-filling from
// an existing question when editing
fn collect_question(existing: Option<&Question>) -> Result<Question, ClientError> {
    let text = match existing {
        Some(question) => prompt_with_default("Question text", &question.text)?,
        None => prompt("Question text (e.g. How do you handle deployments?)")?,
    };

    let mut question = Question::with_empty_levels(text);

    println!("Maturity levels (1 = Least Mature, {} = Most Mature)", LEVELS_PER_QUESTION);
    for level in question.levels.iter_mut() {
        let previous = existing.and_then(|q| q.level_description(level.value));
        level.description = match previous {
            Some(previous) if !previous.is_empty() => {
                prompt_with_default(&format!("Level {}", level.value), previous)?
            }
            _ => prompt(&format!("Level {} description", level.value))?,
        };
    }

    Ok(question)
}
