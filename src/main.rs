use log::error;
use std::env;
use std::process::ExitCode;

use pantry_chef::display::{render_ingredients, render_state};
use pantry_chef::{ChefConfig, ChefError, GenerationState, IngredientSet, RecipeOrchestrator};

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::init();

    // Missing credentials abort before anything else happens
    let orchestrator = match ChefConfig::load()
        .map_err(ChefError::from)
        .and_then(|config| RecipeOrchestrator::from_config(&config))
    {
        Ok(orchestrator) => orchestrator,
        Err(e) => {
            error!("Startup failed: {}", e);
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    // Ingredients come from the command line, or the starter pantry
    let args: Vec<String> = env::args().skip(1).collect();
    let ingredients = if args.is_empty() {
        IngredientSet::starter()
    } else {
        args.into_iter().collect()
    };

    println!("Ingredients: {}\n", render_ingredients(&ingredients));

    let mut updates = orchestrator.subscribe();
    let watcher = async {
        while updates.changed().await.is_ok() {
            let state = updates.borrow_and_update().clone();
            print!("{}", render_state(&state));
            if !state.is_loading() {
                break;
            }
            println!();
        }
    };

    let (_, outcome) = tokio::join!(watcher, orchestrator.generate(&ingredients));

    match outcome {
        GenerationState::Success(_) => ExitCode::SUCCESS,
        _ => ExitCode::FAILURE,
    }
}
