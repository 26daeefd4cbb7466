use clap::Parser;
use tracing::info;

use meal_picker_rs::catalog::{load_catalog, Catalog};
use meal_picker_rs::cli::{Cli, Command};
use meal_picker_rs::error::Result;
use meal_picker_rs::interface::{
    display_catalog, display_notice, display_screen, prompt_action, prompt_meal_name,
    prompt_yes_no, ScreenAction,
};
use meal_picker_rs::logging::init_logging;
use meal_picker_rs::models::MealId;
use meal_picker_rs::state::MenuScreen;

fn main() {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let catalog = match &cli.catalog {
        Some(path) => load_catalog(path)?,
        None => Catalog::builtin(),
    };
    info!(meals = catalog.len(), "menu ready");

    match cli.command.unwrap_or_default() {
        Command::Browse => cmd_browse(&catalog),
        Command::List => {
            display_catalog(&catalog);
            Ok(())
        }
        Command::Pick { ids } => {
            let ids: Vec<MealId> = ids.into_iter().map(MealId).collect();
            cmd_pick(&catalog, &ids)
        }
        Command::PickName { names } => {
            let ids = names
                .iter()
                .map(|name| catalog.resolve_name(name).map(|meal| meal.id))
                .collect::<Result<Vec<_>>>()?;
            cmd_pick(&catalog, &ids)
        }
    }
}

/// Interactive screen: re-render after every action until the user quits.
fn cmd_browse(catalog: &Catalog) -> Result<()> {
    let mut screen = MenuScreen::new(catalog);

    loop {
        display_screen(&screen);

        match prompt_action(&screen)? {
            ScreenAction::Toggle(id) => tap(&mut screen, id)?,
            ScreenAction::SearchByName => {
                if let Some(id) = prompt_meal_name(catalog)? {
                    tap(&mut screen, id)?;
                }
            }
            ScreenAction::Clear => {
                if screen.selection().is_empty() {
                    println!("Nothing to clear.");
                } else if prompt_yes_no("Clear all selected meals?", true)? {
                    screen.clear();
                }
            }
            ScreenAction::Quit => break,
        }
    }

    Ok(())
}

/// Apply the taps in order, then print the final screen.
fn cmd_pick(catalog: &Catalog, ids: &[MealId]) -> Result<()> {
    let mut screen = MenuScreen::new(catalog);
    for &id in ids {
        tap(&mut screen, id)?;
    }
    display_screen(&screen);
    Ok(())
}

fn tap(screen: &mut MenuScreen<'_>, id: MealId) -> Result<()> {
    screen.tap(id)?;
    if let Some(notice) = screen.take_notice() {
        display_notice(notice);
    }
    Ok(())
}
