//! Character roster command handlers.

use super::AppContext;
use super::commands::CharacterCommands;
use plotweaver::{Character, CharacterRoster, PlotweaverResult};

/// Handle character roster commands.
pub async fn handle_character_command(
    context: &AppContext,
    cmd: CharacterCommands,
) -> PlotweaverResult<()> {
    let roster_dir = &context.settings().roster_dir;

    match cmd {
        CharacterCommands::Add {
            name,
            role,
            description,
            agent,
        } => {
            let mut roster = CharacterRoster::open(roster_dir, &agent).await?;
            let existed = roster.get(&name).is_some();
            let character = roster.add(&name, &role, &description).await?;
            if existed {
                println!("Already registered:");
            } else {
                println!("Added:");
            }
            print_character(&character);
        }

        CharacterCommands::Get { name, agent } => {
            let roster = CharacterRoster::open(roster_dir, &agent).await?;
            match roster.get(&name) {
                Some(character) => print_character(character),
                None => println!("No character named '{}' for {}", name, agent),
            }
        }

        CharacterCommands::List { agent } => {
            let roster = CharacterRoster::open(roster_dir, &agent).await?;
            for character in roster.list() {
                print_character(character);
            }
            println!("Total: {} characters", roster.list().len());
        }
    }

    Ok(())
}

fn print_character(character: &Character) {
    println!(
        "  - {} ({}): {}",
        character.name, character.role, character.description
    );
}
