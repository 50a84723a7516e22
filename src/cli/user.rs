use clap::Subcommand;
use nutrio::App;
use nutrio_user::{Area, AuthState};

#[derive(Subcommand)]
pub enum Command {
    /// Show whether a device user exists
    Status,
    /// Remove the device user and sign out
    Reset,
}

pub async fn run(config: crate::Config, command: Command) -> anyhow::Result<()> {
    let mut app = App::new(super::user_manager(&config).await?);

    match command {
        Command::Status => {
            match app.restore().await? {
                AuthState::SignedIn(user_id) => println!("signed in as {user_id}"),
                _ => println!("signed out"),
            }

            println!("launch route: {}", app.route(Area::Welcome));
        }
        Command::Reset => {
            app.reset().await?;
            println!("signed out");
        }
    }

    Ok(())
}
