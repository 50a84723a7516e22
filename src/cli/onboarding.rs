use std::path::PathBuf;

use anyhow::Context;
use clap::Subcommand;
use nutrio::App;
use nutrio_onboarding::{Next, Onboarding, OnboardingAnswers, SEQUENCE, personalization_insights};

#[derive(Subcommand)]
pub enum Command {
    /// List every step with its position and progress
    Steps,
    /// Walk the flow with saved answers, then create the device user
    Walk {
        /// JSON file with onboarding answers
        #[arg(long)]
        answers: PathBuf,
    },
}

pub async fn run(config: crate::Config, command: Command) -> anyhow::Result<()> {
    match command {
        Command::Steps => {
            steps();
            Ok(())
        }
        Command::Walk { answers } => walk(config, answers).await,
    }
}

fn steps() {
    for step in SEQUENCE {
        let header = if step.is_section_header() { "*" } else { "" };

        println!(
            "{:>2}  {:<24} {:>5.1}%",
            step.index() + 1,
            format!("{step}{header}"),
            step.progress()
        );
    }
}

#[tracing::instrument(skip(config))]
async fn walk(config: crate::Config, path: PathBuf) -> anyhow::Result<()> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let answers: OnboardingAnswers = serde_json::from_str(&content)?;

    let mut app = App::new(super::user_manager(&config).await?);
    *app.onboarding_mut() = Onboarding::with_answers(answers);

    loop {
        let onboarding = app.onboarding();
        println!(
            "{:<24} {:>5.1}%",
            onboarding.current_step().to_string(),
            onboarding.progress()
        );

        if app.onboarding_mut().advance() == Next::Complete {
            break;
        }
    }

    for insight in personalization_insights(app.onboarding().answers()) {
        println!("  - {insight}");
    }

    match app.complete_onboarding().await {
        Some(user_id) => println!("onboarding complete, user {user_id}"),
        None => anyhow::bail!("onboarding could not be completed"),
    }

    Ok(())
}
