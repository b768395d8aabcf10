//! Prakruti CLI
//!
//! Usage:
//!   prakruti --text "I am thin and anxious"   # Classify one description
//!   prakruti --interactive                    # Conversational assessment
//!   prakruti --questionnaire                  # Multiple-choice assessment
//!   prakruti --catalog                        # List traits and options
//!   prakruti --text "text" --json             # JSON output

use clap::Parser;
use colored::Colorize;
use std::error::Error;
use std::io::{self, BufRead, Write};
use std::time::Duration;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use prakruti::core::{
    ConversationSession, ObservationSet, QuestionView, Questionnaire, QuestionnaireStep, ResultReport,
    TraitClassifier, option_vocabulary, trait_catalog,
};
use prakruti::types::{Observation, PrakrutiResult, SessionConfig};
use prakruti::VERSION;

#[derive(Parser, Debug)]
#[command(
    name = "prakruti",
    version = VERSION,
    about = "Prakruti - Discover your Ayurvedic constitution",
    long_about = "Prakruti estimates your Ayurvedic constitution (vata, pitta, kapha)\n\
                  from free-text self-descriptions or a multiple-choice questionnaire.\n\n\
                  Modes:\n  \
                  --text           Classify one description\n  \
                  --interactive    Conversation with follow-up questions\n  \
                  --questionnaire  One question per trait\n  \
                  --catalog        Print the trait catalog\n\n\
                  Constitutions:\n  \
                  tridoshic    - No dosha clearly ahead\n  \
                  vata-pitta   - Two co-dominant doshas (primary first)\n  \
                  kapha        - One dominant dosha"
)]
struct Args {
    /// Text to classify (single mode)
    #[arg(short, long)]
    text: Option<String>,

    /// Conversational mode - read lines from stdin
    #[arg(short, long)]
    interactive: bool,

    /// Multiple-choice questionnaire
    #[arg(short, long)]
    questionnaire: bool,

    /// Print the trait catalog and option vocabulary
    #[arg(short, long)]
    catalog: bool,

    /// Output as JSON
    #[arg(long)]
    json: bool,

    /// Disable colors in output
    #[arg(long)]
    no_color: bool,

    /// Show interpreted observations and debug logs
    #[arg(long)]
    verbose: bool,

    /// Print the full text report after the result
    #[arg(long)]
    report: bool,

    /// Delay before revealing a session result (milliseconds)
    #[arg(long)]
    reveal_delay_ms: Option<u64>,

    /// Observations needed before the conversation finishes
    #[arg(long)]
    min_observations: Option<usize>,
}

impl Args {
    fn session_config(&self) -> SessionConfig {
        let mut config = SessionConfig::default();
        if let Some(delay) = self.reveal_delay_ms {
            config.reveal_delay_ms = delay;
        }
        if let Some(min) = self.min_observations {
            config.min_observations = min.max(1);
        }
        config
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    init_tracing(args.verbose);

    if args.no_color {
        colored::control::set_override(false);
    }

    let config = args.session_config();
    debug!(?config, "session config");

    if args.catalog {
        print_catalog(&args)?;
    } else if args.questionnaire {
        run_questionnaire(&args, config).await?;
    } else if args.interactive {
        run_interactive(&args, config).await?;
    } else if let Some(ref text) = args.text {
        run_single(text, &args)?;
    } else {
        // Default to interactive if no mode specified
        run_interactive(&args, config).await?;
    }
    Ok(())
}

/// Logs go to stderr; RUST_LOG overrides the default level
fn init_tracing(verbose: bool) {
    let default = if verbose { "prakruti=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(filter)
        .init();
}

/// Classify one description and print the result
fn run_single(text: &str, args: &Args) -> Result<(), Box<dyn Error>> {
    let observations = TraitClassifier::new().classify(text);
    let set: ObservationSet = observations.iter().cloned().collect();
    let result = set.aggregate();

    if args.json {
        #[derive(serde::Serialize)]
        struct SingleOutput<'a> {
            observations: &'a [Observation],
            result: &'a PrakrutiResult,
        }
        let output = SingleOutput { observations: &observations, result: &result };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    if observations.is_empty() {
        println!("{}", "No traits recognized. Try describing your build, skin, sleep or moods.".yellow());
    } else {
        print_observations(&observations);
    }
    print_result(&result, args)?;
    Ok(())
}

/// Conversational assessment
async fn run_interactive(args: &Args, config: SessionConfig) -> Result<(), Box<dyn Error>> {
    let delay = config.reveal_delay_ms;
    let mut session = ConversationSession::new(config);

    if !args.json {
        print_header("Conversation");
        println!("Describe yourself in your own words. Commands: :result, :traits, :edit <trait> <value>, quit");
        println!();
        println!("{}", session.messages()[0].content.cyan());
        println!();
    }

    loop {
        let status = format_prompt(session.observations().len());
        let Some(line) = read_line(prompt(args, &status))? else {
            break;
        };
        if line.eq_ignore_ascii_case("quit") || line.eq_ignore_ascii_case("exit") {
            if !args.json {
                println!("\nSession ended. Traits observed: {}", session.observations().len());
            }
            break;
        }
        if line.is_empty() {
            continue;
        }
        if let Some(command) = line.strip_prefix(':') {
            run_command(command, &mut session, args)?;
            continue;
        }

        let turn = match session.send(&line) {
            Ok(turn) => turn,
            Err(e) => {
                eprintln!("{} {}", e.code().red(), e);
                continue;
            }
        };

        if args.json {
            println!("{}", serde_json::to_string(&turn.interpreted)?);
        } else {
            if args.verbose && !turn.interpreted.is_empty() {
                print_observations(&turn.interpreted);
            }
            println!("{}", turn.reply.cyan());
            println!();
        }

        if let Some(result) = turn.result {
            reveal(&result, args, delay).await?;
            break;
        }
    }
    Ok(())
}

/// `:result`, `:traits` and `:edit <trait> <value>` in the conversation
fn run_command(command: &str, session: &mut ConversationSession, args: &Args) -> Result<(), Box<dyn Error>> {
    let mut parts = command.splitn(3, ' ');
    match (parts.next(), parts.next(), parts.next()) {
        (Some("result"), _, _) => print_result(&session.result(), args)?,
        (Some("traits"), _, _) if args.json => {
            println!("{}", serde_json::to_string(&session.observations().to_vec())?);
        }
        (Some("traits"), _, _) => print_observations(&session.observations().to_vec()),
        (Some("edit"), Some(trait_id), Some(value)) => {
            match session.observations_mut().edit_value(trait_id, value.trim()) {
                Ok(()) if args.json => {}
                Ok(()) => println!("{} {} = {}", "updated".green(), trait_id, value.trim()),
                Err(e) => eprintln!("{} {}", e.code().red(), e),
            }
        }
        _ => eprintln!("unknown command ':{}'", command),
    }
    Ok(())
}

/// Multiple-choice assessment
async fn run_questionnaire(args: &Args, config: SessionConfig) -> Result<(), Box<dyn Error>> {
    let delay = config.reveal_delay_ms;
    let mut questionnaire = Questionnaire::new(config);

    if !args.json {
        print_header("Questionnaire");
        println!("Enter an option number. Commands: b (back), s (skip), quit");
        println!();
    }

    loop {
        let Some(view) = questionnaire.current_view() else {
            break;
        };
        if args.json {
            println!("{}", serde_json::to_string(&view)?);
        } else {
            print_question(&view);
        }

        let Some(line) = read_line(prompt(args, "> "))? else {
            break;
        };
        if !args.json {
            println!();
        }

        let step = match line.to_lowercase().as_str() {
            "quit" | "exit" => break,
            "b" | "back" => {
                questionnaire.back();
                continue;
            }
            "s" | "skip" => questionnaire.skip(),
            choice => match choice.parse::<usize>() {
                Ok(n) if n >= 1 => questionnaire.answer_option(n - 1),
                _ => questionnaire.answer(choice),
            },
        };

        match step {
            Ok(QuestionnaireStep::Next(_)) => {}
            Ok(QuestionnaireStep::Finished(result)) => {
                reveal(&result, args, delay).await?;
                break;
            }
            Err(e) => eprintln!("{} {}\n", e.code().red(), e),
        }
    }
    Ok(())
}

fn print_question(view: &QuestionView<'_>) {
    let question = view.question;
    println!(
        "{} {}",
        format!("Question {} of {}", view.number, view.total).bold(),
        format!("({}%)", view.progress).dimmed()
    );
    println!("{} [{}]", question.trait_def.name.bold(), question.trait_def.category);
    println!("{}", question.trait_def.description);
    for (i, option) in question.options.iter().enumerate() {
        let marker = if view.selected == Some(option.value) { "*" } else { " " };
        println!(
            "{} {:>2}. {} {}",
            marker,
            i + 1,
            option.value,
            format!("({})", option.dosha).color(option.dosha.color())
        );
    }
}

/// Show a session result after the configured delay
///
/// Ctrl-C during the delay skips straight to the result.
async fn reveal(result: &PrakrutiResult, args: &Args, delay_ms: u64) -> Result<(), Box<dyn Error>> {
    if delay_ms > 0 && !args.json {
        println!("{}", "Calculating your prakruti...".dimmed());
        tokio::select! {
            _ = tokio::time::sleep(Duration::from_millis(delay_ms)) => {}
            _ = tokio::signal::ctrl_c() => {
                debug!("reveal delay canceled");
            }
        }
    }
    print_result(result, args)
}

fn print_result(result: &PrakrutiResult, args: &Args) -> Result<(), Box<dyn Error>> {
    if args.json {
        println!("{}", serde_json::to_string_pretty(result)?);
        return Ok(());
    }

    if args.no_color {
        println!("{}", result.to_parseable_string());
    } else {
        println!("{}", result.to_terminal_string());
    }

    if args.report {
        println!();
        println!("{}", ResultReport::today(result).render());
    } else {
        println!();
        println!("{}", result.explanation);
        println!();
        for tip in &result.balancing_tips {
            println!("  {}", tip);
        }
    }
    Ok(())
}

fn print_observations(observations: &[Observation]) {
    for o in observations {
        println!(
            "  {} {} = {} {}",
            "•".dimmed(),
            o.trait_id,
            o.value.bold(),
            format!("({}%)", o.confidence_percent()).dimmed()
        );
    }
}

fn print_catalog(args: &Args) -> Result<(), Box<dyn Error>> {
    if args.json {
        #[derive(serde::Serialize)]
        struct Catalog<'a> {
            traits: &'a [prakruti::types::TraitDefinition],
            options: &'a [prakruti::types::TraitOptions],
        }
        let catalog = Catalog { traits: trait_catalog(), options: option_vocabulary() };
        println!("{}", serde_json::to_string_pretty(&catalog)?);
        return Ok(());
    }

    for (trait_def, options) in trait_catalog().iter().zip(option_vocabulary()) {
        println!("{} ({}, {})", trait_def.name.bold(), trait_def.id, trait_def.category);
        println!("  {}", trait_def.description);
        for dosha in prakruti::types::Dosha::ALL {
            println!(
                "  {:<6} {}",
                dosha.key().color(dosha.color()),
                options.for_dosha(dosha).join(", ")
            );
        }
        println!();
    }
    Ok(())
}

fn print_header(mode: &str) {
    println!("{}", "========================================".bold());
    println!("{}", format!("  Prakruti v{} - {}", VERSION, mode).bold());
    println!("{}", "========================================".bold());
    println!();
}

fn format_prompt(observed: usize) -> String {
    format!("{} > ", format!("[{} traits]", observed).dimmed())
}

/// Prompt text for the mode; JSON output carries no prompts
fn prompt<'a>(args: &Args, text: &'a str) -> &'a str {
    if args.json {
        ""
    } else {
        text
    }
}

/// Prompt and read one trimmed line; None on EOF
fn read_line(prompt: &str) -> io::Result<Option<String>> {
    print!("{}", prompt);
    io::stdout().flush()?;

    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
