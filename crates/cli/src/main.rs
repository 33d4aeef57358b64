use anyhow::{Context, Result};
use calculator::{CalculatorConfig, FormSession, ScoringMode, SubmissionDispatcher};
use clap::{Parser, Subcommand};
use colored::Colorize;
use model::{Field, Genre, ScoreResult};
use scoring_client::ScoringClient;

mod interactive;

/// Cult Classic Calculator - how likely is your movie to become a cult classic?
#[derive(Parser)]
#[command(name = "cult-calc")]
#[command(about = "Estimate a movie's chances of becoming a cult classic", long_about = None)]
struct Cli {
    /// Where scores come from: "mock" or "remote" (overrides CULT_CALC_MODE)
    #[arg(long, global = true)]
    mode: Option<ScoringMode>,

    /// Base URL of the scoring service (overrides CULT_CALC_BASE_URL)
    #[arg(long, global = true)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fill in the form from flags and submit it once
    Calculate {
        #[command(flatten)]
        fields: MovieArgs,

        /// Print the raw result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Fill in the form interactively, one field at a time
    Form,

    /// List the genres the form accepts
    Genres,

    /// What a cult classic is and how the score is made
    About,

    /// Check that the scoring service is reachable
    Ping,
}

/// Form fields, taken as raw text so they go through the same parsing as
/// interactive input. Omitted fields keep the form's defaults.
#[derive(clap::Args)]
struct MovieArgs {
    /// Movie title
    #[arg(long)]
    title: Option<String>,

    /// Release year (1900-2024)
    #[arg(long)]
    year: Option<String>,

    /// Runtime in minutes (30-300)
    #[arg(long)]
    runtime: Option<String>,

    /// Box office revenue
    #[arg(long)]
    revenue: Option<String>,

    /// Production budget
    #[arg(long)]
    budget: Option<String>,

    /// Adult film (true/false)
    #[arg(long)]
    adult: Option<String>,

    /// Genre, see `cult-calc genres`
    #[arg(long)]
    genre: Option<String>,

    /// Tagline
    #[arg(long)]
    tagline: Option<String>,

    /// Short description
    #[arg(long)]
    description: Option<String>,
}

impl MovieArgs {
    /// Raw values paired with the field they belong to, in form order
    fn provided(&self) -> Vec<(Field, &str)> {
        let values = [
            (Field::Title, &self.title),
            (Field::Year, &self.year),
            (Field::Runtime, &self.runtime),
            (Field::Revenue, &self.revenue),
            (Field::Budget, &self.budget),
            (Field::Adult, &self.adult),
            (Field::Genre, &self.genre),
            (Field::Tagline, &self.tagline),
            (Field::Description, &self.description),
        ];
        values
            .into_iter()
            .filter_map(|(field, value)| value.as_deref().map(|raw| (field, raw)))
            .collect()
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // The interactive form keeps the terminal quiet unless asked otherwise
    let default_filter = match cli.command {
        Commands::Form => "warn",
        _ => "info",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = load_config(&cli)?;

    match cli.command {
        Commands::Calculate { fields, json } => handle_calculate(&config, &fields, json).await?,
        Commands::Form => interactive::run(&config).await?,
        Commands::Genres => handle_genres(),
        Commands::About => handle_about(),
        Commands::Ping => handle_ping(&config).await?,
    }

    Ok(())
}

/// Environment first, then command line overrides
fn load_config(cli: &Cli) -> Result<CalculatorConfig> {
    let mut config = CalculatorConfig::from_env().context("Failed to load configuration")?;
    if let Some(mode) = cli.mode {
        config = config.with_mode(mode);
    }
    if let Some(base_url) = &cli.base_url {
        config = config
            .with_base_url(base_url)
            .context("Invalid --base-url")?;
    }
    Ok(config)
}

/// Handle the 'calculate' command
async fn handle_calculate(config: &CalculatorConfig, fields: &MovieArgs, json: bool) -> Result<()> {
    let mut session = FormSession::new();
    for (field, raw) in fields.provided() {
        session
            .set_field(field.name(), raw)
            .with_context(|| format!("Invalid --{}", field))?;
    }

    let dispatcher = SubmissionDispatcher::from_config(config);
    if !json {
        println!("{}", "Calculating...".dimmed());
    }
    let result = session
        .submit(&dispatcher)
        .await
        .context("Could not score the movie")?;

    if json {
        println!("{}", render_json(result)?);
    } else {
        print_result(result);
    }
    Ok(())
}

/// Stdout body for `calculate --json`: the result and nothing else
fn render_json(result: &ScoreResult) -> Result<String> {
    serde_json::to_string_pretty(result).context("Failed to serialize result")
}

/// Handle the 'genres' command
fn handle_genres() {
    println!("{}", "Genres:".bold().blue());
    for genre in Genre::ALL {
        println!("{}{}", "• ".green(), genre);
    }
}

/// Handle the 'about' command
fn handle_about() {
    println!("{}", "About Cult Classics".bold().blue());
    println!();
    println!("{}", "What is a cult classic?".bold());
    println!(
        "A cult classic is a film that gathers a dedicated fanbase over time. Most do poorly \
         at the box office on release, then find a niche audience that embraces what the \
         mainstream passed over: the improper, the scandalous, the obscure. Horror, science \
         fiction and comedy are common homes for them."
    );
    println!(
        "A film that was a hit from day one is not a cult classic, however unusual it is. \
         It was never the underdog."
    );
    println!();
    println!("{}", "Methodology".bold());
    println!(
        "Known cult films were gathered from Wikipedia's lists of cult films and matched \
         against a larger TMDb movie dataset, labelling each movie as cult or not. The \
         model considers:"
    );
    for factor in ["Overview", "Release date", "Runtime", "Genres", "Revenue and budget"] {
        println!("{}{}", "• ".green(), factor);
    }
    println!();
    println!("{}", "How it works".bold());
    println!(
        "Enter your movie's details with `cult-calc calculate` or `cult-calc form` and the \
         calculator returns the probability of it reaching cult classic status, with the \
         factors behind the score."
    );
}

/// Handle the 'ping' command
async fn handle_ping(config: &CalculatorConfig) -> Result<()> {
    let client = ScoringClient::new(config.base_url.clone());
    let message = client
        .welcome()
        .await
        .with_context(|| format!("Scoring service at {} is not reachable", config.base_url))?;
    println!("{} {}", "✓".green(), message);
    Ok(())
}

/// Format and print a score result
pub(crate) fn print_result(result: &ScoreResult) {
    println!("{}", "Results".bold().blue());
    println!(
        "Cult Classic Probability: {}",
        format!("{}%", result.probability).bold().green()
    );

    if !result.factors.is_empty() {
        println!("{}", "Factors:".bold());
        for (name, factor) in &result.factors {
            println!(
                "  {} score {:.0}, weight {:.0} - {}",
                format!("{:<12}", name).cyan(),
                factor.score,
                factor.weight,
                factor.details
            );
        }
    }

    let movie = &result.movie_details;
    println!("{}", "Movie Details:".bold());
    println!("{}Title: {}", "• ".green(), movie.title);
    println!("{}Year: {}", "• ".green(), movie.year);
    println!("{}Runtime: {} minutes", "• ".green(), movie.runtime);
    println!("{}Genre: {}", "• ".green(), movie.genre);
    println!("{}Revenue: {}", "• ".green(), movie.revenue);
    println!("{}Budget: {}", "• ".green(), movie.budget);
    println!("{}Adult: {}", "• ".green(), if movie.adult { "yes" } else { "no" });
    println!("{}Tagline: \"{}\"", "• ".green(), movie.tagline);
    println!("{}Description: \"{}\"", "• ".green(), movie.description);
}
