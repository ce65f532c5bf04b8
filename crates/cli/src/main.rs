use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use formgen_core::{
    backend_settings_from_env_values, map_submission, CoreConfig, SpecificationExtractor,
    DEFAULT_API_URL,
};
use formgen_render::{
    write_json, FormApi, HttpFormApi, LocalFormApi, Workflow, DEFAULT_EXPORT_FILENAME,
    EXAMPLE_PROMPTS,
};
use formgen_types::{FormSpecification, Prompt, SubmissionValues};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod terminal;

use terminal::Terminal;

#[derive(Parser)]
#[command(name = "formgen")]
#[command(about = "Generate, fill in and map forms from plain-language descriptions")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Clone, Copy, Debug, Default, ValueEnum)]
enum OutputFormat {
    #[default]
    Json,
    Yaml,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a form specification from a description
    Generate {
        /// Plain-language form description
        prompt: String,
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
    },
    /// Map submitted values onto a form specification
    Map {
        /// JSON file of field name to value
        #[arg(long)]
        values: PathBuf,
        /// JSON file holding the form specification
        #[arg(long)]
        spec: PathBuf,
    },
    /// Generate a form and fill it in interactively
    Fill {
        /// Form description (asked for when omitted)
        prompt: Option<String>,
        /// Server API base URL
        #[arg(long, env = "FORMGEN_API_URL", default_value = DEFAULT_API_URL)]
        api_url: String,
        /// Generate and map in this process instead of calling a server
        #[arg(long)]
        local: bool,
        /// Where to save the mapped submission
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// List example prompts
    Examples,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("formgen_cli=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Generate { prompt, format }) => {
            let prompt = Prompt::new(&prompt)?;
            let spec = extractor_from_env()?.extract(&prompt).await;
            println!("{}", format_spec(&spec, format)?);
        }
        Some(Commands::Map { values, spec }) => {
            let values: SubmissionValues = read_json(&values)?;
            let spec: FormSpecification = read_json(&spec)?;
            let mapped = map_submission(&values, &spec);
            println!("{}", serde_json::to_string_pretty(&mapped)?);
        }
        Some(Commands::Fill {
            prompt,
            api_url,
            local,
            output,
        }) => {
            if local {
                let api = LocalFormApi::new(extractor_from_env()?);
                fill(api, prompt, output).await?;
            } else {
                tracing::info!("Using form API at {}", api_url);
                fill(HttpFormApi::new(&api_url)?, prompt, output).await?;
            }
        }
        Some(Commands::Examples) => {
            for (i, example) in EXAMPLE_PROMPTS.iter().enumerate() {
                println!("{}. {}", i + 1, example);
            }
        }
        None => {
            println!("Use 'formgen --help' for commands");
        }
    }

    Ok(())
}

fn extractor_from_env() -> anyhow::Result<SpecificationExtractor> {
    let backend = backend_settings_from_env_values(
        std::env::var("OPENAI_API_KEY").ok(),
        std::env::var("OPENAI_BASE_URL").ok(),
        std::env::var("OPENAI_MODEL").ok(),
    )?;
    let extractor = SpecificationExtractor::from_config(&CoreConfig::new(backend))?;
    if !extractor.has_backend() {
        tracing::warn!("OPENAI_API_KEY not set. Using fallback form generation.");
    }
    Ok(extractor)
}

fn format_spec(spec: &FormSpecification, format: OutputFormat) -> anyhow::Result<String> {
    Ok(match format {
        OutputFormat::Json => serde_json::to_string_pretty(spec)?,
        OutputFormat::Yaml => serde_yaml::to_string(spec)?,
    })
}

fn read_json<T: serde::de::DeserializeOwned>(path: &std::path::Path) -> anyhow::Result<T> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("failed to open {}", path.display()))?;
    serde_json::from_reader(std::io::BufReader::new(file))
        .with_context(|| format!("failed to parse {}", path.display()))
}

async fn fill<A: FormApi>(
    api: A,
    prompt: Option<String>,
    output: Option<PathBuf>,
) -> anyhow::Result<()> {
    let stdin = std::io::stdin();
    let mut term = Terminal::new(stdin.lock(), std::io::stdout());
    let mut workflow = Workflow::new(api);

    let submission = term.run(&mut workflow, prompt).await?;
    term.show_submission(&submission)?;

    let path = match output {
        Some(path) => Some(path),
        None if term.confirm(&format!("Save to {DEFAULT_EXPORT_FILENAME}?"))? => {
            Some(PathBuf::from(DEFAULT_EXPORT_FILENAME))
        }
        None => None,
    };
    if let Some(path) = path {
        write_json(&path, &submission)?;
        println!("Saved {}", path.display());
    }
    Ok(())
}
