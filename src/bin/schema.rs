//! Remcall Schema CLI
//!
//! Builds the sample schema, resolves it and prints the result.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use remcall_schema::config::OutputFormat;
use remcall_schema::{
    Enum, Field, Interface, NamingConvention, Record, Schema, SchemaConfig, Type, TypeLookup,
    TypeRef,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "remcall-schema")]
#[command(about = "Inspect remcall schema type resolution")]
struct Cli {
    /// Configuration file layered over the defaults
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the sample schema before and after resolution
    Demo {
        /// Output format (defaults to the configured one)
        #[arg(short, long, value_enum)]
        format: Option<Format>,
    },

    /// Print the sample schema's names through a naming convention
    Names {
        #[arg(long, value_enum)]
        convention: Option<Convention>,
    },

    /// Show or write configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the effective configuration as TOML
    Show,
    /// Write the effective configuration to a file
    Init { path: PathBuf },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

impl From<Format> for OutputFormat {
    fn from(f: Format) -> Self {
        match f {
            Format::Text => OutputFormat::Text,
            Format::Json => OutputFormat::Json,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum Convention {
    Identity,
    Snake,
    Camel,
}

impl From<Convention> for NamingConvention {
    fn from(c: Convention) -> Self {
        match c {
            Convention::Identity => NamingConvention::Identity,
            Convention::Snake => NamingConvention::Snake,
            Convention::Camel => NamingConvention::Camel,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    let config = match SchemaConfig::load_from(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let filter = match &config.log.filter {
        Some(directive) => EnvFilter::new(directive),
        None => EnvFilter::from_default_env(),
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    if let Err(e) = run(cli.command, config) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(command: Commands, config: SchemaConfig) -> anyhow::Result<()> {
    match command {
        Commands::Demo { format } => {
            let format = format.map(OutputFormat::from).unwrap_or(config.output.format);
            demo(&config.schema.label, format)
        }
        Commands::Names { convention } => {
            let convention = convention
                .map(NamingConvention::from)
                .unwrap_or(config.naming.convention);
            names(&config.schema.label, convention)
        }
        Commands::Config { action } => match action {
            ConfigAction::Show => {
                print!("{}", toml::to_string_pretty(&config)?);
                Ok(())
            }
            ConfigAction::Init { path } => {
                config
                    .save(&path)
                    .with_context(|| format!("writing {}", path.display()))?;
                println!("Wrote {}", path.display());
                Ok(())
            }
        },
    }
}

/// Enum `Hello`, record `MyRecord` that contains itself and a pending
/// reference to entry 2 of the returned lookup, and interface `Main`.
fn sample_schema(label: &str) -> anyhow::Result<(Schema, TypeLookup)> {
    let mut schema = Schema::new(label);
    let hello = schema.declare(Enum::new("Hello", ["Opt1", "Opt2"]));
    let rec = schema.declare(Record::new("MyRecord", [Field::new("MyField", hello.clone())]));
    schema.declare(Interface::new("Main"));

    let record = schema
        .arena_mut()
        .record_mut(rec.id)?
        .context("MyRecord is not a record")?;
    record.push_field("Self", rec.clone());
    record.push_field("Multiple", Type::array_of(hello.clone()));
    record.push_field("ToResolve", TypeRef::new(2));

    let mut lookup = TypeLookup::new();
    lookup.insert(2, hello);
    Ok((schema, lookup))
}

fn print_schema(schema: &Schema, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => println!("{}", schema),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(schema)?),
    }
    Ok(())
}

fn demo(label: &str, format: OutputFormat) -> anyhow::Result<()> {
    let (mut schema, lookup) = sample_schema(label)?;

    println!("{}", TypeRef::new(2));
    println!("{}", TypeRef::new(-1));
    println!();

    print_schema(&schema, format)?;
    schema.arena_mut().resolve_all(&lookup)?;
    println!();
    print_schema(&schema, format)?;

    println!();
    println!("checksum {}", schema.checksum());
    Ok(())
}

fn names(label: &str, convention: NamingConvention) -> anyhow::Result<()> {
    let (schema, _) = sample_schema(label)?;
    let converter = convention.converter();

    for (kind, owner, name) in schema.names() {
        let converted = converter.convert(kind, name.as_str());
        match owner {
            Some(owner) => println!("{:<12} {}.{} -> {}", format!("{:?}", kind), owner, name, converted),
            None => println!("{:<12} {} -> {}", format!("{:?}", kind), name, converted),
        }
    }
    Ok(())
}
