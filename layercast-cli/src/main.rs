//! layercast — warehouse script generator for feature layers.
//!
//! # Usage
//!
//! ```bash
//! # Inspect a layer's fields (schema JSON saved from the service endpoint)
//! layercast fields shelters.json --table
//!
//! # Emit the bronze landing DDL and the silver rebuild procedure
//! layercast bronze shelters.json
//! layercast silver shelters.json --profile parks.json
//!
//! # Prefix a pasted column block for a join
//! layercast aliases columns.txt --prefix EAM
//! ```

mod display;

use std::fs;
use std::io::Read;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use colored::*;
use layercast_core::prelude::*;

#[derive(Parser)]
#[command(name = "layercast")]
#[command(version)]
#[command(about = "Generate bronze/silver warehouse T-SQL from a feature-layer schema", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the layer's field names after ignore filtering
    Fields {
        /// Layer schema JSON file (`-` for stdin)
        schema: String,
        /// Layer profile JSON (defaults to the parks profile)
        #[arg(short, long)]
        profile: Option<String>,
        /// Render the full descriptors as a table
        #[arg(long, conflicts_with = "typed")]
        table: bool,
        /// Emit typed column definitions instead of names
        #[arg(long)]
        typed: bool,
    },
    /// Emit the bronze external-table DDL
    Bronze {
        /// Layer schema JSON file (`-` for stdin)
        schema: String,
        /// Layer name; defaults to the schema document's name
        #[arg(short, long)]
        name: Option<String>,
        /// Layer profile JSON (defaults to the parks profile)
        #[arg(short, long)]
        profile: Option<String>,
    },
    /// Emit the silver rebuild stored procedure
    Silver {
        /// Layer schema JSON file (`-` for stdin)
        schema: String,
        /// Layer name; defaults to the schema document's name
        #[arg(short, long)]
        name: Option<String>,
        /// Layer profile JSON (defaults to the parks profile)
        #[arg(short, long)]
        profile: Option<String>,
    },
    /// Rewrite a bracketed column block with a table prefix
    Aliases {
        /// File holding one bracketed column name per line (`-` for stdin)
        columns: String,
        /// Join prefix, e.g. GIS or EAM
        #[arg(short, long)]
        prefix: String,
    },
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{} {err:#}", "error:".red().bold());
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Fields {
            schema,
            profile,
            table,
            typed,
        } => {
            let schema = load_schema(&schema)?;
            let scripter = load_scripter(profile.as_deref())?;
            if table {
                println!("{}", display::fields_table(&schema.fields));
            } else if typed {
                println!("{}", scripter.typed_definitions(&schema.fields)?);
            } else {
                println!("{}", scripter.field_names(&schema.fields));
            }
        }
        Commands::Bronze {
            schema,
            name,
            profile,
        } => {
            let schema = load_schema(&schema)?;
            let name = layer_name(name, &schema)?;
            let scripter = load_scripter(profile.as_deref())?;
            eprintln!("{} bronze DDL for {}", "generating".dimmed(), name.cyan());
            println!("{}", scripter.bronze_ddl(&name, &schema.fields));
        }
        Commands::Silver {
            schema,
            name,
            profile,
        } => {
            let schema = load_schema(&schema)?;
            let name = layer_name(name, &schema)?;
            let scripter = load_scripter(profile.as_deref())?;
            eprintln!(
                "{} silver procedure for {}",
                "generating".dimmed(),
                name.cyan()
            );
            println!("{}", scripter.silver_procedure(&name, &schema.fields)?);
        }
        Commands::Aliases { columns, prefix } => {
            let block = read_input(&columns)?;
            let scripter = load_scripter(None)?;
            println!("{}", scripter.prefixed_aliases(&block, &prefix)?);
        }
    }
    Ok(())
}

/// Read a file, or stdin when the path is `-`.
fn read_input(path: &str) -> Result<String> {
    if path == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("reading stdin")?;
        Ok(buf)
    } else {
        fs::read_to_string(path).with_context(|| format!("reading {path}"))
    }
}

fn load_schema(path: &str) -> Result<LayerSchema> {
    let json = read_input(path)?;
    LayerSchema::from_json(&json).with_context(|| format!("parsing layer schema from {path}"))
}

fn load_scripter(profile: Option<&str>) -> Result<LayerScripter> {
    let profile = match profile {
        Some(path) => {
            let json = read_input(path)?;
            LayerProfile::from_json(&json).with_context(|| format!("loading profile {path}"))?
        }
        None => LayerProfile::parks(),
    };
    Ok(LayerScripter::new(profile)?)
}

fn layer_name(flag: Option<String>, schema: &LayerSchema) -> Result<String> {
    match flag.or_else(|| schema.name.clone()) {
        Some(name) => Ok(name),
        None => bail!("layer name missing: pass --name or use a schema document with a name"),
    }
}
