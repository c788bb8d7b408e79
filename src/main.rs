//! Command-line interface for openapi-body-gen
//!
//! # Usage Examples
//!
//! ## Operation bodies
//! ```bash
//! # Request body for POST /pet
//! openapi-body-gen operation --document petstore.yaml --path /pet --method post
//!
//! # Three reproducible bodies with short arrays
//! openapi-body-gen operation -d petstore.yaml --path /pet -m put \
//!   --seed 42 --count 3 --array-max-length 2
//! ```
//!
//! ## Schema samples
//! ```bash
//! openapi-body-gen schema --document petstore.yaml --name Pet --output pet.json
//! ```
//!
//! ## Discovery
//! ```bash
//! openapi-body-gen endpoints --document petstore.yaml
//! openapi-body-gen schemas --document petstore.yaml
//! ```
//!
//! Logs go to stderr and are controlled with `RUST_LOG`
//! (e.g. `RUST_LOG=openapi_body_gen=info,body_generator=debug`).

use api_schema::HttpMethod;
use clap::{Parser, Subcommand};
use openapi_body_gen::{
    generate, load_document, output, DocumentOpts, GenerateOpts, OutputOpts, Target,
};

#[derive(Parser)]
#[command(name = "openapi-body-gen")]
#[command(about = "Generate sample JSON request bodies from OpenAPI documents")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the JSON request body of an operation
    Operation {
        #[command(flatten)]
        document: DocumentOpts,

        /// Path as written in the document (e.g. /pet)
        #[arg(long)]
        path: String,

        /// HTTP method (get, put, post, delete, options, head, patch, trace)
        #[arg(long, short = 'm', default_value = "post")]
        method: HttpMethod,

        #[command(flatten)]
        generate: GenerateOpts,

        #[command(flatten)]
        output: OutputOpts,
    },

    /// Generate a value for a named component schema
    Schema {
        #[command(flatten)]
        document: DocumentOpts,

        /// Name under components.schemas (e.g. Pet)
        #[arg(long, short = 'n')]
        name: String,

        #[command(flatten)]
        generate: GenerateOpts,

        #[command(flatten)]
        output: OutputOpts,
    },

    /// List every operation in the document
    Endpoints {
        #[command(flatten)]
        document: DocumentOpts,
    },

    /// List component schema names
    Schemas {
        #[command(flatten)]
        document: DocumentOpts,
    },
}

fn main() -> anyhow::Result<()> {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

fn run() -> anyhow::Result<()> {
    // Initialize tracing; stdout is reserved for generated JSON
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Operation {
            document,
            path,
            method,
            generate,
            output,
        } => run_generate(&document, Target::Operation { path, method }, &generate, &output),
        Commands::Schema {
            document,
            name,
            generate,
            output,
        } => run_generate(&document, Target::Schema { name }, &generate, &output),
        Commands::Endpoints { document } => {
            let document = load_document(&document.document)?;
            let endpoints = document.endpoints();
            if endpoints.is_empty() {
                tracing::warn!("Document declares no operations");
                return Ok(());
            }
            println!("{}", output::format_endpoints(&endpoints));
            Ok(())
        }
        Commands::Schemas { document } => {
            let document = load_document(&document.document)?;
            for name in document.schema_names() {
                println!("{name}");
            }
            Ok(())
        }
    }
}

fn run_generate(
    document: &DocumentOpts,
    target: Target,
    generate_opts: &GenerateOpts,
    output_opts: &OutputOpts,
) -> anyhow::Result<()> {
    let document = load_document(&document.document)?;
    let bodies = generate(&document, &target, generate_opts)?;
    let rendered = output::render(bodies, output_opts.compact)?;
    output::write_output(&rendered, output_opts.output.as_deref())?;
    tracing::info!("Generation completed successfully");
    Ok(())
}
