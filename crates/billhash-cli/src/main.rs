mod commands;
mod output;

use billhash_core::{DocumentSchema, IndexOptions};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "billhash",
    version,
    about = "Fingerprint bill paragraphs and find unchanged text across revisions"
)]
struct Cli {
    /// Log debug details to stderr (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fingerprint every paragraph of one or more bill XML files
    Index {
        /// Bill XML file(s); processed in parallel, printed in the order given
        #[arg(required = true)]
        input_files: Vec<PathBuf>,

        /// Include each paragraph's display text
        #[arg(long)]
        keep_text: bool,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,

        /// Write records to a JSON file
        #[arg(short = 'O', long = "out", value_name = "FILE")]
        out: Option<PathBuf>,

        #[command(flatten)]
        schema: SchemaArgs,
    },
    /// Print the paragraphs of a bill whose fingerprint is in a given set
    Match {
        /// Bill XML file to search
        input_file: PathBuf,

        /// Target fingerprint (40 hex chars); repeatable
        #[arg(short, long = "sha", value_name = "FINGERPRINT")]
        sha: Vec<String>,

        /// File with one target fingerprint per line
        #[arg(long = "sha-file", value_name = "FILE")]
        sha_file: Option<PathBuf>,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,

        #[command(flatten)]
        schema: SchemaArgs,
    },
    /// Show the canonical form and fingerprint of a piece of text
    Hash {
        /// Text to fingerprint
        text: String,
    },
}

#[derive(Args)]
struct SchemaArgs {
    /// Title element name
    #[arg(long, default_value = "dc:title")]
    title_tag: String,

    /// Paragraph element name
    #[arg(long, default_value = "paragraph")]
    paragraph_tag: String,

    /// Paragraph id attribute name
    #[arg(long, default_value = "id")]
    id_attr: String,
}

impl From<SchemaArgs> for DocumentSchema {
    fn from(args: SchemaArgs) -> Self {
        DocumentSchema {
            title_tag: args.title_tag,
            paragraph_tag: args.paragraph_tag,
            id_attribute: args.id_attr,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let result = match cli.command {
        Commands::Index {
            input_files,
            keep_text,
            output,
            out,
            schema,
        } => {
            let options = IndexOptions {
                keep_display_text: keep_text,
                schema: schema.into(),
            };
            commands::index::run(input_files, &options, &output, out)
        }
        Commands::Match {
            input_file,
            sha,
            sha_file,
            output,
            schema,
        } => commands::matches::run(input_file, sha, sha_file, &schema.into(), &output),
        Commands::Hash { text } => {
            commands::hash::run(&text);
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
