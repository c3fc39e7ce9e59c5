use clap::{Parser as ClapParser, Subcommand};
use mapaccess::cli::{self, CliError, GetOptions, GetResult};
use std::io::{self, Read};

#[derive(ClapParser)]
#[command(name = "mapaccess")]
#[command(about = "mapaccess - Resolve paths like `friends[0].name` against JSON documents")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a path against a JSON document
    Get {
        /// The path to resolve, e.g. `friends[0].name`
        path: String,

        /// JSON input (reads from stdin if not provided)
        #[arg(short, long)]
        input: Option<String>,

        /// Pretty-print the output
        #[arg(short, long)]
        pretty: bool,

        /// Only validate the path, don't resolve it
        #[arg(long)]
        syntax_only: bool,
    },

    /// Print the access steps a path breaks down into
    Steps {
        /// The path to inspect
        path: String,
    },
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Get {
            path,
            input,
            pretty,
            syntax_only,
        } => run_get(path, input, pretty, syntax_only),
        Commands::Steps { path } => cli::describe_steps(&path).map(|steps| print!("{}", steps)),
    };

    if let Err(e) = result {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn run_get(
    path: String,
    input: Option<String>,
    pretty: bool,
    syntax_only: bool,
) -> Result<(), CliError> {
    let input = match input {
        Some(s) => Some(s),
        None if !syntax_only && !atty::is(atty::Stream::Stdin) => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Some(buffer)
        }
        None => None,
    };

    let options = GetOptions {
        path,
        input,
        syntax_only,
    };

    match cli::execute_get(&options)? {
        GetResult::SyntaxValid => println!("Path is valid"),
        GetResult::Found(output) => {
            let json = if pretty {
                serde_json::to_string_pretty(&output)
            } else {
                serde_json::to_string(&output)
            }?;
            println!("{}", json);
        }
    }
    Ok(())
}
