use std::path::PathBuf;
use std::process;

use clap::{Args, Parser, Subcommand};

use placeholder_icon::commands::check::{self, CheckResult};
use placeholder_icon::commands::generate;
use placeholder_icon::logging;

#[derive(Parser)]
#[command(name = "placeholder-icon")]
#[command(about = "Write a 16x16 solid-color placeholder icon.ico")]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    /// Enable debug logging on stderr (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Generate options when no command is given
    #[command(flatten)]
    generate: GenerateArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Args)]
struct GenerateArgs {
    /// Directory to write icon.ico into (defaults to the executable's directory)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Write icon.ico (the default when no command is given)
    Generate(GenerateArgs),
    /// Verify that a file matches the placeholder icon byte for byte
    Check {
        /// Icon file to verify
        file: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let code = match cli.command.unwrap_or(Commands::Generate(cli.generate)) {
        Commands::Generate(args) => run_generate(args.output_dir, args.json),
        Commands::Check { file } => run_check(&file),
    };

    process::exit(code);
}

fn run_generate(output_dir: Option<PathBuf>, json: bool) -> i32 {
    let report = match generate::run(output_dir.as_deref()) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("Error: {}", e);
            return 1;
        }
    };

    if json {
        match serde_json::to_string_pretty(&report) {
            Ok(text) => println!("{}", text),
            Err(e) => {
                eprintln!("Error: {}", e);
                return 1;
            }
        }
    } else {
        println!("Created {}", report.path.display());
    }
    0
}

fn run_check(file: &std::path::Path) -> i32 {
    match check::run(file) {
        Ok(CheckResult::Match) => {
            println!("OK {}", file.display());
            0
        }
        Ok(CheckResult::NoMatch {
            expected,
            actual,
            expected_len,
            actual_len,
            first_difference,
        }) => {
            println!("MISMATCH {}", file.display());
            println!("  expected: {} ({} bytes)", expected, expected_len);
            println!("  actual:   {} ({} bytes)", actual, actual_len);
            println!("  first difference at byte {}", first_difference);
            1
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}
