//! gfill CLI - delimiter-preserving gap filling for numeric grids

#[cfg(feature = "cli")]
use clap::{Parser, Subcommand, ValueEnum};
#[cfg(feature = "cli")]
use gridfill::{
    check_grid, fill_text, fill_text_with_diagnostics, format_diagnostics, FillError, FillOptions,
    FillWarning, UnfillablePolicy,
};
#[cfg(feature = "cli")]
use std::fs;
#[cfg(feature = "cli")]
use std::io::{self, Read};
#[cfg(feature = "cli")]
use std::path::Path;

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "gfill")]
#[command(version)]
#[command(about = "Fill missing samples in delimiter-preserving numeric grids", long_about = None)]
struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    command: Option<Commands>,

    /// Input file path (reads from stdin if not provided)
    input_file: Option<String>,

    /// Output file path (writes to stdout if not provided)
    #[arg(short, long)]
    output: Option<String>,

    /// Check mode - report grid issues without filling
    #[arg(long)]
    check: bool,

    /// What to do with missing cells that have no valid neighbor
    #[arg(long, value_enum, default_value_t = OnUnfillable::Keep)]
    on_unfillable: OnUnfillable,

    /// Sentinel value written for unfillable cells (overrides --on-unfillable)
    #[arg(long)]
    sentinel: Option<i64>,

    /// Strict mode: exit with error if any cell could not be filled
    #[arg(long)]
    strict: bool,

    /// Quiet mode: suppress warning output to stderr
    #[arg(short, long)]
    quiet: bool,

    /// Use colored output (for check mode and warnings)
    #[arg(long, default_value_t = true)]
    color: bool,
}

#[cfg(feature = "cli")]
#[derive(Subcommand)]
enum Commands {
    /// Check a grid for issues without filling it
    Check {
        /// Input file to check
        input: Option<String>,

        /// Disable colored output
        #[arg(long)]
        no_color: bool,
    },

    /// Fill a grid (default action)
    Fill {
        /// Input file path
        input: Option<String>,

        /// Output file path
        #[arg(short, long)]
        output: Option<String>,

        /// What to do with missing cells that have no valid neighbor
        #[arg(long, value_enum, default_value_t = OnUnfillable::Keep)]
        on_unfillable: OnUnfillable,

        /// Sentinel value written for unfillable cells
        #[arg(long)]
        sentinel: Option<i64>,
    },

    /// Batch fill multiple files
    Batch {
        /// Input file or directory
        input: String,

        /// Output directory
        #[arg(short, long)]
        output_dir: String,

        /// File extension for output files
        #[arg(short, long, default_value = "txt")]
        extension: String,
    },

    /// Show version and feature info
    Info,
}

#[cfg(feature = "cli")]
#[derive(Clone, Copy, ValueEnum)]
enum OnUnfillable {
    /// Keep the original 0
    Keep,
    /// Fail on the first unfillable cell
    Fail,
}

#[cfg(feature = "cli")]
fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

#[cfg(feature = "cli")]
fn run() -> Result<(), FillError> {
    let cli = Cli::parse();

    // Handle subcommands first
    if let Some(cmd) = cli.command {
        return handle_subcommand(cmd);
    }

    let input = read_input(cli.input_file.as_deref())?;

    // If check mode, analyze and report issues
    if cli.check {
        let result = check_grid(&input);
        println!("{}", format_diagnostics(&result, cli.color));
        if result.has_errors() {
            std::process::exit(1);
        }
        return Ok(());
    }

    let options = resolve_options(cli.on_unfillable, cli.sentinel);
    let result = fill_text_with_diagnostics(&input, &options)?;

    // Print warnings to stderr (unless quiet mode)
    if !cli.quiet && result.has_warnings() {
        print_warnings_to_stderr(&result.warnings, cli.color);
    }

    // Check strict mode
    if cli.strict && result.has_warnings() {
        eprintln!(
            "Error: {} unfilled cell(s) in strict mode",
            result.warnings.len()
        );
        std::process::exit(1);
    }

    write_output(cli.output.as_deref(), &result.content, result.warnings.len())
}

#[cfg(feature = "cli")]
fn handle_subcommand(cmd: Commands) -> Result<(), FillError> {
    match cmd {
        Commands::Check { input, no_color } => {
            let content = read_input(input.as_deref())?;

            let result = check_grid(&content);
            println!("{}", format_diagnostics(&result, !no_color));

            if result.has_errors() {
                std::process::exit(1);
            }
        }

        Commands::Fill {
            input,
            output,
            on_unfillable,
            sentinel,
        } => {
            let content = read_input(input.as_deref())?;

            let options = resolve_options(on_unfillable, sentinel);
            let result = fill_text_with_diagnostics(&content, &options)?;

            write_output(output.as_deref(), &result.content, result.warnings.len())?;
        }

        Commands::Batch {
            input,
            output_dir,
            extension,
        } => {
            // Create output directory if it doesn't exist
            fs::create_dir_all(&output_dir)?;

            let input_path = Path::new(&input);
            let files: Vec<_> = if input_path.is_dir() {
                fs::read_dir(input_path)?
                    .filter_map(|e| e.ok())
                    .map(|e| e.path())
                    .filter(|p| p.is_file())
                    .collect()
            } else {
                // Single file
                vec![input_path.to_path_buf()]
            };

            let mut success_count = 0;
            let mut error_count = 0;

            for file_path in files {
                let filename = file_path
                    .file_stem()
                    .and_then(|s| s.to_str())
                    .unwrap_or("output");

                let output_path =
                    Path::new(&output_dir).join(format!("{}.{}", filename, extension));

                let content = fs::read(&file_path)
                    .map_err(FillError::from)
                    .and_then(text_from_bytes);

                match content {
                    Ok(content) => {
                        let result = fill_text(&content);
                        match fs::write(&output_path, &result) {
                            Ok(_) => {
                                eprintln!("✓ {}", output_path.display());
                                success_count += 1;
                            }
                            Err(e) => {
                                eprintln!("✗ {} - write error: {}", output_path.display(), e);
                                error_count += 1;
                            }
                        }
                    }
                    Err(e) => {
                        eprintln!("✗ {} - {}", file_path.display(), e);
                        error_count += 1;
                    }
                }
            }

            eprintln!(
                "\nBatch fill complete: {} succeeded, {} failed",
                success_count, error_count
            );

            if error_count > 0 {
                std::process::exit(1);
            }
        }

        Commands::Info => {
            println!("gridfill - delimiter-preserving gap filling for numeric grids");
            println!("Version: {}", env!("CARGO_PKG_VERSION"));
            println!();
            println!("Features:");
            println!("  ✓ Neighbor-average filling of missing (0) samples");
            println!("  ✓ Space and comma delimiters preserved byte for byte");
            println!("  ✓ Ragged rows and lenient line parsing");
            println!("  ✓ Grid checking and diagnostics");
            println!("  ✓ Batch file processing");
            println!();
        }
    }

    Ok(())
}

/// Read input text from a file or stdin
#[cfg(feature = "cli")]
fn read_input(path: Option<&str>) -> Result<String, FillError> {
    let bytes = match path {
        Some(path) => fs::read(path)?,
        None => {
            let mut buffer = Vec::new();
            io::stdin().read_to_end(&mut buffer)?;
            buffer
        }
    };
    text_from_bytes(bytes)
}

/// Only text input is accepted; bytes that do not decode as UTF-8 are
/// rejected before they reach the parser.
#[cfg(feature = "cli")]
fn text_from_bytes(bytes: Vec<u8>) -> Result<String, FillError> {
    String::from_utf8(bytes).map_err(|_| FillError::invalid("not a text file"))
}

#[cfg(feature = "cli")]
fn resolve_options(on_unfillable: OnUnfillable, sentinel: Option<i64>) -> FillOptions {
    match (sentinel, on_unfillable) {
        (Some(value), _) => FillOptions {
            on_unfillable: UnfillablePolicy::Sentinel(value),
        },
        (None, OnUnfillable::Keep) => FillOptions::default(),
        (None, OnUnfillable::Fail) => FillOptions::strict(),
    }
}

/// Write the filled grid to a file (with a status line on stderr) or stdout.
/// The content is emitted byte for byte; no trailing newline is added.
#[cfg(feature = "cli")]
fn write_output(path: Option<&str>, content: &str, warning_count: usize) -> Result<(), FillError> {
    match path {
        Some(path) => {
            fs::write(path, content)?;
            if warning_count == 0 {
                eprintln!("✓ Output written to: {}", path);
            } else {
                eprintln!(
                    "⚠ Output written to: {} ({} warning(s))",
                    path, warning_count
                );
            }
        }
        None => {
            print!("{}", content);
        }
    }
    Ok(())
}

/// Print fill warnings to stderr with optional color coding
#[cfg(feature = "cli")]
fn print_warnings_to_stderr(warnings: &[FillWarning], use_color: bool) {
    eprintln!();
    eprintln!(
        "{}Fill Warnings ({}):{}",
        if use_color { "\x1b[33m" } else { "" },
        warnings.len(),
        if use_color { "\x1b[0m" } else { "" }
    );
    eprintln!();

    for warning in warnings {
        if use_color {
            eprintln!("  \x1b[33m[unfilled]\x1b[0m {}", warning);
        } else {
            eprintln!("  [unfilled] {}", warning);
        }
    }
    eprintln!();
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("CLI feature not enabled. Build with --features cli");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  cargo install gridfill --features cli");
    eprintln!("  gfill [OPTIONS] [INPUT_FILE]");
}
