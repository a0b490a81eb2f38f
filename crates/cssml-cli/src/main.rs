use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

mod serve;

#[derive(Parser)]
#[command(name = "cssml")]
#[command(about = "cssml: write HTML pages as style sheets")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert a style sheet to an HTML page
    Build {
        /// Input style sheet
        path: PathBuf,

        /// Directory the page is written to
        #[arg(short, long, default_value = "dist")]
        outdir: PathBuf,
    },

    /// Check a style sheet for errors without writing output
    Check {
        /// Input style sheet
        path: PathBuf,
    },

    /// Serve a build directory over HTTP
    Serve {
        /// Directory to serve
        #[arg(short, long, default_value = "dist")]
        dir: PathBuf,

        /// Port to listen on
        #[arg(short, long, default_value_t = 3000)]
        port: u16,
    },
}

/// Errors that end a CLI run.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("file not found: {0}")]
    NotFound(String),

    #[error("reading {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("writing {path}: {source}")]
    Write {
        path: String,
        source: std::io::Error,
    },

    #[error(transparent)]
    Parse(#[from] cssml_parser::ParseError),

    #[error("server error: {0}")]
    Server(String),
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let result = match cli.command {
        Command::Build { path, outdir } => cmd_build(&path, &outdir),
        Command::Check { path } => cmd_check(&path),
        Command::Serve { dir, port } => serve::serve(&dir, port),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn read_source(path: &Path) -> Result<String, CliError> {
    if !path.exists() {
        return Err(CliError::NotFound(path.display().to_string()));
    }
    std::fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.display().to_string(),
        source,
    })
}

/// `<outdir>/<input stem>.html`
fn output_path(input: &Path, outdir: &Path) -> PathBuf {
    let stem = input.file_stem().unwrap_or(input.as_os_str());
    outdir.join(format!("{}.html", stem.to_string_lossy()))
}

fn cmd_build(path: &Path, outdir: &Path) -> Result<(), CliError> {
    let source = read_source(path)?;
    let html = cssml_codegen::convert(&source)?;

    let html_path = output_path(path, outdir);

    std::fs::create_dir_all(outdir).map_err(|source| CliError::Write {
        path: outdir.display().to_string(),
        source,
    })?;
    std::fs::write(&html_path, html).map_err(|source| CliError::Write {
        path: html_path.display().to_string(),
        source,
    })?;

    println!(
        "Successfully converted {} to {}",
        path.display(),
        html_path.display()
    );
    Ok(())
}

fn cmd_check(path: &Path) -> Result<(), CliError> {
    let source = read_source(path)?;
    let sheet = cssml_parser::Parser::parse(&source)?;

    let output = cssml_codegen::compile(&sheet);
    log::debug!("{} root elements", output.vertices.len());

    println!("OK: {}", path.display());
    Ok(())
}
