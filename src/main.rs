//! codepress - render C-family source files as paginated, themed documents

mod config;
mod document;
mod error;
mod highlight;
mod render;
mod source;
mod theme;

use std::env;
use std::io;
use std::path::{Path, PathBuf};
use std::process;

use config::Config;
use document::RunInfo;
use error::{RenderError, Result};
use render::{AnsiPreview, SvgDocument};
use source::SourceFile;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

/// Parsed command line
#[derive(Debug)]
struct Args {
    seed: PathBuf,
    output: Option<PathBuf>,
    info: RunInfo,
    theme: Option<String>,
    chunk_size: Option<usize>,
    include_project: bool,
    preview: bool,
}

fn run() -> Result<()> {
    let argv: Vec<String> = env::args().collect();

    if argv.len() > 1 {
        match argv[1].as_str() {
            "--help" | "-h" => {
                print_usage();
                return Ok(());
            }
            "--version" | "-V" => {
                println!("codepress {}", env!("CARGO_PKG_VERSION"));
                return Ok(());
            }
            "--list-themes" => {
                for name in theme::theme_names() {
                    println!("{}", name);
                }
                return Ok(());
            }
            _ => {}
        }
    }

    let args = parse_args(&argv)?;
    let mut config = Config::load();
    if let Some(name) = &args.theme {
        config.theme = name.clone();
    }
    if let Some(size) = args.chunk_size {
        config.chunk_size = size;
    }
    if !args.include_project {
        config.include_project = false;
    }

    // Theme resolution happens before any file is touched; an unknown
    // name is fatal up front
    let palette =
        theme::find(&config.theme).ok_or_else(|| RenderError::UnknownTheme(config.theme.clone()))?;

    let base = source::project_base(&args.seed);
    let paths = if config.include_project {
        source::find_project_files(&args.seed)
    } else {
        vec![args.seed.clone()]
    };

    // Per-file read failures are warnings, not fatal
    let mut files = Vec::new();
    for path in &paths {
        match SourceFile::read(path) {
            Ok(file) => files.push(file),
            Err(e) => eprintln!("warning: {}", e),
        }
    }

    println!("Found {} source file(s):", files.len());
    for file in &files {
        println!("  - {}", file.display_path(&base));
    }

    if args.preview {
        let stdout = io::stdout();
        let mut sink = AnsiPreview::new(
            stdout.lock(),
            &palette,
            config.font_size,
            config.line_height,
        );
        document::render_run(&mut sink, &files, &base, &palette, &config, &args.info)?;
    } else {
        let output = args.output.clone().unwrap_or_else(|| default_output(&args.seed));
        let mut sink = SvgDocument::new(&output, &palette);
        document::render_run(&mut sink, &files, &base, &palette, &config, &args.info)?;
        println!("created {}", output.display());
    }

    Ok(())
}

fn default_output(seed: &Path) -> PathBuf {
    let stem = seed
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("output");
    PathBuf::from(format!("{}_submission.svg", stem))
}

fn parse_args(argv: &[String]) -> Result<Args> {
    if argv.len() < 2 {
        return Err(RenderError::Usage(
            "missing source file (try --help)".to_string(),
        ));
    }

    let mut args = Args {
        seed: PathBuf::from(&argv[1]),
        output: None,
        info: RunInfo::default(),
        theme: None,
        chunk_size: None,
        include_project: true,
        preview: false,
    };

    let mut i = 2;
    while i < argv.len() {
        let flag = argv[i].as_str();
        match flag {
            "-o" | "--output" => {
                args.output = Some(PathBuf::from(value_of(argv, &mut i, flag)?));
            }
            "-n" | "--name" => {
                args.info.student = value_of(argv, &mut i, flag)?;
            }
            "-t" | "--title" => {
                args.info.title = value_of(argv, &mut i, flag)?;
            }
            "-c" | "--course" => {
                args.info.course = value_of(argv, &mut i, flag)?;
            }
            "--date" => {
                args.info.date = Some(value_of(argv, &mut i, flag)?);
            }
            "--theme" => {
                args.theme = Some(value_of(argv, &mut i, flag)?);
            }
            "--chunk-size" => {
                let raw = value_of(argv, &mut i, flag)?;
                let size = raw.parse::<usize>().map_err(|_| {
                    RenderError::Usage(format!("invalid chunk size: {}", raw))
                })?;
                args.chunk_size = Some(size);
            }
            "--no-project" => {
                args.include_project = false;
                i += 1;
            }
            "--preview" => {
                args.preview = true;
                i += 1;
            }
            _ => {
                return Err(RenderError::Usage(format!("unknown option: {}", flag)));
            }
        }
    }

    Ok(args)
}

/// Consume the value following a flag, advancing the index past both
fn value_of(argv: &[String], i: &mut usize, flag: &str) -> Result<String> {
    match argv.get(*i + 1) {
        Some(value) => {
            *i += 2;
            Ok(value.clone())
        }
        None => Err(RenderError::Usage(format!("{} requires a value", flag))),
    }
}

fn print_usage() {
    println!(
        "codepress {} - render C-family source as paginated, themed documents",
        env!("CARGO_PKG_VERSION")
    );
    println!();
    println!("Usage: codepress <code_file> [options]");
    println!();
    println!("Options:");
    println!("  -o, --output <file>     Output filename (default: <stem>_submission.svg)");
    println!("  -n, --name <name>       Student name for the cover header");
    println!("  -t, --title <title>     Assignment title");
    println!("  -c, --course <course>   Course name/number");
    println!("      --date <date>       Date line for the cover header");
    println!("      --theme <theme>     Color theme (default: {})", theme::DEFAULT_THEME);
    println!("      --chunk-size <n>    Lines per rendered block (default: 55)");
    println!("      --no-project        Only render the named file");
    println!("      --preview           Render to the terminal instead of a file");
    println!("      --list-themes       List available themes");
    println!("  -h, --help              Show this help message");
    println!("  -V, --version           Show version information");
    println!();
    println!("By default, codepress finds and includes all C/C++ sources and");
    println!("headers in the seed file's directory and subdirectories.");
}
