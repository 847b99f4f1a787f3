//! goss - Render JSON style trees to CSS

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};

use goss::naming::{HashedNamer, SequentialNamer};
use goss::{ClassNamer, RenderOptions, assign_class_names, format_css, sheet, to_css};

#[derive(Parser)]
#[command(name = "goss")]
#[command(version, about = "Render JSON style trees to CSS", long_about = None)]
#[command(after_help = "EXAMPLES:
    goss sheet.json                       Render in declaration order
    goss --sorted sheet.json              Render in canonical sorted order
    goss --scope hashed --prefix app- --class-map classes.json sheet.json
                                          Scope top-level selectors")]
struct Cli {
    /// Sheet file (JSON), or - for stdin
    #[arg(value_name = "INPUT")]
    input: String,

    /// Write CSS to this file instead of stdout
    #[arg(short, long, value_name = "OUTPUT")]
    output: Option<PathBuf>,

    /// Sort sibling blocks instead of keeping declaration order
    #[arg(short, long)]
    sorted: bool,

    /// Base indent depth
    #[arg(long, default_value_t = 0)]
    indent: usize,

    /// Print depth for sorted output
    #[arg(long, default_value_t = 0)]
    depth: usize,

    /// Replace top-level selectors with generated class names
    #[arg(long, value_enum)]
    scope: Option<Scope>,

    /// Prefix for generated class names
    #[arg(long, default_value = "")]
    prefix: String,

    /// Salt mixed into hashed class names
    #[arg(long, default_value = "")]
    salt: String,

    /// Write the selector → class name map as JSON
    #[arg(long, value_name = "PATH", requires = "scope")]
    class_map: Option<PathBuf>,

    /// Print the generated class list after the CSS
    #[arg(long, requires = "scope")]
    classes: bool,

    /// Increase log verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, ValueEnum)]
enum Scope {
    /// Content-hashed names (stable across runs)
    Hashed,
    /// Numbered names in render order
    Sequential,
}

impl Scope {
    fn namer(self, prefix: &str, salt: &str) -> ClassNamer {
        match self {
            Scope::Hashed => HashedNamer::new(prefix).with_salt(salt).into_namer(),
            Scope::Sequential if prefix.is_empty() => SequentialNamer::default().into_namer(),
            Scope::Sequential => SequentialNamer::new(prefix).into_namer(),
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn run(cli: &Cli) -> goss::Result<()> {
    let mut tree = if cli.input == "-" {
        sheet::from_reader(io::stdin().lock())?
    } else {
        sheet::load(&cli.input)?
    };

    let mut opts = RenderOptions::new().with_indent(cli.indent);
    opts.class_namer = cli.scope.map(|scope| scope.namer(&cli.prefix, &cli.salt));

    let css = if cli.sorted {
        // The sorted path never names classes itself.
        if let (Some(namer), Some(map)) = (opts.class_namer.as_ref(), opts.class_map.as_mut()) {
            assign_class_names(&mut tree, &**namer, map);
        }
        format_css(&tree, &opts)?.print(cli.depth)
    } else {
        to_css(&mut tree, &mut opts)?
    };
    log::info!("rendered {} bytes of CSS", css.len());

    match &cli.output {
        Some(path) => fs::write(path, format!("{css}\n"))?,
        None => writeln!(io::stdout().lock(), "{css}")?,
    }

    let map = opts.class_map().cloned().unwrap_or_default();
    if cli.classes {
        println!("{}", map.classes());
    }
    if let Some(path) = &cli.class_map {
        fs::write(path, serde_json::to_string_pretty(&map)?)?;
        log::info!("wrote {} class names to {}", map.len(), path.display());
    }

    Ok(())
}
