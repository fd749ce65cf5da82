//! apitoc CLI: load an API description file and print its content outline.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use apitoc::{build_outline, ApiDescription, BuildOptions, ContentNode, Outline, SideNavStyle};

#[derive(Parser)]
#[command(
    name = "apitoc",
    version,
    about = "Print the content outline of an API description"
)]
struct Cli {
    /// Description document; .json is parsed as JSON, anything else as YAML
    spec_file: PathBuf,

    /// Emit the outline as JSON instead of an indented listing
    #[arg(long)]
    json: bool,

    /// How operations are labeled in the outline
    #[arg(long, value_enum, default_value = "summary-only")]
    side_nav: SideNav,
}

#[derive(Clone, Copy, ValueEnum)]
enum SideNav {
    SummaryOnly,
    PathOnly,
    IdOnly,
}

impl From<SideNav> for SideNavStyle {
    fn from(value: SideNav) -> Self {
        match value {
            SideNav::SummaryOnly => SideNavStyle::SummaryOnly,
            SideNav::PathOnly => SideNavStyle::PathOnly,
            SideNav::IdOnly => SideNavStyle::IdOnly,
        }
    }
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("{message}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), String> {
    let raw = std::fs::read_to_string(&cli.spec_file)
        .map_err(|e| format!("Failed to read {}: {e}", cli.spec_file.display()))?;

    let is_json = cli
        .spec_file
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    let description = if is_json {
        ApiDescription::from_json(&raw)?
    } else {
        ApiDescription::from_yaml(&raw)?
    };

    let options = BuildOptions {
        side_nav_style: cli.side_nav.into(),
    };
    let outline = build_outline(&description, &options);

    if cli.json {
        let json = serde_json::to_string_pretty(&outline.items)
            .map_err(|e| format!("Failed to serialize outline: {e}"))?;
        println!("{json}");
    } else {
        print_text(&description, &outline);
    }
    Ok(())
}

fn print_text(description: &ApiDescription, outline: &Outline) {
    if let Some(title) = &description.info.title {
        match &description.info.version {
            Some(version) => println!("{title} ({version})"),
            None => println!("{title}"),
        }
        println!();
    }
    for node in &outline.items {
        print_node(node);
    }
    if let Some(prefix) = &outline.security_prefix {
        println!();
        println!("security schemes anchored at: {prefix}");
    }
}

fn print_node(node: &ContentNode) {
    let indent = "  ".repeat(node.depth());
    match node {
        ContentNode::Group(group) => println!("{indent}{}  [{}]", group.title, group.id),
        ContentNode::Operation(op) => println!(
            "{indent}{} {}  {}",
            op.method.as_str_upper(),
            op.path,
            op.title
        ),
    }
    for child in node.items() {
        print_node(child);
    }
}

fn init_tracing() {
    // APITOC_LOG controls log level: "trace", "debug", "info", "warn",
    // "error", or a full tracing filter spec like "apitoc=debug".
    let filter = match std::env::var("APITOC_LOG") {
        Ok(level) if is_plain_level(&level) => format!("apitoc={level}"),
        Ok(spec) => spec,
        Err(_) => "apitoc=warn".to_string(),
    };

    if tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_env_filter(EnvFilter::new(&filter))
        .try_init()
        .is_err()
    {
        eprintln!("Warning: tracing subscriber already initialized");
    }
}

fn is_plain_level(s: &str) -> bool {
    matches!(
        s.to_ascii_lowercase().as_str(),
        "trace" | "debug" | "info" | "warn" | "error"
    )
}
