mod support;

use anstyle::{AnsiColor, Style};
use anyhow::Context;
use clap::builder::Styles;
use clap::{crate_authors, crate_version, ArgAction, Parser};
use cloudize::{cloudize, CloudizeParams, GcsBucket, UploadNamespace};
use std::ffi::OsString;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use url::Url;

/// Prepare a CWL workload for cloud processing. Uploads the files its inputs
/// refer to and writes a new inputs file pointing at the uploaded copies.
#[derive(Parser)]
#[command(
    version = crate_version!(),
    author = crate_authors!(),
    styles = style(),
)]
struct Opts {
    /// The name of the GCS bucket to upload workflow inputs to.
    bucket: String,

    /// Path to the .cwl file defining your workflow.
    workflow_definition: PathBuf,

    /// Path to the .yaml file specifying your workflow inputs.
    workflow_inputs: PathBuf,

    /// Path to write the updated workflow inputs to. Defaults to the workflow
    /// inputs path with `_cloud` before the extension. Comments in the
    /// workflow inputs file are not carried over.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Resolve and rewrite everything, but do not upload to GCS.
    #[arg(long)]
    dryrun: bool,

    /// User name to file the uploads under. Defaults to the current user.
    #[arg(long, env = "CLOUDIZE_USER")]
    user: Option<String>,

    /// Cloud Storage API endpoint, e.g. of an emulator.
    #[arg(long, env = "CLOUDIZE_STORAGE_ENDPOINT")]
    storage_endpoint: Option<Url>,

    /// Displays detailed information about operations. -vv will generate a very large number of messages.
    #[arg(long, short, action = ArgAction::Count)]
    verbose: u8,

    /// Suppresses informational messages. -qq limits to errors only; -qqqq disables them all.
    #[arg(long, short, action = ArgAction::Count)]
    quiet: u8,
}

fn style() -> Styles {
    let green = Style::new().fg_color(Some(AnsiColor::Green.into()));
    let yellow = Style::new().fg_color(Some(AnsiColor::Yellow.into()));
    let red = Style::new()
        .fg_color(Some(AnsiColor::BrightRed.into()))
        .bold();
    Styles::styled()
        .literal(green)
        .placeholder(green)
        .error(red)
        .header(yellow)
        .invalid(yellow)
        .valid(green)
}

/// `dir/inputs.yaml` becomes `dir/inputs_cloud.yaml`.
fn default_output(workflow_inputs: &Path) -> PathBuf {
    let mut name = workflow_inputs
        .file_stem()
        .map(OsString::from)
        .unwrap_or_default();
    name.push("_cloud");
    if let Some(extension) = workflow_inputs.extension() {
        name.push(".");
        name.push(extension);
    }
    workflow_inputs.with_file_name(name)
}

fn inner_main(opts: Opts) -> anyhow::Result<()> {
    let logger = support::new_logger(i64::from(opts.verbose) - i64::from(opts.quiet));

    let namespace = match opts.user {
        Some(user) => UploadNamespace::with_user(user)?,
        None => UploadNamespace::for_current_user()?,
    };
    let mut store = GcsBucket::new(&opts.bucket, &logger)?;
    if let Some(endpoint) = opts.storage_endpoint {
        store = store.with_endpoint(endpoint);
    }
    let output = opts
        .output
        .unwrap_or_else(|| default_output(&opts.workflow_inputs));

    let params = CloudizeParams {
        workflow_definition: &opts.workflow_definition,
        workflow_inputs: &opts.workflow_inputs,
        output: &output,
        namespace: &namespace,
        dry_run: opts.dryrun,
    };
    cloudize(&store, &params, &logger)
        .with_context(|| format!("Failed to cloudize {}", opts.workflow_inputs.display()))?;
    Ok(())
}

fn print_error(err: &anyhow::Error) {
    let colored = std::io::stderr().is_terminal();
    for (level, cause) in err.chain().enumerate() {
        let (style, prefix) = if level == 0 {
            (Style::new().fg_color(Some(AnsiColor::Red.into())), "Error")
        } else {
            (Style::new().fg_color(Some(AnsiColor::Yellow.into())), "Caused by")
        };
        if colored {
            eprintln!("{style}{prefix}:{style:#} {cause}");
        } else {
            eprintln!("{prefix}: {cause}");
        }
    }
}

fn main() {
    let opts = Opts::parse();
    if let Err(err) = inner_main(opts) {
        print_error(&err);
        std::process::exit(255);
    }
}
