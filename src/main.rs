extern crate cost_saver;

use anyhow::anyhow;
use clap::Parser;
use cost_saver::output::FileOutput;
use cost_saver::{run_project, ProjectFlags};
use std::ffi::OsStr;
use std::fs;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use tracing::{debug, info, Level};
use tracing_subscriber::fmt::format::FmtSpan;

#[derive(Parser, Default, Debug)]
#[clap(author, version, about, long_about = None)]
struct CostSaverArgs {
    input_file: String,
    #[clap(
        long,
        default_value_t = false,
        help = "Only validate the home profile and bill figures"
    )]
    validate_only: bool,
    #[clap(
        long,
        default_value_t = false,
        help = "Also output the heat loss breakdown for each building element"
    )]
    detailed_output: bool,
    #[clap(long, default_value_t = false, help = "Whether to log out spans")]
    log_spans: bool,
    #[clap(long, short, default_value_t = false, help = "Log at trace level")]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = CostSaverArgs::parse();

    // set up basic tracing
    let tracing_subscriber = {
        let level = if args.verbose {
            Level::TRACE
        } else {
            Level::INFO
        };
        let mut builder = tracing_subscriber::fmt::fmt().with_max_level(level);

        if args.log_spans {
            builder = builder.with_span_events(FmtSpan::CLOSE);
        }

        builder.finish()
    };
    tracing::subscriber::set_global_default(tracing_subscriber)?;

    let input_file = args.input_file.as_str();
    let input_file_ext = Path::new(input_file).extension().and_then(OsStr::to_str);
    let input_file_stem = match input_file_ext {
        Some(ext) => &input_file[..(input_file.len() - ext.len() - 1)],
        None => input_file,
    };
    let input_file_stem = PathBuf::from(input_file_stem);
    let input_file_name = input_file_stem
        .file_name()
        .and_then(OsStr::to_str)
        .ok_or_else(|| anyhow!("Could not determine a file name from {input_file}"))?;

    let mut output_path = PathBuf::new();
    output_path.push(format!("{}__results", input_file_stem.display()));
    fs::create_dir_all(&output_path)?;
    let file_output = FileOutput::new(output_path, format!("{input_file_name}__{{}}.{{}}"));

    let mut flags = ProjectFlags::empty();
    if args.validate_only {
        flags.insert(ProjectFlags::VALIDATE_ONLY);
    }
    if args.detailed_output {
        flags.insert(ProjectFlags::DETAILED_OUTPUT);
    }
    debug!("Running {input_file} with flags {flags:?}");

    let results = run_project(
        BufReader::new(File::open(Path::new(input_file))?),
        &file_output,
        &flags,
    )?;

    for (section, validation) in [
        ("home profile", &results.home_validation),
        ("bill", &results.waste_validation),
    ] {
        if let Some(validation) = validation {
            if validation.valid {
                info!("{section} is valid");
            } else {
                for error in &validation.errors {
                    info!("{section}: {error}");
                }
            }
        }
    }

    Ok(())
}
