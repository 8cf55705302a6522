use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use clip_resize::config::{ResizeConfig, ResizeMode};
use clip_resize::io::{read_y4m, write_y4m};
use clip_resize::{kernel_names, HasRecoverySuggestion, DEFAULT_KERNEL, DEFAULT_SCALE};
use log::{error, info, LevelFilter};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

/// Resize YUV4MPEG2 clips with a named resampling kernel:
/// - scale: multiply the dimensions by a factor (aligned to chroma subsampling)
/// - pixel: resize to explicit dimensions
#[derive(Parser, Debug)]
#[command(name = "clip-resize")]
#[command(about = "Resize Y4M clips by factor or to exact dimensions")]
#[command(long_about = "Resize Y4M clips by factor or to exact dimensions.
Kernels: point, bilinear, bicubic, lanczos, spline16, spline36, spline64 (any case).")]
struct Args {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Multiply width and height by a factor
    Scale {
        /// Input Y4M file
        input: PathBuf,
        /// Output Y4M file
        output: PathBuf,
        /// Scale factor, must be greater than 0
        #[arg(short, long, default_value_t = DEFAULT_SCALE, allow_negative_numbers = true)]
        factor: f64,
        /// Resampling kernel
        #[arg(short, long, default_value = DEFAULT_KERNEL)]
        kernel: String,
    },
    /// Resize to explicit dimensions; omitted dimensions are kept
    Pixel {
        /// Input Y4M file
        input: PathBuf,
        /// Output Y4M file
        output: PathBuf,
        /// Target width in pixels
        #[arg(short = 'W', long)]
        width: Option<u32>,
        /// Target height in pixels
        #[arg(short = 'H', long)]
        height: Option<u32>,
        /// Resampling kernel
        #[arg(short, long, default_value = DEFAULT_KERNEL)]
        kernel: String,
    },
    /// List the available kernels
    Kernels,
    /// Print the header of a Y4M file
    Info {
        /// Y4M file to inspect
        input: PathBuf,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose, args.quiet);

    let config = match args.command {
        Command::Kernels => {
            for name in kernel_names() {
                println!("{}", name);
            }
            return Ok(());
        }
        Command::Info { input } => return print_info(&input),
        Command::Scale {
            input,
            output,
            factor,
            kernel,
        } => ResizeConfig::new(input, output, ResizeMode::Scale { factor }, kernel),
        Command::Pixel {
            input,
            output,
            width,
            height,
            kernel,
        } => ResizeConfig::new(input, output, ResizeMode::Pixel { width, height }, kernel),
    };

    if let Err(e) = run(&config) {
        error!("{}", e);
        if let Some(hint) = e.recovery_suggestion() {
            error!("hint: {}", hint);
        }
        return Err(e.into());
    }
    Ok(())
}

fn run(config: &ResizeConfig) -> clip_resize::ResizeResult<()> {
    config.validate()?;
    let clip = read_y4m(&config.input)?;
    let resized = config.apply(&clip)?;
    info!(
        "{}x{} -> {}x{} with {}",
        clip.width(),
        clip.height(),
        resized.width(),
        resized.height(),
        config.kernel.to_lowercase()
    );
    write_y4m(&resized, &config.output)?;
    Ok(())
}

fn print_info(input: &Path) -> Result<()> {
    let clip = read_y4m(input).with_context(|| format!("inspecting {}", input.display()))?;
    let (num, den) = clip.fps();
    let format = clip
        .format()
        .map(|f| f.name())
        .unwrap_or_else(|| "variable".to_string());
    println!("format:     {}", format);
    println!("dimensions: {}x{}", clip.width(), clip.height());
    println!("frames:     {}", clip.num_frames());
    println!("fps:        {}/{}", num, den);
    Ok(())
}

fn init_logging(verbose: u8, quiet: bool) {
    let level = match (quiet, verbose) {
        (true, _) => LevelFilter::Error,
        (false, 0) => LevelFilter::Info,
        (false, 1) => LevelFilter::Debug,
        (false, _) => LevelFilter::Trace,
    };
    // A logger can only be set once per process; a second init is harmless.
    let _ = TermLogger::init(level, Config::default(), TerminalMode::Stderr, ColorChoice::Auto);
}
