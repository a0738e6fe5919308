//! Command-line front-end for the animation lab.
//!
//! Drives an [`AnimationLab`] with an in-memory form and the native tween
//! engine, then prints the rendered playback code and, on request, a few
//! sampled frames of the animation.

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::rc::Rc;

use clap::{Args, Parser, Subcommand};
use motion_lab::animation::{
    PreviewElement, TimelineEngine, TweenRunner, TweenValue,
};
use motion_lab::clipboard::LogNotifier;
use motion_lab::form::{FormField, FormFields, MemoryForm};
use motion_lab::options::{LabOptions, RestStyle};
use motion_lab::presets::PresetCatalog;
use motion_lab::{AnimationLab, LabError};

#[derive(Debug, Parser)]
#[command(name = "motion-lab", version, about)]
struct Cli {
    /// Options file (TOML).
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Preset catalog (TOML). The builtin presets are used when omitted.
    #[arg(long, global = true)]
    presets: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List the preset names.
    Presets,
    /// Play a preset and print its code.
    Preset {
        /// Preset name, e.g. "Bounce".
        name: String,
        /// Number of frames to sample over one pass.
        #[arg(long, default_value_t = 0)]
        frames: usize,
    },
    /// Fill the form, play it, and print its code.
    Animate(AnimateArgs),
    /// Print the JSON schema of the options file.
    Schema,
}

#[derive(Debug, Args)]
struct AnimateArgs {
    /// Animation type (translateX, translateY, scale, rotate, opacity,
    /// backgroundColor).
    #[arg(long = "type", default_value = "translateX")]
    animation_type: String,
    /// Start value; the type's default when omitted.
    #[arg(long, allow_hyphen_values = true)]
    start: Option<String>,
    /// End value; the type's default when omitted.
    #[arg(long, allow_hyphen_values = true)]
    end: Option<String>,
    /// Duration in milliseconds.
    #[arg(long, default_value = "1000", allow_hyphen_values = true)]
    duration: String,
    /// Delay in milliseconds.
    #[arg(long, default_value = "0", allow_hyphen_values = true)]
    delay: String,
    /// Easing name.
    #[arg(long, default_value = "easeInOutQuad")]
    easing: String,
    /// Repeat forever.
    #[arg(long = "loop")]
    looping: bool,
    /// Reverse every other pass.
    #[arg(long)]
    alternate: bool,
    /// Number of frames to sample over one pass.
    #[arg(long, default_value_t = 0)]
    frames: usize,
}

/// Preview element with no page behind it; style changes go to the log.
#[derive(Debug, Default, Clone, Copy)]
struct LoggedPreview;

impl PreviewElement for LoggedPreview {
    fn suspend_transitions(&mut self) {
        log::debug!("preview transitions suspended");
    }

    fn restore(&mut self, rest: &RestStyle) {
        log::debug!(
            "preview at rest: transform={} opacity={} background={}",
            rest.transform,
            rest.opacity,
            rest.background_color
        );
    }
}

type CliLab = AnimationLab<MemoryForm, TimelineEngine, LoggedPreview>;

fn build_lab(cli: &Cli, form: MemoryForm) -> Result<CliLab, LabError> {
    let options = match &cli.config {
        Some(path) => LabOptions::load(path)?,
        None => LabOptions::default(),
    };
    let catalog = match &cli.presets {
        Some(path) => PresetCatalog::load(path)?,
        None => PresetCatalog::builtin(),
    };
    let mut lab = AnimationLab::new(
        options,
        form,
        TimelineEngine::default(),
        LoggedPreview,
        catalog,
        Rc::new(LogNotifier),
    );
    lab.init();
    Ok(lab)
}

fn animate_form(args: &AnimateArgs) -> MemoryForm {
    MemoryForm::new()
        .with_value(FormField::AnimationType, &args.animation_type)
        .with_value(FormField::Duration, &args.duration)
        .with_value(FormField::Delay, &args.delay)
        .with_value(FormField::Easing, &args.easing)
        .with_checked(FormField::Loop, args.looping)
        .with_checked(FormField::Alternate, args.alternate)
}

/// Print `frames` evenly spaced samples from the start to the end of one
/// pass.
fn print_frames(
    out: &mut impl Write,
    runner: &TweenRunner,
    frames: usize,
) -> io::Result<()> {
    if frames == 0 {
        return Ok(());
    }
    let total = runner.total_duration();
    let last = frames.saturating_sub(1).max(1);
    writeln!(out)?;
    for i in 0..frames {
        let elapsed = total.mul_f64(i as f64 / last as f64);
        let value = runner
            .value_at(elapsed)
            .as_ref()
            .map_or_else(|| "-".to_owned(), TweenValue::to_css);
        writeln!(out, "{:>7} ms  {value}", elapsed.as_millis())?;
    }
    Ok(())
}

fn print_playback(
    out: &mut impl Write,
    lab: &CliLab,
    frames: usize,
) -> Result<(), LabError> {
    writeln!(out, "{}", lab.code())?;
    if let Some(runner) = lab.controller().current() {
        print_frames(out, runner, frames)?;
    }
    Ok(())
}

fn run(cli: &Cli) -> Result<(), LabError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    match &cli.command {
        Command::Presets => {
            let lab = build_lab(cli, MemoryForm::new())?;
            for preset in lab.catalog().list() {
                writeln!(out, "{}", preset.name)?;
            }
        }
        Command::Preset { name, frames } => {
            let mut lab = build_lab(cli, MemoryForm::new())?;
            let _ = lab.apply_preset(name)?;
            print_playback(&mut out, &lab, *frames)?;
        }
        Command::Animate(args) => {
            let mut lab = build_lab(cli, animate_form(args))?;
            if let Some(start) = &args.start {
                lab.form_mut().set_value(FormField::StartValue, start);
            }
            if let Some(end) = &args.end {
                lab.form_mut().set_value(FormField::EndValue, end);
            }
            let _ = lab.animate();
            print_playback(&mut out, &lab, args.frames)?;
        }
        Command::Schema => {
            let schema =
                serde_json::to_string_pretty(&LabOptions::json_schema())
                    .map_err(|e| LabError::OptionsParse(e.to_string()))?;
            writeln!(out, "{schema}")?;
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
