use std::{
    fs,
    io::{self, Write},
    path::PathBuf,
};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use paletto::{
    color::{Color, ColorFormat, ContrastLevel, check_contrast},
    export::{ExportTarget, export_theme},
    palette::{ColorPalette, PaletteIntensity, PaletteStrategy, create_palette},
    serialization::{WizardState, decode},
    theme::{ThemeExt, ThemeOptions, UiTheme, create_theme_from_palette},
};
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "paletto", version, about = "Palette generator and UI theme exporter")]
struct Cli {
    /// Notation used for every printed color
    #[arg(long, global = true, env = "PALETTO_COLOR_FORMAT", default_value = "hex")]
    format: ColorFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate a palette and print its colors
    Palette(PaletteArgs),
    /// Derive a theme and print its roles with a contrast audit
    Theme(ThemeArgs),
    /// Render a theme as UI library configuration
    Export {
        #[arg(long)]
        target: ExportTarget,
        /// Write to this file, or into this directory under the target's
        /// usual file name, instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
        #[command(flatten)]
        theme: ThemeArgs,
    },
    /// Print the query string that restores a theme
    Encode(ThemeArgs),
    /// Restore a theme from a query string, URL or encoded payload
    Decode {
        input: String,
        /// Export the restored theme instead of listing its roles
        #[arg(long)]
        target: Option<ExportTarget>,
    },
    /// Contrast ratio between two colors
    Contrast { foreground: Color, background: Color },
    /// List palette strategies and intensities
    Strategies,
}

#[derive(Args)]
struct PaletteArgs {
    /// Base color in any CSS notation
    #[arg(long, default_value = "#2196f3")]
    base: Color,
    #[arg(long)]
    secondary: Option<Color>,
    #[arg(long, default_value = "complementary")]
    strategy: PaletteStrategy,
    #[arg(long, default_value = "pastel")]
    intensity: PaletteIntensity,
}

impl PaletteArgs {
    fn build(&self) -> ColorPalette {
        create_palette(self.base, self.secondary, self.strategy, self.intensity)
    }
}

#[derive(Args)]
struct ThemeArgs {
    #[command(flatten)]
    palette: PaletteArgs,
    #[arg(long)]
    dark: bool,
    /// Minimum text contrast ratio, 1 to 21
    #[arg(long)]
    contrast: Option<f32>,
    /// JSON file with theme options
    #[arg(long)]
    options: Option<PathBuf>,
}

impl ThemeArgs {
    fn load_options(&self) -> Result<ThemeOptions> {
        let mut options = match &self.options {
            Some(path) => {
                debug!(path = %path.display(), "loading theme options");
                let text = fs::read_to_string(path)
                    .with_context(|| format!("reading theme options from {}", path.display()))?;
                ThemeOptions::from_string(text)
                    .with_context(|| format!("parsing theme options in {}", path.display()))?
            }
            None => ThemeOptions::default(),
        };

        if self.dark {
            options.is_dark_mode = Some(true);
        }
        if let Some(contrast) = self.contrast {
            options.contrast_level = Some(ContrastLevel::new(contrast)?);
        }

        Ok(options)
    }

    fn build(&self) -> Result<UiTheme> {
        let options = self.load_options()?;
        Ok(create_theme_from_palette(self.palette.build(), &options))
    }
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();
    run(cli, &mut io::stdout().lock())
}

fn run(cli: Cli, out: &mut impl Write) -> Result<()> {
    let format = cli.format;

    match cli.command {
        Command::Palette(args) => print_palette(out, &args.build(), format)?,

        Command::Theme(args) => print_theme(out, &args.build()?, format)?,

        Command::Export { target, out: path, theme } => {
            let config = export_theme(&theme.build()?, target, format);
            match path {
                Some(path) => {
                    let path = if path.is_dir() {
                        path.join(target.file_name())
                    } else {
                        path
                    };
                    fs::write(&path, config)
                        .with_context(|| format!("writing {}", path.display()))?;
                    info!(path = %path.display(), target = target.label(), "wrote theme config");
                }
                None => writeln!(out, "{config}")?,
            }
        }

        Command::Encode(args) => {
            let theme = args.build()?;
            let state = WizardState {
                palette: Some(theme.palette.clone()),
                theme: Some(theme),
            };
            writeln!(out, "{}", state.to_query()?)?;
        }

        Command::Decode { input, target } => {
            let theme = restore_theme(&input)?;
            match target {
                Some(target) => writeln!(out, "{}", export_theme(&theme, target, format))?,
                None => print_theme(out, &theme, format)?,
            }
        }

        Command::Contrast { foreground, background } => {
            let report = check_contrast(foreground, background);
            let ratio = report.ratio.clamp(ContrastLevel::MIN, ContrastLevel::MAX);
            let grade = ContrastLevel::new(ratio)?.grade();
            writeln!(out, "ratio  {:.2}:1", report.ratio)?;
            writeln!(out, "grade  {}", grade.label())?;
            writeln!(out, "AA     {}", pass_label(report.passes_aa))?;
            writeln!(out, "AAA    {}", pass_label(report.passes_aaa))?;
        }

        Command::Strategies => {
            writeln!(out, "Strategies:")?;
            for strategy in PaletteStrategy::ALL {
                writeln!(out, "  {:<20} {}", strategy.id(), strategy.description())?;
            }
            writeln!(out, "Intensities:")?;
            for intensity in PaletteIntensity::ALL {
                writeln!(out, "  {:<20} {}", intensity.id(), intensity.description())?;
            }
        }
    }

    Ok(())
}

/// Query parameters that carry state.
const STATE_PARAMETERS: [&str; 3] = ["theme", "data", "palette"];

/// Accepts a query string, a full URL or a bare payload.
fn restore_theme(input: &str) -> Result<UiTheme> {
    let input = input.trim();

    if looks_like_query(input) {
        return WizardState::from_query(input)?
            .into_theme()
            .context("restoring theme from query string");
    }

    decode(input).context("decoding theme payload")
}

/// A payload may end in `=` padding, so only `key=value` pairs with a known
/// key or a URL count as a query.
fn looks_like_query(input: &str) -> bool {
    if input.starts_with('{') {
        return false;
    }
    if input.contains('?') {
        return true;
    }

    input
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .any(|(key, _)| STATE_PARAMETERS.contains(&key))
}

fn pass_label(passes: bool) -> &'static str {
    if passes { "pass" } else { "fail" }
}

fn print_palette(out: &mut impl Write, palette: &ColorPalette, format: ColorFormat) -> Result<()> {
    writeln!(out, "{} / {}", palette.strategy.name(), palette.intensity.name())?;
    for entry in &palette.colors {
        let lock = if entry.locked { " (locked)" } else { "" };
        writeln!(out, "  {:<22} {}{lock}", entry.name, entry.color.format(format))?;
    }
    Ok(())
}

fn print_theme(out: &mut impl Write, theme: &UiTheme, format: ColorFormat) -> Result<()> {
    let mode = if theme.is_dark_mode { "dark" } else { "light" };
    writeln!(out, "theme {} ({mode}, contrast {})", theme.id, theme.contrast_level)?;

    for (path, color) in theme.resolved_roles() {
        writeln!(out, "  {path:<40} {}", color.format(format))?;
    }

    writeln!(out, "contrast audit:")?;
    for check in theme.contrast_audit() {
        writeln!(
            out,
            "  {:<36} on {:<40} {:>5.2}:1 {}",
            check.foreground.path(),
            check.background.path(),
            check.ratio,
            pass_label(check.passes)
        )?;
    }
    Ok(())
}
