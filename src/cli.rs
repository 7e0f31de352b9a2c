use crate::color::{BlendMode, ColorFormat, Gradient, NAMED_COLORS, ParsedColor};
use crate::config::Config;
use crate::log_debug;
use crate::scale::{Measure, Ratio, scale_range};
use crate::{fonts, swatch, tokens, ui};
use anyhow::{Context, Result, anyhow};
use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand, ValueEnum, crate_version};
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};

/// CLI structure defining the available commands and global arguments
#[derive(Parser, Debug)]
#[command(
    author,
    version = crate_version!(),
    about = "swatchkit: design-token color utilities",
    long_about = "swatchkit converts, spins and blends colors, builds modular scales and font stacks, and compiles TOML token files to JSON or CSS.",
    disable_version_flag = true,
    styles = get_styles(),
)]
pub struct Cli {
    /// Subcommands available for the CLI
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Log debug messages to stderr
    #[arg(
        short = 'l',
        long = "log",
        global = true,
        help = "Log debug messages to stderr"
    )]
    pub log: bool,

    /// Specify a log file path
    #[arg(
        long = "log-file",
        global = true,
        help = "Write debug messages to this file instead of stderr"
    )]
    pub log_file: Option<PathBuf>,

    /// Print bare values only
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        help = "Print bare values without swatches or decoration"
    )]
    pub quiet: bool,

    /// Display the version
    #[arg(
        short = 'v',
        long = "version",
        global = true,
        help = "Display the version"
    )]
    pub version: bool,
}

/// Output formats for `build`
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    #[default]
    Json,
    Css,
}

/// Enumeration of available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Re-emit a color in another format
    #[command(
        about = "Convert a color between hex, rgb and hsl",
        long_about = "Convert a color between hex, rgb and hsl. Accepts #rgb, #rrggbb, rgb(...), hsl(...) and CSS color names."
    )]
    Convert {
        /// Color to convert
        color: String,

        /// Target format (defaults to the configured format, then hex)
        #[arg(short, long, value_parser = ColorFormat::parse)]
        to: Option<ColorFormat>,
    },

    /// Rotate a color's hue
    #[command(about = "Rotate a color's hue around the color wheel")]
    Spin {
        /// Color to rotate
        color: String,

        /// Degrees to rotate by (defaults to the configured rotation, then 180)
        #[arg(short, long, allow_negative_numbers = true)]
        degrees: Option<f64>,

        /// Output format (defaults to the configured format, then the input's)
        #[arg(short, long, value_parser = ColorFormat::parse)]
        to: Option<ColorFormat>,
    },

    /// Move a color toward another
    #[command(about = "Blend a color toward a target color")]
    Blend {
        /// Color to start from
        color: String,

        /// Color to blend toward
        target: String,

        /// Percentage of the way to move, 0-100
        #[arg(short, long)]
        amount: Option<f64>,

        /// Blend mode: linear or logarithmic
        #[arg(short, long, value_parser = BlendMode::parse)]
        mode: Option<BlendMode>,

        /// Output format (defaults to the configured format, then the input's)
        #[arg(short, long, value_parser = ColorFormat::parse)]
        to: Option<ColorFormat>,
    },

    /// Sample evenly spaced colors between stops
    #[command(about = "Sample a gradient between two or more colors")]
    Gradient {
        /// Colors to pass through, first to last
        #[arg(required = true, num_args = 1..)]
        stops: Vec<String>,

        /// Number of colors to emit
        #[arg(short = 'n', long, default_value_t = 5)]
        steps: usize,

        /// Blend mode: linear or logarithmic
        #[arg(short, long, value_parser = BlendMode::parse)]
        mode: Option<BlendMode>,

        /// Output format (defaults to the configured format, then the first stop's)
        #[arg(short, long, value_parser = ColorFormat::parse)]
        to: Option<ColorFormat>,
    },

    /// Build a modular scale
    #[command(
        about = "Build a modular type or spacing scale",
        long_about = "Build a modular scale: base x ratio^step for each step. Ratios may be named (major-third, golden, ...) or numeric."
    )]
    Scale {
        /// Base measure, like 16px or 1rem
        base: String,

        /// Ratio name or number
        #[arg(short, long, default_value = "major-third")]
        ratio: String,

        /// Steps to emit, comma separated
        #[arg(
            short,
            long,
            value_delimiter = ',',
            allow_negative_numbers = true,
            default_value = "-2,-1,0,1,2,3,4,5"
        )]
        steps: Vec<i32>,
    },

    /// Print system font stacks
    #[command(about = "Print a system font stack, or list them all")]
    Fonts {
        /// Stack name: system-ui, sans-serif, serif or monospace
        name: Option<String>,
    },

    /// List CSS color names
    #[command(about = "List the CSS named colors")]
    Names {
        /// Only show names containing this text
        filter: Option<String>,
    },

    /// Compile a token file
    #[command(
        about = "Compile a TOML token file to JSON or CSS",
        long_about = "Resolve a TOML token file (palette, derived colors, gradients, scale and fonts) and export it as JSON or CSS custom properties."
    )]
    Build {
        /// Path to the token file
        file: PathBuf,

        /// Export format
        #[arg(short, long, value_enum, default_value_t = ExportFormat::Json)]
        format: ExportFormat,

        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show or change default settings
    #[command(
        about = "Show or change swatchkit defaults",
        long_about = "Show or change swatchkit defaults. Personal settings live in the user config directory; --project writes .swatchkit.toml in the current directory instead."
    )]
    Config {
        /// Default output format
        #[arg(long, value_parser = ColorFormat::parse)]
        format: Option<ColorFormat>,

        /// Default blend mode
        #[arg(long, value_parser = BlendMode::parse)]
        mode: Option<BlendMode>,

        /// Default blend amount, 0-100
        #[arg(long)]
        amount: Option<f64>,

        /// Default hue rotation in degrees
        #[arg(long, allow_negative_numbers = true)]
        rotation: Option<f64>,

        /// Write to the project file in the current directory
        #[arg(long)]
        project: bool,
    },
}

/// Define custom styles for Clap
fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Magenta.on_default().bold())
        .usage(AnsiColor::Cyan.on_default().bold())
        .literal(AnsiColor::Green.on_default().bold())
        .placeholder(AnsiColor::Yellow.on_default())
        .valid(AnsiColor::Blue.on_default().bold())
        .invalid(AnsiColor::Red.on_default().bold())
        .error(AnsiColor::Red.on_default().bold())
}

/// Parse the command-line arguments
pub fn parse_args() -> Cli {
    Cli::parse()
}

/// Main function to parse arguments and handle the command
pub fn main() -> Result<()> {
    let cli = parse_args();

    if cli.quiet {
        ui::set_quiet_mode(true);
    }

    if cli.version {
        ui::print_version(crate_version!());
        return Ok(());
    }

    configure_logging(cli.log, cli.log_file.as_deref())?;

    if let Some(command) = cli.command {
        handle_command(command)
    } else {
        // If no subcommand is provided, print the help
        let _ = Cli::parse_from(["swatchkit", "--help"]);
        Ok(())
    }
}

fn configure_logging(log: bool, log_file: Option<&Path>) -> Result<()> {
    if let Some(path) = log_file {
        crate::logger::set_log_file(path)
            .with_context(|| format!("Failed to open log file {}", path.display()))?;
        crate::logger::enable_logging();
    } else if log {
        crate::logger::set_log_to_stderr(true);
        crate::logger::enable_logging();
    } else {
        crate::logger::disable_logging();
    }
    Ok(())
}

/// Handle the command based on parsed arguments
pub fn handle_command(command: Commands) -> Result<()> {
    match command {
        Commands::Convert { color, to } => {
            let config = Config::load()?;
            handle_convert(&color, preferred_format(to, &config).unwrap_or_default())
        }
        Commands::Spin { color, degrees, to } => {
            let config = Config::load()?;
            handle_spin(
                &color,
                degrees.unwrap_or(config.rotation()),
                preferred_format(to, &config),
            )
        }
        Commands::Blend {
            color,
            target,
            amount,
            mode,
            to,
        } => {
            let config = Config::load()?;
            handle_blend(
                &color,
                &target,
                amount.unwrap_or(config.blend_amount()),
                mode.unwrap_or(config.blend_mode()),
                preferred_format(to, &config),
            )
        }
        Commands::Gradient {
            stops,
            steps,
            mode,
            to,
        } => {
            let config = Config::load()?;
            handle_gradient(
                &stops,
                steps,
                mode.unwrap_or(config.blend_mode()),
                preferred_format(to, &config),
            )
        }
        Commands::Scale {
            base,
            ratio,
            steps,
        } => handle_scale(&base, &ratio, &steps),
        Commands::Fonts { name } => handle_fonts(name.as_deref()),
        Commands::Names { filter } => handle_names(filter.as_deref()),
        Commands::Build {
            file,
            format,
            output,
        } => handle_build(&file, format, output.as_deref()),
        Commands::Config {
            format,
            mode,
            amount,
            rotation,
            project,
        } => handle_config(format, mode, amount, rotation, project),
    }
}

/// `--to` wins over the configured default format.
fn preferred_format(to: Option<ColorFormat>, config: &Config) -> Option<ColorFormat> {
    to.or(config.format())
}

fn parse_color(input: &str) -> Result<ParsedColor> {
    ParsedColor::parse(input).with_context(|| format!("Could not read color '{input}'"))
}

fn handle_convert(color: &str, to: ColorFormat) -> Result<()> {
    let parsed = parse_color(color)?;
    log_debug!("Converting {} ({}) to {}", color, parsed.format(), to);
    ui::print_color(&parsed.with_format(to));
    Ok(())
}

fn handle_spin(color: &str, degrees: f64, to: Option<ColorFormat>) -> Result<()> {
    let parsed = parse_color(color)?;
    let spun = parsed.spin(degrees);
    log_debug!("Spun {} by {} degrees", color, degrees);
    ui::print_color(&spun.with_format(to.unwrap_or(parsed.format())));
    Ok(())
}

fn handle_blend(
    color: &str,
    target: &str,
    amount: f64,
    mode: BlendMode,
    to: Option<ColorFormat>,
) -> Result<()> {
    let source = parse_color(color)?;
    let target = parse_color(target)?;
    let blended = source.blend_rounded(&target, amount, mode)?;
    log_debug!("Blended {}% toward target using {} mode", amount, mode);
    ui::print_color(&blended.with_format(to.unwrap_or(source.format())));
    Ok(())
}

fn handle_gradient(
    stops: &[String],
    steps: usize,
    mode: BlendMode,
    to: Option<ColorFormat>,
) -> Result<()> {
    let stops = stops
        .iter()
        .map(String::as_str)
        .map(parse_color)
        .collect::<Result<Vec<_>>>()?;
    let gradient =
        Gradient::new(stops, mode).ok_or_else(|| anyhow!("A gradient needs at least one stop"))?;

    let colors: Vec<ParsedColor> = gradient
        .generate(steps)
        .into_iter()
        .map(|color| to.map_or(color, |format| color.with_format(format)))
        .collect();

    if !ui::is_quiet_mode() {
        println!("{}", swatch::swatch_strip(&colors));
    }
    for color in &colors {
        ui::print_result(&color.to_string());
    }
    Ok(())
}

fn handle_scale(base: &str, ratio: &str, steps: &[i32]) -> Result<()> {
    let base = Measure::parse(base)?;
    let ratio = Ratio::parse(ratio)?;
    log_debug!("Building scale from {} with ratio {}", base, ratio.value());

    for (step, measure) in steps.iter().zip(scale_range(&base, ratio, steps)) {
        if ui::is_quiet_mode() {
            ui::print_result(&format!("{step} {measure}"));
        } else {
            ui::print_result(&format!("{:>4}  {}", step.to_string().dimmed(), measure));
        }
    }
    Ok(())
}

fn handle_fonts(name: Option<&str>) -> Result<()> {
    match name {
        Some(name) => ui::print_result(&fonts::font_stack(name)?),
        None => {
            for (name, _) in fonts::STACKS {
                let stack = fonts::font_stack(name)?;
                if ui::is_quiet_mode() {
                    ui::print_result(&format!("{name}: {stack}"));
                } else {
                    ui::print_result(&format!("{}: {}", name.bold(), stack));
                }
            }
        }
    }
    Ok(())
}

fn handle_names(filter: Option<&str>) -> Result<()> {
    let filter = filter.map(str::to_ascii_lowercase);
    for (name, hex) in NAMED_COLORS {
        if filter.as_deref().is_some_and(|f| !name.contains(f)) {
            continue;
        }
        ui::print_labelled_color(name, &parse_color(hex)?);
    }
    Ok(())
}

fn handle_build(file: &Path, format: ExportFormat, output: Option<&Path>) -> Result<()> {
    let _span = tracing::debug_span!("build", file = %file.display()).entered();

    let set = tokens::load_from_file(file)?;
    log_debug!(
        "Loaded token set '{}' with {} colors",
        set.meta.name,
        set.colors.len()
    );

    let rendered = match format {
        ExportFormat::Json => set.to_json()?,
        ExportFormat::Css => set.to_css(),
    };

    match output {
        Some(path) => {
            fs::write(path, &rendered)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            ui::print_success(&format!("Wrote {}", path.display()));
        }
        None => print!("{rendered}"),
    }
    Ok(())
}

fn handle_config(
    format: Option<ColorFormat>,
    mode: Option<BlendMode>,
    amount: Option<f64>,
    rotation: Option<f64>,
    project: bool,
) -> Result<()> {
    let changed = format.is_some() || mode.is_some() || amount.is_some() || rotation.is_some();

    if project {
        let dir = std::env::current_dir().context("Unable to determine current directory")?;
        let mut config = Config::load_project_config(&dir)?;
        if changed {
            config.update(format, mode, amount, rotation)?;
            config.save_as_project_config(&dir)?;
            ui::print_success("Project configuration saved");
        }
        print_config(&config);
    } else {
        let mut config = Config::load()?;
        if changed {
            config.update(format, mode, amount, rotation)?;
            config.save()?;
            ui::print_success("Configuration saved");
        }
        print_config(&config);
    }
    Ok(())
}

fn print_config(config: &Config) {
    let format = config
        .format()
        .map_or_else(|| "(input format)".to_string(), |f| f.to_string());
    ui::print_result(&format!("format       {format}"));
    ui::print_result(&format!("blend_mode   {}", config.blend_mode()));
    ui::print_result(&format!("blend_amount {}", config.blend_amount()));
    ui::print_result(&format!("rotation     {}", config.rotation()));
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_spin_negative_degrees() {
        let cli = Cli::try_parse_from(["swatchkit", "spin", "#3366ff", "-d", "-30"]).unwrap();
        match cli.command {
            Some(Commands::Spin { degrees, .. }) => assert_eq!(degrees, Some(-30.0)),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_blend_options() {
        let cli = Cli::try_parse_from([
            "swatchkit",
            "blend",
            "red",
            "white",
            "--amount",
            "25",
            "--mode",
            "Logarithmic",
            "--to",
            "hsl",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Blend {
                amount, mode, to, ..
            }) => {
                assert_eq!(amount, Some(25.0));
                assert_eq!(mode, Some(BlendMode::Logarithmic));
                assert_eq!(to, Some(ColorFormat::Hsl));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_preferred_format_falls_back_to_config() {
        let mut config = Config::default();
        assert_eq!(preferred_format(None, &config), None);

        config.format = Some(ColorFormat::Hsl);
        assert_eq!(preferred_format(None, &config), Some(ColorFormat::Hsl));
        assert_eq!(
            preferred_format(Some(ColorFormat::Rgb), &config),
            Some(ColorFormat::Rgb)
        );
    }

    #[test]
    fn test_rejects_unknown_format() {
        assert!(Cli::try_parse_from(["swatchkit", "convert", "red", "--to", "cmyk"]).is_err());
    }

    #[test]
    fn test_scale_steps_default_and_list() {
        let cli = Cli::try_parse_from(["swatchkit", "scale", "16px"]).unwrap();
        match cli.command {
            Some(Commands::Scale { steps, ratio, .. }) => {
                assert_eq!(steps, (-2..=5).collect::<Vec<_>>());
                assert_eq!(ratio, "major-third");
            }
            other => panic!("unexpected command: {other:?}"),
        }

        let cli = Cli::try_parse_from(["swatchkit", "scale", "1rem", "--steps", "-1,0,3"]).unwrap();
        match cli.command {
            Some(Commands::Scale { steps, .. }) => assert_eq!(steps, [-1, 0, 3]),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_build_writes_output_file() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("tokens.toml");
        let output = dir.path().join("tokens.css");
        fs::write(
            &input,
            "[meta]\nname = \"Cli\"\n\n[colors]\naccent = { spin = \"#3366ff\" }\n",
        )
        .unwrap();

        handle_build(&input, ExportFormat::Css, Some(&output)).unwrap();

        let css = fs::read_to_string(&output).unwrap();
        assert!(css.contains("--color-accent: #ffcc33;"));
    }

    #[test]
    fn test_build_reports_missing_file() {
        let err = handle_build(Path::new("/nonexistent/tokens.toml"), ExportFormat::Json, None)
            .unwrap_err();
        assert!(err.to_string().contains("tokens.toml"));
    }
}
