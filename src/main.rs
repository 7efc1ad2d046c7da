mod boxshadow;
mod iplookup;
mod password;
mod qr;
mod readme;
mod ui;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::fs;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "oslo",
    version,
    author,
    about = "Command-line toolbox: generators, formatters and lookups"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    #[arg(short, long, global = true, help = "Only print the raw result")]
    quiet: bool,
}

#[derive(Subcommand)]
enum Command {
    #[command(about = "Generate a random password")]
    Password {
        #[arg(
            short,
            long,
            default_value_t = 14,
            help = "Password length, clamped to 4-128"
        )]
        length: usize,

        #[arg(long, help = "Leave out uppercase letters")]
        no_uppercase: bool,

        #[arg(long, help = "Leave out lowercase letters")]
        no_lowercase: bool,

        #[arg(long, help = "Leave out numbers")]
        no_numbers: bool,

        #[arg(long, help = "Leave out special characters")]
        no_symbols: bool,

        #[arg(short, long, value_enum, default_value = "fast")]
        source: Source,
    },

    #[command(about = "Format a CSS box-shadow declaration")]
    BoxShadow {
        #[arg(short = 'x', long, default_value_t = 10, allow_hyphen_values = true, value_parser = clap::value_parser!(i32).range(-50..=50))]
        offset_x: i32,

        #[arg(short = 'y', long, default_value_t = 10, allow_hyphen_values = true, value_parser = clap::value_parser!(i32).range(-50..=50))]
        offset_y: i32,

        #[arg(short, long, default_value_t = 5, value_parser = clap::value_parser!(u32).range(0..=50))]
        blur_radius: u32,

        #[arg(short, long, default_value_t = 2, value_parser = clap::value_parser!(u32).range(0..=50))]
        spread_radius: u32,

        #[arg(short, long, default_value = "#fb923c", help = "Shadow color as #rrggbb")]
        color: String,

        #[arg(short, long, default_value_t = 100, value_parser = clap::value_parser!(u8).range(0..=100), help = "Opacity in percent")]
        opacity: u8,
    },

    #[command(about = "Scaffold a README.md interactively")]
    Readme {
        #[arg(short, long, value_enum, default_value = "project")]
        template: TemplateKind,

        #[arg(short, long, help = "Write to a file instead of stdout")]
        output: Option<PathBuf>,
    },

    #[command(about = "Export a QR code as SVG")]
    QrCode {
        #[arg(help = "Link or text to encode")]
        text: String,

        #[arg(short, long, default_value = "#000000", help = "Foreground color")]
        color: String,

        #[arg(short, long, default_value = "qrcode.svg")]
        output: PathBuf,
    },

    #[command(about = "Look up information about an IP address")]
    IpLookup {
        #[arg(help = "IPv4 or IPv6 address")]
        ip: String,
    },
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
enum Source {
    Fast,
    Secure,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
enum TemplateKind {
    Project,
    Profile,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let options = ui::DisplayOptions::detect(cli.quiet);

    match cli.command {
        Command::Password {
            length,
            no_uppercase,
            no_lowercase,
            no_numbers,
            no_symbols,
            source,
        } => {
            let config = password::GenerationConfig {
                length: length.clamp(password::MIN_LENGTH, password::MAX_LENGTH),
                include_uppercase: !no_uppercase,
                include_lowercase: !no_lowercase,
                include_numbers: !no_numbers,
                include_symbols: !no_symbols,
            };

            let source = match source {
                Source::Fast => password::RandomSource::Fast,
                Source::Secure => password::RandomSource::Secure,
            };

            if password::pool_size(&config) == 0 {
                eprintln!("Warning: every character class is disabled, output is empty.");
            }

            let generated = password::generate(&config, source);
            ui::display_password(&generated, &config, source, &options);
        }

        Command::BoxShadow {
            offset_x,
            offset_y,
            blur_radius,
            spread_radius,
            color,
            opacity,
        } => {
            let shadow = boxshadow::BoxShadow {
                offset_x,
                offset_y,
                blur_radius,
                spread_radius,
                color,
                opacity,
            };

            let css = shadow.css()?;
            ui::display_css(&css, &options);
        }

        Command::Readme { template, output } => {
            let template = match template {
                TemplateKind::Project => readme::Template::Project,
                TemplateKind::Profile => readme::Template::Profile,
            };

            let (title, sections) = ui::prompt_readme(template)?;
            let document = readme::assemble(&title, &sections);

            match output {
                Some(path) => {
                    fs::write(&path, &document)
                        .with_context(|| format!("Failed to write {}", path.display()))?;
                    if !options.quiet {
                        println!("Wrote {}", path.display());
                    }
                }
                None => print!("{}", document),
            }
        }

        Command::QrCode {
            text,
            color,
            output,
        } => {
            qr::write_svg(&text, &color, &output)?;
            if !options.quiet {
                println!("Wrote {}", output.display());
            }
        }

        Command::IpLookup { ip } => {
            let address = iplookup::parse_ip(&ip)?;

            let (info, elapsed) = if options.quiet {
                let start = std::time::Instant::now();
                let info = iplookup::lookup(address)?;
                (info, start.elapsed())
            } else {
                ui::show_progress(options.unicode_support, "Looking up address...", || {
                    iplookup::lookup(address)
                })?
            };

            ui::display_ip_info(&info, elapsed, &options);
        }
    }

    Ok(())
}
