use anyhow::Result;
use console::Style;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::{self, Write};
use std::time::{Duration, Instant};
use unicode_normalization::UnicodeNormalization;
use zeroize::Zeroizing;

use crate::iplookup::{IpInfo, or_na};
use crate::password::{GenerationConfig, RandomSource, pool_size};
use crate::readme::{Section, Template};

pub const MIN_SAFE_ENTROPY: f64 = 60.0;
pub const HIGH_ENTROPY: f64 = 128.0;

pub const MIN_SAFE_PASSWORD_LENGTH: usize = 12;

pub const MAX_SECTIONS: usize = 100;
pub const MAX_SECTION_BYTES: usize = 64 * 1024;

pub struct DisplayOptions {
    pub unicode_support: bool,
    pub color_support: bool,
    pub quiet: bool,
}

impl DisplayOptions {
    pub fn detect(quiet: bool) -> Self {
        Self {
            unicode_support: detect_unicode_support(),
            color_support: detect_color_support(),
            quiet,
        }
    }
}

pub fn detect_unicode_support() -> bool {
    supports_unicode::on(supports_unicode::Stream::Stdout)
}

pub fn detect_color_support() -> bool {
    supports_color::on(supports_color::Stream::Stdout).is_some()
}

pub fn get_status_symbols(unicode_support: bool) -> (&'static str, &'static str) {
    if unicode_support { ("✓", "!") } else { ("+", "!") }
}

pub fn normalize_input(s: &str) -> String {
    s.trim().nfc().collect()
}

pub fn prompt_line(prompt: &str) -> Result<String> {
    print!("{}: ", prompt);
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    let normalized = normalize_input(&input);
    if normalized.len() > MAX_SECTION_BYTES {
        anyhow::bail!(
            "Input too long ({} bytes, maximum is {})",
            normalized.len(),
            MAX_SECTION_BYTES
        );
    }

    Ok(normalized)
}

pub fn prompt_readme(template: Template) -> Result<(String, Vec<Section>)> {
    let title = loop {
        let title = prompt_line(template.title_prompt())?;
        if !title.is_empty() {
            break title;
        }
        eprintln!("Title cannot be empty.");
    };

    let mut sections = Vec::new();

    for default in template.sections() {
        let content = prompt_line(&format!("\"{}\" content", default.title))?;
        // An empty answer keeps the template's pre-filled content.
        let content = if content.is_empty() {
            default.content
        } else {
            content
        };
        sections.push(Section::new(default.title, content));
    }

    loop {
        if sections.len() >= MAX_SECTIONS {
            anyhow::bail!("Too many sections ({} maximum allowed)", MAX_SECTIONS);
        }

        let title = prompt_line("Extra section title (leave empty to finish)")?;
        if title.is_empty() {
            break;
        }

        let content = prompt_line(&format!("\"{}\" content", title))?;
        sections.push(Section::new(title, content));
    }

    Ok((title, sections))
}

pub fn show_progress<F, T>(unicode_support: bool, message: &str, f: F) -> Result<(T, Duration)>
where
    F: FnOnce() -> Result<T>,
{
    let pb = ProgressBar::new_spinner();

    let style = ProgressStyle::default_spinner()
        .template("{spinner} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner());

    if unicode_support {
        pb.set_style(style.tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏", "⠋"]));
    } else {
        pb.set_style(style.tick_chars("-\\|/-"));
    }

    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(80));

    let start = Instant::now();
    let result = f();
    let elapsed = start.elapsed();

    pb.finish_and_clear();

    result.map(|r| (r, elapsed))
}

pub fn entropy_bits(config: &GenerationConfig) -> f64 {
    let pool = pool_size(config);
    if pool == 0 {
        return 0.0;
    }
    config.length as f64 * (pool as f64).log2()
}

fn status_style(secure: bool, color_support: bool) -> Style {
    if color_support {
        if secure {
            Style::new().green()
        } else {
            Style::new().yellow()
        }
    } else {
        Style::new()
    }
}

pub fn display_password(
    password: &Zeroizing<String>,
    config: &GenerationConfig,
    source: RandomSource,
    options: &DisplayOptions,
) {
    if options.quiet {
        println!("{}", &**password);
        return;
    }

    println!("{}\n", &**password);

    display_password_settings(config, source, options);
    display_password_stats(config, options);
}

fn enabled_classes(config: &GenerationConfig) -> String {
    let mut classes = Vec::new();
    if config.include_uppercase {
        classes.push("uppercase");
    }
    if config.include_lowercase {
        classes.push("lowercase");
    }
    if config.include_numbers {
        classes.push("numbers");
    }
    if config.include_symbols {
        classes.push("symbols");
    }

    if classes.is_empty() {
        "none".to_string()
    } else {
        classes.join(", ")
    }
}

fn display_password_settings(
    config: &GenerationConfig,
    source: RandomSource,
    options: &DisplayOptions,
) {
    let (check_ok, check_warn) = get_status_symbols(options.unicode_support);

    let classes_secure = pool_size(config) > 0;
    let source_secure = source == RandomSource::Secure;

    let classes_style = status_style(classes_secure, options.color_support);
    let source_style = status_style(source_secure, options.color_support);

    let classes_status = if classes_secure { check_ok } else { check_warn };
    let source_status = if source_secure { check_ok } else { check_warn };

    let source_label = match source {
        RandomSource::Fast => "Fast (non-cryptographic PRNG)",
        RandomSource::Secure => "Secure (operating system entropy)",
    };

    println!("Settings:");

    println!(
        "  ├─ Classes    {} {}",
        classes_style.apply_to(format!("[{}]", classes_status)),
        classes_style.apply_to(enabled_classes(config))
    );

    println!(
        "  ├─ Source     {} {}",
        source_style.apply_to(format!("[{}]", source_status)),
        source_style.apply_to(source_label)
    );

    println!(
        "  └─ Pool       {} {}",
        pool_size(config),
        if pool_size(config) == 1 { "char" } else { "chars" }
    );

    println!();
}

fn display_password_stats(config: &GenerationConfig, options: &DisplayOptions) {
    let (check_ok, check_warn) = get_status_symbols(options.unicode_support);

    let entropy = entropy_bits(config);

    let (entropy_status, entropy_secure, status_text) = if entropy >= HIGH_ENTROPY {
        (check_ok, true, "Excellent")
    } else if entropy >= MIN_SAFE_ENTROPY {
        (check_ok, true, "Strong")
    } else {
        (check_warn, false, "Weak")
    };

    let entropy_style = status_style(entropy_secure, options.color_support);

    let length_secure = config.length >= MIN_SAFE_PASSWORD_LENGTH;
    let length_style = status_style(length_secure, options.color_support);
    let length_status = if length_secure { check_ok } else { check_warn };

    println!("Stats:");

    println!(
        "  ├─ Entropy    {} {} bits ({})",
        entropy_style.apply_to(format!("[{}]", entropy_status)),
        entropy_style.apply_to(format!("{:.1}", entropy)),
        entropy_style.apply_to(status_text)
    );

    println!(
        "  └─ Length     {} {} {}",
        length_style.apply_to(format!("[{}]", length_status)),
        length_style.apply_to(config.length),
        if config.length == 1 { "char" } else { "chars" }
    );

    println!(
        "\n{} Security: {}",
        entropy_style.apply_to(format!("[{}]", entropy_status)),
        entropy_style.apply_to(status_text)
    );
}

pub fn display_css(css: &str, options: &DisplayOptions) {
    if options.quiet {
        println!("{}", css);
        return;
    }

    let style = if options.color_support {
        Style::new().cyan()
    } else {
        Style::new()
    };

    println!("Generated CSS:\n{}", style.apply_to(css));
}

pub fn display_ip_info(info: &IpInfo, elapsed: Duration, options: &DisplayOptions) {
    let coordinate = |value: &Option<f64>| match value {
        Some(v) => v.to_string(),
        None => "N/A".to_string(),
    };

    let fields = [
        ("IP", or_na(&info.ip).to_string()),
        ("City", or_na(&info.city).to_string()),
        ("Region", or_na(&info.region).to_string()),
        ("Country", or_na(&info.country_name).to_string()),
        ("ISP", or_na(&info.org).to_string()),
        ("Latitude", coordinate(&info.latitude)),
        ("Longitude", coordinate(&info.longitude)),
        ("ASN", or_na(&info.asn).to_string()),
    ];

    if options.quiet {
        for (label, value) in &fields {
            println!("{}: {}", label, value);
        }
        return;
    }

    let label_style = if options.color_support {
        Style::new().bold()
    } else {
        Style::new()
    };

    println!("{}", label_style.apply_to("IP information:"));

    for (label, value) in &fields {
        println!("  ├─ {:<10} {}", label, value);
    }

    println!("  └─ {:<10} {:.1}s", "Time", elapsed.as_secs_f64());
}
