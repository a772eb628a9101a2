// SPDX-License-Identifier: MIT
//
// fern: render branded emails from the command line.
//
// Reads a JSON email request (file or stdin), renders it with fern-render
// and either prints the result or hands it to fern-send for delivery.
//
//   fern render [--format html|text|both] [--sample NAME] [FILE]
//   fern send [--token TOKEN] [FILE]
//   fern themes
//
// Logging goes to stderr so rendered output can be piped.

use std::io::{self, Read};
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use eyre::{WrapErr, bail};
use fern_render::{EmailRequest, EmailSpec, Renderer, samples};
use fern_send::Mailer;
use fern_theme::{DEFAULT_THEME, builtin_names};
use tracing_subscriber::EnvFilter;

mod config;

use config::Configuration;

/// Render branded transactional and marketing emails
#[derive(Parser)]
#[command(about, author, version)]
struct Args {
    /// Path to a TOML configuration file
    #[arg(long, short, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render a request and print it
    Render {
        /// What to print
        #[arg(long, short, value_enum, default_value_t = Format::Html)]
        format: Format,

        /// Render one of the built-in preview contents (minimal, basic, full)
        /// instead of the request's own content
        #[arg(long)]
        sample: Option<String>,

        /// JSON request; stdin when omitted
        file: Option<PathBuf>,
    },

    /// Render a request and deliver it through the Sendfern API
    Send {
        /// API token; overrides `delivery.api-token`
        #[arg(long, env = "FERN_API_TOKEN", hide_env_values = true)]
        token: Option<String>,

        /// JSON request; stdin when omitted
        file: Option<PathBuf>,
    },

    /// List the built-in themes
    Themes,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Html,
    Text,
    /// JSON object with `html` and `text`
    Both,
}

#[tokio::main]
async fn main() -> eyre::Result<()> {
    let args = Args::parse();
    let config = match &args.config {
        Some(path) => Configuration::load(path)?,
        None => Configuration::default(),
    };
    init_logging(config.log_level.as_deref())?;

    match args.command {
        Command::Render {
            format,
            sample,
            file,
        } => {
            let mut request = read_request(file.as_deref())?;
            if let Some(name) = sample {
                let Some(content) = samples::by_name(&name) else {
                    bail!("unknown sample `{name}` (expected minimal, basic or full)");
                };
                request.content = Some(content);
            }
            config.render.apply(&mut request);
            print!("{}", render(&EmailSpec::from(request), format)?);
        }
        Command::Send { token, file } => {
            let Some(token) = token.or(config.delivery.api_token) else {
                bail!("no API token: pass --token, set FERN_API_TOKEN or delivery.api-token");
            };
            let mut request = read_request(file.as_deref())?;
            config.render.apply(&mut request);

            let mailer = Mailer::new(token)?.with_endpoint(config.delivery.endpoint);
            let reply = mailer
                .try_send(request)
                .await
                .wrap_err_with(|| format!("Failed to deliver to {}", mailer.endpoint()))?;
            tracing::info!(endpoint = %mailer.endpoint(), "email handed to delivery API");
            println!("{}", serde_json::to_string_pretty(&reply)?);
        }
        Command::Themes => {
            for name in builtin_names() {
                if *name == DEFAULT_THEME {
                    println!("{name} (default)");
                } else {
                    println!("{name}");
                }
            }
        }
    }

    Ok(())
}

fn init_logging(level: Option<&str>) -> eyre::Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(level.unwrap_or("warn"))
            .wrap_err("Invalid log-level in config file")?,
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
    Ok(())
}

fn read_request(file: Option<&Path>) -> eyre::Result<EmailRequest> {
    let json = match file {
        Some(path) => std::fs::read_to_string(path)
            .wrap_err_with(|| format!("Failed to read {}", path.display()))?,
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .wrap_err("Failed to read request from stdin")?;
            buf
        }
    };
    // An empty input is an empty request, not a parse error.
    if json.trim().is_empty() {
        return Ok(EmailRequest::default());
    }
    Ok(EmailRequest::from_json(&json)?)
}

fn render(spec: &EmailSpec, format: Format) -> eyre::Result<String> {
    tracing::debug!(theme = ?spec.theme, brand = %spec.brand_color, "rendering request");
    let renderer = Renderer::new();
    Ok(match format {
        Format::Html => renderer.render_html(spec),
        Format::Text => renderer.render_text(spec) + "\n",
        Format::Both => {
            let rendered = renderer.render(spec);
            let json = serde_json::json!({ "html": rendered.html, "text": rendered.text });
            serde_json::to_string_pretty(&json)? + "\n"
        }
    })
}
