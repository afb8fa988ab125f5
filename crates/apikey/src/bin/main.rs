//! Binary entry point for the apikey-check CLI.

use apikey::get_api_key;
use clap::Parser;
use http::{HeaderMap, HeaderName, HeaderValue};

/// Extract the API key from a set of request headers.
#[derive(Parser, Debug)]
#[command(name = "apikey-check", version, about)]
struct Cli {
    /// Request header as `Name: value`, e.g. `-H "Authorization: ApiKey abc"`.
    /// May be repeated.
    #[arg(short = 'H', long = "header", value_name = "NAME: VALUE", value_parser = parse_header)]
    headers: Vec<(HeaderName, HeaderValue)>,
}

fn parse_header(raw: &str) -> Result<(HeaderName, HeaderValue), String> {
    let (name, value) = raw
        .split_once(':')
        .ok_or_else(|| format!("expected `Name: value`, got `{raw}`"))?;
    let name = HeaderName::try_from(name.trim()).map_err(|e| e.to_string())?;
    let value = HeaderValue::try_from(value.trim()).map_err(|e| e.to_string())?;
    Ok((name, value))
}

fn main() {
    let cli = Cli::parse();
    if std::env::var_os("RUST_LOG").is_some() {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .init();
    }

    let mut headers = HeaderMap::new();
    for (name, value) in cli.headers {
        headers.append(name, value);
    }
    tracing::debug!(count = headers.len(), "checking headers");

    match get_api_key(&headers) {
        Ok(key) => println!("{key}"),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
