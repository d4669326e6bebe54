use anyhow::{Context, Result, bail};
use scrapbox_preview_config::PreviewConfig;
use scrapbox_preview_engine::models::{Anchor, ContentKey};
use scrapbox_preview_engine::preview::{SurfaceContent, Timing};
use scrapbox_preview_engine::render::{render_content_html, render_content_text};
use scrapbox_preview_engine::{ContentFetcher, HttpTransport};
use std::{env, process, sync::Arc};

#[derive(Debug, PartialEq, Eq)]
struct Args {
    key: ContentKey,
    html: bool,
}

fn parse_args(args: &[String]) -> Result<Args> {
    let html = args.iter().any(|a| a == "--html");
    let positional: Vec<&str> = args
        .iter()
        .map(String::as_str)
        .filter(|a| *a != "--html")
        .collect();

    let key = match positional.as_slice() {
        [path] if path.starts_with('/') => Anchor::from_href(*path)
            .content_key()
            .with_context(|| format!("{path} does not name a page"))?,
        [project, title] => ContentKey::new(*project, title),
        _ => bail!("expected <project> <title> or /<project>/<title>"),
    };
    Ok(Args { key, html })
}

fn timing_from_config(config: &PreviewConfig) -> Timing {
    Timing {
        hover_delay: config.hover_delay(),
        hide_delay: config.hide_delay(),
        cache_duration: config.cache_duration(),
        max_nest_level: config.max_nest_level,
    }
}

fn usage(program_name: &str) {
    eprintln!("Usage: {program_name} [--html] <project> <title>");
    eprintln!("       {program_name} [--html] /<project>/<title>");
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let argv: Vec<String> = env::args().collect();
    let program_name = argv
        .first()
        .cloned()
        .unwrap_or_else(|| "scrapbox-preview-cli".to_string());
    let args = match parse_args(argv.get(1..).unwrap_or_default()) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Error: {e}");
            usage(&program_name);
            process::exit(1);
        }
    };

    let config_path = PreviewConfig::config_path();
    let config = match PreviewConfig::load()? {
        Some(config) => {
            log::info!("Loaded config from {}", config_path.display());
            config
        }
        None => {
            log::info!("No config at {}, using defaults", config_path.display());
            PreviewConfig::default()
        }
    };

    let timing = timing_from_config(&config);
    let transport = HttpTransport::new(&config.api_base_url)?;
    let fetcher = ContentFetcher::new(Arc::new(transport), timing.cache_duration);

    log::info!("Fetching {}", args.key);
    let content = match fetcher.resolve_key(&args.key).await {
        Ok(tree) => SurfaceContent::from_tree(tree),
        Err(e) => {
            log::error!("Preview of {} failed: {e}", args.key);
            SurfaceContent::failed(e)
        }
    };

    if args.html {
        println!("{}", render_content_html(&content));
    } else {
        print!("{}", render_content_text(&content));
    }

    if let SurfaceContent::Page(tree) = &content {
        let links = tree.internal_links();
        if !links.is_empty() {
            println!();
            println!("Nested previews (up to level {}):", timing.max_nest_level);
            for link in links {
                println!("  {} -> {}", link.display_text, link.href);
            }
        }
    }

    Ok(())
}
