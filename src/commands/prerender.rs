use anyhow::{Context, Result};
use std::io::Write;
use std::path::{Path, PathBuf};

use feedsplice::config::Config;
use feedsplice::models::PrerenderReport;
use feedsplice::pipeline::Prerenderer;

/// Config file picked up from the working directory when `--config` is absent
const LOCAL_CONFIG: &str = "feedsplice.toml";

/// Resolve configuration: defaults, then a TOML file, then `FEEDSPLICE_*` variables
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    let mut config = match path {
        Some(path) => Config::from_file(path)?,
        None if Path::new(LOCAL_CONFIG).exists() => Config::from_file(Path::new(LOCAL_CONFIG))?,
        None => Config::default(),
    };

    config.apply_env();
    Ok(config)
}

pub async fn prerender(
    mut config: Config,
    feed_url: Option<String>,
    page: Option<PathBuf>,
    dry_run: bool,
) -> Result<()> {
    apply_overrides(&mut config, feed_url, page);

    tracing::info!(
        feed_url = %config.feed.url,
        page = %config.page.path.display(),
        dry_run = %dry_run,
        "Starting prerender"
    );

    let prerenderer = Prerenderer::new(config).context("Invalid configuration")?;

    let outcome = if dry_run {
        prerenderer.dry_run().await.map(|(report, content)| (report, Some(content)))
    } else {
        prerenderer.run().await.map(|report| (report, None))
    };

    let (report, content) = match outcome {
        Ok(outcome) => outcome,
        Err(e) => {
            tracing::error!(category = e.category().as_str(), error = %e, "Prerender failed");
            return Err(e.into());
        }
    };

    if let Some(content) = content {
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(content.as_bytes())?;
        stdout.flush()?;
        return Ok(());
    }

    println!("{}", summary(&report));

    Ok(())
}

/// Command-line arguments win over file and environment values
fn apply_overrides(config: &mut Config, feed_url: Option<String>, page: Option<PathBuf>) {
    if let Some(url) = feed_url {
        config.feed.url = url;
    }
    if let Some(page) = page {
        config.page.path = page;
    }
}

fn summary(report: &PrerenderReport) -> String {
    format!(
        "Pre-rendered {} posts into {}",
        report.posts_rendered,
        report.page_path.display()
    )
}
