//! robo - print the forms on a page

use anyhow::{Context, Result, bail};
use robo_browser::{BrowserConfig, RoboBrowser};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut url = None;
    let mut show_hidden = false;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--show-hidden" => show_hidden = true,
            _ if url.is_none() => url = Some(arg),
            _ => bail!("unexpected argument {:?}", arg),
        }
    }
    let Some(url) = url else {
        bail!("usage: robo <url> [--show-hidden]");
    };

    let mut browser = RoboBrowser::new(BrowserConfig::default())?;
    browser
        .open(&url)
        .with_context(|| format!("failed to open {}", url))?;

    let forms = browser.get_forms()?;
    if forms.is_empty() {
        println!("No forms on {}", browser.url()?);
    }
    for form in &forms {
        println!("{}", form.summary(show_hidden));
    }
    Ok(())
}
