//! Terminal preview of the animated headline.

use std::time::Duration;

use anyhow::{Context, Result};
use console::{Term, style};
use tracing::{debug, info};

use landing_section::MountedSection;
use landing_section::config::LandingConfig;
use landing_section::cycler::Rotator;

/// Mount the section and redraw the headline on every cycler update.
///
/// Stops on Ctrl-C, when `limit` elapses, or straight away when the cycler
/// has nothing to animate. The section is always unmounted before returning.
pub async fn run(config: LandingConfig, limit: Option<Duration>, rotate: bool) -> Result<()> {
    info!(words = config.words.len(), rotate, "preview started");
    let section = if rotate {
        let rotator = Rotator::new(config.words.clone(), config.timing.pause());
        MountedSection::mount_with(config, rotator)
    } else {
        MountedSection::mount(config)
    };

    let term = Term::stdout();
    let live = term.is_term();
    let mut rx = section.cycler().subscribe();

    let result = async {
        draw(&term, live, &rx.borrow_and_update())?;

        let deadline = async {
            match limit {
                Some(limit) => tokio::time::sleep(limit).await,
                None => std::future::pending().await,
            }
        };
        tokio::pin!(deadline);

        loop {
            tokio::select! {
                changed = rx.changed() => {
                    if changed.is_err() {
                        debug!("cycler has nothing to animate");
                        break;
                    }
                    let text = rx.borrow_and_update().clone();
                    draw(&term, live, &text)?;
                }
                _ = &mut deadline => break,
                _ = tokio::signal::ctrl_c() => break,
            }
        }
        Ok::<(), anyhow::Error>(())
    }
    .await;

    section.unmount().await;
    if live {
        term.write_line("").context("Failed to write to terminal")?;
    }
    result
}

/// Redraw the headline in place on a terminal, one line per frame otherwise.
fn draw(term: &Term, live: bool, text: &str) -> Result<()> {
    let line = format!(
        "Hands-on tutorials to {} and {} {}{}",
        style("learn").magenta().bold(),
        style("teach").magenta().bold(),
        text,
        style("|").magenta(),
    );
    if live {
        term.clear_line()
            .and_then(|()| term.write_str(&line))
            .context("Failed to write to terminal")
    } else {
        term.write_line(&line).context("Failed to write preview frame")
    }
}
