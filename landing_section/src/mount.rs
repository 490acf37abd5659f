//! Mounted landing section with a live word cycler.

use crate::config::LandingConfig;
use crate::cycler::{CyclerHandle, Typewriter, WordCycler};

/// A landing section whose headline cycler is running.
///
/// Mounting arms the cycler timer; unmounting (via [`MountedSection::unmount`]
/// or drop) releases it. [`MountedSection::render`] renders the section with
/// whatever text the cycler shows at that instant.
#[derive(Debug)]
pub struct MountedSection {
    config: LandingConfig,
    cycler: CyclerHandle,
}

impl MountedSection {
    /// Mount with the default [`Typewriter`] strategy.
    ///
    /// # Panics
    ///
    /// Panics when called outside a tokio runtime.
    pub fn mount(config: LandingConfig) -> Self {
        let cycler = Typewriter::new(config.words.clone(), config.timing);
        Self::mount_with(config, cycler)
    }

    /// Mount with any [`WordCycler`] strategy.
    ///
    /// # Panics
    ///
    /// Panics when called outside a tokio runtime.
    pub fn mount_with<C: WordCycler>(config: LandingConfig, cycler: C) -> Self {
        Self {
            config,
            cycler: CyclerHandle::start(cycler),
        }
    }

    /// Config the section was mounted with.
    pub fn config(&self) -> &LandingConfig {
        &self.config
    }

    /// Handle of the running cycler.
    pub fn cycler(&self) -> &CyclerHandle {
        &self.cycler
    }

    /// Render the section fragment with the cycler's current text.
    pub fn render(&self) -> String {
        crate::render_section_with_text(&self.config, self.cycler.text())
    }

    /// Release the cycler timer and wait for it to stop.
    pub async fn unmount(self) {
        self.cycler.stop().await;
    }
}
