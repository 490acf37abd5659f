//! The landing section - logo, animated headline, subtitle, call to action
//! and illustration in a two-column grid.

use leptos::prelude::*;

use super::WordCyclerView;
use crate::config::LandingConfig;

/// Landing section markup.
///
/// Pure: the output depends only on `config` and `cycler_text`.
#[component]
pub fn LandingSection(
    config: LandingConfig,
    /// Current cycler text (empty before the animation starts)
    #[prop(optional, into)]
    cycler_text: String,
) -> impl IntoView {
    let LandingConfig {
        words,
        action_path,
        action_label,
        logo_asset,
        logo_alt,
        illustration_asset,
        subtitle,
        timing,
    } = config;

    view! {
        <div class="container no-sidebar">
            <div class="row">
                <img class="logo" src=logo_asset alt=logo_alt />
            </div>
            <div class="row">
                <div class="col col--6">
                    <div class="row">
                        <div class="large-text">
                            "Hands-on tutorials to "
                            <span class="purple-text">"learn"</span>
                            <br />
                            "and "
                            <span class="purple-text">"teach"</span>
                            " "
                            <WordCyclerView words=words timing=timing text=cycler_text />
                        </div>
                    </div>
                    <div class="row">
                        <div class="subtitle">{subtitle}</div>
                    </div>
                    <div class="row">
                        <div class="buttons">
                            <a class="button button--lg button--primary" href=action_path>
                                {action_label}
                            </a>
                        </div>
                    </div>
                </div>
                <div class="col col--6">
                    <img class="image-450" src=illustration_asset />
                </div>
            </div>
        </div>
    }
}
