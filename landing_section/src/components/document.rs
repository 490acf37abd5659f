//! Root document component - the complete standalone HTML page.

use leptos::prelude::*;

use super::LandingSection;
use crate::config::LandingConfig;
use crate::styles::{CSP, CYCLER_SCRIPT, SECTION_CSS};

/// The complete HTML document for the landing page
#[component]
pub fn LandingDocument(
    config: LandingConfig,
    /// Page title
    #[prop(default = "AKS Labs".to_string(), into)]
    title: String,
) -> impl IntoView {
    view! {
        <html lang="en">
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <meta http-equiv="Content-Security-Policy" content=CSP />
                <title>{title}</title>
                <style>{SECTION_CSS}</style>
            </head>
            <body>
                <LandingSection config=config />
                <script>{CYCLER_SCRIPT}</script>
            </body>
        </html>
    }
}
