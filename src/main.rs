//! Polyglot
//!
//! Loads the translation catalog from the configured resource directory and
//! reports what was found. Exits with an error if any translation file is
//! missing or malformed.

use anyhow::Context;
use tracing::info;

use polyglot::{
    config::Settings,
    utils::logging,
    Catalog, DirectoryResolver,
};

fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    // Load configuration
    let settings = Settings::new().context("failed to load settings")?;
    settings.validate()?;

    // Initialize logging
    let _guard = logging::init_logging(&settings.logging)?;

    info!("Starting {}...", polyglot::info());

    let resolver = DirectoryResolver::new(&settings.resources.dir);
    let catalog = Catalog::load(&resolver, &settings.i18n.lang_path).with_context(|| {
        format!(
            "failed to load translations from {}{}",
            settings.resources.dir, settings.i18n.lang_path
        )
    })?;

    let stats = catalog.stats();
    for language in &stats.languages {
        info!(
            locale_code = %language.code,
            key_count = language.key_count,
            "Language available"
        );
    }
    info!(
        languages = stats.languages.len(),
        total_keys = stats.total_keys,
        "Translations loaded"
    );

    Ok(())
}
