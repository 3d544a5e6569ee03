use std::path::PathBuf;

use trailer_search::entry::entries_to_json;
use trailer_search::logging;
use trailer_search::media::load_media_item;
use trailer_search::provider::ProviderManager;
use trailer_search::settings::Settings;

const USAGE: &str = "usage: trailer_search <item.json> [settings.json]";

fn main() -> anyhow::Result<()> {
    let mut args = std::env::args().skip(1);
    let item_path = args.next().ok_or_else(|| anyhow::anyhow!(USAGE))?;
    let settings_path = args.next().unwrap_or_else(|| "settings.json".into());

    let settings = Settings::load(&settings_path)?;
    logging::init(settings.debug_logging, settings.log_file.as_ref().map(PathBuf::from))?;

    let item = load_media_item(&item_path)?;
    let mut providers = ProviderManager::with_builtin();
    providers.apply_settings(&settings);
    tracing::info!(providers = ?providers.names(), title = %item.title, "searching trailers");

    let entries = providers.search(&item);
    println!("{}", entries_to_json(&entries)?);
    Ok(())
}
