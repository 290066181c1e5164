mod content;
mod engine;
mod ui;

use content::{ContentError, PortfolioContent};
use engine::core::app_setup::create_app;
use engine::core::config::SiteConfig;

fn main() -> Result<(), ContentError> {
    let content = PortfolioContent::embedded()?;
    let mut app = create_app(SiteConfig::default(), content);

    #[cfg(target_arch = "wasm32")]
    {
        wasm_bindgen_futures::spawn_local(async move {
            app.run();
        });
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        app.run();
    }

    Ok(())
}
