use anyhow::Result;
use chatpane::chat::MessageStore;
use chatpane::config::Config;
use chatpane::demo::DemoHost;
use chatpane::logger;
use chatpane::ui::{self, ChatInterface};

#[tokio::main]
async fn main() -> Result<()> {
    if std::env::args().any(|arg| arg == "--generate-config") {
        let path = Config::get_default_config_path()?;
        Config::generate_default_config(&path)?;
        println!("✅ Wrote default configuration to {}", path.display());
        return Ok(());
    }

    let config = Config::load()?;
    let log_buffer = logger::init(&config.logging)?;
    log::info!("Starting chatpane demo");

    let chat = ChatInterface::new(&config, MessageStore::new(vec![DemoHost::welcome_message()])).with_log_buffer(log_buffer);
    let mut host = match Config::config_path() {
        Ok(path) => DemoHost::new().with_theme_file(path),
        Err(e) => {
            log::warn!("Theme changes will not be saved: {}", e);
            DemoHost::new()
        }
    };

    // Run the TUI application
    ui::run_app(chat, &mut host).await?;

    log::info!("chatpane exited after {} replies", host.replies_sent());
    Ok(())
}
