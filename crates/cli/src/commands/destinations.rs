//! `rulefit destinations` — List known destinations and their constraints.

use rulefit_config::AppConfig;
use rulefit_core::ProfileRegistry;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load().map_err(|e| format!("Failed to load config: {e}"))?;
    let mut registry = ProfileRegistry::builtin();
    config.apply_overrides(&mut registry);

    println!("📝 Known destinations");
    println!("=====================");
    println!(
        "  {:<12} {:>8} {:>8}  {:<10} {:<8}",
        "name", "ceiling", "lines", "format", "symbols"
    );
    for name in registry.names() {
        let profile = registry.resolve(name);
        let lines = profile
            .line_limit
            .map(|l| l.to_string())
            .unwrap_or_else(|| "-".into());
        println!(
            "  {:<12} {:>8} {:>8}  {:<10} {:<8}",
            profile.name,
            profile.ceiling,
            lines,
            profile.format.to_string(),
            if profile.supports_symbols { "yes" } else { "no" }
        );
    }
    println!();
    println!("  Default destination: {}", config.default_destination);

    Ok(())
}
