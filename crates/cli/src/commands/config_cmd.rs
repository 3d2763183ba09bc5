//! `rulefit config` — Configuration management commands.

use rulefit_config::AppConfig;
use rulefit_core::ProfileRegistry;

pub fn validate() -> Result<(), Box<dyn std::error::Error>> {
    println!("🔍 Validating configuration...");

    match AppConfig::load() {
        Ok(config) => {
            println!("   ✅ Config parsed successfully");

            // Additional checks beyond hard validation
            let mut warnings = Vec::new();

            let registry = ProfileRegistry::builtin();
            if registry.resolve(&config.default_destination).name != config.default_destination
                && config.default_destination != "default"
            {
                warnings.push(format!(
                    "default_destination '{}' is not a built-in destination; \
                     the default profile will be used",
                    config.default_destination
                ));
            }

            for (name, dest) in &config.destinations {
                if let Some(ceiling) = dest.ceiling {
                    if ceiling < 1_000 {
                        warnings.push(format!(
                            "destinations.{name}.ceiling = {ceiling} is very small; \
                             most documents will be truncated"
                        ));
                    }
                }
            }

            if warnings.is_empty() {
                println!("   ✅ All checks passed");
            } else {
                println!();
                for w in &warnings {
                    println!("   ⚠️  {w}");
                }
            }

            println!();
            println!("   Destination:  {}", config.default_destination);
            println!("   Locale:       {}", config.default_locale);
            println!("   Overrides:    {}", config.destinations.len());
            println!(
                "   Tuning:       {} / {} / {} / {}",
                config.tuning.extended_budget_ratio,
                config.tuning.examples_budget_ratio,
                config.tuning.footer_fallback_ratio,
                config.tuning.paragraph_snap_ratio
            );
        }
        Err(e) => {
            println!("   ❌ Config error: {e}");
            return Err(e.into());
        }
    }

    Ok(())
}

pub fn show() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load().map_err(|e| format!("Failed to load config: {e}"))?;
    let toml_str = toml::to_string_pretty(&config)?;
    println!("{toml_str}");
    Ok(())
}

pub fn path() -> Result<(), Box<dyn std::error::Error>> {
    let config_path = AppConfig::config_dir().join("config.toml");
    println!("{}", config_path.display());
    Ok(())
}
