use colored::Colorize;

use crate::error::Result;
use crate::settings::{load_settings, save_settings, settings_path};

pub fn show() -> Result<()> {
    let settings = load_settings();
    println!("Settings file:        {}", settings_path().display());
    println!("CAD to KRW (cost):    {}", settings.cad_to_krw_cost);
    println!("CAD to KRW (revenue): {}", settings.cad_to_krw_revenue);
    if settings.cad_to_krw_cost != settings.cad_to_krw_revenue {
        eprintln!(
            "{}",
            "Note: cost and revenue use different rates; set both if that is unintended."
                .yellow()
        );
    }
    Ok(())
}

pub fn set_cost_rate(rate: f64) -> Result<()> {
    let mut settings = load_settings();
    settings.cad_to_krw_cost = rate;
    save_settings(&settings)?;
    println!("Cost closing rate set to {rate}");
    Ok(())
}

pub fn set_revenue_rate(rate: f64) -> Result<()> {
    let mut settings = load_settings();
    settings.cad_to_krw_revenue = rate;
    save_settings(&settings)?;
    println!("Revenue closing rate set to {rate}");
    Ok(())
}
