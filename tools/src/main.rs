//! desk-runner: headless runner for the audit desk core.
//!
//! Usage:
//!   desk-runner --seed 12345 --txns 50
//!   desk-runner --seed 12345 --demo --json

use anyhow::Result;
use auditdesk_core::{
    desk::AuditDesk,
    format::format_currency,
    generator::GeneratorConfig,
    model::FeedbackAction,
};
use chrono::Utc;
use std::env;

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let seed = parse_arg(&args, "--seed", 42u64);
    let txns = parse_arg(&args, "--txns", 50u64) as usize;
    let vendors = parse_arg(&args, "--vendors", 0u64) as usize;
    let demo = args.iter().any(|a| a == "--demo");
    let json = args.iter().any(|a| a == "--json");

    let as_of = Utc::now();
    let config = GeneratorConfig {
        seed,
        transaction_count: txns,
        extra_vendors: vendors,
    };
    let mut desk = AuditDesk::generate(&config, as_of);

    if !json {
        println!("audit desk — desk-runner");
        println!("  seed:     {seed}");
        println!("  txns:     {txns}");
        println!("  vendors:  {}", desk.store().vendors().len());
        println!();
    }

    if demo {
        run_demo(&mut desk)?;
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&desk.snapshot(as_of))?);
        return Ok(());
    }

    let metrics = desk.recompute_risk_metrics(as_of);
    println!("metrics:");
    println!("  total exposure:      {}", format_currency(metrics.total_exposure));
    println!("  active alerts:       {}", metrics.active_alerts);
    println!("  critical alerts:     {}", metrics.critical_alerts);
    println!("  vendors under watch: {}", metrics.vendors_under_watch);
    println!("  transactions today:  {}", metrics.transactions_today);
    println!("  avg risk score:      {:.1}", metrics.avg_risk_score);
    println!("  risk trend:          {:+.1}%", metrics.risk_trend);
    println!();
    println!("alerts:");
    for alert in desk.store().alerts() {
        println!(
            "  [{}] {:<9} {} ({})",
            alert.id,
            alert.severity.name(),
            alert.title,
            format_currency(alert.exposure)
        );
    }

    if demo {
        println!();
        println!("event log ({} entries):", desk.events().len());
        for entry in desk.events() {
            println!("  #{:03} {}", entry.seq, entry.event_type);
        }
    }

    Ok(())
}

/// Exercise one pass of each public operation, logging notifications
/// the way a toast sink would show them.
fn run_demo(desk: &mut AuditDesk) -> Result<()> {
    let now = Utc::now();

    notify(desk.apply_alert_feedback("ALT002", FeedbackAction::Investigate)?);
    notify(desk.toggle_checklist_item("INV001", "CK002", now)?);
    desk.select_alert("ALT001")?;
    desk.select_transaction("TXN000001")?;
    desk.close_panel()?;

    notify(desk.start_scenario("SIM002")?);
    notify(desk.apply_scenario("SIM002", now)?);
    notify(desk.pause_simulation()?);
    notify(desk.reset_simulation()?);

    let (removed, notification) = desk.remove_from_watchlist("WL002")?;
    log::info!("watchlist removal applied: {removed}");
    notify(notification);

    Ok(())
}

fn notify(notification: Option<auditdesk_core::event::Notification>) {
    if let Some(n) = notification {
        match n.description {
            Some(desc) => println!("toast [{:?}] {} — {desc}", n.severity, n.title),
            None => println!("toast [{:?}] {}", n.severity, n.title),
        }
    }
}

fn parse_arg(args: &[String], flag: &str, default: u64) -> u64 {
    args.windows(2)
        .find(|w| w[0] == flag)
        .and_then(|w| w[1].parse().ok())
        .unwrap_or(default)
}
