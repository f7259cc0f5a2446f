use std::sync::Arc;

use anyhow::{Context, Result, bail};
use woodstock_application::{ProfileEnrichmentService, RepsSyncService, SyncReport};
use woodstock_core::profile::{MozillianProfile, ProfileRepository};
use woodstock_infrastructure::JsonRecordStore;
use woodstock_interaction::{ApiClient, MozilliansClient, RepsClient};

use super::migrate::apply_pending;
use super::utils::{PathOverrides, load_config, open_store};

pub async fn profiles(paths: &PathOverrides, emails: Vec<String>) -> Result<()> {
    let store = open_store(paths)?;
    apply_pending(store.clone()).await?;

    let config = load_config(paths)?;
    let api = ApiClient::from_config(&config)?;
    let directory = MozilliansClient::new(api, &config)
        .context("Mozillians API is not configured")?;

    let selection = select(&store, emails).await?;
    let service = ProfileEnrichmentService::new(Arc::new(directory), store.clone(), store);
    let report = service.sync(selection).await?;

    print_report("mozillians.org", &report);
    Ok(())
}

pub async fn reps(paths: &PathOverrides, emails: Vec<String>) -> Result<()> {
    let store = open_store(paths)?;
    apply_pending(store.clone()).await?;

    let config = load_config(paths)?;
    config.validate_reps()?;
    let api = ApiClient::from_config(&config)?;
    let reps = RepsClient::new(api, &config);

    let selection = select(&store, emails).await?;
    let service = RepsSyncService::new(Arc::new(reps), store);
    let report = service.sync(selection).await?;

    print_report("reps.mozilla.org", &report);
    Ok(())
}

/// No emails means every profile; otherwise each email must be known.
async fn select(
    store: &JsonRecordStore,
    emails: Vec<String>,
) -> Result<Option<Vec<MozillianProfile>>> {
    if emails.is_empty() {
        return Ok(None);
    }

    let mut selected = Vec::with_capacity(emails.len());
    for email in emails {
        match ProfileRepository::find_by_email(store, &email).await? {
            Some(profile) => selected.push(profile),
            None => bail!("No profile with email '{}'", email),
        }
    }
    Ok(Some(selected))
}

fn print_report(source: &str, report: &SyncReport) {
    println!("Synced with {}: {}", source, report);
}
