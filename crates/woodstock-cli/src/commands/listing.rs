use anyhow::Result;
use woodstock_core::event::EventRepository;
use woodstock_core::group::GroupRepository;

use super::utils::{PathOverrides, open_store};

pub async fn groups(paths: &PathOverrides) -> Result<()> {
    let store = open_store(paths)?;
    let groups = GroupRepository::list_all(store.as_ref()).await?;

    if groups.is_empty() {
        println!("No groups.");
    }
    for group in groups {
        println!("{}", group.name);
    }
    Ok(())
}

pub async fn events(paths: &PathOverrides) -> Result<()> {
    let store = open_store(paths)?;
    let events = EventRepository::list_all(store.as_ref()).await?;

    if events.is_empty() {
        println!("No events. Run `woodstock migrate` to seed them.");
    }
    for event in events {
        println!("{}", event.name);
    }
    Ok(())
}
