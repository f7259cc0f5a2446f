use anyhow::{Result, bail};
use woodstock_core::group::GroupRepository;
use woodstock_core::profile::{MozillianProfile, ProfileRepository};

use super::utils::{PathOverrides, open_store};

pub async fn add(paths: &PathOverrides, email: String, username: String) -> Result<()> {
    if email.trim().is_empty() {
        bail!("--email must not be empty");
    }

    let store = open_store(paths)?;
    let profile = MozillianProfile::new(email, username);
    ProfileRepository::create(store.as_ref(), &profile).await?;

    println!("Added {} ({})", profile.email, profile.id);
    Ok(())
}

pub async fn list(paths: &PathOverrides, json: bool) -> Result<()> {
    let store = open_store(paths)?;
    let profiles = ProfileRepository::list_all(store.as_ref()).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&profiles)?);
        return Ok(());
    }

    if profiles.is_empty() {
        println!("No profiles.");
        return Ok(());
    }

    for profile in profiles {
        let name = if profile.full_name.is_empty() {
            "-"
        } else {
            profile.full_name.as_str()
        };
        let group_ids: Vec<String> = profile.tracking_groups.iter().cloned().collect();
        let groups: Vec<String> = GroupRepository::find_by_ids(store.as_ref(), &group_ids)
            .await?
            .into_iter()
            .map(|g| g.name)
            .collect();

        print!(
            "{}  {}  {}  [{}]",
            profile.email,
            name,
            profile.country,
            groups.join(", ")
        );
        match profile.reps_profile_url() {
            Some(url) => println!("  {}", url),
            None => println!(),
        }
    }
    Ok(())
}
