use anyhow::Result;
use landscape::api::{default_client, pathlist};
use log::info;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    // Reads LANDSCAPE_API_KEY, LANDSCAPE_API_SECRET and LANDSCAPE_API_URI.
    let client = default_client()?;

    let roles = client.get_roles(Vec::<String>::new()).await?;
    for role in &roles {
        info!("role {} grants {:?}", role.name, role.permissions);
    }

    // Actions without a typed helper go through `fetch_json`.
    let computers: serde_json::Value = client
        .fetch_json("GetComputers", pathlist("tags", "web"))
        .await?;
    println!("{computers:#}");

    Ok(())
}
