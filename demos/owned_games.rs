use steam_webapi::{SteamWebAPI, SteamID};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let steamid = get_steamid("STEAMID");
    let api_key = std::env::var("STEAM_API_KEY").expect("STEAM_API_KEY missing");
    let api = SteamWebAPI::new(api_key)?;
    let mut games = api.get_owned_games(steamid).await?;
    
    games.sort_by(|a, b| b.playtime_forever.cmp(&a.playtime_forever));
    
    println!("{} games in library", games.len());
    
    for game in games.iter().take(10) {
        println!(
            "{}: {:.1} hours, mostly on {}",
            game.name.as_deref().unwrap_or("Unknown"),
            game.total_playtime_hours(),
            game.primary_platform(),
        );
    }
    
    Ok(())
}

fn get_steamid(key: &str) -> SteamID {
    dotenv::dotenv().ok();
    
    let sid_str = std::env::var(key)
        .unwrap_or_else(|_| panic!("{key} missing"));
    
    SteamID::from(sid_str.parse::<u64>().unwrap())
}
