use steam_webapi::{SteamWebAPI, SteamID};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let steamid = get_steamid("STEAMID");
    let api_key = std::env::var("STEAM_API_KEY").expect("STEAM_API_KEY missing");
    let api = SteamWebAPI::new(api_key)?;
    let players = api.get_player_summaries(&[steamid]).await?;
    
    for player in players {
        println!("{}", player.display_name());
        println!("Status: {}", player.online_status());
        println!("Last online: {}", player.time_since_last_logoff());
        println!("Account age: {}", player.account_age());
    }
    
    Ok(())
}

fn get_steamid(key: &str) -> SteamID {
    dotenv::dotenv().ok();
    
    let sid_str = std::env::var(key)
        .unwrap_or_else(|_| panic!("{key} missing"));
    
    SteamID::from(sid_str.parse::<u64>().unwrap())
}
