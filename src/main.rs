use steam_webapi::{SteamWebAPI, SteamID};
use steam_webapi::types::AppId;
use anyhow::{anyhow, bail, Context};

const USAGE: &str = "Usage: steamkit <command> <api_key> [arguments]

Commands:
    summary <api_key> <steamid>
    owned-games <api_key> <steamid>
    recent-games <api_key> <steamid> [--count <count>]
    friends <api_key> <steamid>
    achievements <api_key> <steamid> <appid>
    news <api_key> <steamid> <appid>
    global-achievements <api_key> <gameid>
    user-stats <api_key> <steamid> <appid>
    game-schema <api_key> <appid>
    player-bans <api_key> <steamid>...";

#[derive(Debug, PartialEq)]
enum Command {
    Summary { steamid: SteamID },
    OwnedGames { steamid: SteamID },
    RecentGames { steamid: SteamID, count: Option<u32> },
    Friends { steamid: SteamID },
    Achievements { steamid: SteamID, appid: AppId },
    News { steamid: SteamID, appid: AppId },
    GlobalAchievements { gameid: AppId },
    UserStats { steamid: SteamID, appid: AppId },
    GameSchema { appid: AppId },
    PlayerBans { steamids: Vec<SteamID> },
}

#[derive(Debug, PartialEq)]
struct Args {
    api_key: String,
    command: Command,
}

fn parse_steamid(arg: &str) -> anyhow::Result<SteamID> {
    let steamid = arg.parse::<u64>()
        .with_context(|| format!("Invalid Steam ID: {arg}"))?;
    
    Ok(SteamID::from(steamid))
}

fn parse_appid(arg: &str) -> anyhow::Result<AppId> {
    arg.parse::<AppId>()
        .with_context(|| format!("Invalid app ID: {arg}"))
}

fn parse_args(args: &[String]) -> anyhow::Result<Args> {
    fn positional<'a>(args: &'a [String], index: usize, name: &str) -> anyhow::Result<&'a str> {
        args.get(index)
            .map(String::as_str)
            .ok_or_else(|| anyhow!("Missing argument <{name}>\n\n{USAGE}"))
    }
    
    let name = positional(args, 0, "command")?;
    let api_key = positional(args, 1, "api_key")?.to_string();
    let rest = &args[2..];
    let command = match name {
        "summary" => Command::Summary {
            steamid: parse_steamid(positional(rest, 0, "steamid")?)?,
        },
        "owned-games" => Command::OwnedGames {
            steamid: parse_steamid(positional(rest, 0, "steamid")?)?,
        },
        "recent-games" => {
            let mut steamid = None;
            let mut count = None;
            let mut iter = rest.iter();
            
            while let Some(arg) = iter.next() {
                match arg.as_str() {
                    "--count" | "-c" => {
                        let value = iter.next()
                            .ok_or_else(|| anyhow!("Missing value for {arg}"))?;
                        
                        count = Some(value.parse::<u32>().with_context(|| format!("Invalid count: {value}"))?);
                    },
                    arg if steamid.is_none() => steamid = Some(parse_steamid(arg)?),
                    arg => bail!("Unexpected argument: {arg}"),
                }
            }
            
            Command::RecentGames {
                steamid: steamid.ok_or_else(|| anyhow!("Missing argument <steamid>\n\n{USAGE}"))?,
                count,
            }
        },
        "friends" => Command::Friends {
            steamid: parse_steamid(positional(rest, 0, "steamid")?)?,
        },
        "achievements" => Command::Achievements {
            steamid: parse_steamid(positional(rest, 0, "steamid")?)?,
            appid: parse_appid(positional(rest, 1, "appid")?)?,
        },
        "news" => Command::News {
            steamid: parse_steamid(positional(rest, 0, "steamid")?)?,
            appid: parse_appid(positional(rest, 1, "appid")?)?,
        },
        "global-achievements" => Command::GlobalAchievements {
            gameid: parse_appid(positional(rest, 0, "gameid")?)?,
        },
        "user-stats" => Command::UserStats {
            steamid: parse_steamid(positional(rest, 0, "steamid")?)?,
            appid: parse_appid(positional(rest, 1, "appid")?)?,
        },
        "game-schema" => Command::GameSchema {
            appid: parse_appid(positional(rest, 0, "appid")?)?,
        },
        "player-bans" => {
            if rest.is_empty() {
                bail!("Missing argument <steamid>\n\n{USAGE}");
            }
            
            Command::PlayerBans {
                steamids: rest
                    .iter()
                    .map(|arg| parse_steamid(arg))
                    .collect::<anyhow::Result<Vec<_>>>()?,
            }
        },
        name => bail!("Unknown command: {name}\n\n{USAGE}"),
    };
    
    Ok(Args {
        api_key,
        command,
    })
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "Yes"
    } else {
        "No"
    }
}

async fn run(api: &SteamWebAPI, command: Command) -> anyhow::Result<()> {
    match command {
        Command::Summary { steamid } => {
            let summaries = api.get_player_summaries(&[steamid]).await?;
            
            if let Some(summary) = summaries.first() {
                println!("Player name: {}", summary.display_name());
                println!("Profile URL: {}", summary.profileurl);
                println!("Status: {}", summary.online_status());
                println!("Client: {}", summary.current_client_type());
                println!("Last online: {}", summary.time_since_last_logoff());
                println!("Account age: {}", summary.account_age());
                println!("Flags: {}", summary.personastateflags.unwrap_or_default());
                
                if let Some(game) = &summary.gameextrainfo {
                    println!("In game: {game}");
                }
            } else {
                println!("No player summary found");
            }
        },
        Command::OwnedGames { steamid } => {
            let games = api.get_owned_games(steamid).await?;
            
            println!("Owned games: {}", games.len());
            
            for game in games.iter().take(5) {
                println!(
                    "- {} (Playtime: {} minutes, last played {})",
                    game.name.as_deref().unwrap_or("Unknown game"),
                    game.playtime_forever,
                    game.last_played_ago(),
                );
            }
        },
        Command::RecentGames { steamid, count } => {
            let games = api.get_recently_played_games(steamid, count).await?;
            
            println!("Recently played games:");
            
            for game in games {
                println!("- {} (Playtime in last 2 weeks: {})", game.name, game.recent_playtime());
            }
        },
        Command::Friends { steamid } => {
            let friends = api.get_friend_list(steamid).await?;
            
            println!("Total friends: {}", friends.len());
            
            for friend in friends.iter().take(10) {
                println!("Friend ID: {}", u64::from(friend.steamid));
                println!("Relationship: {}", friend.relationship);
                println!("Friends for: {}", friend.friendship_duration());
                
                if let Some(url) = friend.profile_url() {
                    println!("Profile URL: {url}");
                }
                
                println!("---");
            }
        },
        Command::Achievements { steamid, appid } => {
            let achievements = api.get_player_achievements(steamid, appid).await?;
            
            println!("Game: {}", achievements.game_name);
            println!("Total achievements: {}", achievements.achievements.len());
            println!("Completion: {:.2}%", achievements.completion_percentage());
            
            for achievement in &achievements.achievements {
                println!("Name: {}", achievement.apiname);
                println!("Status: {}", achievement.status());
                println!("---");
            }
        },
        Command::News { steamid, appid } => {
            let news = api.get_news_for_app(steamid, appid).await?;
            
            println!("Total news items: {}", news.len());
            
            for item in news.iter().take(5) {
                println!("Title: {}", item.title);
                println!("URL: {}", item.url);
                println!("Published: {}", item.published_ago());
                println!("Short description: {}", item.short_description());
                println!("---");
            }
        },
        Command::GlobalAchievements { gameid } => {
            let achievements = api.get_global_achievement_percentages(gameid).await?;
            
            println!("Total global achievements: {}", achievements.len());
            
            for achievement in achievements.iter().take(10) {
                println!("Name: {}", achievement.name);
                println!("Percentage: {}", achievement.formatted_percentage());
                println!("Rarity: {}", achievement.rarity());
                println!("---");
            }
        },
        Command::UserStats { steamid, appid } => {
            let stats = api.get_user_stats_for_game(steamid, appid).await?;
            
            println!("Game: {}", stats.game_name);
            println!("Total stats: {}", stats.total_stats());
            println!("Total achievements: {}", stats.total_achievements());
            println!("Unlocked achievements: {}", stats.unlocked_achievements());
            println!("Achievement completion: {:.2}%", stats.achievement_completion_percentage());
            println!();
            println!("Top 5 stats:");
            
            for stat in stats.stats_sorted_by_value().into_iter().take(5) {
                println!("{}: {}", stat.name, stat.value);
            }
        },
        Command::GameSchema { appid } => {
            let schema = api.get_schema_for_game(appid).await?;
            
            println!("Game: {}", schema.game_name);
            println!("Version: {}", schema.game_version);
            println!("Total stats: {}", schema.total_stats());
            println!("Total achievements: {}", schema.total_achievements());
            println!("Hidden achievements: {}", schema.hidden_achievements());
            println!();
            println!("First 5 stats:");
            
            for stat in schema.available_game_stats.stats.iter().take(5) {
                println!("Name: {}", stat.name);
                println!("Default value: {}", stat.defaultvalue);
                println!("Display name: {}", stat.display_name);
                println!("---");
            }
            
            println!();
            println!("First 5 achievements:");
            
            for achievement in schema.available_game_stats.achievements.iter().take(5) {
                println!("Name: {}", achievement.name);
                println!("Display name: {}", achievement.display_name);
                println!("Description: {}", achievement.description.as_deref().unwrap_or(""));
                println!("Hidden: {}", yes_no(achievement.is_hidden()));
                println!("---");
            }
        },
        Command::PlayerBans { steamids } => {
            let bans = api.get_player_bans(&steamids).await?;
            
            for ban in bans {
                println!("Player: {}", u64::from(ban.steamid));
                println!("Community banned: {}", yes_no(ban.community_banned));
                println!("VAC banned: {}", yes_no(ban.vac_banned));
                println!("Number of VAC bans: {}", ban.number_of_vac_bans);
                println!("Days since last ban: {}", ban.days_since_last_ban);
                println!("Number of game bans: {}", ban.number_of_game_bans);
                println!("Economy ban: {}", ban.economy_ban);
                println!("Ban summary: {}", ban.ban_summary());
                println!("Ban severity: {}", ban.ban_severity());
                
                if let Some(last_ban_date) = ban.last_ban_date() {
                    println!("Last ban date: {}", last_ban_date.format("%Y-%m-%d"));
                }
                
                println!("---");
            }
        },
    }
    
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = std::env::args().skip(1).collect::<Vec<_>>();
    let Args { api_key, command } = parse_args(&args)?;
    let api = SteamWebAPI::new(api_key)?;
    
    run(&api, command).await
}
