use serde::Serialize;

/// An entry in the game filter bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Game {
    /// Short slug such as `lol`.
    pub id: String,
    /// Display name; equal to [`Match::game_type`](super::Match::game_type).
    pub name: String,
    pub icon: String,
    pub color: String,
}

impl Game {
    fn new(id: &str, name: &str, icon: &str, color: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            icon: icon.to_string(),
            color: color.to_string(),
        }
    }

    /// The games offered by default.
    pub fn catalog() -> Vec<Game> {
        vec![
            Game::new(
                "lol",
                "League of Legends",
                "https://static.wikia.nocookie.net/leagueoflegends/images/8/86/League_of_Legends_Cover.jpg",
                "bg-blue-500",
            ),
            Game::new(
                "dota2",
                "Dota 2",
                "https://cdn.cloudflare.steamstatic.com/steam/apps/570/header.jpg",
                "bg-red-500",
            ),
            Game::new(
                "csgo",
                "CS:GO",
                "https://cdn.cloudflare.steamstatic.com/steam/apps/730/header.jpg",
                "bg-yellow-500",
            ),
            Game::new(
                "valorant",
                "Valorant",
                "https://images.contentstack.io/v3/assets/bltb6530b271fddd0b1/blt3f072336e3f3ade4/valorant.png",
                "bg-pink-500",
            ),
            Game::new(
                "overwatch",
                "Overwatch",
                "https://blz-contentstack-images.akamaized.net/v3/assets/blt9c12f249ac15c7ec/blt4d790c3da3e704c9/overwatch.jpg",
                "bg-orange-500",
            ),
            Game::new(
                "fortnite",
                "Fortnite",
                "https://cdn2.unrealengine.com/fortnite-chapter-4-season-og-3840x2160-a7e56e1a86bb.jpg",
                "bg-purple-500",
            ),
            Game::new(
                "rocketleague",
                "Rocket League",
                "https://cdn1.epicgames.com/offer/9773aa1aa54f4f7b80e44bef04986cea/rocket-league.jpg",
                "bg-green-500",
            ),
            Game::new(
                "apexlegends",
                "Apex Legends",
                "https://media.contentapi.ea.com/content/dam/apex-legends/images/2019/01/apex-featured-image-16x9.jpg",
                "bg-red-400",
            ),
        ]
    }
}
