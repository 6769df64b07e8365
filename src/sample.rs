//! The demo listing shown on the site's landing page.

use chrono::{DateTime, Utc};

/// The instant the demo listing is normalized against: midday on the day
/// the live matches are running, before any scheduled match has started.
pub(crate) fn reference_time() -> DateTime<Utc> {
    // 2023-06-15T12:00:00Z
    DateTime::from_timestamp(1_686_830_400, 0).unwrap_or_default()
}

/// Raw records in the ingest format, parsed by
/// [`StaticMatchRepository::sample`](crate::StaticMatchRepository::sample).
pub(crate) const SAMPLE_MATCHES: &str = r#"[
  {
    "id": "live-1",
    "teams": [
      {
        "id": "team-1",
        "name": "Team Liquid",
        "logo": "https://api.dicebear.com/7.x/avataaars/svg?seed=TeamLiquid",
        "score": 2
      },
      {
        "id": "team-2",
        "name": "Cloud9",
        "logo": "https://api.dicebear.com/7.x/avataaars/svg?seed=Cloud9",
        "score": 1
      }
    ],
    "gameType": "League of Legends",
    "tournament": "LCS Summer Split",
    "startTime": "2023-06-15T18:00:00Z",
    "isLive": true,
    "streamUrl": "https://twitch.tv/riotgames"
  },
  {
    "id": "live-2",
    "teams": [
      {
        "id": "team-3",
        "name": "Fnatic",
        "logo": "https://api.dicebear.com/7.x/avataaars/svg?seed=Fnatic",
        "score": 13
      },
      {
        "id": "team-4",
        "name": "G2 Esports",
        "logo": "https://api.dicebear.com/7.x/avataaars/svg?seed=G2Esports",
        "score": 11
      }
    ],
    "gameType": "CS:GO",
    "tournament": "ESL Pro League",
    "startTime": "2023-06-15T17:30:00Z",
    "isLive": true,
    "streamUrl": "https://twitch.tv/esl_csgo"
  },
  {
    "id": "live-3",
    "teams": [
      {
        "id": "team-5",
        "name": "T1",
        "logo": "https://api.dicebear.com/7.x/avataaars/svg?seed=T1",
        "score": 1
      },
      {
        "id": "team-6",
        "name": "DRX",
        "logo": "https://api.dicebear.com/7.x/avataaars/svg?seed=DRX",
        "score": 1
      }
    ],
    "gameType": "League of Legends",
    "tournament": "LCK Summer",
    "startTime": "2023-06-15T10:00:00Z",
    "isLive": true,
    "streamUrl": "https://twitch.tv/lck"
  },
  {
    "id": "live-4",
    "teams": [
      {
        "id": "team-7",
        "name": "Sentinels",
        "logo": "https://api.dicebear.com/7.x/avataaars/svg?seed=Sentinels",
        "score": 7
      },
      {
        "id": "team-8",
        "name": "100 Thieves",
        "logo": "https://api.dicebear.com/7.x/avataaars/svg?seed=100Thieves",
        "score": 5
      }
    ],
    "gameType": "Valorant",
    "tournament": "VCT Americas",
    "startTime": "2023-06-15T19:00:00Z",
    "isLive": true,
    "streamUrl": "https://twitch.tv/valorant"
  },
  {
    "id": "live-5",
    "teams": [
      {
        "id": "team-9",
        "name": "OG",
        "logo": "https://api.dicebear.com/7.x/avataaars/svg?seed=OG",
        "score": 1
      },
      {
        "id": "team-10",
        "name": "Team Secret",
        "logo": "https://api.dicebear.com/7.x/avataaars/svg?seed=TeamSecret",
        "score": 0
      }
    ],
    "gameType": "Dota 2",
    "tournament": "The International",
    "startTime": "2023-06-15T16:00:00Z",
    "isLive": true,
    "streamUrl": "https://twitch.tv/dota2ti"
  },
  {
    "id": "match-2",
    "teams": [
      {
        "id": "team-3",
        "name": "Fnatic",
        "logo": "https://api.dicebear.com/7.x/avataaars/svg?seed=Fnatic"
      },
      {
        "id": "team-4",
        "name": "G2 Esports",
        "logo": "https://api.dicebear.com/7.x/avataaars/svg?seed=G2Esports"
      }
    ],
    "gameType": "CS:GO",
    "tournament": "ESL Pro League",
    "startTime": "2023-06-16T20:30:00Z"
  },
  {
    "id": "match-3",
    "teams": [
      {
        "id": "team-5",
        "name": "T1",
        "logo": "https://api.dicebear.com/7.x/avataaars/svg?seed=T1"
      },
      {
        "id": "team-6",
        "name": "DRX",
        "logo": "https://api.dicebear.com/7.x/avataaars/svg?seed=DRX"
      }
    ],
    "gameType": "League of Legends",
    "tournament": "LCK Summer",
    "startTime": "2023-06-17T15:00:00Z"
  },
  {
    "id": "match-4",
    "teams": [
      {
        "id": "team-11",
        "name": "Natus Vincere",
        "logo": "https://api.dicebear.com/7.x/avataaars/svg?seed=NatusVincere"
      },
      {
        "id": "team-12",
        "name": "Astralis",
        "logo": "https://api.dicebear.com/7.x/avataaars/svg?seed=Astralis"
      }
    ],
    "gameType": "CS:GO",
    "tournament": "BLAST Premier",
    "startTime": "2023-06-17T19:00:00Z"
  }
]"#;
