//! Static content of the page: navigation, badges, transport buttons and cards.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavOption {
    pub icon: &'static str,
    pub label: &'static str,
    pub heading: &'static str,
}

pub const NAV_OPTIONS: [NavOption; 3] = [
    NavOption {
        icon: "⌂",
        label: "Home",
        heading: "Made For You",
    },
    NavOption {
        icon: "⌕",
        label: "Search",
        heading: "Browse all",
    },
    NavOption {
        icon: "▤",
        label: "Your Library",
        heading: "Your Library",
    },
];

pub const SEARCH_NAV_INDEX: usize = 1;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Card {
    pub title: &'static str,
    pub info: &'static str,
    pub duration_secs: f64,
}

pub const CARDS: [Card; 6] = [
    Card {
        title: "Today's Top Hits",
        info: "The hottest tracks right now",
        duration_secs: 213.0,
    },
    Card {
        title: "RapCaviar",
        info: "New music from the scene",
        duration_secs: 187.0,
    },
    Card {
        title: "All Out 2010s",
        info: "The biggest songs of the 2010s",
        duration_secs: 241.0,
    },
    Card {
        title: "Rock Classics",
        info: "Rock legends & epic songs",
        duration_secs: 325.0,
    },
    Card {
        title: "Chill Hits",
        info: "Kick back to the best chill hits",
        duration_secs: 198.0,
    },
    Card {
        title: "Peaceful Piano",
        info: "Relax and indulge with piano",
        duration_secs: 156.0,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Badge {
    CreatePlaylist,
    BrowsePodcasts,
    ExplorePremium,
    InstallApp,
}

pub const BADGES: [Badge; 4] = [
    Badge::CreatePlaylist,
    Badge::BrowsePodcasts,
    Badge::ExplorePremium,
    Badge::InstallApp,
];

impl Badge {
    pub fn label(self) -> &'static str {
        match self {
            Badge::CreatePlaylist => "Create playlist",
            Badge::BrowsePodcasts => "Browse podcasts",
            Badge::ExplorePremium => "Explore Premium",
            Badge::InstallApp => "Install App",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Badge::CreatePlaylist => "Playlist creation feature coming soon!",
            Badge::BrowsePodcasts => "Podcast browsing feature coming soon!",
            Badge::ExplorePremium => "Upgrading to Premium!",
            Badge::InstallApp => "Opening app store...",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerControl {
    Shuffle,
    Previous,
    PlayPause,
    Next,
    Repeat,
}

pub const PLAYER_CONTROLS: [PlayerControl; 5] = [
    PlayerControl::Shuffle,
    PlayerControl::Previous,
    PlayerControl::PlayPause,
    PlayerControl::Next,
    PlayerControl::Repeat,
];

impl PlayerControl {
    pub fn label(self) -> &'static str {
        match self {
            PlayerControl::Shuffle => "Shuffle",
            PlayerControl::Previous => "Previous track",
            PlayerControl::PlayPause => "Play/Pause",
            PlayerControl::Next => "Next track",
            PlayerControl::Repeat => "Repeat",
        }
    }

    pub fn icon(self, is_playing: bool) -> &'static str {
        match self {
            PlayerControl::Shuffle => "⇄",
            PlayerControl::Previous => "⏮",
            PlayerControl::PlayPause if is_playing => "⏸",
            PlayerControl::PlayPause => "▶",
            PlayerControl::Next => "⏭",
            PlayerControl::Repeat => "↻",
        }
    }
}

pub const USER_MENU_MESSAGE: &str = "User menu - Profile, Settings, Logout";
pub const SEARCH_PROMPT: &str = "Search for songs, artists, playlists...";
