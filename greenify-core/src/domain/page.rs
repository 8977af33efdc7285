//! Page identifiers of the site

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::result::Error;

/// Closed set of routable pages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Page {
    #[default]
    Home,
    Welcome,
    Login,
    Register,
    Map,
    Plant,
    Profile,
    About,
    Contact,
    Tasks,
    Games,
    GamesQuestions,
    GamesInteractive,
}

impl Page {
    pub const ALL: [Page; 13] = [
        Page::Home,
        Page::Welcome,
        Page::Login,
        Page::Register,
        Page::Map,
        Page::Plant,
        Page::Profile,
        Page::About,
        Page::Contact,
        Page::Tasks,
        Page::Games,
        Page::GamesQuestions,
        Page::GamesInteractive,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::Welcome => "welcome",
            Page::Login => "login",
            Page::Register => "register",
            Page::Map => "map",
            Page::Plant => "plant",
            Page::Profile => "profile",
            Page::About => "about",
            Page::Contact => "contact",
            Page::Tasks => "tasks",
            Page::Games => "games",
            Page::GamesQuestions => "games-questions",
            Page::GamesInteractive => "games-interactive",
        }
    }

    /// Pages that need an active user
    pub fn is_protected(&self) -> bool {
        matches!(self, Page::Welcome | Page::Profile)
    }
}

impl FromStr for Page {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Page::ALL
            .iter()
            .find(|p| p.as_str() == s)
            .copied()
            .ok_or_else(|| Error::validation(format!("Unknown page: {}", s)))
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
