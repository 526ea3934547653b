use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// Identifier for one of the managed content pages.
///
/// The set is closed: these are the five public pages whose content is
/// editable. The serialized form is the lowercase name, which doubles as
/// the storage key within a namespace.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageId {
    Home,
    About,
    Team,
    News,
    Events,
}

impl PageId {
    /// All managed pages, in display order.
    pub const ALL: [PageId; 5] = [
        PageId::Home,
        PageId::About,
        PageId::Team,
        PageId::News,
        PageId::Events,
    ];

    /// The lowercase identifier used as a storage key.
    pub fn as_str(&self) -> &'static str {
        match self {
            PageId::Home => "home",
            PageId::About => "about",
            PageId::Team => "team",
            PageId::News => "news",
            PageId::Events => "events",
        }
    }
}

impl FromStr for PageId {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "home" => Ok(PageId::Home),
            "about" => Ok(PageId::About),
            "team" => Ok(PageId::Team),
            "news" => Ok(PageId::News),
            "events" => Ok(PageId::Events),
            other => Err(TypeError::UnknownPage(other.to_string())),
        }
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
