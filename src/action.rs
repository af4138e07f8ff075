//! Scripted session transitions for headless runs.
//!
//! `--print-state` replays `--action` arguments against a fresh [`Model`]
//! and prints the resulting [`Snapshot`]. Each action is `name` or
//! `name=value`:
//!
//! | action                  | effect                                   |
//! |-------------------------|------------------------------------------|
//! | `overview`              | show the component overview              |
//! | `toggle-category=<i>`   | expand or collapse sidebar category `i`  |
//! | `select-item=<label>`   | sidebar item click                       |
//! | `select-entry=<name>`   | overview card click                      |
//! | `show-more=<category>`  | "View more" / "View less"                |
//! | `tab=<tab>`             | `overview`, `guidelines` or `usage`      |

use std::str::FromStr;

use thiserror::Error;

use crate::app::{Message, Model, Snapshot, update};
use crate::view::DetailTab;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ActionParseError {
    #[error("unknown action `{0}`")]
    Unknown(String),
    #[error("action `{0}` needs a value (`{0}=...`)")]
    MissingValue(&'static str),
    #[error("action `{0}` takes no value")]
    UnexpectedValue(&'static str),
    #[error("invalid category index `{0}`")]
    BadIndex(String),
}

/// One scripted session transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Overview,
    ToggleCategory(usize),
    SelectItem(String),
    SelectEntry(String),
    ShowMore(String),
    /// Raw tab name; names that are not tabs are ignored when applied.
    Tab(String),
}

impl FromStr for Action {
    type Err = ActionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, value) = match s.split_once('=') {
            Some((name, value)) => (name.trim(), Some(value.trim())),
            None => (s.trim(), None),
        };
        let need = |key: &'static str| value.ok_or(ActionParseError::MissingValue(key));
        match name {
            "overview" => match value {
                None => Ok(Self::Overview),
                Some(_) => Err(ActionParseError::UnexpectedValue("overview")),
            },
            "toggle-category" => {
                let raw = need("toggle-category")?;
                raw.parse()
                    .map(Self::ToggleCategory)
                    .map_err(|_| ActionParseError::BadIndex(raw.to_string()))
            }
            "select-item" => Ok(Self::SelectItem(need("select-item")?.to_string())),
            "select-entry" => Ok(Self::SelectEntry(need("select-entry")?.to_string())),
            "show-more" => Ok(Self::ShowMore(need("show-more")?.to_string())),
            "tab" => Ok(Self::Tab(need("tab")?.to_string())),
            other => Err(ActionParseError::Unknown(other.to_string())),
        }
    }
}

impl Action {
    /// The message this action sends, if it names anything sendable.
    pub fn message(&self) -> Option<Message> {
        match self {
            Self::Overview => Some(Message::SelectOverview),
            Self::ToggleCategory(index) => Some(Message::ToggleCategory(*index)),
            Self::SelectItem(label) => Some(Message::SelectItem(label.clone())),
            Self::SelectEntry(name) => Some(Message::SelectEntry(name.clone())),
            Self::ShowMore(category) => Some(Message::ToggleShowMore(category.clone())),
            Self::Tab(raw) => match raw.parse::<DetailTab>() {
                Ok(tab) => Some(Message::SetActiveTab(tab)),
                Err(err) => {
                    tracing::warn!(%err, "ignoring tab action");
                    None
                }
            },
        }
    }

    pub fn apply(&self, model: Model) -> Model {
        match self.message() {
            Some(msg) => update(model, msg),
            None => model,
        }
    }
}

/// Replay actions against a fresh session and return the final snapshot.
pub fn run_script<'a>(actions: impl IntoIterator<Item = &'a Action>) -> Snapshot {
    actions
        .into_iter()
        .fold(Model::default(), |model, action| action.apply(model))
        .snapshot()
}
