//! # Topic Choice
//!
//! The closed two-value selection offered on the landing menu, plus the static
//! copy table that the cards and the confirmation modal render from.
//!
//! ```rust
//! use shared::choice::Choice;
//!
//! let choice: Choice = "mindfulness".parse().unwrap();
//! assert_eq!(choice.copy().modal_title, "Mindfulness & Meditation");
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{LandingError, Result};

/// A selectable topic on the landing menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Choice {
    Nutrition,
    Mindfulness,
}

impl Choice {
    /// Every choice, in menu order.
    pub const ALL: [Choice; 2] = [Choice::Nutrition, Choice::Mindfulness];

    /// The literal identifier used in routes (`nutrition` / `mindfulness`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Choice::Nutrition => "nutrition",
            Choice::Mindfulness => "mindfulness",
        }
    }

    /// Card and modal copy for this choice.
    pub fn copy(&self) -> &'static ChoiceCopy {
        match self {
            Choice::Nutrition => &NUTRITION_COPY,
            Choice::Mindfulness => &MINDFULNESS_COPY,
        }
    }
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Choice {
    type Err = LandingError;

    fn from_str(s: &str) -> Result<Self> {
        let key = s.trim();
        Choice::ALL
            .into_iter()
            .find(|choice| choice.as_str().eq_ignore_ascii_case(key))
            .ok_or_else(|| LandingError::UnknownChoice(s.to_string()))
    }
}

/// Display copy for one choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChoiceCopy {
    pub icon: &'static str,
    pub card_title: &'static str,
    pub card_description: &'static str,
    pub modal_title: &'static str,
    pub modal_description: &'static str,
}

static NUTRITION_COPY: ChoiceCopy = ChoiceCopy {
    icon: "🍽️",
    card_title: "Nutrition",
    card_description: "Explore healthy recipes and food guides.",
    modal_title: "Nutrition & Recipes",
    modal_description: "Discover meal ideas and build healthy habits.",
};

static MINDFULNESS_COPY: ChoiceCopy = ChoiceCopy {
    icon: "🧘",
    card_title: "Mindfulness",
    card_description: "Calm your mind with guided meditations.",
    modal_title: "Mindfulness & Meditation",
    modal_description: "Relax and focus with breathing and calmness exercises.",
};

/// Look up copy by raw key, rejecting anything outside the closed set.
pub fn copy_for_key(key: &str) -> Result<&'static ChoiceCopy> {
    key.parse::<Choice>().map(|choice| choice.copy())
}
