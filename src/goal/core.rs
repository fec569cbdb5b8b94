//! Defines the core data model for savings goals.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use time::Date;

use crate::{
    Error,
    store::{Collection, Record, iso_date, optional_text},
};

/// What a goal is saving for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GoalCategory {
    /// General savings.
    #[serde(rename = "economia")]
    Savings,
    /// A trip.
    #[serde(rename = "viagem")]
    Travel,
    /// A home or home improvements.
    #[serde(rename = "casa")]
    Home,
    /// A vehicle.
    #[serde(rename = "carro")]
    Car,
    /// Courses and studies.
    #[serde(rename = "educacao")]
    Education,
    /// An emergency fund.
    #[serde(rename = "emergencia")]
    Emergency,
    /// Retirement.
    #[serde(rename = "aposentadoria")]
    Retirement,
    /// Anything else.
    #[serde(rename = "outros")]
    Other,
}

impl GoalCategory {
    /// Every category, in the order offered by the create form.
    pub const ALL: [GoalCategory; 8] = [
        GoalCategory::Savings,
        GoalCategory::Travel,
        GoalCategory::Home,
        GoalCategory::Car,
        GoalCategory::Education,
        GoalCategory::Emergency,
        GoalCategory::Retirement,
        GoalCategory::Other,
    ];

    /// The value used in forms and stored data.
    pub fn as_str(self) -> &'static str {
        match self {
            GoalCategory::Savings => "economia",
            GoalCategory::Travel => "viagem",
            GoalCategory::Home => "casa",
            GoalCategory::Car => "carro",
            GoalCategory::Education => "educacao",
            GoalCategory::Emergency => "emergencia",
            GoalCategory::Retirement => "aposentadoria",
            GoalCategory::Other => "outros",
        }
    }

    /// The name shown to the user.
    pub fn label(self) -> &'static str {
        match self {
            GoalCategory::Savings => "Economia",
            GoalCategory::Travel => "Viagem",
            GoalCategory::Home => "Casa",
            GoalCategory::Car => "Carro",
            GoalCategory::Education => "Educação",
            GoalCategory::Emergency => "Emergência",
            GoalCategory::Retirement => "Aposentadoria",
            GoalCategory::Other => "Outros",
        }
    }

    /// The emoji shown next to goals of this category.
    pub fn icon(self) -> &'static str {
        match self {
            GoalCategory::Savings => "💰",
            GoalCategory::Travel => "✈️",
            GoalCategory::Home => "🏠",
            GoalCategory::Car => "🚗",
            GoalCategory::Education => "📚",
            GoalCategory::Emergency => "🚨",
            GoalCategory::Retirement => "👴",
            GoalCategory::Other => "🎯",
        }
    }
}

impl FromStr for GoalCategory {
    type Err = Error;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        GoalCategory::ALL
            .into_iter()
            .find(|category| category.as_str() == text)
            .ok_or_else(|| Error::InvalidField {
                field: "categoria",
                value: text.to_owned(),
            })
    }
}

/// An amount of money to save up by a deadline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    /// The ID of the goal.
    pub id: i64,
    /// A short name for the goal.
    #[serde(rename = "nome")]
    pub name: String,
    /// An optional longer description.
    #[serde(rename = "descricao", default, with = "optional_text")]
    pub description: Option<String>,
    /// How much money the goal needs.
    #[serde(rename = "valorMeta")]
    pub target_amount: f64,
    /// How much money has been saved so far.
    #[serde(rename = "valorAtual", default)]
    pub current_amount: f64,
    /// The day the money should be saved by.
    #[serde(rename = "dataLimite", with = "iso_date")]
    pub deadline: Date,
    /// What the goal is saving for.
    #[serde(rename = "categoria")]
    pub category: GoalCategory,
    /// The day the goal was created. Never changes.
    #[serde(rename = "dataCriacao", with = "iso_date")]
    pub created_on: Date,
}

impl Goal {
    /// How much is still missing to reach the target, never negative.
    pub fn remaining(&self) -> f64 {
        (self.target_amount - self.current_amount).max(0.0)
    }
}

impl Record for Goal {
    const COLLECTION: Collection = Collection::Goals;

    fn id(&self) -> i64 {
        self.id
    }
}
