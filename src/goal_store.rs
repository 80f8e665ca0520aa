use crate::errors::{Error, Result};
use crate::models::{Category, Goal, NewGoal, UltimateGoal};
use crate::storage::KeyValueStore;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use tracing::{info, warn};

pub const GOALS_KEY: &str = "userGoals";
pub const ULTIMATE_GOAL_KEY: &str = "ultimateGoalData";

/// Loads and saves the goal list and the ultimate goal.
///
/// Reads never fail: missing, unreadable or malformed data falls back to
/// the seed values. Writes always replace the whole value under its key.
pub struct GoalStore<S> {
    storage: S,
}

impl<S: KeyValueStore> GoalStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub async fn load_goals(&self) -> Vec<Goal> {
        self.load_or_seed(GOALS_KEY).await.unwrap_or_else(seed_goals)
    }

    pub async fn load_ultimate_goal(&self) -> UltimateGoal {
        self.load_or_seed(ULTIMATE_GOAL_KEY)
            .await
            .unwrap_or_else(seed_ultimate_goal)
    }

    pub async fn add_goal(&self, existing: &[Goal], new_goal: NewGoal) -> Result<Vec<Goal>> {
        let id = next_goal_id(existing)?;
        let mut goals = existing.to_vec();
        goals.push(Goal::from_new(id, new_goal));

        self.write(GOALS_KEY, &goals).await?;
        info!(id, count = goals.len(), "goal added");
        Ok(goals)
    }

    pub async fn replace_goals(&self, goals: Vec<Goal>) -> Result<Vec<Goal>> {
        self.write(GOALS_KEY, &goals).await?;
        info!(count = goals.len(), "goals replaced");
        Ok(goals)
    }

    pub async fn save_ultimate_goal(&self, goal: UltimateGoal) -> Result<UltimateGoal> {
        if goal.target < goal.current_amount {
            return Err(Error::validation(
                "target must not be lower than current_amount",
            ));
        }

        self.write(ULTIMATE_GOAL_KEY, &goal).await?;
        info!(goal_target = %goal.target, current = %goal.current_amount, "ultimate goal saved");
        Ok(goal)
    }

    async fn load_or_seed<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = match self.storage.get_item(key).await {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(err) => {
                warn!(key, "failed to read stored data, using defaults: {err}");
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(source) => {
                let err = Error::PersistenceRead {
                    key: key.to_string(),
                    source,
                };
                warn!("{err}, using defaults");
                None
            }
        }
    }

    async fn write<T: serde::Serialize>(&self, key: &str, value: &T) -> Result<()> {
        let payload = serde_json::to_string(value)?;
        self.storage.set_item(key, payload).await
    }
}

pub fn next_goal_id(goals: &[Goal]) -> Result<u64> {
    match goals.iter().map(|goal| goal.id).max() {
        None => Ok(1),
        Some(max) => max
            .checked_add(1)
            .ok_or_else(|| Error::validation("no goal id left after the largest existing id")),
    }
}

pub fn seed_goals() -> Vec<Goal> {
    vec![
        Goal {
            id: 1,
            name: "Cook at home".to_string(),
            description: Some("Skip takeaway on weekdays".to_string()),
            target_amount: Decimal::new(150, 0),
            start_date: date(2026, 1, 1),
            end_date: date(2026, 3, 31),
            category: Category::DiningTakeaway,
            motivation: Some("Put the difference towards the emergency fund".to_string()),
        },
        Goal {
            id: 2,
            name: "Walk to work".to_string(),
            description: Some("Leave the car at home three days a week".to_string()),
            target_amount: Decimal::new(60, 0),
            start_date: date(2026, 2, 1),
            end_date: date(2026, 6, 30),
            category: Category::AutoTransport,
            motivation: None,
        },
        Goal {
            id: 3,
            name: "Read every evening".to_string(),
            description: None,
            target_amount: Decimal::ZERO,
            start_date: date(2026, 1, 15),
            end_date: date(2026, 12, 31),
            category: Category::EntertainmentHobbies,
            motivation: Some("Less screen time".to_string()),
        },
    ]
}

pub fn seed_ultimate_goal() -> UltimateGoal {
    UltimateGoal {
        name: "Emergency fund".to_string(),
        description: "Six months of expenses set aside".to_string(),
        category: "Savings".to_string(),
        deadline: date(2026, 12, 31),
        target: Decimal::new(10_000, 0),
        current_amount: Decimal::new(2_500, 0),
    }
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}
