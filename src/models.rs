use crate::errors::{Error, Result};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Food & Groceries")]
    FoodGroceries,
    #[serde(rename = "Dining & Takeaway")]
    DiningTakeaway,
    #[serde(rename = "Drinks & Beverages")]
    DrinksBeverages,
    #[serde(rename = "Home & Cleaning")]
    HomeCleaning,
    #[serde(rename = "Health & Medicine")]
    HealthMedicine,
    #[serde(rename = "Beauty & Personal Care")]
    BeautyPersonalCare,
    #[serde(rename = "Fashion & Accessories")]
    FashionAccessories,
    #[serde(rename = "Home & Garden")]
    HomeGarden,
    #[serde(rename = "Electronics & Appliances")]
    ElectronicsAppliances,
    #[serde(rename = "Entertainment & Hobbies")]
    EntertainmentHobbies,
    #[serde(rename = "Sports & Recreation")]
    SportsRecreation,
    #[serde(rename = "Auto & Transport")]
    AutoTransport,
    #[serde(rename = "Baby & Kids")]
    BabyKids,
    #[serde(rename = "Pet Care")]
    PetCare,
    #[serde(rename = "Construction & DIY")]
    ConstructionDiy,
    #[serde(rename = "Education & Office")]
    EducationOffice,
    #[serde(rename = "Services")]
    Services,
    #[serde(rename = "Fees & Miscellaneous")]
    FeesMiscellaneous,
}

/// A date-bounded goal, optionally carrying a monetary target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub target_amount: Decimal,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub category: Category,
    #[serde(default)]
    pub motivation: Option<String>,
}

/// Goal fields that passed validation and are waiting for an id.
#[derive(Debug, Clone, PartialEq)]
pub struct NewGoal {
    pub name: String,
    pub description: Option<String>,
    pub target_amount: Decimal,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub category: Category,
    pub motivation: Option<String>,
}

impl Goal {
    pub fn from_new(id: u64, new_goal: NewGoal) -> Self {
        Self {
            id,
            name: new_goal.name,
            description: new_goal.description,
            target_amount: new_goal.target_amount,
            start_date: new_goal.start_date,
            end_date: new_goal.end_date,
            category: new_goal.category,
            motivation: new_goal.motivation,
        }
    }
}

/// The single featured savings goal, tracked by amount instead of time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UltimateGoal {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    pub deadline: NaiveDate,
    pub target: Decimal,
    pub current_amount: Decimal,
}

#[derive(Debug, Deserialize)]
pub struct NewGoalRequest {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub target_amount: Decimal,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub category: Category,
    #[serde(default)]
    pub motivation: Option<String>,
}

impl NewGoalRequest {
    pub fn validate(self) -> Result<NewGoal> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(Error::validation("name must not be empty"));
        }
        if self.target_amount < Decimal::ZERO {
            return Err(Error::validation("target_amount must not be negative"));
        }
        if self.start_date > self.end_date {
            return Err(Error::validation("start_date must not be after end_date"));
        }

        Ok(NewGoal {
            name: name.to_string(),
            description: non_blank(self.description),
            target_amount: self.target_amount,
            start_date: self.start_date,
            end_date: self.end_date,
            category: self.category,
            motivation: non_blank(self.motivation),
        })
    }
}

/// One entry of a replace-all payload: a goal that already carries its id.
#[derive(Debug, Deserialize)]
pub struct GoalRequest {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub target_amount: Decimal,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub category: Category,
    #[serde(default)]
    pub motivation: Option<String>,
}

impl GoalRequest {
    pub fn validate(self) -> Result<Goal> {
        let id = self.id;
        let fields = NewGoalRequest {
            name: self.name,
            description: self.description,
            target_amount: self.target_amount,
            start_date: self.start_date,
            end_date: self.end_date,
            category: self.category,
            motivation: self.motivation,
        }
        .validate()
        .map_err(|err| match err {
            Error::Validation(message) => Error::Validation(format!("goal {id}: {message}")),
            other => other,
        })?;

        Ok(Goal::from_new(id, fields))
    }
}

#[derive(Debug, Deserialize)]
pub struct ReplaceGoalsRequest {
    pub goals: Vec<GoalRequest>,
}

impl ReplaceGoalsRequest {
    /// Ids must be unique, non-zero and leave room for the next generated id.
    pub fn validate(self) -> Result<Vec<Goal>> {
        let mut seen = HashSet::with_capacity(self.goals.len());
        let mut goals = Vec::with_capacity(self.goals.len());
        for request in self.goals {
            if request.id == 0 || request.id == u64::MAX {
                return Err(Error::validation(format!("goal id {} is out of range", request.id)));
            }
            if !seen.insert(request.id) {
                return Err(Error::validation(format!("duplicate goal id {}", request.id)));
            }
            goals.push(request.validate()?);
        }
        Ok(goals)
    }
}

#[derive(Debug, Deserialize)]
pub struct UltimateGoalRequest {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    pub deadline: NaiveDate,
    pub target: Decimal,
    pub current_amount: Decimal,
}

impl UltimateGoalRequest {
    pub fn validate(self) -> Result<UltimateGoal> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(Error::validation("name must not be empty"));
        }
        if self.target <= Decimal::ZERO {
            return Err(Error::validation("target must be positive"));
        }
        if self.current_amount < Decimal::ZERO {
            return Err(Error::validation("current_amount must not be negative"));
        }

        Ok(UltimateGoal {
            name: name.to_string(),
            description: self.description.trim().to_string(),
            category: self.category.trim().to_string(),
            deadline: self.deadline,
            target: self.target,
            current_amount: self.current_amount,
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty())
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GoalsResponse {
    pub goals: Vec<Goal>,
}

#[derive(Debug, Serialize)]
pub struct GoalProgress {
    #[serde(flatten)]
    pub goal: Goal,
    pub progress: u8,
}

#[derive(Debug, Serialize)]
pub struct GoalProgressResponse {
    pub goals: Vec<GoalProgress>,
}

#[derive(Debug, Serialize)]
pub struct UltimateGoalResponse {
    pub ultimate_goal: UltimateGoal,
    pub progress: u8,
}

#[derive(Debug, Deserialize)]
pub struct AskQuery {
    #[serde(default)]
    pub prompt: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AskResponse {
    #[serde(alias = "response")]
    pub answer: String,
}
