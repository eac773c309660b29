use async_trait::async_trait;
use chrono::Utc;
use log::debug;
use std::sync::Arc;

use crate::activities::activities_model::*;
use crate::activities::{ActivityServiceTrait, ActivityStoreTrait};
use crate::errors::ValidationError;
use crate::Result;

/// Message shown when step input is not a positive whole number.
pub const INVALID_STEPS_MESSAGE: &str = "Please enter a valid number of steps";

/// Service for recording and managing activities
pub struct ActivityService {
    activity_store: Arc<dyn ActivityStoreTrait>,
}

impl ActivityService {
    /// Creates a new ActivityService instance with injected dependencies
    pub fn new(activity_store: Arc<dyn ActivityStoreTrait>) -> Self {
        Self { activity_store }
    }
}

/// Parses step input the way the entry form does: surrounding whitespace is
/// ignored and the leading integer is taken, so `"12abc"` reads as 12.
///
/// Input without a leading integer, or with a value that is not positive,
/// is rejected.
pub fn parse_steps_input(input: &str) -> Result<i64> {
    let trimmed = input.trim();
    let sign_len = usize::from(trimmed.starts_with(['+', '-']));
    let digits_len = trimmed[sign_len..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();

    if digits_len == 0 {
        return Err(ValidationError::InvalidInput(INVALID_STEPS_MESSAGE.to_string()).into());
    }

    let steps = trimmed[..sign_len + digits_len]
        .parse::<i64>()
        .map_err(|_| ValidationError::InvalidInput(INVALID_STEPS_MESSAGE.to_string()))?;
    validate_steps(steps)?;
    Ok(steps)
}

fn validate_steps(steps: i64) -> Result<()> {
    if steps <= 0 {
        return Err(ValidationError::InvalidInput(INVALID_STEPS_MESSAGE.to_string()).into());
    }
    Ok(())
}

#[async_trait]
impl ActivityServiceTrait for ActivityService {
    async fn initialize(&self) {
        self.activity_store.initialize().await;
    }

    async fn get_activities(&self) -> Vec<Activity> {
        self.activity_store.list().await
    }

    async fn add_activity(&self, steps: i64) -> Result<()> {
        validate_steps(steps)?;
        let date = Utc::now().timestamp_millis();
        debug!("Recording {} steps at {}", steps, date);
        self.activity_store.insert(steps, date).await;
        Ok(())
    }

    async fn add_activity_from_input(&self, input: &str) -> Result<()> {
        let steps = parse_steps_input(input)?;
        self.add_activity(steps).await
    }

    async fn delete_activity(&self, activity_id: i64) {
        self.activity_store.delete_one(activity_id).await;
    }

    async fn delete_all_activities(&self) {
        self.activity_store.delete_all().await;
    }
}
