use crate::modules::trend::Snapshot;
use crate::utils::client::{ApiError, ApiResult, GameApi};
use async_trait::async_trait;
use chrono::NaiveDate;
use std::collections::HashMap;
use std::sync::Mutex;

/// Serves scripted snapshots in request order.
pub struct MockGameApi {
    ids: HashMap<String, String>,
    daily: Vec<Option<Snapshot>>,
    calls: Mutex<Vec<Option<NaiveDate>>>,
}

impl MockGameApi {
    pub fn new() -> Self {
        Self {
            ids: HashMap::new(),
            daily: Vec::new(),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn with_character(mut self, name: &str, id: &str) -> Self {
        self.ids.insert(name.to_string(), id.to_string());
        self
    }

    pub fn with_daily(mut self, daily: Vec<Option<Snapshot>>) -> Self {
        self.daily = daily;
        self
    }

    pub fn requested_dates(&self) -> Vec<Option<NaiveDate>> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl GameApi for MockGameApi {
    async fn lookup_character_id(&self, name: &str) -> ApiResult<String> {
        self.ids
            .get(name)
            .cloned()
            .ok_or_else(|| ApiError::NotFound(name.to_string()))
    }

    async fn get_snapshot(&self, character_id: &str, date: Option<NaiveDate>) -> ApiResult<Snapshot> {
        let mut calls = self.calls.lock().unwrap();
        let index = calls.len();
        calls.push(date);

        self.daily
            .get(index)
            .cloned()
            .flatten()
            .ok_or_else(|| ApiError::NotFound(character_id.to_string()))
    }
}
