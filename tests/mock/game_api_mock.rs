#![allow(dead_code)]

use async_trait::async_trait;
use chrono::NaiveDate;
use msbao::utils::client::{ApiError, ApiResult, GameApi};
use msbao::Snapshot;
use std::collections::HashMap;
use std::sync::Mutex;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupFailure {
    Service,
    Transport,
}

pub struct MockGameApi {
    ids: HashMap<String, String>,
    lookup_failure: Option<LookupFailure>,
    daily: Vec<Option<Snapshot>>,
    calls: Mutex<Vec<Option<NaiveDate>>>,
}

impl MockGameApi {
    pub fn new() -> Self {
        Self {
            ids: HashMap::new(),
            lookup_failure: None,
            daily: Vec::new(),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn with_character(mut self, name: &str, id: &str) -> Self {
        self.ids.insert(name.to_string(), id.to_string());
        self
    }

    /// Snapshots returned in request order; `None` makes that request fail.
    pub fn with_daily(mut self, daily: Vec<Option<Snapshot>>) -> Self {
        self.daily = daily;
        self
    }

    pub fn with_lookup_failure(mut self, failure: LookupFailure) -> Self {
        self.lookup_failure = Some(failure);
        self
    }

    pub fn steady(name: &str) -> Self {
        Self::new()
            .with_character(name, "ocid-steady")
            .with_daily(TestSnapshotData::steady_week(name))
    }

    pub fn offline() -> Self {
        Self::new().with_lookup_failure(LookupFailure::Transport)
    }

    pub fn requested_dates(&self) -> Vec<Option<NaiveDate>> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl GameApi for MockGameApi {
    async fn lookup_character_id(&self, name: &str) -> ApiResult<String> {
        match self.lookup_failure {
            Some(LookupFailure::Service) => Err(ApiError::Service {
                status: 400,
                name: "OPENAPI00004".to_string(),
                message: "Please input valid parameter".to_string(),
            }),
            Some(LookupFailure::Transport) => {
                Err(ApiError::InvalidResponse("HTTP 503 Service Unavailable".to_string()))
            }
            None => self
                .ids
                .get(name)
                .cloned()
                .ok_or_else(|| ApiError::NotFound(name.to_string())),
        }
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

pub struct TestSnapshotData;

impl TestSnapshotData {
    pub fn snapshot(name: &str, level: u32, exp_rate: f64) -> Snapshot {
        Snapshot::new(name, level, exp_rate)
            .with_class("Bishop")
            .with_world("Elysium")
            .with_guild(Some("Lumiere".to_string()))
    }

    /// Level 260, two percent a day, newest first.
    pub fn steady_week(name: &str) -> Vec<Option<Snapshot>> {
        (0..8)
            .map(|day| Some(Self::snapshot(name, 260, 60.0 - 2.0 * day as f64)))
            .collect()
    }

    pub fn level_up_week(name: &str) -> Vec<Option<Snapshot>> {
        vec![
            Some(Self::snapshot(name, 261, 3.0)),
            Some(Self::snapshot(name, 261, 1.0)),
            Some(Self::snapshot(name, 260, 98.5)),
            Some(Self::snapshot(name, 260, 96.5)),
            None,
            None,
            None,
            None,
        ]
    }
}
