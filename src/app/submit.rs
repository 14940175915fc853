//! Prediction request logic

use super::App;
use crate::api;
use crate::constants::PREDICT_PATH;
use crate::types::{RequestStatus, ResultsView, SubmitState};
use eframe::egui;
use serde_json::Value;
use std::sync::{Arc, Mutex};
use tracing::{debug, error, info};

/// Run one prediction request to completion and fold the outcome into the
/// shared state, unless a reset or a newer submit made it stale.
async fn run_prediction(
    generation: u64,
    url: String,
    payload: serde_json::Map<String, Value>,
    state: Arc<Mutex<SubmitState>>,
    ctx: egui::Context,
) {
    let client = reqwest::Client::new();
    let outcome = api::request_prediction(&client, &url, &payload).await;

    let mut s = state.lock().unwrap();
    if !s.finish(generation, outcome) {
        debug!(generation, "Discarding stale prediction response");
    }
    drop(s);
    ctx.request_repaint();
}

impl App {
    /// Kick off a prediction request for the current form values. Ignored
    /// while an earlier request is still in flight.
    pub fn submit(&mut self, ctx: &egui::Context) {
        let payload = match api::build_payload(self.form.entries()) {
            Ok(payload) => payload,
            Err(e) => {
                error!(error = %e, "Refusing to submit malformed form");
                self.error_message = Some(e);
                return;
            }
        };

        let Some(generation) = self.submit_state.lock().unwrap().try_begin() else {
            return;
        };

        // Previous results disappear for the duration of the request
        self.results = None;
        self.scroll_to_results = false;

        let url = api::join_url(&self.server_url, PREDICT_PATH);
        info!(generation, url = %url, "Submitting prediction request");

        let state = self.submit_state.clone();
        let ctx = ctx.clone();
        self.runtime
            .spawn(run_prediction(generation, url, payload, state, ctx));
    }

    /// Fold a finished request into the UI state. Called every frame.
    pub fn poll_submission(&mut self) {
        let state = self.submit_state.clone();
        let mut s = state.lock().unwrap();
        match s.status {
            RequestStatus::Succeeded => {
                if let Some(prediction) = s.result.take() {
                    info!(
                        water = prediction.water_requirement_mm_per_day,
                        fertilizer = prediction.fertilizer_requirement_kg_per_week,
                        expected_yield = prediction.expected_yield_kg_per_hectare,
                        "Prediction received"
                    );
                    self.results = Some(ResultsView::new(&prediction));
                    self.scroll_to_results = true;
                }
                s.status = RequestStatus::Idle;
            }
            RequestStatus::Failed => {
                if let Some(err) = s.error.take() {
                    let message = err.message();
                    error!(error = %message, "Prediction request failed");
                    self.error_message = Some(message);
                }
                s.status = RequestStatus::Idle;
            }
            RequestStatus::Idle | RequestStatus::InFlight => {}
        }
    }
}
