//! Common types and data structures

use crate::api::{ApiError, Prediction};

/// Lifecycle of the current prediction request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestStatus {
    Idle,
    InFlight,
    Succeeded,
    Failed,
}

/// State shared between the UI thread and the request task.
///
/// `generation` guards against stale answers: every submit (and every
/// reset) bumps it, and a finishing task whose generation no longer
/// matches is dropped on the floor.
pub struct SubmitState {
    pub status: RequestStatus,
    pub generation: u64,
    pub result: Option<Prediction>,
    pub error: Option<ApiError>,
}

impl Default for SubmitState {
    fn default() -> Self {
        Self {
            status: RequestStatus::Idle,
            generation: 0,
            result: None,
            error: None,
        }
    }
}

impl SubmitState {
    /// Begin a new request, returns the generation the task must present
    /// when it finishes. Returns None while an earlier request is still in
    /// flight, submissions are one at a time.
    pub fn try_begin(&mut self) -> Option<u64> {
        if self.is_in_flight() {
            return None;
        }
        self.generation += 1;
        self.status = RequestStatus::InFlight;
        self.result = None;
        self.error = None;
        Some(self.generation)
    }

    /// Record the outcome of a finished request. Returns false (and leaves
    /// the state untouched) when the answer is stale.
    pub fn finish(&mut self, generation: u64, outcome: Result<Prediction, ApiError>) -> bool {
        if generation != self.generation {
            return false;
        }
        match outcome {
            Ok(prediction) => {
                self.status = RequestStatus::Succeeded;
                self.result = Some(prediction);
            }
            Err(err) => {
                self.status = RequestStatus::Failed;
                self.error = Some(err);
            }
        }
        true
    }

    /// Forget about any request still in flight. The task keeps running
    /// but its answer will no longer match the generation.
    pub fn invalidate(&mut self) {
        self.generation += 1;
        self.status = RequestStatus::Idle;
        self.result = None;
        self.error = None;
    }

    pub fn is_in_flight(&self) -> bool {
        self.status == RequestStatus::InFlight
    }
}

/// Prediction results shaped for display: numbers already rounded to the
/// precision the cards show, recommendation text verbatim from the server
#[derive(Debug, Clone, PartialEq)]
pub struct ResultsView {
    pub water: String,
    pub fertilizer: String,
    pub expected_yield: String,
    pub irrigation_recommendation: String,
    pub fertilizer_recommendation: String,
    pub tips: Vec<String>,
    pub received_at: String,
}

impl ResultsView {
    pub fn new(prediction: &Prediction) -> Self {
        Self::with_timestamp(
            prediction,
            chrono::Local::now().format("%H:%M:%S").to_string(),
        )
    }

    fn with_timestamp(prediction: &Prediction, received_at: String) -> Self {
        Self {
            water: format!("{:.2}", prediction.water_requirement_mm_per_day),
            fertilizer: format!("{:.2}", prediction.fertilizer_requirement_kg_per_week),
            expected_yield: format!("{:.0}", prediction.expected_yield_kg_per_hectare),
            irrigation_recommendation: prediction.irrigation_recommendation.clone(),
            fertilizer_recommendation: prediction.fertilizer_recommendation.clone(),
            tips: prediction.yield_optimization_tips.clone(),
            received_at,
        }
    }
}

/// Reachability of the advisory server, shown in the header strip
#[derive(Debug, Clone, PartialEq)]
pub enum ServerStatus {
    Checking,
    Connected { service: String, version: String },
    Unreachable(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample_prediction() -> Prediction {
        Prediction {
            water_requirement_mm_per_day: 5.678,
            fertilizer_requirement_kg_per_week: 12.3,
            expected_yield_kg_per_hectare: 4500.0,
            irrigation_recommendation: "Increase irrigation frequency".into(),
            fertilizer_recommendation: "Apply nitrogen-rich fertilizer".into(),
            yield_optimization_tips: vec!["Monitor soil moisture".into(), "Check for pests".into()],
        }
    }

    #[test]
    fn results_round_to_display_precision() {
        let view = ResultsView::with_timestamp(&sample_prediction(), "12:00:00".into());
        assert_eq!(view.water, "5.68");
        assert_eq!(view.fertilizer, "12.30");
        assert_eq!(view.expected_yield, "4500");
    }

    #[test]
    fn results_keep_recommendations_and_tip_order() {
        let view = ResultsView::with_timestamp(&sample_prediction(), "12:00:00".into());
        assert_eq!(view.irrigation_recommendation, "Increase irrigation frequency");
        assert_eq!(view.fertilizer_recommendation, "Apply nitrogen-rich fertilizer");
        assert_eq!(view.tips, vec!["Monitor soil moisture", "Check for pests"]);
    }

    #[test]
    fn try_begin_marks_in_flight_and_bumps_generation() {
        let mut state = SubmitState::default();
        let first = state.try_begin();
        assert_eq!(first, Some(1));
        assert!(state.is_in_flight());
        state.finish(1, Ok(sample_prediction()));
        let second = state.try_begin();
        assert_eq!(second, Some(2));
    }

    #[test]
    fn second_submission_is_blocked_while_one_is_in_flight() {
        let mut state = SubmitState::default();
        let generation = state.try_begin().unwrap();
        assert_eq!(state.try_begin(), None);
        assert!(state.is_in_flight());
        // the running request is undisturbed, its answer still lands
        assert!(state.finish(generation, Ok(sample_prediction())));
        assert_eq!(state.status, RequestStatus::Succeeded);
    }

    #[test]
    fn finish_success_stores_result_and_clears_loading() {
        let mut state = SubmitState::default();
        let generation = state.try_begin().unwrap();
        assert!(state.finish(generation, Ok(sample_prediction())));
        assert_eq!(state.status, RequestStatus::Succeeded);
        assert!(!state.is_in_flight());
        assert!(state.result.is_some());
        assert!(state.error.is_none());
    }

    #[test]
    fn finish_failure_stores_error_and_clears_loading() {
        for outcome in [
            ApiError::Server("bad input".into()),
            ApiError::Transport("connection refused".into()),
        ] {
            let mut state = SubmitState::default();
            let generation = state.try_begin().unwrap();
            assert!(state.finish(generation, Err(outcome.clone())));
            assert_eq!(state.status, RequestStatus::Failed);
            assert!(!state.is_in_flight());
            assert_eq!(state.error, Some(outcome));
        }
    }

    #[test]
    fn a_new_submission_clears_the_previous_outcome() {
        let mut state = SubmitState::default();
        let generation = state.try_begin().unwrap();
        state.finish(generation, Ok(sample_prediction()));
        state.try_begin().unwrap();
        assert!(state.result.is_none());
        assert!(state.error.is_none());
        assert!(state.is_in_flight());
    }

    #[test]
    fn stale_answer_is_discarded() {
        let mut state = SubmitState::default();
        let old = state.try_begin().unwrap();
        state.invalidate();
        assert!(!state.finish(old, Ok(sample_prediction())));
        assert_eq!(state.status, RequestStatus::Idle);
        assert!(state.result.is_none());
    }

    #[test]
    fn superseded_request_cannot_overwrite_the_newer_one() {
        // reset while in flight, then submit again: two answers on the way
        let mut state = SubmitState::default();
        let old = state.try_begin().unwrap();
        state.invalidate();
        let newer = state.try_begin().unwrap();
        assert!(!state.finish(old, Err(ApiError::Transport("timed out".into()))));
        assert!(state.is_in_flight());
        assert!(state.finish(newer, Ok(sample_prediction())));
        assert_eq!(state.status, RequestStatus::Succeeded);
    }

    #[test]
    fn invalidate_clears_an_in_flight_request() {
        let mut state = SubmitState::default();
        state.try_begin();
        state.invalidate();
        assert_eq!(state.status, RequestStatus::Idle);
        assert!(!state.is_in_flight());
    }
}
