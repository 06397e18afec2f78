use crate::form::SubmissionVector;
use crate::prediction_gateway::{PredictError, PredictionClient, PredictionResult, ServiceStatus};
use std::{
    sync::mpsc::{Receiver, Sender},
    thread,
};

type TryRecvError = std::sync::mpsc::TryRecvError;

pub(crate) enum JobMessage {
    PredictionFinished(PredictionJobResult),
    StatusChecked(StatusCheckResult),
}

#[derive(Debug)]
pub(crate) struct PredictionJob {
    pub(crate) request_id: u64,
    pub(crate) client: PredictionClient,
    pub(crate) features: SubmissionVector,
}

#[derive(Debug)]
pub(crate) struct PredictionJobResult {
    pub(crate) request_id: u64,
    pub(crate) result: Result<PredictionResult, PredictError>,
}

#[derive(Debug)]
pub(crate) struct StatusCheckResult {
    pub(crate) result: Result<ServiceStatus, PredictError>,
}

/// Background work owned by the controller.
///
/// Jobs run on their own threads and report back over one channel that the
/// UI thread drains each frame.
pub(crate) struct ControllerJobs {
    message_tx: Sender<JobMessage>,
    message_rx: Receiver<JobMessage>,
    next_request_id: u64,
    pub(super) predictions_in_flight: usize,
    pub(super) status_check_in_progress: bool,
}

impl ControllerJobs {
    pub(super) fn new() -> Self {
        let (message_tx, message_rx) = std::sync::mpsc::channel::<JobMessage>();
        Self {
            message_tx,
            message_rx,
            next_request_id: 1,
            predictions_in_flight: 0,
            status_check_in_progress: false,
        }
    }

    pub(super) fn try_recv_message(&self) -> Result<JobMessage, TryRecvError> {
        self.message_rx.try_recv()
    }

    pub(super) fn next_request_id(&mut self) -> u64 {
        let id = self.next_request_id;
        self.next_request_id += 1;
        id
    }

    /// Start a prediction request. Requests are not de-duplicated.
    pub(super) fn begin_prediction(&mut self, job: PredictionJob) {
        self.predictions_in_flight += 1;
        let tx = self.message_tx.clone();
        thread::spawn(move || {
            let result = job.client.predict(&job.features);
            let _ = tx.send(JobMessage::PredictionFinished(PredictionJobResult {
                request_id: job.request_id,
                result,
            }));
        });
    }

    pub(super) fn finish_prediction(&mut self) {
        self.predictions_in_flight = self.predictions_in_flight.saturating_sub(1);
    }

    pub(super) fn begin_status_check(&mut self, client: PredictionClient) {
        if self.status_check_in_progress {
            return;
        }
        self.status_check_in_progress = true;
        let tx = self.message_tx.clone();
        thread::spawn(move || {
            let result = client.service_status();
            let _ = tx.send(JobMessage::StatusChecked(StatusCheckResult { result }));
        });
    }

    pub(super) fn clear_status_check(&mut self) {
        self.status_check_in_progress = false;
    }
}
