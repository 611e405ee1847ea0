use super::answer::{compose_answer, UNMAPPED_ANSWER};
use super::classify::classify_departments;
use super::evidence::to_evidence_item;
use super::rank::rank_and_select;
use super::types::{DeepQueryRequest, DeepQueryResponse, EvidenceItem};
use super::DeepQueryError;
use crate::db::RecordStore;

/// Deep query orchestrator.
///
/// Coordinates: validate → resolve patient → classify → rank/select →
/// format → compose. Holds no state beyond the borrowed store.
pub struct DeepQueryEngine<'a> {
    store: &'a dyn RecordStore,
}

impl<'a> DeepQueryEngine<'a> {
    pub fn new(store: &'a dyn RecordStore) -> Self {
        Self { store }
    }

    pub fn run(&self, request: &DeepQueryRequest) -> Result<DeepQueryResponse, DeepQueryError> {
        // Step 1: Validate inputs
        let patient_id = request.resolved_patient_id();
        if patient_id.is_empty() {
            return Err(DeepQueryError::InvalidRequest(
                "patient_id (or term) is required".into(),
            ));
        }

        let question = request.resolved_question();
        if question.is_empty() {
            return Err(DeepQueryError::InvalidRequest("question is required".into()));
        }

        // Step 2: Resolve the patient
        let profile = self
            .store
            .find_profile(patient_id)?
            .ok_or_else(|| DeepQueryError::NotFound(patient_id.to_string()))?;

        // Step 3: Classify
        let departments = classify_departments(question);
        if departments.is_empty() {
            tracing::info!(patient_id, "Deep query matched no department");
            return Ok(DeepQueryResponse {
                patient_id: patient_id.to_string(),
                matched_departments: Vec::new(),
                answer: UNMAPPED_ANSWER.to_string(),
                evidence: Vec::new(),
            });
        }

        // Step 4: Gather evidence, department by department in declaration order
        let mut evidence: Vec<EvidenceItem> = Vec::new();
        for &category in &departments {
            let records = rank_and_select(self.store, patient_id, category)?;
            evidence.extend(records.iter().map(|r| to_evidence_item(category, r)));
        }

        // Step 5: Compose
        let answer = compose_answer(&profile.name, patient_id, &departments, evidence.len());

        tracing::info!(
            patient_id,
            departments = departments.len(),
            evidence = evidence.len(),
            "Deep query answered"
        );

        Ok(DeepQueryResponse {
            patient_id: patient_id.to_string(),
            matched_departments: departments.iter().map(|c| c.as_str().to_string()).collect(),
            answer,
            evidence,
        })
    }
}
