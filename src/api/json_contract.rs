use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

use super::RenderModel;

pub const RENDER_MODEL_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderModelJsonContractV1 {
    pub schema_version: u32,
    pub model: RenderModel,
}

impl RenderModel {
    pub fn to_json_contract_v1_pretty(&self) -> ChartResult<String> {
        let payload = RenderModelJsonContractV1 {
            schema_version: RENDER_MODEL_JSON_SCHEMA_V1,
            model: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize render model contract v1: {e}"))
        })
    }

    /// Parses a versioned v1 contract payload.
    pub fn from_json_contract_v1_str(input: &str) -> ChartResult<Self> {
        let payload: RenderModelJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse render model json payload: {e}"))
        })?;
        if payload.schema_version != RENDER_MODEL_JSON_SCHEMA_V1 {
            return Err(ChartError::InvalidData(format!(
                "unsupported render model schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.model)
    }
}
