use crate::DesignDto;

use serde::Serialize;

/// List of designs response
#[derive(Debug, Serialize)]
pub struct DesignListResponse {
    pub items: Vec<DesignDto>,
}

impl DesignListResponse {
    pub fn empty() -> Self {
        Self { items: Vec::new() }
    }
}
