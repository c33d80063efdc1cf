use serde::Deserialize;

pub const DEFAULT_DESIGN_LIMIT: u64 = 50;

/// Query parameters for listing designs
#[derive(Debug, Default, Deserialize)]
pub struct ListDesignsQuery {
    /// Maximum number of designs (default 50)
    pub limit: Option<i64>,
}

impl ListDesignsQuery {
    /// Missing or zero means the default; negative values count by magnitude
    pub fn effective_limit(&self) -> u64 {
        match self.limit {
            None | Some(0) => DEFAULT_DESIGN_LIMIT,
            Some(n) => n.unsigned_abs(),
        }
    }
}
