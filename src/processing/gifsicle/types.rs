use serde::Serialize;

/// File sizes around one optimizer run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizeOutcome {
    pub original_size: u64,
    pub optimized_size: u64,
}

impl OptimizeOutcome {
    pub fn saved_bytes(&self) -> i64 {
        self.original_size as i64 - self.optimized_size as i64
    }
}
