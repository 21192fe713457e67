#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnrichmentThresholds {
    /// Keep categories with q strictly below this.
    pub fdr_thresh: f64,
    /// Keep categories with p strictly below this.
    pub p_thresh: f64,
}

impl Default for EnrichmentThresholds {
    fn default() -> Self {
        Self {
            fdr_thresh: 0.25,
            p_thresh: 1e-3,
        }
    }
}

impl EnrichmentThresholds {
    pub fn validate(&self) -> Result<(), String> {
        if !self.fdr_thresh.is_finite() {
            return Err(format!("fdr threshold must be finite, got {}", self.fdr_thresh));
        }
        if !self.p_thresh.is_finite() {
            return Err(format!("p threshold must be finite, got {}", self.p_thresh));
        }
        Ok(())
    }

    pub fn passes(&self, p_value: f64, q_value: f64) -> bool {
        q_value < self.fdr_thresh && p_value < self.p_thresh
    }
}
