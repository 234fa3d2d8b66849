//! Agronomic advisory service

use shared::{Priority, Recommendation};

/// Advisory service returning the current recommendation list
#[derive(Debug, Clone, Copy, Default)]
pub struct AdvisoryService;

impl AdvisoryService {
    pub fn new() -> Self {
        Self
    }

    /// Fixed, ordered list of advisories for the farm
    pub fn recommendations(&self) -> Vec<Recommendation> {
        vec![
            Recommendation {
                title: "Increase irrigation block A".to_string(),
                details: "Moisture is below target by 8%. Schedule a 30-minute drip cycle."
                    .to_string(),
                priority: Priority::High,
            },
            Recommendation {
                title: "Nitrogen boost".to_string(),
                details: "Apply 12 kg/ha urea within 48 hours to support maize growth."
                    .to_string(),
                priority: Priority::Medium,
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_returns_two_recommendations() {
        let recommendations = AdvisoryService::new().recommendations();
        assert_eq!(recommendations.len(), 2);
    }

    #[test]
    fn test_priorities_and_order_are_fixed() {
        let recommendations = AdvisoryService::new().recommendations();
        assert_eq!(recommendations[0].priority, Priority::High);
        assert_eq!(recommendations[0].title, "Increase irrigation block A");
        assert_eq!(recommendations[1].priority, Priority::Medium);
        assert_eq!(recommendations[1].title, "Nitrogen boost");
    }
}
