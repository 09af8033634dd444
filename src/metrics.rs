// Performance metrics
// Pure classification and aggregation over the agent roster

use crate::state::Agent;

/// Performance tier derived from an agent's percentage
/// Never stored; recomputed from the score whenever needed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// 90-100%
    Excellent,
    /// 75-89%
    Good,
    /// 60-74%
    Average,
    /// 0-59%
    NeedsImprovement,
}

impl Category {
    /// All tiers, highest first (summary and legend order)
    pub const ALL: [Category; 4] = [
        Category::Excellent,
        Category::Good,
        Category::Average,
        Category::NeedsImprovement,
    ];

    /// Classify a percentage
    /// Each boundary is closed at the lower bound, so 90 is Excellent
    /// and 89 is Good
    pub fn for_percentage(percentage: u8) -> Self {
        if percentage >= 90 {
            Category::Excellent
        } else if percentage >= 75 {
            Category::Good
        } else if percentage >= 60 {
            Category::Average
        } else {
            Category::NeedsImprovement
        }
    }

    /// Display label for the tier
    pub fn label(self) -> &'static str {
        match self {
            Category::Excellent => "Excellent",
            Category::Good => "Good",
            Category::Average => "Average",
            Category::NeedsImprovement => "Needs Improvement",
        }
    }

    /// Score range shown in the legend
    pub fn range_label(self) -> &'static str {
        match self {
            Category::Excellent => "90-100%",
            Category::Good => "75-89%",
            Category::Average => "60-74%",
            Category::NeedsImprovement => "0-59%",
        }
    }
}

/// Mean percentage across the roster, rounded to the nearest integer
/// (ties round up). The roster is seeded non-empty and never shrinks.
pub fn average_percentage(agents: &[Agent]) -> u8 {
    let sum: u32 = agents.iter().map(|a| u32::from(a.percentage)).sum();
    (f64::from(sum) / agents.len() as f64).round() as u8
}

/// Number of agents in each performance tier
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CategoryCounts {
    excellent: usize,
    good: usize,
    average: usize,
    needs_improvement: usize,
}

impl CategoryCounts {
    /// Count the roster into tiers using the same boundaries as the
    /// classifier
    pub fn tally(agents: &[Agent]) -> Self {
        let mut counts = Self::default();
        for agent in agents {
            match Category::for_percentage(agent.percentage) {
                Category::Excellent => counts.excellent += 1,
                Category::Good => counts.good += 1,
                Category::Average => counts.average += 1,
                Category::NeedsImprovement => counts.needs_improvement += 1,
            }
        }
        counts
    }

    /// Count for one tier
    pub fn count(&self, category: Category) -> usize {
        match category {
            Category::Excellent => self.excellent,
            Category::Good => self.good,
            Category::Average => self.average,
            Category::NeedsImprovement => self.needs_improvement,
        }
    }

    /// Sum across all tiers; always equals the roster size
    pub fn total(&self) -> usize {
        self.excellent + self.good + self.average + self.needs_improvement
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::AgentStore;

    #[test]
    fn test_classify_boundaries() {
        assert_eq!(Category::for_percentage(90), Category::Excellent);
        assert_eq!(Category::for_percentage(89), Category::Good);
        assert_eq!(Category::for_percentage(75), Category::Good);
        assert_eq!(Category::for_percentage(74), Category::Average);
        assert_eq!(Category::for_percentage(60), Category::Average);
        assert_eq!(Category::for_percentage(59), Category::NeedsImprovement);
    }

    #[test]
    fn test_classify_extremes() {
        assert_eq!(Category::for_percentage(100), Category::Excellent);
        assert_eq!(Category::for_percentage(0), Category::NeedsImprovement);
    }

    #[test]
    fn test_classify_is_total() {
        // Every representable score lands in exactly one tier
        for p in 0..=u8::MAX {
            let category = Category::for_percentage(p);
            assert!(Category::ALL.contains(&category));
        }
    }

    #[test]
    fn test_average_of_seed_roster() {
        let store = AgentStore::seeded();
        // (85+72+94+68+91+76+88+63) / 8 = 79.625, rounds half-up to 80
        assert_eq!(average_percentage(store.agents()), 80);
    }

    #[test]
    fn test_average_rounds_half_up() {
        let agents = vec![
            Agent::new("1", "A", 50),
            Agent::new("2", "B", 51),
        ];
        // 50.5 rounds up
        assert_eq!(average_percentage(&agents), 51);
    }

    #[test]
    fn test_counts_sum_to_roster_size() {
        let store = AgentStore::seeded();
        let counts = CategoryCounts::tally(store.agents());
        assert_eq!(counts.total(), store.agents().len());
    }

    #[test]
    fn test_counts_of_seed_roster() {
        let store = AgentStore::seeded();
        let counts = CategoryCounts::tally(store.agents());
        // 94 and 91 are Excellent; 85, 76, 88 are Good; 72, 68, 63 are Average
        assert_eq!(counts.count(Category::Excellent), 2);
        assert_eq!(counts.count(Category::Good), 3);
        assert_eq!(counts.count(Category::Average), 3);
        assert_eq!(counts.count(Category::NeedsImprovement), 0);
    }

    #[test]
    fn test_counts_track_updates() {
        let mut store = AgentStore::seeded();
        store.update("1", "10");
        let counts = CategoryCounts::tally(store.agents());
        assert_eq!(counts.count(Category::NeedsImprovement), 1);
        assert_eq!(counts.count(Category::Good), 2);
        assert_eq!(counts.total(), 8);
    }
}
