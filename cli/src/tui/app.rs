use metas_core::{CalculationResult, MonthlyBreakdown};

pub struct PlanApp {
    pub result: CalculationResult,
    pub selected: usize,
}

impl PlanApp {
    pub fn new(result: CalculationResult) -> Self {
        Self {
            result,
            selected: 0,
        }
    }

    pub fn next_month(&mut self) {
        if self.selected + 1 < self.result.breakdown.len() {
            self.selected += 1;
        }
    }

    pub fn previous_month(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    pub fn has_previous(&self) -> bool {
        self.selected > 0
    }

    pub fn has_next(&self) -> bool {
        self.selected + 1 < self.result.breakdown.len()
    }

    pub fn current_month(&self) -> Option<&MonthlyBreakdown> {
        self.result.breakdown.get(self.selected)
    }
}
