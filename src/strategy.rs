//! Strategy: the context delegates the algorithm and can swap it at runtime.

pub trait Strategy {
    fn name(&self) -> &str;
    fn execute(&self, data: &[&str]) -> Vec<String>;
}

#[derive(Debug, Default)]
pub struct Ascending;

impl Strategy for Ascending {
    fn name(&self) -> &str {
        "ascending"
    }

    fn execute(&self, data: &[&str]) -> Vec<String> {
        let mut sorted: Vec<String> = data.iter().map(|s| s.to_string()).collect();
        sorted.sort();
        sorted
    }
}

#[derive(Debug, Default)]
pub struct Descending;

impl Strategy for Descending {
    fn name(&self) -> &str {
        "descending"
    }

    fn execute(&self, data: &[&str]) -> Vec<String> {
        let mut sorted: Vec<String> = data.iter().map(|s| s.to_string()).collect();
        sorted.sort_by(|a, b| b.cmp(a));
        sorted
    }
}

pub struct Context {
    strategy: Box<dyn Strategy>,
}

impl Context {
    pub fn new(strategy: Box<dyn Strategy>) -> Self {
        Self { strategy }
    }

    pub fn strategy(&self) -> &dyn Strategy {
        self.strategy.as_ref()
    }

    pub fn set_strategy(&mut self, strategy: Box<dyn Strategy>) {
        self.strategy = strategy;
    }

    /// Sorts the fixed sample data with the current strategy and joins it
    /// with commas.
    pub fn do_some_business_logic(&self) -> String {
        self.strategy.execute(&["a", "b", "c", "d", "e"]).join(",")
    }
}
