//! Builder: assemble a product step by step, optionally driven by a director.

use std::fmt;

use tracing::debug;

/// Product assembled by a builder. Parts keep the order they were added in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Product {
    parts: Vec<String>,
}

impl Product {
    pub fn add(&mut self, part: impl Into<String>) {
        self.parts.push(part.into());
    }

    pub fn parts(&self) -> &[String] {
        &self.parts
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Product parts: {}", self.parts.join(", "))
    }
}

/// Construction steps shared by all builders.
pub trait ProductBuilder {
    fn produce_part_a(&mut self);
    fn produce_part_b(&mut self);
    fn produce_part_c(&mut self);
}

#[derive(Debug, Default)]
pub struct ConcreteBuilder {
    product: Product,
}

impl ConcreteBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hands out the finished product and starts over with a blank one.
    pub fn build(&mut self) -> Product {
        debug!(parts = self.product.parts.len(), "Builder: product taken");
        std::mem::take(&mut self.product)
    }
}

impl ProductBuilder for ConcreteBuilder {
    fn produce_part_a(&mut self) {
        self.product.add("PartA1");
    }

    fn produce_part_b(&mut self) {
        self.product.add("PartB1");
    }

    fn produce_part_c(&mut self) {
        self.product.add("PartC1");
    }
}

/// Knows the step order for the stock configurations. Optional: clients can
/// drive a builder directly.
#[derive(Debug, Default)]
pub struct Director;

impl Director {
    pub fn build_minimal_viable_product(&self, builder: &mut dyn ProductBuilder) {
        builder.produce_part_a();
    }

    pub fn build_full_featured_product(&self, builder: &mut dyn ProductBuilder) {
        builder.produce_part_a();
        builder.produce_part_b();
        builder.produce_part_c();
    }
}
