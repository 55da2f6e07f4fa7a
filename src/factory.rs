//! Factory Method: the creator's logic is fixed, the concrete product is
//! chosen by each creator.

pub trait Product {
    fn operation(&self) -> String;
}

#[derive(Debug)]
pub struct ConcreteProduct1;

impl Product for ConcreteProduct1 {
    fn operation(&self) -> String {
        "{Result of the ConcreteProduct1}".to_string()
    }
}

#[derive(Debug)]
pub struct ConcreteProduct2;

impl Product for ConcreteProduct2 {
    fn operation(&self) -> String {
        "{Result of the ConcreteProduct2}".to_string()
    }
}

pub trait Creator {
    fn factory_method(&self) -> Box<dyn Product>;

    /// Business logic that works with whatever product the creator makes.
    fn some_operation(&self) -> String {
        let product = self.factory_method();
        format!(
            "Creator: The same creator's code has just worked with {}",
            product.operation()
        )
    }
}

#[derive(Debug, Default)]
pub struct ConcreteCreator1;

impl Creator for ConcreteCreator1 {
    fn factory_method(&self) -> Box<dyn Product> {
        Box::new(ConcreteProduct1)
    }
}

#[derive(Debug, Default)]
pub struct ConcreteCreator2;

impl Creator for ConcreteCreator2 {
    fn factory_method(&self) -> Box<dyn Product> {
        Box::new(ConcreteProduct2)
    }
}
