//! Decorator: wrap a component to extend its result without changing its
//! interface.

pub trait Component {
    fn operation(&self) -> String;
}

#[derive(Debug, Default)]
pub struct ConcreteComponent;

impl Component for ConcreteComponent {
    fn operation(&self) -> String {
        "ConcreteComponent".to_string()
    }
}

pub struct DecoratorA {
    inner: Box<dyn Component>,
}

impl DecoratorA {
    pub fn new(inner: Box<dyn Component>) -> Self {
        Self { inner }
    }
}

impl Component for DecoratorA {
    fn operation(&self) -> String {
        format!("DecoratorA({})", self.inner.operation())
    }
}

pub struct DecoratorB {
    inner: Box<dyn Component>,
}

impl DecoratorB {
    pub fn new(inner: Box<dyn Component>) -> Self {
        Self { inner }
    }
}

impl Component for DecoratorB {
    fn operation(&self) -> String {
        format!("DecoratorB({})", self.inner.operation())
    }
}
