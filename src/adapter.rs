//! Adapter: expose an incompatible type through the interface clients know.

/// Interface clients are written against.
pub trait Target {
    fn request(&self) -> String {
        "Target: the default target's behavior.".to_string()
    }
}

#[derive(Debug, Default)]
pub struct DefaultTarget;

impl Target for DefaultTarget {}

/// Useful behavior behind an interface clients do not understand.
#[derive(Debug, Default)]
pub struct Adaptee;

impl Adaptee {
    pub fn specific_request(&self) -> String {
        ".eetpadA eht fo roivaheb laicepS".to_string()
    }
}

/// Owns an `Adaptee` and translates its output into the `Target` contract.
#[derive(Debug, Default)]
pub struct Adapter {
    adaptee: Adaptee,
}

impl Adapter {
    pub fn new(adaptee: Adaptee) -> Self {
        Self { adaptee }
    }
}

impl Target for Adapter {
    fn request(&self) -> String {
        let translated: String = self.adaptee.specific_request().chars().rev().collect();
        format!("Adapter: (TRANSLATED) {translated}")
    }
}

pub fn client_code(target: &dyn Target) -> String {
    target.request()
}
