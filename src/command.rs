//! Command: requests as objects an invoker can run without knowing what they do.

use std::rc::Rc;

use tracing::debug;

pub trait Command {
    /// Runs the command and returns the lines it produced.
    fn execute(&self) -> Vec<String>;
}

/// Does its small job on its own.
#[derive(Debug, Clone)]
pub struct SimpleCommand {
    payload: String,
}

impl SimpleCommand {
    pub fn new(payload: impl Into<String>) -> Self {
        Self {
            payload: payload.into(),
        }
    }
}

impl Command for SimpleCommand {
    fn execute(&self) -> Vec<String> {
        vec![format!(
            "SimpleCommand: See, I can do simple things like printing ({})",
            self.payload
        )]
    }
}

/// Holds the business logic commands delegate to.
#[derive(Debug, Default)]
pub struct Receiver;

impl Receiver {
    pub fn do_something(&self, a: &str) -> String {
        format!("Receiver: Working on ({a}).")
    }

    pub fn do_something_else(&self, b: &str) -> String {
        format!("Receiver: Also working on ({b}).")
    }
}

/// Delegates the real work to a shared receiver.
#[derive(Debug, Clone)]
pub struct ComplexCommand {
    receiver: Rc<Receiver>,
    a: String,
    b: String,
}

impl ComplexCommand {
    pub fn new(receiver: Rc<Receiver>, a: impl Into<String>, b: impl Into<String>) -> Self {
        Self {
            receiver,
            a: a.into(),
            b: b.into(),
        }
    }
}

impl Command for ComplexCommand {
    fn execute(&self) -> Vec<String> {
        vec![
            "ComplexCommand: Complex stuff should be done by a receiver object.".to_string(),
            self.receiver.do_something(&self.a),
            self.receiver.do_something_else(&self.b),
        ]
    }
}

#[derive(Default)]
pub struct Invoker {
    on_start: Option<Box<dyn Command>>,
    on_finish: Option<Box<dyn Command>>,
}

impl Invoker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_on_start(&mut self, command: Box<dyn Command>) {
        self.on_start = Some(command);
    }

    pub fn set_on_finish(&mut self, command: Box<dyn Command>) {
        self.on_finish = Some(command);
    }

    /// Runs the start hook, its own work, then the finish hook. Missing hooks
    /// are skipped.
    pub fn do_something_important(&self) -> Vec<String> {
        let mut lines = vec!["Invoker: Does anybody want something done before I begin?".to_string()];
        if let Some(command) = &self.on_start {
            debug!("Invoker: running on_start");
            lines.extend(command.execute());
        }
        lines.push("Invoker: ...doing something really important...".to_string());
        lines.push("Invoker: Does anybody want something done after I finish?".to_string());
        if let Some(command) = &self.on_finish {
            debug!("Invoker: running on_finish");
            lines.extend(command.execute());
        }
        lines
    }
}
