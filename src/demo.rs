//! Demo drivers: one fixed scenario per pattern, returned as transcript lines.

use std::fmt;
use std::rc::Rc;

use clap::ValueEnum;
use tracing::{info, instrument};

use crate::adapter::{self, Adaptee, Adapter, DefaultTarget};
use crate::builder::{ConcreteBuilder, Director, ProductBuilder};
use crate::command::{ComplexCommand, Invoker, Receiver, SimpleCommand};
use crate::composite::{self, Component};
use crate::config::Settings;
use crate::decorator::{self, ConcreteComponent, DecoratorA, DecoratorB};
use crate::errors::PatternResult;
use crate::facade::{Facade, Subsystem1, Subsystem2};
use crate::factory::{ConcreteCreator1, ConcreteCreator2, Creator};
use crate::observer::{LowStateObserver, Observer, Reaction, Subject, ZeroOrHighObserver};
use crate::strategy::{Ascending, Context, Descending};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DemoKind {
    Adapter,
    Builder,
    Command,
    Composite,
    Decorator,
    Facade,
    Factory,
    Observer,
    Strategy,
}

impl DemoKind {
    pub const ALL: [DemoKind; 9] = [
        DemoKind::Adapter,
        DemoKind::Builder,
        DemoKind::Command,
        DemoKind::Composite,
        DemoKind::Decorator,
        DemoKind::Facade,
        DemoKind::Factory,
        DemoKind::Observer,
        DemoKind::Strategy,
    ];

    pub fn summary(&self) -> &'static str {
        match self {
            DemoKind::Adapter => "make an incompatible interface usable",
            DemoKind::Builder => "assemble a product step by step",
            DemoKind::Command => "wrap requests as objects",
            DemoKind::Composite => "treat leaves and branches uniformly",
            DemoKind::Decorator => "wrap a component to extend it",
            DemoKind::Facade => "one entry point over subsystems",
            DemoKind::Factory => "let creators pick the product",
            DemoKind::Observer => "broadcast state changes to subscribers",
            DemoKind::Strategy => "swap the algorithm at runtime",
        }
    }
}

impl fmt::Display for DemoKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DemoKind::Adapter => "adapter",
            DemoKind::Builder => "builder",
            DemoKind::Command => "command",
            DemoKind::Composite => "composite",
            DemoKind::Decorator => "decorator",
            DemoKind::Facade => "facade",
            DemoKind::Factory => "factory",
            DemoKind::Observer => "observer",
            DemoKind::Strategy => "strategy",
        };
        write!(f, "{name}")
    }
}

#[instrument(level = "debug", skip(settings))]
pub fn run(kind: DemoKind, settings: &Settings) -> PatternResult<Vec<String>> {
    info!("Running demo: {kind}");
    match kind {
        DemoKind::Adapter => Ok(adapter_demo()),
        DemoKind::Builder => Ok(builder_demo()),
        DemoKind::Command => Ok(command_demo()),
        DemoKind::Composite => composite_demo(settings),
        DemoKind::Decorator => Ok(decorator_demo()),
        DemoKind::Facade => Ok(facade_demo()),
        DemoKind::Factory => Ok(factory_demo()),
        DemoKind::Observer => observer_demo(settings),
        DemoKind::Strategy => Ok(strategy_demo()),
    }
}

/// Every demo in order, each paired with its transcript.
pub fn run_all(settings: &Settings) -> PatternResult<Vec<(DemoKind, Vec<String>)>> {
    DemoKind::ALL
        .iter()
        .map(|&kind| run(kind, settings).map(|lines| (kind, lines)))
        .collect()
}

fn adapter_demo() -> Vec<String> {
    let adaptee = Adaptee;
    vec![
        "Client: I can work just fine with the Target objects:".to_string(),
        adapter::client_code(&DefaultTarget),
        "Client: The Adaptee class has a weird interface. See, I don't understand it:".to_string(),
        format!("Adaptee: {}", adaptee.specific_request()),
        "Client: But I can work with it via the Adapter:".to_string(),
        adapter::client_code(&Adapter::new(adaptee)),
    ]
}

fn builder_demo() -> Vec<String> {
    let director = Director;
    let mut builder = ConcreteBuilder::new();
    let mut lines = vec!["Standard basic product:".to_string()];
    director.build_minimal_viable_product(&mut builder);
    lines.push(builder.build().to_string());

    lines.push("Standard full featured product:".to_string());
    director.build_full_featured_product(&mut builder);
    lines.push(builder.build().to_string());

    lines.push("Custom product:".to_string());
    builder.produce_part_a();
    builder.produce_part_b();
    lines.push(builder.build().to_string());
    lines
}

fn command_demo() -> Vec<String> {
    let mut invoker = Invoker::new();
    invoker.set_on_start(Box::new(SimpleCommand::new("Say Hi!")));
    let receiver = Rc::new(Receiver);
    invoker.set_on_finish(Box::new(ComplexCommand::new(
        receiver,
        "Send email",
        "Save report",
    )));
    invoker.do_something_important()
}

fn composite_demo(settings: &Settings) -> PatternResult<Vec<String>> {
    let style = &settings.composite;
    let simple = Component::leaf();
    let mut lines = vec![
        "Client: I've got a simple component:".to_string(),
        format!("RESULT: {}", simple.operation_with(style)),
    ];

    let tree = composite::sample_tree()?;
    lines.push("Client: Now I've got a composite tree:".to_string());
    lines.push(format!("RESULT: {}", tree.operation_with(style)));

    lines.push("Client: I don't need to check the components classes even when managing the tree:".to_string());
    composite::add_if_composite(&tree, &simple)?;
    lines.push(format!("RESULT: {}", tree.operation_with(style)));
    Ok(lines)
}

fn decorator_demo() -> Vec<String> {
    let decorated = DecoratorB::new(Box::new(DecoratorA::new(Box::new(ConcreteComponent))));
    vec![
        "Client: I've got a simple component:".to_string(),
        format!("RESULT: {}", decorator::Component::operation(&ConcreteComponent)),
        "Client: Now I've got a decorated component:".to_string(),
        format!("RESULT: {}", decorator::Component::operation(&decorated)),
    ]
}

fn facade_demo() -> Vec<String> {
    Facade::new(Some(Subsystem1), Some(Subsystem2)).operation()
}

fn factory_demo() -> Vec<String> {
    let creators: [(&str, &dyn Creator); 2] = [
        ("ConcreteCreator1", &ConcreteCreator1),
        ("ConcreteCreator2", &ConcreteCreator2),
    ];
    creators
        .iter()
        .flat_map(|(name, creator)| {
            [
                format!("App: Launched with the {name}."),
                "Client: I'm not aware of the creator's class, but it still works.".to_string(),
                creator.some_operation(),
            ]
        })
        .collect()
}

fn reaction_lines(reactions: Vec<Reaction>) -> impl Iterator<Item = String> {
    reactions
        .into_iter()
        .map(|r| format!("{}: {}", r.observer, r.message))
}

fn observer_demo(settings: &Settings) -> PatternResult<Vec<String>> {
    let observer_settings = &settings.observer;
    let mut subject = Subject::from_settings(observer_settings)?;

    let observer_a = Rc::new(LowStateObserver {
        limit: observer_settings.low_limit,
    });
    let observer_b: Rc<dyn Observer> = Rc::new(ZeroOrHighObserver {
        floor: observer_settings.high_floor,
    });

    let mut lines = Vec::new();
    subject.attach(observer_a.clone());
    lines.push("Subject: Attached an observer.".to_string());
    subject.attach(observer_b);
    lines.push("Subject: Attached an observer.".to_string());

    for round in 0..3 {
        if round == 2 {
            subject.detach(&observer_a)?;
            lines.push("Subject: Detached an observer.".to_string());
        }
        lines.push("Subject: I'm doing something important.".to_string());
        let state = subject.change_state();
        lines.push(format!("Subject: My state has just changed to: {state}"));
        lines.push("Subject: Notifying observers...".to_string());
        lines.extend(reaction_lines(subject.notify()));
    }
    Ok(lines)
}

fn strategy_demo() -> Vec<String> {
    let mut context = Context::new(Box::new(Ascending));
    let mut lines = vec![
        "Client: Strategy is set to normal sorting.".to_string(),
        "Context: Sorting data using the strategy (not sure how it'll do it)".to_string(),
        context.do_some_business_logic(),
    ];
    context.set_strategy(Box::new(Descending));
    lines.push("Client: Strategy is set to reverse sorting.".to_string());
    lines.push("Context: Sorting data using the strategy (not sure how it'll do it)".to_string());
    lines.push(context.do_some_business_logic());
    lines
}
