//! Radio / CD Player
//!
//! This example drives a two-mode car stereo through a short session.
//!
//! Key concepts:
//! - Entry and exit hooks on states
//! - Self-transitions that fire an action without changing state
//! - Printing the state table
//!
//! Run with: RUST_LOG=turnstile=debug cargo run --example radio

use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use turnstile::{Event, Machine, State};

type Stereo = Machine<String, String>;

fn on_enter_radio(leaving: &State<String, String>) {
    println!("enter radio, leaving [{}]", leaving.id());
}

fn on_exit_radio(entering: &State<String, String>) {
    println!("exit radio, entering [{}]", entering.id());
}

fn on_enter_cdplayer(leaving: &State<String, String>) {
    println!("enter cdplayer, leaving [{}]", leaving.id());
}

fn on_exit_cdplayer(entering: &State<String, String>) {
    println!("exit cdplayer, entering [{}]", entering.id());
}

fn report(event: &Event<String, String>, from: &State<String, String>, to: &State<String, String>) {
    if from.id() == to.id() {
        println!("Action: [{}] No State Change", event.id());
    } else {
        println!("Action: [{}] {} --> {}", event.id(), from.id(), to.id());
    }
}

fn build() -> Result<Stereo, turnstile::BuildError> {
    let mut stereo = Stereo::new();

    stereo
        .add_state("radio".into())
        .bind_entry_action(on_enter_radio)
        .bind_exit_action(on_exit_radio)
        .add_event("switch_radio".into())?;
    stereo
        .add_state("radio".into())
        .add_event_to("switch_cd".into(), "cdplayer".into())?
        .bind_action(report);
    stereo.add_state("radio".into()).add_event("next".into())?.bind_action(report);
    stereo.add_state("radio".into()).add_event("previous".into())?.bind_action(report);

    stereo
        .add_state("cdplayer".into())
        .bind_entry_action(on_enter_cdplayer)
        .bind_exit_action(on_exit_cdplayer)
        .add_event("switch_cd".into())?;
    stereo
        .add_state("cdplayer".into())
        .add_event_to("switch_radio".into(), "radio".into())?
        .bind_action(report);
    stereo.add_state("cdplayer".into()).add_event("next".into())?.bind_action(report);
    stereo.add_state("cdplayer".into()).add_event("previous".into())?.bind_action(report);

    Ok(stereo)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    println!("=== Radio / CD Player ===\n");

    let mut stereo = build()?;
    print!("{}", stereo.state_table());

    for event in [
        "next",
        "previous",
        "switch_cd",
        "next",
        "previous",
        "switch_radio",
        "next",
        "previous",
    ] {
        stereo.dispatch(&event.to_string())?;
    }

    println!("\n=== Example Complete ===");
    Ok(())
}
