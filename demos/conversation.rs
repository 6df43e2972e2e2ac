//! A short trip-planning conversation.
//!
//! Run with `cargo run --example conversation`. Set `WINNEBAGO_DEBUG=1` to
//! see every response payload in the log.

use winnebago::config::{init_logging, EngineConfig};
use winnebago::dialogue::{slots, Conversation, ResponseDescriptor, Slots};
use winnebago::{EngineBuilder, StaticQuote};

fn show(speaker: &str, response: &ResponseDescriptor) {
    println!("{speaker}: {}", response.speech_text);
    if let Some(card) = &response.card {
        println!("  [card] {}: {}", card.title, card.body.replace('\n', " | "));
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = EngineConfig::from_env();
    init_logging(&config)?;

    let engine = EngineBuilder::new().config(config).build();
    let mut conversation = Conversation::new(&engine);

    show("Winnebago", &conversation.launch());

    let script: [(&str, Slots); 6] = [
        ("PickStateIntent", slots([("State", "New Hampshire")])),
        ("NhPlaceIntent", slots([("NhPlace", "hike a mountain")])),
        ("MoreInfoIntent", slots([("MoreInfo", "stay")])),
        ("BackIntent", Slots::new()),
        ("NhPlaceIntent", slots([("NhPlace", "seacoast")])),
        ("MoreInfoIntent", slots([("MoreInfo", "town")])),
    ];

    for (intent, slots) in &script {
        println!("Traveller: {intent} {slots:?}");
        show("Winnebago", &conversation.say(intent, slots)?);
    }

    let quote = engine
        .quote(&StaticQuote::new("Not all those who wander are lost."))
        .await?;
    println!("Winnebago: Before you go: {quote}");

    show("Winnebago", &conversation.say("AMAZON.StopIntent", &Slots::new())?);

    println!();
    println!("Session {}", conversation.id());
    for transition in conversation.history().transitions() {
        println!(
            "  {:<20} {:?} -> {:?}",
            transition.intent, transition.from, transition.to
        );
    }
    if let Some(duration) = conversation.history().duration() {
        println!("  took {duration:?}");
    }

    Ok(())
}
