//! Example: Using chatexport as a library
//!
//! Walks through reading a transcript, transforming it and writing JSON.
//!
//! Run with: cargo run --example library_usage

use chatexport::prelude::*;

const TRANSCRIPT: &str = "My Conversation
1448470901 bob Hello there!
1448470905 mike how are you?
1448470906 bob I'm good thanks, do you like pie?
1448470910 mike no, let me ask Angus...
1448470912 angus Hell yes! Are we buying some pie?
";

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    println!("=== chatexport Library Usage Examples ===\n");

    // 1. Parse a transcript held in memory
    println!("1. Parsing a transcript:");
    let conversation = TranscriptParser::new().parse_str(TRANSCRIPT)?;
    println!("   {} ({} messages)", conversation.name, conversation.len());
    for msg in &conversation.messages {
        println!("   [{}] {}: {}", msg.epoch_seconds(), msg.sender_id, msg.content);
    }

    // 2. Filter by sender
    println!("\n2. Messages from bob:");
    let bob = conversation.clone().into_builder().filter_by_user("bob").build();
    for msg in &bob.messages {
        println!("   {}", msg.content);
    }

    // 3. Filter by keyword, then redact
    println!("\n3. Messages mentioning pie, with 'pie' and 'no' redacted:");
    let cleaned = ConversationBuilder::new(conversation.clone())
        .filter_by_keyword("pie")
        .redact_words(["pie", "no"])
        .build();
    for msg in &cleaned.messages {
        println!("   {}: {}", msg.sender_id, msg.content);
    }

    // 4. Activity report
    println!("\n4. Activity report:");
    let report = ActivityReport::from_conversation(&conversation);
    for entry in &report {
        println!("   {:<8} {}", entry.sender_id, entry.count);
    }

    // 5. A CLI-style selection run through the processor
    println!("\n5. Selection from options:");
    let selection = Selection::from_options(None, None, vec!["pie".into()], false)?;
    println!("   {}", selection);
    let processed = chatexport::core::process(conversation.clone(), &selection)?;
    println!(
        "   exported {} of {} messages",
        processed.stats.exported_count, processed.stats.original_count
    );

    // 6. Conflicting modes are rejected
    println!("\n6. Conflicting modes:");
    match Selection::from_options(Some("bob".into()), Some("pie".into()), Vec::new(), false) {
        Ok(_) => println!("   unexpectedly accepted"),
        Err(e) => println!("   {}", e),
    }

    // 7. JSON output
    println!("\n7. Compact JSON with report:");
    let json = to_json(&bob, Some(&report), &OutputConfig::compact())?;
    println!("   {}", json);

    println!("\n=== Done ===");
    Ok(())
}
