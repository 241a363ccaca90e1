//! # chatexport CLI
//!
//! Command-line interface for chatexport library.

use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;
use tracing_subscriber::EnvFilter;

use chatexport::ExportError;
use chatexport::cli::Args;
use chatexport::exporter::{Exporter, ensure_json_extension};

fn main() {
    let args = <Args as ClapParser>::parse();
    init_tracing(args.verbose);

    if let Err(e) = run(&args) {
        eprintln!("❌ Error: {}", e);
        process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

fn run(args: &Args) -> Result<(), ExportError> {
    let total_start = Instant::now();

    // Reject bad flag combinations before touching any file
    let selection = args.selection()?;
    ensure_json_extension(&args.output)?;

    println!("📦 chatexport v{}", env!("CARGO_PKG_VERSION"));
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("📂 Input:   {}", args.input);
    println!("💾 Output:  {}", args.output);
    println!("🔧 Mode:    {}", selection);
    if args.skip_malformed {
        println!("⏭️  Skipping malformed lines");
    }
    println!();

    let exporter = Exporter::with_config(args.export_config());
    let summary = exporter.export(&args.input, &args.output, &selection)?;

    println!(
        "✅ Conversation exported from '{}' to '{}'",
        args.input,
        summary.output_path.display()
    );

    println!();
    println!("📊 Summary:");
    println!("   Conversation: {}", summary.conversation_name);
    println!("   Original:     {} messages", summary.original_count);
    println!("   Exported:     {} messages", summary.exported_count);
    if let Some(senders) = summary.report_senders {
        println!("   Activity:     {} senders", senders);
    }
    println!(
        "   Total time:   {:.2}s",
        total_start.elapsed().as_secs_f64()
    );

    Ok(())
}
