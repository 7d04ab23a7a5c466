use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{fmt::format::FmtSpan, EnvFilter};

use tagtree::{
    error::Result,
    utils::{parse_child_spec, render_to_file},
    Element, HtmlBuilder, Image, Paragraph, Person, Render, Tag,
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Root tag name
    #[arg(short, long, default_value = "ul")]
    root: String,

    /// Child to append to the root, as NAME or NAME=TEXT (repeatable)
    #[arg(short, long = "child", value_name = "NAME[=TEXT]")]
    children: Vec<String>,

    /// Output file path
    #[arg(short, long)]
    output: Option<String>,

    /// Print every construction idiom instead of building from arguments
    #[arg(long)]
    demo: bool,
}

fn main() {
    // Initialize the default subscriber for logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_span_events(FmtSpan::CLOSE)
        .with_target(false) // Don't show target
        .without_time() // Don't show timestamps
        .init(); // Initialize the subscriber

    if let Err(e) = run() {
        error!("{}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = Args::parse();

    if args.demo {
        demo();
        return Ok(());
    }

    let mut builder = HtmlBuilder::new(&args.root);
    for spec in &args.children {
        let (name, text) = parse_child_spec(spec)?;
        builder.add_child(name, text);
    }
    let root = builder.build();

    // Write to file or print to stdout
    if let Some(output_path) = args.output {
        render_to_file(&root, &output_path)?;
        info!("Rendered <{}> to {}", root.name(), output_path);
    } else {
        print!("{}", root);
    }

    Ok(())
}

fn demo() {
    println!("=== Approach 1: Traditional Builder ===");
    let mut builder = HtmlBuilder::new("ul");
    builder.add_child("li", "Hello");
    builder.add_child("li", "World");
    println!("{}", builder.render());

    println!("=== Approach 2: Fluent Interface ===");
    let mut fluent_builder = HtmlBuilder::new("ul");
    fluent_builder.add_child("li", "hello").add_child("li", "world");
    println!("{}", fluent_builder.render());

    println!("=== Approach 3: Static Factory + Fluent ===");
    let static_builder = Element::builder("ul")
        .with_child("li", "First")
        .with_child("li", "Second")
        .build();
    println!("{}", static_builder);

    println!("=== Tag DSL ===");
    let tag: Tag = Paragraph::with_children([
        Paragraph::new("Gotta catch 'em all").into(),
        Image::new("http://pokemon.com/pikachu.png").into(),
    ])
    .into();
    println!("{}", tag.render());

    println!("=== Faceted Builder ===");
    let mut person = Person::create();
    person
        .lives()
        .at("123 London Road")
        .with_postcode("SW1 1GB")
        .in_city("London")
        .works()
        .at("PragmaSoft")
        .as_a("Consultant")
        .earning(10_000_000);
    println!("{}", person.build());
}
