use linked_container::Container;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    // RUST_LOG=trace shows every link and unlink
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let mut container: Container<String> = Container::new();

    println!("=== Container demo ===");

    println!("Empty? {}", container.is_empty());
    println!("Size: {}", container.size());

    println!("\n--- Adding elements ---");
    container.add("First".to_string());
    container.add("Second".to_string());
    container.add("Third".to_string());

    println!("After adding: {}", container);
    println!("Size: {}", container.size());
    println!("Empty? {}", container.is_empty());

    println!("\n--- Reading elements ---");
    for index in 0..3 {
        println!("Element at index {}: {}", index, container.get(index)?);
    }

    println!("\n--- Membership ---");
    println!("Contains 'Second'? {}", container.contains(&"Second".to_string()));
    println!("Contains 'Fifth'? {}", container.contains(&"Fifth".to_string()));

    println!("\n--- Removing elements ---");
    let removed = container.remove(1)?;
    println!("Removed: {}", removed);
    println!("After removing: {}", container);
    println!("Size: {}", container.size());

    println!("\n--- Adding more elements ---");
    container.add("Fourth".to_string());
    container.add("Fifth".to_string());
    println!("After adding: {}", container);

    println!("\n--- Clearing ---");
    container.clear();
    println!("After clearing: {}", container);
    println!("Size: {}", container.size());
    println!("Empty? {}", container.is_empty());

    println!("\n=== Numbers ===");
    let mut numbers: Container<i32> = Container::new();
    numbers.add(10);
    numbers.add(20);
    numbers.add(30);

    println!("Numbers: {}", numbers);
    println!(
        "Sum of first and last: {}",
        numbers.get(0)? + numbers.get(2)?
    );

    Ok(())
}
