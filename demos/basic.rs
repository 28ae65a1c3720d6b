//! Basic example demonstrating the Curator API client.
//!
//! Run with:
//! ```
//! CURATOR_API_URL=http://localhost:8080 cargo run --example basic
//! ```

use curatorapi::{Classification, CuratorClient, Get, Image, List, Tag, User};

#[tokio::main]
async fn main() -> curatorapi::Result<()> {
    // Create client from environment variables
    println!("Creating Curator client...");
    let client = CuratorClient::from_env()?;
    println!("Connected to: {}", client.host_name());

    // List both tag vocabularies
    println!("\n--- Listing Tags ---");
    let wanted = Tag::list(&client, &Classification::Wanted).await?;
    let unwanted = Tag::list(&client, &Classification::Unwanted).await?;
    println!("Found {} wanted, {} unwanted tags", wanted.len(), unwanted.len());

    for tag in wanted.iter().take(5) {
        println!("  - {} ({})", tag.name, tag.id);
    }

    // Walk the images of an origin
    println!("\n--- Listing Images from 'flickr' ---");
    let ids = Image::ids_by_origin(&client, "flickr").await?;
    println!("Found {} images", ids.len());

    if let Some(first) = ids.first() {
        println!("\n--- Getting Image Details ---");
        let image = Image::get(&client, &first.id).await?;
        println!("Image: {}", image.name);
        println!("  ID: {}", image.id);
        println!("  Origin: {}", image.origin);
        println!("  Size: {} bytes", image.size);
        println!("  Tags: {:?}", image.tags);
    }

    // Check the moderation registries
    println!("\n--- Moderation Registries ---");
    let unwanted_users = User::list(&client, &()).await?;
    let unwanted_images = Image::list(&client, &()).await?;
    println!(
        "{} unwanted users, {} unwanted images",
        unwanted_users.len(),
        unwanted_images.len()
    );

    Ok(())
}
