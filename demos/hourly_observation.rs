//! Fetches one hourly ASOS observation for Seoul, then a week of daily normals.
//!
//! Needs `KMA_API_KEY` in the environment or a `.env` file.

use kma_mcp::{KmaClient, KmaError};

#[tokio::main]
async fn main() -> Result<(), KmaError> {
    let client = KmaClient::from_env()?;

    // --- Hourly observation, Seoul (108) ---
    let observation = client.asos().hourly("202501011200", 108).await?;
    println!("{observation:#}");

    // --- Daily normals, first week of January ---
    let normals = client.climate().daily_normals(1, 1, 1, 7, 108).await?;
    println!("{normals:#}");

    // Validation happens before any request is sent
    match client.asos().hourly("202513011200", 108).await {
        Err(KmaError::Validation(e)) => println!("Rejected locally: {e}"),
        other => println!("Unexpected: {other:?}"),
    }

    client.close();
    Ok(())
}
