//! Lists the MCP tool table and runs one tool, printing the text an MCP host
//! would receive.

use kma_mcp::{KmaError, ToolTable};
use serde_json::json;

#[tokio::main]
async fn main() -> Result<(), KmaError> {
    let table = ToolTable::from_env()?;

    for tool in table.tools() {
        println!("{:<36} {}", tool.name(), tool.description());
    }

    let text = table
        .call(
            "get_climate_monthly_normals",
            json!({"start_month": 1, "end_month": 12, "station_id": 108}),
        )
        .await;
    println!("{text}");

    Ok(())
}
