//! Writes the OpenAPI document for the interview API to `openapi.json` and
//! prints a short summary of what it contains.

use interviewer_api::router::ApiDoc;
use utoipa::OpenApi;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let api_doc = ApiDoc::openapi();
    let path = "openapi.json";

    std::fs::write(path, api_doc.to_pretty_json()?)?;
    println!("OpenAPI document written to {path}");

    println!("Endpoints ({}):", api_doc.paths.paths.len());
    for route in api_doc.paths.paths.keys() {
        println!("  {route}");
    }

    if let Some(components) = &api_doc.components {
        println!("Schemas ({}):", components.schemas.len());
        for name in components.schemas.keys() {
            println!("  - {name}");
        }
    }

    Ok(())
}
