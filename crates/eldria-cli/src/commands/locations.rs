//! List every location in the realm.

use comfy_table::{ContentArrangement, Table};
use serde::Serialize;

use eldria_fiction::Location;
use eldria_story::{Place, build_engine, default_config};

#[derive(Serialize)]
struct LocationRow {
    key: Place,
    title: &'static str,
    start: bool,
}

pub fn run(json: bool) -> Result<(), String> {
    let engine = build_engine(default_config());
    let start = engine.config().start;

    let rows: Vec<LocationRow> = engine
        .registered()
        .into_iter()
        .map(|place| LocationRow {
            key: place,
            title: place.title(),
            start: place == start,
        })
        .collect();

    if json {
        let out = serde_json::to_string_pretty(&rows).map_err(|e| e.to_string())?;
        println!("{out}");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Key", "Title", ""]);

    for row in &rows {
        let marker = if row.start { "start" } else { "" };
        table.add_row(vec![row.key.key(), row.title, marker]);
    }

    println!("{table}");
    println!();
    println!("  {} locations", rows.len());

    Ok(())
}
