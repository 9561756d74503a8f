use jetlag_core::ZoneTable;

pub fn run(json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let table = ZoneTable::builtin();

    if json {
        let entries: Vec<_> = table.entries().collect();
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    for entry in table.entries() {
        println!("{:<6} UTC{}", entry.symbol, format_offset(entry.offset_hours));
    }
    Ok(())
}

/// "+05:30" style rendering of an hour offset.
fn format_offset(hours: f64) -> String {
    let minutes = (hours * 60.0).round() as i64;
    let sign = if minutes < 0 { '-' } else { '+' };
    let minutes = minutes.abs();
    format!("{sign}{:02}:{:02}", minutes / 60, minutes % 60)
}
