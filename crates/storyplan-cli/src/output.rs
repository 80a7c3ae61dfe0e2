use serde::Serialize;

pub fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{}", json);
    Ok(())
}

/// Print a two-column key/label table with a separator row.
pub fn print_pairs(headers: (&str, &str), rows: &[(String, String)]) {
    let key_width = rows
        .iter()
        .map(|(k, _)| k.len())
        .chain([headers.0.len()])
        .max()
        .unwrap_or(0);

    println!("{:key_width$}  {}", headers.0, headers.1);
    println!("{}  {}", "-".repeat(key_width), "-".repeat(headers.1.len()));
    for (key, label) in rows {
        println!("{key:key_width$}  {label}");
    }
}
