use serde::Serialize;
use serde_json::Value;
use vnts_branding::Theme;

use crate::cli::OutputFormat;
use crate::ui;

pub mod table;

/// Columns shown first, in this order, when tabulating entity lists. Any
/// remaining columns follow alphabetically.
const PREFERRED_COLUMNS: [&str; 9] = [
    "id",
    "name",
    "code",
    "slug",
    "email",
    "price",
    "stock",
    "quantity",
    "total",
];

/// Columns holding money, shown with two decimals in tables.
const MONEY_COLUMNS: [&str; 6] = [
    "price",
    "unit_price",
    "total",
    "total_amount",
    "commission",
    "commission_total",
];

/// Render a serializable response to a string in the requested format.
pub fn render<T: Serialize>(
    value: &T,
    format: OutputFormat,
    theme: &Theme,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => render_table(value, theme),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a serializable response in the requested format. Table headers
/// carry the resolved tenant accent when color is enabled.
pub fn output<T: Serialize>(value: &T, format: OutputFormat, theme: &Theme) -> anyhow::Result<()> {
    let rendered = render(value, format, theme)?;
    println!("{rendered}");
    Ok(())
}

fn table_options(theme: &Theme) -> table::TableOptions {
    let prefs = ui::prefs();
    table::TableOptions {
        max_width: prefs.term_width,
        accent: prefs.table_color.then(|| theme.accent_rgb()),
    }
}

fn render_table<T: Serialize>(value: &T, theme: &Theme) -> anyhow::Result<String> {
    let options = table_options(theme);

    let value = serde_json::to_value(value)?;
    match value {
        Value::Array(items) => render_array_table(&items, options),
        Value::Object(map) => {
            let headers = ["key", "value"];
            let mut entries = map.into_iter().collect::<Vec<_>>();
            entries.sort_by(|a, b| a.0.cmp(&b.0));
            let mut rows = Vec::with_capacity(entries.len());
            for (key, value) in entries {
                let cell = cell_for(&key, &value);
                rows.push(vec![key, cell]);
            }
            Ok(table::render_entity_table(&headers, &rows, options))
        }
        scalar => {
            let headers = ["value"];
            let rows = vec![vec![value_to_cell(&scalar)]];
            Ok(table::render_entity_table(&headers, &rows, options))
        }
    }
}

fn render_array_table(items: &[Value], options: table::TableOptions) -> anyhow::Result<String> {
    if items.is_empty() {
        return Ok(String::from("(no rows)"));
    }

    let all_objects = items.iter().all(Value::is_object);
    if !all_objects {
        let headers = ["value"];
        let rows = items
            .iter()
            .map(|item| vec![value_to_cell(item)])
            .collect::<Vec<_>>();
        return Ok(table::render_entity_table(&headers, &rows, options));
    }

    let mut headers = Vec::<String>::new();
    for item in items {
        if let Some(map) = item.as_object() {
            for key in map.keys() {
                if !headers.contains(key) {
                    headers.push(key.clone());
                }
            }
        }
    }

    if headers.is_empty() {
        return Ok(String::from("(no columns)"));
    }

    order_headers(&mut headers);

    let header_refs = headers.iter().map(String::as_str).collect::<Vec<_>>();
    let rows = items
        .iter()
        .filter_map(Value::as_object)
        .map(|map| {
            headers
                .iter()
                .map(|header| {
                    map.get(header)
                        .map_or_else(|| String::from("-"), |value| cell_for(header, value))
                })
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();

    Ok(table::render_entity_table(&header_refs, &rows, options))
}

/// Well-known entity columns first, everything else alphabetical.
fn order_headers(headers: &mut Vec<String>) {
    headers.sort();
    let mut ordered = Vec::with_capacity(headers.len());
    for preferred in PREFERRED_COLUMNS {
        if let Some(pos) = headers.iter().position(|h| h == preferred) {
            ordered.push(headers.remove(pos));
        }
    }
    ordered.append(headers);
    *headers = ordered;
}

fn cell_for(column: &str, value: &Value) -> String {
    if MONEY_COLUMNS.contains(&column) {
        if let Some(amount) = value.as_f64() {
            return format!("{amount:.2}");
        }
    }
    value_to_cell(value)
}

fn value_to_cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("-"),
        Value::Bool(v) => v.to_string(),
        Value::Number(v) => v.to_string(),
        Value::String(v) => v.clone(),
        other => serde_json::to_string(other).unwrap_or_else(|_| String::from("<invalid-json>")),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde::Serialize;
    use vnts_branding::Theme;

    use super::{order_headers, render};
    use crate::cli::OutputFormat;

    #[derive(Serialize)]
    struct Example {
        id: &'static str,
        price: f64,
        name: &'static str,
    }

    #[test]
    fn json_render_is_valid_json() {
        let value = Example {
            id: "7",
            price: 3.5,
            name: "Coffee",
        };
        let out = render(&value, OutputFormat::Json, &Theme::new()).expect("json render");
        let parsed: serde_json::Value = serde_json::from_str(&out).expect("json should parse");
        assert_eq!(parsed["id"], "7");
        assert_eq!(parsed["price"], 3.5);
    }

    #[test]
    fn raw_render_is_single_line_json() {
        let value = Example {
            id: "7",
            price: 3.5,
            name: "Coffee",
        };
        let out = render(&value, OutputFormat::Raw, &Theme::new()).expect("raw render");
        assert!(!out.contains('\n'));
        assert!(serde_json::from_str::<serde_json::Value>(&out).is_ok());
    }

    #[test]
    fn list_table_puts_known_columns_first() {
        let rows = vec![
            Example {
                id: "7",
                price: 3.5,
                name: "Coffee",
            },
            Example {
                id: "8",
                price: 1.25,
                name: "Tea",
            },
        ];
        let out = render(&rows, OutputFormat::Table, &Theme::new()).expect("table render");
        let header = out.lines().next().expect("has header");
        let id_at = header.find("id").expect("id column");
        let name_at = header.find("name").expect("name column");
        let price_at = header.find("price").expect("price column");
        assert!(id_at < name_at && name_at < price_at);
    }

    #[test]
    fn money_columns_get_two_decimals() {
        let rows = vec![Example {
            id: "7",
            price: 3.5,
            name: "Coffee",
        }];
        let out = render(&rows, OutputFormat::Table, &Theme::new()).expect("table render");
        assert!(out.contains("3.50"), "{out}");
    }

    #[test]
    fn null_cells_render_as_dash() {
        let value = serde_json::json!([{"id": "1", "address": null}]);
        let out = render(&value, OutputFormat::Table, &Theme::new()).expect("table render");
        assert!(out.contains('-'));
        assert!(!out.contains("null"));
    }

    #[test]
    fn header_ordering_is_stable_for_unknown_columns() {
        let mut headers = vec![
            "zeta".to_string(),
            "name".to_string(),
            "alpha".to_string(),
            "id".to_string(),
        ];
        order_headers(&mut headers);
        assert_eq!(headers, vec!["id", "name", "alpha", "zeta"]);
    }
}
