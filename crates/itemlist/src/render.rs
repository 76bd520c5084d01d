use anyhow::{Context, Result};
use itemlist_fetch::{Record, group_by_list_id};
use tabled::settings::{Panel, Style};
use tabled::{Table, Tabled};

use crate::config::OutputFormat;

/// Shown instead of the list when the pipeline produced nothing to display.
pub const ERROR_MESSAGE: &str = "An error has occurred";

#[derive(Tabled)]
struct Row<'a> {
    #[tabled(rename = "listId")]
    list_id: i64,
    name: &'a str,
    id: i64,
}

impl<'a> From<&'a Record> for Row<'a> {
    fn from(record: &'a Record) -> Self {
        Self {
            list_id: record.list_id,
            name: record.name().unwrap_or_default(),
            id: record.id,
        }
    }
}

pub struct Formatter;

#[derive(Debug, Clone, Default)]
pub struct FormatConfig {
    pub header: Option<String>,
    pub footer: Option<String>,
}

impl Formatter {
    /// One row per record, in the given order.
    pub fn table(records: &[Record], config: FormatConfig) -> Table {
        let mut table = Table::new(records.iter().map(Row::from));

        if let Some(header) = config.header {
            table.with(Panel::header(header));
        }
        if let Some(footer) = config.footer {
            table.with(Panel::footer(footer));
        }

        table.with(Style::blank());
        table
    }
}

/// Render a successful outcome.
pub fn render(records: &[Record], format: OutputFormat, grouped: bool) -> Result<String> {
    match (format, grouped) {
        (OutputFormat::Table, false) => {
            Ok(Formatter::table(records, FormatConfig::default()).to_string())
        }
        (OutputFormat::Table, true) => Ok(grouped_tables(records)),
        (OutputFormat::Json, false) => {
            serde_json::to_string_pretty(records).context("failed to serialize item list")
        }
        (OutputFormat::Json, true) => serde_json::to_string_pretty(&group_by_list_id(records))
            .context("failed to serialize grouped item list"),
    }
}

fn grouped_tables(records: &[Record]) -> String {
    let groups = group_by_list_id(records);
    if groups.is_empty() {
        return Formatter::table(&[], FormatConfig::default()).to_string();
    }

    groups
        .iter()
        .map(|(list_id, group)| {
            let config = FormatConfig {
                header: Some(format!("listId {list_id}")),
                footer: Some(format!("{} item(s)", group.len())),
            };
            Formatter::table(group, config).to_string()
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}
