use crate::libs::config::BreakConfig;
use anyhow::Result;
use prettytable::{row, Table};

pub struct View {}

impl View {
    pub fn breaks(configs: &[BreakConfig]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["KIND", "ENABLED", "WORK", "BREAK", "POSTPONE", "HOOKS"]);
        for config in configs {
            table.add_row(row![
                config.kind,
                if config.enabled { "yes" } else { "no" },
                config.work_duration,
                config.break_duration.map_or_else(|| "-".to_string(), |d| d.to_string()),
                config.postpone_duration,
                if config.hooks.is_some() { "yes" } else { "-" }
            ]);
        }
        table.printstd();

        Ok(())
    }
}
