use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::row::RowSchema;
use crate::ui::summary::render_schema;

/// Handle the `schema` command: print the column order of the sheet.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Schema { all } = cmd {
        let schemas: Vec<RowSchema> = if *all {
            RowSchema::ALL.to_vec()
        } else {
            vec![cfg.schema]
        };

        for schema in schemas {
            if schema == cfg.schema {
                println!("▶ configured");
            }
            println!("{}", render_schema(schema));
        }
    }

    Ok(())
}
