use crate::cli::parser::Commands;
use crate::core::format::detect_format;
use crate::errors::AppResult;
use crate::import::read_table_file;
use crate::utils::path::existing_file;

pub fn handle(cmd: &Commands) -> AppResult<()> {
    if let Commands::Detect { input } = cmd {
        let table = read_table_file(&existing_file(input)?)?;
        let format = detect_format(table.headers.iter().map(String::as_str))?;
        println!("{format}");
    }
    Ok(())
}
