use std::path::Path;

use crate::input;

pub fn run(file: &Path) -> anyhow::Result<()> {
    let raw = input::read_text(file)?;
    input::print_json(&hypr_script::clean(&raw))
}
