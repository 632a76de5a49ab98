use clap::Args;
use std::path::PathBuf;

use compgen::defaults::Defaults;
use compgen::scaffold::{self, ScaffoldOptions, ScaffoldResult};

use super::CmdResult;

#[derive(Args, Debug, Default)]
pub struct GenerateArgs {
    /// Component name in capitalized form, e.g. UserCard
    #[arg(value_name = "COMPONENT_NAME")]
    pub name: Option<String>,

    /// Directory the component folder is created in (default: src/components/shared)
    #[arg(value_name = "BASE_PATH")]
    pub base_path: Option<PathBuf>,

    /// Preview the generated files without writing anything
    #[arg(long)]
    pub dry_run: bool,
}

pub fn run(args: GenerateArgs, defaults: &Defaults) -> CmdResult<ScaffoldResult> {
    let name = args.name.unwrap_or_default();
    let base_path = args.base_path.unwrap_or_else(|| defaults.base_path.clone());
    let options = ScaffoldOptions {
        dry_run: args.dry_run,
    };

    let result = scaffold::generate(&name, &base_path, &options)?;
    Ok((result, 0))
}

pub fn render_text(result: &ScaffoldResult) -> String {
    if !result.dry_run {
        return result.summary();
    }

    let mut lines = vec![format!(
        "{} component would be created at \"{}\":",
        result.name, result.directory
    )];
    lines.extend(result.files.iter().map(|f| format!("  {}", f.path)));
    lines.join("\n")
}
