use std::path::Path;

use compgen::defaults;

pub type CmdResult<T> = compgen::Result<(T, i32)>;

pub mod generate;

/// Load config from `config_dir`, run the generator and print the outcome.
/// Returns the process exit code.
pub(crate) fn run(args: generate::GenerateArgs, json: bool, config_dir: &Path) -> i32 {
    let result = defaults::load_config_from(config_dir)
        .and_then(|config| generate::run(args, &config.defaults));

    let exit_code = match &result {
        Ok((_, code)) => *code,
        Err(err) => crate::output::exit_code_for_error(err.code),
    };

    let printed = if json {
        crate::output::print_result(result.map(|(data, _)| data))
    } else {
        crate::output::print_text(
            result.map(|(data, _)| generate::render_text(&data)),
            &mut std::io::stdout().lock(),
            &mut std::io::stderr().lock(),
        )
    };

    match printed {
        Ok(()) => exit_code,
        Err(err) => {
            eprintln!("Error: {}", err.describe());
            1
        }
    }
}
