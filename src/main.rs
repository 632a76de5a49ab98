use clap::Parser;
use std::ffi::OsString;
use std::path::Path;

mod commands;
mod output;

use commands::generate::GenerateArgs;

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser)]
#[command(name = "compgen")]
#[command(version = VERSION)]
#[command(about = "Scaffold component, type, story and barrel stubs for a new UI component")]
struct Cli {
    #[command(flatten)]
    generate: GenerateArgs,

    /// Print the result as a JSON envelope
    #[arg(long)]
    json: bool,
}

/// Parse `args` (program name first) and run. Config is looked up in
/// `config_dir`; relative base paths resolve against the process directory.
fn run_from<I, T>(args: I, config_dir: &Path) -> i32
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return e.exit_code();
        }
    };

    commands::run(cli.generate, cli.json, config_dir)
}

fn main() -> std::process::ExitCode {
    let exit_code = run_from(std::env::args_os(), Path::new("."));
    std::process::ExitCode::from(exit_code_to_u8(exit_code))
}

fn exit_code_to_u8(code: i32) -> u8 {
    if code <= 0 {
        0
    } else if code >= 255 {
        255
    } else {
        code as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn arg(path: &Path) -> String {
        path.display().to_string()
    }

    #[test]
    fn no_arguments_exits_with_usage_code() {
        let cfg = tempdir().unwrap();
        assert_eq!(run_from(["compgen"], cfg.path()), 1);
        assert!(!Path::new("src/components/shared").exists());
    }

    #[test]
    fn empty_name_exits_with_usage_code() {
        let cfg = tempdir().unwrap();
        let base = tempdir().unwrap();
        assert_eq!(run_from(["compgen", "", arg(base.path()).as_str()], cfg.path()), 1);
        assert_eq!(fs::read_dir(base.path()).unwrap().count(), 0);
    }

    #[test]
    fn name_and_base_path_generate_files() {
        let cfg = tempdir().unwrap();
        let base = tempdir().unwrap();

        let code = run_from(["compgen", "UserCard", arg(base.path()).as_str()], cfg.path());
        assert_eq!(code, 0);

        let dir = base.path().join("user-card");
        for file in [
            "user-card.tsx",
            "user-card.type.ts",
            "user-card.stories.tsx",
            "index.ts",
        ] {
            assert!(dir.join(file).is_file(), "missing {}", file);
        }
    }

    #[test]
    fn config_file_supplies_default_base_path() {
        let cfg = tempdir().unwrap();
        let base = cfg.path().join("app/ui");
        let config = serde_json::json!({ "defaults": { "basePath": arg(&base) } });
        fs::write(cfg.path().join("compgen.json"), config.to_string()).unwrap();

        assert_eq!(run_from(["compgen", "NavBar", "--json"], cfg.path()), 0);
        assert!(base.join("nav-bar/nav-bar.tsx").is_file());
    }

    #[test]
    fn invalid_config_fails_before_generating() {
        let cfg = tempdir().unwrap();
        let base = tempdir().unwrap();
        fs::write(cfg.path().join("compgen.json"), "{ broken").unwrap();

        let code = run_from(["compgen", "NavBar", arg(base.path()).as_str()], cfg.path());
        assert_eq!(code, 2);
        assert!(!base.path().join("nav-bar").exists());
    }

    #[test]
    fn invalid_name_exits_with_validation_code() {
        let cfg = tempdir().unwrap();
        let base = tempdir().unwrap();
        assert_eq!(
            run_from(["compgen", "a/B", arg(base.path()).as_str()], cfg.path()),
            2
        );
    }

    #[test]
    fn unwritable_base_path_is_fatal() {
        let cfg = tempdir().unwrap();
        let base = cfg.path().join("not-a-dir");
        fs::write(&base, "file").unwrap();

        let code = run_from(["compgen", "UserCard", arg(&base).as_str()], cfg.path());
        assert_eq!(code, 1);
    }

    #[test]
    fn dry_run_writes_nothing() {
        let cfg = tempdir().unwrap();
        let base = tempdir().unwrap();
        let code = run_from(
            ["compgen", "UserCard", arg(base.path()).as_str(), "--dry-run"],
            cfg.path(),
        );
        assert_eq!(code, 0);
        assert!(!base.path().join("user-card").exists());
    }

    #[test]
    fn unknown_flag_uses_clap_exit_code() {
        let cfg = tempdir().unwrap();
        assert_eq!(run_from(["compgen", "--bogus"], cfg.path()), 2);
    }

    #[test]
    fn exit_code_clamps() {
        assert_eq!(exit_code_to_u8(-1), 0);
        assert_eq!(exit_code_to_u8(2), 2);
        assert_eq!(exit_code_to_u8(300), 255);
    }
}
