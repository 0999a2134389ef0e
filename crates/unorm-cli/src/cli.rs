use std::path::PathBuf;

use clap::Parser;
use unorm_core::{ConflictPolicy, NormalizationForm, RunOptions};

#[derive(Debug, Parser)]
#[command(
    name = "unicode-norm",
    version,
    about = "Normalize file names to a Unicode normalization form (NFC, NFD, NFKC, NFKD)",
    arg_required_else_help = true
)]
pub struct Cli {
    /// Files to rename (directories need --recursive)
    #[arg(required = true, value_name = "FILE")]
    pub paths: Vec<PathBuf>,

    /// Target normalization form [default: NFC]
    #[arg(short, long, value_name = "FORM", value_parser = parse_form)]
    pub form: Option<NormalizationForm>,

    /// Convert directories recursively
    #[arg(short, long)]
    pub recursive: bool,

    /// Show the changes that would be made, but do not modify files
    #[arg(short = 'd', long = "dry-run", visible_alias = "check", visible_short_alias = 'c')]
    pub dry_run: bool,

    /// Verbose mode
    #[arg(short, long)]
    pub verbose: bool,

    /// What to do when the normalized name is taken by another file [default: fail]
    #[arg(long, value_name = "POLICY", value_parser = parse_policy)]
    pub on_conflict: Option<ConflictPolicy>,

    /// Descend into symlinked directories
    #[arg(short = 'L', long)]
    pub follow_links: bool,

    /// Read defaults from a TOML config file
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Layers the command-line flags over `base`.
    pub fn apply(&self, base: RunOptions) -> RunOptions {
        RunOptions {
            form: self.form.unwrap_or(base.form),
            recursive: base.recursive || self.recursive,
            dry_run: self.dry_run,
            on_conflict: self.on_conflict.unwrap_or(base.on_conflict),
            follow_links: base.follow_links || self.follow_links,
        }
    }
}

fn parse_form(s: &str) -> Result<NormalizationForm, String> {
    s.parse().map_err(|e: unorm_core::CoreError| e.to_string())
}

fn parse_policy(s: &str) -> Result<ConflictPolicy, String> {
    s.parse().map_err(|e: unorm_core::CoreError| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("unicode-norm").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn command_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults() {
        let cli = parse(&["a.txt"]);
        assert_eq!(cli.paths, [PathBuf::from("a.txt")]);
        assert!(cli.form.is_none());
        assert!(!cli.recursive);
        assert!(!cli.dry_run);
        assert!(!cli.verbose);

        let options = cli.apply(RunOptions::default());
        assert_eq!(options.form, NormalizationForm::Nfc);
        assert_eq!(options.on_conflict, ConflictPolicy::Fail);
    }

    #[test]
    fn short_flags() {
        let cli = parse(&["-r", "-d", "-v", "-f", "NFD", "dir"]);
        assert!(cli.recursive);
        assert!(cli.dry_run);
        assert!(cli.verbose);
        assert_eq!(cli.form, Some(NormalizationForm::Nfd));
    }

    #[test]
    fn check_is_a_synonym_for_dry_run() {
        assert!(parse(&["--check", "x"]).dry_run);
        assert!(parse(&["-c", "x"]).dry_run);
        assert!(parse(&["--dry-run", "x"]).dry_run);
    }

    #[test]
    fn form_accepts_equals_syntax_and_lower_case() {
        assert_eq!(parse(&["--form=NFKC", "x"]).form, Some(NormalizationForm::Nfkc));
        assert_eq!(parse(&["--form", "nfkd", "x"]).form, Some(NormalizationForm::Nfkd));
    }

    #[test]
    fn invalid_form_is_rejected() {
        let err = Cli::try_parse_from(["unicode-norm", "--form", "NFX", "x"]).unwrap_err();
        assert!(err.to_string().contains("invalid normalization form"));
    }

    #[test]
    fn unknown_flag_is_rejected() {
        assert!(Cli::try_parse_from(["unicode-norm", "--frobnicate", "x"]).is_err());
    }

    #[test]
    fn multiple_paths() {
        let cli = parse(&["-r", "one", "two"]);
        assert_eq!(cli.paths, [PathBuf::from("one"), PathBuf::from("two")]);
    }

    #[test]
    fn flags_override_config_values() {
        let base = RunOptions {
            form: NormalizationForm::Nfd,
            recursive: true,
            dry_run: false,
            on_conflict: ConflictPolicy::Skip,
            follow_links: false,
        };

        let kept = parse(&["x"]).apply(base);
        assert_eq!(kept.form, NormalizationForm::Nfd);
        assert!(kept.recursive);
        assert_eq!(kept.on_conflict, ConflictPolicy::Skip);

        let overridden = parse(&["-f", "NFKC", "--on-conflict", "overwrite", "-L", "x"]).apply(base);
        assert_eq!(overridden.form, NormalizationForm::Nfkc);
        assert_eq!(overridden.on_conflict, ConflictPolicy::Overwrite);
        assert!(overridden.follow_links);
    }
}
