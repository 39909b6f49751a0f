use std::io::{BufRead, Write};

use clap::Parser;

/// The only answer that authorises a destructive reset.
pub const CONFIRM_WORD: &str = "yes";

#[derive(Debug, Parser)]
#[command(
    name = "skymentor-setup",
    about = "Create the SkyMentor PostgreSQL schema and seed data",
    long_about = "Create enums, tables, and indexes, then insert demo users, the \
                  progression curriculum, badges, and a sample session.\n\n\
                  Connection settings come from PGHOST, PGPORT, PGDATABASE, PGUSER \
                  and PGPASSWORD (a .env file is read if present)."
)]
pub struct SetupArgs {
    /// Drop existing schema before creating new one (DESTRUCTIVE)
    #[arg(long)]
    pub drop_existing: bool,

    /// Enable verbose logging
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

/// Ask the operator to confirm a destructive reset.
///
/// Only a literal `yes` (any case, surrounding whitespace ignored) confirms.
/// End of input counts as a refusal.
pub fn confirm_drop<R: BufRead, W: Write>(mut input: R, mut prompt: W) -> std::io::Result<bool> {
    write!(
        prompt,
        "⚠️  This will DROP ALL EXISTING DATA. Continue? ({CONFIRM_WORD}/no): "
    )?;
    prompt.flush()?;

    let mut answer = String::new();
    if input.read_line(&mut answer)? == 0 {
        return Ok(false);
    }
    Ok(answer.trim().eq_ignore_ascii_case(CONFIRM_WORD))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answer(text: &str) -> bool {
        let mut prompt = Vec::new();
        let confirmed = confirm_drop(text.as_bytes(), &mut prompt).unwrap();
        assert!(String::from_utf8(prompt).unwrap().contains("DROP ALL EXISTING DATA"));
        confirmed
    }

    #[test]
    fn only_yes_confirms() {
        assert!(answer("yes\n"));
        assert!(answer("  YES \n"));
        assert!(!answer("y\n"));
        assert!(!answer("no\n"));
        assert!(!answer("yes please\n"));
    }

    #[test]
    fn eof_is_refusal() {
        assert!(!answer(""));
    }

    #[test]
    fn flags_parse() {
        let args = SetupArgs::parse_from(["skymentor-setup", "--drop-existing", "-v"]);
        assert!(args.drop_existing);
        assert!(args.verbose);

        let args = SetupArgs::parse_from(["skymentor-setup"]);
        assert!(!args.drop_existing);
        assert!(!args.verbose);
    }

    #[test]
    fn unknown_flag_is_rejected() {
        assert!(SetupArgs::try_parse_from(["skymentor-setup", "--force"]).is_err());
    }
}
