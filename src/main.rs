use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    let policy = match pwd_rules::load_policy() {
        Ok(policy) => policy,
        Err(e) => {
            eprintln!("Invalid password policy: {e}");
            return ExitCode::from(2);
        }
    };

    match pwd_rules::console::run(io::stdin().lock(), io::stdout().lock(), &policy) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("I/O error: {e}");
            ExitCode::FAILURE
        }
    }
}
