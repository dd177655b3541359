use clap::Parser;
use std::ffi::OsString;

#[derive(Parser, Debug)]
#[command(
    name = "greeter",
    bin_name = "greeter",
    disable_help_flag = true,
    disable_version_flag = true
)]
#[command(about = "Welcome everyone to the jungle", long_about = None)]
pub struct Cli {
    /// Names to greet, in order
    #[arg(value_name = "NAME", allow_hyphen_values = true, trailing_var_arg = true)]
    pub names: Vec<String>,
}

/// Puts an escape right after the binary name so that every user argument is
/// taken as a name, including a literal `--`.
pub fn escaped<I, T>(args: I) -> impl Iterator<Item = OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut args = args.into_iter().map(Into::into);
    let bin = args.next().unwrap_or_else(|| OsString::from("greeter"));
    [bin, OsString::from("--")].into_iter().chain(args)
}
