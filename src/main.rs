use admin_shell::app::{Flags, Shell};
use pico_args;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut args = pico_args::Arguments::from_env();

    let flags = Flags {
        lang: args.opt_value_from_str("--lang").unwrap(),
        path: args
            .finish()
            .into_iter()
            .next()
            .and_then(|s| s.into_string().ok()),
    };

    let mut shell = Shell::new(&flags);
    let path = flags.path.as_deref().unwrap_or("/");
    let resolution = shell.navigate(path);
    println!("{}: {}", resolution.path, shell.document_title());
}
