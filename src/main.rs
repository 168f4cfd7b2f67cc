use ipv4_subnet_quiz::cli::Repl;
use ipv4_subnet_quiz::{new_session, Config};
use std::error::Error;
use std::io;

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();
    let config = Config::from_env()?;
    log4rs::init_file(&config.log_config, Default::default()).expect("Error initializing log4rs");
    //
    log::info!("#Start main() {:?}", config);

    let mut repl = Repl::new(new_session(&config), config.output);
    repl.run(io::stdin().lock(), io::stdout().lock())?;

    log::info!("#End main()");
    Ok(())
}
