use std::io::stdin;

use riftscout::service::config::ApiConfig;
use riftscout::ui::repl;

fn main() {
    env_logger::init();

    match repl::run(ApiConfig::default()) {
        Ok(_) => return,
        Err(error) => println!("Error occured while running REPL:\n{}\n", error),
    };

    let mut s = String::new();
    println!("Press Enter to exit");
    let _ = stdin().read_line(&mut s);
}
