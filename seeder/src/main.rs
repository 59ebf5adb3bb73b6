use challenges::{ChallengeCatalog, Language};
use colored::Colorize;
use common::config::Config;
use common::logger::init_logger;

mod seed;

fn main() {
    let config = Config::init(".env");
    init_logger(&config.log_level, &config.log_file);

    let catalog = match ChallengeCatalog::bundled() {
        Ok(catalog) => catalog,
        Err(e) => {
            log::error!("Failed to load bundled catalog: {e:?}");
            std::process::exit(1);
        }
    };

    let out_dir = std::path::Path::new(&config.challenge_dir);
    let mut failures = 0;
    for language in [
        Language::Python,
        Language::JavaScript,
        Language::Cpp,
        Language::Java,
    ] {
        match seed::seed_language(&catalog, language, out_dir) {
            Ok(path) => log::info!("Seeded {language} challenges to {}", path.display()),
            Err(e) => {
                log::error!("Failed to seed {language} challenges: {e:?}");
                failures += 1;
            }
        }
    }

    if failures == 0 {
        println!("{}", "Challenge seeding complete.".green());
    } else {
        println!(
            "{}",
            format!("Challenge seeding finished with {failures} failure(s).").red()
        );
        std::process::exit(1);
    }
}
