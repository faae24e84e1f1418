use clap::{Parser, Subcommand};
use cluso_site::{config, generate, output, translation};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "cluso-site")]
#[command(about = "Static site generator for the multilingual Cluso marketing site")]
#[command(long_about = "\
Static site generator for the multilingual Cluso marketing site

Every language in the registry gets its own directory of pages, rendered from
one JSON Translation Record per language.

Input structure:

  site.toml                        # Site config (optional, merged over defaults)
  translations/
  ├── en.json                      # One record per registry language
  ├── de.json
  └── ...

Output structure:

  dist/
  └── en/
      ├── index.html
      ├── how-to-play.html
      ├── rules.html               # only if the record has rulesPage
      ├── tips.html                # only if the record has tipsPage
      └── blog/                    # only if the record has blog
          ├── index.html
          └── {slug}.html

Run 'cluso-site gen-config' to generate a documented site.toml.")]
#[command(version)]
struct Cli {
    /// Site configuration file
    #[arg(long, default_value = "site.toml", global = true)]
    config: PathBuf,

    /// Directory holding one {code}.json Translation Record per language
    #[arg(long, default_value = "translations", global = true)]
    translations: PathBuf,

    /// Output directory
    #[arg(long, default_value = "dist", global = true)]
    output: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render every language into the output directory
    Build,
    /// Load and validate every Translation Record without writing anything
    Check,
    /// Print a stock site.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Build => {
            let site_config = config::load_config(&cli.config)?;
            println!("==> Building site → {}", cli.output.display());

            let (tx, rx) = std::sync::mpsc::channel();
            let printer = std::thread::spawn(move || {
                for event in rx {
                    output::print_build_event(&event);
                }
            });
            let result = generate::build(&site_config, &cli.translations, &cli.output, Some(tx));
            printer
                .join()
                .map_err(|_| "build output printer panicked")?;

            let report = result?;
            output::print_build_summary(&report);
            if !report.is_success() {
                return Err(format!(
                    "{} of {} languages failed",
                    report.failures.len(),
                    report.attempted()
                )
                .into());
            }
        }
        Command::Check => {
            let site_config = config::load_config(&cli.config)?;
            let registry = site_config.registry();
            println!("==> Checking {}", cli.translations.display());
            let translations = translation::load_all(&cli.translations, &registry)?;
            output::print_check_output(&registry, &translations);
            println!("==> Translations are valid");
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}
