use clap::Parser;
use eyre::{Result, eyre};

#[derive(Parser)]
#[command(
    name = "ezlog-demo",
    about = "Log one line per severity from known call sites",
    after_help = "Lines are written to stdout."
)]
struct Cli {
    /// Show full declaring type paths
    #[arg(long, help = "Show full declaring type paths")]
    show_packages: bool,

    /// Only log callers under these path prefixes
    #[arg(long = "filter", value_name = "PREFIX", help = "Only log callers under this path prefix (repeatable)")]
    filters: Vec<String>,
}

mod worker {
    pub struct Worker {
        pub items: usize,
    }

    impl Worker {
        pub fn run(&self) {
            ezlog::debug!("starting %s", "run");
            ezlog::info!("loaded %s items from %s", self.items, "cache");
            ezlog::warning!("price is %s", "$5");
            ezlog::error!("missing %s", None::<&str>);
            ezlog::success!("finished %s and %s");
        }
    }
}

mod other {
    pub fn background() {
        ezlog::info!("background %s", "task");
        log::info!(target: "ezlog_demo::worker", "bridged {}", "record");
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.show_packages {
        ezlog::enable_package_display();
    }
    for prefix in cli.filters {
        ezlog::add_package_filter(prefix);
    }
    ezlog::init().map_err(|e| eyre!("Failed to install log bridge: {}", e))?;

    worker::Worker { items: 3 }.run();
    other::background();

    let plain = ezlog::Logger::new(ezlog::logger().config().clone().with_colors(false));
    ezlog::info!(logger: plain, "explicit %s", "logger");

    Ok(())
}
