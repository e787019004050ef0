use crate::export::ExportFormat;
use crate::models::period::Period;
use clap::{Parser, Subcommand};

/// Command-line interface definition for sparktracker
#[derive(Parser)]
#[command(
    name = "sparktracker",
    version = env!("CARGO_PKG_VERSION"),
    about = "Track every trip, maximize every dollar: fuel cost, net pay and earnings per hour for delivery drivers",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Show the default MPG for every vehicle / engine combination
    Vehicles,

    /// Record a completed trip
    Add {
        /// Vehicle type: sedan, suv, pickup, van (default from config)
        #[arg(long)]
        vehicle: Option<String>,

        /// Engine type: 4-cylinder, 6-cylinder, 8-cylinder (default from config)
        #[arg(long)]
        engine: Option<String>,

        /// Fuel type: gas, hybrid, electric (default from config)
        #[arg(long)]
        fuel: Option<String>,

        /// Override the default MPG (5-50)
        #[arg(long)]
        mpg: Option<f64>,

        /// Fuel price per gallon (0.50-10.00, default from config)
        #[arg(long = "fuel-price")]
        fuel_price: Option<f64>,

        /// Zip code, kept for reference
        #[arg(long)]
        zip: Option<String>,

        /// Miles driven for this trip
        #[arg(long, default_value_t = 0.0)]
        miles: f64,

        /// Number of stops (1-99)
        #[arg(long, default_value_t = 1)]
        stops: u32,

        /// The trip included shopping
        #[arg(long)]
        shopping: bool,

        /// Shopping items picked up (with --shopping)
        #[arg(long, default_value_t = 0, requires = "shopping")]
        items: u32,

        /// Minutes spent shopping (with --shopping)
        #[arg(long = "shopping-minutes", default_value_t = 0, requires = "shopping")]
        shopping_minutes: u32,

        /// Trip duration in minutes (1-999)
        #[arg(long, default_value_t = 30)]
        minutes: u32,

        /// Gross pay before expenses
        #[arg(long, default_value_t = 0.0)]
        gross: f64,

        /// Tips received
        #[arg(long, default_value_t = 0.0)]
        tips: f64,

        /// Override the suggested quality: trash, bad, fair, good, great
        #[arg(long)]
        quality: Option<String>,

        /// Trip time (YYYY-MM-DD HH:MM); defaults to now
        #[arg(long)]
        at: Option<String>,
    },

    /// List recorded trips
    List {
        #[arg(
            long,
            short,
            help = "Filter by year/month/day or a custom range (YYYY, YYYY-MM, YYYY-MM-DD, or start:end)"
        )]
        range: Option<String>,
    },

    /// Earnings grouped by day, week, month or year
    Summary {
        #[arg(long, short, value_enum, default_value = "daily")]
        period: Period,

        #[arg(
            long,
            short,
            help = "Filter by year/month/day or a custom range (YYYY, YYYY-MM, YYYY-MM-DD, or start:end)"
        )]
        range: Option<String>,

        /// Also write a grouped bar chart (SVG) to this file
        #[arg(long, value_name = "FILE")]
        chart: Option<String>,
    },

    /// Export trips
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        /// Output file (default: spark_trips_YYYYMMDD.<ext> in the current directory)
        #[arg(long, value_name = "FILE")]
        file: Option<String>,

        #[arg(
            long,
            value_name = "RANGE",
            help = "Filter export by year/month/day or a custom range"
        )]
        range: Option<String>,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Delete ALL recorded trips
    Clear {
        /// Skip the confirmation prompt
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        /// Compress the backup as .zip
        #[arg(long)]
        compress: bool,

        /// Overwrite an existing backup without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Database maintenance
    Db {
        #[arg(long = "info", help = "Show database statistics")]
        info: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Compact the database file")]
        vacuum: bool,
    },

    /// Print the internal operation log
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Talk to Spark; without a message, reads lines from stdin
    Chat {
        message: Option<String>,

        /// Conversation log file (default from config)
        #[arg(long, value_name = "FILE")]
        log: Option<String>,
    },
}
