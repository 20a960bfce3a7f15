use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rchorelog
/// CLI application to coordinate household chores with SQLite
#[derive(Parser)]
#[command(
    name = "rchorelog",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple household chore CLI: cleaning rotation, tasks, points and budget using SQLite",
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

    /// Manage the configuration file (view, check or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Run configuration file migrations if needed")]
        migrate: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/vim/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,

        #[arg(
            long = "frequency",
            help = "Persist a new cleaning rotation frequency (1, 2 or 3 days)"
        )]
        frequency: Option<u32>,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Manage family members (the cleaning roster)
    Member {
        /// Add a member with the given name
        #[arg(long = "add", value_name = "NAME")]
        add: Option<String>,

        #[arg(long, help = "Member role (e.g. Father, Daughter)")]
        role: Option<String>,

        #[arg(long, help = "Display color (hex, e.g. #10B981)")]
        color: Option<String>,

        #[arg(long, help = "Birthday (YYYY-MM-DD)")]
        birthday: Option<String>,

        #[arg(long, help = "Job / occupation")]
        job: Option<String>,

        /// List the roster in rotation order
        #[arg(long = "list")]
        list: bool,

        /// Delete a member by id
        #[arg(long = "del", value_name = "ID")]
        del: Option<i64>,

        /// Fine a member for a skipped cleaning turn
        #[arg(long = "fine", value_name = "ID")]
        fine: Option<i64>,
    },

    /// Who has cleaning duty? (today, a given date, or a whole month)
    Duty {
        /// Date to check (YYYY-MM-DD, default: today)
        #[arg(long = "date")]
        date: Option<String>,

        /// Show every duty day of a month (YYYY-MM)
        #[arg(long = "month")]
        month: Option<String>,

        /// Override the configured rotation frequency for this call
        #[arg(long = "frequency")]
        frequency: Option<u32>,
    },

    /// Pre-populate calendar and demo data
    Seed {
        /// Target year for the cleaning calendar
        #[arg(long = "year")]
        year: i32,

        /// Replace cleaning events already recorded for the year
        #[arg(long = "force")]
        force: bool,

        /// Also insert the demo family, budget categories and meal plan
        #[arg(long = "demo")]
        demo: bool,

        /// Override the configured rotation frequency for this call
        #[arg(long = "frequency")]
        frequency: Option<u32>,
    },

    /// Manage calendar events
    Event {
        /// Add an event with the given title
        #[arg(long = "add", value_name = "TITLE")]
        add: Option<String>,

        #[arg(long, help = "Event date (YYYY-MM-DD)")]
        date: Option<String>,

        #[arg(long = "assign", value_name = "MEMBER_ID")]
        assign: Option<i64>,

        #[arg(long)]
        points: Option<i64>,

        /// Mark an event completed (a cleaning event awards its points)
        #[arg(long = "done", value_name = "ID")]
        done: Option<i64>,

        #[arg(long = "del", value_name = "ID")]
        del: Option<i64>,

        #[arg(long = "list")]
        list: bool,

        #[arg(
            long,
            value_name = "RANGE",
            help = "Filter listing by year/month/day or a custom range"
        )]
        range: Option<String>,
    },

    /// Manage household tasks
    Task {
        /// Add a task with the given title
        #[arg(long = "add", value_name = "TITLE")]
        add: Option<String>,

        #[arg(long)]
        description: Option<String>,

        #[arg(long)]
        category: Option<String>,

        #[arg(long, help = "Priority: low, medium or high")]
        priority: Option<String>,

        #[arg(long = "due", help = "Due date (YYYY-MM-DD)")]
        due: Option<String>,

        #[arg(long)]
        points: Option<i64>,

        /// Assign the task to one or more members (repeatable)
        #[arg(long = "assign", value_name = "MEMBER_ID")]
        assign: Vec<i64>,

        /// Mark a task done and award its points to every assignee
        #[arg(long = "done", value_name = "ID")]
        done: Option<i64>,

        #[arg(long = "del", value_name = "ID")]
        del: Option<i64>,

        #[arg(long = "list")]
        list: bool,
    },

    /// Manage the shopping list
    Shopping {
        #[arg(long = "add", value_name = "ITEM")]
        add: Option<String>,

        #[arg(long = "by", value_name = "MEMBER_ID", help = "Who added the item")]
        by: Option<i64>,

        #[arg(long = "done", value_name = "ID")]
        done: Option<i64>,

        #[arg(long = "del", value_name = "ID")]
        del: Option<i64>,

        /// Remove every checked-off item
        #[arg(long = "clear")]
        clear: bool,

        #[arg(long = "list")]
        list: bool,
    },

    /// Manage the family budget
    Budget {
        /// Create a budget category
        #[arg(long = "category", value_name = "NAME")]
        category: Option<String>,

        #[arg(long, help = "Monthly budget for the new category")]
        amount: Option<f64>,

        #[arg(long)]
        color: Option<String>,

        /// Record an expense with the given description
        #[arg(long = "expense", value_name = "DESC")]
        expense: Option<String>,

        #[arg(long = "on", value_name = "CATEGORY", help = "Category the expense belongs to")]
        on: Option<String>,

        #[arg(long)]
        cost: Option<f64>,

        #[arg(long, help = "Expense date (YYYY-MM-DD, default: today)")]
        date: Option<String>,

        #[arg(long)]
        notes: Option<String>,

        #[arg(long = "list")]
        list: bool,
    },

    /// Manage the weekly meal plan
    Meal {
        /// Day to update (e.g. Monday)
        #[arg(long = "day")]
        day: Option<String>,

        #[arg(long)]
        breakfast: Option<String>,

        #[arg(long)]
        lunch: Option<String>,

        #[arg(long)]
        dinner: Option<String>,

        #[arg(long)]
        notes: Option<String>,

        #[arg(long = "list")]
        list: bool,
    },

    /// Manage family goals
    Goal {
        #[arg(long = "add", value_name = "TITLE")]
        add: Option<String>,

        #[arg(long)]
        description: Option<String>,

        #[arg(long)]
        category: Option<String>,

        #[arg(long)]
        target: Option<i64>,

        #[arg(long = "due", help = "Due date (YYYY-MM-DD)")]
        due: Option<String>,

        #[arg(long)]
        points: Option<i64>,

        /// Advance a goal by --by units
        #[arg(long = "progress", value_name = "ID")]
        progress: Option<i64>,

        #[arg(long = "by", value_name = "N")]
        by: Option<i64>,

        #[arg(long = "list")]
        list: bool,
    },

    /// Manage rewards
    Reward {
        #[arg(long = "add", value_name = "NAME")]
        add: Option<String>,

        #[arg(long)]
        description: Option<String>,

        #[arg(long)]
        icon: Option<String>,

        #[arg(long)]
        category: Option<String>,

        #[arg(long)]
        cost: Option<i64>,

        /// Redeem a reward for --member
        #[arg(long = "redeem", value_name = "ID")]
        redeem: Option<i64>,

        #[arg(long = "member", value_name = "MEMBER_ID")]
        member: Option<i64>,

        #[arg(long = "list")]
        list: bool,
    },

    /// Manage pinned family notes
    Note {
        #[arg(long = "add", value_name = "TITLE")]
        add: Option<String>,

        #[arg(long)]
        content: Option<String>,

        #[arg(long, help = "Priority: low, medium or high")]
        priority: Option<String>,

        #[arg(long = "author", value_name = "MEMBER_ID")]
        author: Option<i64>,

        #[arg(long = "pin", value_name = "ID")]
        pin: Option<i64>,

        #[arg(long = "done", value_name = "ID")]
        done: Option<i64>,

        #[arg(long = "del", value_name = "ID")]
        del: Option<i64>,

        #[arg(long = "list")]
        list: bool,
    },

    /// Show the activity feed (newest first)
    Activity {
        #[arg(long = "limit", default_value = "50")]
        limit: i64,
    },

    /// Export calendar events
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(
            long,
            value_name = "RANGE",
            help = "Filter export by year/month/day or a custom range"
        )]
        range: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,
    },
}
