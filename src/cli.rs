use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "course-miniapp")]
#[command(author, version, about = "Browse courses and request lecture files from the Mini App backend", long_about = None)]
pub struct Cli {
    /// Raw Telegram initData used as the host identity
    #[arg(long, global = true, env = "TELEGRAM_INIT_DATA")]
    pub init_data: Option<String>,

    /// Log at debug level
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Load and print the course list
    Courses,

    /// Load and print the topics of a course
    Topics {
        /// Course id
        course_id: i64,

        /// Title shown above the topic list
        #[arg(short, long)]
        title: Option<String>,

        /// Only show topics whose title contains this text (case-insensitive)
        #[arg(short, long)]
        filter: Option<String>,
    },

    /// Ask the bot to deliver a file to the user's chat
    Request {
        /// Telegram file id
        file_id: String,
    },

    /// Load the courses, then open every course in turn
    Browse,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
