use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use astar_cli::commands::graph::{handle_graph_command, GraphCommandArgs};
use astar_cli::commands::maze::{handle_maze_command, MazeCommandArgs};
use astar_cli::maze::Cell;
use astar_cli::OutputFormat;

#[derive(Parser, Debug)]
#[command(author, version, about = "A* shortest-path search over mazes and point graphs")]
struct Cli {
    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Solve a floor-plan maze and print it with the route marked.
    Maze {
        /// Maze file: `#` for walls, spaces for open floor.
        #[arg(long)]
        file: PathBuf,
        /// Start cell as x,y (default: open cell nearest the bottom-left corner).
        #[arg(long)]
        start: Option<Cell>,
        /// Destination cell as x,y (default: open cell nearest the top-right corner).
        #[arg(long)]
        dest: Option<Cell>,
    },
    /// Route between two named points of a JSON point graph.
    Graph {
        /// Point-graph JSON file.
        #[arg(long)]
        file: PathBuf,
        /// Starting point name.
        #[arg(long = "from")]
        from: String,
        /// Destination point name.
        #[arg(long = "to")]
        to: String,
    },
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let mut stdout = io::stdout().lock();

    match cli.command {
        Command::Maze { file, start, dest } => {
            let args = MazeCommandArgs { file, start, dest };
            handle_maze_command(&mut stdout, &args, cli.format)
        }
        Command::Graph { file, from, to } => {
            let args = GraphCommandArgs { file, from, to };
            handle_graph_command(&mut stdout, &args, cli.format)
        }
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
